use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct TestimonialProps {
    #[prop_or_default]
    pub name: Option<AttrValue>,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(Testimonial)]
pub fn testimonial(props: &TestimonialProps) -> Html {
    html! {
        <article class="testimonial">
            {
                if let Some(name) = &props.name {
                    html! { <h3>{name.clone()}</h3> }
                } else {
                    html! {}
                }
            }
            { for props.children.iter() }
        </article>
    }
}

#[derive(Properties, PartialEq)]
pub struct PillarProps {
    pub title: AttrValue,
    pub what: AttrValue,
    pub result: AttrValue,
    pub feeling: AttrValue,
}

/// One of the three method pillars. Tilts towards the pointer.
#[function_component(PillarCard)]
pub fn pillar_card(props: &PillarProps) -> Html {
    html! {
        <article class="ritual-card tilt">
            <h3>{props.title.clone()}</h3>
            <p>{"O que é: "}{props.what.clone()}</p>
            <p>{"Resultado: "}{props.result.clone()}</p>
            <p>{"Como vai se sentir: "}{props.feeling.clone()}</p>
        </article>
    }
}

#[derive(Properties, PartialEq)]
pub struct StatProps {
    pub value: i64,
    #[prop_or_default]
    pub suffix: AttrValue,
    pub label: AttrValue,
}

/// Counts up to `value` once scrolled into view.
#[function_component(Stat)]
pub fn stat(props: &StatProps) -> Html {
    html! {
        <div class="stat">
            <span
                class="stat-value"
                data-count={props.value.to_string()}
                data-suffix={props.suffix.clone()}
            >
                {format!("0{}", props.suffix)}
            </span>
            <span class="stat-label">{props.label.clone()}</span>
        </div>
    }
}
