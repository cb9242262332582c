use yew::prelude::*;

use crate::config;

#[derive(Properties, PartialEq)]
pub struct WhatsAppButtonProps {
    #[prop_or(AttrValue::Static("👉 CHAMAR NO WHATSAPP! 👈"))]
    pub label: AttrValue,
}

#[function_component(WhatsAppButton)]
pub fn whatsapp_button(props: &WhatsAppButtonProps) -> Html {
    let href = use_memo(|_| config::whatsapp_link(), ());

    html! {
        <a href={(*href).clone()} class="btn btn-primary" data-magnetic="true">
            {props.label.clone()}
        </a>
    }
}
