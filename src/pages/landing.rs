use log::warn;
use yew::prelude::*;
use yew_hooks::use_effect_once;

use crate::components::cards::{PillarCard, Stat, Testimonial};
use crate::components::cta::WhatsAppButton;
use crate::config::MotionConfig;
use crate::motion::{Controller, WebPlatform};

const MILESTONES: &[&str] = &[
    "Primeiros 30 dias: +10% de energia, primeira mudança visível no corpo",
    "6 meses: -12kg, disposição em níveis que eu nunca imaginei",
    "1 ano: corpo remodelado, testosterona normalizada, mental afiada",
    "Hoje: energia infinita, libido alta, corpo forte, me sinto um viking",
];

const MEALS: &[&str] = &[
    "Café da manhã: carne com gordura, energia alta",
    "Almoço: proteína animal, gordura boa, queima ativa",
    "Jantar: refeição estratégica, hormônios equilibrados",
];

const PILLS: &[&str] = &["Sem frescura", "Sem sofrimento", "Só resultados"];

const OFFER: &[&str] = &[
    "TREINAMENTO SELVA – Mais de 20 aulas! Aprenda tudo sobre a Dieta da Selva, jejum estratégico e exposição ao sol diário para maximizar queima de gordura, energia e testosterona.",
    "REFEIÇÕES E LISTA DE COMPRAS – Saiba exatamente como montar suas refeições, o que comprar e como comer sem passar fome, seguindo a dieta animal based.",
    "COMUNIDADE SELVA – Grupo exclusivo para compartilhar resultados, tirar dúvidas, trocar experiências e manter a motivação sempre lá em cima.",
    "SUPORTE DIRETO COMIGO – Tire suas dúvidas e receba orientação direta comigo para garantir que você siga o método sem erros.",
    "ATUALIZAÇÕES FUTURAS – Conteúdos novos, técnicas e ajustes liberados constantemente para manter seus resultados sempre crescendo.",
];

#[function_component(Landing)]
pub fn landing() -> Html {
    // Effects are wired once the markup is in the document and torn down on unmount.
    use_effect_once(|| {
        let config = MotionConfig::default();
        let handle = match WebPlatform::new(&config.locale) {
            Some(platform) => Some(Controller::new(platform, config).initialize()),
            None => {
                warn!("No browser document, rendering without motion");
                None
            }
        };
        move || {
            if let Some(handle) = handle {
                handle.dispose();
            }
        }
    });

    html! {
        <div class="landing-page">
            <div class="cursor-glow" aria-hidden="true"></div>

            <header class="hero" id="topo">
                <div class="hero-icons hero-visual" aria-hidden="true">
                    <span class="hero-icon icon-body" data-parallax="6"></span>
                    <span class="hero-icon icon-energy" data-parallax="10"></span>
                    <span class="hero-icon icon-libido" data-parallax="14"></span>
                </div>
                <div class="hero-grid">
                    <div class="hero-copy">
                        <div class="hero-alert" data-animate="true">
                            <span>{"LEIA ANTES QUE SAIA DO AR"}</span>
                        </div>
                        <h1 data-animate="true">
                            {"Transforme seu Corpo, Energia e Libido com uma dieta que a Indústria não quer que você saiba"}
                        </h1>
                        <p class="lead" data-animate="true">{"É 03:17 da manhã."}</p>
                    </div>
                </div>
            </header>

            <main>
                <section class="section reveal" id="historia">
                    <div class="section-body story-stack">
                        <p>{"Você está deitado na cama, rolando de um lado para o outro, olhando pro teto, enquanto pensa:"}</p>
                        <blockquote>
                            <p>{"\"Por que todo mundo consegue resultados e eu não? Por que eu ainda me sinto inchado, cansado e sem energia, mesmo me matando na academia e contando cada caloria?\""}</p>
                        </blockquote>
                        <p>{"O celular vibra. É um amigo que você vê como “menos disciplinado que você” postando no Instagram: perdeu peso, ganhou músculo, tá com energia lá em cima."}</p>
                        <p>{"Você sente uma pontada de raiva e frustração. Tudo que você já ouviu:"}</p>
                        <blockquote>
                            <p>{"\"Tem que passar fome pra emagrecer, comer de 3 em 3 horas, suar sangue na academia\""}</p>
                        </blockquote>
                        <p>{"...não funcionou pra você. E olha, ninguém fala que isso pode estar te fazendo piorar ainda mais."}</p>
                    </div>
                </section>

                <div class="section-divider" aria-hidden="true"></div>

                <section class="section reveal" id="verdade">
                    <div class="section-body story-stack">
                        <p>{"O problema: você segue o que todos dizem que é certo, mas o corpo não responde. A cada refeição, sente inchaço, preguiça, irritação. E o pior: sente que o tempo tá contra você."}</p>
                        <p>{"Aqui está a verdade brutal: a mentalidade de vítima é uma armadilha."}</p>
                        <p>{"Você pensa:"}</p>
                        <blockquote>
                            <p>{"\"Não é justo… eu merecia mais… por que funciona pros outros e não pra mim?\""}</p>
                        </blockquote>
                        <p>{"Quebre essa narrativa agora: funciona pros outros porque eles descobriram um princípio que você ainda não entendeu."}</p>
                        <p>{"É percepção sobre conhecimento. Saber comer certo, na hora certa, com os alimentos certos, pode ser mais poderoso que treinar 7x por semana e morrer de fome."}</p>
                        <p>{"Seu corpo não precisa de restrição, calorias contadas ou academia. Ele precisa de alimentos que ativem seus hormônios, queimem gordura e aumentem testosterona naturalmente."}</p>
                        <p>{"Se você não está pronto para isso, feche esta página AGORA. Este método é para quem quer resultados reais, sem firulas."}</p>
                    </div>
                </section>

                <section class="section reveal">
                    <div class="callout">
                        <p>{"Jogue para vencer. Pare de perder tempo com métodos que nunca funcionaram."}</p>
                    </div>
                </section>

                <section class="section reveal" id="daniel">
                    <div class="bio-grid">
                        <div class="bio-copy">
                            <div class="section-body story-stack">
                                <p>{"Meu nome é Daniel Nou."}</p>
                                <p>{"Eu estive no mesmo lugar que você: sobrepeso, sem testosterona, libido baixa, sem disposição."}</p>
                                <p>{"Hoje sou o que chamo de superhomem da vida real."}</p>
                            </div>
                        </div>
                        <div class="bio-photo">
                            <picture>
                                <img src="/images/danielnou.webp" alt="Daniel Nou" loading="lazy" />
                            </picture>
                        </div>
                    </div>
                    <div class="track-grid">
                        { for MILESTONES.iter().map(|milestone| html! {
                            <div class="track-card"><p>{*milestone}</p></div>
                        }) }
                    </div>
                    <div class="section-body story-stack">
                        <p>{"Eu não estou vendendo algo que eu não usei. Estou vendendo um método que funcionou na minha vida e na vida de pessoas comuns como você."}</p>
                    </div>
                </section>

                <section class="section reveal" id="depoimentos">
                    <div class="section-body story-stack">
                        <p>{"Meus clientes vivem mudanças semelhantes:"}</p>
                    </div>
                    <div class="testimonials-grid">
                        <Testimonial name={"Aumauri, 50 anos:"}>
                            <p>{"-16kg, disposição elevada, menos inchado, pré-diabetes eliminado, testosterona alta. Ele mesmo disse:"}</p>
                            <p>{"\"Me sinto como um Viking!\""}</p>
                        </Testimonial>
                        <Testimonial>
                            <p>{"Depoimentos Variados de mais 4 pessoas que tiveram resultados em poucos dias"}</p>
                        </Testimonial>
                        <Testimonial name={"Sérgio Nascimento:"}>
                            <p>{"Hoje quase 2 meses de protocolo selva saindo de 120 kg para 107 kg, 13 kg a menos, mais disposição, mais energia, sem sentir o corpo inchado, sem dores no corpo, hoje posso afirmar com toda a certeza que a dieta da selva mudou a minha vida."}</p>
                        </Testimonial>
                    </div>
                </section>

                <section class="section reveal" id="protocolo">
                    <div class="section-body story-stack">
                        <p>{"Apresento a você o PROTOCOLO SELVA — o método BRUTAL e EFICAZ para emagrecer e ganhar massa, sem academia, sem passar fome, comendo carne com gordura."}</p>
                        <p>{"Três pilares:"}</p>
                    </div>
                    <div class="rituals-grid">
                        <PillarCard
                            title="FOME ZERO"
                            what="Comer alimentos ricos em gordura e proteína, satisfazendo o corpo"
                            result="Sem fome, energia constante"
                            feeling="Livre da ansiedade por comida"
                        />
                        <PillarCard
                            title="QUEIMA MÁXIMA"
                            what="Estratégia de alimentação que ativa a queima de gordura naturalmente"
                            result="Redução de gordura mesmo em repouso"
                            feeling="Corpo mais leve, menos inchado, inflamado"
                        />
                        <PillarCard
                            title="DISPOSIÇÃO SELVAGEM"
                            what="Reeducação hormonal com alimentos certos"
                            result="Testosterona elevada, libido em alta, músculos mais definidos"
                            feeling="Confiança, vigor e masculinidade aflorada"
                        />
                    </div>
                </section>

                <section class="section reveal" id="comparacao">
                    <div class="section-body story-stack">
                        <p>{"Método tradicional vs Protocolo Selva"}</p>
                    </div>
                    <div class="stats-grid">
                        <Stat value={3} suffix="%" label="de sucesso na dieta comum" />
                        <Stat value={87} suffix="%" label="de sucesso real no Protocolo Selva" />
                        <Stat value={20} suffix="+" label="aulas no Treinamento Selva" />
                    </div>
                    <div class="section-body story-stack">
                        <p>{"Contagem de calorias, fome, academia exaustiva. Por que tão pouco?"}</p>
                        <p>{"Porque o corpo humano não foi feito pra restrição — foi feito pra sobrevivência."}</p>
                        <p>{"Quando você corta calorias e vive com fome, o corpo entra em modo defesa, desacelera o metabolismo, retém gordura e rouba sua energia."}</p>
                        <p>{"Carne com gordura, energia máxima, corpo respondendo naturalmente. Você dá ao corpo o combustível certo e ele entende o sinal —"}</p>
                        <blockquote>
                            <p>{"“estou seguro, posso queimar, posso crescer.”"}</p>
                        </blockquote>
                        <p>{"é biologia, não sacrifício."}</p>
                    </div>
                </section>

                <section class="section reveal" id="exemplos">
                    <div class="section-body story-stack">
                        <p>{"Você terá exemplos práticos, como:"}</p>
                        <div class="line-list">
                            { for MEALS.iter().map(|meal| html! { <p>{*meal}</p> }) }
                        </div>
                        <p>{"Imagine se seu corpo virasse um ímã de força, energia e resultado."}</p>
                        <p>{"O Protocolo Selva faz isso acontecer — mas as vagas são poucas, e o momento é agora."}</p>
                        <div class="pill-list">
                            { for PILLS.iter().map(|pill| html! { <span>{*pill}</span> }) }
                        </div>
                    </div>
                </section>

                <section class="section reveal" id="recebe">
                    <div class="section-body story-stack">
                        <p>{"O que você recebe ao entrar no PROTOCOLO SELVA:"}</p>
                    </div>
                    <div class="manifesto-grid">
                        { for OFFER.iter().map(|item| html! {
                            <article class="manifesto-card"><p>{*item}</p></article>
                        }) }
                    </div>
                </section>

                <section class="section cta reveal" id="cta">
                    <div class="cta-card">
                        <div class="section-body story-stack">
                            <p>{"As vagas são LIMITADAS."}</p>
                            <p>{"Não entre se você não estiver pronto para resultados reais."}</p>
                            <p>{"Se você não agir agora, vai ter que esperar meses para próxima abertura."}</p>
                            <p>{"Decida agora:"}</p>
                            <p>{"Clique abaixo e me chame no WhatsApp para entender como funciona e comece a transformar seu corpo, energia e vida com o PROTOCOLO SELVA."}</p>
                        </div>
                        <div class="cta-actions">
                            <WhatsAppButton />
                        </div>
                        <p class="attention">
                            {"ATENÇÃO: Se você ainda quer contar calorias, passar fome e treinar sem parar, este método não é pra você."}
                        </p>
                    </div>
                </section>
            </main>
        </div>
    }
}
