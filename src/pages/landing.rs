use std::rc::Rc;

use chrono::Datelike;
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::components::reveal::use_reveal;
use crate::config::SiteConfig;

pub const HOME_ID: &str = "home";
pub const SERVICES_ID: &str = "servicos";
pub const SCHEDULE_ID: &str = "agendamento";
pub const CONTACT_ID: &str = "contato";

/// Every section a nav link may target.
#[cfg(test)]
pub const SECTION_IDS: [&str; 4] = [HOME_ID, SERVICES_ID, SCHEDULE_ID, CONTACT_ID];

#[derive(Properties, PartialEq)]
pub struct SectionProps {
    pub site: Rc<SiteConfig>,
    #[prop_or_default]
    pub on_book: Callback<()>,
}

fn book_click(on_book: &Callback<()>) -> Callback<MouseEvent> {
    on_book.reform(|_: MouseEvent| ())
}

#[function_component(Hero)]
fn hero(props: &SectionProps) -> Html {
    let reveal = use_reveal();
    let hero = &props.site.hero;

    html! {
        <section id={HOME_ID} class="hero">
            <h1 class={reveal.classes("hero-title", classes!())} data-reveal="hero-title">
                {hero.title.clone()}{" "}<span class="text-gold">{hero.accent.clone()}</span>
            </h1>
            <p
                class={reveal.classes("hero-tagline", classes!())}
                data-reveal="hero-tagline"
                style="transition-delay: 0.2s;"
            >
                {hero.tagline.clone()}
            </p>
            <button onclick={book_click(&props.on_book)} class="btn btn-primary">
                {hero.cta.clone()}
            </button>
        </section>
    }
}

#[function_component(Services)]
fn services(props: &SectionProps) -> Html {
    let reveal = use_reveal();

    html! {
        <section id={SERVICES_ID} class="bg-translucent">
            <h2 class={reveal.classes("services-title", "section-title")} data-reveal="services-title">
                {"Nossos "}<span class="text-gold">{"Serviços"}</span>
            </h2>
            <p class={reveal.classes("services-subtitle", "section-subtitle")} data-reveal="services-subtitle">
                {"Precisão, estilo e cuidado em cada detalhe."}
            </p>
            <div class="services-grid">
                {
                    props.site.services.iter().enumerate().map(|(idx, service)| {
                        let key = format!("service-{}", idx);
                        html! {
                            <div
                                key={key.clone()}
                                class={reveal.classes(&key, "card")}
                                data-reveal={key.clone()}
                                style={format!("transition-delay: {}ms;", idx * 100)}
                            >
                                <h3 class="text-gold">{service.title.clone()}</h3>
                                <p>{service.description.clone()}</p>
                            </div>
                        }
                    }).collect::<Html>()
                }
            </div>
        </section>
    }
}

#[function_component(Benefits)]
fn benefits(props: &SectionProps) -> Html {
    let reveal = use_reveal();

    html! {
        <section class="bg-dark">
            <h2 class={reveal.classes("benefits-title", "section-title")} data-reveal="benefits-title">
                {"Por que nos "}<span class="text-gold">{"Escolher?"}</span>
            </h2>
            <div class="benefits-container">
                {
                    props.site.benefits.iter().enumerate().map(|(idx, benefit)| {
                        let key = format!("benefit-{}", idx);
                        html! {
                            <div key={key.clone()} class={reveal.classes(&key, "benefit-item")} data-reveal={key.clone()}>
                                <div class="benefit-icon">{"✦"}</div>
                                <div class="benefit-text">
                                    <h4>{benefit.title.clone()}</h4>
                                    <p>{benefit.description.clone()}</p>
                                </div>
                            </div>
                        }
                    }).collect::<Html>()
                }
            </div>
        </section>
    }
}

#[function_component(Schedule)]
fn schedule(props: &SectionProps) -> Html {
    let reveal = use_reveal();
    let schedule = &props.site.schedule;

    html! {
        <section id={SCHEDULE_ID} class="schedule-cta">
            <h2 class={reveal.classes("schedule-title", classes!())} data-reveal="schedule-title">
                {schedule.title.clone()}{" "}<span class="text-gold">{schedule.accent.clone()}</span>
            </h2>
            <p class={reveal.classes("schedule-text", "schedule-text")} data-reveal="schedule-text">
                {schedule.text.clone()}
            </p>
            <button
                onclick={book_click(&props.on_book)}
                class={reveal.classes("schedule-cta", classes!("btn", "btn-primary", "btn-pulse"))}
                data-reveal="schedule-cta"
            >
                {schedule.cta.clone()}
            </button>
        </section>
    }
}

#[function_component(Location)]
fn location(props: &SectionProps) -> Html {
    let reveal = use_reveal();
    let location = &props.site.location;

    html! {
        <section id={CONTACT_ID} class="bg-dark">
            <h2 class={reveal.classes("location-title", "section-title")} data-reveal="location-title">
                {"Onde "}<span class="text-gold">{"Estamos"}</span>
            </h2>
            <p class={reveal.classes("location-address", "section-subtitle")} data-reveal="location-address">
                {location.address.clone()}
            </p>
            <div class={reveal.classes("location-map", "map-container")} data-reveal="location-map">
                <iframe
                    src={location.map_embed_url.clone()}
                    width="100%"
                    height="100%"
                    style="border: 0;"
                    allowfullscreen={true}
                    loading="lazy"
                    referrerpolicy="no-referrer-when-downgrade"
                    title="Google Maps"
                ></iframe>
            </div>
        </section>
    }
}

#[function_component(Footer)]
fn footer(props: &SectionProps) -> Html {
    let site = &props.site;
    let year = chrono::Local::now().year();

    html! {
        <footer>
            <div class="footer-content">
                <div class="logo">
                    {site.brand.name.clone()}{" "}<span class="text-gold">{site.brand.accent.clone()}</span>
                </div>
                <div class="contact-info">
                    <p>{format!("📍 {}", site.location.address)}</p>
                    <p>{"📱 "}<span class="highlight">{site.contact.phone_display.clone()}</span></p>
                    <p>{format!("⏰ {}", site.contact.hours)}</p>
                </div>
            </div>
            <div class="copyright">
                {format!("© {} {}. Todos os direitos reservados.", year, site.brand.full_name)}
            </div>
        </footer>
    }
}

/// The whole page below the header. Every block carrying a `data-reveal`
/// key fades in the first time it scrolls into view.
#[function_component(Landing)]
pub fn landing(props: &SectionProps) -> Html {
    let background = format!("background-image: url('{}');", props.site.background_url);

    html! {
        <>
            <div class="bg-fixed" style={background}></div>
            <div class="bg-overlay"></div>

            <Hero site={props.site.clone()} on_book={props.on_book.clone()} />
            <Services site={props.site.clone()} />
            <Benefits site={props.site.clone()} />
            <Schedule site={props.site.clone()} on_book={props.on_book.clone()} />
            <Location site={props.site.clone()} />
            <Footer site={props.site.clone()} />

            <style>
                {r#"
                :root {
                    --gold: #d4af37;
                    --gold-hover: #b5952f;
                    --black: #0f0f0f;
                    --dark-gray: #1a1a1a;
                    --light-gray: #f4f4f4;
                    --text-gray: #cccccc;
                }

                * {
                    box-sizing: border-box;
                    margin: 0;
                    padding: 0;
                }

                html {
                    scroll-behavior: smooth;
                }

                body {
                    font-family: 'Montserrat', sans-serif;
                    background-color: var(--black);
                    color: var(--light-gray);
                    overflow-x: hidden;
                }

                .bg-fixed {
                    position: fixed;
                    top: 0;
                    left: 0;
                    width: 100%;
                    height: 100vh;
                    background-size: cover;
                    background-position: center;
                    z-index: -2;
                }

                .bg-overlay {
                    position: fixed;
                    top: 0;
                    left: 0;
                    width: 100%;
                    height: 100vh;
                    background: linear-gradient(to bottom, rgba(0,0,0,0.7), rgba(0,0,0,0.9));
                    z-index: -1;
                }

                h1, h2, h3 {
                    font-family: 'Playfair Display', serif;
                    color: white;
                }

                .text-gold {
                    color: var(--gold);
                }

                .section-title {
                    font-size: 2.5rem;
                    text-align: center;
                    margin-bottom: 1rem;
                    text-transform: uppercase;
                    letter-spacing: 2px;
                }

                .section-subtitle {
                    text-align: center;
                    color: var(--gold);
                    font-size: 1.1rem;
                    margin-bottom: 3rem;
                    letter-spacing: 1px;
                }

                .logo {
                    font-size: 1.5rem;
                    font-weight: 700;
                    text-transform: uppercase;
                    letter-spacing: 2px;
                    color: white;
                    text-decoration: none;
                }

                .hero {
                    height: 100vh;
                    display: flex;
                    flex-direction: column;
                    justify-content: center;
                    align-items: center;
                    text-align: center;
                    padding: 0 20px;
                }

                .hero h1 {
                    font-size: 3.5rem;
                    margin-bottom: 1rem;
                    text-shadow: 0 4px 10px rgba(0,0,0,0.5);
                }

                .hero p {
                    font-size: 1.2rem;
                    color: var(--text-gray);
                    margin-bottom: 2.5rem;
                    max-width: 600px;
                }

                .btn {
                    padding: 1rem 2.5rem;
                    border: 2px solid var(--gold);
                    background: transparent;
                    color: var(--gold);
                    font-weight: 700;
                    text-transform: uppercase;
                    cursor: pointer;
                    transition: all 0.3s ease;
                    text-decoration: none;
                    display: inline-block;
                    letter-spacing: 1px;
                }

                .btn-primary {
                    background-color: var(--gold);
                    color: black;
                    opacity: 0;
                    animation: fadeUp 1s forwards 1.1s;
                }

                .btn-primary:hover {
                    background-color: var(--gold-hover);
                    border-color: var(--gold-hover);
                    transform: translateY(-3px);
                    box-shadow: 0 10px 20px rgba(212, 175, 55, 0.2);
                }

                .btn-pulse {
                    animation: pulse 2s infinite;
                }

                section {
                    padding: 6rem 5%;
                    position: relative;
                }

                .bg-dark {
                    background-color: rgba(15, 15, 15, 0.9);
                }

                .bg-translucent {
                    background-color: rgba(26, 26, 26, 0.8);
                    backdrop-filter: blur(5px);
                }

                .services-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(280px, 1fr));
                    gap: 2rem;
                    max-width: 1200px;
                    margin: 0 auto;
                }

                .card {
                    background: rgba(40, 40, 40, 0.4);
                    border: 1px solid rgba(255, 255, 255, 0.05);
                    padding: 2rem;
                    text-align: center;
                    position: relative;
                    overflow: hidden;
                }

                .card:hover {
                    border-color: var(--gold);
                    background: rgba(40, 40, 40, 0.8);
                }

                .card h3 {
                    font-size: 1.5rem;
                    margin-bottom: 1rem;
                    font-family: 'Montserrat', sans-serif;
                }

                .card p {
                    color: var(--text-gray);
                    font-size: 0.95rem;
                    line-height: 1.6;
                }

                .benefits-container {
                    display: flex;
                    flex-wrap: wrap;
                    justify-content: center;
                    gap: 3rem;
                    max-width: 1000px;
                    margin: 0 auto;
                }

                .benefit-item {
                    display: flex;
                    align-items: center;
                    gap: 1rem;
                    flex: 1 1 300px;
                }

                .benefit-icon {
                    font-size: 2rem;
                    color: var(--gold);
                }

                .benefit-text h4 {
                    font-size: 1.2rem;
                    margin-bottom: 0.3rem;
                    color: white;
                }

                .benefit-text p {
                    font-size: 0.9rem;
                    color: var(--text-gray);
                }

                .schedule-cta {
                    text-align: center;
                    padding: 8rem 5%;
                }

                .schedule-text {
                    margin: 2rem 0;
                    color: #ccc;
                }

                .map-container {
                    width: 100%;
                    height: 400px;
                    border: 2px solid var(--dark-gray);
                    filter: grayscale(100%) contrast(1.2);
                }

                .map-container:hover {
                    filter: grayscale(0%);
                }

                footer {
                    background-color: #000;
                    padding: 4rem 5% 2rem;
                    text-align: center;
                    border-top: 1px solid #222;
                }

                .footer-content {
                    display: flex;
                    flex-direction: column;
                    gap: 1.5rem;
                    margin-bottom: 2rem;
                }

                .contact-info p {
                    margin: 0.5rem 0;
                    color: var(--text-gray);
                }

                .highlight {
                    color: var(--gold);
                    font-weight: 600;
                }

                .copyright {
                    font-size: 0.8rem;
                    color: #555;
                    border-top: 1px solid #111;
                    padding-top: 2rem;
                }

                @keyframes fadeUp {
                    to {
                        opacity: 1;
                        transform: translateY(0);
                    }
                }

                @keyframes pulse {
                    0% { transform: scale(1); box-shadow: 0 0 0 0 rgba(212, 175, 55, 0.7); }
                    70% { transform: scale(1.05); box-shadow: 0 0 0 10px rgba(212, 175, 55, 0); }
                    100% { transform: scale(1); box-shadow: 0 0 0 0 rgba(212, 175, 55, 0); }
                }

                /* Revealed blocks settle over 0.8s. */
                .reveal {
                    opacity: 0;
                    transform: translateY(30px);
                    transition: opacity 0.8s ease, transform 0.8s ease;
                }

                .reveal.active {
                    opacity: 1;
                    transform: translateY(0);
                }

                @media (max-width: 768px) {
                    .hero h1 {
                        font-size: 2.5rem;
                    }
                }
                "#}
            </style>
        </>
    }
}
