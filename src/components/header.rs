use log::{debug, warn};
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::config::{Brand, NavLink};
use crate::host::{BrowserHost, ScrollSignal, ScrollSubscription, SectionScroller};
use crate::state::nav::{NavAction, NavState};

/// Closes the menu, then brings `id` into view. Unknown ids are ignored.
fn navigate_to(nav: &UseReducerDispatcher<NavState>, id: &str) {
    nav.dispatch(NavAction::Navigated);
    match BrowserHost::current() {
        Ok(host) => {
            host.scroll_to_section(id);
        }
        Err(err) => debug!("cannot scroll to {}: {}", id, err),
    }
}

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub brand: Brand,
    pub links: Vec<NavLink>,
    pub home_id: AttrValue,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let nav = use_reducer(NavState::default);

    {
        let dispatcher = nav.dispatcher();
        use_effect_with_deps(
            move |_| {
                let subscription = BrowserHost::current().and_then(|host| {
                    // Initial check, the page may load already scrolled.
                    dispatcher.dispatch(NavAction::Scrolled(host.offset()));
                    let dispatcher = dispatcher.clone();
                    ScrollSubscription::attach(host, move |offset| {
                        dispatcher.dispatch(NavAction::Scrolled(offset));
                    })
                });
                if let Err(err) = &subscription {
                    warn!("header scroll tracking unavailable: {}", err);
                }

                move || drop(subscription)
            },
            (),
        );
    }

    let toggle_menu = {
        let dispatcher = nav.dispatcher();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            dispatcher.dispatch(NavAction::ToggleMenu);
        })
    };

    let go_home = {
        let dispatcher = nav.dispatcher();
        let home_id = props.home_id.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            navigate_to(&dispatcher, &home_id);
        })
    };

    let links = props.links.iter().map(|link| {
        let dispatcher = nav.dispatcher();
        let id = link.id.clone();
        let onclick = Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            navigate_to(&dispatcher, &id);
        });
        html! {
            <a key={link.id.clone()} href={format!("#{}", link.id)} {onclick}>
                {link.label.clone()}
            </a>
        }
    });

    html! {
        <header class={classes!(nav.scrolled.then_some("scrolled"))}>
            <a href="#" class="logo" onclick={go_home}>
                {props.brand.name.clone()}{" "}<span class="text-gold">{props.brand.accent.clone()}</span>
            </a>
            <div class="hamburger" onclick={toggle_menu}>
                <div class="bar"></div>
                <div class="bar"></div>
                <div class="bar"></div>
            </div>
            <nav class={classes!("nav-links", nav.menu_open.then_some("active"))}>
                { for links }
            </nav>
            <style>
                {r#"
                header {
                    position: fixed;
                    top: 0;
                    width: 100%;
                    padding: 1.5rem 5%;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    z-index: 1000;
                    transition: all 0.4s ease;
                }

                header.scrolled {
                    background-color: rgba(15, 15, 15, 0.95);
                    box-shadow: 0 4px 20px rgba(0,0,0,0.5);
                    padding: 1rem 5%;
                }

                .nav-links {
                    display: flex;
                    gap: 2rem;
                }

                .nav-links a {
                    color: white;
                    text-decoration: none;
                    font-weight: 500;
                    text-transform: uppercase;
                    font-size: 0.9rem;
                    letter-spacing: 1px;
                    position: relative;
                    transition: color 0.3s;
                }

                .nav-links a::after {
                    content: '';
                    position: absolute;
                    width: 0;
                    height: 2px;
                    bottom: -5px;
                    left: 0;
                    background-color: var(--gold);
                    transition: width 0.3s;
                }

                .nav-links a:hover {
                    color: var(--gold);
                }

                .nav-links a:hover::after {
                    width: 100%;
                }

                .hamburger {
                    display: none;
                    cursor: pointer;
                    flex-direction: column;
                    gap: 5px;
                }

                .bar {
                    width: 25px;
                    height: 3px;
                    background-color: var(--gold);
                }

                @media (max-width: 768px) {
                    .hamburger {
                        display: flex;
                    }

                    .nav-links {
                        position: absolute;
                        top: 70px;
                        right: 0;
                        width: 100%;
                        background-color: rgba(10, 10, 10, 0.98);
                        flex-direction: column;
                        align-items: center;
                        padding: 2rem 0;
                        transform: translateY(-150%);
                        transition: transform 0.4s ease;
                    }

                    .nav-links.active {
                        transform: translateY(0);
                    }
                }
                "#}
            </style>
        </header>
    }
}
