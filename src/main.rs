use std::rc::Rc;

use log::{debug, error, info};
use yew::prelude::*;

mod booking;
mod config;
mod error;
mod host;
mod state {
    pub mod modal;
    pub mod nav;
    pub mod reveal;
}
mod components {
    pub mod booking_modal;
    pub mod header;
    pub mod reveal;
}
mod pages {
    pub mod landing;
}

use components::{booking_modal::BookingModal, header::Header, reveal::RevealProvider};
use config::SiteConfig;
use pages::landing::{Landing, HOME_ID};
use state::modal::{ModalAction, ModalState};

#[derive(Properties, PartialEq)]
pub struct AppProps {
    pub site: Rc<SiteConfig>,
}

#[function_component]
fn App(props: &AppProps) -> Html {
    let modal = use_reducer(ModalState::default);
    let booking_link = use_memo(|site: &Rc<SiteConfig>| site.booking_link(), props.site.clone());

    let on_book = {
        let dispatcher = modal.dispatcher();
        Callback::from(move |_: ()| {
            debug!("booking modal opened");
            dispatcher.dispatch(ModalAction::Open);
        })
    };

    let on_modal_action = {
        let dispatcher = modal.dispatcher();
        Callback::from(move |action: ModalAction| {
            debug!("booking modal action {:?}", action);
            dispatcher.dispatch(action);
        })
    };

    html! {
        <>
            <Header
                brand={props.site.brand.clone()}
                links={props.site.nav.clone()}
                home_id={HOME_ID}
            />
            <RevealProvider>
                <Landing site={props.site.clone()} {on_book} />
            </RevealProvider>
            <BookingModal
                open={modal.is_open()}
                booking={props.site.booking.clone()}
                link={AttrValue::from((*booking_link).clone())}
                on_action={on_modal_action}
            />
        </>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    match SiteConfig::embedded() {
        Ok(site) => {
            yew::Renderer::<App>::with_props(AppProps {
                site: Rc::new(site),
            })
            .render();
        }
        Err(err) => error!("not rendering: {}", err),
    }
}
