use web_sys::MouseEvent;
use yew::prelude::*;

use crate::config::BookingConfig;
use crate::state::modal::{ClickRegion, ModalAction};

#[derive(Properties, PartialEq)]
pub struct BookingModalProps {
    pub open: bool,
    pub booking: BookingConfig,
    /// Fully encoded deep link for the confirm button.
    pub link: AttrValue,
    pub on_action: Callback<ModalAction>,
}

/// Dialog that hands booking off to WhatsApp. Always rendered so the
/// open/close transition can run; `open` only toggles a class.
#[function_component(BookingModal)]
pub fn booking_modal(props: &BookingModalProps) -> Html {
    let on_backdrop = {
        let on_action = props.on_action.clone();
        Callback::from(move |_: MouseEvent| on_action.emit(ModalAction::Click(ClickRegion::Backdrop)))
    };

    let on_body = {
        let on_action = props.on_action.clone();
        Callback::from(move |e: MouseEvent| {
            // Must stay. Without it the click bubbles to the overlay, whose
            // handler dispatches Click(Backdrop) and closes the dialog.
            e.stop_propagation();
            on_action.emit(ModalAction::Click(ClickRegion::Body));
        })
    };

    let on_close = {
        let on_action = props.on_action.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            on_action.emit(ModalAction::Close);
        })
    };

    html! {
        <div
            class={classes!("modal-overlay", props.open.then_some("open"))}
            aria-hidden={(!props.open).to_string()}
            onclick={on_backdrop}
        >
            <div class="modal-content" role="dialog" aria-modal="true" onclick={on_body}>
                <button class="close-modal" aria-label="Fechar" onclick={on_close}>{"×"}</button>
                <h2 class="modal-title">{props.booking.title.clone()}</h2>
                <p class="modal-text">{props.booking.text.clone()}</p>
                <a
                    href={props.link.clone()}
                    target="_blank"
                    rel="noopener noreferrer"
                    class="btn btn-primary btn-pulse"
                >
                    {props.booking.confirm.clone()}
                </a>
            </div>
            <style>
                {r#"
                .modal-overlay {
                    position: fixed;
                    top: 0;
                    left: 0;
                    width: 100%;
                    height: 100%;
                    background: rgba(0, 0, 0, 0.9);
                    display: flex;
                    justify-content: center;
                    align-items: center;
                    z-index: 2000;
                    opacity: 0;
                    pointer-events: none;
                    transition: opacity 0.3s ease;
                }

                .modal-overlay.open {
                    opacity: 1;
                    pointer-events: all;
                }

                .modal-content {
                    background: var(--dark-gray);
                    border: 1px solid var(--gold);
                    padding: 3rem 2rem;
                    max-width: 500px;
                    width: 90%;
                    text-align: center;
                    position: relative;
                    transform: scale(0.8);
                    transition: transform 0.3s ease;
                }

                .modal-overlay.open .modal-content {
                    transform: scale(1);
                }

                .modal-title {
                    margin-bottom: 1rem;
                    color: var(--gold);
                }

                .modal-text {
                    margin-bottom: 2rem;
                    color: #ccc;
                }

                .modal-content .btn-primary {
                    opacity: 1;
                }

                .close-modal {
                    position: absolute;
                    top: 1rem;
                    right: 1rem;
                    background: none;
                    border: none;
                    color: white;
                    font-size: 1.5rem;
                    cursor: pointer;
                }
                "#}
            </style>
        </div>
    }
}
