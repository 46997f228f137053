use log::{info, warn};
use yew::prelude::*;

use crate::host::{BrowserHost, RevealWatch};
use crate::state::reveal::{RevealAction, RevealState, REVEAL_ATTR, REVEAL_THRESHOLD};

pub type RevealContext = UseReducerHandle<RevealState>;

#[derive(Properties, PartialEq)]
pub struct RevealProviderProps {
    pub children: Children,
}

/// Watches every `[data-reveal]` element below it and shares which ones have
/// been seen. The watch lives exactly as long as the provider is mounted.
#[function_component(RevealProvider)]
pub fn reveal_provider(props: &RevealProviderProps) -> Html {
    let reveal = use_reducer(RevealState::default);

    {
        let dispatcher = reveal.dispatcher();
        use_effect_with_deps(
            move |_| {
                let on_change = {
                    let dispatcher = dispatcher.clone();
                    move |key: String, intersecting: bool| {
                        dispatcher.dispatch(RevealAction::Visibility { key, intersecting });
                    }
                };
                let watch = BrowserHost::current().and_then(|host| {
                    RevealWatch::start(host, REVEAL_ATTR, REVEAL_THRESHOLD, on_change)
                });

                if let Err(err) = &watch {
                    warn!("reveal animations disabled: {}", err);
                    info!("showing all content");
                    dispatcher.dispatch(RevealAction::Unsupported);
                }

                move || drop(watch)
            },
            (),
        );
    }

    html! {
        <ContextProvider<RevealContext> context={reveal}>
            { for props.children.iter() }
        </ContextProvider<RevealContext>>
    }
}

/// The shared reveal state. Outside a provider nothing is watched, so
/// everything is shown.
#[hook]
pub fn use_reveal() -> RevealContext {
    let fallback = use_reducer(RevealState::fully_visible);
    use_context::<RevealContext>().unwrap_or(fallback)
}
