use js_sys::{Array, Reflect};
use log::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Document, Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
    ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition, Window,
};

use super::{meets_threshold, ScrollSignal, SectionScroller, VisibilityWatcher};
use crate::error::HostError;

type ObserverCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

/// The real page.
#[derive(Clone)]
pub struct BrowserHost {
    window: Window,
}

/// An observer together with the closure it calls back into. The closure has
/// to outlive the observer.
pub struct BrowserWatch {
    observer: IntersectionObserver,
    _callback: ObserverCallback,
}

impl BrowserHost {
    pub fn current() -> Result<Self, HostError> {
        let window = web_sys::window().ok_or(HostError::NoWindow)?;
        Ok(Self { window })
    }

    fn document(&self) -> Result<Document, HostError> {
        self.window.document().ok_or(HostError::NoDocument)
    }

    fn supports(&self, api: &'static str) -> bool {
        Reflect::has(&self.window, &JsValue::from_str(api)).unwrap_or(false)
    }
}

impl ScrollSignal for BrowserHost {
    type Listener = Closure<dyn FnMut()>;

    fn offset(&self) -> f64 {
        self.window.scroll_y().unwrap_or(0.0)
    }

    fn listen(&self, mut on_scroll: Box<dyn FnMut(f64)>) -> Result<Self::Listener, HostError> {
        let window = self.window.clone();
        let callback = Closure::wrap(Box::new(move || {
            on_scroll(window.scroll_y().unwrap_or(0.0));
        }) as Box<dyn FnMut()>);

        self.window
            .add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref())?;
        Ok(callback)
    }

    fn unlisten(&self, listener: Self::Listener) {
        if let Err(err) = self
            .window
            .remove_event_listener_with_callback("scroll", listener.as_ref().unchecked_ref())
        {
            warn!("failed to remove scroll listener: {:?}", err);
        }
    }
}

impl VisibilityWatcher for BrowserHost {
    type Watch = BrowserWatch;

    fn watch(
        &self,
        attr: &str,
        threshold: f64,
        mut on_change: Box<dyn FnMut(String, bool)>,
    ) -> Result<BrowserWatch, HostError> {
        if !self.supports("IntersectionObserver") {
            return Err(HostError::Unsupported("IntersectionObserver"));
        }

        let key_attr = attr.to_string();
        let callback: ObserverCallback = Closure::wrap(Box::new(
            move |entries: Array, _observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let entry: IntersectionObserverEntry = entry.unchecked_into();
                    if let Some(key) = entry.target().get_attribute(&key_attr) {
                        let visible = meets_threshold(
                            entry.is_intersecting(),
                            entry.intersection_ratio(),
                            threshold,
                        );
                        on_change(key, visible);
                    }
                }
            },
        ) as Box<dyn FnMut(Array, IntersectionObserver)>);

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(threshold));
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;

        let nodes = self.document()?.query_selector_all(&format!("[{}]", attr))?;
        let mut observed = 0;
        for i in 0..nodes.length() {
            if let Some(element) = nodes.item(i).and_then(|n| n.dyn_into::<Element>().ok()) {
                observer.observe(&element);
                observed += 1;
            }
        }
        debug!("observing {} elements", observed);

        Ok(BrowserWatch {
            observer,
            _callback: callback,
        })
    }

    fn release(&self, watch: BrowserWatch) {
        watch.observer.disconnect();
    }
}

impl SectionScroller for BrowserHost {
    fn scroll_to_section(&self, id: &str) -> bool {
        let Some(target) = self.document().ok().and_then(|d| d.get_element_by_id(id)) else {
            debug!("no section with id {}", id);
            return false;
        };

        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        options.set_block(ScrollLogicalPosition::Start);
        target.scroll_into_view_with_scroll_into_view_options(&options);
        true
    }
}
