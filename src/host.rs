//! The pieces of the browser the page depends on, behind small traits so the
//! subscribe/release bookkeeping can be exercised without a DOM.

use log::debug;

use crate::error::HostError;

pub mod browser;
#[cfg(test)]
pub mod fake;

pub use browser::BrowserHost;

/// Page scroll position and its change notifications.
pub trait ScrollSignal {
    type Listener;

    /// Current vertical offset in CSS pixels.
    fn offset(&self) -> f64;
    fn listen(&self, on_scroll: Box<dyn FnMut(f64)>) -> Result<Self::Listener, HostError>;
    fn unlisten(&self, listener: Self::Listener);
}

/// Viewport intersection reporting for every element carrying `attr`.
///
/// The callback receives the element's `attr` value and whether it is now
/// intersecting at `threshold` or more.
pub trait VisibilityWatcher {
    type Watch;

    fn watch(
        &self,
        attr: &str,
        threshold: f64,
        on_change: Box<dyn FnMut(String, bool)>,
    ) -> Result<Self::Watch, HostError>;
    fn release(&self, watch: Self::Watch);
}

/// Whether an intersection report counts as on screen. Some browsers set
/// `isIntersecting` for any overlap, so the ratio is checked as well.
pub fn meets_threshold(intersecting: bool, ratio: f64, threshold: f64) -> bool {
    intersecting && ratio >= threshold
}

pub trait SectionScroller {
    /// Smooth-scrolls the element with `id` into view. Returns false, and does
    /// nothing, when no such element exists.
    fn scroll_to_section(&self, id: &str) -> bool;
}

/// A scroll listener that is removed when dropped.
pub struct ScrollSubscription<S: ScrollSignal> {
    signal: S,
    listener: Option<S::Listener>,
}

impl<S: ScrollSignal> ScrollSubscription<S> {
    pub fn attach(signal: S, on_scroll: impl FnMut(f64) + 'static) -> Result<Self, HostError> {
        let listener = signal.listen(Box::new(on_scroll))?;
        debug!("scroll listener attached");
        Ok(Self {
            signal,
            listener: Some(listener),
        })
    }
}

impl<S: ScrollSignal> Drop for ScrollSubscription<S> {
    fn drop(&mut self) {
        if let Some(listener) = self.listener.take() {
            self.signal.unlisten(listener);
            debug!("scroll listener detached");
        }
    }
}

/// A running visibility watch, released when dropped.
pub struct RevealWatch<W: VisibilityWatcher> {
    watcher: W,
    watch: Option<W::Watch>,
}

impl<W: VisibilityWatcher> RevealWatch<W> {
    pub fn start(
        watcher: W,
        attr: &str,
        threshold: f64,
        on_change: impl FnMut(String, bool) + 'static,
    ) -> Result<Self, HostError> {
        let watch = watcher.watch(attr, threshold, Box::new(on_change))?;
        debug!("watching [{}] at threshold {}", attr, threshold);
        Ok(Self {
            watcher,
            watch: Some(watch),
        })
    }
}

impl<W: VisibilityWatcher> Drop for RevealWatch<W> {
    fn drop(&mut self) {
        if let Some(watch) = self.watch.take() {
            self.watcher.release(watch);
            debug!("visibility watch released");
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    use yew::Reducible;

    use super::fake::FakeHost;
    use super::*;
    use crate::state::nav::{NavAction, NavState};
    use crate::state::reveal::{RevealAction, RevealState, REVEAL_ATTR, REVEAL_THRESHOLD};

    #[test]
    fn scroll_subscription_feeds_nav_state() {
        let host = FakeHost::default();
        let state = Rc::new(RefCell::new(Rc::new(NavState::default())));
        let sink = state.clone();
        let _subscription = ScrollSubscription::attach(host.clone(), move |offset| {
            let next = sink.borrow().clone().reduce(NavAction::Scrolled(offset));
            *sink.borrow_mut() = next;
        })
        .unwrap();

        host.scroll_to(50.0);
        assert!(!state.borrow().scrolled);
        host.scroll_to(51.0);
        assert!(state.borrow().scrolled);
        assert_eq!(host.offset(), 51.0);
    }

    #[test]
    fn dropping_guards_leaves_nothing_attached() {
        let host = FakeHost::default();
        let calls = Rc::new(Cell::new(0));
        {
            let counter = calls.clone();
            let _scroll = ScrollSubscription::attach(host.clone(), move |_| {
                counter.set(counter.get() + 1)
            })
            .unwrap();
            let _watch = RevealWatch::start(host.clone(), REVEAL_ATTR, REVEAL_THRESHOLD, |_, _| {})
                .unwrap();
            assert_eq!(host.active_listeners(), 1);
            assert_eq!(host.active_watches(), 1);
            host.scroll_to(10.0);
        }
        assert_eq!(host.active_listeners(), 0);
        assert_eq!(host.active_watches(), 0);

        host.scroll_to(90.0);
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn remounting_does_not_accumulate_handles() {
        let host = FakeHost::default();
        for _ in 0..10 {
            let scroll = ScrollSubscription::attach(host.clone(), |_| {}).unwrap();
            let watch =
                RevealWatch::start(host.clone(), REVEAL_ATTR, REVEAL_THRESHOLD, |_, _| {}).unwrap();
            assert_eq!(host.active_listeners(), 1);
            assert_eq!(host.active_watches(), 1);
            drop(watch);
            drop(scroll);
        }
        assert_eq!(host.active_listeners(), 0);
        assert_eq!(host.active_watches(), 0);
    }

    #[test]
    fn watch_drives_one_shot_reveal() {
        let host = FakeHost::default();
        let state = Rc::new(RefCell::new(Rc::new(RevealState::default())));
        let sink = state.clone();
        let _watch = RevealWatch::start(host.clone(), REVEAL_ATTR, REVEAL_THRESHOLD, move |key, intersecting| {
            let next = sink
                .borrow()
                .clone()
                .reduce(RevealAction::Visibility { key, intersecting });
            *sink.borrow_mut() = next;
        })
        .unwrap();

        assert_eq!(host.watch_threshold(), Some(REVEAL_THRESHOLD));
        host.report("services-title", true);
        host.report("services-title", false);
        host.report("services-title", true);
        host.report("services-title", false);
        assert!(state.borrow().is_revealed("services-title"));
        assert_eq!(state.borrow().revealed_count(), 1);
    }

    #[test]
    fn unsupported_watcher_is_an_error_and_holds_nothing() {
        let host = FakeHost::without_intersection();
        let result = RevealWatch::start(host.clone(), REVEAL_ATTR, REVEAL_THRESHOLD, |_, _| {});
        assert!(matches!(result, Err(HostError::Unsupported(_))));
        assert_eq!(host.active_watches(), 0);
    }

    #[test]
    fn overlap_below_threshold_does_not_count() {
        assert!(!meets_threshold(true, 0.0, REVEAL_THRESHOLD));
        assert!(!meets_threshold(true, 0.05, REVEAL_THRESHOLD));
        assert!(meets_threshold(true, 0.1, REVEAL_THRESHOLD));
        assert!(meets_threshold(true, 1.0, REVEAL_THRESHOLD));
        assert!(!meets_threshold(false, 0.5, REVEAL_THRESHOLD));
    }

    #[test]
    fn sliver_overlap_leaves_element_hidden() {
        let mut state = Rc::new(RevealState::default());
        for (ratio, intersecting) in [(0.02, true), (0.08, true), (0.0, false)] {
            let visible = meets_threshold(intersecting, ratio, REVEAL_THRESHOLD);
            state = state.reduce(RevealAction::Visibility {
                key: "location-map".into(),
                intersecting: visible,
            });
        }
        assert!(!state.is_revealed("location-map"));

        let visible = meets_threshold(true, 0.12, REVEAL_THRESHOLD);
        state = state.reduce(RevealAction::Visibility {
            key: "location-map".into(),
            intersecting: visible,
        });
        assert!(state.is_revealed("location-map"));
    }

    #[test]
    fn scrolling_to_missing_section_is_a_no_op() {
        let host = FakeHost::with_sections(&["home", "servicos"]);
        assert!(host.scroll_to_section("servicos"));
        assert!(!host.scroll_to_section("nowhere"));
        assert_eq!(host.scrolled_sections(), vec!["servicos".to_string()]);
    }
}
