use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

use super::{ScrollSignal, SectionScroller, VisibilityWatcher};
use crate::error::HostError;

type ScrollFn = Box<dyn FnMut(f64)>;
type ChangeFn = Box<dyn FnMut(String, bool)>;

#[derive(Default)]
struct Inner {
    offset: f64,
    next_id: usize,
    listeners: BTreeMap<usize, ScrollFn>,
    watches: BTreeMap<usize, (f64, ChangeFn)>,
    no_intersection: bool,
    sections: Vec<String>,
    scrolled_to: Vec<String>,
}

/// In-memory host that records live handles.
#[derive(Clone, Default)]
pub struct FakeHost {
    inner: Rc<RefCell<Inner>>,
}

impl FakeHost {
    pub fn without_intersection() -> Self {
        let host = Self::default();
        host.inner.borrow_mut().no_intersection = true;
        host
    }

    pub fn with_sections(ids: &[&str]) -> Self {
        let host = Self::default();
        host.inner.borrow_mut().sections = ids.iter().map(|id| id.to_string()).collect();
        host
    }

    pub fn active_listeners(&self) -> usize {
        self.inner.borrow().listeners.len()
    }

    pub fn active_watches(&self) -> usize {
        self.inner.borrow().watches.len()
    }

    pub fn watch_threshold(&self) -> Option<f64> {
        self.inner.borrow().watches.values().next().map(|(t, _)| *t)
    }

    pub fn scrolled_sections(&self) -> Vec<String> {
        self.inner.borrow().scrolled_to.clone()
    }

    /// Moves the page and notifies every listener.
    pub fn scroll_to(&self, offset: f64) {
        // Callbacks run outside the borrow so they may touch the host.
        let mut listeners = {
            let mut inner = self.inner.borrow_mut();
            inner.offset = offset;
            std::mem::take(&mut inner.listeners)
        };
        for listener in listeners.values_mut() {
            listener(offset);
        }
        self.inner.borrow_mut().listeners.extend(listeners);
    }

    /// Reports a visibility change for `key` to every watch.
    pub fn report(&self, key: &str, intersecting: bool) {
        let mut watches = std::mem::take(&mut self.inner.borrow_mut().watches);
        for (_, on_change) in watches.values_mut() {
            on_change(key.to_string(), intersecting);
        }
        self.inner.borrow_mut().watches.extend(watches);
    }

    fn next_id(&self) -> usize {
        let mut inner = self.inner.borrow_mut();
        inner.next_id += 1;
        inner.next_id
    }
}

impl ScrollSignal for FakeHost {
    type Listener = usize;

    fn offset(&self) -> f64 {
        self.inner.borrow().offset
    }

    fn listen(&self, on_scroll: Box<dyn FnMut(f64)>) -> Result<usize, HostError> {
        let id = self.next_id();
        self.inner.borrow_mut().listeners.insert(id, on_scroll);
        Ok(id)
    }

    fn unlisten(&self, listener: usize) {
        self.inner.borrow_mut().listeners.remove(&listener);
    }
}

impl VisibilityWatcher for FakeHost {
    type Watch = usize;

    fn watch(
        &self,
        _attr: &str,
        threshold: f64,
        on_change: Box<dyn FnMut(String, bool)>,
    ) -> Result<usize, HostError> {
        if self.inner.borrow().no_intersection {
            return Err(HostError::Unsupported("IntersectionObserver"));
        }
        let id = self.next_id();
        self.inner.borrow_mut().watches.insert(id, (threshold, on_change));
        Ok(id)
    }

    fn release(&self, watch: usize) {
        self.inner.borrow_mut().watches.remove(&watch);
    }
}

impl SectionScroller for FakeHost {
    fn scroll_to_section(&self, id: &str) -> bool {
        let mut inner = self.inner.borrow_mut();
        if !inner.sections.iter().any(|s| s == id) {
            return false;
        }
        inner.scrolled_to.push(id.to_string());
        true
    }
}
