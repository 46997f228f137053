use std::collections::BTreeSet;
use std::rc::Rc;

use yew::{classes, Classes, Reducible};

/// Attribute carrying an element's reveal key.
pub const REVEAL_ATTR: &str = "data-reveal";
/// Fraction of an element that must be visible before it is revealed.
pub const REVEAL_THRESHOLD: f64 = 0.1;

/// Keys of elements that have been on screen at least once.
///
/// Membership only grows. Leaving and re-entering the viewport after the
/// first reveal has no effect.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RevealState {
    revealed: BTreeSet<String>,
    fail_open: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub enum RevealAction {
    Visibility { key: String, intersecting: bool },
    /// The browser can't report visibility, so show everything.
    Unsupported,
}

impl RevealState {
    pub fn fully_visible() -> Self {
        RevealState {
            fail_open: true,
            ..Default::default()
        }
    }

    pub fn is_revealed(&self, key: &str) -> bool {
        self.fail_open || self.revealed.contains(key)
    }

    #[cfg(test)]
    pub fn revealed_count(&self) -> usize {
        self.revealed.len()
    }

    /// `reveal`, plus `active` once the element has been seen.
    pub fn classes(&self, key: &str, extra: impl Into<Classes>) -> Classes {
        classes!("reveal", self.is_revealed(key).then_some("active"), extra.into())
    }
}

impl Reducible for RevealState {
    type Action = RevealAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            RevealAction::Visibility { key, intersecting } => {
                if !intersecting || self.is_revealed(&key) {
                    return self;
                }
                let mut next = (*self).clone();
                next.revealed.insert(key);
                Rc::new(next)
            }
            RevealAction::Unsupported if self.fail_open => self,
            RevealAction::Unsupported => Rc::new(RevealState {
                fail_open: true,
                revealed: self.revealed.clone(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seen(key: &str, intersecting: bool) -> RevealAction {
        RevealAction::Visibility {
            key: key.to_string(),
            intersecting,
        }
    }

    #[test]
    fn nothing_revealed_initially() {
        let state = RevealState::default();
        assert!(!state.is_revealed("hero-title"));
        assert_eq!(state.revealed_count(), 0);
    }

    #[test]
    fn entering_reveals() {
        let state = Rc::new(RevealState::default()).reduce(seen("hero-title", true));
        assert!(state.is_revealed("hero-title"));
        assert!(!state.is_revealed("hero-tagline"));
    }

    #[test]
    fn non_intersecting_report_is_ignored() {
        let state = Rc::new(RevealState::default());
        let next = state.clone().reduce(seen("hero-title", false));
        assert!(Rc::ptr_eq(&state, &next));
    }

    #[test]
    fn reveal_is_one_shot() {
        let mut state = Rc::new(RevealState::default()).reduce(seen("service-0", true));
        for _ in 0..5 {
            state = state.reduce(seen("service-0", false));
            assert!(state.is_revealed("service-0"));
            let before = state.clone();
            state = state.reduce(seen("service-0", true));
            assert!(Rc::ptr_eq(&before, &state));
        }
        assert_eq!(state.revealed_count(), 1);
    }

    #[test]
    fn set_grows_monotonically() {
        let keys = ["a", "b", "a", "c", "b", "d"];
        let mut state = Rc::new(RevealState::default());
        let mut last = 0;
        for key in keys {
            state = state.reduce(seen(key, true));
            assert!(state.revealed_count() >= last);
            last = state.revealed_count();
        }
        assert_eq!(last, 4);
    }

    #[test]
    fn unsupported_fails_open() {
        let state = Rc::new(RevealState::default()).reduce(RevealAction::Unsupported);
        assert!(state.is_revealed("anything"));
        assert!(state.classes("anything", "card").contains("active"));
    }

    #[test]
    fn fully_visible_matches_fail_open() {
        let failed = Rc::new(RevealState::default()).reduce(RevealAction::Unsupported);
        assert_eq!(*failed, RevealState::fully_visible());
        let again = failed.clone().reduce(RevealAction::Unsupported);
        assert!(Rc::ptr_eq(&failed, &again));
    }

    #[test]
    fn classes_follow_state() {
        let state = Rc::new(RevealState::default());
        let classes = state.classes("card-1", classes!("card"));
        assert!(classes.contains("reveal"));
        assert!(classes.contains("card"));
        assert!(!classes.contains("active"));

        let state = state.reduce(seen("card-1", true));
        assert!(state.classes("card-1", "card").contains("active"));
    }
}
