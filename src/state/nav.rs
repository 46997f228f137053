use std::rc::Rc;

use yew::Reducible;

/// Vertical offset past which the header switches to its solid style.
pub const SCROLL_THRESHOLD_PX: f64 = 50.0;

pub fn is_past_threshold(offset: f64) -> bool {
    offset > SCROLL_THRESHOLD_PX
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct NavState {
    pub scrolled: bool,
    pub menu_open: bool,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum NavAction {
    Scrolled(f64),
    ToggleMenu,
    /// A nav link was activated. Always closes the menu.
    Navigated,
}

impl Reducible for NavState {
    type Action = NavAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = match action {
            NavAction::Scrolled(offset) => NavState {
                scrolled: is_past_threshold(offset),
                ..*self
            },
            NavAction::ToggleMenu => NavState {
                menu_open: !self.menu_open,
                ..*self
            },
            NavAction::Navigated => NavState {
                menu_open: false,
                ..*self
            },
        };

        // Scroll fires constantly; keep the same Rc so nothing re-renders.
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}
