use std::rc::Rc;

use yew::Reducible;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ModalState {
    #[default]
    Closed,
    Open,
}

/// Where a pointer activation landed inside the modal overlay.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClickRegion {
    /// The dimmed area around the dialog.
    Backdrop,
    /// The dialog itself.
    Body,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModalAction {
    Open,
    Close,
    Click(ClickRegion),
}

impl ModalState {
    pub fn is_open(&self) -> bool {
        matches!(self, ModalState::Open)
    }
}

impl Reducible for ModalState {
    type Action = ModalAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = match action {
            ModalAction::Open => ModalState::Open,
            ModalAction::Close | ModalAction::Click(ClickRegion::Backdrop) => ModalState::Closed,
            ModalAction::Click(ClickRegion::Body) => *self,
        };
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}
