//! Project lightbox selection.
//!
//! A single slot: zero or one project is open. Selecting another project
//! while one is open swaps the selection in one step, so two projects are
//! never open together and modals never stack. Clicks inside the modal body
//! are consumed and never reach the backdrop close handler.

#[cfg(test)]
#[path = "modal_test.rs"]
mod modal_test;

use crate::content::Project;

/// Effect of a selection change.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModalTransition {
    Opened(u32),
    Replaced { from: u32, to: u32 },
    /// The requested project was already open.
    Unchanged,
    Closed(u32),
    /// Close requested while nothing was open.
    AlreadyClosed,
}

impl ModalTransition {
    /// Whether the selection actually changed (drives re-rendering).
    #[must_use]
    pub fn changed(self) -> bool {
        !matches!(self, Self::Unchanged | Self::AlreadyClosed)
    }
}

/// Where a click inside the modal layer landed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClickOrigin {
    Backdrop,
    Body,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CloseReason {
    Backdrop,
    CloseButton,
    Escape,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ModalController {
    selected: Option<Project>,
}

impl ModalController {
    /// Open `project`, or close with `None`.
    pub fn select(&mut self, project: Option<Project>) -> ModalTransition {
        let transition = match (self.selected.as_ref(), project.as_ref()) {
            (None, None) => ModalTransition::AlreadyClosed,
            (Some(current), Some(next)) if current.id == next.id => ModalTransition::Unchanged,
            (None, Some(next)) => ModalTransition::Opened(next.id),
            (Some(current), Some(next)) => ModalTransition::Replaced { from: current.id, to: next.id },
            (Some(current), None) => ModalTransition::Closed(current.id),
        };
        if transition.changed() {
            log::debug!("project modal: {transition:?}");
            self.selected = project;
        }
        transition
    }

    pub fn close(&mut self, reason: CloseReason) -> ModalTransition {
        let transition = self.select(None);
        if transition.changed() {
            log::debug!("project modal closed via {reason:?}");
        }
        transition
    }

    /// Route a click in the modal layer. Body clicks are contained.
    pub fn handle_click(&mut self, origin: ClickOrigin) -> ModalTransition {
        match origin {
            ClickOrigin::Backdrop => self.close(CloseReason::Backdrop),
            ClickOrigin::Body => ModalTransition::Unchanged,
        }
    }

    /// Escape closes; every other key is ignored.
    pub fn handle_key(&mut self, key: &str) -> ModalTransition {
        if key == "Escape" {
            self.close(CloseReason::Escape)
        } else {
            ModalTransition::Unchanged
        }
    }

    #[must_use]
    pub fn selected(&self) -> Option<&Project> {
        self.selected.as_ref()
    }

    #[must_use]
    pub fn selected_id(&self) -> Option<u32> {
        self.selected.as_ref().map(|project| project.id)
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.selected.is_some()
    }
}
