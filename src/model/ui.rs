//! UI state - tab drag gestures and status messages

use crate::panel::{DropTarget, PaneId};

/// A tab drag in progress
#[derive(Debug, Clone, PartialEq)]
pub struct TabDrag {
    /// Tab being dragged
    pub tab_id: String,
    /// Pane the drag started in
    pub source: PaneId,
    /// Drop target under the pointer, used for highlighting
    pub hover: Option<DropTarget>,
}

/// Transient UI state that is never persisted
#[derive(Debug, Clone, Default)]
pub struct UiState {
    /// Active tab drag, if any
    pub drag: Option<TabDrag>,
    /// Last message shown to the user
    pub status_message: Option<String>,
}

impl UiState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Drop target currently highlighted
    pub fn hover_target(&self) -> Option<DropTarget> {
        self.drag.as_ref().and_then(|d| d.hover)
    }

    /// Set the status message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// End any drag, clearing hover highlighting
    pub fn clear_drag(&mut self) -> Option<TabDrag> {
        self.drag.take()
    }
}
