//! Message types for the Elm-style architecture
//!
//! All state changes flow through these message types.

use crate::panel::{DropTarget, PaneId, Props};

/// Split, collapse and maximize messages
#[derive(Debug, Clone, PartialEq)]
pub enum DockMsg {
    /// Resize a pane to a percentage (from a resize handle drag)
    Resize { pane: PaneId, size: f32 },
    /// Give a pane's space to its neighbour
    Minimize(PaneId),
    /// Give a pane all the space (toggles when already maximized)
    Maximize(PaneId),
    /// Undo a maximize
    Restore,
    /// Show or hide a pane without touching its size
    SetCollapsed { pane: PaneId, collapsed: bool },
    /// Flip a pane's collapsed flag
    ToggleCollapsed(PaneId),
}

/// Tab lifecycle messages
#[derive(Debug, Clone, PartialEq)]
pub enum TabMsg {
    /// Open a tab for a registered view
    AddView {
        pane: PaneId,
        view_id: String,
        props: Props,
        title: Option<String>,
        activate: bool,
    },
    /// Open a tab with inline content under a chosen id
    AddCustom {
        pane: PaneId,
        tab_id: String,
        payload: String,
        props: Props,
        title: Option<String>,
        activate: bool,
    },
    /// Close a tab (non-closable tabs stay)
    Close { pane: PaneId, tab_id: String },
    /// Activate a tab
    Select { pane: PaneId, tab_id: String },
    /// Move a tab to another pane
    Move {
        tab_id: String,
        from: PaneId,
        to: PaneId,
        index: Option<usize>,
    },
    /// Activate the next tab in a pane (wraps)
    Next(PaneId),
    /// Activate the previous tab in a pane (wraps)
    Prev(PaneId),
    /// Close every closable tab in a pane except one
    CloseOthers { pane: PaneId, keep: String },
}

/// Tab drag-and-drop gesture messages
#[derive(Debug, Clone, PartialEq)]
pub enum DragMsg {
    /// Pointer pressed on a tab and started moving
    Start { tab_id: String, source: PaneId },
    /// Pointer moved over a drop target
    Over(DropTarget),
    /// Pointer left every valid drop target
    Leave,
    /// Pointer released over a drop target
    Drop(DropTarget),
    /// Gesture aborted; nothing moves
    Cancel,
}

/// Theme messages
#[derive(Debug, Clone, PartialEq)]
pub enum ThemeMsg {
    /// Make a theme current and apply its variables
    Select(String),
}

/// Workspace persistence messages
#[derive(Debug, Clone, PartialEq)]
pub enum WorkspaceMsg {
    /// Capture the current layout and theme under a name
    Save { name: String },
    /// Replace the live layout and theme with a saved workspace
    Load { id: String },
    Delete { id: String },
    Duplicate { id: String, name: String },
    Rename { id: String, name: String },
}

/// Top-level message type
#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    Dock(DockMsg),
    Tab(TabMsg),
    Drag(DragMsg),
    Theme(ThemeMsg),
    Workspace(WorkspaceMsg),
}
