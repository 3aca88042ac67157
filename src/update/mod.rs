//! Update functions for the Elm-style architecture
//!
//! All state transformations flow through these functions.

mod dock;
mod drag;
mod tab;
mod theme;
mod workspace;

use crate::commands::Cmd;
use crate::messages::Msg;
use crate::model::AppModel;

#[cfg(debug_assertions)]
use crate::tracing::LayoutSnapshot;
#[cfg(debug_assertions)]
use tracing::{debug, span, Level};

pub use dock::update_dock;
pub use drag::update_drag;
pub use tab::update_tab;
pub use theme::update_theme;
pub use workspace::update_workspace;

/// Main update function - dispatches to sub-handlers
///
/// In debug builds, this wraps with tracing instrumentation.
/// In release builds, it's a direct dispatch with zero overhead.
#[inline]
pub fn update(model: &mut AppModel, msg: Msg) -> Option<Cmd> {
    #[cfg(debug_assertions)]
    {
        update_traced(model, msg)
    }
    #[cfg(not(debug_assertions))]
    {
        update_inner(model, msg)
    }
}

/// Inner update logic (no tracing)
fn update_inner(model: &mut AppModel, msg: Msg) -> Option<Cmd> {
    match msg {
        Msg::Dock(m) => dock::update_dock(model, m),
        Msg::Tab(m) => tab::update_tab(model, m),
        Msg::Drag(m) => drag::update_drag(model, m),
        Msg::Theme(m) => theme::update_theme(model, m),
        Msg::Workspace(m) => workspace::update_workspace(model, m),
    }
}

/// Traced update wrapper (debug builds only)
///
/// Captures before/after layout state, logs diffs and checks the layout
/// invariants after every message. Pointer-move drag messages are not logged.
#[cfg(debug_assertions)]
fn update_traced(model: &mut AppModel, msg: Msg) -> Option<Cmd> {
    use crate::messages::DragMsg;

    // Skip logging for noisy pointer-move messages
    let is_noisy = matches!(&msg, Msg::Drag(DragMsg::Over(_)));

    let msg_name = msg_type_name(&msg);
    let _span = if is_noisy {
        None
    } else {
        Some(span!(Level::DEBUG, "update", msg = %msg_name).entered())
    };

    let before = LayoutSnapshot::from_layout(&model.layout);

    if !is_noisy {
        debug!(target: "message", msg = %msg_name, "processing");
    }

    let result = update_inner(model, msg);

    let after = LayoutSnapshot::from_layout(&model.layout);
    if let Some(diff) = before.diff(&after) {
        debug!(target: "layout", %diff, "state changed");
    }

    model.layout.assert_invariants_with_context(&msg_name);

    result
}

/// Get a display name for a message type
///
/// Uses Debug formatting to include variant names and arguments.
/// Example outputs:
/// - `Dock::Maximize(Center)`
/// - `Tab::Select { pane: Left, tab_id: "explorer" }`
#[cfg(debug_assertions)]
fn msg_type_name(msg: &Msg) -> String {
    match msg {
        Msg::Dock(m) => format!("Dock::{:?}", m),
        Msg::Tab(m) => format!("Tab::{:?}", m),
        Msg::Drag(m) => format!("Drag::{:?}", m),
        Msg::Theme(m) => format!("Theme::{:?}", m),
        Msg::Workspace(m) => format!("Workspace::{:?}", m),
    }
}
