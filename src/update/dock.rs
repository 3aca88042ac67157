//! Dock update handlers
//!
//! Handles split resizing, collapse and maximize/restore.

use crate::commands::Cmd;
use crate::messages::DockMsg;
use crate::model::AppModel;

/// Update function for dock messages
pub fn update_dock(model: &mut AppModel, msg: DockMsg) -> Option<Cmd> {
    let layout = &mut model.layout;
    match msg {
        DockMsg::Resize { pane, size } => {
            // Resize handles are inert while a pane is maximized
            if layout.maximized().is_some() {
                return None;
            }
            layout.resize_pane(pane, size);
            Some(Cmd::Redraw)
        }

        DockMsg::Minimize(pane) => {
            if layout.maximized().is_some() {
                layout.restore();
            }
            layout.minimize(pane);
            Some(Cmd::Redraw)
        }

        DockMsg::Maximize(pane) => {
            layout.maximize(pane);
            Some(Cmd::Redraw)
        }

        DockMsg::Restore => layout.restore().then_some(Cmd::Redraw),

        DockMsg::SetCollapsed { pane, collapsed } => {
            layout.set_collapsed(pane, collapsed).then_some(Cmd::Redraw)
        }

        DockMsg::ToggleCollapsed(pane) => {
            layout.toggle_collapsed(pane);
            Some(Cmd::Redraw)
        }
    }
}
