//! Tab drag-and-drop handlers
//!
//! The gesture itself lives in `UiState::drag`; the layout only changes on
//! a drop. Cancelling or leaving clears highlighting and moves nothing.

use crate::commands::Cmd;
use crate::messages::DragMsg;
use crate::model::{AppModel, TabDrag};

/// Handle drag gesture messages
pub fn update_drag(model: &mut AppModel, msg: DragMsg) -> Option<Cmd> {
    match msg {
        DragMsg::Start { tab_id, source } => {
            if !model.layout.pane(source).contains(&tab_id) {
                tracing::debug!(tab = %tab_id, %source, "drag start on unknown tab ignored");
                return None;
            }
            model.ui.drag = Some(TabDrag {
                tab_id,
                source,
                hover: None,
            });
            Some(Cmd::Redraw)
        }

        DragMsg::Over(target) => {
            let drag = model.ui.drag.as_mut()?;
            if drag.hover == Some(target) {
                return None;
            }
            drag.hover = Some(target);
            Some(Cmd::Redraw)
        }

        DragMsg::Leave => {
            let drag = model.ui.drag.as_mut()?;
            drag.hover.take().map(|_| Cmd::Redraw)
        }

        DragMsg::Drop(target) => {
            let drag = model.ui.clear_drag()?;
            let moved =
                model
                    .layout
                    .apply_drop(&drag.tab_id, drag.source, target.pane, target.zone);
            tracing::debug!(
                tab = %drag.tab_id,
                source = %drag.source,
                target = %target.pane,
                zone = ?target.zone,
                moved,
                "drop"
            );
            // Highlighting was cleared either way
            Some(Cmd::Redraw)
        }

        DragMsg::Cancel => model.ui.clear_drag().map(|_| Cmd::Redraw),
    }
}
