//! Workspace message handlers (save, load, delete, duplicate, rename)
//!
//! Validation failures and storage errors become user-facing messages; the
//! live layout is only touched by `Load`.

use crate::commands::Cmd;
use crate::messages::WorkspaceMsg;
use crate::model::AppModel;
use crate::theme::DEFAULT_VARIABLE_PREFIX;

/// Handle workspace messages
pub fn update_workspace(model: &mut AppModel, msg: WorkspaceMsg) -> Option<Cmd> {
    match msg {
        WorkspaceMsg::Save { name } => {
            let mut snapshot = model
                .layout
                .capture_snapshot(&name, model.themes.current_id());
            snapshot.id = model.workspaces.fresh_id(&snapshot.id);
            match model.workspaces.save(snapshot) {
                Ok(saved) => {
                    model.layout.take_dirty();
                    show(model, format!("Saved workspace '{}'", saved.name))
                }
                Err(e) => show(model, e),
            }
        }

        WorkspaceMsg::Load { id } => {
            let Some(snapshot) = model.workspaces.load(&id).cloned() else {
                return show(model, format!("Workspace not found: {}", id));
            };

            model.layout.restore_snapshot(&snapshot, &model.registry);
            model.layout.take_dirty();
            model.ui.clear_drag();

            let mut cmds = vec![Cmd::Redraw];
            match model.themes.select(&snapshot.theme) {
                Ok(theme) => {
                    cmds.push(Cmd::ApplyTheme {
                        variables: theme.presentation_variables(DEFAULT_VARIABLE_PREFIX),
                    });
                    model.config.theme = snapshot.theme.clone();
                }
                Err(e) => {
                    tracing::warn!(workspace = %snapshot.id, "Keeping current theme: {}", e);
                }
            }

            let message = format!("Loaded workspace '{}'", snapshot.name);
            model.ui.set_status(message.clone());
            cmds.push(Cmd::ShowMessage(message));
            Some(Cmd::batch(cmds))
        }

        WorkspaceMsg::Delete { id } => match model.workspaces.delete(&id) {
            Ok(true) => show(model, "Workspace deleted".to_string()),
            Ok(false) => None,
            Err(e) => show(model, e),
        },

        WorkspaceMsg::Duplicate { id, name } => match model.workspaces.duplicate(&id, &name) {
            Ok(Some(copy)) => show(model, format!("Saved workspace '{}'", copy.name)),
            Ok(None) => None,
            Err(e) => show(model, e),
        },

        WorkspaceMsg::Rename { id, name } => match model.workspaces.rename(&id, &name) {
            Ok(true) => show(model, "Workspace renamed".to_string()),
            Ok(false) => None,
            Err(e) => show(model, e),
        },
    }
}

fn show(model: &mut AppModel, message: String) -> Option<Cmd> {
    model.ui.set_status(message.clone());
    Some(Cmd::ShowMessage(message))
}
