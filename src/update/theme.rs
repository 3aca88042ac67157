//! Theme message handlers

use crate::commands::Cmd;
use crate::messages::ThemeMsg;
use crate::model::AppModel;
use crate::theme::DEFAULT_VARIABLE_PREFIX;

/// Handle theme messages
pub fn update_theme(model: &mut AppModel, msg: ThemeMsg) -> Option<Cmd> {
    match msg {
        ThemeMsg::Select(id) => match model.themes.select(&id) {
            Ok(theme) => {
                let variables = theme.presentation_variables(DEFAULT_VARIABLE_PREFIX);
                model.config.theme = id;
                Some(Cmd::ApplyTheme { variables })
            }
            Err(e) => {
                tracing::warn!("Failed to select theme: {}", e);
                model.ui.set_status(e.clone());
                Some(Cmd::ShowMessage(e))
            }
        },
    }
}
