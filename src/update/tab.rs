//! Tab message handlers (add, close, select, move)

use crate::commands::Cmd;
use crate::messages::TabMsg;
use crate::model::AppModel;
use crate::panel::InlineContent;

/// Handle tab messages
pub fn update_tab(model: &mut AppModel, msg: TabMsg) -> Option<Cmd> {
    match msg {
        TabMsg::AddView {
            pane,
            view_id,
            props,
            title,
            activate,
        } => {
            let added = model
                .layout
                .add_view_tab(pane, &view_id, props, title, activate, &model.registry);
            match added {
                Some(_) => Some(Cmd::Redraw),
                None => {
                    let message = format!("Unknown view: {}", view_id);
                    model.ui.set_status(message.clone());
                    Some(Cmd::ShowMessage(message))
                }
            }
        }

        TabMsg::AddCustom {
            pane,
            tab_id,
            payload,
            props,
            title,
            activate,
        } => {
            let content = InlineContent::new(payload).with_props(props);
            if model
                .layout
                .add_custom_tab(pane, &tab_id, content, title, activate)
            {
                Some(Cmd::Redraw)
            } else {
                let message = format!("A tab with id '{}' is already open", tab_id);
                model.ui.set_status(message.clone());
                Some(Cmd::ShowMessage(message))
            }
        }

        TabMsg::Close { pane, tab_id } => model
            .layout
            .close_tab(pane, &tab_id)
            .map(|_| Cmd::Redraw),

        TabMsg::Select { pane, tab_id } => {
            model.layout.select_tab(pane, &tab_id).then_some(Cmd::Redraw)
        }

        TabMsg::Move {
            tab_id,
            from,
            to,
            index,
        } => model
            .layout
            .move_tab(&tab_id, from, to, index)
            .then_some(Cmd::Redraw),

        TabMsg::Next(pane) => model.layout.next_tab(pane).then_some(Cmd::Redraw),

        TabMsg::Prev(pane) => model.layout.prev_tab(pane).then_some(Cmd::Redraw),

        TabMsg::CloseOthers { pane, keep } => {
            (model.layout.close_other_tabs(pane, &keep) > 0).then_some(Cmd::Redraw)
        }
    }
}
