//! Docking layout tests driven through `update`
//!
//! Tests for tab lifecycle, resizing with auto-collapse, minimize and
//! maximize/restore.

mod common;

use common::{add_view, assert_layout_invariants, test_model};
use dockspace::commands::Cmd;
use dockspace::messages::{DockMsg, Msg, TabMsg};
use dockspace::model::{LayoutSplit, Rect};
use dockspace::panel::{InlineContent, PaneId, TabContent};
use dockspace::update::update;

// ========================================================================
// Tabs
// ========================================================================

#[test]
fn test_default_tabs_are_seeded() {
    let model = test_model();
    assert_eq!(model.layout.pane(PaneId::Left).tab_ids(), vec!["explorer"]);
    assert_eq!(model.layout.pane(PaneId::Center).tab_ids(), vec!["welcome"]);
    assert_eq!(model.layout.pane(PaneId::Right).tab_ids(), vec!["properties"]);
    assert_eq!(model.layout.pane(PaneId::Bottom).tab_ids(), vec!["console"]);
    assert_eq!(model.layout.split(), LayoutSplit::default());
    assert!(!model.layout.is_dirty());
}

#[test]
fn test_add_view_tab_uses_view_title_and_props() {
    let mut model = test_model();
    let mut props = dockspace::panel::Props::new();
    props.insert("series".to_string(), "sales".into());
    update(
        &mut model,
        Msg::Tab(TabMsg::AddView {
            pane: PaneId::Center,
            view_id: "chart".to_string(),
            props,
            title: None,
            activate: true,
        }),
    );

    let center = model.layout.pane(PaneId::Center);
    let tab = center.active_tab().unwrap();
    assert_eq!(tab.title, "Chart");
    assert_eq!(model.registry.render(&tab.title, &tab.content), "chart of sales");
    assert_layout_invariants(&model);
}

#[test]
fn test_add_unknown_view_reports_message() {
    let mut model = test_model();
    let cmd = update(
        &mut model,
        Msg::Tab(TabMsg::AddView {
            pane: PaneId::Left,
            view_id: "missing".to_string(),
            props: Default::default(),
            title: None,
            activate: true,
        }),
    );
    assert_eq!(cmd, Some(Cmd::ShowMessage("Unknown view: missing".to_string())));
    assert_eq!(model.layout.pane(PaneId::Left).len(), 1);
}

#[test]
fn test_add_custom_tab_rejects_duplicate_id() {
    let mut model = test_model();
    let add = |tab_id: &str| {
        Msg::Tab(TabMsg::AddCustom {
            pane: PaneId::Right,
            tab_id: tab_id.to_string(),
            payload: "<p>hi</p>".to_string(),
            props: Default::default(),
            title: Some("Notes".to_string()),
            activate: false,
        })
    };

    assert_eq!(update(&mut model, add("notes")), Some(Cmd::Redraw));
    let right = model.layout.pane(PaneId::Right);
    assert_eq!(right.tab_ids(), vec!["properties", "notes"]);
    assert_eq!(right.active_tab_id(), Some("properties"));

    // "explorer" already lives in the left pane
    let cmd = update(&mut model, add("explorer"));
    assert!(matches!(cmd, Some(Cmd::ShowMessage(_))));
    assert_eq!(model.layout.tab_count(), 5);
    assert_layout_invariants(&model);
}

#[test]
fn test_add_custom_tab_keeps_props() {
    let mut model = test_model();
    let mut props = dockspace::panel::Props::new();
    props.insert("author".to_string(), "ops".into());
    update(
        &mut model,
        Msg::Tab(TabMsg::AddCustom {
            pane: PaneId::Bottom,
            tab_id: "runbook".to_string(),
            payload: "<ol></ol>".to_string(),
            props: props.clone(),
            title: None,
            activate: true,
        }),
    );

    let tab = model.layout.pane(PaneId::Bottom).active_tab().unwrap();
    assert_eq!(tab.title, "runbook");
    assert_eq!(
        tab.content,
        TabContent::Inline(InlineContent::new("<ol></ol>").with_props(props))
    );
    assert_eq!(model.registry.render(&tab.title, &tab.content), "<ol></ol>");
}

#[test]
fn test_close_tab_activates_first_remaining() {
    let mut model = test_model();
    let a = add_view(&mut model, PaneId::Bottom, "logs");
    let b = add_view(&mut model, PaneId::Bottom, "table");
    assert_eq!(model.layout.pane(PaneId::Bottom).active_tab_id(), Some(b.as_str()));

    update(&mut model, Msg::Tab(TabMsg::Close { pane: PaneId::Bottom, tab_id: b }));
    assert_eq!(model.layout.pane(PaneId::Bottom).active_tab_id(), Some("console"));
    assert_eq!(model.layout.pane(PaneId::Bottom).tab_ids(), vec!["console", a.as_str()]);
}

#[test]
fn test_builtin_tabs_cannot_be_closed() {
    let mut model = test_model();
    let cmd = update(
        &mut model,
        Msg::Tab(TabMsg::Close {
            pane: PaneId::Center,
            tab_id: "welcome".to_string(),
        }),
    );
    assert_eq!(cmd, None);
    assert_eq!(model.layout.pane(PaneId::Center).len(), 1);
}

#[test]
fn test_invalid_targets_are_noops() {
    let mut model = test_model();
    let before = model.layout.capture_layout();

    assert_eq!(
        update(&mut model, Msg::Tab(TabMsg::Select { pane: PaneId::Left, tab_id: "nope".into() })),
        None
    );
    assert_eq!(
        update(&mut model, Msg::Tab(TabMsg::Close { pane: PaneId::Left, tab_id: "nope".into() })),
        None
    );
    assert_eq!(
        update(
            &mut model,
            Msg::Tab(TabMsg::Move {
                tab_id: "nope".into(),
                from: PaneId::Left,
                to: PaneId::Right,
                index: None
            })
        ),
        None
    );
    assert_eq!(model.layout.capture_layout(), before);
}

#[test]
fn test_move_tab_concrete_scenario() {
    let mut model = test_model();
    update(
        &mut model,
        Msg::Tab(TabMsg::AddCustom {
            pane: PaneId::Left,
            tab_id: "x1".to_string(),
            payload: "".to_string(),
            props: Default::default(),
            title: Some("X".to_string()),
            activate: true,
        }),
    );
    assert_eq!(model.layout.pane(PaneId::Left).active_tab_id(), Some("x1"));

    update(
        &mut model,
        Msg::Tab(TabMsg::Move {
            tab_id: "x1".to_string(),
            from: PaneId::Left,
            to: PaneId::Right,
            index: None,
        }),
    );
    assert!(!model.layout.pane(PaneId::Left).contains("x1"));
    assert_eq!(model.layout.pane(PaneId::Left).active_tab_id(), Some("explorer"));
    assert!(model.layout.pane(PaneId::Right).contains("x1"));
    assert_eq!(model.layout.pane(PaneId::Right).active_tab_id(), Some("x1"));
    assert_layout_invariants(&model);
}

#[test]
fn test_cycle_and_close_others() {
    let mut model = test_model();
    let a = add_view(&mut model, PaneId::Center, "chart");
    let b = add_view(&mut model, PaneId::Center, "table");

    update(&mut model, Msg::Tab(TabMsg::Next(PaneId::Center)));
    assert_eq!(model.layout.pane(PaneId::Center).active_tab_id(), Some("welcome"));
    update(&mut model, Msg::Tab(TabMsg::Prev(PaneId::Center)));
    assert_eq!(model.layout.pane(PaneId::Center).active_tab_id(), Some(b.as_str()));

    update(
        &mut model,
        Msg::Tab(TabMsg::CloseOthers {
            pane: PaneId::Center,
            keep: a.clone(),
        }),
    );
    // Built-in welcome tab is not closable
    assert_eq!(model.layout.pane(PaneId::Center).tab_ids(), vec!["welcome", a.as_str()]);
    assert_eq!(model.layout.pane(PaneId::Center).active_tab_id(), Some(a.as_str()));
}

// ========================================================================
// Sizing
// ========================================================================

#[test]
fn test_resize_collapse_symmetry() {
    let mut model = test_model();
    let resize = |size: f32| {
        Msg::Dock(DockMsg::Resize {
            pane: PaneId::Right,
            size,
        })
    };

    update(&mut model, resize(12.0));
    assert!(!model.layout.is_collapsed(PaneId::Right));

    update(&mut model, resize(3.0));
    assert!(model.layout.is_collapsed(PaneId::Right));
    // Tabs survive a collapse
    assert_eq!(model.layout.pane(PaneId::Right).tab_ids(), vec!["properties"]);

    update(&mut model, resize(4.5));
    assert!(model.layout.is_collapsed(PaneId::Right));

    update(&mut model, resize(25.0));
    assert!(!model.layout.is_collapsed(PaneId::Right));

    update(&mut model, resize(18.0));
    assert!(!model.layout.is_collapsed(PaneId::Right));
}

#[test]
fn test_collapsed_size_respects_floor() {
    let mut model = test_model();
    update(
        &mut model,
        Msg::Dock(DockMsg::Resize {
            pane: PaneId::Bottom,
            size: 0.0,
        }),
    );
    assert!(model.layout.is_collapsed(PaneId::Bottom));
    assert_eq!(model.layout.split().vertical, [98.0, 2.0]);
    assert_eq!(model.layout.effective_sizes().vertical, [100.0, 0.0]);
}

#[test]
fn test_minimize_rules() {
    let mut model = test_model();
    update(&mut model, Msg::Dock(DockMsg::Minimize(PaneId::Left)));
    assert_eq!(model.layout.split().horizontal, [0.0, 80.0, 20.0]);
    assert!(model.layout.is_collapsed(PaneId::Left));

    update(&mut model, Msg::Dock(DockMsg::Minimize(PaneId::Bottom)));
    assert_eq!(model.layout.split().vertical, [100.0, 0.0]);
}

#[test]
fn test_maximize_restore_pairing() {
    let mut model = test_model();
    update(&mut model, Msg::Dock(DockMsg::Resize { pane: PaneId::Left, size: 25.0 }));
    update(&mut model, Msg::Dock(DockMsg::SetCollapsed { pane: PaneId::Bottom, collapsed: true }));
    let split = model.layout.split();
    let flags = model.layout.collapsed_flags();

    update(&mut model, Msg::Dock(DockMsg::Maximize(PaneId::Right)));
    assert_eq!(model.layout.maximized(), Some(PaneId::Right));
    assert_eq!(model.layout.effective_sizes().horizontal, [0.0, 0.0, 100.0]);

    assert_eq!(update(&mut model, Msg::Dock(DockMsg::Restore)), Some(Cmd::Redraw));
    assert_eq!(model.layout.split(), split);
    assert_eq!(model.layout.collapsed_flags(), flags);
    assert_eq!(update(&mut model, Msg::Dock(DockMsg::Restore)), None);
}

#[test]
fn test_resize_ignored_while_maximized() {
    let mut model = test_model();
    update(&mut model, Msg::Dock(DockMsg::Maximize(PaneId::Center)));
    let cmd = update(&mut model, Msg::Dock(DockMsg::Resize { pane: PaneId::Left, size: 30.0 }));
    assert_eq!(cmd, None);
    update(&mut model, Msg::Dock(DockMsg::Maximize(PaneId::Center)));
    assert_eq!(model.layout.split(), LayoutSplit::default());
}

#[test]
fn test_toggle_collapsed_keeps_sizes() {
    let mut model = test_model();
    update(&mut model, Msg::Dock(DockMsg::ToggleCollapsed(PaneId::Left)));
    assert!(model.layout.is_collapsed(PaneId::Left));
    assert_eq!(model.layout.split(), LayoutSplit::default());
    update(&mut model, Msg::Dock(DockMsg::ToggleCollapsed(PaneId::Left)));
    assert!(!model.layout.is_collapsed(PaneId::Left));
}

#[test]
fn test_pane_rects_fill_area() {
    let model = test_model();
    let rects = model.layout.pane_rects(Rect::new(0.0, 0.0, 1200.0, 800.0));
    let total: f32 = rects.iter().map(|(_, r)| r.width * r.height).sum();
    assert_eq!(total, 1200.0 * 800.0);
    assert_eq!(rects[0], (PaneId::Left, Rect::new(0.0, 0.0, 240.0, 600.0)));
}

#[test]
fn test_placeholder_tab_renders_title() {
    let mut model = test_model();
    let title = "Lost".to_string();
    let content = TabContent::Placeholder { title: title.clone() };
    assert_eq!(model.registry.render(&title, &content), "Lost (content unavailable)");
    model.registry.unregister("chart");
    assert!(model.registry.get_by_category(Some("data")).len() == 1);
}
