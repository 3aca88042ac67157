//! Workspace persistence tests
//!
//! Save/load through `update`, the lossy content boundary, corrupt-record
//! pruning and file-backed storage.

mod common;

use common::{add_view, assert_layout_invariants, test_model, test_model_with_storage};
use dockspace::commands::Cmd;
use dockspace::messages::{DockMsg, Msg, TabMsg, ThemeMsg, WorkspaceMsg};
use dockspace::panel::{PaneId, TabContent};
use dockspace::update::update;
use dockspace::workspace::{FileStorage, MemoryStorage, STORAGE_KEY};
use serde_json::{json, Value};
use tempfile::TempDir;

fn save(model: &mut dockspace::model::AppModel, name: &str) -> String {
    let before: Vec<String> = model.workspaces.list().iter().map(|s| s.id.clone()).collect();
    let cmd = update(
        model,
        Msg::Workspace(WorkspaceMsg::Save {
            name: name.to_string(),
        }),
    );
    assert_eq!(
        cmd.as_ref().and_then(|c| c.message()),
        Some(format!("Saved workspace '{}'", name.trim()).as_str())
    );
    model
        .workspaces
        .list()
        .iter()
        .find(|s| !before.contains(&s.id))
        .map(|s| s.id.clone())
        .expect("a new workspace id")
}

fn load(model: &mut dockspace::model::AppModel, id: &str) -> Option<Cmd> {
    update(model, Msg::Workspace(WorkspaceMsg::Load { id: id.to_string() }))
}

fn valid_record(id: &str, theme: &str) -> Value {
    json!({
        "id": id,
        "name": "Stored",
        "timestamp": 1_700_000_000_000u64,
        "theme": theme,
        "layout": { "horizontal": [30, 50, 20], "vertical": [60, 40] },
        "tabContainers": [
            { "id": "left", "tabs": [
                { "id": "chart-7", "title": "Sales", "content": "chart", "props": { "series": "q3" } }
            ], "activeTabId": "chart-7" },
            { "id": "center", "tabs": [
                { "id": "welcome", "title": "Welcome", "content": "builtin:welcome", "closable": false }
            ], "activeTabId": "welcome" }
        ]
    })
}

// ========================================================================
// Round trip
// ========================================================================

#[test]
fn test_save_and_load_round_trip() {
    let mut model = test_model();
    let chart = add_view(&mut model, PaneId::Right, "chart");
    update(&mut model, Msg::Dock(DockMsg::Resize { pane: PaneId::Left, size: 30.0 }));
    update(&mut model, Msg::Theme(ThemeMsg::Select("default-light".to_string())));
    let captured = model.layout.capture_layout();

    let id = save(&mut model, "  Review  ");
    assert!(!model.layout.is_dirty());
    assert_eq!(model.workspaces.load(&id).unwrap().name, "Review");
    assert_eq!(model.workspaces.load(&id).unwrap().theme, "default-light");

    // Wander off
    update(&mut model, Msg::Tab(TabMsg::Close { pane: PaneId::Right, tab_id: chart.clone() }));
    update(&mut model, Msg::Dock(DockMsg::Minimize(PaneId::Bottom)));
    update(&mut model, Msg::Theme(ThemeMsg::Select("high-contrast".to_string())));

    let cmd = load(&mut model, &id).unwrap();
    assert!(cmd.needs_redraw());
    assert_eq!(cmd.message(), Some("Loaded workspace 'Review'"));
    assert!(cmd
        .theme_variables()
        .unwrap()
        .contains(&("--dock-color-accent".to_string(), "#0969DA".to_string())));

    assert_eq!(model.layout.capture_layout(), captured);
    assert_eq!(model.themes.current_id(), "default-light");
    assert_eq!(model.config.theme, "default-light");
    assert_eq!(model.layout.find_tab(&chart), Some(PaneId::Right));
    assert!(!model.layout.is_dirty());
    assert_layout_invariants(&model);
}

#[test]
fn test_view_props_survive_round_trip() {
    let mut model = test_model();
    let mut props = dockspace::panel::Props::new();
    props.insert("series".to_string(), json!("revenue"));
    update(
        &mut model,
        Msg::Tab(TabMsg::AddView {
            pane: PaneId::Bottom,
            view_id: "chart".to_string(),
            props,
            title: Some("Revenue".to_string()),
            activate: true,
        }),
    );
    let id = save(&mut model, "Props");
    model = {
        let json = model.workspaces.raw().unwrap();
        test_model_with_storage(MemoryStorage::with_entry(STORAGE_KEY, json))
    };
    load(&mut model, &id);

    let tab = model.layout.pane(PaneId::Bottom).active_tab().unwrap();
    assert_eq!(tab.title, "Revenue");
    assert_eq!(model.registry.render(&tab.title, &tab.content), "chart of revenue");
}

#[test]
fn test_inline_content_comes_back_as_placeholder() {
    let mut model = test_model();
    update(
        &mut model,
        Msg::Tab(TabMsg::AddCustom {
            pane: PaneId::Center,
            tab_id: "notes".to_string(),
            payload: "<b>agenda</b>".to_string(),
            props: Default::default(),
            title: Some("Meeting Notes".to_string()),
            activate: true,
        }),
    );
    let id = save(&mut model, "Lossy");

    let stored = model.workspaces.load(&id).unwrap();
    let center = stored.container(PaneId::Center).unwrap();
    let notes = center.tabs.iter().find(|t| t.id == "notes").unwrap();
    assert_eq!(notes.content, "meeting-notes");

    load(&mut model, &id);
    let tab = model.layout.pane(PaneId::Center).tab("notes").unwrap();
    assert_eq!(
        tab.content,
        TabContent::Placeholder {
            title: "Meeting Notes".to_string()
        }
    );
    assert_eq!(model.layout.pane(PaneId::Center).active_tab_id(), Some("notes"));
}

#[test]
fn test_inline_tab_titled_like_a_view_resolves_to_it() {
    let mut model = test_model();
    update(
        &mut model,
        Msg::Tab(TabMsg::AddCustom {
            pane: PaneId::Left,
            tab_id: "adhoc".to_string(),
            payload: "static".to_string(),
            props: Default::default(),
            title: Some("Table".to_string()),
            activate: true,
        }),
    );
    let id = save(&mut model, "Resolves");
    load(&mut model, &id);

    let tab = model.layout.pane(PaneId::Left).tab("adhoc").unwrap();
    assert_eq!(tab.content.view_id(), Some("table"));
}

#[test]
fn test_maximized_layout_round_trip() {
    let mut model = test_model();
    update(&mut model, Msg::Dock(DockMsg::Maximize(PaneId::Bottom)));
    let id = save(&mut model, "Focus");

    let stored = model.workspaces.load(&id).unwrap();
    assert_eq!(stored.config.maximized, Some(PaneId::Bottom));
    assert_eq!(stored.config.layout.vertical, [75.0, 25.0]);

    update(&mut model, Msg::Dock(DockMsg::Restore));
    load(&mut model, &id);
    assert_eq!(model.layout.maximized(), Some(PaneId::Bottom));

    update(&mut model, Msg::Dock(DockMsg::Restore));
    assert_eq!(model.layout.split().vertical, [75.0, 25.0]);
    assert!(!model.layout.is_collapsed(PaneId::Center));
}

// ========================================================================
// Validation and messages
// ========================================================================

#[test]
fn test_save_rejects_bad_names() {
    let mut model = test_model();
    let cmd = update(&mut model, Msg::Workspace(WorkspaceMsg::Save { name: "   ".into() }));
    assert_eq!(cmd.as_ref().and_then(|c| c.message()), Some("Workspace name cannot be empty"));

    let cmd = update(&mut model, Msg::Workspace(WorkspaceMsg::Save { name: "x".repeat(65) }));
    assert!(cmd.unwrap().message().unwrap().contains("too long"));
    assert!(model.workspaces.list().is_empty());
}

#[test]
fn test_saves_in_quick_succession_get_distinct_ids() {
    let mut model = test_model();
    let a = save(&mut model, "One");
    let b = save(&mut model, "Two");
    assert_ne!(a, b);
    assert_eq!(model.workspaces.list().len(), 2);
}

#[test]
fn test_load_missing_leaves_layout_alone() {
    let mut model = test_model();
    let before = model.layout.capture_layout();
    let cmd = load(&mut model, "workspace-0").unwrap();
    assert_eq!(cmd, Cmd::ShowMessage("Workspace not found: workspace-0".to_string()));
    assert_eq!(model.layout.capture_layout(), before);
}

#[test]
fn test_duplicate_rename_delete() {
    let mut model = test_model();
    let id = save(&mut model, "Base");

    let cmd = update(
        &mut model,
        Msg::Workspace(WorkspaceMsg::Duplicate { id: id.clone(), name: "Copy".into() }),
    );
    assert_eq!(cmd, Some(Cmd::ShowMessage("Saved workspace 'Copy'".into())));
    assert_eq!(model.workspaces.list().len(), 2);
    let copy = model.workspaces.list().iter().find(|s| s.name == "Copy").unwrap();
    assert_ne!(copy.id, id);

    update(
        &mut model,
        Msg::Workspace(WorkspaceMsg::Rename { id: id.clone(), name: "Renamed".into() }),
    );
    assert_eq!(model.workspaces.load(&id).unwrap().name, "Renamed");

    update(&mut model, Msg::Workspace(WorkspaceMsg::Delete { id: id.clone() }));
    assert!(!model.workspaces.contains(&id));
    assert_eq!(
        update(&mut model, Msg::Workspace(WorkspaceMsg::Delete { id })),
        None
    );
}

// ========================================================================
// Storage
// ========================================================================

#[test]
fn test_corrupt_records_are_pruned_on_next_write() {
    let stored = json!([
        valid_record("good", "default-dark"),
        { "id": "bad", "name": "No layout", "timestamp": 1, "theme": "default-dark", "tabContainers": [] },
        { "name": "No id" },
        42
    ]);
    let mut model =
        test_model_with_storage(MemoryStorage::with_entry(STORAGE_KEY, stored.to_string()));

    assert_eq!(model.workspaces.list().len(), 1);
    assert_eq!(model.workspaces.pruned_count(), 3);
    assert_eq!(
        model.ui.status_message.as_deref(),
        Some("Dropped 3 unreadable workspace(s)")
    );

    save(&mut model, "Fresh");
    assert_eq!(model.workspaces.pruned_count(), 0);
    let raw: Value = serde_json::from_str(&model.workspaces.raw().unwrap()).unwrap();
    let ids: Vec<&str> = raw
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids.len(), 2);
    assert!(ids.contains(&"good"));
    assert!(!ids.contains(&"bad"));
}

#[test]
fn test_unparseable_storage_starts_empty() {
    let model = test_model_with_storage(MemoryStorage::with_entry(STORAGE_KEY, "{not json"));
    assert!(model.workspaces.list().is_empty());
    assert!(model.ui.status_message.is_some());
}

#[test]
fn test_load_stored_record_resolves_views() {
    let stored = json!([valid_record("stored", "high-contrast")]);
    let mut model =
        test_model_with_storage(MemoryStorage::with_entry(STORAGE_KEY, stored.to_string()));
    load(&mut model, "stored");

    assert_eq!(model.layout.split().horizontal, [30.0, 50.0, 20.0]);
    assert_eq!(model.layout.split().vertical, [60.0, 40.0]);
    let left = model.layout.pane(PaneId::Left);
    let tab = left.active_tab().unwrap();
    assert_eq!(tab.id, "chart-7");
    assert_eq!(model.registry.render(&tab.title, &tab.content), "chart of q3");
    // Panes missing from the record come back empty
    assert!(model.layout.pane(PaneId::Right).is_empty());
    assert_eq!(model.layout.pane(PaneId::Right).active_tab_id(), None);
    assert_eq!(model.themes.current_id(), "high-contrast");
}

#[test]
fn test_legacy_flat_layout_is_read() {
    let stored = json!([{
        "id": "legacy",
        "name": "Legacy",
        "timestamp": 1_600_000_000_000u64,
        "theme": "default-dark",
        "layout": { "leftWidth": 15, "rightWidth": 25, "bottomHeight": 20 },
        "tabContainers": [
            { "id": "bottom", "tabs": [
                { "id": "console", "title": "Console", "content": "builtin:console", "closable": false }
            ] }
        ]
    }]);
    let mut model =
        test_model_with_storage(MemoryStorage::with_entry(STORAGE_KEY, stored.to_string()));
    load(&mut model, "legacy");

    assert_eq!(model.layout.split().horizontal, [15.0, 60.0, 25.0]);
    assert_eq!(model.layout.split().vertical, [80.0, 20.0]);
    assert_eq!(model.layout.pane(PaneId::Bottom).active_tab_id(), Some("console"));

    // Rewritten in the nested shape
    save(&mut model, "Upgraded");
    let raw: Value = serde_json::from_str(&model.workspaces.raw().unwrap()).unwrap();
    for record in raw.as_array().unwrap() {
        assert!(record["layout"]["horizontal"].is_array());
        assert!(record["layout"].get("leftWidth").is_none());
    }
}

#[test]
fn test_file_storage_persists_across_sessions() {
    let dir = TempDir::new().unwrap();
    let id = {
        let mut model = test_model_with_storage(FileStorage::new(dir.path()));
        add_view(&mut model, PaneId::Left, "logs");
        save(&mut model, "On disk")
    };
    assert!(dir.path().join("workspaces.json").exists());

    let mut model = test_model_with_storage(FileStorage::new(dir.path()));
    assert_eq!(model.workspaces.list().len(), 1);
    load(&mut model, &id);
    assert_eq!(model.layout.pane(PaneId::Left).len(), 2);
}

#[test]
fn test_import_assigns_fresh_id_on_collision() {
    let mut model = test_model();
    let id = save(&mut model, "Original");
    let exported = model.workspaces.export(&id).unwrap();

    let imported = model.workspaces.import(&exported).unwrap();
    assert_ne!(imported.id, id);
    assert_eq!(imported.name, "Original");
    assert_eq!(model.workspaces.list().len(), 2);

    assert!(model.workspaces.import("[]").is_err());
}
