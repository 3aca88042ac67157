//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use dockspace::config::ShellConfig;
use dockspace::messages::{Msg, TabMsg};
use dockspace::model::AppModel;
use dockspace::panel::{PaneId, Props};
use dockspace::registry::{ViewDefinition, ViewRegistry};
use dockspace::theme::ThemeStore;
use dockspace::update::update;
use dockspace::workspace::{MemoryStorage, StorageBackend};

/// Registry with a few views covering the usual categories
pub fn test_registry() -> ViewRegistry {
    let mut registry = ViewRegistry::new();
    registry.register(
        ViewDefinition::new("chart", "Chart", |props| {
            format!("chart of {}", props.get("series").and_then(|v| v.as_str()).unwrap_or("nothing"))
        })
        .with_category("data"),
    );
    registry.register(
        ViewDefinition::new("table", "Table", |_| "table".to_string()).with_category("data"),
    );
    registry.register(
        ViewDefinition::new("logs", "Logs", |_| "logs".to_string()).with_category("diagnostics"),
    );
    registry
}

/// Model with the default tabs, test views and in-memory storage
pub fn test_model() -> AppModel {
    test_model_with_storage(MemoryStorage::new())
}

pub fn test_model_with_storage(backend: impl StorageBackend + 'static) -> AppModel {
    AppModel::new(
        ShellConfig::default(),
        test_registry(),
        ThemeStore::builtin(),
        backend,
    )
}

/// Add a view tab through `update`, returning the generated tab id
pub fn add_view(model: &mut AppModel, pane: PaneId, view_id: &str) -> String {
    let before = model.layout.pane(pane).tab_ids().len();
    update(
        model,
        Msg::Tab(TabMsg::AddView {
            pane,
            view_id: view_id.to_string(),
            props: Props::new(),
            title: None,
            activate: true,
        }),
    );
    let pane_ref = model.layout.pane(pane);
    assert_eq!(pane_ref.len(), before + 1, "view {} was not added", view_id);
    pane_ref.tabs()[before].id.clone()
}

/// Check tab ownership and active-tab validity
pub fn assert_layout_invariants(model: &AppModel) {
    if let Err(e) = model.layout.check_invariants() {
        panic!("layout invariant violated: {}", e);
    }
}
