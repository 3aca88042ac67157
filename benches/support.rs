//! Shared helpers for benchmarks

use dockspace::config::ShellConfig;
use dockspace::model::AppModel;
use dockspace::panel::{PaneId, Props};
use dockspace::registry::{ViewDefinition, ViewRegistry};
use dockspace::theme::ThemeStore;
use dockspace::workspace::MemoryStorage;

/// Registry with a handful of cheap views
#[allow(dead_code)]
pub fn make_registry() -> ViewRegistry {
    let mut registry = ViewRegistry::new();
    for id in ["chart", "table", "logs", "terminal"] {
        registry.register(ViewDefinition::new(id, id.to_uppercase(), move |_| id.to_string()));
    }
    registry
}

/// Create an AppModel with `tabs_per_pane` extra view tabs in every pane
#[allow(dead_code)]
pub fn make_model(tabs_per_pane: usize) -> AppModel {
    let mut model = AppModel::new(
        ShellConfig::default(),
        make_registry(),
        ThemeStore::builtin(),
        MemoryStorage::new(),
    );
    let views = ["chart", "table", "logs", "terminal"];
    for pane in PaneId::ALL {
        for i in 0..tabs_per_pane {
            model.layout.add_view_tab(
                pane,
                views[i % views.len()],
                Props::new(),
                None,
                false,
                &model.registry,
            );
        }
    }
    model
}
