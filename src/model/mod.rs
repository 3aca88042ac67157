//! Application model - the complete state of the docking shell
//!
//! This module contains all the state types following the Elm Architecture pattern.

pub mod dock_layout;
pub mod geometry;
pub mod split;
pub mod ui;

pub use dock_layout::DockLayout;
pub use geometry::Rect;
pub use split::{LayoutSplit, TOTAL};
pub use ui::{TabDrag, UiState};

use crate::config::ShellConfig;
use crate::registry::ViewRegistry;
use crate::theme::ThemeStore;
use crate::workspace::{StorageBackend, WorkspaceStore};

/// The complete application model
#[derive(Debug)]
pub struct AppModel {
    /// Panes, tabs, split ratios and maximize state
    pub layout: DockLayout,
    /// Views tabs can be created from and restored to
    pub registry: ViewRegistry,
    /// Available themes and the current selection
    pub themes: ThemeStore,
    /// Saved workspaces
    pub workspaces: WorkspaceStore,
    /// Persisted shell configuration
    pub config: ShellConfig,
    /// Drag state and status messages
    pub ui: UiState,
}

impl AppModel {
    /// Build the model from its collaborators
    ///
    /// The layout starts from the configured split with the default tabs.
    /// The configured theme is selected when it exists; otherwise the store
    /// keeps its default and the config is corrected to match.
    pub fn new(
        config: ShellConfig,
        registry: ViewRegistry,
        themes: ThemeStore,
        backend: impl StorageBackend + 'static,
    ) -> Self {
        let mut themes = themes;
        let mut config = config;
        if let Err(e) = themes.select(&config.theme) {
            tracing::warn!("{}, falling back to {}", e, themes.current_id());
            config.theme = themes.current_id().to_string();
        }

        let workspaces = WorkspaceStore::open(backend);
        let mut ui = UiState::new();
        if workspaces.pruned_count() > 0 {
            ui.set_status(format!(
                "Dropped {} unreadable workspace(s)",
                workspaces.pruned_count()
            ));
        }

        Self {
            layout: DockLayout::with_default_tabs(config.layout.clone()),
            registry,
            themes,
            workspaces,
            config,
            ui,
        }
    }

    /// Id of the theme a snapshot captured now would record
    pub fn current_theme_id(&self) -> &str {
        self.themes.current_id()
    }
}
