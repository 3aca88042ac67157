//! Shell configuration persistence
//!
//! Stores user preferences in `~/.config/dockspace/config.yaml`

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::panel::PaneId;

/// Shell configuration that persists across sessions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShellConfig {
    /// Selected theme id (e.g., "default-dark", "default-light")
    #[serde(default = "default_theme")]
    pub theme: String,

    /// Initial split ratios and collapse policy
    #[serde(default)]
    pub layout: LayoutSettings,
}

fn default_theme() -> String {
    crate::theme::DEFAULT_THEME_ID.to_string()
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            theme: default_theme(),
            layout: LayoutSettings::default(),
        }
    }
}

/// Split defaults and collapse policy for the docking layout
///
/// All sizes are percentages of the available space.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutSettings {
    /// left / center / right
    #[serde(default = "default_horizontal")]
    pub horizontal: [f32; 3],
    /// main / bottom
    #[serde(default = "default_vertical")]
    pub vertical: [f32; 2],
    /// Size below which a resized pane auto-collapses
    #[serde(default)]
    pub collapse_threshold: PaneThresholds,
    /// Smallest size an auto-collapsed pane keeps in its stored ratio
    #[serde(default = "default_size_floor")]
    pub size_floor: f32,
}

fn default_horizontal() -> [f32; 3] {
    [20.0, 60.0, 20.0]
}

fn default_vertical() -> [f32; 2] {
    [75.0, 25.0]
}

fn default_size_floor() -> f32 {
    2.0
}

impl Default for LayoutSettings {
    fn default() -> Self {
        Self {
            horizontal: default_horizontal(),
            vertical: default_vertical(),
            collapse_threshold: PaneThresholds::default(),
            size_floor: default_size_floor(),
        }
    }
}

/// Per-pane collapse thresholds
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaneThresholds {
    pub left: f32,
    pub center: f32,
    pub right: f32,
    pub bottom: f32,
}

impl Default for PaneThresholds {
    fn default() -> Self {
        Self {
            left: 5.0,
            center: 10.0,
            right: 5.0,
            bottom: 5.0,
        }
    }
}

impl PaneThresholds {
    pub fn get(&self, pane: PaneId) -> f32 {
        match pane {
            PaneId::Left => self.left,
            PaneId::Center => self.center,
            PaneId::Right => self.right,
            PaneId::Bottom => self.bottom,
        }
    }
}

impl ShellConfig {
    /// Load config from disk, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };
        Self::load_from(&path)
    }

    /// Load config from a specific file, falling back to defaults
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => match serde_yaml::from_str(&content) {
                Ok(config) => {
                    tracing::info!("Loaded config from {}", path.display());
                    config
                }
                Err(e) => {
                    tracing::warn!("Failed to parse config at {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!("Failed to read config at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Save config to disk
    ///
    /// Creates the config directory if it doesn't exist.
    pub fn save(&self) -> Result<(), String> {
        let path = crate::config_paths::config_file()
            .ok_or_else(|| "No config directory available".to_string())?;
        self.save_to(&path)
    }

    /// Save config to a specific file
    pub fn save_to(&self, path: &Path) -> Result<(), String> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create config directory: {}", e))?;
        }

        let content = serde_yaml::to_string(self)
            .map_err(|e| format!("Failed to serialize config: {}", e))?;

        std::fs::write(path, content)
            .map_err(|e| format!("Failed to write config to {}: {}", path.display(), e))?;

        tracing::info!("Saved config to {}", path.display());
        Ok(())
    }
}
