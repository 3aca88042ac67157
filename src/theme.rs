//! Theme system for the docking shell
//!
//! Provides YAML-based theming support with compile-time embedded themes
//! and user-defined themes from config directories.
//!
//! A theme is a flat table of named color tokens and size tokens. The shell
//! never reads individual tokens itself; it projects the current theme onto
//! presentation variables (`<prefix>-color-<key>`, `<prefix>-size-<key>`)
//! that the styling layer consumes.
//!
//! Theme loading priority:
//! 1. User config: `~/.config/dockspace/themes/{id}.yaml`
//! 2. Embedded: Built-in themes compiled into binary

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;

// Embed theme YAML files at compile time
pub const DEFAULT_DARK_YAML: &str = include_str!("../themes/default-dark.yaml");
pub const DEFAULT_LIGHT_YAML: &str = include_str!("../themes/default-light.yaml");
pub const HIGH_CONTRAST_YAML: &str = include_str!("../themes/high-contrast.yaml");

/// Theme selected when nothing else is configured
pub const DEFAULT_THEME_ID: &str = "default-dark";

/// Prefix used when projecting a theme onto presentation variables
pub const DEFAULT_VARIABLE_PREFIX: &str = "--dock";

/// Color tokens every theme must define
pub const REQUIRED_COLORS: &[&str] = &[
    "background",
    "foreground",
    "panel-background",
    "tab-active",
    "tab-inactive",
    "border",
    "accent",
];

/// A built-in theme entry
pub struct BuiltinTheme {
    /// Stable identifier for config (e.g. "default-dark")
    pub id: &'static str,
    /// Embedded YAML content
    pub yaml: &'static str,
}

/// Registry of all built-in themes
pub const BUILTIN_THEMES: &[BuiltinTheme] = &[
    BuiltinTheme {
        id: "default-dark",
        yaml: DEFAULT_DARK_YAML,
    },
    BuiltinTheme {
        id: "default-light",
        yaml: DEFAULT_LIGHT_YAML,
    },
    BuiltinTheme {
        id: "high-contrast",
        yaml: HIGH_CONTRAST_YAML,
    },
];

/// Where the theme came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeSource {
    /// User-defined theme in ~/.config/dockspace/themes/
    User,
    /// Built-in theme embedded in binary
    Builtin,
}

/// Information about an available theme
#[derive(Debug, Clone)]
pub struct ThemeInfo {
    /// Stable identifier (e.g., "default-dark", "my-custom-theme")
    pub id: String,
    /// Display name from YAML (e.g., "Default Dark")
    pub name: String,
    /// Where this theme is loaded from
    pub source: ThemeSource,
}

/// Load a theme from a YAML file
pub fn from_file(path: &Path) -> Result<Theme, String> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| format!("Failed to read theme file {}: {}", path.display(), e))?;
    Theme::from_yaml(&content)
}

/// RGBA color (0-255 per channel)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    /// Create a new color from RGB values (alpha defaults to 255)
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Create a new color from RGBA values
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Parse from "#RRGGBB" or "#RRGGBBAA" hex string
    pub fn from_hex(s: &str) -> Result<Self, String> {
        let s = s.trim_start_matches('#');
        if !s.is_ascii() {
            return Err(format!("Invalid color format: {}", s));
        }
        let channel = |i: usize| u8::from_str_radix(&s[i..i + 2], 16).map_err(|e| e.to_string());
        match s.len() {
            6 => Ok(Color::rgb(channel(0)?, channel(2)?, channel(4)?)),
            8 => Ok(Color::rgba(channel(0)?, channel(2)?, channel(4)?, channel(6)?)),
            _ => Err(format!("Invalid color format: {}", s)),
        }
    }

    /// Format as "#RRGGBB", or "#RRGGBBAA" when not fully opaque
    pub fn to_hex(&self) -> String {
        if self.a == 255 {
            format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
        } else {
            format!("#{:02X}{:02X}{:02X}{:02X}", self.r, self.g, self.b, self.a)
        }
    }
}

/// Raw theme data as parsed from YAML
#[derive(Debug, Clone, Deserialize)]
pub struct ThemeData {
    pub version: u32,
    pub name: String,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    pub colors: BTreeMap<String, String>,
    #[serde(default)]
    pub sizes: BTreeMap<String, String>,
}

/// Resolved theme with parsed colors
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub name: String,
    pub author: Option<String>,
    pub description: Option<String>,
    pub colors: BTreeMap<String, Color>,
    /// Size tokens are passed through verbatim (e.g. "32px")
    pub sizes: BTreeMap<String, String>,
}

impl Theme {
    /// Load theme from YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self, String> {
        let data: ThemeData =
            serde_yaml::from_str(yaml).map_err(|e| format!("YAML parse error: {}", e))?;
        Self::from_data(data)
    }

    /// Load a built-in theme by id
    pub fn from_builtin(id: &str) -> Result<Self, String> {
        let entry = BUILTIN_THEMES
            .iter()
            .find(|t| t.id == id)
            .ok_or_else(|| format!("Unknown theme id: {}", id))?;
        Theme::from_yaml(entry.yaml)
    }

    /// Convert raw theme data to resolved theme
    pub fn from_data(data: ThemeData) -> Result<Self, String> {
        if data.version != 1 {
            return Err(format!("Unsupported theme version: {}", data.version));
        }
        if let Some(missing) = REQUIRED_COLORS
            .iter()
            .find(|key| !data.colors.contains_key(**key))
        {
            return Err(format!("Theme '{}' is missing color '{}'", data.name, missing));
        }

        let colors = data
            .colors
            .iter()
            .map(|(key, value)| {
                Color::from_hex(value)
                    .map(|color| (key.clone(), color))
                    .map_err(|e| format!("Invalid color '{}': {}", key, e))
            })
            .collect::<Result<BTreeMap<_, _>, String>>()?;

        Ok(Theme {
            name: data.name,
            author: data.author,
            description: data.description,
            colors,
            sizes: data.sizes,
        })
    }

    pub fn color(&self, key: &str) -> Option<Color> {
        self.colors.get(key).copied()
    }

    /// Project the theme onto `<prefix>-color-<key>` / `<prefix>-size-<key>`
    ///
    /// Colors come first, each group in key order.
    pub fn presentation_variables(&self, prefix: &str) -> Vec<(String, String)> {
        let colors = self
            .colors
            .iter()
            .map(|(key, color)| (format!("{}-color-{}", prefix, key), color.to_hex()));
        let sizes = self
            .sizes
            .iter()
            .map(|(key, size)| (format!("{}-size-{}", prefix, key), size.clone()));
        colors.chain(sizes).collect()
    }

    /// Default dark theme (YAML-backed with Rust fallback)
    pub fn default_dark() -> Self {
        match Theme::from_yaml(DEFAULT_DARK_YAML) {
            Ok(theme) => theme,
            Err(_) => {
                // Hardcoded fallback if YAML parsing fails
                let colors = [
                    ("background", Color::rgb(0x1E, 0x1E, 0x1E)),
                    ("foreground", Color::rgb(0xD4, 0xD4, 0xD4)),
                    ("panel-background", Color::rgb(0x25, 0x25, 0x26)),
                    ("tab-active", Color::rgb(0x1E, 0x1E, 0x1E)),
                    ("tab-inactive", Color::rgb(0x2D, 0x2D, 0x2D)),
                    ("border", Color::rgb(0x3C, 0x3C, 0x3C)),
                    ("accent", Color::rgb(0x00, 0x7A, 0xCC)),
                ];
                Theme {
                    name: "Default Dark".to_string(),
                    author: None,
                    description: None,
                    colors: colors
                        .into_iter()
                        .map(|(k, c)| (k.to_string(), c))
                        .collect(),
                    sizes: BTreeMap::new(),
                }
            }
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::default_dark()
    }
}

// ============================================================================
// Theme store
// ============================================================================

#[derive(Debug, Clone)]
struct ThemeEntry {
    id: String,
    theme: Theme,
    source: ThemeSource,
}

/// Available themes plus the current selection
///
/// The current theme is always resolvable: selecting an unknown id fails
/// and leaves the selection unchanged.
#[derive(Debug, Clone)]
pub struct ThemeStore {
    entries: Vec<ThemeEntry>,
    current_id: String,
    current: Theme,
}

impl Default for ThemeStore {
    fn default() -> Self {
        Self::builtin()
    }
}

impl ThemeStore {
    /// Store with only the embedded themes, `default-dark` selected
    pub fn builtin() -> Self {
        let mut entries = Vec::with_capacity(BUILTIN_THEMES.len());
        for builtin in BUILTIN_THEMES {
            match Theme::from_yaml(builtin.yaml) {
                Ok(theme) => entries.push(ThemeEntry {
                    id: builtin.id.to_string(),
                    theme,
                    source: ThemeSource::Builtin,
                }),
                Err(e) => tracing::warn!("Failed to parse builtin theme {}: {}", builtin.id, e),
            }
        }
        let current = entries
            .iter()
            .find(|e| e.id == DEFAULT_THEME_ID)
            .map(|e| e.theme.clone())
            .unwrap_or_default();
        Self {
            entries,
            current_id: DEFAULT_THEME_ID.to_string(),
            current,
        }
    }

    /// Built-ins plus user themes from the config directory
    pub fn load() -> Self {
        let mut store = Self::builtin();
        if let Some(dir) = crate::config_paths::themes_dir() {
            store.load_user_themes_from(&dir);
        }
        store
    }

    /// Add every `*.yaml` / `*.yml` theme in a directory
    ///
    /// User themes replace built-ins with the same id. Files that fail to
    /// parse are skipped with a warning. Returns the number loaded.
    pub fn load_user_themes_from(&mut self, dir: &Path) -> usize {
        let Ok(entries) = std::fs::read_dir(dir) else {
            tracing::debug!("No user themes directory at {}", dir.display());
            return 0;
        };

        let mut paths: Vec<_> = entries
            .filter_map(|e| e.ok())
            .map(|e| e.path())
            .filter(|p| p.extension().is_some_and(|ext| ext == "yaml" || ext == "yml"))
            .collect();
        paths.sort();

        let mut loaded = 0;
        for path in paths {
            let Some(id) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };
            match from_file(&path) {
                Ok(theme) => {
                    tracing::info!("Loading user theme from {}", path.display());
                    self.insert(id, theme, ThemeSource::User);
                    loaded += 1;
                }
                Err(e) => tracing::warn!("Skipping theme {}: {}", path.display(), e),
            }
        }
        loaded
    }

    /// Add or replace a theme, returning the one it replaced
    pub fn insert(&mut self, id: &str, theme: Theme, source: ThemeSource) -> Option<Theme> {
        if id == self.current_id {
            self.current = theme.clone();
        }
        match self.entries.iter_mut().find(|e| e.id == id) {
            Some(entry) => {
                entry.source = source;
                Some(std::mem::replace(&mut entry.theme, theme))
            }
            None => {
                self.entries.push(ThemeEntry {
                    id: id.to_string(),
                    theme,
                    source,
                });
                None
            }
        }
    }

    /// Make a theme current
    pub fn select(&mut self, id: &str) -> Result<&Theme, String> {
        let entry = self
            .entries
            .iter()
            .find(|e| e.id == id)
            .ok_or_else(|| format!("Unknown theme id: {}", id))?;
        self.current = entry.theme.clone();
        self.current_id = entry.id.clone();
        tracing::info!("Selected theme: {}", id);
        Ok(&self.current)
    }

    pub fn current(&self) -> &Theme {
        &self.current
    }

    pub fn current_id(&self) -> &str {
        &self.current_id
    }

    pub fn get(&self, id: &str) -> Option<&Theme> {
        self.entries.iter().find(|e| e.id == id).map(|e| &e.theme)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// Available themes, built-ins first in registration order
    pub fn list(&self) -> Vec<ThemeInfo> {
        self.entries
            .iter()
            .map(|e| ThemeInfo {
                id: e.id.clone(),
                name: e.theme.name.clone(),
                source: e.source,
            })
            .collect()
    }

    /// Presentation variables for the current theme
    pub fn current_variables(&self, prefix: &str) -> Vec<(String, String)> {
        self.current.presentation_variables(prefix)
    }
}
