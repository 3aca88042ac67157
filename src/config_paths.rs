//! Centralized configuration paths for dockspace
//!
//! All config files live under:
//! - Unix/macOS: `~/.config/dockspace/`
//! - Windows: `%APPDATA%\dockspace\`
//!
//! This module is the single source of truth for config paths.

use std::{
    env, fs,
    path::{Path, PathBuf},
};

const APP_DIR: &str = "dockspace";

/// Base config directory for dockspace
///
/// Unix/macOS:
///   - If XDG_CONFIG_HOME is set: `$XDG_CONFIG_HOME/dockspace`
///   - Else: `~/.config/dockspace`
///
/// Windows:
///   - `%APPDATA%\dockspace`
pub fn config_dir() -> Option<PathBuf> {
    #[cfg(target_os = "windows")]
    {
        env::var("APPDATA")
            .ok()
            .map(|appdata| PathBuf::from(appdata).join(APP_DIR))
    }

    #[cfg(not(target_os = "windows"))]
    {
        env::var_os("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .or_else(|| dirs::home_dir().map(|h| h.join(".config")))
            .map(|config| config.join(APP_DIR))
    }
}

/// `~/.config/dockspace/themes/`
pub fn themes_dir() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("themes"))
}

/// `~/.config/dockspace/config.yaml`
pub fn config_file() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("config.yaml"))
}

/// `~/.config/dockspace/storage/`
///
/// Holds one `<key>.json` file per storage key, read and written by
/// `FileStorage`. Saved workspaces live in `workspaces.json`.
pub fn storage_dir() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("storage"))
}

/// `~/.config/dockspace/logs/`
pub fn logs_dir() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("logs"))
}

fn ensure_dir(path: &Path) -> Result<(), String> {
    fs::create_dir_all(path)
        .map_err(|e| format!("Failed to create directory {}: {}", path.display(), e))
}

/// Ensure the base config dir exists, returning it
pub fn ensure_config_dir() -> Result<PathBuf, String> {
    let dir = config_dir().ok_or_else(|| "No config directory available".to_string())?;
    ensure_dir(&dir)?;
    Ok(dir)
}

/// Ensure storage dir exists, returning it
///
/// Files inside are named `<key>.json` after the storage key.
pub fn ensure_storage_dir() -> Result<PathBuf, String> {
    let storage = ensure_config_dir()?.join("storage");
    ensure_dir(&storage)?;
    Ok(storage)
}

/// Ensure logs dir exists, returning it
pub fn ensure_logs_dir() -> Result<PathBuf, String> {
    let logs = ensure_config_dir()?.join("logs");
    ensure_dir(&logs)?;
    Ok(logs)
}
