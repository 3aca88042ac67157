//! Workspace persistence - named snapshots of layout, tabs and theme
//!
//! Snapshots are stored as one JSON array under a single storage key. Every
//! record is validated on read; malformed records are dropped and disappear
//! from storage on the next write.
//!
//! ## Wire format
//!
//! ```json
//! {
//!   "id": "workspace-1712345678901",
//!   "name": "Review",
//!   "timestamp": 1712345678901,
//!   "theme": "default-dark",
//!   "layout": { "horizontal": [20, 60, 20], "vertical": [75, 25] },
//!   "tabContainers": [
//!     { "id": "left", "tabs": [{ "id": "explorer", "title": "Explorer",
//!       "content": "builtin:explorer", "closable": false }], "activeTabId": "explorer" }
//!   ]
//! }
//! ```
//!
//! The nested `layout.horizontal/vertical` shape is the only one written.
//! The older flat shape (`panelSizes` or `layout` holding `leftWidth`,
//! `rightWidth`, `bottomHeight` percentages) is accepted on read.

use std::collections::HashMap;
use std::fmt;
use std::io;
use std::path::PathBuf;
use std::time::SystemTime;

use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

use crate::model::LayoutSplit;
use crate::panel::{slugify, BuiltinTab, PaneId, Props, TabContent, ViewRef};
use crate::registry::ViewRegistry;

/// Storage key holding the snapshot collection
pub const STORAGE_KEY: &str = "workspaces";

/// Longest accepted workspace name, in characters
pub const MAX_NAME_LEN: usize = 64;

// ============================================================================
// Wire model
// ============================================================================

/// A tab as persisted: content is a string, never a live renderable
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersistedTab {
    pub id: String,
    pub title: String,
    /// View id, built-in sentinel, or slugified title
    pub content: String,
    #[serde(default = "default_closable")]
    pub closable: bool,
    /// Props of view tabs
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub props: Props,
}

fn default_closable() -> bool {
    true
}

fn is_false(value: &bool) -> bool {
    !*value
}

/// One pane's persisted tab strip
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TabContainer {
    pub id: PaneId,
    pub tabs: Vec<PersistedTab>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active_tab_id: Option<String>,
    #[serde(default, skip_serializing_if = "is_false")]
    pub collapsed: bool,
}

/// Serializable description of the four-pane layout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutConfig {
    pub layout: LayoutSplit,
    pub tab_containers: Vec<TabContainer>,
    /// Pane that was maximized when captured; `layout` holds the
    /// pre-maximize ratios
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maximized: Option<PaneId>,
}

/// A named, timestamped capture of layout, tabs and theme
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkspaceSnapshot {
    pub id: String,
    pub name: String,
    /// Epoch milliseconds of the last save
    pub timestamp: u64,
    pub theme: String,
    #[serde(flatten)]
    pub config: LayoutConfig,
}

impl WorkspaceSnapshot {
    pub fn new(name: impl Into<String>, theme: impl Into<String>, config: LayoutConfig) -> Self {
        let timestamp = now_epoch_millis();
        Self {
            id: format!("workspace-{}", timestamp),
            name: name.into(),
            timestamp,
            theme: theme.into(),
            config,
        }
    }

    pub fn container(&self, pane: PaneId) -> Option<&TabContainer> {
        self.config.tab_containers.iter().find(|c| c.id == pane)
    }

    pub fn tab_count(&self) -> usize {
        self.config.tab_containers.iter().map(|c| c.tabs.len()).sum()
    }
}

pub fn now_epoch_millis() -> u64 {
    SystemTime::now()
        .duration_since(SystemTime::UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

// ============================================================================
// Content mapping
// ============================================================================

/// String form of a tab's content for persistence
///
/// Views keep their id and built-in tabs their sentinel. Inline content and
/// placeholders are saved as the slugified title, so they only come back if
/// a view with that id happens to be registered.
pub fn persisted_content(title: &str, content: &TabContent) -> String {
    match content {
        TabContent::View(view) => view.view_id.clone(),
        TabContent::Builtin(builtin) => builtin.tag().to_string(),
        TabContent::Inline(_) | TabContent::Placeholder { .. } => slugify(title),
    }
}

/// Resolve a persisted content string back into tab content
///
/// Order: registered view (exact id, then base id with the numeric suffix
/// stripped), built-in sentinel, placeholder echoing the saved title.
pub fn resolve_content(
    content: &str,
    title: &str,
    props: &Props,
    registry: &ViewRegistry,
) -> TabContent {
    if let Some(view) = registry.resolve(content) {
        return TabContent::View(ViewRef::new(view.id.clone()).with_props(props.clone()));
    }
    if let Some(builtin) = BuiltinTab::from_tag(content) {
        return TabContent::Builtin(builtin);
    }
    tracing::debug!(content, title, "no view for saved tab, using placeholder");
    TabContent::Placeholder {
        title: title.to_string(),
    }
}

// ============================================================================
// Validation
// ============================================================================

/// Validate a user-supplied workspace name, returning it trimmed
pub fn validate_name(name: &str) -> Result<String, String> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err("Workspace name cannot be empty".to_string());
    }
    if trimmed.chars().count() > MAX_NAME_LEN {
        return Err(format!(
            "Workspace name is too long (max {} characters)",
            MAX_NAME_LEN
        ));
    }
    if trimmed.chars().any(char::is_control) {
        return Err("Workspace name contains invalid characters".to_string());
    }
    Ok(trimmed.to_string())
}

/// Validate one stored record and convert it to a snapshot
///
/// Requires non-empty string `id` and `name`, numeric `timestamp`, string
/// `theme`, both layout axes as sequences (either shape) and a
/// `tabContainers` sequence.
pub fn parse_record(value: &Value) -> Result<WorkspaceSnapshot, String> {
    let Some(record) = value.as_object() else {
        return Err("record is not an object".to_string());
    };

    for key in ["id", "name"] {
        match record.get(key).and_then(Value::as_str) {
            Some(s) if !s.trim().is_empty() => {}
            _ => return Err(format!("missing or empty `{}`", key)),
        }
    }
    let timestamp = record
        .get("timestamp")
        .and_then(Value::as_f64)
        .filter(|t| t.is_finite() && *t >= 0.0)
        .ok_or_else(|| "missing numeric `timestamp`".to_string())?;
    if !record.get("theme").is_some_and(Value::is_string) {
        return Err("missing string `theme`".to_string());
    }
    if !record.get("tabContainers").is_some_and(Value::is_array) {
        return Err("missing `tabContainers` sequence".to_string());
    }
    let layout = canonical_layout(record)?;

    let mut normalized = record.clone();
    normalized.remove("panelSizes");
    normalized.insert("layout".to_string(), layout);
    normalized.insert("timestamp".to_string(), json!(timestamp as u64));

    let mut snapshot: WorkspaceSnapshot = serde_json::from_value(Value::Object(normalized))
        .map_err(|e| format!("invalid record: {}", e))?;
    snapshot.config.layout = snapshot.config.layout.normalized();
    Ok(snapshot)
}

/// Extract the layout in the nested shape, converting the flat one
fn canonical_layout(record: &Map<String, Value>) -> Result<Value, String> {
    if let Some(layout) = record.get("layout").and_then(Value::as_object) {
        if layout.get("horizontal").is_some_and(Value::is_array)
            && layout.get("vertical").is_some_and(Value::is_array)
        {
            return Ok(json!({
                "horizontal": layout["horizontal"],
                "vertical": layout["vertical"],
            }));
        }
    }

    let flat = record
        .get("panelSizes")
        .or_else(|| record.get("layout"))
        .and_then(Value::as_object)
        .ok_or_else(|| "missing `layout`".to_string())?;
    let read = |key: &str| {
        flat.get(key)
            .and_then(Value::as_f64)
            .map(|v| v as f32)
            .ok_or_else(|| format!("layout is missing `{}`", key))
    };
    let (left, right, bottom) = (read("leftWidth")?, read("rightWidth")?, read("bottomHeight")?);
    let center = (100.0 - left - right).max(0.0);
    Ok(json!({
        "horizontal": [left, center, right],
        "vertical": [(100.0 - bottom).max(0.0), bottom],
    }))
}

// ============================================================================
// Storage backends
// ============================================================================

/// Key-value storage with string values
pub trait StorageBackend: fmt::Debug {
    fn get(&self, key: &str) -> io::Result<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> io::Result<()>;
}

/// In-memory storage, used by tests and ephemeral sessions
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: HashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage pre-populated with one raw value
    pub fn with_entry(key: &str, value: impl Into<String>) -> Self {
        let mut storage = Self::default();
        storage.entries.insert(key.to_string(), value.into());
        storage
    }
}

impl StorageBackend for MemoryStorage {
    fn get(&self, key: &str) -> io::Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> io::Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// One `<key>.json` file per key inside a directory
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Storage under `~/.config/dockspace/storage/`
    pub fn default_location() -> Result<Self, String> {
        crate::config_paths::ensure_storage_dir().map(Self::new)
    }

    pub fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl StorageBackend for FileStorage {
    fn get(&self, key: &str) -> io::Result<Option<String>> {
        match std::fs::read_to_string(self.path_for(key)) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> io::Result<()> {
        std::fs::create_dir_all(&self.dir)?;
        std::fs::write(self.path_for(key), value)
    }
}

// ============================================================================
// Store
// ============================================================================

/// The live snapshot collection and the storage it is written to
#[derive(Debug)]
pub struct WorkspaceStore {
    backend: Box<dyn StorageBackend>,
    snapshots: Vec<WorkspaceSnapshot>,
    pruned: usize,
}

impl WorkspaceStore {
    /// Read and validate the stored collection
    ///
    /// Unreadable storage, corrupt JSON and malformed records never fail the
    /// open; they are logged and left out of the live collection.
    pub fn open(backend: impl StorageBackend + 'static) -> Self {
        let mut store = Self {
            backend: Box::new(backend),
            snapshots: Vec::new(),
            pruned: 0,
        };

        let raw = match store.backend.get(STORAGE_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return store,
            Err(e) => {
                tracing::warn!("Failed to read workspaces: {}", e);
                return store;
            }
        };

        let records = match serde_json::from_str::<Value>(&raw) {
            Ok(Value::Array(records)) => records,
            Ok(_) => {
                tracing::warn!("Stored workspaces are not a list, ignoring them");
                store.pruned = 1;
                return store;
            }
            Err(e) => {
                tracing::warn!("Stored workspaces are not valid JSON: {}", e);
                store.pruned = 1;
                return store;
            }
        };

        for (index, record) in records.iter().enumerate() {
            match parse_record(record) {
                Ok(snapshot) => store.snapshots.push(snapshot),
                Err(reason) => {
                    tracing::warn!(index, %reason, "Dropping malformed workspace record");
                    store.pruned += 1;
                }
            }
        }
        store
    }

    /// Number of records dropped when the collection was read
    pub fn pruned_count(&self) -> usize {
        self.pruned
    }

    /// All snapshots; order carries no meaning
    pub fn list(&self) -> &[WorkspaceSnapshot] {
        &self.snapshots
    }

    pub fn load(&self, id: &str) -> Option<&WorkspaceSnapshot> {
        self.snapshots.iter().find(|s| s.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.load(id).is_some()
    }

    /// `base`, or `base-<n>` for the first free `n`
    pub fn fresh_id(&self, base: &str) -> String {
        if !self.contains(base) {
            return base.to_string();
        }
        (2..)
            .map(|n| format!("{}-{}", base, n))
            .find(|id| !self.contains(id))
            .unwrap_or_else(|| base.to_string())
    }

    /// Insert or replace by id, stamping the current time
    pub fn save(&mut self, mut snapshot: WorkspaceSnapshot) -> Result<WorkspaceSnapshot, String> {
        snapshot.name = validate_name(&snapshot.name)?;
        snapshot.timestamp = now_epoch_millis();
        let mut next = self.snapshots.clone();
        match next.iter_mut().find(|s| s.id == snapshot.id) {
            Some(existing) => *existing = snapshot.clone(),
            None => next.push(snapshot.clone()),
        }
        self.commit(next)?;
        tracing::info!(id = %snapshot.id, name = %snapshot.name, "Saved workspace");
        Ok(snapshot)
    }

    /// Remove by id; returns whether anything was removed
    pub fn delete(&mut self, id: &str) -> Result<bool, String> {
        if !self.contains(id) {
            return Ok(false);
        }
        let next = self.snapshots.iter().filter(|s| s.id != id).cloned().collect();
        self.commit(next)?;
        tracing::info!(id, "Deleted workspace");
        Ok(true)
    }

    /// Copy a snapshot under a new name and id
    pub fn duplicate(&mut self, id: &str, name: &str) -> Result<Option<WorkspaceSnapshot>, String> {
        let name = validate_name(name)?;
        let Some(source) = self.load(id) else {
            return Ok(None);
        };
        let mut copy = source.clone();
        copy.name = name;
        copy.id = self.fresh_id(&format!("workspace-{}", now_epoch_millis()));
        self.save(copy).map(Some)
    }

    /// Rename a snapshot in place
    pub fn rename(&mut self, id: &str, name: &str) -> Result<bool, String> {
        let name = validate_name(name)?;
        let Some(mut snapshot) = self.load(id).cloned() else {
            return Ok(false);
        };
        snapshot.name = name;
        self.save(snapshot).map(|_| true)
    }

    /// Pretty JSON for a single snapshot
    pub fn export(&self, id: &str) -> Option<String> {
        let snapshot = self.load(id)?;
        serde_json::to_string_pretty(snapshot).ok()
    }

    /// Validate and store a snapshot exported elsewhere
    ///
    /// An id that is already taken gets a fresh one so nothing is overwritten.
    pub fn import(&mut self, json: &str) -> Result<WorkspaceSnapshot, String> {
        let value: Value =
            serde_json::from_str(json).map_err(|e| format!("Invalid workspace JSON: {}", e))?;
        let mut snapshot =
            parse_record(&value).map_err(|reason| format!("Invalid workspace: {}", reason))?;
        snapshot.id = self.fresh_id(&snapshot.id);
        self.save(snapshot)
    }

    /// Write `next` and make it the live collection, pruning dropped records
    ///
    /// The live collection is left untouched when the write fails.
    fn commit(&mut self, next: Vec<WorkspaceSnapshot>) -> Result<(), String> {
        let contents = serde_json::to_string(&next)
            .map_err(|e| format!("Failed to serialize workspaces: {}", e))?;
        self.backend
            .set(STORAGE_KEY, &contents)
            .map_err(|e| format!("Failed to write workspaces: {}", e))?;
        self.snapshots = next;
        if self.pruned > 0 {
            tracing::debug!("Pruned {} malformed workspace records", self.pruned);
            self.pruned = 0;
        }
        Ok(())
    }

    /// Raw stored value, for diagnostics
    pub fn raw(&self) -> Option<String> {
        self.backend.get(STORAGE_KEY).ok().flatten()
    }
}
