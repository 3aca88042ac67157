//! Pane identities and per-pane tab strip state

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::Tab;

/// One of the four fixed docking regions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaneId {
    Left,
    Center,
    Right,
    Bottom,
}

impl PaneId {
    /// All panes in storage order
    pub const ALL: [PaneId; 4] = [PaneId::Left, PaneId::Center, PaneId::Right, PaneId::Bottom];

    /// Position in `PaneId::ALL`
    pub fn index(&self) -> usize {
        match self {
            PaneId::Left => 0,
            PaneId::Center => 1,
            PaneId::Right => 2,
            PaneId::Bottom => 3,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PaneId::Left => "left",
            PaneId::Center => "center",
            PaneId::Right => "right",
            PaneId::Bottom => "bottom",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            PaneId::Left => "Left",
            PaneId::Center => "Center",
            PaneId::Right => "Right",
            PaneId::Bottom => "Bottom",
        }
    }
}

impl fmt::Display for PaneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PaneId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PaneId::ALL
            .into_iter()
            .find(|p| p.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("Unknown pane: {}", s))
    }
}

/// Tab strip state for a single pane
///
/// Invariants:
/// - `active_tab_id`, when set, names a tab in `tabs`
/// - an empty pane has no active tab
/// - collapsing hides the pane but keeps its tabs
///
/// Mutators return whether anything changed so the owning `DockLayout` can
/// mark itself dirty.
#[derive(Debug, Clone, PartialEq)]
pub struct Pane {
    pub id: PaneId,
    tabs: Vec<Tab>,
    active_tab_id: Option<String>,
    collapsed: bool,
}

impl Pane {
    /// Create an empty, expanded pane
    pub fn new(id: PaneId) -> Self {
        Self {
            id,
            tabs: Vec::new(),
            active_tab_id: None,
            collapsed: false,
        }
    }

    /// Tabs in display order
    pub fn tabs(&self) -> &[Tab] {
        &self.tabs
    }

    pub fn active_tab_id(&self) -> Option<&str> {
        self.active_tab_id.as_deref()
    }

    pub fn active_tab(&self) -> Option<&Tab> {
        self.active_tab_id.as_deref().and_then(|id| self.tab(id))
    }

    pub fn tab(&self, tab_id: &str) -> Option<&Tab> {
        self.tabs.iter().find(|t| t.id == tab_id)
    }

    pub fn position(&self, tab_id: &str) -> Option<usize> {
        self.tabs.iter().position(|t| t.id == tab_id)
    }

    pub fn contains(&self, tab_id: &str) -> bool {
        self.position(tab_id).is_some()
    }

    pub fn tab_ids(&self) -> Vec<&str> {
        self.tabs.iter().map(|t| t.id.as_str()).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.tabs.is_empty()
    }

    pub fn len(&self) -> usize {
        self.tabs.len()
    }

    pub fn is_collapsed(&self) -> bool {
        self.collapsed
    }

    /// Append a tab
    ///
    /// The tab becomes active when `activate` is set or when the pane had no
    /// active tab. Id uniqueness is the caller's responsibility.
    pub fn add_tab(&mut self, tab: Tab, activate: bool) {
        if activate || self.active_tab_id.is_none() {
            self.active_tab_id = Some(tab.id.clone());
        }
        self.tabs.push(tab);
    }

    /// Insert a tab arriving from a drag-and-drop and activate it
    ///
    /// `at_index` past the end appends.
    pub fn accept_incoming_tab(&mut self, tab: Tab, at_index: Option<usize>) {
        let index = at_index.map_or(self.tabs.len(), |i| i.min(self.tabs.len()));
        self.active_tab_id = Some(tab.id.clone());
        self.tabs.insert(index, tab);
    }

    /// Remove a tab regardless of its closable flag
    ///
    /// If the removed tab was active, the first remaining tab becomes active.
    pub fn remove_tab(&mut self, tab_id: &str) -> Option<Tab> {
        let index = self.position(tab_id)?;
        let tab = self.tabs.remove(index);
        if self.active_tab_id.as_deref() == Some(tab_id) {
            self.active_tab_id = self.tabs.first().map(|t| t.id.clone());
        }
        Some(tab)
    }

    /// Close a tab the user asked to close; non-closable tabs stay
    pub fn close_tab(&mut self, tab_id: &str) -> Option<Tab> {
        if !self.tab(tab_id)?.closable {
            return None;
        }
        self.remove_tab(tab_id)
    }

    /// Close every closable tab except `keep_id`
    pub fn close_other_tabs(&mut self, keep_id: &str) -> Vec<Tab> {
        if !self.contains(keep_id) {
            return Vec::new();
        }
        let (closed, kept): (Vec<Tab>, Vec<Tab>) = std::mem::take(&mut self.tabs)
            .into_iter()
            .partition(|t| t.id != keep_id && t.closable);
        self.tabs = kept;
        let active_survived = self
            .active_tab_id
            .as_deref()
            .is_some_and(|id| self.contains(id));
        if !active_survived {
            self.active_tab_id = Some(keep_id.to_string());
        }
        closed
    }

    /// Activate a tab; unknown ids are ignored
    pub fn select_tab(&mut self, tab_id: &str) -> bool {
        if !self.contains(tab_id) || self.active_tab_id.as_deref() == Some(tab_id) {
            return false;
        }
        self.active_tab_id = Some(tab_id.to_string());
        true
    }

    /// Move a tab within the strip and activate it
    ///
    /// `to_index` is an insertion point in the strip as it is before the
    /// move (0 = before the first tab, `len` = after the last one).
    pub fn reorder_tab(&mut self, tab_id: &str, to_index: usize) -> bool {
        let Some(from) = self.position(tab_id) else {
            return false;
        };
        let mut target = to_index.min(self.tabs.len());
        if target > from {
            target -= 1;
        }
        let was_active = self.active_tab_id.as_deref() == Some(tab_id);
        if target == from && was_active {
            return false;
        }
        let tab = self.tabs.remove(from);
        self.active_tab_id = Some(tab.id.clone());
        self.tabs.insert(target, tab);
        true
    }

    /// Toggle visibility only; tabs are untouched
    pub fn set_collapsed(&mut self, collapsed: bool) -> bool {
        let changed = self.collapsed != collapsed;
        self.collapsed = collapsed;
        changed
    }

    /// Cycle to next tab
    pub fn next_tab(&mut self) -> bool {
        self.cycle(1)
    }

    /// Cycle to previous tab
    pub fn prev_tab(&mut self) -> bool {
        self.cycle(self.tabs.len().saturating_sub(1))
    }

    fn cycle(&mut self, step: usize) -> bool {
        let len = self.tabs.len();
        if len < 2 {
            return false;
        }
        let current = self
            .active_tab_id
            .as_deref()
            .and_then(|id| self.position(id))
            .unwrap_or(0);
        self.active_tab_id = Some(self.tabs[(current + step) % len].id.clone());
        true
    }

    /// Replace the whole strip, as done when restoring a workspace
    ///
    /// An active id that does not match any tab falls back to the first tab.
    pub fn replace_tabs(&mut self, tabs: Vec<Tab>, active_tab_id: Option<String>) {
        self.active_tab_id = active_tab_id
            .filter(|id| tabs.iter().any(|t| &t.id == id))
            .or_else(|| tabs.first().map(|t| t.id.clone()));
        self.tabs = tabs;
    }

    /// Check the active-tab invariant
    pub fn active_tab_is_valid(&self) -> bool {
        match self.active_tab_id.as_deref() {
            Some(id) => self.contains(id),
            None => true,
        }
    }
}
