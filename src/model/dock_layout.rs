//! Docking layout engine
//!
//! Owns the four panes, the split ratios and the single maximize save slot.
//! All tab traffic goes through here so tab ids stay unique across panes and
//! every tab belongs to exactly one pane.

use crate::config::LayoutSettings;
use crate::panel::{DropZone, InlineContent, Pane, PaneId, Props, Tab, TabContent, ViewRef};
use crate::registry::ViewRegistry;
use crate::workspace::{
    persisted_content, resolve_content, LayoutConfig, PersistedTab, TabContainer,
    WorkspaceSnapshot,
};

use super::{LayoutSplit, Rect};

/// Layout captured when a pane is maximized
#[derive(Debug, Clone, Copy, PartialEq)]
struct SavedLayout {
    split: LayoutSplit,
    collapsed: [bool; 4],
}

/// The docking layout state machine
#[derive(Debug, Clone)]
pub struct DockLayout {
    panes: [Pane; 4],
    split: LayoutSplit,
    settings: LayoutSettings,
    maximized: Option<PaneId>,
    saved: Option<SavedLayout>,
    next_tab_seq: u64,
    dirty: bool,
}

impl Default for DockLayout {
    fn default() -> Self {
        Self::new(LayoutSettings::default())
    }
}

impl DockLayout {
    /// Empty panes with the configured split
    pub fn new(settings: LayoutSettings) -> Self {
        Self {
            panes: PaneId::ALL.map(Pane::new),
            split: LayoutSplit::new(settings.horizontal, settings.vertical),
            settings,
            maximized: None,
            saved: None,
            next_tab_seq: 0,
            dirty: false,
        }
    }

    /// Layout seeded with the built-in default tabs
    pub fn with_default_tabs(settings: LayoutSettings) -> Self {
        let mut layout = Self::new(settings);
        for builtin in crate::panel::BuiltinTab::ALL {
            layout.add_tab(builtin.default_pane(), Tab::builtin(builtin), true);
        }
        layout.dirty = false;
        layout
    }

    // ------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------

    pub fn pane(&self, id: PaneId) -> &Pane {
        &self.panes[id.index()]
    }

    pub fn panes(&self) -> impl Iterator<Item = &Pane> {
        self.panes.iter()
    }

    /// Stored split ratios
    pub fn split(&self) -> LayoutSplit {
        self.split
    }

    pub fn settings(&self) -> &LayoutSettings {
        &self.settings
    }

    pub fn maximized(&self) -> Option<PaneId> {
        self.maximized
    }

    pub fn is_collapsed(&self, pane: PaneId) -> bool {
        self.pane(pane).is_collapsed()
    }

    /// Collapse flags indexed by `PaneId::index`
    pub fn collapsed_flags(&self) -> [bool; 4] {
        PaneId::ALL.map(|p| self.is_collapsed(p))
    }

    /// Pane that currently owns a tab
    pub fn find_tab(&self, tab_id: &str) -> Option<PaneId> {
        self.panes.iter().find(|p| p.contains(tab_id)).map(|p| p.id)
    }

    pub fn contains_tab(&self, tab_id: &str) -> bool {
        self.find_tab(tab_id).is_some()
    }

    pub fn tab_count(&self) -> usize {
        self.panes.iter().map(Pane::len).sum()
    }

    /// Whether state changed since the last `take_dirty`
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn take_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    fn pane_mut(&mut self, id: PaneId) -> &mut Pane {
        &mut self.panes[id.index()]
    }

    fn mark(&mut self, changed: bool) -> bool {
        self.dirty |= changed;
        changed
    }

    // ------------------------------------------------------------------
    // Tabs
    // ------------------------------------------------------------------

    /// Add a tab; rejected when its id is already used in any pane
    pub fn add_tab(&mut self, pane: PaneId, tab: Tab, activate: bool) -> bool {
        if self.contains_tab(&tab.id) {
            tracing::warn!(tab = %tab.id, %pane, "Tab id already in use, not adding");
            return false;
        }
        tracing::debug!(tab = %tab.id, %pane, activate, "add tab");
        self.pane_mut(pane).add_tab(tab, activate);
        self.mark(true)
    }

    /// Add a tab for a registered view, returning the generated tab id
    ///
    /// The tab title defaults to the view title; `props` are layered over
    /// the view's default props. Unknown views are ignored.
    pub fn add_view_tab(
        &mut self,
        pane: PaneId,
        view_id: &str,
        props: Props,
        title: Option<String>,
        activate: bool,
        registry: &ViewRegistry,
    ) -> Option<String> {
        let Some(view) = registry.get(view_id) else {
            tracing::warn!(view = view_id, "Cannot add tab for unregistered view");
            return None;
        };
        let tab_id = self.generate_tab_id(view_id);
        let title = title.unwrap_or_else(|| view.title.clone());
        let view_ref = ViewRef::new(view_id).with_props(view.merged_props(&props));
        self.add_tab(pane, Tab::view(tab_id.clone(), title, view_ref), activate)
            .then_some(tab_id)
    }

    /// Add a tab with inline content under a caller-chosen id
    pub fn add_custom_tab(
        &mut self,
        pane: PaneId,
        tab_id: &str,
        content: InlineContent,
        title: Option<String>,
        activate: bool,
    ) -> bool {
        let title = title.unwrap_or_else(|| tab_id.to_string());
        let tab = Tab::new(tab_id, title, TabContent::Inline(content));
        self.add_tab(pane, tab, activate)
    }

    /// `<base>-<n>` with the first `n` not used by any tab
    fn generate_tab_id(&mut self, base: &str) -> String {
        loop {
            self.next_tab_seq += 1;
            let id = format!("{}-{}", base, self.next_tab_seq);
            if !self.contains_tab(&id) {
                return id;
            }
        }
    }

    /// Close a closable tab in a pane
    pub fn close_tab(&mut self, pane: PaneId, tab_id: &str) -> Option<Tab> {
        let closed = self.pane_mut(pane).close_tab(tab_id);
        self.mark(closed.is_some());
        closed
    }

    /// Close every closable tab in a pane except one
    pub fn close_other_tabs(&mut self, pane: PaneId, keep_id: &str) -> usize {
        let closed = self.pane_mut(pane).close_other_tabs(keep_id).len();
        self.mark(closed > 0);
        closed
    }

    pub fn select_tab(&mut self, pane: PaneId, tab_id: &str) -> bool {
        let changed = self.pane_mut(pane).select_tab(tab_id);
        self.mark(changed)
    }

    pub fn next_tab(&mut self, pane: PaneId) -> bool {
        let changed = self.pane_mut(pane).next_tab();
        self.mark(changed)
    }

    pub fn prev_tab(&mut self, pane: PaneId) -> bool {
        let changed = self.pane_mut(pane).prev_tab();
        self.mark(changed)
    }

    /// Move a tab to another pane in one step
    ///
    /// No-op when source and target are the same pane or the tab is not in
    /// `from`. The tab is inserted at `at_index` (appended when `None`) and
    /// activated in the target.
    pub fn move_tab(
        &mut self,
        tab_id: &str,
        from: PaneId,
        to: PaneId,
        at_index: Option<usize>,
    ) -> bool {
        if from == to {
            return false;
        }
        let Some(tab) = self.pane_mut(from).remove_tab(tab_id) else {
            return false;
        };
        tracing::debug!(tab = tab_id, %from, %to, ?at_index, "move tab");
        self.pane_mut(to).accept_incoming_tab(tab, at_index);
        self.mark(true)
    }

    /// Move a tab within its own pane
    pub fn reorder_tab(&mut self, pane: PaneId, tab_id: &str, to_index: usize) -> bool {
        let changed = self.pane_mut(pane).reorder_tab(tab_id, to_index);
        self.mark(changed)
    }

    /// Complete a drag-and-drop
    ///
    /// Across panes this is `move_tab`; within one pane it is a reorder,
    /// with center/end-of-strip drops moving the tab to the end.
    pub fn apply_drop(&mut self, tab_id: &str, source: PaneId, target: PaneId, zone: DropZone) -> bool {
        if source != target {
            return self.move_tab(tab_id, source, target, zone.insert_index());
        }
        let index = zone
            .insert_index()
            .unwrap_or_else(|| self.pane(target).len());
        self.reorder_tab(target, tab_id, index)
    }

    // ------------------------------------------------------------------
    // Sizing
    // ------------------------------------------------------------------

    /// Resize a pane, auto-collapsing below its threshold
    ///
    /// Below the threshold the pane collapses and its stored size is kept at
    /// or above the configured floor; at or above the threshold it expands.
    pub fn resize_pane(&mut self, pane: PaneId, new_size: f32) {
        let threshold = self.settings.collapse_threshold.get(pane);
        let collapse = new_size < threshold;
        let stored = if collapse {
            new_size.max(self.settings.size_floor)
        } else {
            new_size
        };
        let applied = self.split.set_size(pane, stored);
        self.pane_mut(pane).set_collapsed(collapse);
        tracing::debug!(%pane, new_size, applied, collapse, "resize pane");
        self.mark(true);
    }

    /// Hand a pane's share to its neighbour and collapse it
    pub fn minimize(&mut self, pane: PaneId) {
        self.split.minimize(pane);
        self.pane_mut(pane).set_collapsed(true);
        self.mark(true);
    }

    pub fn set_collapsed(&mut self, pane: PaneId, collapsed: bool) -> bool {
        let changed = self.pane_mut(pane).set_collapsed(collapsed);
        self.mark(changed)
    }

    pub fn toggle_collapsed(&mut self, pane: PaneId) {
        let collapsed = self.is_collapsed(pane);
        self.set_collapsed(pane, !collapsed);
    }

    /// Give a pane all the space, hiding its siblings
    ///
    /// Maximizing the maximized pane restores. Maximizing a different pane
    /// restores first, so the save slot always holds the un-maximized layout.
    pub fn maximize(&mut self, pane: PaneId) {
        match self.maximized {
            Some(current) if current == pane => {
                self.restore();
                return;
            }
            Some(_) => {
                self.restore();
            }
            None => {}
        }

        self.saved = Some(SavedLayout {
            split: self.split,
            collapsed: self.collapsed_flags(),
        });
        self.split.maximize(pane);
        for id in PaneId::ALL {
            self.pane_mut(id).set_collapsed(id != pane);
        }
        self.maximized = Some(pane);
        tracing::debug!(%pane, "maximize");
        self.mark(true);
    }

    /// Pop the save slot; returns false when nothing is maximized
    pub fn restore(&mut self) -> bool {
        let Some(saved) = self.saved.take() else {
            return false;
        };
        self.split = saved.split;
        for id in PaneId::ALL {
            self.panes[id.index()].set_collapsed(saved.collapsed[id.index()]);
        }
        self.maximized = None;
        tracing::debug!("restore");
        self.mark(true)
    }

    /// Sizes to render with, collapsed panes at zero
    pub fn effective_sizes(&self) -> LayoutSplit {
        self.split.effective(self.collapsed_flags())
    }

    /// Project the effective sizes onto a pixel area
    pub fn pane_rects(&self, area: Rect) -> [(PaneId, Rect); 4] {
        let sizes = self.effective_sizes();
        let main_height = area.height * sizes.vertical[0] / 100.0;
        let widths = sizes.horizontal.map(|s| area.width * s / 100.0);

        let left = Rect::new(area.x, area.y, widths[0], main_height);
        let center = Rect::new(left.x + left.width, area.y, widths[1], main_height);
        let right = Rect::new(center.x + center.width, area.y, widths[2], main_height);
        let bottom = Rect::new(
            area.x,
            area.y + main_height,
            area.width,
            area.height - main_height,
        );

        [
            (PaneId::Left, left),
            (PaneId::Center, center),
            (PaneId::Right, right),
            (PaneId::Bottom, bottom),
        ]
    }

    // ------------------------------------------------------------------
    // Snapshots
    // ------------------------------------------------------------------

    /// Serializable description of the current layout
    ///
    /// While a pane is maximized the pre-maximize ratios and collapse flags
    /// are captured together with the maximized pane.
    pub fn capture_layout(&self) -> LayoutConfig {
        let (split, collapsed) = match self.saved {
            Some(saved) => (saved.split, saved.collapsed),
            None => (self.split, self.collapsed_flags()),
        };

        let tab_containers = self
            .panes
            .iter()
            .map(|pane| TabContainer {
                id: pane.id,
                tabs: pane
                    .tabs()
                    .iter()
                    .map(|tab| PersistedTab {
                        id: tab.id.clone(),
                        title: tab.title.clone(),
                        content: persisted_content(&tab.title, &tab.content),
                        closable: tab.closable,
                        props: match &tab.content {
                            TabContent::View(view) => view.props.clone(),
                            _ => Props::new(),
                        },
                    })
                    .collect(),
                active_tab_id: pane.active_tab_id().map(str::to_string),
                collapsed: collapsed[pane.id.index()],
            })
            .collect();

        LayoutConfig {
            layout: split,
            tab_containers,
            maximized: self.maximized,
        }
    }

    /// Capture a named snapshot with the given theme
    pub fn capture_snapshot(&self, name: &str, theme_id: &str) -> WorkspaceSnapshot {
        WorkspaceSnapshot::new(name, theme_id, self.capture_layout())
    }

    /// Replace panes and split with a captured layout
    ///
    /// Content strings resolve through the registry; anything unresolvable
    /// becomes a placeholder showing the saved title. Duplicate tab ids keep
    /// their first occurrence.
    pub fn restore_layout(&mut self, config: &LayoutConfig, registry: &ViewRegistry) {
        let mut tabs: [Vec<Tab>; 4] = Default::default();
        let mut active: [Option<String>; 4] = Default::default();
        let mut collapsed = [false; 4];
        let mut seen = std::collections::HashSet::new();

        for container in &config.tab_containers {
            let index = container.id.index();
            for saved in &container.tabs {
                if !seen.insert(saved.id.clone()) {
                    tracing::warn!(tab = %saved.id, "Skipping duplicate tab id in workspace");
                    continue;
                }
                let content = resolve_content(&saved.content, &saved.title, &saved.props, registry);
                tabs[index].push(
                    Tab::new(saved.id.clone(), saved.title.clone(), content)
                        .with_closable(saved.closable),
                );
            }
            if container.active_tab_id.is_some() {
                active[index] = container.active_tab_id.clone();
            }
            collapsed[index] |= container.collapsed;
        }

        self.maximized = None;
        self.saved = None;
        self.split = config.layout.normalized();
        for (id, pane_tabs) in PaneId::ALL.into_iter().zip(tabs) {
            let pane = self.pane_mut(id);
            pane.replace_tabs(pane_tabs, active[id.index()].take());
            pane.set_collapsed(collapsed[id.index()]);
        }
        if let Some(pane) = config.maximized {
            self.maximize(pane);
        }
        self.mark(true);
    }

    /// Replace panes and split with a snapshot's; the caller applies the theme
    pub fn restore_snapshot(&mut self, snapshot: &WorkspaceSnapshot, registry: &ViewRegistry) {
        tracing::info!(id = %snapshot.id, name = %snapshot.name, "Restoring workspace");
        self.restore_layout(&snapshot.config, registry);
    }

    // ------------------------------------------------------------------
    // Invariants
    // ------------------------------------------------------------------

    /// Check tab ownership exclusivity and active-tab validity
    pub fn check_invariants(&self) -> Result<(), String> {
        let mut seen = std::collections::HashSet::new();
        for pane in &self.panes {
            for tab in pane.tabs() {
                if !seen.insert(tab.id.as_str()) {
                    return Err(format!("tab {} is owned by more than one pane", tab.id));
                }
            }
            if !pane.active_tab_is_valid() {
                return Err(format!("{} pane has a dangling active tab", pane.id));
            }
            if pane.is_empty() && pane.active_tab_id().is_some() {
                return Err(format!("{} pane is empty but has an active tab", pane.id));
            }
        }
        if self.maximized.is_some() != self.saved.is_some() {
            return Err("maximized pane and save slot disagree".to_string());
        }
        Ok(())
    }

    /// Panic with context if an invariant is broken (debug builds)
    pub fn assert_invariants_with_context(&self, context: &str) {
        if let Err(e) = self.check_invariants() {
            debug_assert!(false, "layout invariant violated after {}: {}", context, e);
            tracing::error!(context, "layout invariant violated: {}", e);
        }
    }
}
