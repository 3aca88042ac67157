//! Drop-zone resolution for tab drag-and-drop
//!
//! A per-gesture computation: while a tab is dragged over a pane, the cursor
//! position is classified against that pane's tab strip. Nothing here holds
//! state between gestures.

use super::PaneId;
use crate::model::Rect;

/// Relative x (within a tab) below which a drop lands before the tab
pub const BEFORE_ZONE_END: f32 = 0.3;
/// Relative x (within a tab) above which a drop lands after the tab
pub const AFTER_ZONE_START: f32 = 0.7;

/// Where a dragged tab would land
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropZone {
    /// Insert before the tab at this index
    BeforeTab(usize),
    /// Insert after the tab at this index
    AfterTab(usize),
    /// Over the middle of a tab or the pane body: append
    CenterPane,
    /// Over the strip past the last tab: append
    EndOfStrip,
}

impl DropZone {
    /// Insertion point in the target strip (`None` appends)
    pub fn insert_index(&self) -> Option<usize> {
        match self {
            DropZone::BeforeTab(i) => Some(*i),
            DropZone::AfterTab(i) => Some(i + 1),
            DropZone::CenterPane | DropZone::EndOfStrip => None,
        }
    }

    /// Classify an x coordinate inside the bounding box of tab `index`
    ///
    /// The box splits 30% / 40% / 30%. Both boundaries (exactly 0.3 and
    /// exactly 0.7) belong to the center zone.
    pub fn within_tab(index: usize, tab: Rect, x: f32) -> DropZone {
        let relative = (x - tab.x) / tab.width;
        if relative < BEFORE_ZONE_END {
            DropZone::BeforeTab(index)
        } else if relative > AFTER_ZONE_START {
            DropZone::AfterTab(index)
        } else {
            DropZone::CenterPane
        }
    }
}

/// Pane plus zone currently under the cursor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DropTarget {
    pub pane: PaneId,
    pub zone: DropZone,
}

/// Classify a cursor position over a pane
///
/// `strip` is the pane's tab strip and `tabs` the bounding boxes of its tabs
/// in display order. Points outside the strip are over the pane body.
pub fn classify_drop(strip: Rect, tabs: &[Rect], x: f32, y: f32) -> DropZone {
    if !strip.contains(x, y) {
        return DropZone::CenterPane;
    }
    tabs.iter()
        .enumerate()
        .find(|(_, rect)| rect.width > 0.0 && rect.contains(x, y))
        .map(|(index, rect)| DropZone::within_tab(index, *rect, x))
        .unwrap_or(DropZone::EndOfStrip)
}
