//! Split ratios for the four-pane layout
//!
//! Sizes are percentages. Each axis sums to [`TOTAL`]; resizing one pane
//! trades space with a fixed neighbour so the sum is preserved.

use serde::{Deserialize, Serialize};

use crate::panel::PaneId;

/// Sum of each axis
pub const TOTAL: f32 = 100.0;

/// Horizontal (left / center / right) and vertical (main / bottom) ratios
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LayoutSplit {
    pub horizontal: [f32; 3],
    pub vertical: [f32; 2],
}

impl Default for LayoutSplit {
    fn default() -> Self {
        Self {
            horizontal: [20.0, 60.0, 20.0],
            vertical: [75.0, 25.0],
        }
    }
}

impl LayoutSplit {
    /// Build a split, renormalizing each axis to sum to 100
    pub fn new(horizontal: [f32; 3], vertical: [f32; 2]) -> Self {
        Self {
            horizontal,
            vertical,
        }
        .normalized()
    }

    /// Stored size of a pane (bottom reports the bottom row height)
    pub fn size(&self, pane: PaneId) -> f32 {
        match pane {
            PaneId::Left => self.horizontal[0],
            PaneId::Center => self.horizontal[1],
            PaneId::Right => self.horizontal[2],
            PaneId::Bottom => self.vertical[1],
        }
    }

    /// Scale each axis to sum to 100
    ///
    /// Negative and non-finite entries count as zero. An axis with nothing
    /// left falls back to the default distribution.
    pub fn normalized(self) -> Self {
        let defaults = LayoutSplit::default();
        Self {
            horizontal: normalize_axis(self.horizontal).unwrap_or(defaults.horizontal),
            vertical: normalize_axis(self.vertical).unwrap_or(defaults.vertical),
        }
    }

    /// Set a pane's size, trading space with its neighbour
    ///
    /// Left and right trade with center, center trades with right, bottom
    /// trades with the main row. Returns the size actually applied after
    /// clamping to the space the pair shares.
    pub fn set_size(&mut self, pane: PaneId, size: f32) -> f32 {
        let size = if size.is_finite() { size.max(0.0) } else { 0.0 };
        let (own, neighbour) = match pane {
            PaneId::Left => (0, 1),
            PaneId::Center => (1, 2),
            PaneId::Right => (2, 1),
            PaneId::Bottom => {
                let pool = self.vertical[0] + self.vertical[1];
                let applied = size.min(pool);
                self.vertical = [pool - applied, applied];
                return applied;
            }
        };
        let pool = self.horizontal[own] + self.horizontal[neighbour];
        let applied = size.min(pool);
        self.horizontal[own] = applied;
        self.horizontal[neighbour] = pool - applied;
        applied
    }

    /// Give a pane's whole share to its neighbour
    ///
    /// Left and right hand their share to center, center hands it to right,
    /// bottom collapses to `[100, 0]`.
    pub fn minimize(&mut self, pane: PaneId) {
        match pane {
            PaneId::Left => {
                self.horizontal[1] += self.horizontal[0];
                self.horizontal[0] = 0.0;
            }
            PaneId::Center => {
                self.horizontal[2] += self.horizontal[1];
                self.horizontal[1] = 0.0;
            }
            PaneId::Right => {
                self.horizontal[1] += self.horizontal[2];
                self.horizontal[2] = 0.0;
            }
            PaneId::Bottom => {
                self.vertical = [TOTAL, 0.0];
            }
        }
    }

    /// Allocate all space to one pane
    pub fn maximize(&mut self, pane: PaneId) {
        match pane {
            PaneId::Left => {
                self.horizontal = [TOTAL, 0.0, 0.0];
                self.vertical = [TOTAL, 0.0];
            }
            PaneId::Center => {
                self.horizontal = [0.0, TOTAL, 0.0];
                self.vertical = [TOTAL, 0.0];
            }
            PaneId::Right => {
                self.horizontal = [0.0, 0.0, TOTAL];
                self.vertical = [TOTAL, 0.0];
            }
            PaneId::Bottom => {
                self.vertical = [0.0, TOTAL];
            }
        }
    }

    /// Render-time sizes with collapsed panes hidden
    ///
    /// `collapsed` is indexed by `PaneId::index`. A collapsed pane renders at
    /// zero and its share goes where `minimize` would send it, or to the
    /// first visible pane on the axis when that neighbour is hidden too.
    pub fn effective(&self, collapsed: [bool; 4]) -> LayoutSplit {
        let mut horizontal = self.horizontal;
        let order = [PaneId::Left, PaneId::Right, PaneId::Center];
        for pane in order {
            let i = pane.index();
            if !collapsed[i] || horizontal[i] == 0.0 {
                continue;
            }
            let preferred = match pane {
                PaneId::Center => PaneId::Right,
                _ => PaneId::Center,
            };
            let receiver = std::iter::once(preferred)
                .chain([PaneId::Center, PaneId::Right, PaneId::Left])
                .find(|p| *p != pane && !collapsed[p.index()]);
            if let Some(receiver) = receiver {
                horizontal[receiver.index()] += horizontal[i];
            }
            horizontal[i] = 0.0;
        }

        let mut vertical = self.vertical;
        let main_hidden = horizontal.iter().all(|s| *s == 0.0);
        if collapsed[PaneId::Bottom.index()] && !main_hidden {
            vertical = [vertical[0] + vertical[1], 0.0];
        } else if main_hidden && !collapsed[PaneId::Bottom.index()] {
            vertical = [0.0, vertical[0] + vertical[1]];
        }

        LayoutSplit {
            horizontal,
            vertical,
        }
    }
}

fn normalize_axis<const N: usize>(values: [f32; N]) -> Option<[f32; N]> {
    let cleaned = values.map(|v| if v.is_finite() && v > 0.0 { v } else { 0.0 });
    let sum: f32 = cleaned.iter().sum();
    if sum <= 0.0 {
        return None;
    }
    if (sum - TOTAL).abs() < f32::EPSILON * TOTAL {
        return Some(cleaned);
    }
    Some(cleaned.map(|v| v * TOTAL / sum))
}
