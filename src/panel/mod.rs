//! Panel system - the four fixed docking panes and the tabs they host
//!
//! The shell has exactly four panes (left, center, right, bottom). Each pane
//! owns an ordered tab strip, an active tab and a collapse flag. Tabs move
//! between panes through drag-and-drop.
//!
//! ## Architecture
//!
//! - `PaneId`: Left, Center, Right or Bottom
//! - `Tab` / `TabContent`: a unit of content and what it renders
//! - `Pane`: tab strip state for one pane (the pane controller)
//! - `DropZone`: where a dragged tab would land inside a tab strip
//!
//! ## Integration
//!
//! Panes are owned by `model::DockLayout`, which enforces tab id uniqueness
//! across panes and drives split ratios, collapse and maximize.

mod drop_zone;
mod pane;
mod tab;

pub use drop_zone::{classify_drop, DropTarget, DropZone, AFTER_ZONE_START, BEFORE_ZONE_END};
pub use pane::{Pane, PaneId};
pub use tab::{slugify, BuiltinTab, InlineContent, Props, Tab, TabContent, ViewRef};
