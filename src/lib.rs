//! dockspace - Elm-style docking panel shell
//!
//! This crate provides the core types and logic for a four-pane docking
//! layout (left, center, right, bottom) with per-pane tab strips, tab
//! drag-and-drop, a view registry, YAML themes and saved workspaces,
//! implementing the Elm Architecture pattern.

pub mod cli;
pub mod commands;
pub mod config;
pub mod config_paths;
pub mod messages;
pub mod model;
pub mod panel;
pub mod registry;
pub mod theme;
pub mod tracing;
pub mod update;
pub mod workspace;

// Re-export commonly used types
pub use commands::Cmd;
pub use config::ShellConfig;
pub use messages::Msg;
pub use model::{AppModel, DockLayout};
pub use theme::Theme;
