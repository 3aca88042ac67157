//! Debug tracing infrastructure for development diagnostics
//!
//! Provides structured logging with scoped filtering for debugging layout
//! state transitions.
//!
//! # Usage
//!
//! Configure via RUST_LOG environment variable:
//! - `RUST_LOG=debug` - all debug logs
//! - `RUST_LOG=layout=debug,message=debug` - scoped filtering
//! - `RUST_LOG=dockspace::workspace=debug` - module-level filtering
//!
//! # Log Files
//!
//! Logs are written to `~/.config/dockspace/logs/dockspace.log` with daily rotation.
//! File logging uses debug level by default for more verbose troubleshooting.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::model::DockLayout;
use crate::panel::PaneId;

/// Initialize tracing subscriber with console and file logging
///
/// Console output respects RUST_LOG env var for filtering (default `warn`).
/// File logging writes to `~/.config/dockspace/logs/dockspace.log` with daily rotation.
pub fn init() {
    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    // Console layer - respects RUST_LOG
    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_line_number(true)
        .with_filter(console_filter);

    // File layer - always debug level for troubleshooting
    let file_layer = match crate::config_paths::ensure_logs_dir() {
        Ok(logs_dir) => {
            let file_appender = tracing_appender::rolling::daily(logs_dir, "dockspace.log");
            Some(
                fmt::layer()
                    .with_writer(file_appender)
                    .with_ansi(false)
                    .with_target(true)
                    .with_line_number(true)
                    .with_filter(EnvFilter::new("debug")),
            )
        }
        Err(e) => {
            eprintln!("Warning: Could not initialize file logging: {}", e);
            None
        }
    };

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .init();
}

/// Lightweight snapshot of layout state for diffing
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutSnapshot {
    pub horizontal: [f32; 3],
    pub vertical: [f32; 2],
    pub collapsed: [bool; 4],
    pub maximized: Option<PaneId>,
    pub tab_counts: [usize; 4],
    pub active: [Option<String>; 4],
}

impl LayoutSnapshot {
    pub fn from_layout(layout: &DockLayout) -> Self {
        let split = layout.split();
        Self {
            horizontal: split.horizontal,
            vertical: split.vertical,
            collapsed: layout.collapsed_flags(),
            maximized: layout.maximized(),
            tab_counts: PaneId::ALL.map(|p| layout.pane(p).len()),
            active: PaneId::ALL.map(|p| layout.pane(p).active_tab_id().map(str::to_string)),
        }
    }

    /// Generate a diff description between two snapshots
    pub fn diff(&self, other: &LayoutSnapshot) -> Option<String> {
        let mut changes = Vec::new();

        if self.horizontal != other.horizontal {
            changes.push(format!("horizontal: {:?} → {:?}", self.horizontal, other.horizontal));
        }
        if self.vertical != other.vertical {
            changes.push(format!("vertical: {:?} → {:?}", self.vertical, other.vertical));
        }
        if self.maximized != other.maximized {
            changes.push(format!("maximized: {:?} → {:?}", self.maximized, other.maximized));
        }
        for pane in PaneId::ALL {
            let i = pane.index();
            if self.collapsed[i] != other.collapsed[i] {
                let status = if other.collapsed[i] { "collapsed" } else { "expanded" };
                changes.push(format!("{}: {}", pane, status));
            }
            if self.tab_counts[i] != other.tab_counts[i] {
                changes.push(format!(
                    "{}: tabs {} → {}",
                    pane, self.tab_counts[i], other.tab_counts[i]
                ));
            }
            if self.active[i] != other.active[i] {
                changes.push(format!(
                    "{}: active {} → {}",
                    pane,
                    self.active[i].as_deref().unwrap_or("-"),
                    other.active[i].as_deref().unwrap_or("-")
                ));
            }
        }

        if changes.is_empty() {
            None
        } else {
            Some(changes.join("; "))
        }
    }
}
