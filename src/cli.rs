//! Command-line interface over saved workspaces and themes
//!
//! Supports:
//! - Listing, showing, saving, duplicating, renaming and deleting workspaces
//! - Importing a workspace exported elsewhere
//! - Listing themes and printing a theme's presentation variables

use std::fmt::Write as _;
use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::messages::{Msg, ThemeMsg, WorkspaceMsg};
use crate::model::AppModel;
use crate::theme::{ThemeSource, DEFAULT_VARIABLE_PREFIX};
use crate::update::update;

/// Dockable panel shell workspaces
#[derive(Parser, Debug)]
#[command(name = "dockspace", version, about = "Manage dockspace workspaces and themes")]
pub struct CliArgs {
    /// Directory holding the workspace store (defaults to the config directory)
    #[arg(long, value_name = "DIR", global = true)]
    pub storage: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// List saved workspaces
    List,
    /// Print a workspace as JSON
    Show {
        id: String,
    },
    /// Save the default layout under a name
    Save {
        name: String,
        /// Theme to record with the workspace
        #[arg(long, value_name = "ID")]
        theme: Option<String>,
    },
    /// Copy a workspace under a new name
    Duplicate {
        id: String,
        name: String,
    },
    /// Rename a workspace
    Rename {
        id: String,
        name: String,
    },
    /// Delete a workspace
    Delete {
        id: String,
    },
    /// Import a workspace from a JSON file
    Import {
        file: PathBuf,
    },
    /// List available themes
    Themes,
    /// Print a theme's presentation variables
    ThemeVars {
        id: String,
        /// Variable name prefix
        #[arg(long, default_value = DEFAULT_VARIABLE_PREFIX)]
        prefix: String,
    },
}

/// Run a command against the model, returning the text to print
pub fn run(model: &mut AppModel, command: Command) -> Result<String, String> {
    match command {
        Command::List => {
            let mut out = String::new();
            for snapshot in model.workspaces.list() {
                let _ = writeln!(
                    out,
                    "{}\t{}\t{}\t{}\t{} tabs",
                    snapshot.id,
                    snapshot.name,
                    snapshot.timestamp,
                    snapshot.theme,
                    snapshot.tab_count()
                );
            }
            if out.is_empty() {
                out.push_str("No saved workspaces\n");
            }
            Ok(out)
        }

        Command::Show { id } => model
            .workspaces
            .export(&id)
            .map(|json| json + "\n")
            .ok_or_else(|| format!("Workspace not found: {}", id)),

        Command::Save { name, theme } => {
            if let Some(theme) = theme {
                if !model.themes.contains(&theme) {
                    return Err(format!("Unknown theme id: {}", theme));
                }
                update(model, Msg::Theme(ThemeMsg::Select(theme)));
            }
            let before: Vec<String> = model.workspaces.list().iter().map(|s| s.id.clone()).collect();
            let cmd = update(model, Msg::Workspace(WorkspaceMsg::Save { name }));
            let saved = model
                .workspaces
                .list()
                .iter()
                .find(|s| !before.contains(&s.id))
                .map(|s| s.id.clone());
            match saved {
                Some(id) => Ok(format!("{}\n", id)),
                None => Err(failure(cmd)),
            }
        }

        Command::Duplicate { id, name } => match model.workspaces.duplicate(&id, &name)? {
            Some(copy) => Ok(format!("{}\n", copy.id)),
            None => Err(format!("Workspace not found: {}", id)),
        },

        Command::Rename { id, name } => {
            if model.workspaces.rename(&id, &name)? {
                Ok(String::new())
            } else {
                Err(format!("Workspace not found: {}", id))
            }
        }

        Command::Delete { id } => {
            if model.workspaces.delete(&id)? {
                Ok(String::new())
            } else {
                Err(format!("Workspace not found: {}", id))
            }
        }

        Command::Import { file } => {
            let json = std::fs::read_to_string(&file)
                .map_err(|e| format!("Failed to read {}: {}", file.display(), e))?;
            let snapshot = model.workspaces.import(&json)?;
            Ok(format!("{}\n", snapshot.id))
        }

        Command::Themes => {
            let mut out = String::new();
            for info in model.themes.list() {
                let source = match info.source {
                    ThemeSource::User => "user",
                    ThemeSource::Builtin => "builtin",
                };
                let marker = if info.id == model.themes.current_id() {
                    "*"
                } else {
                    " "
                };
                let _ = writeln!(out, "{} {}\t{}\t{}", marker, info.id, info.name, source);
            }
            Ok(out)
        }

        Command::ThemeVars { id, prefix } => {
            let theme = model
                .themes
                .get(&id)
                .ok_or_else(|| format!("Unknown theme id: {}", id))?;
            let mut out = String::new();
            for (name, value) in theme.presentation_variables(&prefix) {
                let _ = writeln!(out, "{}: {};", name, value);
            }
            Ok(out)
        }
    }
}

fn failure(cmd: Option<crate::commands::Cmd>) -> String {
    cmd.as_ref()
        .and_then(|c| c.message())
        .unwrap_or("Nothing was saved")
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ShellConfig;
    use crate::registry::ViewRegistry;
    use crate::theme::ThemeStore;
    use crate::workspace::{MemoryStorage, StorageBackend};

    fn model() -> AppModel {
        AppModel::new(
            ShellConfig::default(),
            ViewRegistry::new(),
            ThemeStore::builtin(),
            MemoryStorage::new(),
        )
    }

    #[test]
    fn test_parse_save_with_theme() {
        let args = CliArgs::try_parse_from(["dockspace", "save", "Review", "--theme", "default-light"])
            .unwrap();
        assert_eq!(
            args.command,
            Command::Save {
                name: "Review".to_string(),
                theme: Some("default-light".to_string()),
            }
        );
        assert!(args.storage.is_none());
    }

    #[test]
    fn test_parse_theme_vars_default_prefix() {
        let args = CliArgs::try_parse_from(["dockspace", "--storage", "/tmp/x", "theme-vars", "high-contrast"])
            .unwrap();
        assert_eq!(args.storage, Some(PathBuf::from("/tmp/x")));
        assert_eq!(
            args.command,
            Command::ThemeVars {
                id: "high-contrast".to_string(),
                prefix: DEFAULT_VARIABLE_PREFIX.to_string(),
            }
        );
    }

    #[test]
    fn test_save_list_show_delete() {
        let mut model = model();
        assert_eq!(run(&mut model, Command::List).unwrap(), "No saved workspaces\n");

        let id = run(
            &mut model,
            Command::Save {
                name: "Review".to_string(),
                theme: Some("default-light".to_string()),
            },
        )
        .unwrap();
        let id = id.trim().to_string();

        let listing = run(&mut model, Command::List).unwrap();
        assert!(listing.contains("Review"));
        assert!(listing.contains("default-light"));
        assert!(listing.contains("4 tabs"));

        let json = run(&mut model, Command::Show { id: id.clone() }).unwrap();
        assert!(json.contains("\"tabContainers\""));

        run(&mut model, Command::Delete { id: id.clone() }).unwrap();
        assert!(run(&mut model, Command::Show { id }).is_err());
    }

    #[test]
    fn test_save_rejects_empty_name_and_unknown_theme() {
        let mut model = model();
        let err = run(
            &mut model,
            Command::Save {
                name: "  ".to_string(),
                theme: None,
            },
        )
        .unwrap_err();
        assert_eq!(err, "Workspace name cannot be empty");

        let err = run(
            &mut model,
            Command::Save {
                name: "Ok".to_string(),
                theme: Some("nope".to_string()),
            },
        )
        .unwrap_err();
        assert!(err.contains("Unknown theme"));
        assert!(model.workspaces.list().is_empty());
    }

    #[derive(Debug)]
    struct ReadOnlyStorage;

    impl StorageBackend for ReadOnlyStorage {
        fn get(&self, _key: &str) -> std::io::Result<Option<String>> {
            Ok(None)
        }

        fn set(&mut self, _key: &str, _value: &str) -> std::io::Result<()> {
            Err(std::io::Error::new(
                std::io::ErrorKind::PermissionDenied,
                "read-only",
            ))
        }
    }

    #[test]
    fn test_save_reports_write_failure() {
        let mut model = AppModel::new(
            ShellConfig::default(),
            ViewRegistry::new(),
            ThemeStore::builtin(),
            ReadOnlyStorage,
        );
        let err = run(
            &mut model,
            Command::Save {
                name: "Review".to_string(),
                theme: None,
            },
        )
        .unwrap_err();
        assert!(err.starts_with("Failed to write workspaces"), "{}", err);
        assert!(model.workspaces.list().is_empty());
        assert_eq!(run(&mut model, Command::List).unwrap(), "No saved workspaces\n");
    }

    #[test]
    fn test_theme_vars_output() {
        let mut model = model();
        let out = run(
            &mut model,
            Command::ThemeVars {
                id: "default-dark".to_string(),
                prefix: "--shell".to_string(),
            },
        )
        .unwrap();
        assert!(out.contains("--shell-color-accent: #007ACC;"));

        let themes = run(&mut model, Command::Themes).unwrap();
        assert!(themes.contains("* default-dark"));
    }
}
