use anyhow::{Context, Result};
use clap::Parser;

use dockspace::cli::{self, CliArgs};
use dockspace::config::ShellConfig;
use dockspace::registry::ViewRegistry;
use dockspace::theme::ThemeStore;
use dockspace::workspace::FileStorage;
use dockspace::AppModel;

fn main() -> Result<()> {
    dockspace::tracing::init();

    let args = CliArgs::parse();

    let storage = match args.storage {
        Some(dir) => FileStorage::new(dir),
        None => FileStorage::default_location()
            .map_err(anyhow::Error::msg)
            .context("Could not open the workspace store")?,
    };

    let mut model = AppModel::new(
        ShellConfig::load(),
        ViewRegistry::new(),
        ThemeStore::load(),
        storage,
    );
    if let Some(message) = &model.ui.status_message {
        eprintln!("{}", message);
    }

    let output = cli::run(&mut model, args.command).map_err(anyhow::Error::msg)?;
    print!("{}", output);

    Ok(())
}
