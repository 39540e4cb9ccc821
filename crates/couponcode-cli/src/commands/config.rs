//! Config command implementation.

use anyhow::{bail, Context, Result};
use couponcode_core::config::Config;

use super::ConfigAction;

/// Run the config command.
pub fn run(action: ConfigAction) -> Result<()> {
    match action {
        ConfigAction::Show => show(),
        ConfigAction::Path => {
            println!("{}", Config::config_path().display());
            Ok(())
        }
        ConfigAction::Init { force } => init(force),
    }
}

fn show() -> Result<()> {
    let config = Config::load().context("Failed to load configuration")?;
    let content = toml::to_string_pretty(&config).context("Failed to render configuration")?;
    print!("{}", content);
    Ok(())
}

fn init(force: bool) -> Result<()> {
    let path = Config::config_path();
    if path.exists() && !force {
        bail!(
            "Configuration already exists at {}\nUse --force to overwrite it.",
            path.display()
        );
    }

    Config::default()
        .save_to(&path)
        .context("Failed to write configuration")?;
    tracing::info!("wrote default configuration to {}", path.display());
    println!("{}", path.display());
    Ok(())
}
