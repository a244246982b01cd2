//! Config subcommands handler

use anyhow::{Context, Result};

use workout_player::Config;

/// Show current configuration as TOML.
#[cfg(not(tarpaulin_include))]
pub fn handle_show() -> Result<()> {
    let config = Config::load().context("Failed to load config")?;
    let toml_str = toml::to_string_pretty(&config)?;
    let theme = config.theme();
    println!("{}", theme.primary_text(&toml_str));
    Ok(())
}

/// Print the config file location.
pub fn handle_path() -> Result<()> {
    let path = Config::config_path()?;
    println!("{}", path.display());
    Ok(())
}

/// Open configuration file in the default editor.
///
/// Uses $EDITOR environment variable (defaults to 'vi').
#[cfg(not(tarpaulin_include))]
pub fn handle_edit() -> Result<()> {
    let config_path = Config::config_path()?;
    let config = Config::load().context("Failed to load config")?;
    let theme = config.theme();

    // Ensure config exists
    if !config_path.exists() {
        config
            .save()
            .with_context(|| format!("Failed to create {}", config_path.display()))?;
    }

    let editor = std::env::var("EDITOR").unwrap_or_else(|_| "vi".to_string());

    println!(
        "{}",
        theme.primary_text(&format!(
            "Opening {} with {}",
            config_path.display(),
            editor
        ))
    );

    std::process::Command::new(&editor)
        .arg(&config_path)
        .status()
        .map_err(|e| anyhow::anyhow!("Failed to open editor: {}", e))?;

    Ok(())
}
