use std::fs;
use std::path::Path;

use crate::cli::ColorChoice;
use crate::config::{Config, ConfigLoader, FileConfigLoader};
use crate::error::{ForsureError, Result};
use crate::output::ColorMode;

#[must_use]
pub const fn color_choice_to_mode(choice: ColorChoice) -> ColorMode {
    match choice {
        ColorChoice::Auto => ColorMode::Auto,
        ColorChoice::Always => ColorMode::Always,
        ColorChoice::Never => ColorMode::Never,
    }
}

/// Load configuration from the default locations.
///
/// # Errors
/// Returns an error if a config file exists but cannot be read or parsed.
pub fn load_config(config_path: Option<&Path>, no_config: bool) -> Result<Config> {
    load_config_with(&FileConfigLoader::new(), config_path, no_config)
}

/// Load configuration through `loader`; an explicit path wins over discovery.
///
/// # Errors
/// Returns an error if the config cannot be read or parsed.
pub fn load_config_with<L: ConfigLoader>(
    loader: &L,
    config_path: Option<&Path>,
    no_config: bool,
) -> Result<Config> {
    if no_config {
        return Ok(Config::default());
    }

    match config_path {
        Some(path) => loader.load_from_path(path),
        None => loader.load(),
    }
}

/// Write a plain-text report, creating nothing but the file itself.
///
/// # Errors
/// Returns an error if the file cannot be written.
pub fn write_report(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content).map_err(|source| ForsureError::FileWrite {
        path: path.to_path_buf(),
        source,
    })?;
    log::info!("report written to {}", path.display());
    Ok(())
}

#[cfg(test)]
#[path = "context_tests.rs"]
mod tests;
