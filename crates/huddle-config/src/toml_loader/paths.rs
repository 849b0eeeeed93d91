//! Where the config file lives, and seeding it on first run.

use std::path::{Path, PathBuf};

use huddle_common::ConfigError;
use tracing::info;

use super::template::default_config_toml;

const APP_DIR: &str = "huddle";
const FILE_NAME: &str = "config.toml";

/// `<platform config dir>/huddle/config.toml`.
pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    dirs::config_dir()
        .map(|dir| dir.join(APP_DIR).join(FILE_NAME))
        .ok_or_else(|| ConfigError::ParseError("no platform config directory".into()))
}

/// Write the commented default config to `path`, creating parent dirs.
pub fn create_default_config(path: &Path) -> Result<(), ConfigError> {
    let io_err = |what: &str, at: &Path, e: std::io::Error| {
        ConfigError::ParseError(format!("{what} {}: {e}", at.display()))
    };

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| io_err("cannot create", parent, e))?;
    }
    std::fs::write(path, default_config_toml()).map_err(|e| io_err("cannot write", path, e))?;

    info!(path = %path.display(), "Default config written");
    Ok(())
}
