use std::path::PathBuf;

use super::Config;
use crate::{GlowError, GlowResult};

/// Returns the config directory: `~/.config/glowframe/`.
pub fn config_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".config").join("glowframe"))
}

/// Returns the config file path: `~/.config/glowframe/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    config_dir().map(|d| d.join("config.toml"))
}

/// Parses and validates a config from TOML text.
pub fn parse(content: &str) -> GlowResult<Config> {
    let mut config: Config =
        toml::from_str(content).map_err(|e| GlowError::Config(e.to_string()))?;
    config.validate();
    Ok(config)
}

/// Tries to load and parse `config.toml`.
pub fn try_load() -> GlowResult<Config> {
    let path =
        config_path().ok_or_else(|| GlowError::Config("could not determine config path".into()))?;
    let content = std::fs::read_to_string(&path)?;
    parse(&content).map_err(|e| GlowError::Config(format!("{}: {e}", path.display())))
}

/// Loads the configuration from disk, falling back to defaults.
///
/// Non-existent files silently return defaults; other errors are
/// reported on stderr.
pub fn load() -> Config {
    match try_load() {
        Ok(config) => config,
        Err(GlowError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => Config::default(),
        Err(e) => {
            eprintln!("Warning: {e}");
            Config::default()
        }
    }
}
