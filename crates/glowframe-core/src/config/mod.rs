mod loader;
pub mod template;

use serde::{Deserialize, Serialize};

use crate::Color;
use crate::log::LogConfig;

pub use loader::{config_dir, config_path, load, parse, try_load};

/// Top-level configuration for glowframe.
///
/// Loaded from `~/.config/glowframe/config.toml`. Missing sections
/// fall back to defaults thanks to `#[serde(default)]`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Glow appearance and behaviour.
    pub glow: GlowConfig,
    /// File logging.
    pub logging: LogConfig,
}

/// Glow appearance and behaviour.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GlowConfig {
    /// Hex color while the host window is focused (e.g. "#ffff00").
    pub active_color: String,
    /// Hex color while the host window is in the background.
    pub inactive_color: String,
    /// Whether the strips act as resize handles.
    pub resize: bool,
    /// Whether the strips stay above non-topmost windows.
    pub topmost: bool,
}

impl Default for GlowConfig {
    fn default() -> Self {
        Self {
            active_color: Color::YELLOW.to_hex(),
            inactive_color: Color::LIGHT_GRAY.to_hex(),
            resize: true,
            topmost: false,
        }
    }
}

impl GlowConfig {
    /// Parsed focused color. Falls back to the default when invalid.
    pub fn active(&self) -> Color {
        Color::from_hex(&self.active_color).unwrap_or(Color::YELLOW)
    }

    /// Parsed background color. Falls back to the default when invalid.
    pub fn inactive(&self) -> Color {
        Color::from_hex(&self.inactive_color).unwrap_or(Color::LIGHT_GRAY)
    }
}

impl Config {
    /// Replaces unparseable colors with their defaults and normalizes the
    /// rest to lowercase `#rrggbb`.
    pub fn validate(&mut self) {
        self.glow.active_color = self.glow.active().to_hex();
        self.glow.inactive_color = self.glow.inactive().to_hex();
    }

    /// Serializes the config back to TOML.
    pub fn to_toml(&self) -> crate::GlowResult<String> {
        toml::to_string_pretty(self).map_err(|e| crate::GlowError::Config(e.to_string()))
    }
}
