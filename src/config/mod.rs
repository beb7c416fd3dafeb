mod loader;

pub use loader::{load, ConfigError};

use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub ui: UiConfig,
    pub share: ShareConfig,
}

/// Presentation-layer settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Run-loop tick interval in milliseconds.
    pub tick_rate_ms: u64,
    /// Roll once when the dice screen is entered fresh.
    pub roll_on_entry: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: 250,
            roll_on_entry: true,
        }
    }
}

/// Settings for the share boundary.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ShareConfig {
    /// Text prepended to the headline when sharing.
    pub prefix: String,
}

impl Default for ShareConfig {
    fn default() -> Self {
        Self {
            prefix: "I rolled the dice: ".to_string(),
        }
    }
}
