//! Client configuration.

use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use std::path::Path;

use protocol::Role;

/// Root configuration structure.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub endpoint: EndpointConfig,
    #[serde(default)]
    pub session: SessionConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

impl Config {
    /// Load configuration from `seance.toml` or use defaults.
    pub fn load() -> anyhow::Result<Self> {
        let path = Path::new("seance.toml");
        if path.exists() {
            let contents = std::fs::read_to_string(path)?;
            Ok(toml::from_str(&contents)?)
        } else {
            info!("No seance.toml found, creating default config");
            let default_config = Self::default();
            std::fs::write(path, toml::to_string_pretty(&default_config)?)?;
            Ok(default_config)
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: EndpointConfig::default(),
            session: SessionConfig::default(),
            display: DisplayConfig::default(),
        }
    }
}

/// Where the game authority lives.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct EndpointConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    /// Use the encrypted scheme.
    #[serde(default)]
    pub secure: bool,
    #[serde(default = "default_path")]
    pub path: String,
}

impl EndpointConfig {
    pub fn url(&self) -> String {
        let scheme = if self.secure { "wss" } else { "ws" };
        format!("{}://{}:{}{}", scheme, self.host, self.port, self.path)
    }
}

impl Default for EndpointConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            secure: false,
            path: default_path(),
        }
    }
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}
fn default_port() -> u16 {
    8080
}
fn default_path() -> String {
    "/".to_string()
}

/// Who this device joins as.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SessionConfig {
    #[serde(default)]
    pub role: Role,
    /// Stable id the authority uses to resume a seat.
    #[serde(default = "default_player_id")]
    pub player_id: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            role: Role::default(),
            player_id: default_player_id(),
        }
    }
}

fn default_player_id() -> String {
    "1".to_string()
}

/// Local rendering settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DisplayConfig {
    /// Side length of the square drawn per logical pixel.
    #[serde(default = "default_scale")]
    pub scale: u32,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            scale: default_scale(),
        }
    }
}

fn default_scale() -> u32 {
    1
}

/// Device-local preferences.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Prefs {
    /// Advance timed slides without a key press.
    #[serde(default)]
    pub auto_advance: bool,
}

impl Prefs {
    /// Load from `prefs.toml`. Any problem reads as defaults.
    pub fn load() -> Self {
        match std::fs::read_to_string("prefs.toml") {
            Ok(contents) => toml::from_str(&contents).unwrap_or_else(|e| {
                warn!(error = %e, "Unreadable prefs.toml, using defaults");
                Self::default()
            }),
            Err(_) => Self::default(),
        }
    }

    /// Best-effort persist.
    pub fn save(&self) {
        match toml::to_string_pretty(self) {
            Ok(text) => {
                if let Err(e) = std::fs::write("prefs.toml", text) {
                    warn!(error = %e, "Could not write prefs.toml");
                }
            }
            Err(e) => warn!(error = %e, "Could not encode prefs"),
        }
    }
}
