use std::collections::HashMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::core::ServerInfo;

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub servers: Vec<ServerConfig>,
    #[serde(default)]
    pub keybindings: KeyBindings,
    #[serde(default)]
    pub logging: LogConfig,
}

/// General application settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    #[serde(default = "default_poll_interval")]
    pub poll_interval_ms: u64,
    /// Include stopped containers in the container list
    #[serde(default = "default_true")]
    pub show_all_containers: bool,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            poll_interval_ms: default_poll_interval(),
            show_all_containers: true,
        }
    }
}

/// UI customization settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_theme")]
    pub theme: String,
    #[serde(default = "default_true")]
    pub mouse_enabled: bool,
    #[serde(default = "default_true")]
    pub show_footer: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            theme: default_theme(),
            mouse_enabled: true,
            show_footer: true,
        }
    }
}

/// A configured Docker server
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub id: String,
    pub name: String,
    /// Daemon URL (e.g. `tcp://10.0.0.5:2375`); omit for local defaults
    #[serde(default)]
    pub host: Option<String>,
}

impl From<ServerConfig> for ServerInfo {
    fn from(s: ServerConfig) -> Self {
        ServerInfo {
            id: s.id,
            name: s.name,
            host: s.host,
        }
    }
}

/// Keybinding configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct KeyBindings {
    #[serde(default)]
    pub global: HashMap<String, String>,
    #[serde(default)]
    pub containers: HashMap<String, String>,
    #[serde(default)]
    pub images: HashMap<String, String>,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default)]
    pub file: Option<PathBuf>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
        }
    }
}

// Default value functions
fn default_poll_interval() -> u64 {
    1000
}

fn default_theme() -> String {
    "dark".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_true() -> bool {
    true
}
