use std::path::Path;

use anyhow::{Context, Result};

use tracing::{debug, info};

use crate::core::ServerInfo;

pub mod model;

pub use model::*;

impl Config {
    /// Load configuration from a specific file path
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading configuration from: {}", path.display());

        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        config.validate()?;
        debug!("Configuration loaded and validated successfully");

        Ok(config)
    }

    /// Load configuration from default locations
    pub fn load_default() -> Result<Self> {
        use directories::ProjectDirs;

        if let Some(proj_dirs) = ProjectDirs::from("com", "dockdeck", "dockdeck") {
            let config_dir = proj_dirs.config_dir();
            let config_path = config_dir.join("config.toml");

            if config_path.exists() {
                return Self::load(&config_path);
            }
        }

        // Try current directory
        let local_config = std::path::PathBuf::from("config.toml");
        if local_config.exists() {
            return Self::load(&local_config);
        }

        info!("No configuration file found, using defaults");
        Ok(Config::default())
    }

    /// Save configuration to a file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        info!("Saving configuration to: {}", path.display());

        let contents = toml::to_string_pretty(self).context("Failed to serialize configuration")?;

        std::fs::write(path, contents)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        info!("Configuration saved successfully");
        Ok(())
    }

    /// The server roster the dashboard is scoped to.
    ///
    /// Always non-empty: when no servers are configured, the local daemon is
    /// the only entry.
    pub fn servers(&self) -> Vec<ServerInfo> {
        if self.servers.is_empty() {
            vec![ServerInfo::local()]
        } else {
            self.servers.iter().cloned().map(Into::into).collect()
        }
    }

    /// Validate the configuration
    fn validate(&self) -> Result<()> {
        if self.general.poll_interval_ms < 100 {
            anyhow::bail!("poll_interval_ms must be at least 100");
        }

        let mut seen = std::collections::HashSet::new();
        for server in &self.servers {
            if server.id.is_empty() {
                anyhow::bail!("server id must not be empty");
            }
            if !seen.insert(&server.id) {
                anyhow::bail!("duplicate server id: {}", server.id);
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.general.poll_interval_ms, 1000);
        assert!(config.servers.is_empty());
    }

    #[test]
    fn test_servers_fallback_to_local() {
        let config = Config::default();
        let servers = config.servers();
        assert_eq!(servers.len(), 1);
        assert_eq!(servers[0].id, "local");
    }

    #[test]
    fn test_config_validation() {
        let config = Config::default();
        assert!(config.validate().is_ok());

        let invalid_config = Config {
            general: GeneralConfig {
                poll_interval_ms: 50, // Too low
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(invalid_config.validate().is_err());
    }

    #[test]
    fn test_duplicate_server_ids_rejected() {
        let server = ServerConfig {
            id: "a".to_string(),
            name: "A".to_string(),
            host: None,
        };
        let config = Config {
            servers: vec![server.clone(), server],
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_save_and_load() {
        let config = Config::default();
        let temp_file = NamedTempFile::new().unwrap();

        config.save(temp_file.path()).unwrap();

        let loaded = Config::load(temp_file.path()).unwrap();
        assert_eq!(
            loaded.general.poll_interval_ms,
            config.general.poll_interval_ms
        );
    }
}
