use std::collections::HashMap;

use serde::{Deserialize, Serialize};

pub mod errors;
pub mod types;

pub use errors::*;
pub use types::{
    ContainerId, ImageId, NetworkId, NotificationLevel, Tab, UiAction, VolumeName,
};

/// Docker connection information
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConnectionInfo {
    pub host: String,
    pub version: String,
    pub api_version: String,
    pub os: String,
    pub arch: String,
}

impl Default for ConnectionInfo {
    fn default() -> Self {
        Self {
            host: "unknown".to_string(),
            version: "unknown".to_string(),
            api_version: "unknown".to_string(),
            os: "unknown".to_string(),
            arch: "unknown".to_string(),
        }
    }
}

/// A remote connection target the resource lists are scoped to.
///
/// Selection is owned by the application state; the roster comes from
/// configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerInfo {
    pub id: String,
    pub name: String,
    /// Daemon URL; `None` means local defaults (socket / DOCKER_HOST)
    pub host: Option<String>,
}

impl ServerInfo {
    pub fn local() -> Self {
        Self {
            id: "local".to_string(),
            name: "Local".to_string(),
            host: None,
        }
    }
}

/// Port mapping information
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortMapping {
    pub ip: Option<String>,
    pub private_port: u16,
    pub public_port: Option<u16>,
    pub protocol: String,
}

/// Mount point information
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MountPoint {
    pub source: String,
    pub destination: String,
    pub mode: String,
    pub rw: bool,
}

/// Container runtime state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContainerState {
    Created,
    Running,
    Paused,
    Restarting,
    Removing,
    Exited,
    Dead,
    Unknown,
}

impl ContainerState {
    /// Whether the container currently runs (drives which actions render)
    pub fn is_running(&self) -> bool {
        matches!(self, ContainerState::Running)
    }
}

impl std::fmt::Display for ContainerState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            ContainerState::Created => "Created",
            ContainerState::Running => "Running",
            ContainerState::Paused => "Paused",
            ContainerState::Restarting => "Restarting",
            ContainerState::Removing => "Removing",
            ContainerState::Exited => "Exited",
            ContainerState::Dead => "Dead",
            ContainerState::Unknown => "Unknown",
        };
        write!(f, "{}", s)
    }
}

/// Container summary for list views
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContainerSummary {
    pub id: String,
    pub name: String,
    pub image: String,
    pub command: String,
    pub created: i64,
    pub ports: Vec<PortMapping>,
    pub labels: HashMap<String, String>,
    pub state: ContainerState,
    pub status: String,
    pub mounts: Vec<MountPoint>,
    pub networks: Vec<String>,
}

impl Default for ContainerSummary {
    fn default() -> Self {
        Self {
            id: String::new(),
            name: String::new(),
            image: String::new(),
            command: String::new(),
            created: 0,
            ports: vec![],
            labels: HashMap::new(),
            state: ContainerState::Unknown,
            status: String::new(),
            mounts: vec![],
            networks: vec![],
        }
    }
}

/// Image summary for list views
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ImageSummary {
    pub id: String,
    pub tags: Vec<String>,
    pub created: i64,
    pub size: i64,
    pub containers: i32,
    pub labels: HashMap<String, String>,
}

/// Network summary for list views
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NetworkSummary {
    pub id: String,
    pub name: String,
    pub driver: String,
    pub scope: String,
    pub internal: bool,
    pub attachable: bool,
}

/// Volume summary for list views
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VolumeSummary {
    pub name: String,
    pub driver: String,
    pub mountpoint: String,
    pub scope: String,
    pub labels: HashMap<String, String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_container_state_display() {
        assert_eq!(ContainerState::Running.to_string(), "Running");
        assert_eq!(ContainerState::Exited.to_string(), "Exited");
    }

    #[test]
    fn test_container_state_is_running() {
        assert!(ContainerState::Running.is_running());
        assert!(!ContainerState::Paused.is_running());
        assert!(!ContainerState::Exited.is_running());
    }

    #[test]
    fn test_default_container_summary() {
        let summary = ContainerSummary::default();
        assert_eq!(summary.state, ContainerState::Unknown);
        assert!(summary.name.is_empty());
    }

    #[test]
    fn test_local_server() {
        let server = ServerInfo::local();
        assert_eq!(server.id, "local");
        assert!(server.host.is_none());
    }
}
