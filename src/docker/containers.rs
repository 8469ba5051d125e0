//! Container operations

use bollard::container::{
    Config as ContainerConfig, CreateContainerOptions, ListContainersOptions,
    RemoveContainerOptions, RestartContainerOptions, StopContainerOptions,
};
use tracing::{debug, info, warn};

use crate::core::{ContainerState, ContainerSummary, DockerError, MountPoint, PortMapping, Result};
use crate::docker::DockerClient;

impl DockerClient {
    /// List all containers
    pub async fn list_containers(&self, all: bool) -> Result<Vec<ContainerSummary>> {
        debug!("Listing containers (all={})", all);

        let options = ListContainersOptions::<String> {
            all,
            ..Default::default()
        };

        let containers = self
            .inner()
            .list_containers(Some(options))
            .await
            .map_err(|e| DockerError::Container(e.to_string()))?;

        info!("Found {} containers", containers.len());

        Ok(containers.into_iter().map(Into::into).collect())
    }

    /// Start a container
    pub async fn start_container(&self, id: &str) -> Result<()> {
        info!("Starting container: {}", id);

        self.inner()
            .start_container::<String>(id, None)
            .await
            .map_err(|e| DockerError::Container(format!("Failed to start {}: {}", id, e)))?;

        info!("Container {} started successfully", id);
        Ok(())
    }

    /// Stop a container
    pub async fn stop_container(&self, id: &str, timeout: Option<i64>) -> Result<()> {
        let timeout = timeout.unwrap_or(10);
        info!("Stopping container: {} (timeout={}s)", id, timeout);

        let options = StopContainerOptions { t: timeout };

        self.inner()
            .stop_container(id, Some(options))
            .await
            .map_err(|e| DockerError::Container(format!("Failed to stop {}: {}", id, e)))?;

        info!("Container {} stopped successfully", id);
        Ok(())
    }

    /// Restart a container
    pub async fn restart_container(&self, id: &str, timeout: Option<isize>) -> Result<()> {
        let timeout = timeout.unwrap_or(10);
        info!("Restarting container: {} (timeout={}s)", id, timeout);

        let options = RestartContainerOptions { t: timeout };

        self.inner()
            .restart_container(id, Some(options))
            .await
            .map_err(|e| DockerError::Container(format!("Failed to restart {}: {}", id, e)))?;

        info!("Container {} restarted successfully", id);
        Ok(())
    }

    /// Remove a container
    pub async fn remove_container(&self, id: &str, force: bool) -> Result<()> {
        warn!("Removing container: {} (force={})", id, force);

        let options = RemoveContainerOptions {
            v: false,
            force,
            link: false,
        };

        self.inner()
            .remove_container(id, Some(options))
            .await
            .map_err(|e| DockerError::Container(format!("Failed to remove {}: {}", id, e)))?;

        info!("Container {} removed successfully", id);
        Ok(())
    }

    /// Create and start a container from an image reference
    pub async fn run_container(&self, image: &str, name: Option<&str>) -> Result<String> {
        info!("Running container from image: {}", image);

        let options = name.map(|n| CreateContainerOptions {
            name: n,
            platform: None,
        });

        let config = ContainerConfig::<String> {
            image: Some(image.to_string()),
            ..Default::default()
        };

        let created = self
            .inner()
            .create_container(options, config)
            .await
            .map_err(|e| DockerError::Container(format!("Failed to create from {}: {}", image, e)))?;

        self.start_container(&created.id).await?;

        info!("Container {} running from {}", created.id, image);
        Ok(created.id)
    }
}

// Conversion implementations
impl From<bollard::models::ContainerSummary> for ContainerSummary {
    fn from(c: bollard::models::ContainerSummary) -> Self {
        let id = c.id.clone().unwrap_or_default();

        let state = parse_container_state(c.state.as_deref());
        let status = c.status.clone().unwrap_or_default();

        // First name, without the leading slash
        let name = c
            .names
            .clone()
            .unwrap_or_default()
            .first()
            .map(|n| n.trim_start_matches('/').to_string())
            .unwrap_or_default();

        let ports: Vec<PortMapping> = c
            .ports
            .clone()
            .unwrap_or_default()
            .into_iter()
            .map(|p| PortMapping {
                ip: p.ip,
                private_port: p.private_port as u16,
                public_port: p.public_port.map(|p| p as u16),
                protocol: p
                    .typ
                    .map(|t| format!("{:?}", t).to_lowercase())
                    .unwrap_or_else(|| "tcp".to_string()),
            })
            .collect();

        let mounts: Vec<MountPoint> = c
            .mounts
            .clone()
            .unwrap_or_default()
            .into_iter()
            .map(|m| MountPoint {
                source: m.source.unwrap_or_default(),
                destination: m.destination.unwrap_or_default(),
                mode: m.mode.unwrap_or_default(),
                rw: m.rw.unwrap_or(false),
            })
            .collect();

        Self {
            id,
            name,
            image: c.image.clone().unwrap_or_default(),
            command: c.command.clone().unwrap_or_default(),
            created: c.created.unwrap_or(0),
            ports,
            labels: c.labels.clone().unwrap_or_default(),
            state,
            status,
            mounts,
            networks: c
                .network_settings
                .clone()
                .map(|ns| ns.networks.unwrap_or_default().into_keys().collect())
                .unwrap_or_default(),
        }
    }
}

fn parse_container_state(state: Option<&str>) -> ContainerState {
    match state {
        Some("created") => ContainerState::Created,
        Some("running") => ContainerState::Running,
        Some("paused") => ContainerState::Paused,
        Some("restarting") => ContainerState::Restarting,
        Some("removing") => ContainerState::Removing,
        Some("exited") => ContainerState::Exited,
        Some("dead") => ContainerState::Dead,
        _ => ContainerState::Unknown,
    }
}
