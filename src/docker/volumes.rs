//! Volume operations

use bollard::volume::ListVolumesOptions;
use tracing::{debug, info};

use crate::core::{DockerError, Result, VolumeSummary};
use crate::docker::DockerClient;

impl DockerClient {
    /// List all volumes
    pub async fn list_volumes(&self) -> Result<Vec<VolumeSummary>> {
        debug!("Listing volumes");

        let options = ListVolumesOptions::<String> {
            filters: Default::default(),
        };

        let volumes = self
            .inner()
            .list_volumes(Some(options))
            .await
            .map_err(|e| DockerError::Volume(e.to_string()))?;

        let volume_list = volumes.volumes.unwrap_or_default();
        info!("Found {} volumes", volume_list.len());

        Ok(volume_list.into_iter().map(Into::into).collect())
    }

    /// Remove a volume
    pub async fn remove_volume(&self, name: &str, force: bool) -> Result<()> {
        info!("Removing volume: {} (force={})", name, force);

        self.inner()
            .remove_volume(name, Some(bollard::volume::RemoveVolumeOptions { force }))
            .await
            .map_err(|e| DockerError::Volume(format!("Failed to remove {}: {}", name, e)))?;

        info!("Volume {} removed successfully", name);
        Ok(())
    }

    /// Prune unused volumes
    pub async fn prune_volumes(&self) -> Result<u64> {
        info!("Pruning unused volumes");

        let result = self
            .inner()
            .prune_volumes::<String>(None)
            .await
            .map_err(|e| DockerError::Volume(format!("Failed to prune volumes: {}", e)))?;

        let reclaimed = result.space_reclaimed.unwrap_or(0) as u64;
        let deleted_count = result.volumes_deleted.as_ref().map(|v| v.len()).unwrap_or(0);

        info!(
            "Pruned {} volumes, reclaimed {} bytes",
            deleted_count, reclaimed
        );

        Ok(reclaimed)
    }
}

impl From<bollard::models::Volume> for VolumeSummary {
    fn from(v: bollard::models::Volume) -> Self {
        Self {
            name: v.name,
            driver: v.driver,
            mountpoint: v.mountpoint,
            scope: v
                .scope
                .map(|s| format!("{:?}", s).to_lowercase())
                .unwrap_or_else(|| "local".to_string()),
            labels: v.labels,
        }
    }
}
