//! Image operations

use bollard::image::{CreateImageOptions, ListImagesOptions, RemoveImageOptions};
use futures::TryStreamExt;
use tracing::{debug, info};

use crate::core::{DockerError, ImageSummary, Result};
use crate::docker::DockerClient;

impl DockerClient {
    /// List all images
    pub async fn list_images(&self) -> Result<Vec<ImageSummary>> {
        debug!("Listing images");

        let options = ListImagesOptions::<String> {
            all: false,
            ..Default::default()
        };

        let images = self
            .inner()
            .list_images(Some(options))
            .await
            .map_err(|e| DockerError::Image(e.to_string()))?;

        info!("Found {} images", images.len());

        Ok(images.into_iter().map(Into::into).collect())
    }

    /// Pull an image by reference (also used to update an existing tag)
    pub async fn pull_image(&self, reference: &str) -> Result<()> {
        info!("Pulling image: {}", reference);

        let options = CreateImageOptions::<&str> {
            from_image: reference,
            ..Default::default()
        };

        // Drain the progress stream; any chunk error fails the pull
        self.inner()
            .create_image(Some(options), None, None)
            .try_collect::<Vec<_>>()
            .await
            .map_err(|e| DockerError::Image(format!("Failed to pull {}: {}", reference, e)))?;

        info!("Image {} pulled successfully", reference);
        Ok(())
    }

    /// Remove an image
    pub async fn remove_image(&self, id: &str, force: bool) -> Result<()> {
        info!("Removing image: {} (force={})", id, force);

        let options = RemoveImageOptions {
            force,
            ..Default::default()
        };

        self.inner()
            .remove_image(id, Some(options), None)
            .await
            .map_err(|e| DockerError::Image(format!("Failed to remove {}: {}", id, e)))?;

        info!("Image {} removed successfully", id);
        Ok(())
    }

    /// Prune dangling images (untagged images)
    pub async fn prune_images(&self) -> Result<u64> {
        info!("Pruning dangling images");

        let filters =
            std::collections::HashMap::from([("dangling".to_string(), vec!["true".to_string()])]);

        let result = self
            .inner()
            .prune_images(Some(bollard::image::PruneImagesOptions { filters }))
            .await
            .map_err(|e| DockerError::Image(format!("Failed to prune images: {}", e)))?;

        let reclaimed = result.space_reclaimed.unwrap_or(0) as u64;
        info!("Pruned images, reclaimed {} bytes", reclaimed);
        Ok(reclaimed)
    }
}

impl From<bollard::models::ImageSummary> for ImageSummary {
    fn from(i: bollard::models::ImageSummary) -> Self {
        // The daemon reports untagged images as "<none>:<none>"; keep the raw
        // tags and let the view apply its placeholder rules
        let tags: Vec<String> = i
            .repo_tags
            .into_iter()
            .filter(|t| t != "<none>:<none>")
            .collect();

        Self {
            id: i.id,
            tags,
            created: i.created,
            size: i.size,
            containers: i.containers as i32,
            labels: i.labels,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_none_tags_filtered() {
        let raw = bollard::models::ImageSummary {
            id: "sha256:abcdef0123456789".to_string(),
            repo_tags: vec!["<none>:<none>".to_string()],
            ..Default::default()
        };
        let summary: ImageSummary = raw.into();
        assert!(summary.tags.is_empty());
    }

    // Note: These tests require Docker to be running

    #[tokio::test]
    #[ignore = "requires Docker daemon"]
    async fn test_list_images() {
        let client = DockerClient::from_env().await.unwrap();
        let images = client.list_images().await;
        assert!(images.is_ok());
    }
}
