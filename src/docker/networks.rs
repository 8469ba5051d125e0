//! Network operations

use bollard::network::ListNetworksOptions;
use tracing::{debug, info};

use crate::core::{DockerError, NetworkSummary, Result};
use crate::docker::DockerClient;

impl DockerClient {
    /// List all networks
    pub async fn list_networks(&self) -> Result<Vec<NetworkSummary>> {
        debug!("Listing networks");

        let options = ListNetworksOptions::<String> {
            filters: Default::default(),
        };

        let networks = self
            .inner()
            .list_networks(Some(options))
            .await
            .map_err(|e| DockerError::Network(e.to_string()))?;

        info!("Found {} networks", networks.len());

        Ok(networks.into_iter().map(Into::into).collect())
    }
}

impl From<bollard::models::Network> for NetworkSummary {
    fn from(n: bollard::models::Network) -> Self {
        Self {
            id: n.id.clone().unwrap_or_default(),
            name: n.name.clone().unwrap_or_default(),
            driver: n.driver.clone().unwrap_or_else(|| "bridge".to_string()),
            scope: n.scope.clone().unwrap_or_else(|| "local".to_string()),
            internal: n.internal.unwrap_or(false),
            attachable: n.attachable.unwrap_or(false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_network_conversion_defaults() {
        let raw = bollard::models::Network::default();
        let summary: NetworkSummary = raw.into();
        assert_eq!(summary.driver, "bridge");
        assert_eq!(summary.scope, "local");
        assert!(!summary.internal);
    }

    // Note: These tests require Docker to be running

    #[tokio::test]
    #[ignore = "requires Docker daemon"]
    async fn test_list_networks() {
        let client = DockerClient::from_env().await.unwrap();
        let networks = client.list_networks().await;
        assert!(networks.is_ok());
    }
}
