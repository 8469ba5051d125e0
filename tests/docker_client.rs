//! Docker client integration tests
//!
//! All of these talk to a real daemon, so they are ignored by default.
//! Run them with `cargo test -- --ignored` on a machine with Docker.

use dockdeck::core::ContainerState;
use dockdeck::docker::DockerClient;

#[tokio::test]
#[ignore = "requires Docker daemon"]
async fn test_connect_and_ping() {
    let client = DockerClient::from_env().await.unwrap();
    assert!(!client.connection_info().version.is_empty());

    let pong = client.ping().await;
    assert!(pong.is_ok());
}

#[tokio::test]
#[ignore = "requires Docker daemon"]
async fn test_list_all_containers() {
    let client = DockerClient::from_env().await.unwrap();

    let containers = client.list_containers(true).await.unwrap();
    println!("Found {} containers", containers.len());

    for container in &containers {
        assert!(!container.id.is_empty());
    }
}

#[tokio::test]
#[ignore = "requires Docker daemon"]
async fn test_list_running_containers() {
    let client = DockerClient::from_env().await.unwrap();

    let containers = client.list_containers(false).await.unwrap();
    for container in &containers {
        assert_eq!(
            container.state,
            ContainerState::Running,
            "Container {} should be running",
            container.id
        );
    }
}

#[tokio::test]
#[ignore = "requires Docker daemon"]
async fn test_list_images() {
    let client = DockerClient::from_env().await.unwrap();

    let images = client.list_images().await.unwrap();
    for image in &images {
        assert!(!image.id.is_empty());
        // The daemon never reports the raw "<none>:<none>" marker tag
        assert!(!image.tags.contains(&"<none>:<none>".to_string()));
    }
}

#[tokio::test]
#[ignore = "requires Docker daemon"]
async fn test_list_networks() {
    let client = DockerClient::from_env().await.unwrap();

    let networks = client.list_networks().await.unwrap();
    // A default daemon always has the bridge network
    assert!(networks.iter().any(|n| n.name == "bridge"));
}

#[tokio::test]
#[ignore = "requires Docker daemon"]
async fn test_list_volumes() {
    let client = DockerClient::from_env().await.unwrap();

    let volumes = client.list_volumes().await.unwrap();
    for volume in &volumes {
        assert!(!volume.name.is_empty());
    }
}

#[tokio::test]
#[ignore = "requires Docker daemon"]
async fn test_container_lifecycle() {
    let client = DockerClient::from_env().await.unwrap();

    client.pull_image("alpine:latest").await.unwrap();
    let id = client
        .run_container("alpine:latest", Some("dockdeck-test"))
        .await
        .unwrap();

    client.stop_container(&id, Some(1)).await.unwrap();
    client.remove_container(&id, true).await.unwrap();
}
