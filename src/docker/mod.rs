pub mod client;
pub mod containers;
pub mod images;
pub mod networks;
pub mod volumes;

pub use client::DockerClient;
