//! Application state

pub mod app_state;

pub use app_state::{AppState, ListView, Notification, ResourceState};
