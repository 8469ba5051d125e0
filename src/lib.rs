//! Dockdeck - Docker dashboard TUI
//!
//! A terminal dashboard for Docker resource management built with Rust.

pub mod app;
pub mod config;
pub mod core;
pub mod docker;
pub mod state;
pub mod ui;
