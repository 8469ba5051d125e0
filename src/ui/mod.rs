//! User interface module

pub mod app;
pub mod components;
pub mod format;

pub use app::UiApp;
