//! UI components

pub mod action_menu;
pub mod container_list;
pub mod image_list;
pub mod list_panel;
pub mod network_list;
pub mod server_tabs;
pub mod volume_list;

pub use action_menu::{ActionMenu, MenuEntry};
pub use container_list::ContainerListWidget;
pub use image_list::ImageListWidget;
pub use list_panel::{render_empty, render_error, render_loading, Spinner};
pub use network_list::NetworkListWidget;
pub use server_tabs::build_server_tabs;
pub use volume_list::VolumeListWidget;
