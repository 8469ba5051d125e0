//! Core type definitions and shared types

/// Type alias for container IDs
pub type ContainerId = String;

/// Type alias for image IDs
pub type ImageId = String;

/// Type alias for volume names
pub type VolumeName = String;

/// Type alias for network IDs
pub type NetworkId = String;

/// Notification level for status messages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Info,
    Success,
    Warning,
    Error,
}

impl std::fmt::Display for NotificationLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NotificationLevel::Info => write!(f, "INFO"),
            NotificationLevel::Success => write!(f, "SUCCESS"),
            NotificationLevel::Warning => write!(f, "WARNING"),
            NotificationLevel::Error => write!(f, "ERROR"),
        }
    }
}

/// Application tabs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tab {
    Containers,
    Images,
    Networks,
    Volumes,
}

impl Tab {
    /// Get all available tabs
    pub fn all() -> &'static [Tab] {
        &[Tab::Containers, Tab::Images, Tab::Networks, Tab::Volumes]
    }

    /// Get the display name for this tab
    pub fn name(&self) -> &'static str {
        match self {
            Tab::Containers => "Containers",
            Tab::Images => "Images",
            Tab::Networks => "Networks",
            Tab::Volumes => "Volumes",
        }
    }

    /// Get the shortcut key for this tab (1-4)
    pub fn shortcut(&self) -> char {
        match self {
            Tab::Containers => '1',
            Tab::Images => '2',
            Tab::Networks => '3',
            Tab::Volumes => '4',
        }
    }
}

impl std::fmt::Display for Tab {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Actions emitted by the view layer.
///
/// Every interactive control in the list views maps to exactly one variant,
/// carrying identifiers, names and tags as opaque strings. The coordinator
/// owns all execution; the views never touch the Docker client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiAction {
    /// Quit the application
    Quit,
    /// Switch the active server
    SelectServer(String),
    /// Request a new server (configuration-owned)
    AddServer,
    /// Reload the current resource list
    Refresh,
    /// Create a new container
    CreateContainer,
    /// Generic container action: start / stop / restart / delete
    Container { action: String, id: String },
    /// Open an interactive shell in a container
    OpenShell { id: String, name: String },
    /// Open the log view for a container
    OpenLogs { id: String, name: String },
    /// Pull a new image by reference
    PullImage,
    /// Prune dangling images
    PruneImages,
    /// Re-pull an existing image tag
    UpdateImage { tag: String },
    /// Run a container from an image
    RunImage { tag: String, id: String },
    /// Remove an image
    DeleteImage { id: String },
    /// Prune unused volumes
    PruneVolumes,
    /// Remove a volume
    DeleteVolume { name: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tab_properties() {
        assert_eq!(Tab::Containers.name(), "Containers");
        assert_eq!(Tab::Containers.shortcut(), '1');
        assert_eq!(Tab::all().len(), 4);
    }

    #[test]
    fn test_notification_level_display() {
        assert_eq!(NotificationLevel::Error.to_string(), "ERROR");
        assert_eq!(NotificationLevel::Success.to_string(), "SUCCESS");
    }

    #[test]
    fn test_ui_action_equality() {
        let a = UiAction::Container {
            action: "stop".to_string(),
            id: "abc".to_string(),
        };
        let b = UiAction::Container {
            action: "stop".to_string(),
            id: "abc".to_string(),
        };
        assert_eq!(a, b);
    }
}
