//! Application state management

use chrono::Utc;

use crate::core::{
    ConnectionInfo, ContainerSummary, ImageSummary, NetworkSummary, NotificationLevel, ServerInfo,
    Tab, VolumeSummary,
};

/// Display state of one resource list.
///
/// Exactly one of the three views is ever active: a pending load wins over
/// everything, a recorded error wins over data, and only then do the items
/// (or the empty state) render.
#[derive(Debug, Clone, Default)]
pub struct ResourceState<T> {
    pub items: Vec<T>,
    pub loading: bool,
    pub error: Option<String>,
}

/// The mutually exclusive view of a resource list
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListView<'a, T> {
    Loading,
    Error(&'a str),
    Loaded(&'a [T]),
}

impl<T> ResourceState<T> {
    /// Mark a load as in flight; existing items stay until it resolves
    pub fn begin_load(&mut self) {
        self.loading = true;
    }

    /// Record a successful load
    pub fn loaded(&mut self, items: Vec<T>) {
        self.items = items;
        self.loading = false;
        self.error = None;
    }

    /// Record a failed load; the message renders verbatim
    pub fn failed(&mut self, message: impl Into<String>) {
        self.loading = false;
        self.error = Some(message.into());
    }

    /// Resolve the current view
    pub fn view(&self) -> ListView<'_, T> {
        if self.loading {
            ListView::Loading
        } else if let Some(err) = &self.error {
            ListView::Error(err)
        } else {
            ListView::Loaded(&self.items)
        }
    }
}

/// Notification message
#[derive(Debug, Clone)]
pub struct Notification {
    pub id: uuid::Uuid,
    pub message: String,
    pub level: NotificationLevel,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Main application state
#[derive(Debug, Clone)]
pub struct AppState {
    // Navigation
    pub current_tab: Tab,

    // Docker data, per resource kind
    pub containers: ResourceState<ContainerSummary>,
    pub images: ResourceState<ImageSummary>,
    pub networks: ResourceState<NetworkSummary>,
    pub volumes: ResourceState<VolumeSummary>,

    // List selections (index into the loaded items)
    pub container_selected: usize,
    pub image_selected: usize,
    pub network_selected: usize,
    pub volume_selected: usize,

    // Servers
    pub servers: Vec<ServerInfo>,
    pub selected_server_id: String,

    // Connection
    pub docker_connected: bool,
    pub connection_info: ConnectionInfo,

    // UI state
    pub terminal_size: (u16, u16),
    pub show_help: bool,
    pub notifications: Vec<Notification>,
}

impl AppState {
    /// Create new app state scoped to a server roster
    pub fn new(servers: Vec<ServerInfo>) -> Self {
        let selected_server_id = servers
            .first()
            .map(|s| s.id.clone())
            .unwrap_or_else(|| "local".to_string());

        Self {
            current_tab: Tab::Containers,
            containers: ResourceState::default(),
            images: ResourceState::default(),
            networks: ResourceState::default(),
            volumes: ResourceState::default(),
            container_selected: 0,
            image_selected: 0,
            network_selected: 0,
            volume_selected: 0,
            servers,
            selected_server_id,
            docker_connected: false,
            connection_info: ConnectionInfo::default(),
            terminal_size: (80, 24),
            show_help: false,
            notifications: vec![],
        }
    }

    /// The currently selected server
    pub fn selected_server(&self) -> Option<&ServerInfo> {
        self.servers
            .iter()
            .find(|s| s.id == self.selected_server_id)
    }

    /// Select a server by id; unknown ids are ignored
    pub fn select_server(&mut self, id: &str) {
        if self.servers.iter().any(|s| s.id == id) {
            self.selected_server_id = id.to_string();
        }
    }

    /// The server after the selected one, wrapping around
    pub fn next_server_id(&self) -> Option<String> {
        if self.servers.len() < 2 {
            return None;
        }
        let idx = self
            .servers
            .iter()
            .position(|s| s.id == self.selected_server_id)
            .unwrap_or(0);
        let next = (idx + 1) % self.servers.len();
        Some(self.servers[next].id.clone())
    }

    /// Add a notification
    pub fn add_notification(&mut self, message: impl Into<String>, level: NotificationLevel) {
        let notification = Notification {
            id: uuid::Uuid::new_v4(),
            message: message.into(),
            level,
            timestamp: Utc::now(),
        };
        self.notifications.push(notification);

        // Keep only last 10 notifications
        if self.notifications.len() > 10 {
            self.notifications.remove(0);
        }
    }

    /// Clear old notifications (older than threshold)
    pub fn clear_old_notifications(&mut self, max_age_seconds: i64) {
        let cutoff = Utc::now() - chrono::Duration::seconds(max_age_seconds);
        self.notifications.retain(|n| n.timestamp > cutoff);
    }

    /// Set Docker connection status
    pub fn set_docker_connected(&mut self, connected: bool, info: ConnectionInfo) {
        self.docker_connected = connected;
        self.connection_info = info;
    }

    /// Clamp all selections to the loaded item counts
    pub fn clamp_selections(&mut self) {
        clamp(&mut self.container_selected, self.containers.items.len());
        clamp(&mut self.image_selected, self.images.items.len());
        clamp(&mut self.network_selected, self.networks.items.len());
        clamp(&mut self.volume_selected, self.volumes.items.len());
    }

    /// Move the selection of the current tab's list
    pub fn move_selection(&mut self, down: bool) {
        let (selected, len) = match self.current_tab {
            Tab::Containers => (&mut self.container_selected, self.containers.items.len()),
            Tab::Images => (&mut self.image_selected, self.images.items.len()),
            Tab::Networks => (&mut self.network_selected, self.networks.items.len()),
            Tab::Volumes => (&mut self.volume_selected, self.volumes.items.len()),
        };
        if len == 0 {
            return;
        }
        if down {
            *selected = (*selected + 1) % len;
        } else if *selected == 0 {
            *selected = len - 1;
        } else {
            *selected -= 1;
        }
    }
}

fn clamp(selected: &mut usize, len: usize) {
    if len == 0 {
        *selected = 0;
    } else if *selected >= len {
        *selected = len - 1;
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(vec![ServerInfo::local()])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_state_default() {
        let state = AppState::default();
        assert_eq!(state.current_tab, Tab::Containers);
        assert!(state.containers.items.is_empty());
        assert!(!state.docker_connected);
        assert_eq!(state.selected_server_id, "local");
    }

    #[test]
    fn test_resource_state_loading_wins() {
        let mut state: ResourceState<u32> = ResourceState::default();
        state.loaded(vec![1, 2, 3]);
        state.failed("boom");
        state.begin_load();

        // A pending load hides both data and error
        assert_eq!(state.view(), ListView::Loading);
    }

    #[test]
    fn test_resource_state_error_hides_data() {
        let mut state: ResourceState<u32> = ResourceState::default();
        state.loaded(vec![1, 2, 3]);
        state.failed("connection refused");

        assert_eq!(state.view(), ListView::Error("connection refused"));
    }

    #[test]
    fn test_resource_state_loaded_clears_error() {
        let mut state: ResourceState<u32> = ResourceState::default();
        state.failed("boom");
        state.loaded(vec![7]);

        assert_eq!(state.view(), ListView::Loaded(&[7][..]));
    }

    #[test]
    fn test_select_server_ignores_unknown() {
        let mut state = AppState::default();
        state.select_server("nope");
        assert_eq!(state.selected_server_id, "local");
    }

    #[test]
    fn test_next_server_wraps() {
        let servers = vec![
            ServerInfo {
                id: "a".to_string(),
                name: "A".to_string(),
                host: None,
            },
            ServerInfo {
                id: "b".to_string(),
                name: "B".to_string(),
                host: None,
            },
        ];
        let mut state = AppState::new(servers);
        assert_eq!(state.next_server_id().as_deref(), Some("b"));
        state.select_server("b");
        assert_eq!(state.next_server_id().as_deref(), Some("a"));
    }

    #[test]
    fn test_add_notification() {
        let mut state = AppState::default();
        state.add_notification("Test message", NotificationLevel::Info);

        assert_eq!(state.notifications.len(), 1);
        assert_eq!(state.notifications[0].message, "Test message");
    }

    #[test]
    fn test_notification_limit() {
        let mut state = AppState::default();

        // Add 15 notifications
        for i in 0..15 {
            state.add_notification(format!("Message {}", i), NotificationLevel::Info);
        }

        // Should only keep last 10
        assert_eq!(state.notifications.len(), 10);
    }

    #[test]
    fn test_move_selection_wraps() {
        let mut state = AppState::default();
        state.containers.loaded(vec![
            Default::default(),
            Default::default(),
            Default::default(),
        ]);

        state.move_selection(true);
        assert_eq!(state.container_selected, 1);
        state.move_selection(false);
        state.move_selection(false);
        assert_eq!(state.container_selected, 2); // wrapped
    }
}
