//! Main application coordinator

use anyhow::Result;
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::terminal::{self, EnterAlternateScreen, LeaveAlternateScreen};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::io;
use std::time::Duration;
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::core::{ConnectionInfo, NotificationLevel, Tab, UiAction};
use crate::docker::DockerClient;
use crate::state::AppState;
use crate::ui::format;
use crate::ui::UiApp;

/// Main application struct
pub struct App {
    config: Config,
    docker_client: Option<DockerClient>,
    ui: UiApp,
}

impl App {
    /// Create a new application instance
    pub async fn new(config: Config) -> Result<Self> {
        info!("Creating new App instance");

        let mut state = AppState::new(config.servers());

        // Try to connect to the selected server's daemon
        let server = state
            .selected_server()
            .cloned()
            .unwrap_or_else(crate::core::ServerInfo::local);
        let docker_client = match DockerClient::for_server(&server).await {
            Ok(client) => {
                let info = client.connection_info().clone();
                state.set_docker_connected(true, info);
                Some(client)
            }
            Err(e) => {
                warn!("Could not connect to Docker: {}", e);
                state.set_docker_connected(false, ConnectionInfo::default());
                None
            }
        };

        Ok(Self {
            config,
            docker_client,
            ui: UiApp::new(state),
        })
    }

    /// Run the main application loop
    pub async fn run(&mut self) -> Result<()> {
        info!("Starting main application loop");

        let mut terminal = setup_terminal()?;

        // Initial data load
        self.reload_all(true).await;

        let result = self.run_event_loop(&mut terminal).await;

        restore_terminal(&mut terminal)?;

        result
    }

    /// Run the event loop
    async fn run_event_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> Result<()> {
        let mut last_tick = std::time::Instant::now();
        let mut last_refresh = std::time::Instant::now();
        let tick_rate = Duration::from_millis(250);
        let poll_interval = Duration::from_millis(self.config.general.poll_interval_ms);

        loop {
            terminal.draw(|f| self.ui.draw(f))?;

            // Handle events with timeout
            let timeout = tick_rate
                .checked_sub(last_tick.elapsed())
                .unwrap_or_else(|| Duration::from_secs(0));

            if crossterm::event::poll(timeout)? {
                let event = crossterm::event::read()?;
                if let Some(action) = self.ui.handle_event(event) {
                    self.execute(action).await;
                }
            }

            if self.ui.should_quit {
                info!("Quit signal received, exiting event loop");
                break;
            }

            // Periodic tasks
            if last_tick.elapsed() >= tick_rate {
                self.ui.on_tick();
                self.ui.state.clear_old_notifications(5);
                last_tick = std::time::Instant::now();
            }

            // Background refresh of the visible list, without a spinner
            if last_refresh.elapsed() >= poll_interval {
                self.refresh_tab(self.ui.state.current_tab, false).await;
                last_refresh = std::time::Instant::now();
            }
        }

        Ok(())
    }

    /// Execute an action dispatched by the UI
    async fn execute(&mut self, action: UiAction) {
        debug!("Executing action: {:?}", action);

        match action {
            UiAction::Quit => {}

            UiAction::Refresh => {
                self.refresh_tab(self.ui.state.current_tab, true).await;
            }

            UiAction::SelectServer(id) => {
                self.switch_server(&id).await;
            }
            UiAction::AddServer => {
                self.ui.state.add_notification(
                    "Add servers under [[servers]] in the config file",
                    NotificationLevel::Info,
                );
            }

            UiAction::Container { action, id } => {
                self.container_action(&action, &id).await;
            }
            UiAction::CreateContainer => {
                self.ui.state.add_notification(
                    "Run an image from the Images tab with Enter",
                    NotificationLevel::Info,
                );
            }
            UiAction::OpenShell { id, name } => {
                self.ui.state.add_notification(
                    format!(
                        "Shell for {}: docker exec -it {} sh",
                        name,
                        format::short_id(&id)
                    ),
                    NotificationLevel::Info,
                );
            }
            UiAction::OpenLogs { id, name } => {
                self.ui.state.add_notification(
                    format!("Logs for {}: docker logs -f {}", name, format::short_id(&id)),
                    NotificationLevel::Info,
                );
            }

            UiAction::PullImage => {
                self.ui.state.add_notification(
                    "Update a tagged image with 'u' on its row",
                    NotificationLevel::Info,
                );
            }
            UiAction::UpdateImage { tag } => {
                self.update_image(&tag).await;
            }
            UiAction::RunImage { tag, id } => {
                self.run_image(&tag, &id).await;
            }
            UiAction::DeleteImage { id } => {
                self.delete_image(&id).await;
            }
            UiAction::PruneImages => {
                self.prune_images().await;
            }

            UiAction::DeleteVolume { name } => {
                self.delete_volume(&name).await;
            }
            UiAction::PruneVolumes => {
                self.prune_volumes().await;
            }
        }
    }

    /// Reconnect to another configured server and reload everything
    async fn switch_server(&mut self, id: &str) {
        self.ui.state.select_server(id);
        let Some(server) = self.ui.state.selected_server().cloned() else {
            return;
        };

        info!("Switching to server: {}", server.name);

        match DockerClient::for_server(&server).await {
            Ok(client) => {
                let info = client.connection_info().clone();
                self.ui.state.set_docker_connected(true, info);
                self.docker_client = Some(client);
                self.ui.state.add_notification(
                    format!("Connected to {}", server.name),
                    NotificationLevel::Success,
                );
                self.reload_all(true).await;
            }
            Err(e) => {
                warn!("Could not connect to {}: {}", server.name, e);
                self.docker_client = None;
                self.ui
                    .state
                    .set_docker_connected(false, ConnectionInfo::default());
                let message = e.user_message();
                self.ui.state.containers.failed(message.clone());
                self.ui.state.images.failed(message.clone());
                self.ui.state.networks.failed(message.clone());
                self.ui.state.volumes.failed(message);
            }
        }
    }

    /// Run a lifecycle action against a container
    async fn container_action(&mut self, action: &str, id: &str) {
        let Some(client) = self.docker_client.clone() else {
            self.notify_offline();
            return;
        };

        let result = match action {
            "start" => client.start_container(id).await,
            "stop" => client.stop_container(id, None).await,
            "restart" => client.restart_container(id, None).await,
            "delete" => client.remove_container(id, true).await,
            other => {
                warn!("Unknown container action: {}", other);
                return;
            }
        };

        match result {
            Ok(()) => {
                self.ui.state.add_notification(
                    format!("Container {}: {} ok", format::short_id(id), action),
                    NotificationLevel::Success,
                );
            }
            Err(e) => {
                self.ui
                    .state
                    .add_notification(e.user_message(), NotificationLevel::Error);
            }
        }

        self.refresh_tab(Tab::Containers, false).await;
    }

    /// Pull the latest content for an existing tag
    async fn update_image(&mut self, tag: &str) {
        let Some(client) = self.docker_client.clone() else {
            self.notify_offline();
            return;
        };

        self.ui.state.add_notification(
            format!("Pulling {}...", tag),
            NotificationLevel::Info,
        );

        match client.pull_image(tag).await {
            Ok(()) => {
                self.ui.state.add_notification(
                    format!("Updated {}", tag),
                    NotificationLevel::Success,
                );
            }
            Err(e) => {
                self.ui
                    .state
                    .add_notification(e.user_message(), NotificationLevel::Error);
            }
        }

        self.refresh_tab(Tab::Images, false).await;
    }

    /// Create and start a container from an image
    async fn run_image(&mut self, tag: &str, id: &str) {
        let Some(client) = self.docker_client.clone() else {
            self.notify_offline();
            return;
        };

        // Untagged images are addressable by id only
        let reference = if tag.is_empty() { id } else { tag };

        match client.run_container(reference, None).await {
            Ok(container_id) => {
                self.ui.state.add_notification(
                    format!(
                        "Started {} from {}",
                        format::short_id(&container_id),
                        reference
                    ),
                    NotificationLevel::Success,
                );
            }
            Err(e) => {
                self.ui
                    .state
                    .add_notification(e.user_message(), NotificationLevel::Error);
            }
        }

        self.refresh_tab(Tab::Containers, false).await;
    }

    async fn delete_image(&mut self, id: &str) {
        let Some(client) = self.docker_client.clone() else {
            self.notify_offline();
            return;
        };

        match client.remove_image(id, false).await {
            Ok(()) => {
                self.ui.state.add_notification(
                    format!("Deleted image {}", format::image_short_id(id)),
                    NotificationLevel::Success,
                );
            }
            Err(e) => {
                self.ui
                    .state
                    .add_notification(e.user_message(), NotificationLevel::Error);
            }
        }

        self.refresh_tab(Tab::Images, false).await;
    }

    async fn prune_images(&mut self) {
        let Some(client) = self.docker_client.clone() else {
            self.notify_offline();
            return;
        };

        match client.prune_images().await {
            Ok(reclaimed) => {
                self.ui.state.add_notification(
                    format!(
                        "Pruned dangling images, reclaimed {}",
                        format::format_bytes(reclaimed as i64)
                    ),
                    NotificationLevel::Success,
                );
            }
            Err(e) => {
                self.ui
                    .state
                    .add_notification(e.user_message(), NotificationLevel::Error);
            }
        }

        self.refresh_tab(Tab::Images, false).await;
    }

    async fn delete_volume(&mut self, name: &str) {
        let Some(client) = self.docker_client.clone() else {
            self.notify_offline();
            return;
        };

        match client.remove_volume(name, false).await {
            Ok(()) => {
                self.ui.state.add_notification(
                    format!("Deleted volume {}", name),
                    NotificationLevel::Success,
                );
            }
            Err(e) => {
                self.ui
                    .state
                    .add_notification(e.user_message(), NotificationLevel::Error);
            }
        }

        self.refresh_tab(Tab::Volumes, false).await;
    }

    async fn prune_volumes(&mut self) {
        let Some(client) = self.docker_client.clone() else {
            self.notify_offline();
            return;
        };

        match client.prune_volumes().await {
            Ok(reclaimed) => {
                self.ui.state.add_notification(
                    format!(
                        "Pruned unused volumes, reclaimed {}",
                        format::format_bytes(reclaimed as i64)
                    ),
                    NotificationLevel::Success,
                );
            }
            Err(e) => {
                self.ui
                    .state
                    .add_notification(e.user_message(), NotificationLevel::Error);
            }
        }

        self.refresh_tab(Tab::Volumes, false).await;
    }

    /// Reload all four resource lists
    async fn reload_all(&mut self, show_spinner: bool) {
        for tab in Tab::all().iter().copied() {
            self.refresh_tab(tab, show_spinner).await;
        }
    }

    /// Reload one resource list.
    ///
    /// An explicit refresh shows the pending state; background polling
    /// swaps data in place so the list does not flicker.
    async fn refresh_tab(&mut self, tab: Tab, show_spinner: bool) {
        let Some(client) = self.docker_client.clone() else {
            return;
        };

        let state = &mut self.ui.state;
        let all = self.config.general.show_all_containers;

        match tab {
            Tab::Containers => {
                if show_spinner {
                    state.containers.begin_load();
                }
                match client.list_containers(all).await {
                    Ok(items) => state.containers.loaded(items),
                    Err(e) => state.containers.failed(e.user_message()),
                }
            }
            Tab::Images => {
                if show_spinner {
                    state.images.begin_load();
                }
                match client.list_images().await {
                    Ok(items) => state.images.loaded(items),
                    Err(e) => state.images.failed(e.user_message()),
                }
            }
            Tab::Networks => {
                if show_spinner {
                    state.networks.begin_load();
                }
                match client.list_networks().await {
                    Ok(items) => state.networks.loaded(items),
                    Err(e) => state.networks.failed(e.user_message()),
                }
            }
            Tab::Volumes => {
                if show_spinner {
                    state.volumes.begin_load();
                }
                match client.list_volumes().await {
                    Ok(items) => state.volumes.loaded(items),
                    Err(e) => state.volumes.failed(e.user_message()),
                }
            }
        }

        state.clamp_selections();
    }

    fn notify_offline(&mut self) {
        self.ui
            .state
            .add_notification("Not connected to a Docker daemon", NotificationLevel::Warning);
    }
}

/// Setup the terminal for TUI
fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    info!("Setting up terminal");

    terminal::enable_raw_mode()?;
    let mut stdout = io::stdout();
    crossterm::execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;

    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;

    info!("Terminal setup complete");
    Ok(terminal)
}

/// Restore terminal to original state
fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    info!("Restoring terminal");

    terminal::disable_raw_mode()?;
    crossterm::execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    info!("Terminal restored");
    Ok(())
}
