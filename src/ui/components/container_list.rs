//! Container list widget

use crossterm::event::KeyCode;
use ratatui::{
    layout::Constraint,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Row, Table, TableState},
};

use crate::core::{ContainerSummary, UiAction};
use crate::ui::format;

/// Widget for displaying a list of containers
pub struct ContainerListWidget {
    containers: Vec<ContainerSummary>,
    state: TableState,
}

impl ContainerListWidget {
    /// Create a new container list widget
    pub fn new(containers: Vec<ContainerSummary>) -> Self {
        let mut state = TableState::default();
        if !containers.is_empty() {
            state.select(Some(0));
        }
        Self { containers, state }
    }

    /// Set the selected index
    pub fn set_selected(&mut self, index: Option<usize>) {
        self.state.select(index);
    }

    /// Get the selected container
    pub fn selected_container(&self) -> Option<&ContainerSummary> {
        self.state
            .selected()
            .and_then(|idx| self.containers.get(idx))
    }

    /// Get the number of containers
    pub fn len(&self) -> usize {
        self.containers.len()
    }

    /// Check if the list is empty
    pub fn is_empty(&self) -> bool {
        self.containers.is_empty()
    }

    /// Resolve a key press on the selected row into an action.
    ///
    /// Running containers expose restart/stop/shell/logs/delete; anything
    /// else exposes only start/delete.
    pub fn action_for_key(&self, key: KeyCode) -> Option<UiAction> {
        let container = self.selected_container()?;
        action_for_key(container, key)
    }

    /// Build the table widget
    pub fn build_table(&self) -> Table<'_> {
        let header = Row::new(vec![
            "NAME", "ID", "STATUS", "IMAGE", "NETWORK / PORTS", "MOUNTS", "CREATED",
        ])
        .style(Style::default().add_modifier(Modifier::BOLD))
        .bottom_margin(0);

        let rows: Vec<Row> = self
            .containers
            .iter()
            .map(|c| {
                let status_style = if c.state.is_running() {
                    Style::default().fg(Color::Green)
                } else {
                    Style::default().fg(Color::Gray)
                };

                let indicator = if c.state.is_running() { "●" } else { "○" };

                // Networks, then published ports with the +N overflow
                let ports = format::published_ports(&c.ports);
                let net_ports = if c.networks.is_empty() {
                    format::with_overflow(&ports)
                } else if ports.is_empty() {
                    c.networks.join(", ")
                } else {
                    format!("{} {}", c.networks.join(", "), format::with_overflow(&ports))
                };

                let mounts = format::with_overflow(&format::mount_destinations(&c.mounts));

                Row::new(vec![
                    Line::from(vec![
                        Span::styled(indicator, status_style),
                        Span::raw(" "),
                        Span::styled(
                            c.name.clone(),
                            Style::default().add_modifier(Modifier::BOLD),
                        ),
                    ]),
                    Line::from(format::short_id(&c.id)),
                    Line::from(Span::styled(c.status.clone(), status_style)),
                    Line::from(c.image.clone()),
                    Line::from(net_ports),
                    Line::from(mounts),
                    Line::from(format::format_timestamp(c.created)),
                ])
            })
            .collect();

        Table::new(
            rows,
            [
                Constraint::Min(12),    // Name
                Constraint::Length(12), // ID
                Constraint::Length(20), // Status
                Constraint::Min(15),    // Image
                Constraint::Min(15),    // Network / Ports
                Constraint::Min(12),    // Mounts
                Constraint::Length(11), // Created
            ],
        )
        .header(header)
        .block(
            Block::default()
                .title(format!(" Containers ({}) ", self.containers.len()))
                .borders(Borders::ALL),
        )
        .row_highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▶ ")
    }

    /// Get the table state for rendering
    pub fn state(&mut self) -> &mut TableState {
        &mut self.state
    }
}

/// Map a key press on a container row to its action.
///
/// The control set depends on the runtime state; a control that is not
/// rendered for the current state resolves to no action at all.
pub fn action_for_key(container: &ContainerSummary, key: KeyCode) -> Option<UiAction> {
    let id = container.id.clone();

    if container.state.is_running() {
        match key {
            KeyCode::Char('R') => Some(UiAction::Container {
                action: "restart".to_string(),
                id,
            }),
            KeyCode::Char('x') => Some(UiAction::Container {
                action: "stop".to_string(),
                id,
            }),
            KeyCode::Char('e') => Some(UiAction::OpenShell {
                id,
                name: container.name.clone(),
            }),
            KeyCode::Char('l') => Some(UiAction::OpenLogs {
                id,
                name: container.name.clone(),
            }),
            KeyCode::Char('d') => Some(UiAction::Container {
                action: "delete".to_string(),
                id,
            }),
            _ => None,
        }
    } else {
        match key {
            KeyCode::Char('s') => Some(UiAction::Container {
                action: "start".to_string(),
                id,
            }),
            KeyCode::Char('d') => Some(UiAction::Container {
                action: "delete".to_string(),
                id,
            }),
            _ => None,
        }
    }
}
