//! Network list widget

use ratatui::{
    layout::Constraint,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Row, Table, TableState},
};

use crate::core::NetworkSummary;
use crate::ui::format;

/// Widget for displaying a list of Docker networks
pub struct NetworkListWidget {
    networks: Vec<NetworkSummary>,
    state: TableState,
}

impl NetworkListWidget {
    /// Create a new network list widget
    pub fn new(networks: Vec<NetworkSummary>) -> Self {
        let mut state = TableState::default();
        if !networks.is_empty() {
            state.select(Some(0));
        }
        Self { networks, state }
    }

    /// Set the selected index
    pub fn set_selected(&mut self, index: Option<usize>) {
        self.state.select(index);
    }

    /// Get the selected network
    pub fn selected_network(&self) -> Option<&NetworkSummary> {
        self.state.selected().and_then(|idx| self.networks.get(idx))
    }

    /// Get the number of networks
    pub fn len(&self) -> usize {
        self.networks.len()
    }

    /// Check if the list is empty
    pub fn is_empty(&self) -> bool {
        self.networks.is_empty()
    }

    /// Build the table widget
    pub fn build_table(&self) -> Table<'_> {
        let header = Row::new(vec!["NAME", "ID", "DRIVER", "SCOPE", "INTERNAL"])
            .style(Style::default().add_modifier(Modifier::BOLD))
            .bottom_margin(0);

        let rows: Vec<Row> = self
            .networks
            .iter()
            .map(|n| {
                let internal = if n.internal {
                    Span::styled("Yes", Style::default().fg(Color::Green))
                } else {
                    Span::styled("No", Style::default().fg(Color::DarkGray))
                };

                Row::new(vec![
                    Line::from(Span::styled(
                        n.name.clone(),
                        Style::default().add_modifier(Modifier::BOLD),
                    )),
                    Line::from(format::short_id(&n.id)),
                    Line::from(n.driver.clone()),
                    Line::from(n.scope.clone()),
                    Line::from(internal),
                ])
            })
            .collect();

        Table::new(
            rows,
            [
                Constraint::Min(15),    // Name
                Constraint::Length(12), // ID
                Constraint::Length(10), // Driver
                Constraint::Length(8),  // Scope
                Constraint::Length(8),  // Internal
            ],
        )
        .header(header)
        .block(
            Block::default()
                .title(format!(" Networks ({}) ", self.networks.len()))
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

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_networks() -> Vec<NetworkSummary> {
        vec![
            NetworkSummary {
                id: "net123abc456def7".to_string(),
                name: "bridge".to_string(),
                driver: "bridge".to_string(),
                scope: "local".to_string(),
                internal: false,
                attachable: false,
            },
            NetworkSummary {
                id: "net789xyz012ghi3".to_string(),
                name: "backend".to_string(),
                driver: "overlay".to_string(),
                scope: "swarm".to_string(),
                internal: true,
                attachable: true,
            },
        ]
    }

    #[test]
    fn test_network_list_creation() {
        let widget = NetworkListWidget::new(create_test_networks());
        assert_eq!(widget.len(), 2);
        assert_eq!(widget.selected_network().unwrap().name, "bridge");
    }

    #[test]
    fn test_empty_list() {
        let widget = NetworkListWidget::new(vec![]);
        assert!(widget.is_empty());
        assert!(widget.selected_network().is_none());
    }
}
