//! Volume list widget

use crossterm::event::KeyCode;
use ratatui::{
    layout::Constraint,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Row, Table, TableState},
};

use crate::core::{UiAction, VolumeSummary};

/// Widget for displaying a list of Docker volumes
pub struct VolumeListWidget {
    volumes: Vec<VolumeSummary>,
    state: TableState,
}

impl VolumeListWidget {
    /// Create a new volume list widget
    pub fn new(volumes: Vec<VolumeSummary>) -> Self {
        let mut state = TableState::default();
        if !volumes.is_empty() {
            state.select(Some(0));
        }
        Self { volumes, state }
    }

    /// Set the selected index
    pub fn set_selected(&mut self, index: Option<usize>) {
        self.state.select(index);
    }

    /// Get the selected volume
    pub fn selected_volume(&self) -> Option<&VolumeSummary> {
        self.state.selected().and_then(|idx| self.volumes.get(idx))
    }

    /// Get the number of volumes
    pub fn len(&self) -> usize {
        self.volumes.len()
    }

    /// Check if the list is empty
    pub fn is_empty(&self) -> bool {
        self.volumes.is_empty()
    }

    /// Resolve a key press on the selected row into an action
    pub fn action_for_key(&self, key: KeyCode) -> Option<UiAction> {
        let volume = self.selected_volume()?;
        match key {
            KeyCode::Char('d') => Some(UiAction::DeleteVolume {
                name: volume.name.clone(),
            }),
            _ => None,
        }
    }

    /// Build the table widget
    pub fn build_table(&self) -> Table<'_> {
        let header = Row::new(vec!["NAME", "DRIVER", "SCOPE"])
            .style(Style::default().add_modifier(Modifier::BOLD))
            .bottom_margin(0);

        let rows: Vec<Row> = self
            .volumes
            .iter()
            .map(|v| {
                Row::new(vec![
                    Line::from(Span::styled(
                        v.name.clone(),
                        Style::default().add_modifier(Modifier::BOLD),
                    )),
                    Line::from(v.driver.clone()),
                    Line::from(v.scope.clone()),
                ])
            })
            .collect();

        Table::new(
            rows,
            [
                Constraint::Min(20),    // Name
                Constraint::Length(10), // Driver
                Constraint::Length(8),  // Scope
            ],
        )
        .header(header)
        .block(
            Block::default()
                .title(format!(" Volumes ({}) ", self.volumes.len()))
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

    fn create_test_volumes() -> Vec<VolumeSummary> {
        vec![
            VolumeSummary {
                name: "pgdata".to_string(),
                driver: "local".to_string(),
                scope: "local".to_string(),
                ..Default::default()
            },
            VolumeSummary {
                name: "cache".to_string(),
                driver: "local".to_string(),
                scope: "local".to_string(),
                ..Default::default()
            },
        ]
    }

    #[test]
    fn test_volume_list_creation() {
        let widget = VolumeListWidget::new(create_test_volumes());
        assert_eq!(widget.len(), 2);
        assert_eq!(widget.selected_volume().unwrap().name, "pgdata");
    }

    #[test]
    fn test_delete_dispatches_name() {
        let mut widget = VolumeListWidget::new(create_test_volumes());
        widget.set_selected(Some(1));

        assert_eq!(
            widget.action_for_key(KeyCode::Char('d')),
            Some(UiAction::DeleteVolume {
                name: "cache".to_string(),
            })
        );
    }

    #[test]
    fn test_empty_list_no_action() {
        let widget = VolumeListWidget::new(vec![]);
        assert!(widget.action_for_key(KeyCode::Char('d')).is_none());
    }
}
