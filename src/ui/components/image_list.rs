//! Image list widget

use crossterm::event::KeyCode;
use ratatui::{
    layout::Constraint,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Row, Table, TableState},
};

use crate::core::{ImageSummary, UiAction};
use crate::ui::format;

/// Widget for displaying a list of Docker images
pub struct ImageListWidget {
    images: Vec<ImageSummary>,
    state: TableState,
}

impl ImageListWidget {
    /// Create a new image list widget
    pub fn new(images: Vec<ImageSummary>) -> Self {
        let mut state = TableState::default();
        if !images.is_empty() {
            state.select(Some(0));
        }
        Self { images, state }
    }

    /// Set the selected index
    pub fn set_selected(&mut self, index: Option<usize>) {
        self.state.select(index);
    }

    /// Get the selected image
    pub fn selected_image(&self) -> Option<&ImageSummary> {
        self.state.selected().and_then(|idx| self.images.get(idx))
    }

    /// Get the number of images
    pub fn len(&self) -> usize {
        self.images.len()
    }

    /// Check if the list is empty
    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    /// Resolve a key press on the selected row into an action.
    ///
    /// Update re-pulls the first tag and is inert for untagged images; run
    /// falls back to the image id when no usable tag exists.
    pub fn action_for_key(&self, key: KeyCode) -> Option<UiAction> {
        let image = self.selected_image()?;
        action_for_key(image, key)
    }

    /// Build the table widget
    pub fn build_table(&self) -> Table<'_> {
        let header = Row::new(vec!["REPOSITORY", "TAGS", "ID", "SIZE", "CREATED"])
            .style(Style::default().add_modifier(Modifier::BOLD))
            .bottom_margin(0);

        let rows: Vec<Row> = self
            .images
            .iter()
            .map(|i| {
                let repo = format::primary_repo(&i.tags);
                let untagged = i.tags.is_empty();

                let versions = if untagged {
                    format::NONE_TAG.to_string()
                } else {
                    i.tags
                        .iter()
                        .map(|t| format::tag_version(t))
                        .collect::<Vec<_>>()
                        .join(", ")
                };

                let style = if untagged {
                    Style::default().fg(Color::Yellow)
                } else {
                    Style::default()
                };

                Row::new(vec![
                    Line::from(Span::styled(repo, style)),
                    Line::from(Span::styled(versions, style)),
                    Line::from(format::image_short_id(&i.id)),
                    Line::from(format::format_bytes(i.size)),
                    Line::from(format::format_timestamp(i.created)),
                ])
            })
            .collect();

        Table::new(
            rows,
            [
                Constraint::Min(20),    // Repository
                Constraint::Min(15),    // Tags
                Constraint::Length(12), // ID
                Constraint::Length(10), // Size
                Constraint::Length(11), // Created
            ],
        )
        .header(header)
        .block(
            Block::default()
                .title(format!(" Images ({}) ", self.images.len()))
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

/// Map a key press on an image row to its action
pub fn action_for_key(image: &ImageSummary, key: KeyCode) -> Option<UiAction> {
    match key {
        KeyCode::Char('u') => {
            // Untagged images cannot be re-pulled
            let tag = image.tags.first()?;
            if tag == "<none>:<none>" {
                return None;
            }
            Some(UiAction::UpdateImage { tag: tag.clone() })
        }
        KeyCode::Enter => {
            let tag = image
                .tags
                .first()
                .filter(|t| t.as_str() != "<none>:<none>")
                .cloned()
                .unwrap_or_else(|| image.id.clone());
            Some(UiAction::RunImage {
                tag,
                id: image.id.clone(),
            })
        }
        KeyCode::Char('d') => Some(UiAction::DeleteImage {
            id: image.id.clone(),
        }),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_images() -> Vec<ImageSummary> {
        vec![
            ImageSummary {
                id: "sha256:abc123def4567890".to_string(),
                tags: vec!["nginx:latest".to_string()],
                created: 1_700_000_000,
                size: 1024 * 1024 * 50,
                ..Default::default()
            },
            ImageSummary {
                id: "sha256:def789abc0123456".to_string(),
                tags: vec![],
                created: 1_700_000_000,
                size: 1024 * 1024 * 100,
                ..Default::default()
            },
        ]
    }

    #[test]
    fn test_image_list_creation() {
        let images = create_test_images();
        let widget = ImageListWidget::new(images);
        assert_eq!(widget.len(), 2);
        assert!(!widget.is_empty());
    }

    #[test]
    fn test_update_dispatches_first_tag() {
        let widget = ImageListWidget::new(create_test_images());
        assert_eq!(
            widget.action_for_key(KeyCode::Char('u')),
            Some(UiAction::UpdateImage {
                tag: "nginx:latest".to_string(),
            })
        );
    }

    #[test]
    fn test_update_inert_for_untagged_image() {
        let mut widget = ImageListWidget::new(create_test_images());
        widget.set_selected(Some(1));

        assert!(widget.action_for_key(KeyCode::Char('u')).is_none());
    }

    #[test]
    fn test_run_falls_back_to_id() {
        let mut widget = ImageListWidget::new(create_test_images());
        widget.set_selected(Some(1));

        assert_eq!(
            widget.action_for_key(KeyCode::Enter),
            Some(UiAction::RunImage {
                tag: "sha256:def789abc0123456".to_string(),
                id: "sha256:def789abc0123456".to_string(),
            })
        );
    }

    #[test]
    fn test_run_prefers_tag() {
        let widget = ImageListWidget::new(create_test_images());
        assert_eq!(
            widget.action_for_key(KeyCode::Enter),
            Some(UiAction::RunImage {
                tag: "nginx:latest".to_string(),
                id: "sha256:abc123def4567890".to_string(),
            })
        );
    }

    #[test]
    fn test_delete_dispatches_id() {
        let widget = ImageListWidget::new(create_test_images());
        assert_eq!(
            widget.action_for_key(KeyCode::Char('d')),
            Some(UiAction::DeleteImage {
                id: "sha256:abc123def4567890".to_string(),
            })
        );
    }
}
