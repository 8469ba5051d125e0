//! Shared loading / error / empty frames for the resource list views
//!
//! Every resource tab renders exactly one of: the spinner, the error panel,
//! or its table (with an empty-state message when there are no items). The
//! caller resolves which via [`crate::state::ResourceState::view`].

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Frames for the loading spinner, advanced once per tick
const SPINNER_FRAMES: [char; 10] = ['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];

/// Loading indicator state
#[derive(Debug, Clone, Copy, Default)]
pub struct Spinner {
    frame: usize,
}

impl Spinner {
    /// Advance to the next frame
    pub fn tick(&mut self) {
        self.frame = (self.frame + 1) % SPINNER_FRAMES.len();
    }

    /// The glyph for the current frame
    pub fn glyph(&self) -> char {
        SPINNER_FRAMES[self.frame]
    }
}

/// Render the loading view: a centered spinner, no data
pub fn render_loading(frame: &mut Frame, area: Rect, title: &str, spinner: Spinner) {
    let block = Block::default().title(format!(" {} ", title)).borders(Borders::ALL);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let text = Line::from(vec![
        Span::styled(
            spinner.glyph().to_string(),
            Style::default().fg(Color::Cyan),
        ),
        Span::raw(" Loading..."),
    ]);
    let paragraph = Paragraph::new(text).alignment(Alignment::Center);

    frame.render_widget(paragraph, centered_line(inner));
}

/// Render the error view; the message renders verbatim
pub fn render_error(frame: &mut Frame, area: Rect, title: &str, message: &str) {
    let block = Block::default()
        .title(format!(" {} ", title))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let lines = vec![
        Line::from(Span::styled(
            format!("Failed to load {}", title.to_lowercase()),
            Style::default()
                .fg(Color::Red)
                .add_modifier(Modifier::BOLD),
        )),
        Line::raw(""),
        Line::from(Span::styled(
            message.to_string(),
            Style::default().fg(Color::Red),
        )),
    ];

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, inner);
}

/// Render the empty-state message instead of a table
pub fn render_empty(frame: &mut Frame, area: Rect, title: &str, message: &str) {
    let block = Block::default().title(format!(" {} ", title)).borders(Borders::ALL);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let paragraph = Paragraph::new(Span::styled(
        message.to_string(),
        Style::default().fg(Color::DarkGray),
    ))
    .alignment(Alignment::Center);

    frame.render_widget(paragraph, centered_line(inner));
}

/// A one-line rect vertically centered inside `area`
fn centered_line(area: Rect) -> Rect {
    let y = area.y + area.height / 2;
    Rect {
        x: area.x,
        y: y.min(area.y + area.height.saturating_sub(1)),
        width: area.width,
        height: 1.min(area.height),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spinner_wraps() {
        let mut spinner = Spinner::default();
        let first = spinner.glyph();
        for _ in 0..SPINNER_FRAMES.len() {
            spinner.tick();
        }
        assert_eq!(spinner.glyph(), first);
    }

    #[test]
    fn test_centered_line_within_area() {
        let area = Rect::new(0, 0, 40, 10);
        let line = centered_line(area);
        assert_eq!(line.height, 1);
        assert!(line.y >= area.y && line.y < area.y + area.height);
    }
}
