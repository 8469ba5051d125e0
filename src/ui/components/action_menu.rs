//! Floating quick-navigation menu
//!
//! An overlay widget independent of the resource views: a persistent toggle
//! control in the bottom-right corner, and, while open, a dismissible
//! backdrop plus a stacked list of navigation entries revealed one per tick.
//! Its only state is the open flag and the reveal progress; it never touches
//! any data.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::core::Tab;

/// One navigation entry in the menu
#[derive(Debug, Clone)]
pub struct MenuEntry {
    pub title: String,
    pub target: Tab,
}

/// Floating menu widget
#[derive(Debug, Clone)]
pub struct ActionMenu {
    entries: Vec<MenuEntry>,
    open: bool,
    revealed: usize,
}

impl ActionMenu {
    /// Create a menu over the given entries
    pub fn new(entries: Vec<MenuEntry>) -> Self {
        Self {
            entries,
            open: false,
            revealed: 0,
        }
    }

    /// A menu navigating to every tab
    pub fn with_tabs() -> Self {
        let entries = Tab::all()
            .iter()
            .map(|t| MenuEntry {
                title: t.name().to_string(),
                target: *t,
            })
            .collect();
        Self::new(entries)
    }

    /// Whether the menu is currently open
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Flip the open state; reveal restarts from zero on open
    pub fn toggle(&mut self) {
        self.open = !self.open;
        if self.open {
            self.revealed = 0;
        }
    }

    /// Close the menu (backdrop dismissal)
    pub fn close(&mut self) {
        self.open = false;
    }

    /// Advance the staggered reveal by one entry
    pub fn tick(&mut self) {
        if self.open && self.revealed < self.entries.len() {
            self.revealed += 1;
        }
    }

    /// Activate the n-th entry; closes the menu and yields the target
    pub fn select(&mut self, index: usize) -> Option<Tab> {
        if !self.open {
            return None;
        }
        let target = self.entries.get(index).map(|e| e.target)?;
        self.close();
        Some(target)
    }

    /// Render the overlay; renders nothing at all without entries
    pub fn render(&self, frame: &mut Frame, area: Rect) {
        if self.entries.is_empty() {
            return;
        }

        self.render_toggle(frame, area);

        if !self.open {
            return;
        }

        // Backdrop: dim the whole screen behind the menu
        frame.render_widget(Clear, area);
        frame.render_widget(
            Block::default().style(Style::default().bg(Color::Black).fg(Color::DarkGray)),
            area,
        );

        let width = self
            .entries
            .iter()
            .map(|e| e.title.len() as u16 + 6)
            .max()
            .unwrap_or(12)
            .min(area.width);
        let height = (self.revealed as u16 + 2).min(area.height);

        let popup = Rect {
            x: area.x + area.width.saturating_sub(width + 2),
            y: area.y + area.height.saturating_sub(height + 2),
            width,
            height,
        };

        let lines: Vec<Line> = self
            .entries
            .iter()
            .take(self.revealed)
            .enumerate()
            .map(|(i, e)| {
                Line::from(vec![
                    Span::styled(
                        format!("[{}] ", i + 1),
                        Style::default().fg(Color::Cyan),
                    ),
                    Span::styled(
                        e.title.clone(),
                        Style::default()
                            .fg(Color::White)
                            .add_modifier(Modifier::BOLD),
                    ),
                ])
            })
            .collect();

        frame.render_widget(Clear, popup);
        frame.render_widget(
            Paragraph::new(lines).block(
                Block::default()
                    .title(" Go to ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Cyan)),
            ),
            popup,
        );
    }

    /// Persistent toggle control; its glyph tracks the open state
    fn render_toggle(&self, frame: &mut Frame, area: Rect) {
        if area.width < 8 || area.height < 1 {
            return;
        }

        let glyph = if self.open { "✕" } else { "☰" };
        let control = Rect {
            x: area.x + area.width - 8,
            y: area.y + area.height - 1,
            width: 8,
            height: 1,
        };

        frame.render_widget(
            Paragraph::new(Span::styled(
                format!(" [m] {} ", glyph),
                Style::default().fg(Color::Cyan),
            )),
            control,
        );
    }
}
