//! Server selector strip shown in every list header

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Tabs,
};

use crate::core::ServerInfo;

/// Build the server tabs widget, with a trailing add control.
///
/// Selection is owned by the caller; this widget only displays it.
pub fn build_server_tabs<'a>(servers: &'a [ServerInfo], selected_id: &str) -> Tabs<'a> {
    let selected = servers
        .iter()
        .position(|s| s.id == selected_id)
        .unwrap_or(0);

    let mut titles: Vec<Line> = servers
        .iter()
        .map(|s| Line::from(s.name.clone()))
        .collect();
    titles.push(Line::from(Span::styled(
        "[a]dd",
        Style::default().fg(Color::DarkGray),
    )));

    Tabs::new(titles)
        .select(selected)
        .style(Style::default().fg(Color::Gray))
        .highlight_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .divider("|")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_with_unknown_selection() {
        let servers = vec![ServerInfo::local()];
        // Unknown id falls back to the first server; must not panic
        let _tabs = build_server_tabs(&servers, "missing");
    }
}
