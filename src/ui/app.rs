//! UI Application logic

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, TableState, Wrap};
use ratatui::Frame;
use tracing::{debug, info};

use crate::core::{NotificationLevel, Tab, UiAction};
use crate::state::{AppState, ListView};
use crate::ui::components::{
    render_empty, render_error, render_loading, ActionMenu, ContainerListWidget, ImageListWidget,
    NetworkListWidget, Spinner, VolumeListWidget,
};
use crate::ui::components::build_server_tabs;

/// UI Application controller
pub struct UiApp {
    pub state: AppState,
    pub should_quit: bool,
    spinner: Spinner,
    menu: ActionMenu,
}

impl UiApp {
    /// Create a new UI app
    pub fn new(state: AppState) -> Self {
        Self {
            state,
            should_quit: false,
            spinner: Spinner::default(),
            menu: ActionMenu::with_tabs(),
        }
    }

    /// Advance time-driven widgets (spinner, menu reveal)
    pub fn on_tick(&mut self) {
        self.spinner.tick();
        self.menu.tick();
    }

    /// Handle a terminal event, possibly yielding an action for the
    /// coordinator to execute
    pub fn handle_event(&mut self, event: Event) -> Option<UiAction> {
        match event {
            Event::Key(key_event) => self.handle_key_event(key_event),
            Event::Resize(width, height) => {
                debug!("Terminal resized to {}x{}", width, height);
                self.state.terminal_size = (width, height);
                None
            }
            _ => None,
        }
    }

    /// Handle keyboard events
    pub fn handle_key_event(&mut self, key: KeyEvent) -> Option<UiAction> {
        // Only handle key press events (not release or repeat)
        if key.kind != KeyEventKind::Press {
            return None;
        }

        // If help is showing, any key closes it
        if self.state.show_help {
            self.state.show_help = false;
            return None;
        }

        // The open menu captures input until dismissed
        if self.menu.is_open() {
            match key.code {
                KeyCode::Esc | KeyCode::Char('m') => self.menu.close(),
                KeyCode::Char(c @ '1'..='9') => {
                    let index = c as usize - '1' as usize;
                    if let Some(tab) = self.menu.select(index) {
                        self.switch_tab(tab);
                    }
                }
                _ => {}
            }
            return None;
        }

        // Global key handlers
        match key.code {
            // Quit
            KeyCode::Char('q') if key.modifiers.is_empty() => {
                info!("Quit key pressed");
                self.should_quit = true;
                Some(UiAction::Quit)
            }
            KeyCode::Char('c') if key.modifiers == KeyModifiers::CONTROL => {
                info!("Ctrl+C pressed");
                self.should_quit = true;
                Some(UiAction::Quit)
            }

            // Tab switching with number keys
            KeyCode::Char('1') => {
                self.switch_tab(Tab::Containers);
                None
            }
            KeyCode::Char('2') => {
                self.switch_tab(Tab::Images);
                None
            }
            KeyCode::Char('3') => {
                self.switch_tab(Tab::Networks);
                None
            }
            KeyCode::Char('4') => {
                self.switch_tab(Tab::Volumes);
                None
            }
            KeyCode::Right => {
                self.cycle_tab(true);
                None
            }
            KeyCode::Left => {
                self.cycle_tab(false);
                None
            }

            // List selection
            KeyCode::Down | KeyCode::Char('j') => {
                self.state.move_selection(true);
                None
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.state.move_selection(false);
                None
            }

            // Server selection
            KeyCode::Char(']') => self
                .state
                .next_server_id()
                .map(UiAction::SelectServer),
            KeyCode::Char('a') => Some(UiAction::AddServer),

            // Refresh the current list
            KeyCode::Char('r') => Some(UiAction::Refresh),

            // Floating menu toggle
            KeyCode::Char('m') => {
                self.menu.toggle();
                None
            }

            // Help
            KeyCode::Char('?') => {
                self.state.show_help = !self.state.show_help;
                None
            }

            code => self.tab_action(code),
        }
    }

    /// Per-tab action bar and row actions
    fn tab_action(&self, code: KeyCode) -> Option<UiAction> {
        match self.state.current_tab {
            Tab::Containers => match code {
                KeyCode::Char('n') => Some(UiAction::CreateContainer),
                _ => self.container_widget().action_for_key(code),
            },
            Tab::Images => match code {
                KeyCode::Char('P') => Some(UiAction::PullImage),
                KeyCode::Char('p') => Some(UiAction::PruneImages),
                _ => self.image_widget().action_for_key(code),
            },
            Tab::Networks => None,
            Tab::Volumes => match code {
                KeyCode::Char('p') => Some(UiAction::PruneVolumes),
                _ => self.volume_widget().action_for_key(code),
            },
        }
    }

    /// Switch to a specific tab
    fn switch_tab(&mut self, tab: Tab) {
        if self.state.current_tab != tab {
            info!("Switching to tab: {:?}", tab);
            self.state.current_tab = tab;
        }
    }

    /// Move to the next or previous tab (circular)
    fn cycle_tab(&mut self, forward: bool) {
        let tabs = Tab::all();
        let current_idx = tabs
            .iter()
            .position(|t| *t == self.state.current_tab)
            .unwrap_or(0);
        let next_idx = if forward {
            (current_idx + 1) % tabs.len()
        } else if current_idx == 0 {
            tabs.len() - 1
        } else {
            current_idx - 1
        };
        self.switch_tab(tabs[next_idx]);
    }

    fn container_widget(&self) -> ContainerListWidget {
        let mut widget = ContainerListWidget::new(self.state.containers.items.clone());
        if !widget.is_empty() {
            widget.set_selected(Some(self.state.container_selected));
        }
        widget
    }

    fn image_widget(&self) -> ImageListWidget {
        let mut widget = ImageListWidget::new(self.state.images.items.clone());
        if !widget.is_empty() {
            widget.set_selected(Some(self.state.image_selected));
        }
        widget
    }

    fn network_widget(&self) -> NetworkListWidget {
        let mut widget = NetworkListWidget::new(self.state.networks.items.clone());
        if !widget.is_empty() {
            widget.set_selected(Some(self.state.network_selected));
        }
        widget
    }

    fn volume_widget(&self) -> VolumeListWidget {
        let mut widget = VolumeListWidget::new(self.state.volumes.items.clone());
        if !widget.is_empty() {
            widget.set_selected(Some(self.state.volume_selected));
        }
        widget
    }

    /// Render the UI
    pub fn draw(&self, frame: &mut Frame) {
        let area = frame.area();

        let main_layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Header
                Constraint::Min(3),    // Main content
                Constraint::Length(1), // Footer
            ])
            .split(area);

        self.render_header(frame, main_layout[0]);
        self.render_main_panel(frame, main_layout[1]);
        self.render_footer(frame, main_layout[2]);

        // Overlays
        self.menu.render(frame, area);
        if self.state.show_help {
            self.render_help_overlay(frame, area);
        }
        self.render_notifications(frame, main_layout[1]);
    }

    /// Render the header: title, tab, server tabs, connection indicator
    fn render_header(&self, frame: &mut Frame, area: Rect) {
        let status_indicator = if self.state.docker_connected {
            ("●", Color::Green)
        } else {
            ("○", Color::Red)
        };

        let layout = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(30),
                Constraint::Min(10),
                Constraint::Length(14),
            ])
            .split(area);

        let title_spans = vec![
            Span::styled(
                " Dockdeck ",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("| "),
            Span::styled(
                self.state.current_tab.name(),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
        ];
        frame.render_widget(
            Paragraph::new(Line::from(title_spans)).style(Style::default().bg(Color::Black)),
            layout[0],
        );

        frame.render_widget(
            build_server_tabs(&self.state.servers, &self.state.selected_server_id)
                .style(Style::default().bg(Color::Black)),
            layout[1],
        );

        let status_spans = vec![
            Span::styled(status_indicator.0, Style::default().fg(status_indicator.1)),
            Span::styled(
                if self.state.docker_connected {
                    " Connected "
                } else {
                    " Offline "
                },
                Style::default().fg(status_indicator.1),
            ),
        ];
        frame.render_widget(
            Paragraph::new(Line::from(status_spans)).style(Style::default().bg(Color::Black)),
            layout[2],
        );
    }

    /// Render the main panel: exactly one of loading / error / data per tab
    fn render_main_panel(&self, frame: &mut Frame, area: Rect) {
        match self.state.current_tab {
            Tab::Containers => match self.state.containers.view() {
                ListView::Loading => render_loading(frame, area, "Containers", self.spinner),
                ListView::Error(msg) => render_error(frame, area, "Containers", msg),
                ListView::Loaded(items) if items.is_empty() => {
                    render_empty(frame, area, "Containers", "No containers")
                }
                ListView::Loaded(items) => {
                    let widget = self.container_widget();
                    let mut table_state = TableState::default();
                    table_state.select(Some(self.state.container_selected.min(items.len() - 1)));
                    frame.render_stateful_widget(widget.build_table(), area, &mut table_state);
                }
            },
            Tab::Images => match self.state.images.view() {
                ListView::Loading => render_loading(frame, area, "Images", self.spinner),
                ListView::Error(msg) => render_error(frame, area, "Images", msg),
                ListView::Loaded(items) if items.is_empty() => {
                    render_empty(frame, area, "Images", "No images")
                }
                ListView::Loaded(items) => {
                    let widget = self.image_widget();
                    let mut table_state = TableState::default();
                    table_state.select(Some(self.state.image_selected.min(items.len() - 1)));
                    frame.render_stateful_widget(widget.build_table(), area, &mut table_state);
                }
            },
            Tab::Networks => match self.state.networks.view() {
                ListView::Loading => render_loading(frame, area, "Networks", self.spinner),
                ListView::Error(msg) => render_error(frame, area, "Networks", msg),
                ListView::Loaded(items) if items.is_empty() => {
                    render_empty(frame, area, "Networks", "No networks")
                }
                ListView::Loaded(items) => {
                    let widget = self.network_widget();
                    let mut table_state = TableState::default();
                    table_state.select(Some(self.state.network_selected.min(items.len() - 1)));
                    frame.render_stateful_widget(widget.build_table(), area, &mut table_state);
                }
            },
            Tab::Volumes => match self.state.volumes.view() {
                ListView::Loading => render_loading(frame, area, "Volumes", self.spinner),
                ListView::Error(msg) => render_error(frame, area, "Volumes", msg),
                ListView::Loaded(items) if items.is_empty() => {
                    render_empty(frame, area, "Volumes", "No volumes")
                }
                ListView::Loaded(items) => {
                    let widget = self.volume_widget();
                    let mut table_state = TableState::default();
                    table_state.select(Some(self.state.volume_selected.min(items.len() - 1)));
                    frame.render_stateful_widget(widget.build_table(), area, &mut table_state);
                }
            },
        }
    }

    /// Render the footer with per-tab key hints
    fn render_footer(&self, frame: &mut Frame, area: Rect) {
        let help_text = match self.state.current_tab {
            Tab::Containers => {
                " [n]:Create [s]:Start [x]:Stop [R]:Restart [e]:Shell [l]:Logs [d]:Delete [r]:Refresh [?]:Help [q]:Quit "
            }
            Tab::Images => {
                " [P]:Pull [p]:Prune [u]:Update [Enter]:Run [d]:Delete [r]:Refresh [?]:Help [q]:Quit "
            }
            Tab::Networks => " [r]:Refresh [?]:Help [q]:Quit ",
            Tab::Volumes => " [p]:Prune [d]:Delete [r]:Refresh [?]:Help [q]:Quit ",
        };

        let footer =
            Paragraph::new(help_text).style(Style::default().fg(Color::Gray).bg(Color::Black));

        frame.render_widget(footer, area);
    }

    /// Render the most recent notification as a one-line banner
    fn render_notifications(&self, frame: &mut Frame, area: Rect) {
        let Some(notification) = self.state.notifications.last() else {
            return;
        };

        let color = match notification.level {
            NotificationLevel::Info => Color::Cyan,
            NotificationLevel::Success => Color::Green,
            NotificationLevel::Warning => Color::Yellow,
            NotificationLevel::Error => Color::Red,
        };

        let banner = Rect {
            x: area.x + 1,
            y: area.y,
            width: area.width.saturating_sub(2),
            height: 1.min(area.height),
        };

        let message =
            crate::ui::format::clip_to_width(&notification.message, banner.width.saturating_sub(2) as usize);

        frame.render_widget(Clear, banner);
        frame.render_widget(
            Paragraph::new(Span::styled(
                format!(" {} ", message),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            )),
            banner,
        );
    }

    /// Render help overlay
    fn render_help_overlay(&self, frame: &mut Frame, area: Rect) {
        let popup_area = Self::centered_rect(60, 70, area);

        frame.render_widget(Clear, popup_area);

        let help_text = r#"Keyboard Shortcuts

Navigation:
  ← / →             Switch between tabs (circular)
  1 - 4             Jump directly to tab
  ↑ / ↓ or j / k    Select row in list
  ]                 Switch to next server
  m                 Toggle the quick-navigation menu

Containers:
  n:Create  s:Start  x:Stop  R:Restart  e:Shell  l:Logs  d:Delete

Images:
  P:Pull  p:Prune  u:Update tag  Enter:Run  d:Delete

Volumes:
  p:Prune  d:Delete

Global:
  a                 Add a server (edit the config file)
  r                 Refresh current list
  q / Ctrl+C        Quit
  ?                 Toggle this help screen

Press any key to close this help...
"#;

        let help = Paragraph::new(help_text)
            .block(
                Block::default()
                    .title(" Help (Press any key to close) ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Yellow)),
            )
            .style(Style::default().fg(Color::White))
            .wrap(Wrap { trim: false });

        frame.render_widget(help, popup_area);
    }

    /// Calculate centered rectangle for popups
    fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
        let popup_layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Percentage((100 - percent_y) / 2),
                Constraint::Percentage(percent_y),
                Constraint::Percentage((100 - percent_y) / 2),
            ])
            .split(r);

        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage((100 - percent_x) / 2),
                Constraint::Percentage(percent_x),
                Constraint::Percentage((100 - percent_x) / 2),
            ])
            .split(popup_layout[1])[1]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{ContainerState, ContainerSummary};
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::from(code)
    }

    #[test]
    fn test_ui_app_creation() {
        let state = AppState::default();
        let app = UiApp::new(state);
        assert!(!app.should_quit);
    }

    #[test]
    fn test_quit_key() {
        let mut app = UiApp::new(AppState::default());

        let action = app.handle_key_event(press(KeyCode::Char('q')));
        assert!(app.should_quit);
        assert_eq!(action, Some(UiAction::Quit));
    }

    #[test]
    fn test_ctrl_c() {
        let mut app = UiApp::new(AppState::default());

        let action = app.handle_key_event(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit);
        assert_eq!(action, Some(UiAction::Quit));
    }

    #[test]
    fn test_tab_switching_numbers() {
        let mut app = UiApp::new(AppState::default());

        assert_eq!(app.state.current_tab, Tab::Containers);

        app.handle_key_event(press(KeyCode::Char('2')));
        assert_eq!(app.state.current_tab, Tab::Images);

        app.handle_key_event(press(KeyCode::Char('1')));
        assert_eq!(app.state.current_tab, Tab::Containers);
    }

    #[test]
    fn test_tab_switching_arrows_wrap() {
        let mut app = UiApp::new(AppState::default());

        app.handle_key_event(press(KeyCode::Left));
        assert_eq!(app.state.current_tab, Tab::Volumes);

        app.handle_key_event(press(KeyCode::Right));
        assert_eq!(app.state.current_tab, Tab::Containers);
    }

    #[test]
    fn test_refresh_action() {
        let mut app = UiApp::new(AppState::default());
        assert_eq!(
            app.handle_key_event(press(KeyCode::Char('r'))),
            Some(UiAction::Refresh)
        );
    }

    #[test]
    fn test_add_server_action() {
        let mut app = UiApp::new(AppState::default());
        assert_eq!(
            app.handle_key_event(press(KeyCode::Char('a'))),
            Some(UiAction::AddServer)
        );
    }

    #[test]
    fn test_stop_action_for_running_container() {
        let mut state = AppState::default();
        state.containers.loaded(vec![ContainerSummary {
            id: "abc123".to_string(),
            name: "web".to_string(),
            state: ContainerState::Running,
            ..Default::default()
        }]);
        let mut app = UiApp::new(state);

        assert_eq!(
            app.handle_key_event(press(KeyCode::Char('x'))),
            Some(UiAction::Container {
                action: "stop".to_string(),
                id: "abc123".to_string(),
            })
        );
    }

    #[test]
    fn test_prune_key_depends_on_tab() {
        let mut app = UiApp::new(AppState::default());

        app.handle_key_event(press(KeyCode::Char('2')));
        assert_eq!(
            app.handle_key_event(press(KeyCode::Char('p'))),
            Some(UiAction::PruneImages)
        );

        app.handle_key_event(press(KeyCode::Char('4')));
        assert_eq!(
            app.handle_key_event(press(KeyCode::Char('p'))),
            Some(UiAction::PruneVolumes)
        );
    }

    #[test]
    fn test_menu_captures_input() {
        let mut app = UiApp::new(AppState::default());

        app.handle_key_event(press(KeyCode::Char('m')));
        // 'q' while the menu is open must not quit
        let action = app.handle_key_event(press(KeyCode::Char('q')));
        assert!(action.is_none());
        assert!(!app.should_quit);

        app.handle_key_event(press(KeyCode::Esc));
        let action = app.handle_key_event(press(KeyCode::Char('q')));
        assert_eq!(action, Some(UiAction::Quit));
    }

    #[test]
    fn test_menu_selection_switches_tab() {
        let mut app = UiApp::new(AppState::default());

        app.handle_key_event(press(KeyCode::Char('m')));
        app.handle_key_event(press(KeyCode::Char('2')));
        assert_eq!(app.state.current_tab, Tab::Images);
    }

    #[test]
    fn test_help_toggle() {
        let mut app = UiApp::new(AppState::default());

        assert!(!app.state.show_help);

        app.handle_key_event(press(KeyCode::Char('?')));
        assert!(app.state.show_help);

        app.handle_key_event(press(KeyCode::Char('?')));
        assert!(!app.state.show_help);
    }

    #[test]
    fn test_rendering() {
        let backend = TestBackend::new(120, 30);
        let mut terminal = Terminal::new(backend).unwrap();

        let state = AppState::default();
        let app = UiApp::new(state);

        terminal
            .draw(|f| {
                app.draw(f);
            })
            .unwrap();
    }

    #[test]
    fn test_rendering_loading_and_error_states() {
        let backend = TestBackend::new(120, 30);
        let mut terminal = Terminal::new(backend).unwrap();

        let mut state = AppState::default();
        state.containers.begin_load();
        state.images.failed("connection refused");
        let app = UiApp::new(state);

        terminal.draw(|f| app.draw(f)).unwrap();
    }

    #[test]
    fn test_rendering_with_open_menu() {
        let backend = TestBackend::new(120, 30);
        let mut terminal = Terminal::new(backend).unwrap();

        let mut app = UiApp::new(AppState::default());
        app.handle_key_event(press(KeyCode::Char('m')));
        app.on_tick();
        app.on_tick();

        terminal.draw(|f| app.draw(f)).unwrap();
    }
}
