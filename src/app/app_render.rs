use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::app_state::App;
use crate::autocomplete::ProviderStatus;

const HELP_TEXT: &str = "↑↓ navigate  Enter select/confirm  Esc close/quit  Ctrl+C quit";

impl App {
    /// Render the UI
    pub fn render(&mut self, frame: &mut Frame) {
        let layout = Layout::vertical([
            Constraint::Length(1), // Header
            Constraint::Length(3), // Input field
            Constraint::Min(0),    // Dropdown space
            Constraint::Length(1), // Status line
        ])
        .split(frame.area());

        self.render_header(frame, layout[0]);
        self.render_status(frame, layout[3]);

        // Last, so the dropdown draws over the space beneath the input
        self.autocomplete.render(frame, layout[1]);
    }

    fn render_header(&self, frame: &mut Frame, area: Rect) {
        let header = Line::from(vec![
            Span::styled(
                " placepick ",
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(format!(" {}", HELP_TEXT), Style::default().fg(Color::DarkGray)),
        ]);
        frame.render_widget(Paragraph::new(header), area);
    }

    fn render_status(&self, frame: &mut Frame, area: Rect) {
        let (text, color) = self.status_message();
        frame.render_widget(
            Paragraph::new(text).style(Style::default().fg(color)),
            area,
        );
    }

    /// Status line text and color
    pub(super) fn status_message(&self) -> (String, Color) {
        match self.provider_status() {
            ProviderStatus::Loading => ("Loading places…".to_string(), Color::Yellow),
            ProviderStatus::Unavailable => (
                format!("Places unavailable: set ${} to enable suggestions", self.api_key_env),
                Color::Red,
            ),
            ProviderStatus::Ready => match self.last_selection() {
                Some(selection) => (format!("Selected: {}", selection), Color::Green),
                None => ("Type an address".to_string(), Color::DarkGray),
            },
        }
    }
}
