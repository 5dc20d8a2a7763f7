use ratatui::crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::app_state::App;

impl App {
    /// Route one terminal event
    pub fn handle_event(&mut self, event: Event) {
        match event {
            // Check that it's a key press event to avoid duplicates
            Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key(key),
            Event::Mouse(mouse) => {
                self.autocomplete.handle_mouse(mouse);
            }
            Event::FocusGained => self.autocomplete.focus(),
            Event::FocusLost => self.autocomplete.blur(),
            _ => {}
        }
    }

    /// Handle key press events
    ///
    /// The widget sees keys first; Enter and Esc only reach the app while
    /// the dropdown is closed.
    pub fn handle_key(&mut self, key: KeyEvent) {
        // Ctrl+C: Exit application without output
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        if self.autocomplete.handle_key(key) {
            return;
        }

        match key.code {
            // Enter: exit and print the current text
            KeyCode::Enter => {
                let text = self.autocomplete.text();
                if !text.is_empty() {
                    self.output = Some(text.to_string());
                    self.should_quit = true;
                }
            }
            // Esc: exit without output
            KeyCode::Esc => self.should_quit = true,
            _ => {}
        }
    }
}
