//! The input field wrapped by the autocomplete widget
//!
//! The widget does not draw its own text box. The caller supplies exactly
//! one field and keeps control of its look; the widget drives its value and
//! reacts to its edits through this trait.

use ratatui::{
    Frame,
    crossterm::event::{KeyCode, KeyEvent, KeyModifiers},
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders},
};
use tui_textarea::{CursorMove, TextArea};

/// A single-line text input that the autocomplete widget can drive
pub trait InputField {
    /// Current text of the field
    fn value(&self) -> &str;

    /// Replace the text, leaving the cursor at the end
    fn set_value(&mut self, value: &str);

    /// Apply a key press; returns true if the text changed
    fn input(&mut self, key: KeyEvent) -> bool;

    fn render(&mut self, frame: &mut Frame, area: Rect, focused: bool);

    /// Called after the widget processed a text change, with the original key
    fn changed(&mut self, _key: &KeyEvent) {}
}

type ChangeCallback = Box<dyn FnMut(&KeyEvent)>;

/// Bundled `InputField` on top of `tui-textarea`
pub struct TextField {
    textarea: TextArea<'static>,
    title: String,
    on_change: Option<ChangeCallback>,
}

impl TextField {
    pub fn new(title: impl Into<String>) -> Self {
        let mut textarea = TextArea::default();

        // Remove default underline from cursor line
        textarea.set_cursor_line_style(Style::default());

        let mut field = Self {
            textarea,
            title: title.into(),
            on_change: None,
        };
        field.apply_block(false);
        field
    }

    /// Run `callback` after every change the widget has processed
    pub fn with_on_change(mut self, callback: impl FnMut(&KeyEvent) + 'static) -> Self {
        self.on_change = Some(Box::new(callback));
        self
    }

    fn apply_block(&mut self, focused: bool) {
        let border_color = if focused {
            Color::Cyan
        } else {
            Color::DarkGray
        };

        self.textarea.set_block(
            Block::default()
                .borders(Borders::ALL)
                .title(self.title.clone())
                .border_style(Style::default().fg(border_color)),
        );
    }
}

/// Keys a single-line field must not hand to the textarea
fn is_multiline_key(key: &KeyEvent) -> bool {
    match key.code {
        KeyCode::Enter | KeyCode::Tab | KeyCode::BackTab | KeyCode::Esc => true,
        KeyCode::Char('m') | KeyCode::Char('j') => key.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}

impl InputField for TextField {
    fn value(&self) -> &str {
        self.textarea.lines().first().map(String::as_str).unwrap_or("")
    }

    fn set_value(&mut self, value: &str) {
        self.textarea.move_cursor(CursorMove::End);
        self.textarea.delete_line_by_head();
        self.textarea.insert_str(value);
    }

    fn input(&mut self, key: KeyEvent) -> bool {
        if is_multiline_key(&key) {
            return false;
        }
        let before = self.value().to_string();
        self.textarea.input(key);
        self.value() != before
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, focused: bool) {
        self.apply_block(focused);
        frame.render_widget(&self.textarea, area);
    }

    fn changed(&mut self, key: &KeyEvent) {
        if let Some(callback) = self.on_change.as_mut() {
            callback(key);
        }
    }
}

#[cfg(test)]
#[path = "input_field_tests.rs"]
mod input_field_tests;
