//! Autocomplete widget
//!
//! Wraps one caller-supplied input field, forwards its text to the places
//! worker and renders the returned suggestions beneath it.

use ratatui::{
    Frame,
    crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind},
    layout::{Position, Rect},
};

use super::autocomplete_render::{self, DropdownLayout};
use super::autocomplete_state::AutocompleteState;
use super::input_field::InputField;
use crate::config::UiConfig;
use crate::places::{PlacesHandle, PlacesRequest, PlacesResponse};

type SelectCallback = Box<dyn FnMut(&str)>;

pub struct Autocomplete<F: InputField> {
    field: F,
    state: AutocompleteState,
    places: Option<PlacesHandle>,
    on_select: Option<SelectCallback>,
    focused: bool,
    max_visible: usize,
    input_area: Option<Rect>,
    dropdown: Option<DropdownLayout>,
}

impl<F: InputField> Autocomplete<F> {
    /// Wrap `field`; the widget stays inert until a provider is mounted
    pub fn new(field: F, config: &UiConfig) -> Self {
        let mut state = AutocompleteState::new();
        state.update_text(field.value());

        Self {
            field,
            state,
            places: None,
            on_select: None,
            focused: true,
            max_visible: config.max_visible.max(1),
            input_area: None,
            dropdown: None,
        }
    }

    /// Call `callback` with the description of every selected suggestion
    pub fn with_on_select(mut self, callback: impl FnMut(&str) + 'static) -> Self {
        self.on_select = Some(Box::new(callback));
        self
    }

    /// Attach the handle of a worker that is loading the provider
    ///
    /// Replacing a mounted handle drops the old one, which shuts its worker
    /// down.
    pub fn mount(&mut self, handle: PlacesHandle) {
        self.places = Some(handle);
    }

    pub fn field(&self) -> &F {
        &self.field
    }

    pub fn state(&self) -> &AutocompleteState {
        &self.state
    }

    pub fn text(&self) -> &str {
        self.state.text()
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn is_dropdown_visible(&self) -> bool {
        self.state.is_visible()
    }

    /// Drain worker responses; returns true if anything changed
    pub fn poll(&mut self) -> bool {
        if self.places.is_none() {
            return false;
        }

        let mut changed = false;
        while let Some(response) = self.places.as_ref().and_then(PlacesHandle::try_recv) {
            changed |= match response {
                PlacesResponse::Ready => {
                    let ready = self.state.mark_ready();
                    // Text entered during the load gets its first query now
                    if ready && !self.state.text().is_empty() {
                        self.text_changed();
                    }
                    ready
                }
                PlacesResponse::LoadFailed(error) => {
                    log::warn!("Places unavailable: {}", error);
                    self.state.mark_unavailable();
                    true
                }
                PlacesResponse::Predictions {
                    request_id,
                    suggestions,
                } => self.state.apply_predictions(request_id, Ok(suggestions)),
                PlacesResponse::PredictionsFailed { request_id, error } => {
                    self.state.apply_predictions(request_id, Err(error))
                }
            };
        }
        changed
    }

    /// Handle a key press
    ///
    /// Returns false for keys the widget leaves to its host: Enter and Esc
    /// while the dropdown is closed, and keys the field ignores.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if self.state.is_visible() && self.handle_dropdown_key(key) {
            return true;
        }

        if !self.field.input(key) {
            return false;
        }

        self.text_changed();
        self.field.changed(&key);
        true
    }

    fn handle_dropdown_key(&mut self, key: KeyEvent) -> bool {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Down => self.state.select_next(),
            KeyCode::Char('n') if ctrl => self.state.select_next(),
            KeyCode::Up => self.state.select_previous(),
            KeyCode::Char('p') if ctrl => self.state.select_previous(),
            KeyCode::Enter | KeyCode::Tab => {
                let index = self.state.selected_index();
                self.select(index);
            }
            KeyCode::Esc => self.state.dismiss(),
            _ => return false,
        }
        true
    }

    /// Handle a mouse event
    ///
    /// Pressing a dropdown row selects it without moving focus off the
    /// input. Pressing the input focuses it; pressing elsewhere blurs it.
    pub fn handle_mouse(&mut self, mouse: MouseEvent) -> bool {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return false;
        }

        if let Some(index) = self
            .dropdown
            .and_then(|layout| layout.row_at(mouse.column, mouse.row))
        {
            return self.select(index);
        }

        let on_input = self
            .input_area
            .is_some_and(|area| area.contains(Position::new(mouse.column, mouse.row)));
        if on_input {
            self.focus();
        } else {
            self.blur();
        }
        true
    }

    /// Input gained focus: re-show held suggestions without a new query
    pub fn focus(&mut self) {
        self.focused = true;
        self.state.focus();
    }

    pub fn blur(&mut self) {
        self.focused = false;
    }

    /// Replace the text programmatically, as if the user had typed it
    ///
    /// The field's change hook is not called; there is no key to pass.
    pub fn set_text(&mut self, text: &str) {
        self.field.set_value(text);
        self.text_changed();
    }

    /// Select the suggestion at `index`
    ///
    /// Writes its description into the field, hides the dropdown, calls the
    /// select callback and fires a detail lookup whose result is not used.
    pub fn select(&mut self, index: usize) -> bool {
        let Some(suggestion) = self.state.select(index) else {
            return false;
        };

        self.field.set_value(&suggestion.description);

        if let Some(callback) = self.on_select.as_mut() {
            callback(&suggestion.description);
        }

        self.send(PlacesRequest::Details {
            place_id: suggestion.place_id,
        });
        true
    }

    /// Draw the field in `area` and the dropdown beneath it
    pub fn render(&mut self, frame: &mut Frame, area: Rect) {
        self.field.render(frame, area, self.focused);
        self.input_area = Some(area);
        self.dropdown = autocomplete_render::render_dropdown(&self.state, frame, area, self.max_visible);
    }

    fn text_changed(&mut self) {
        let value = self.field.value().to_string();
        if let Some(request_id) = self.state.update_text(&value)
            && !self.send(PlacesRequest::Predictions {
                input: value,
                request_id,
            })
        {
            self.state
                .apply_predictions(request_id, Err("places worker unavailable".to_string()));
        }
    }

    fn send(&self, request: PlacesRequest) -> bool {
        match &self.places {
            Some(handle) => {
                let sent = handle.send(request);
                if !sent {
                    log::debug!("Places worker is gone, request dropped");
                }
                sent
            }
            None => false,
        }
    }
}

#[cfg(test)]
#[path = "autocomplete_widget_tests.rs"]
mod autocomplete_widget_tests;
