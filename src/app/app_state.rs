use std::cell::RefCell;
use std::rc::Rc;

use crate::autocomplete::{Autocomplete, ProviderStatus, TextField};
use crate::config::Config;
use crate::places::PlacesHandle;

/// Application state
pub struct App {
    pub autocomplete: Autocomplete<TextField>,
    /// Description most recently reported by the widget's select callback
    pub(super) last_selection: Rc<RefCell<Option<String>>>,
    pub(super) api_key_env: String,
    pub(super) output: Option<String>,
    pub(super) should_quit: bool,
}

impl App {
    /// Create a new App; no provider is mounted yet
    pub fn new(config: &Config) -> Self {
        let last_selection = Rc::new(RefCell::new(None));
        let sink = Rc::clone(&last_selection);

        let field = TextField::new(config.ui.title.clone());
        let autocomplete = Autocomplete::new(field, &config.ui).with_on_select(move |description| {
            log::debug!("Selected {:?}", description);
            *sink.borrow_mut() = Some(description.to_string());
        });

        Self {
            autocomplete,
            last_selection,
            api_key_env: config.places.api_key_env.clone(),
            output: None,
            should_quit: false,
        }
    }

    pub fn mount(&mut self, handle: PlacesHandle) {
        self.autocomplete.mount(handle);
    }

    /// Apply pending worker responses; returns true if a redraw is due
    pub fn poll_places(&mut self) -> bool {
        self.autocomplete.poll()
    }

    pub fn set_text(&mut self, text: &str) {
        self.autocomplete.set_text(text);
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Text to print on exit, if the user confirmed one
    pub fn output(&self) -> Option<&str> {
        self.output.as_deref()
    }

    pub fn last_selection(&self) -> Option<String> {
        self.last_selection.borrow().clone()
    }

    pub fn provider_status(&self) -> ProviderStatus {
        self.autocomplete.state().status()
    }
}
