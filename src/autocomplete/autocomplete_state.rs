use crate::places::Suggestion;

/// Whether the places provider can take queries yet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProviderStatus {
    /// Still loading; keystrokes only update the text
    #[default]
    Loading,
    Ready,
    /// Load failed; the widget stays inert for good
    Unavailable,
}

/// Session state of the autocomplete widget
///
/// Every text change and every selection bumps `generation`. A query is
/// tagged with the generation that issued it, and only a response for the
/// currently pending generation is applied, so late answers to older
/// queries can never overwrite fresher state.
#[derive(Debug, Clone, Default)]
pub struct AutocompleteState {
    text: String,
    suggestions: Vec<Suggestion>,
    visible: bool,
    selected_index: usize,
    generation: u64,
    pending: Option<u64>,
    status: ProviderStatus,
}

impl AutocompleteState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn suggestions(&self) -> &[Suggestion] {
        &self.suggestions
    }

    /// Whether the dropdown should be drawn
    pub fn is_visible(&self) -> bool {
        self.visible && !self.suggestions.is_empty()
    }

    pub fn selected_index(&self) -> usize {
        self.selected_index
    }

    pub fn selected(&self) -> Option<&Suggestion> {
        self.suggestions.get(self.selected_index)
    }

    pub fn status(&self) -> ProviderStatus {
        self.status
    }

    /// Generation of the query still awaiting an answer, if any
    pub fn pending(&self) -> Option<u64> {
        self.pending
    }

    /// Mark the provider ready; returns false if it already was or has failed
    pub fn mark_ready(&mut self) -> bool {
        if self.status != ProviderStatus::Loading {
            return false;
        }
        self.status = ProviderStatus::Ready;
        true
    }

    pub fn mark_unavailable(&mut self) {
        self.status = ProviderStatus::Unavailable;
        self.pending = None;
    }

    /// Record a new input value
    ///
    /// Returns the request id to query with when the text is non-empty and
    /// the provider is ready. Otherwise clears the suggestions.
    pub fn update_text(&mut self, value: &str) -> Option<u64> {
        self.text = value.to_string();
        self.generation = self.generation.wrapping_add(1);

        if !self.text.is_empty() && self.status == ProviderStatus::Ready {
            self.pending = Some(self.generation);
            Some(self.generation)
        } else {
            self.pending = None;
            self.clear();
            None
        }
    }

    /// Apply a provider answer
    ///
    /// Ignored (returns false) unless `request_id` is the pending one.
    /// Errors and empty lists clear the dropdown.
    pub fn apply_predictions(
        &mut self,
        request_id: u64,
        result: Result<Vec<Suggestion>, String>,
    ) -> bool {
        if self.pending != Some(request_id) {
            log::debug!(
                "Discarding stale response {} (pending: {:?})",
                request_id,
                self.pending
            );
            return false;
        }
        self.pending = None;

        match result {
            Ok(suggestions) if !suggestions.is_empty() => {
                self.suggestions = suggestions;
                self.selected_index = 0;
                self.visible = true;
            }
            Ok(_) => self.clear(),
            Err(e) => {
                log::debug!("Clearing suggestions after failed query: {}", e);
                self.clear();
            }
        }
        true
    }

    /// Re-show the held suggestions, if there is text to complete
    pub fn focus(&mut self) {
        if !self.text.is_empty() && !self.suggestions.is_empty() {
            self.visible = true;
        }
    }

    /// Hide the dropdown without touching text or suggestions
    pub fn dismiss(&mut self) {
        self.visible = false;
    }

    /// Select the suggestion at `index`
    ///
    /// Writes its description into the text, hides the dropdown and drops
    /// any pending query. The held suggestions stay for a later `focus`.
    pub fn select(&mut self, index: usize) -> Option<Suggestion> {
        let suggestion = self.suggestions.get(index)?.clone();

        self.text = suggestion.description.clone();
        self.selected_index = index;
        self.visible = false;
        self.generation = self.generation.wrapping_add(1);
        self.pending = None;

        Some(suggestion)
    }

    /// Move highlight down, wrapping to the top
    pub fn select_next(&mut self) {
        if !self.suggestions.is_empty() {
            self.selected_index = (self.selected_index + 1) % self.suggestions.len();
        }
    }

    /// Move highlight up, wrapping to the bottom
    pub fn select_previous(&mut self) {
        if !self.suggestions.is_empty() {
            self.selected_index = if self.selected_index == 0 {
                self.suggestions.len() - 1
            } else {
                self.selected_index - 1
            };
        }
    }

    fn clear(&mut self) {
        self.suggestions.clear();
        self.selected_index = 0;
        self.visible = false;
    }
}

#[cfg(test)]
#[path = "autocomplete_state_tests.rs"]
mod autocomplete_state_tests;
