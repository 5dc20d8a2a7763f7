#[cfg(test)]
pub mod test_helpers {
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex};
    use std::time::{Duration, Instant};

    use ratatui::crossterm::event::{
        KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
    };

    use crate::places::{PlaceDetail, PlacesError, PlacesProvider, Suggestion};

    pub fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    pub fn key_with_mods(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    pub fn click(column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    pub fn suggestion(place_id: &str, main: &str, secondary: &str) -> Suggestion {
        Suggestion::new(place_id, main, secondary, format!("{}, {}", main, secondary))
    }

    /// The two results of the "123 Main" scenario
    pub fn main_street_suggestions() -> Vec<Suggestion> {
        vec![
            Suggestion::new(
                "place-st",
                "123 Main St",
                "Springfield",
                "123 Main St, Springfield",
            ),
            Suggestion::new(
                "place-ave",
                "123 Main Ave",
                "Capital City",
                "123 Main Ave, Capital City",
            ),
        ]
    }

    /// In-memory provider with scripted answers per query text
    #[derive(Debug, Clone, Default)]
    pub struct FakeProvider {
        answers: HashMap<String, Result<Vec<Suggestion>, String>>,
        delays: HashMap<String, Duration>,
        pub queries: Arc<Mutex<Vec<String>>>,
        pub detail_lookups: Arc<Mutex<Vec<String>>>,
    }

    impl FakeProvider {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn answer(mut self, input: &str, suggestions: Vec<Suggestion>) -> Self {
            self.answers.insert(input.to_string(), Ok(suggestions));
            self
        }

        pub fn fail(mut self, input: &str, error: &str) -> Self {
            self.answers.insert(input.to_string(), Err(error.to_string()));
            self
        }

        pub fn delay(mut self, input: &str, delay: Duration) -> Self {
            self.delays.insert(input.to_string(), delay);
            self
        }
    }

    impl PlacesProvider for FakeProvider {
        async fn predictions(&self, input: &str) -> Result<Vec<Suggestion>, PlacesError> {
            self.queries.lock().unwrap().push(input.to_string());
            if let Some(delay) = self.delays.get(input) {
                tokio::time::sleep(*delay).await;
            }
            match self.answers.get(input) {
                Some(Ok(suggestions)) => Ok(suggestions.clone()),
                Some(Err(message)) => Err(PlacesError::Network(message.clone())),
                None => Ok(Vec::new()),
            }
        }

        async fn details(&self, place_id: &str) -> Result<PlaceDetail, PlacesError> {
            self.detail_lookups.lock().unwrap().push(place_id.to_string());
            Ok(PlaceDetail {
                place_id: place_id.to_string(),
                name: place_id.to_string(),
                formatted_address: String::new(),
                location: None,
            })
        }
    }

    /// Poll `condition` every 10ms until it holds or `timeout_ms` elapses
    pub fn wait_until(timeout_ms: u64, mut condition: impl FnMut() -> bool) -> bool {
        let start = Instant::now();
        let timeout = Duration::from_millis(timeout_ms);

        while start.elapsed() < timeout {
            if condition() {
                return true;
            }
            std::thread::sleep(Duration::from_millis(10));
        }

        condition()
    }
}
