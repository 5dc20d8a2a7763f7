//! Tests for App rendering

use ratatui::Terminal;
use ratatui::backend::TestBackend;

use super::App;
use crate::config::Config;
use crate::places::{PlacesResponse, test_channel};
use crate::test_utils::test_helpers::main_street_suggestions;

const TEST_WIDTH: u16 = 80;
const TEST_HEIGHT: u16 = 20;

fn render_app(app: &mut App) -> String {
    let backend = TestBackend::new(TEST_WIDTH, TEST_HEIGHT);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal.draw(|f| app.render(f)).unwrap();
    terminal.backend().to_string()
}

#[test]
fn test_render_loading_state() {
    let mut app = App::new(&Config::default());
    let output = render_app(&mut app);

    assert!(output.contains("placepick"));
    assert!(output.contains("Address"));
    assert!(output.contains("Loading places"));
}

#[test]
fn test_render_unavailable_names_env_var() {
    let mut app = App::new(&Config::default());
    let (handle, worker) = test_channel();
    app.mount(handle);
    worker
        .response_tx
        .send(PlacesResponse::LoadFailed("no key".to_string()))
        .unwrap();
    app.poll_places();

    let output = render_app(&mut app);

    assert!(output.contains("PLACEPICK_GOOGLE_MAPS_API_KEY"));
}

#[test]
fn test_render_dropdown_and_selection_status() {
    let mut app = App::new(&Config::default());
    let (handle, worker) = test_channel();
    app.mount(handle);
    worker.response_tx.send(PlacesResponse::Ready).unwrap();
    app.poll_places();
    app.set_text("123 Main");
    worker
        .response_tx
        .send(PlacesResponse::Predictions {
            request_id: app.autocomplete.state().pending().unwrap(),
            suggestions: main_street_suggestions(),
        })
        .unwrap();
    app.poll_places();

    let output = render_app(&mut app);
    assert!(output.contains("123 Main St"));
    assert!(output.contains("Capital City"));

    app.autocomplete.select(0);
    let output = render_app(&mut app);
    assert!(output.contains("Selected: 123 Main St, Springfield"));
}

#[test]
fn test_status_message_before_selection() {
    let mut app = App::new(&Config::default());
    let (handle, worker) = test_channel();
    app.mount(handle);
    worker.response_tx.send(PlacesResponse::Ready).unwrap();
    app.poll_places();

    let (text, _) = app.status_message();
    assert_eq!(text, "Type an address");
}
