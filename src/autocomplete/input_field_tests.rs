//! Tests for the bundled TextField

use std::cell::RefCell;
use std::rc::Rc;

use super::*;
use crate::test_utils::test_helpers::{key, key_with_mods};

#[test]
fn test_new_field_is_empty() {
    let field = TextField::new(" Address ");
    assert_eq!(field.value(), "");
}

#[test]
fn test_typing_changes_value() {
    let mut field = TextField::new(" Address ");
    assert!(field.input(key(KeyCode::Char('1'))));
    assert!(field.input(key(KeyCode::Char('2'))));
    assert_eq!(field.value(), "12");
}

#[test]
fn test_backspace_on_empty_reports_no_change() {
    let mut field = TextField::new(" Address ");
    assert!(!field.input(key(KeyCode::Backspace)));
}

#[test]
fn test_cursor_movement_reports_no_change() {
    let mut field = TextField::new(" Address ");
    field.set_value("abc");
    assert!(!field.input(key(KeyCode::Left)));
    assert!(!field.input(key(KeyCode::Home)));
    assert_eq!(field.value(), "abc");
}

#[test]
fn test_enter_is_not_inserted() {
    let mut field = TextField::new(" Address ");
    field.set_value("abc");
    assert!(!field.input(key(KeyCode::Enter)));
    assert!(!field.input(key_with_mods(KeyCode::Char('m'), KeyModifiers::CONTROL)));
    assert_eq!(field.value(), "abc");
}

#[test]
fn test_set_value_replaces_text() {
    let mut field = TextField::new(" Address ");
    field.set_value("123 Main");
    field.input(key(KeyCode::Left));
    field.input(key(KeyCode::Left));

    field.set_value("123 Main Ave, Capital City");

    assert_eq!(field.value(), "123 Main Ave, Capital City");
}

#[test]
fn test_set_value_leaves_cursor_at_end() {
    let mut field = TextField::new(" Address ");
    field.set_value("abc");
    field.input(key(KeyCode::Char('d')));
    assert_eq!(field.value(), "abcd");
}

#[test]
fn test_changed_invokes_callback_with_key() {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    let mut field =
        TextField::new(" Address ").with_on_change(move |key| sink.borrow_mut().push(key.code));

    field.changed(&key(KeyCode::Char('x')));

    assert_eq!(*seen.borrow(), vec![KeyCode::Char('x')]);
}

#[test]
fn test_changed_without_callback_is_noop() {
    let mut field = TextField::new(" Address ");
    field.changed(&key(KeyCode::Char('x')));
}
