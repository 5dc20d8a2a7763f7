//! Tests for widgets/popup

use super::*;

fn rect(x: u16, y: u16, width: u16, height: u16) -> Rect {
    Rect {
        x,
        y,
        width,
        height,
    }
}

#[test]
fn test_popup_below_anchor_basic() {
    let anchor = rect(2, 1, 60, 3);
    let bounds = rect(0, 0, 80, 24);

    let popup = popup_below_anchor(anchor, bounds, 60, 10);

    assert_eq!(popup.x, 2);
    assert_eq!(popup.y, 4);
    assert_eq!(popup.width, 60);
    assert_eq!(popup.height, 10);
}

#[test]
fn test_popup_below_anchor_clamps_height() {
    let anchor = rect(0, 15, 80, 3);
    let bounds = rect(0, 0, 80, 24);

    let popup = popup_below_anchor(anchor, bounds, 80, 20);

    assert_eq!(popup.y, 18);
    assert_eq!(popup.height, 6);
}

#[test]
fn test_popup_below_anchor_clamps_width() {
    let anchor = rect(70, 0, 30, 3);
    let bounds = rect(0, 0, 80, 24);

    let popup = popup_below_anchor(anchor, bounds, 30, 5);

    assert_eq!(popup.width, 10);
}

#[test]
fn test_popup_below_anchor_at_bottom_has_no_height() {
    let anchor = rect(0, 21, 80, 3);
    let bounds = rect(0, 0, 80, 24);

    let popup = popup_below_anchor(anchor, bounds, 80, 5);

    assert_eq!(popup.height, 0);
}

#[test]
fn test_inset_rect() {
    let inner = inset_rect(rect(10, 5, 40, 12), 1, 1);
    assert_eq!(inner, rect(11, 6, 38, 10));
}

#[test]
fn test_inset_rect_saturates() {
    let inner = inset_rect(rect(0, 0, 1, 1), 2, 2);
    assert_eq!(inner.width, 0);
    assert_eq!(inner.height, 0);
}
