use ratatui::{Frame, layout::Rect, widgets::Clear};

/// Place a popup directly beneath `anchor`, clamped to `bounds`
///
/// The popup keeps the anchor's horizontal position and shrinks to the
/// space left below it.
pub fn popup_below_anchor(anchor: Rect, bounds: Rect, width: u16, height: u16) -> Rect {
    let popup_x = anchor.x.max(bounds.x);
    let popup_y = anchor.bottom().min(bounds.bottom());

    let available_width = bounds.right().saturating_sub(popup_x);
    let available_height = bounds.bottom().saturating_sub(popup_y);

    Rect {
        x: popup_x,
        y: popup_y,
        width: width.min(available_width),
        height: height.min(available_height),
    }
}

pub fn inset_rect(area: Rect, horizontal_margin: u16, vertical_margin: u16) -> Rect {
    Rect {
        x: area.x + horizontal_margin,
        y: area.y + vertical_margin,
        width: area.width.saturating_sub(horizontal_margin * 2),
        height: area.height.saturating_sub(vertical_margin * 2),
    }
}

pub fn clear_area(frame: &mut Frame, area: Rect) {
    frame.render_widget(Clear, area);
}

#[cfg(test)]
#[path = "popup_tests.rs"]
mod popup_tests;
