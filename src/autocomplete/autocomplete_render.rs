//! Dropdown rendering
//!
//! Draws the suggestion panel beneath the input field. Each suggestion takes
//! two lines: marker and primary label, then the secondary label.

use ratatui::{
    Frame,
    layout::{Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use super::autocomplete_state::AutocompleteState;
use crate::widgets::popup;

/// Lines per suggestion row
pub const ROW_HEIGHT: u16 = 2;

const POPUP_BORDER_HEIGHT: u16 = 2;
const POPUP_BORDER_WIDTH: u16 = 2;
const LOCATION_MARKER: &str = "◉ ";
const SECONDARY_INDENT: &str = "  ";

/// Where the dropdown was drawn, for mouse hit testing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DropdownLayout {
    pub area: Rect,
    /// Index of the suggestion in the first visible row
    pub first_row: usize,
    /// Number of suggestion rows that fit
    pub row_count: usize,
}

impl DropdownLayout {
    /// Suggestion index under a screen position, if any
    pub fn row_at(&self, column: u16, row: u16) -> Option<usize> {
        let inner = popup::inset_rect(self.area, 1, 1);
        if !inner.contains(Position::new(column, row)) {
            return None;
        }
        let offset = ((row - inner.y) / ROW_HEIGHT) as usize;
        (offset < self.row_count).then_some(self.first_row + offset)
    }
}

/// Render the dropdown beneath `anchor`
///
/// Returns None when nothing was drawn (hidden, empty, or no room).
pub fn render_dropdown(
    state: &AutocompleteState,
    frame: &mut Frame,
    anchor: Rect,
    max_visible: usize,
) -> Option<DropdownLayout> {
    if !state.is_visible() {
        return None;
    }

    let suggestions = state.suggestions();
    let wanted_rows = suggestions.len().min(max_visible.max(1));
    let popup_height = (wanted_rows as u16) * ROW_HEIGHT + POPUP_BORDER_HEIGHT;
    let area = popup::popup_below_anchor(anchor, frame.area(), anchor.width, popup_height);

    let row_count = (area.height.saturating_sub(POPUP_BORDER_HEIGHT) / ROW_HEIGHT) as usize;
    if row_count == 0 || area.width <= POPUP_BORDER_WIDTH {
        return None;
    }

    // Scroll so the highlighted row stays in view
    let first_row = state.selected_index().saturating_sub(row_count - 1);
    let text_width = area.width.saturating_sub(POPUP_BORDER_WIDTH) as usize;
    let label_width = text_width.saturating_sub(LOCATION_MARKER.width());

    let items: Vec<ListItem> = suggestions
        .iter()
        .enumerate()
        .skip(first_row)
        .take(row_count)
        .map(|(i, suggestion)| {
            let main = pad_to_width(&truncate_to_width(&suggestion.main_text, label_width), label_width);
            let secondary = pad_to_width(
                &truncate_to_width(&suggestion.secondary_text, label_width),
                label_width,
            );

            let (marker_style, main_style, secondary_style) = if i == state.selected_index() {
                let highlight = Style::default().fg(Color::Black).bg(Color::Cyan);
                (
                    highlight,
                    highlight.add_modifier(Modifier::BOLD),
                    highlight,
                )
            } else {
                (
                    Style::default().fg(Color::Red).bg(Color::Black),
                    Style::default()
                        .fg(Color::White)
                        .bg(Color::Black)
                        .add_modifier(Modifier::BOLD),
                    Style::default().fg(Color::DarkGray).bg(Color::Black),
                )
            };

            ListItem::new(vec![
                Line::from(vec![
                    Span::styled(LOCATION_MARKER, marker_style),
                    Span::styled(main, main_style),
                ]),
                Line::from(vec![
                    Span::styled(SECONDARY_INDENT, marker_style),
                    Span::styled(secondary, secondary_style),
                ]),
            ])
        })
        .collect();

    // Clear the background area to prevent transparency
    popup::clear_area(frame, area);

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .style(Style::default().bg(Color::Black)),
    );

    frame.render_widget(list, area);

    Some(DropdownLayout {
        area,
        first_row,
        row_count,
    })
}

/// Cut `text` to `max_width` display columns, ending in an ellipsis if cut
fn truncate_to_width(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let mut truncated = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let ch_width = ch.width().unwrap_or(0);
        if used + ch_width > max_width - 1 {
            break;
        }
        truncated.push(ch);
        used += ch_width;
    }
    truncated.push('…');
    truncated
}

fn pad_to_width(text: &str, width: usize) -> String {
    let padding = width.saturating_sub(text.width());
    format!("{}{}", text, " ".repeat(padding))
}

#[cfg(test)]
#[path = "autocomplete_render_tests.rs"]
mod autocomplete_render_tests;
