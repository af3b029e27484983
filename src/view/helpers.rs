//! Small rendering helpers shared by widgets.

use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// A blank line.
pub fn empty_line() -> Line<'static> {
    Line::from("")
}

/// `"Label: value"` with separately styled halves.
pub fn key_value_line(
    label: &str,
    value: impl Into<String>,
    label_style: Style,
    value_style: Style,
) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{}: ", label), label_style),
        Span::styled(value.into(), value_style),
    ])
}

/// Rect of `width` x `height` centered in `area`, clipped to it.
pub fn centered_fixed(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// Rect covering the given percentages of `area`, centered.
pub fn centered_percent(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let width = area.width * percent_x / 100;
    let height = area.height * percent_y / 100;
    centered_fixed(width, height, area)
}

/// Split `text` at char index `cursor` into (before, at-cursor, after).
///
/// At the end of the text the cursor cell is a space.
pub fn split_at_cursor(text: &str, cursor: usize) -> (String, String, String) {
    let before: String = text.chars().take(cursor).collect();
    let mut rest = text.chars().skip(cursor);
    let at = rest.next().map_or_else(|| " ".to_string(), |c| c.to_string());
    let after: String = rest.collect();
    (before, at, after)
}

/// First char index to draw so that the cursor cell fits in `width`
/// terminal cells.
///
/// Returns 0 while everything up to the cursor fits, otherwise scrolls so
/// the cursor sits at the right edge.
pub fn scroll_start(text: &str, cursor: usize, width: usize) -> usize {
    let widths: Vec<usize> = text.chars().map(|c| c.width().unwrap_or(0)).collect();
    let cursor = cursor.min(widths.len());
    let mut used = widths.get(cursor).copied().unwrap_or(1).max(1);
    let mut start = cursor;
    while start > 0 && used + widths[start - 1] <= width {
        start -= 1;
        used += widths[start];
    }
    start
}

/// Shorten `text` to at most `max_width` terminal cells, ending in `…`
/// when anything was cut.
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let budget = max_width - 1;
    let mut used = 0;
    let mut out = String::new();
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(ch);
    }
    out.push('…');
    out
}
