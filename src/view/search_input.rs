//! Search input widget for rendering the search bar.

use super::helpers::split_at_cursor;
use super::styles::Palette;
use crate::state::SearchState;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Hint shown while the search bar is empty and unfocused.
pub const SEARCH_PLACEHOLDER: &str = "Search users...";

/// Search input widget.
/// The bar is always visible; it takes focus styling while typing.
pub struct SearchInput<'a> {
    search_state: &'a SearchState,
    palette: &'a Palette,
}

impl<'a> SearchInput<'a> {
    /// Create new SearchInput widget.
    pub fn new(search_state: &'a SearchState, palette: &'a Palette) -> Self {
        Self {
            search_state,
            palette,
        }
    }
}

impl Widget for SearchInput<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let palette = self.palette;
        let (line, title, border) = match self.search_state {
            SearchState::Typing { query, cursor } => {
                let (before, at, after) = split_at_cursor(query, *cursor);
                let line = Line::from(vec![
                    Span::raw(before),
                    Span::styled(
                        at,
                        palette.panel().add_modifier(Modifier::REVERSED | Modifier::BOLD),
                    ),
                    Span::raw(after),
                ]);
                (line, " Search ", palette.focused_border())
            }
            SearchState::Active { query } => (
                Line::from(query.as_str().to_string()),
                " Search (active) ",
                palette.border(),
            ),
            SearchState::Inactive => (
                Line::from(Span::styled(SEARCH_PLACEHOLDER, palette.muted_text())),
                " Search ",
                palette.border(),
            ),
        };

        Paragraph::new(line)
            .style(palette.panel())
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(title)
                    .border_style(border),
            )
            .render(area, buf);
    }
}
