//! Card grid listing the filtered users.
//!
//! The grid is laid out row-major: card `i` sits at row `i / columns`,
//! column `i % columns`. Rows scroll so the selected card stays on screen.

use super::constants::{CARD_HEIGHT, CARD_MIN_WIDTH, MAX_CARD_COLUMNS};
use super::helpers::{key_value_line, truncate_to_width};
use super::styles::Palette;
use crate::model::{format_date_of_birth, User};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Shown when no user matches the search term.
pub const EMPTY_MESSAGE: &str = "No users found matching your search criteria.";

/// Number of card columns for a grid `width` cells wide (1 to 4).
pub fn grid_columns(width: u16) -> u16 {
    (width / CARD_MIN_WIDTH).clamp(1, MAX_CARD_COLUMNS)
}

/// First grid row to draw so that `selected_row` is visible.
pub fn first_visible_row(selected_row: usize, visible_rows: usize) -> usize {
    let visible_rows = visible_rows.max(1);
    selected_row.saturating_sub(visible_rows - 1)
}

/// User cards widget.
pub struct UserGrid<'a> {
    users: &'a [&'a User],
    selected: Option<usize>,
    palette: &'a Palette,
}

impl<'a> UserGrid<'a> {
    /// Grid over `users` with the card at `selected` highlighted.
    pub fn new(users: &'a [&'a User], selected: Option<usize>, palette: &'a Palette) -> Self {
        Self {
            users,
            selected,
            palette,
        }
    }
}

impl Widget for UserGrid<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        if self.users.is_empty() {
            let message_area = Rect {
                y: area.y + area.height / 2,
                height: 1,
                ..area
            };
            Paragraph::new(Span::styled(EMPTY_MESSAGE, self.palette.muted_text()))
                .alignment(Alignment::Center)
                .render(message_area, buf);
            return;
        }

        let columns = usize::from(grid_columns(area.width));
        let visible_rows = usize::from((area.height / CARD_HEIGHT).max(1));
        let selected_row = self.selected.unwrap_or(0) / columns;
        let top_row = first_visible_row(selected_row, visible_rows);

        let row_areas = Layout::vertical(vec![Constraint::Length(CARD_HEIGHT); visible_rows])
            .split(area);

        for (row_offset, row_area) in row_areas.iter().enumerate() {
            let start = (top_row + row_offset) * columns;
            if start >= self.users.len() {
                break;
            }
            let cells = Layout::horizontal(vec![Constraint::Ratio(1, columns as u32); columns])
                .split(*row_area);
            for (column, cell) in cells.iter().enumerate() {
                let index = start + column;
                let Some(user) = self.users.get(index) else {
                    break;
                };
                UserCard {
                    user,
                    selected: self.selected == Some(index),
                    palette: self.palette,
                }
                .render(*cell, buf);
            }
        }
    }
}

/// One card: initials badge and name, then email, status, date of birth.
struct UserCard<'a> {
    user: &'a User,
    selected: bool,
    palette: &'a Palette,
}

impl Widget for UserCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let palette = self.palette;
        let label = palette.muted_text();
        let border = if self.selected {
            palette.focused_border()
        } else {
            palette.border()
        };

        // Inner width minus the badge and the "Email: " label
        let inner = usize::from(area.width.saturating_sub(2));
        let name = truncate_to_width(self.user.name(), inner.saturating_sub(5));
        let email = truncate_to_width(self.user.email(), inner.saturating_sub(7));

        let lines = vec![
            Line::from(vec![
                Span::styled(format!(" {:<2} ", self.user.initials()), palette.accent_bar()),
                Span::raw(" "),
                Span::styled(name, palette.heading()),
            ]),
            key_value_line("Email", email, label, palette.panel()),
            Line::from(vec![
                Span::styled("Status: ", label),
                Span::styled(
                    self.user.status().as_str(),
                    palette.status(self.user.status()),
                ),
            ]),
            key_value_line(
                "Date of Birth",
                format_date_of_birth(self.user.date_of_birth()),
                label,
                palette.panel(),
            ),
        ];

        let mut block = Block::default()
            .borders(Borders::ALL)
            .border_style(border)
            .style(palette.panel());
        if self.selected {
            block = block.title(Span::styled(" e:edit d:delete ", palette.muted_text()));
        }

        Paragraph::new(lines).block(block).render(area, buf);
    }
}
