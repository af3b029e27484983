//! Help overlay widget displaying keyboard shortcuts.
//!
//! Shows a centered modal overlay with all keyboard shortcuts grouped by category.
//! Triggered by '?' key, dismissed by 'Esc' or '?'.

use super::constants::{HELP_POPUP_HEIGHT_PERCENT, HELP_POPUP_WIDTH_PERCENT};
use super::helpers::{centered_percent, empty_line};
use super::styles::Palette;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Shortcut table: category, then (keys, description) rows.
const SHORTCUTS: &[(&str, &[(&str, &str)])] = &[
    (
        "Navigation",
        &[
            ("j/↓", "Select next user"),
            ("k/↑", "Select previous user"),
            ("g/Home", "Select first user"),
            ("G/End", "Select last user"),
        ],
    ),
    (
        "Search",
        &[
            ("/ or Ctrl+f", "Search by name or email"),
            ("Enter", "Keep the term and leave the search bar"),
            ("Esc", "Clear the search"),
        ],
    ),
    (
        "Users",
        &[
            ("n/c", "Create user"),
            ("e/Enter", "Edit selected user"),
            ("d/Delete", "Delete selected user"),
        ],
    ),
    (
        "Form",
        &[
            ("Tab/↓", "Next field"),
            ("Shift+Tab/↑", "Previous field"),
            ("Space/←/→", "Switch status"),
            ("Enter", "Save"),
            ("Esc", "Cancel"),
        ],
    ),
    (
        "Application",
        &[
            ("t", "Toggle light/dark theme"),
            ("L", "Log out"),
            ("?", "Toggle this help"),
            ("q/Ctrl+c", "Quit"),
        ],
    ),
];

/// Render the help overlay centered on the screen.
pub fn render_help_overlay(frame: &mut Frame, palette: &Palette) {
    let popup_area = centered_percent(
        HELP_POPUP_WIDTH_PERCENT,
        HELP_POPUP_HEIGHT_PERCENT,
        frame.area(),
    );

    frame.render_widget(Clear, popup_area);

    let help_paragraph = Paragraph::new(build_help_content(palette))
        .block(
            Block::default()
                .title(" Keyboard Shortcuts ")
                .borders(Borders::ALL)
                .border_style(palette.focused_border())
                .style(palette.panel()),
        )
        .wrap(Wrap { trim: false })
        .alignment(Alignment::Left);

    frame.render_widget(help_paragraph, popup_area);

    let hint_area = Rect {
        x: popup_area.x,
        y: popup_area.y + popup_area.height.saturating_sub(1),
        width: popup_area.width,
        height: 1,
    };

    let hint = Paragraph::new(Line::from(vec![Span::styled(
        " Press Esc or ? to close ",
        palette.muted_text().add_modifier(Modifier::DIM),
    )]))
    .alignment(Alignment::Center);

    frame.render_widget(hint, hint_area);
}

/// Build the help content lines grouped by category.
fn build_help_content(palette: &Palette) -> Vec<Line<'static>> {
    let category_style = palette.heading().add_modifier(Modifier::UNDERLINED);
    let key_style = palette.heading();
    let desc_style = Style::default().fg(palette.text);

    let mut lines = Vec::new();
    for (index, (category, rows)) in SHORTCUTS.iter().enumerate() {
        if index > 0 {
            lines.push(empty_line());
        }
        lines.push(Line::from(Span::styled(*category, category_style)));
        for (keys, description) in rows.iter() {
            lines.push(Line::from(vec![
                Span::styled(format!("  {:<14}", keys), key_style),
                Span::styled(*description, desc_style),
            ]));
        }
    }
    lines
}
