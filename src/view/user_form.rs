//! User form modal rendering.

use super::constants::FORM_WIDTH;
use super::helpers::{
    centered_fixed, empty_line, scroll_start, split_at_cursor, truncate_to_width,
};
use super::styles::Palette;
use crate::state::{FormField, FormState};
use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Border + error row + fields + initials + spacer + hints.
const FORM_HEIGHT: u16 = 2 + 1 + FormField::ALL.len() as u16 + 1 + 1 + 1;

/// Width of the label column.
const LABEL_WIDTH: usize = 15;

/// Render the form as a centered modal over whatever is below it.
///
/// The focused field has its label in the accent color and shows the
/// cursor. A validation error from the last save attempt is shown at the
/// top until the next save.
pub fn render_user_form(frame: &mut Frame, form: &FormState, palette: &Palette) {
    let area = centered_fixed(FORM_WIDTH, FORM_HEIGHT, frame.area());
    frame.render_widget(Clear, area);

    let mut lines = Vec::with_capacity(usize::from(FORM_HEIGHT));

    lines.push(match form.error() {
        Some(error) => Line::from(Span::styled(format!("! {}", error), palette.error())),
        None => empty_line(),
    });

    // Cells left for a value after the borders and the label column
    let value_width = usize::from(area.width.saturating_sub(2)).saturating_sub(LABEL_WIDTH);
    for field in FormField::ALL {
        lines.push(field_line(form, field, value_width, palette));
    }

    lines.push(Line::from(vec![
        Span::styled(
            format!("{:<width$}", "Initials", width = LABEL_WIDTH),
            palette.muted_text(),
        ),
        Span::styled(form.draft().initials(), palette.heading()),
        Span::styled(" (auto-generated)", palette.muted_text()),
    ]));
    lines.push(empty_line());
    lines.push(Line::from(vec![
        Span::styled(" Enter ", palette.accent_bar()),
        Span::styled(" Save   ", palette.muted_text()),
        Span::styled("Esc", palette.heading()),
        Span::styled(" Cancel   ", palette.muted_text()),
        Span::styled("Tab", palette.heading()),
        Span::styled(" Next field", palette.muted_text()),
    ]));

    let block = Block::default()
        .title(format!(" {} ", form.title()))
        .title_style(palette.heading())
        .borders(Borders::ALL)
        .border_style(palette.focused_border())
        .style(palette.panel());

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

/// One label + value row. The focused text field scrolls horizontally so
/// the cursor stays within `value_width` cells.
fn field_line(
    form: &FormState,
    field: FormField,
    value_width: usize,
    palette: &Palette,
) -> Line<'static> {
    let focused = form.focus() == field;
    let label_style = if focused {
        palette.heading()
    } else {
        palette.muted_text()
    };
    let label = Span::styled(
        format!("{:<width$}", format!("{}:", field.label()), width = LABEL_WIDTH),
        label_style,
    );

    let Some(text) = form.field_text(field) else {
        let status = form.draft().status;
        let picker = if focused {
            format!("< {} >", status.label())
        } else {
            format!("  {}  ", status.label())
        };
        return Line::from(vec![label, Span::styled(picker, palette.status(status))]);
    };

    if !focused {
        return Line::from(vec![label, Span::raw(truncate_to_width(text, value_width))]);
    }

    let start = scroll_start(text, form.cursor(), value_width);
    let visible: String = text.chars().skip(start).collect();
    let (before, at, after) = split_at_cursor(&visible, form.cursor() - start);
    Line::from(vec![
        label,
        Span::raw(before),
        Span::styled(
            at,
            Style::default().add_modifier(Modifier::REVERSED | Modifier::BOLD),
        ),
        Span::raw(after),
    ])
}
