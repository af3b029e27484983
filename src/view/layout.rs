//! Screen layout rendering.
//!
//! Pure layout logic: splits the frame into header, search bar, card grid
//! and status bar, then draws any overlay on top.

use super::constants::{HEADER_HEIGHT, SEARCH_INPUT_HEIGHT, STATUS_BAR_HEIGHT};
use super::help::render_help_overlay;
use super::login::render_login;
use super::search_input::SearchInput;
use super::styles::{ColorConfig, Palette};
use super::user_form::render_user_form;
use super::user_grid::UserGrid;
use crate::state::AppState;
use ratatui::{
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Paragraph},
    Frame,
};

/// Title shown at the left of the header bar.
pub const APP_TITLE: &str = "User Management";

/// Render the whole screen for `state`.
///
/// While logged out only the login placeholder is drawn (plus help when
/// open). Otherwise the main view is drawn, then the form modal, then help.
pub fn render_layout(frame: &mut Frame, state: &AppState, colors: ColorConfig) {
    let palette = Palette::new(state.theme, colors);

    if !state.session.is_logged_in() {
        render_login(frame, state.theme, &palette);
        if state.help_visible {
            render_help_overlay(frame, &palette);
        }
        return;
    }

    frame.render_widget(Block::default().style(palette.screen()), frame.area());

    let [header_area, search_area, grid_area, status_area] = Layout::vertical([
        Constraint::Length(HEADER_HEIGHT),
        Constraint::Length(SEARCH_INPUT_HEIGHT),
        Constraint::Min(0),
        Constraint::Length(STATUS_BAR_HEIGHT),
    ])
    .areas(frame.area());

    render_header(frame, header_area, state, &palette);
    frame.render_widget(SearchInput::new(&state.search, &palette), search_area);

    let users = state.visible_users();
    frame.render_widget(
        UserGrid::new(&users, state.selected_index(), &palette),
        grid_area,
    );

    render_status_bar(frame, status_area, state, &palette);

    if let Some(form) = state.crud().form() {
        render_user_form(frame, form, &palette);
    }

    if state.help_visible {
        render_help_overlay(frame, &palette);
    }
}

/// Render the header bar: title, theme indicator and key hints.
fn render_header(frame: &mut Frame, area: Rect, state: &AppState, palette: &Palette) {
    let bar = palette.accent_bar();
    let hints = format!(
        "[{}]  n:create  L:logout  t:theme  ?:help ",
        state.theme.as_str()
    );

    let title_width = APP_TITLE.len() as u16 + 2;
    let [title_area, hints_area] =
        Layout::horizontal([Constraint::Length(title_width), Constraint::Min(0)]).areas(area);

    frame.render_widget(
        Paragraph::new(Line::from(format!(" {} ", APP_TITLE))).style(bar),
        title_area,
    );
    frame.render_widget(
        Paragraph::new(Line::from(hints).right_aligned()).style(bar),
        hints_area,
    );
}

/// Render the status bar: last status message, or the match count.
fn render_status_bar(frame: &mut Frame, area: Rect, state: &AppState, palette: &Palette) {
    let shown = state.visible_users().len();
    let total = state.store().len();

    let summary = if state.search.term().is_empty() {
        format!("{} users", total)
    } else {
        format!("{} of {} users", shown, total)
    };

    let mut spans = vec![Span::styled(format!(" {}", summary), palette.muted_text())];
    if let Some(message) = state.status_message() {
        spans.push(Span::styled("  |  ", palette.muted_text()));
        spans.push(Span::styled(message.to_string(), palette.heading()));
    }
    spans.push(Span::styled(
        "  |  /:search  e:edit  d:delete  q:quit",
        palette.muted_text(),
    ));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

// ===== Tests =====

#[cfg(test)]
#[path = "layout_tests.rs"]
mod tests;
