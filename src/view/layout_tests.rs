//! Tests for screen layout rendering.

use super::*;
use crate::model::{UserId, UserProfile, UserStatus};
use crate::state::{SearchState, ThemeMode};
use crate::store::RecordStore;
use crate::test_harness::buffer_to_string;
use ratatui::backend::TestBackend;
use ratatui::Terminal;

fn demo_state() -> AppState {
    AppState::new(RecordStore::with_demo_users().expect("embedded seed parses"))
}

fn render(state: &AppState, width: u16, height: u16) -> String {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal
        .draw(|frame| render_layout(frame, state, ColorConfig::enabled()))
        .unwrap();
    buffer_to_string(terminal.backend().buffer())
}

#[test]
fn main_view_has_header_search_and_cards() {
    let output = render(&demo_state(), 100, 30);

    assert!(output.contains("User Management"), "got:\n{}", output);
    assert!(output.contains("[light]"));
    assert!(output.contains("Search users..."));
    assert!(output.contains("Alice Johnson"));
    assert!(output.contains("8 users"));
}

#[test]
fn header_reports_dark_theme() {
    let mut state = demo_state();
    state.toggle_theme();
    let output = render(&state, 100, 30);
    assert!(output.contains("[dark]"), "got:\n{}", output);
}

#[test]
fn search_term_narrows_cards_and_count() {
    let mut state = demo_state();
    state.set_search(SearchState::Typing {
        query: "smith".to_string(),
        cursor: 5,
    });
    let output = render(&state, 100, 30);

    assert!(output.contains("Jane Smith"), "got:\n{}", output);
    assert!(!output.contains("Alice Johnson"));
    assert!(output.contains("1 of 8 users"));
}

#[test]
fn no_match_shows_empty_message() {
    let mut state = demo_state();
    state.set_search(SearchState::Typing {
        query: "zzz".to_string(),
        cursor: 3,
    });
    let output = render(&state, 100, 30);
    assert!(
        output.contains("No users found matching your search criteria."),
        "got:\n{}",
        output
    );
}

#[test]
fn open_form_is_drawn_over_grid() {
    let mut state = demo_state();
    state.create_user();
    let output = render(&state, 100, 30);
    assert!(output.contains("Create New User"), "got:\n{}", output);
}

#[test]
fn logged_out_shows_only_login_panel() {
    let mut state = demo_state();
    state.logout();
    let output = render(&state, 100, 30);

    assert!(output.contains("You have been logged out."), "got:\n{}", output);
    assert!(!output.contains("Alice Johnson"));
    assert!(!output.contains("Search users..."));
}

#[test]
fn status_message_follows_delete() {
    let mut state = AppState::new(RecordStore::from_users(vec![crate::model::User::new(
        UserId::new(1).unwrap(),
        UserProfile::new("Bob", "bob@example.com", UserStatus::Active, "1990-01-01"),
    )]));
    state.delete_selected();
    let output = render(&state, 100, 20);

    assert!(output.contains("Deleted user Bob"), "got:\n{}", output);
    assert!(output.contains("0 users"));
}

#[test]
fn narrow_terminal_still_renders() {
    let mut state = demo_state();
    state.theme = ThemeMode::Dark;
    let output = render(&state, 20, 8);
    assert!(!output.is_empty());
}
