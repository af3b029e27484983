//! Regression tests: edge inputs that must not panic.

use crate::model::{User, UserId, UserProfile, UserStatus};
use crate::store::RecordStore;
use crate::test_harness::AcceptanceTestHarness;
use crossterm::event::KeyCode;

#[test]
fn every_browsing_key_on_empty_store_is_safe() {
    let mut harness =
        AcceptanceTestHarness::with_store_and_size(RecordStore::new(), 80, 24).unwrap();

    harness.send_keys(&[
        KeyCode::Char('j'),
        KeyCode::Char('k'),
        KeyCode::Char('g'),
        KeyCode::Char('G'),
        KeyCode::Char('e'),
        KeyCode::Enter,
        KeyCode::Char('d'),
        KeyCode::Delete,
        KeyCode::Esc,
    ]);

    let state = harness.state();
    assert!(state.store().is_empty());
    assert!(state.crud().is_browsing(), "edit with nothing selected is a no-op");
    assert_eq!(state.selected_index(), None);
    assert!(harness.is_running());

    let output = harness.render_to_string();
    assert!(output.contains("0 users"), "got:\n{}", output);
}

#[test]
fn first_create_on_empty_store_gets_id_one() {
    let mut harness =
        AcceptanceTestHarness::with_store_and_size(RecordStore::new(), 80, 24).unwrap();

    harness.send_key(KeyCode::Char('n'));
    harness.type_text("Solo User");
    harness.send_key(KeyCode::Tab);
    harness.type_text("solo@example.com");
    harness.send_keys(&[KeyCode::Tab, KeyCode::Tab]);
    harness.type_text("1970-01-01");
    harness.send_key(KeyCode::Enter);

    let state = harness.state();
    assert_eq!(state.store().len(), 1);
    assert_eq!(state.store().list()[0].id(), UserId::FIRST);
}

#[test]
fn tiny_terminal_renders_every_screen() {
    let store = RecordStore::with_demo_users().unwrap();
    let mut harness = AcceptanceTestHarness::with_store_and_size(store, 12, 4).unwrap();

    let _ = harness.render_to_string();
    harness.send_key(KeyCode::Char('n'));
    let _ = harness.render_to_string();
    harness.send_key(KeyCode::Esc);
    harness.send_key(KeyCode::Char('?'));
    let _ = harness.render_to_string();
    harness.send_key(KeyCode::Esc);
    harness.send_key(KeyCode::Char('L'));
    let _ = harness.render_to_string();

    assert!(harness.is_running());
}

#[test]
fn non_ascii_editing_in_search_and_form() {
    let user = User::new(
        UserId::new(1).unwrap(),
        UserProfile::new("Zoë Ørsted", "zoe@example.com", UserStatus::Active, "1990-01-01"),
    );
    let mut harness = AcceptanceTestHarness::with_users(vec![user]).unwrap();

    harness.send_key(KeyCode::Char('/'));
    harness.type_text("zoë");
    harness.send_keys(&[KeyCode::Left, KeyCode::Backspace, KeyCode::Right]);
    assert_eq!(harness.state().search.term(), "zë");
    harness.send_key(KeyCode::Esc);

    harness.send_key(KeyCode::Char('e'));
    harness.send_keys(&[KeyCode::Backspace, KeyCode::Left, KeyCode::Left]);
    harness.type_text("é");
    let form = harness.state().crud().form().expect("form open");
    assert_eq!(form.draft().name, "Zoë Ørséte");
    assert_eq!(form.draft().initials(), "ZØ");

    let _ = harness.render_to_string();
}

#[test]
fn very_long_name_is_rendered_without_panic() {
    let long_name = "A".repeat(500) + " " + &"B".repeat(500);
    let user = User::new(
        UserId::new(1).unwrap(),
        UserProfile::new(long_name, "long@example.com", UserStatus::Locked, "not a date"),
    );
    let mut harness = AcceptanceTestHarness::with_users(vec![user]).unwrap();

    let output = harness.render_to_string();
    assert!(output.contains("Date of Birth: not a date"), "got:\n{}", output);
    harness.send_key(KeyCode::Char('e'));
    let _ = harness.render_to_string();
}
