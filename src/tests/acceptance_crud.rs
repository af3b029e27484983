//! Acceptance tests: creating, editing and deleting users from the keyboard.

use crate::model::{FieldError, UserId, UserStatus};
use crate::state::{CrudMode, FormField};
use crate::test_harness::AcceptanceTestHarness;
use crossterm::event::KeyCode;

fn id(raw: u32) -> UserId {
    UserId::new(raw).unwrap()
}

fn harness() -> AcceptanceTestHarness {
    AcceptanceTestHarness::with_demo_users().expect("demo harness")
}

/// Fill a freshly opened blank form field by field.
fn fill_new_form(harness: &mut AcceptanceTestHarness, name: &str, email: &str, dob: &str) {
    harness.type_text(name);
    harness.send_key(KeyCode::Tab);
    harness.type_text(email);
    harness.send_key(KeyCode::Tab); // status
    harness.send_key(KeyCode::Tab); // date of birth
    harness.type_text(dob);
}

// ===== Create =====

#[test]
fn create_user_appends_record_with_next_id() {
    // GIVEN: the eight demo users
    let mut harness = harness();

    // WHEN: the user opens the form, fills it in and presses Enter
    harness.send_key(KeyCode::Char('n'));
    assert!(matches!(
        harness.state().crud().mode(),
        CrudMode::CreatingNew { .. }
    ));
    fill_new_form(&mut harness, "Grace Hopper", "grace@example.com", "1906-12-09");
    harness.send_key(KeyCode::Enter);

    // THEN: the form closes and the record is appended as id 9
    let state = harness.state();
    assert!(state.crud().is_browsing());
    assert_eq!(state.store().len(), 9);
    let created = state.store().get(id(9)).expect("created user");
    assert_eq!(created.name(), "Grace Hopper");
    assert_eq!(created.initials(), "GH");
    assert_eq!(created.status(), UserStatus::Active);
    assert_eq!(state.status_message(), Some("Created user Grace Hopper"));
    assert_eq!(state.selected_user().map(|u| u.id()), Some(id(9)));
}

#[test]
fn create_with_status_toggled_saves_locked_user() {
    let mut harness = harness();

    harness.send_key(KeyCode::Char('c'));
    harness.type_text("Linus Torvalds");
    harness.send_key(KeyCode::Tab);
    harness.type_text("linus@example.com");
    harness.send_key(KeyCode::Tab);
    harness.send_key(KeyCode::Char(' '));
    harness.send_key(KeyCode::Tab);
    harness.type_text("1969-12-28");
    harness.send_key(KeyCode::Enter);

    let created = harness.state().store().get(id(9)).expect("created user");
    assert_eq!(created.status(), UserStatus::Locked);
}

#[test]
fn initials_preview_follows_name_while_typing() {
    let mut harness = harness();
    harness.send_key(KeyCode::Char('n'));
    harness.type_text("Ada Lovelace");

    let form = harness.state().crud().form().expect("form open");
    assert_eq!(form.draft().initials(), "AL");
    let output = harness.render_to_string();
    assert!(output.contains("AL (auto-generated)"), "got:\n{}", output);
}

#[test]
fn blank_name_save_is_rejected_without_touching_store() {
    // GIVEN: an empty create form
    let mut harness = harness();
    harness.send_key(KeyCode::Char('n'));

    // WHEN: the user saves immediately
    harness.send_key(KeyCode::Enter);

    // THEN: the form stays open with the error and the store is unchanged
    let state = harness.state();
    assert_eq!(state.store().len(), 8);
    let form = state.crud().form().expect("form stays open");
    assert_eq!(form.error(), Some(FieldError::NameRequired));

    let output = harness.render_to_string();
    assert!(output.contains("Name is required"), "got:\n{}", output);
}

#[test]
fn invalid_email_keeps_entered_values() {
    let mut harness = harness();
    harness.send_key(KeyCode::Char('n'));
    fill_new_form(&mut harness, "Test User", "not-an-email", "2000-01-01");
    harness.send_key(KeyCode::Enter);

    let state = harness.state();
    assert_eq!(state.store().len(), 8);
    let form = state.crud().form().expect("form stays open");
    assert_eq!(form.error(), Some(FieldError::InvalidEmail));
    assert_eq!(form.draft().name, "Test User");
    assert_eq!(form.draft().email, "not-an-email");
    assert_eq!(form.draft().date_of_birth, "2000-01-01");

    let output = harness.render_to_string();
    assert!(output.contains("Valid email is required"), "got:\n{}", output);
}

#[test]
fn missing_date_of_birth_is_reported() {
    let mut harness = harness();
    harness.send_key(KeyCode::Char('n'));
    fill_new_form(&mut harness, "No Birthday", "nobday@example.com", "");
    harness.send_key(KeyCode::Enter);

    let form = harness.state().crud().form().expect("form stays open");
    assert_eq!(form.error(), Some(FieldError::DateOfBirthRequired));
    assert_eq!(form.focus(), FormField::DateOfBirth);
}

#[test]
fn fixing_error_then_saving_succeeds() {
    let mut harness = harness();
    harness.send_key(KeyCode::Char('n'));
    harness.send_key(KeyCode::Enter);
    assert!(harness.state().crud().form().is_some());

    fill_new_form(&mut harness, "Late Fix", "late@example.com", "1999-09-09");
    harness.send_key(KeyCode::Enter);

    assert!(harness.state().crud().is_browsing());
    assert_eq!(harness.state().store().len(), 9);
}

// ===== Edit =====

#[test]
fn edit_selected_user_replaces_fields_in_place() {
    // GIVEN: John Doe (id 1) is selected
    let mut harness = harness();
    assert_eq!(harness.state().selected_user().map(|u| u.id()), Some(id(1)));

    // WHEN: the user edits the name and saves
    harness.send_key(KeyCode::Char('e'));
    for _ in 0..3 {
        harness.send_key(KeyCode::Backspace);
    }
    harness.type_text("Smith");
    harness.send_key(KeyCode::Enter);

    // THEN: the record keeps its id and position with new initials
    let state = harness.state();
    let edited = state.store().get(id(1)).expect("still present");
    assert_eq!(edited.name(), "John Smith");
    assert_eq!(edited.initials(), "JS");
    assert_eq!(edited.email(), "john.doe@example.com");
    assert_eq!(state.store().list()[0].id(), id(1));
    assert_eq!(state.status_message(), Some("Updated user John Smith"));
}

#[test]
fn edit_form_is_titled_and_prefilled() {
    let mut harness = harness();
    harness.send_key(KeyCode::Char('j'));
    harness.send_key(KeyCode::Enter);

    let form = harness.state().crud().form().expect("form open");
    assert_eq!(form.title(), "Edit User");
    assert_eq!(form.draft().id, Some(id(2)));
    assert_eq!(form.draft().name, "Jane Smith");

    let output = harness.render_to_string();
    assert!(output.contains("Edit User"), "got:\n{}", output);
}

#[test]
fn cancel_discards_edits() {
    let mut harness = harness();
    let before = harness.state().store().clone();

    harness.send_key(KeyCode::Char('e'));
    harness.type_text("zzz");
    harness.send_key(KeyCode::Esc);

    assert!(harness.state().crud().is_browsing());
    assert_eq!(harness.state().store(), &before);
}

#[test]
fn browsing_keys_do_not_act_while_form_is_open() {
    let mut harness = harness();
    harness.send_key(KeyCode::Char('n'));
    harness.send_key(KeyCode::Char('d'));
    harness.send_key(KeyCode::Char('t'));

    let state = harness.state();
    assert_eq!(state.store().len(), 8);
    assert_eq!(state.theme, crate::state::ThemeMode::Light);
    assert_eq!(state.crud().form().map(|f| f.draft().name.as_str()), Some("dt"));
}

// ===== Delete =====

#[test]
fn status_message_is_gone_after_next_key() {
    // GIVEN: a delete just reported in the status bar
    let mut harness = harness();
    harness.send_key(KeyCode::Char('d'));
    assert!(harness
        .render_to_string()
        .contains("Deleted user John Doe"));

    // WHEN: the user does anything else, here a search
    harness.send_key(KeyCode::Char('/'));
    harness.type_text("a");

    // THEN: the old message no longer shows
    assert_eq!(harness.state().status_message(), None);
    assert!(!harness.render_to_string().contains("Deleted user"));
}

#[test]
fn delete_removes_selected_user() {
    // GIVEN: Jane Smith (id 2) selected
    let mut harness = harness();
    harness.send_key(KeyCode::Char('j'));

    // WHEN: the user presses d
    harness.send_key(KeyCode::Char('d'));

    // THEN: the record is gone and the selection moves to the next card
    let state = harness.state();
    assert_eq!(state.store().len(), 7);
    assert!(state.store().get(id(2)).is_none());
    assert_eq!(state.status_message(), Some("Deleted user Jane Smith"));
    assert_eq!(state.selected_user().map(|u| u.name()), Some("Alice Johnson"));
}

#[test]
fn deleting_last_card_clamps_selection() {
    let mut harness = harness();
    harness.send_key(KeyCode::Char('G'));
    assert_eq!(harness.state().selected_index(), Some(7));

    harness.send_key(KeyCode::Delete);

    let state = harness.state();
    assert_eq!(state.store().len(), 7);
    assert_eq!(state.selected_index(), Some(6));
    assert_eq!(state.selected_user().map(|u| u.name()), Some("Eve"));
}

#[test]
fn create_after_delete_uses_max_id() {
    let mut harness = harness();
    harness.send_key(KeyCode::Char('j'));
    harness.send_key(KeyCode::Char('d')); // removes id 2

    harness.send_key(KeyCode::Char('n'));
    fill_new_form(&mut harness, "New Person", "new@example.com", "2001-01-01");
    harness.send_key(KeyCode::Enter);

    let state = harness.state();
    assert!(state.store().get(id(9)).is_some(), "max id 8 + 1");
    assert!(state.store().get(id(2)).is_none(), "freed id is not reused");
}
