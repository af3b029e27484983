//! Keyboard handling for the open user form.
//!
//! Edits are applied to the FormState directly. Save and cancel are
//! returned as intents so the caller can run them against the store.

use crate::state::form::FormState;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// What the caller should do after a key reached the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormIntent {
    /// Key was consumed as an edit or focus move.
    Edited,
    /// User asked to save the draft.
    Save,
    /// User asked to discard the draft.
    Cancel,
    /// Key has no meaning in the form.
    Ignored,
}

/// Apply a key event to the open form.
pub fn handle_form_key(form: &mut FormState, key: KeyEvent) -> FormIntent {
    match key.code {
        KeyCode::Enter => FormIntent::Save,
        KeyCode::Esc => FormIntent::Cancel,
        KeyCode::Tab | KeyCode::Down => {
            form.focus_next();
            FormIntent::Edited
        }
        KeyCode::BackTab | KeyCode::Up => {
            form.focus_prev();
            FormIntent::Edited
        }
        KeyCode::Left | KeyCode::Right | KeyCode::Char(' ') if !form.focus().is_text() => {
            form.toggle_status();
            FormIntent::Edited
        }
        KeyCode::Left => {
            form.cursor_left();
            FormIntent::Edited
        }
        KeyCode::Right => {
            form.cursor_right();
            FormIntent::Edited
        }
        KeyCode::Backspace => {
            form.backspace();
            FormIntent::Edited
        }
        KeyCode::Char(ch)
            if !key.modifiers.contains(KeyModifiers::CONTROL)
                && !key.modifiers.contains(KeyModifiers::ALT) =>
        {
            if form.focus().is_text() {
                form.insert_char(ch);
                FormIntent::Edited
            } else {
                FormIntent::Ignored
            }
        }
        _ => FormIntent::Ignored,
    }
}
