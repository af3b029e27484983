//! User form state (pure).
//!
//! FormState wraps the draft bound to the open form together with the
//! focused field, the text cursor and the last validation error.

use crate::model::{Draft, FieldError};
use crate::state::search_input_handler::byte_offset;

// ===== FormField =====

/// Focusable form fields, in tab order.
///
/// Initials are shown on the form but derived, so they are never focusable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FormField {
    /// Free-text name.
    #[default]
    Name,
    /// Free-text email.
    Email,
    /// Active/Locked picker.
    Status,
    /// Date of birth text (`YYYY-MM-DD`).
    DateOfBirth,
}

impl FormField {
    /// Every focusable field in tab order.
    pub const ALL: [FormField; 4] = [
        FormField::Name,
        FormField::Email,
        FormField::Status,
        FormField::DateOfBirth,
    ];

    /// Next field, wrapping to the first.
    pub fn next(self) -> Self {
        match self {
            FormField::Name => FormField::Email,
            FormField::Email => FormField::Status,
            FormField::Status => FormField::DateOfBirth,
            FormField::DateOfBirth => FormField::Name,
        }
    }

    /// Previous field, wrapping to the last.
    pub fn prev(self) -> Self {
        match self {
            FormField::Name => FormField::DateOfBirth,
            FormField::Email => FormField::Name,
            FormField::Status => FormField::Email,
            FormField::DateOfBirth => FormField::Status,
        }
    }

    /// Label shown next to the input.
    pub fn label(self) -> &'static str {
        match self {
            FormField::Name => "Name",
            FormField::Email => "Email",
            FormField::Status => "Status",
            FormField::DateOfBirth => "Date of Birth",
        }
    }

    /// Whether the field accepts typed text.
    pub fn is_text(self) -> bool {
        !matches!(self, FormField::Status)
    }
}

// ===== FormState =====

/// State of the open user form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormState {
    draft: Draft,
    focus: FormField,
    cursor: usize,
    error: Option<FieldError>,
}

impl FormState {
    /// Open a form on `draft` with focus on the name field.
    pub fn new(draft: Draft) -> Self {
        let cursor = draft.name.chars().count();
        Self {
            draft,
            focus: FormField::Name,
            cursor,
            error: None,
        }
    }

    /// The draft as currently edited.
    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    /// The focused field.
    pub fn focus(&self) -> FormField {
        self.focus
    }

    /// Cursor position (chars) in the focused text field.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Error from the last failed save, if any.
    pub fn error(&self) -> Option<FieldError> {
        self.error
    }

    /// Attach the error surfaced by a failed save.
    pub fn set_error(&mut self, error: FieldError) {
        self.error = Some(error);
    }

    /// Form heading.
    pub fn title(&self) -> &'static str {
        if self.draft.is_new() {
            "Create New User"
        } else {
            "Edit User"
        }
    }

    /// Text of a text field; `None` for the status picker.
    pub fn field_text(&self, field: FormField) -> Option<&str> {
        match field {
            FormField::Name => Some(&self.draft.name),
            FormField::Email => Some(&self.draft.email),
            FormField::DateOfBirth => Some(&self.draft.date_of_birth),
            FormField::Status => None,
        }
    }

    fn focused_text_mut(&mut self) -> Option<&mut String> {
        match self.focus {
            FormField::Name => Some(&mut self.draft.name),
            FormField::Email => Some(&mut self.draft.email),
            FormField::DateOfBirth => Some(&mut self.draft.date_of_birth),
            FormField::Status => None,
        }
    }

    fn focus_field(&mut self, field: FormField) {
        self.focus = field;
        self.cursor = self.field_text(field).map_or(0, |text| text.chars().count());
    }

    /// Move focus to the next field; cursor goes to the end of its text.
    pub fn focus_next(&mut self) {
        self.focus_field(self.focus.next());
    }

    /// Move focus to the previous field; cursor goes to the end of its text.
    pub fn focus_prev(&mut self) {
        self.focus_field(self.focus.prev());
    }

    /// Insert a character at the cursor of the focused text field.
    pub fn insert_char(&mut self, ch: char) {
        let cursor = self.cursor;
        if let Some(text) = self.focused_text_mut() {
            let offset = byte_offset(text, cursor);
            text.insert(offset, ch);
            self.cursor = cursor + 1;
        }
    }

    /// Delete the character before the cursor of the focused text field.
    pub fn backspace(&mut self) {
        let cursor = self.cursor;
        if cursor == 0 {
            return;
        }
        if let Some(text) = self.focused_text_mut() {
            let offset = byte_offset(text, cursor - 1);
            text.remove(offset);
            self.cursor = cursor - 1;
        }
    }

    /// Move the cursor left, saturating at 0.
    pub fn cursor_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Move the cursor right, saturating at the end of the text.
    pub fn cursor_right(&mut self) {
        let len = self
            .field_text(self.focus)
            .map_or(0, |text| text.chars().count());
        self.cursor = (self.cursor + 1).min(len);
    }

    /// Flip the status picker. No-op unless the status field is focused.
    pub fn toggle_status(&mut self) {
        if self.focus == FormField::Status {
            self.draft.status = self.draft.status.toggle();
        }
    }
}
