//! Form validation (pure).
//!
//! Rules run in a fixed order and the first failure wins.

use crate::model::draft::Draft;
use crate::model::error::FieldError;
use crate::model::user::{UserId, UserProfile};
use regex::Regex;
use std::sync::LazyLock;

/// Coarse syntactic email check: non-whitespace `@` non-whitespace `.` non-whitespace.
static EMAIL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\S+@\S+\.\S+").expect("email pattern is a valid regex"));

/// A draft that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedDraft {
    /// Id of the record being edited, `None` for a new record.
    pub id: Option<UserId>,
    /// Normalized fields, initials recomputed from the final name.
    pub profile: UserProfile,
}

/// Check whether `email` passes the coarse syntactic check.
pub fn is_valid_email(email: &str) -> bool {
    let trimmed = email.trim();
    !trimmed.is_empty() && EMAIL_REGEX.is_match(trimmed)
}

/// Validate and normalize a draft.
///
/// Name and email are trimmed. The date of birth is only checked for
/// presence.
pub fn validate(draft: &Draft) -> Result<ValidatedDraft, FieldError> {
    let name = draft.name.trim();
    if name.is_empty() {
        return Err(FieldError::NameRequired);
    }

    if !is_valid_email(&draft.email) {
        return Err(FieldError::InvalidEmail);
    }

    if draft.date_of_birth.is_empty() {
        return Err(FieldError::DateOfBirthRequired);
    }

    Ok(ValidatedDraft {
        id: draft.id,
        profile: UserProfile::new(
            name,
            draft.email.trim(),
            draft.status,
            draft.date_of_birth.clone(),
        ),
    })
}
