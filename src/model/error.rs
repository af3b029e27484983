//! Error types for the domain core.
//!
//! The core has exactly one failure category: a field validation error
//! raised when a draft is saved. It is non-fatal and shown on the open
//! form until the user corrects the draft and saves again. Every other
//! core operation (search, delete, toggles) is total.
//!
//! Shell-level failures live next to the code that produces them:
//! [`crate::config::ConfigError`], [`crate::logging::LoggingError`] and
//! [`crate::view::TuiError`].

use thiserror::Error;

/// Validation failure for a draft record.
///
/// The `Display` output is the human-readable message shown on the form.
///
/// # Examples
///
/// ```
/// use userdeck::model::FieldError;
///
/// assert_eq!(FieldError::NameRequired.to_string(), "Name is required");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FieldError {
    /// Name is empty after trimming.
    #[error("Name is required")]
    NameRequired,

    /// Email is empty or fails the `\S+@\S+\.\S+` check.
    #[error("Valid email is required")]
    InvalidEmail,

    /// Date of birth is empty.
    #[error("Date of birth is required")]
    DateOfBirthRequired,
}
