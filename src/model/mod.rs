//! Domain model types (pure).
//!
//! All types in this module are pure data with smart constructors.

pub mod draft;
pub mod error;
pub mod key_action;
pub mod user;
pub mod validation;

// Re-export for convenience
pub use draft::Draft;
pub use error::FieldError;
pub use key_action::KeyAction;
pub use user::{
    derive_initials, format_date_of_birth, InvalidUserId, User, UserId, UserProfile, UserStatus,
};
pub use validation::{is_valid_email, validate, ValidatedDraft};
