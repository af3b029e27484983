//! User record types.
//!
//! `User` is the committed record held by the store. Its `initials` field is
//! always derived from `name` via [`derive_initials`]; there is no setter.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Maximum number of characters in derived initials.
pub const MAX_INITIALS: usize = 2;

// ===== UserId =====

/// Store-assigned user identifier. Always positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct UserId(u32);

/// Error returned when constructing a `UserId` from zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("user id must be positive")]
pub struct InvalidUserId;

impl UserId {
    /// Smart constructor: rejects zero.
    pub fn new(raw: u32) -> Result<Self, InvalidUserId> {
        if raw == 0 {
            Err(InvalidUserId)
        } else {
            Ok(Self(raw))
        }
    }

    /// The first id handed out by an empty store.
    pub const FIRST: UserId = UserId(1);

    /// Raw numeric value.
    pub fn get(self) -> u32 {
        self.0
    }

    /// The id following this one.
    pub fn next(self) -> Self {
        Self(self.0.saturating_add(1))
    }
}

impl TryFrom<u32> for UserId {
    type Error = InvalidUserId;

    fn try_from(raw: u32) -> Result<Self, Self::Error> {
        Self::new(raw)
    }
}

impl From<UserId> for u32 {
    fn from(id: UserId) -> Self {
        id.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ===== UserStatus =====

/// Account status. No side effects are attached to either value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserStatus {
    /// Account is usable.
    #[default]
    Active,
    /// Account is locked.
    Locked,
}

impl UserStatus {
    /// The other status.
    pub fn toggle(self) -> Self {
        match self {
            UserStatus::Active => UserStatus::Locked,
            UserStatus::Locked => UserStatus::Active,
        }
    }

    /// Lowercase name as shown on cards.
    pub fn as_str(self) -> &'static str {
        match self {
            UserStatus::Active => "active",
            UserStatus::Locked => "locked",
        }
    }

    /// Capitalized name as shown in the form picker.
    pub fn label(self) -> &'static str {
        match self {
            UserStatus::Active => "Active",
            UserStatus::Locked => "Locked",
        }
    }
}

impl fmt::Display for UserStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ===== Initials =====

/// Derive display initials from a name.
///
/// Takes the upper-cased first character of each whitespace-separated token,
/// concatenated and truncated to [`MAX_INITIALS`] characters.
pub fn derive_initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|token| token.chars().next())
        .flat_map(char::to_uppercase)
        .take(MAX_INITIALS)
        .collect()
}

// ===== UserProfile =====

/// Every user field except the id.
///
/// Constructed by the validator (or the seed loader) so that `initials`
/// always matches `name`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserProfile {
    name: String,
    email: String,
    status: UserStatus,
    date_of_birth: String,
    initials: String,
}

impl UserProfile {
    /// Build a profile, deriving initials from `name`.
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        status: UserStatus,
        date_of_birth: impl Into<String>,
    ) -> Self {
        let name = name.into();
        let initials = derive_initials(&name);
        Self {
            name,
            email: email.into(),
            status,
            date_of_birth: date_of_birth.into(),
            initials,
        }
    }

    /// Full name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Email address.
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Account status.
    pub fn status(&self) -> UserStatus {
        self.status
    }

    /// Date of birth as an ISO `YYYY-MM-DD` string.
    pub fn date_of_birth(&self) -> &str {
        &self.date_of_birth
    }

    /// Initials derived from the name.
    pub fn initials(&self) -> &str {
        &self.initials
    }
}

// ===== User =====

/// A committed user record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    id: UserId,
    profile: UserProfile,
}

impl User {
    /// Pair an id with a profile.
    pub fn new(id: UserId, profile: UserProfile) -> Self {
        Self { id, profile }
    }

    /// Store-assigned id.
    pub fn id(&self) -> UserId {
        self.id
    }

    /// All non-id fields.
    pub fn profile(&self) -> &UserProfile {
        &self.profile
    }

    /// Replace every non-id field.
    pub(crate) fn set_profile(&mut self, profile: UserProfile) {
        self.profile = profile;
    }

    /// Full name.
    pub fn name(&self) -> &str {
        self.profile.name()
    }

    /// Email address.
    pub fn email(&self) -> &str {
        self.profile.email()
    }

    /// Account status.
    pub fn status(&self) -> UserStatus {
        self.profile.status()
    }

    /// Date of birth as an ISO `YYYY-MM-DD` string.
    pub fn date_of_birth(&self) -> &str {
        self.profile.date_of_birth()
    }

    /// Initials derived from the name.
    pub fn initials(&self) -> &str {
        self.profile.initials()
    }
}

/// Format an ISO date of birth as `MM/DD/YYYY` for display.
///
/// Strings that do not parse as a date are returned unchanged.
pub fn format_date_of_birth(raw: &str) -> String {
    match chrono::NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d") {
        Ok(date) => date.format("%m/%d/%Y").to_string(),
        Err(_) => raw.to_string(),
    }
}
