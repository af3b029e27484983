//! Search state machine and user filter.
//!
//! SearchState is a sum type representing the three possible search states:
//! - Inactive: No search term, every user is listed
//! - Typing: User is editing the term (filter follows every keystroke)
//! - Active: Term submitted, search bar no longer has focus

use crate::model::User;

// ===== SearchState =====

/// Search state machine.
/// Sum type enforces exactly one state at a time.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SearchState {
    /// No active search.
    #[default]
    Inactive,
    /// User is typing query.
    Typing {
        /// Query text as typed.
        query: String,
        /// Cursor position in chars.
        cursor: usize,
    },
    /// Query submitted and applied.
    Active {
        /// The submitted query.
        query: SearchQuery,
    },
}

impl SearchState {
    /// The term the user list is currently filtered by.
    ///
    /// Empty when inactive.
    pub fn term(&self) -> &str {
        match self {
            SearchState::Inactive => "",
            SearchState::Typing { query, .. } => query,
            SearchState::Active { query } => query.as_str(),
        }
    }

    /// Whether the search bar currently has keyboard focus.
    pub fn is_typing(&self) -> bool {
        matches!(self, SearchState::Typing { .. })
    }
}

// ===== SearchQuery =====

/// Validated search query. Never empty.
/// Smart constructor enforces non-empty invariant. Whitespace is a
/// literal part of the term.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery(String);

impl SearchQuery {
    /// Smart constructor: validates query is non-empty.
    /// Returns None if query is empty.
    pub fn new(raw: impl Into<String>) -> Option<Self> {
        let s = raw.into();
        if s.is_empty() {
            None
        } else {
            Some(Self(s))
        }
    }

    /// The query text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

// ===== Filtering =====

/// Whether `user`'s name or email contains `term_lower`.
///
/// `term_lower` must already be lowercased.
fn matches_term(user: &User, term_lower: &str) -> bool {
    user.name().to_lowercase().contains(term_lower)
        || user.email().to_lowercase().contains(term_lower)
}

/// Filter users by a search term.
///
/// Case-insensitive substring match on name or email. Returns the matching
/// subsequence in original order; an empty term yields every user.
pub fn filter_users<'a>(users: &'a [User], term: &str) -> Vec<&'a User> {
    if term.is_empty() {
        return users.iter().collect();
    }

    let term_lower = term.to_lowercase();
    users
        .iter()
        .filter(|user| matches_term(user, &term_lower))
        .collect()
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod tests;
