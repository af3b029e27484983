//! Search input handling (pure state transitions).
//!
//! Handles text input for the SearchState::Typing variant.
//! All functions are pure - no side effects, testable without TUI.
//! Cursor positions count chars, not bytes.

use crate::state::{SearchQuery, SearchState};

/// Byte offset of the char at `cursor`, or the end of `query`.
pub(crate) fn byte_offset(query: &str, cursor: usize) -> usize {
    query
        .char_indices()
        .nth(cursor)
        .map_or(query.len(), |(offset, _)| offset)
}

/// Handle character input when in Typing state.
/// Inserts the character at cursor position and advances cursor.
///
/// Returns updated SearchState. No-op if not in Typing state.
pub fn handle_char_input(state: SearchState, ch: char) -> SearchState {
    match state {
        SearchState::Typing { mut query, cursor } => {
            query.insert(byte_offset(&query, cursor), ch);
            SearchState::Typing {
                query,
                cursor: cursor + 1,
            }
        }
        other => other,
    }
}

/// Handle backspace when in Typing state.
/// Deletes character before cursor if cursor > 0.
///
/// Returns updated SearchState. No-op if not in Typing state.
pub fn handle_backspace(state: SearchState) -> SearchState {
    match state {
        SearchState::Typing { mut query, cursor } if cursor > 0 => {
            query.remove(byte_offset(&query, cursor - 1));
            SearchState::Typing {
                query,
                cursor: cursor - 1,
            }
        }
        other => other,
    }
}

/// Move cursor left by one position.
/// Saturates at 0 (does not wrap).
///
/// Returns updated SearchState. No-op if not in Typing state.
pub fn handle_cursor_left(state: SearchState) -> SearchState {
    match state {
        SearchState::Typing { query, cursor } => SearchState::Typing {
            query,
            cursor: cursor.saturating_sub(1),
        },
        other => other,
    }
}

/// Move cursor right by one position.
/// Saturates at query length (does not wrap).
///
/// Returns updated SearchState. No-op if not in Typing state.
pub fn handle_cursor_right(state: SearchState) -> SearchState {
    match state {
        SearchState::Typing { query, cursor } => {
            let max_cursor = query.chars().count();
            SearchState::Typing {
                query,
                cursor: (cursor + 1).min(max_cursor),
            }
        }
        other => other,
    }
}

/// Activate search input mode.
/// From Inactive, starts typing an empty query. From Active, resumes
/// typing the submitted query with the cursor at its end.
///
/// No-op if already in Typing state.
pub fn activate_search_input(state: SearchState) -> SearchState {
    match state {
        SearchState::Inactive => SearchState::Typing {
            query: String::new(),
            cursor: 0,
        },
        SearchState::Active { query } => {
            let query = query.as_str().to_string();
            let cursor = query.chars().count();
            SearchState::Typing { query, cursor }
        }
        typing => typing,
    }
}

/// Cancel search input.
/// Transitions from Typing or Active to Inactive, clearing the filter.
pub fn cancel_search(_state: SearchState) -> SearchState {
    SearchState::Inactive
}

/// Submit search query.
/// Transitions from Typing to Active if query is non-empty, keeping it
/// verbatim. An empty query transitions to Inactive instead.
///
/// Returns updated SearchState. No-op if not in Typing state.
pub fn submit_search(state: SearchState) -> SearchState {
    match state {
        SearchState::Typing { query, .. } => match SearchQuery::new(query) {
            Some(query) => SearchState::Active { query },
            None => SearchState::Inactive,
        },
        other => other,
    }
}

// ===== Tests =====

#[cfg(test)]
#[path = "search_input_handler_tests.rs"]
mod tests;
