//! UI state machine (pure).
//!
//! All state transitions are testable without a terminal.

pub mod app_state;
pub mod crud;
pub mod form;
pub mod form_input_handler;
pub mod search;
pub mod search_input_handler;
pub mod session;

// Re-export for convenience
pub use app_state::AppState;
pub use crud::{CrudController, CrudMode, SaveOutcome};
pub use form::{FormField, FormState};
pub use form_input_handler::{handle_form_key, FormIntent};
pub use search::{filter_users, SearchQuery, SearchState};
pub use session::{SessionState, ThemeMode, UnknownTheme};
