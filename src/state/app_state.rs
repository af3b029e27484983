//! Application state and transitions.
//!
//! AppState is the root state type containing all UI state.
//! All state transitions are plain methods with no terminal I/O, so the
//! whole application can be driven from tests.

use crate::model::{FieldError, User, UserId};
use crate::state::crud::{CrudController, SaveOutcome};
use crate::state::search::{filter_users, SearchState};
use crate::state::search_input_handler;
use crate::state::session::{SessionState, ThemeMode};
use crate::store::RecordStore;
use tracing::{debug, info};

// ===== AppState =====

/// Application state. Pure data, no side effects.
///
/// # State Machine
///
/// - **Session**: logged in (main view) ⇄ logged out (login placeholder)
/// - **CRUD**: Browsing → Editing / CreatingNew → Browsing
///   (see [`CrudController`])
/// - **Search**: Inactive → Typing → Active → Inactive
///
/// The selection is an index into [`AppState::visible_users`] and is
/// clamped after every change to the store or the search term.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Committed records.
    store: RecordStore,

    /// Open/closed form and its draft.
    crud: CrudController,

    /// Current search state (inactive, typing, or active).
    pub search: SearchState,

    /// Cosmetic login flag.
    pub session: SessionState,

    /// Light or dark palette.
    pub theme: ThemeMode,

    /// Index of the selected card in the filtered view.
    selected: usize,

    /// Whether the help overlay is currently visible.
    pub help_visible: bool,

    /// Feedback for the last committed change, shown in the status bar
    /// until the next key press.
    status_message: Option<String>,
}

impl AppState {
    /// Create new AppState over `store` with default UI state.
    pub fn new(store: RecordStore) -> Self {
        Self {
            store,
            crud: CrudController::new(),
            search: SearchState::Inactive,
            session: SessionState::default(),
            theme: ThemeMode::default(),
            selected: 0,
            help_visible: false,
            status_message: None,
        }
    }

    /// Get immutable reference to the store.
    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    /// Get immutable reference to the CRUD controller.
    pub fn crud(&self) -> &CrudController {
        &self.crud
    }

    /// Mutable access to the CRUD controller (form editing).
    pub fn crud_mut(&mut self) -> &mut CrudController {
        &mut self.crud
    }

    /// Last status message, if any.
    pub fn status_message(&self) -> Option<&str> {
        self.status_message.as_deref()
    }

    /// Drop the status message once it has been seen.
    pub fn dismiss_status(&mut self) {
        self.status_message = None;
    }

    // ===== Filtered view and selection =====

    /// Users matching the current search term, in store order.
    pub fn visible_users(&self) -> Vec<&User> {
        filter_users(self.store.list(), self.search.term())
    }

    /// Index of the selected card, `None` when the view is empty.
    pub fn selected_index(&self) -> Option<usize> {
        let count = self.visible_users().len();
        (count > 0).then(|| self.selected.min(count - 1))
    }

    /// The selected user, if any.
    pub fn selected_user(&self) -> Option<&User> {
        let index = self.selected_index()?;
        self.visible_users().get(index).copied()
    }

    fn clamp_selection(&mut self) {
        let count = self.visible_users().len();
        self.selected = self.selected.min(count.saturating_sub(1));
    }

    /// Select the next card, stopping at the last.
    pub fn select_next(&mut self) {
        let count = self.visible_users().len();
        if count > 0 {
            self.selected = (self.selected + 1).min(count - 1);
        }
    }

    /// Select the previous card, stopping at the first.
    pub fn select_prev(&mut self) {
        self.clamp_selection();
        self.selected = self.selected.saturating_sub(1);
    }

    /// Select the first card.
    pub fn select_first(&mut self) {
        self.selected = 0;
    }

    /// Select the last card.
    pub fn select_last(&mut self) {
        self.selected = self.visible_users().len().saturating_sub(1);
    }

    /// Move the selection to the card of `id` if it is visible.
    fn select_id(&mut self, id: UserId) {
        if let Some(index) = self.visible_users().iter().position(|u| u.id() == id) {
            self.selected = index;
        }
    }

    // ===== Search =====

    /// Replace the search state and re-clamp the selection.
    pub fn set_search(&mut self, search: SearchState) {
        self.search = search;
        self.clamp_selection();
    }

    /// Focus the search bar.
    pub fn start_search(&mut self) {
        let search = search_input_handler::activate_search_input(self.search.clone());
        self.set_search(search);
    }

    /// Drop the search term.
    pub fn clear_search(&mut self) {
        let search = search_input_handler::cancel_search(self.search.clone());
        self.set_search(search);
    }

    // ===== CRUD commands =====

    /// Open the form on a blank draft.
    pub fn create_user(&mut self) {
        self.crud.create_user();
    }

    /// Open the form on the record with `id`. No-op when absent.
    pub fn edit_user(&mut self, id: UserId) {
        match self.store.get(id) {
            Some(user) => self.crud.edit_user(user),
            None => debug!(user_id = %id, "edit ignored, no such user"),
        }
    }

    /// Open the form on the selected user.
    pub fn edit_selected(&mut self) {
        if let Some(id) = self.selected_user().map(User::id) {
            self.edit_user(id);
        }
    }

    /// Delete the record with `id`. Returns whether anything was removed.
    pub fn delete_user(&mut self, id: UserId) -> bool {
        let name = self.store.get(id).map(|u| u.name().to_string());
        let removed = self.crud.delete(&mut self.store, id);
        if let (true, Some(name)) = (removed, name) {
            self.status_message = Some(format!("Deleted user {}", name));
        }
        self.clamp_selection();
        removed
    }

    /// Delete the selected user.
    pub fn delete_selected(&mut self) -> bool {
        match self.selected_user().map(User::id) {
            Some(id) => self.delete_user(id),
            None => false,
        }
    }

    /// Validate and commit the open form.
    ///
    /// On failure the error is shown on the form and the draft is kept.
    /// Returns `Ok(None)` when no form is open.
    pub fn save_form(&mut self) -> Result<Option<UserId>, FieldError> {
        let outcome = match self.crud.save(&mut self.store) {
            None => return Ok(None),
            Some(result) => result?,
        };

        let id = outcome.id();
        let name = self
            .store
            .get(id)
            .map(|u| u.name().to_string())
            .unwrap_or_default();
        self.status_message = Some(match outcome {
            SaveOutcome::Created(_) => format!("Created user {}", name),
            SaveOutcome::Updated(_) => format!("Updated user {}", name),
            SaveOutcome::Vanished(_) => format!("User {} no longer exists", id),
        });
        self.clamp_selection();
        self.select_id(id);
        Ok(Some(id))
    }

    /// Close the form, discarding the draft.
    pub fn cancel_form(&mut self) {
        self.crud.cancel();
    }

    // ===== Session and theme =====

    /// Hide the main view behind the login placeholder.
    pub fn logout(&mut self) {
        info!("Logged out");
        self.status_message = None;
        self.session.logout();
    }

    /// Return to the main view.
    pub fn login(&mut self) {
        info!("Logged in");
        self.session.login();
    }

    /// Switch between light and dark palettes.
    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggle();
        debug!(theme = %self.theme, "Theme toggled");
    }

    /// Show or hide the help overlay.
    pub fn toggle_help(&mut self) {
        self.help_visible = !self.help_visible;
    }
}

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod tests;
