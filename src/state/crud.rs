//! CRUD controller state machine.
//!
//! ```text
//! Browsing --create_user--> CreatingNew
//! Browsing --edit_user----> Editing
//! Editing | CreatingNew --cancel--> Browsing
//! Editing | CreatingNew --save(ok)--> Browsing
//! Editing | CreatingNew --save(err)--> unchanged, error on form
//! Browsing --delete--> Browsing
//! ```
//!
//! Commands that do not apply to the current mode are ignored.

use crate::model::{validate, Draft, FieldError, User, UserId};
use crate::state::form::FormState;
use crate::store::RecordStore;
use tracing::debug;

/// Controller mode.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CrudMode {
    /// List and search, form closed.
    #[default]
    Browsing,
    /// Form open on an existing record.
    Editing {
        /// The open form, draft bound to the record's id.
        form: FormState,
    },
    /// Form open on a blank draft.
    CreatingNew {
        /// The open form, draft without an id.
        form: FormState,
    },
}

/// Result of a successful save.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    /// A new record was appended with this id.
    Created(UserId),
    /// The record with this id was replaced.
    Updated(UserId),
    /// The record being edited no longer exists; nothing changed.
    Vanished(UserId),
}

impl SaveOutcome {
    /// Id the save was about.
    pub fn id(self) -> UserId {
        match self {
            SaveOutcome::Created(id) | SaveOutcome::Updated(id) | SaveOutcome::Vanished(id) => id,
        }
    }
}

/// Orchestrates the user form and dispatches intents to the store.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CrudController {
    mode: CrudMode,
}

impl CrudController {
    /// Start in `Browsing`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current mode.
    pub fn mode(&self) -> &CrudMode {
        &self.mode
    }

    /// Whether the form is closed.
    pub fn is_browsing(&self) -> bool {
        matches!(self.mode, CrudMode::Browsing)
    }

    /// The open form, if any.
    pub fn form(&self) -> Option<&FormState> {
        match &self.mode {
            CrudMode::Browsing => None,
            CrudMode::Editing { form } | CrudMode::CreatingNew { form } => Some(form),
        }
    }

    /// Mutable access to the open form, if any.
    pub fn form_mut(&mut self) -> Option<&mut FormState> {
        match &mut self.mode {
            CrudMode::Browsing => None,
            CrudMode::Editing { form } | CrudMode::CreatingNew { form } => Some(form),
        }
    }

    /// Open the form on a blank draft.
    pub fn create_user(&mut self) {
        if !self.is_browsing() {
            debug!("create_user ignored, form already open");
            return;
        }
        debug!("Opening form for new user");
        self.mode = CrudMode::CreatingNew {
            form: FormState::new(Draft::blank()),
        };
    }

    /// Open the form on a copy of `user`.
    pub fn edit_user(&mut self, user: &User) {
        if !self.is_browsing() {
            debug!(user_id = %user.id(), "edit_user ignored, form already open");
            return;
        }
        debug!(user_id = %user.id(), "Opening form to edit user");
        self.mode = CrudMode::Editing {
            form: FormState::new(Draft::from_user(user)),
        };
    }

    /// Close the form, discarding the draft.
    pub fn cancel(&mut self) {
        if !self.is_browsing() {
            debug!("Form cancelled, draft discarded");
        }
        self.mode = CrudMode::Browsing;
    }

    /// Validate the open draft and commit it.
    ///
    /// On success the form closes. On failure the error is attached to the
    /// form, the draft is kept and the store is untouched. Returns `None`
    /// when no form is open.
    pub fn save(&mut self, store: &mut RecordStore) -> Option<Result<SaveOutcome, FieldError>> {
        let form = self.form_mut()?;

        let validated = match validate(form.draft()) {
            Ok(validated) => validated,
            Err(error) => {
                debug!(%error, "Save rejected by validation");
                form.set_error(error);
                return Some(Err(error));
            }
        };

        let outcome = match validated.id {
            Some(id) => {
                if store.update(id, validated.profile) {
                    SaveOutcome::Updated(id)
                } else {
                    SaveOutcome::Vanished(id)
                }
            }
            None => SaveOutcome::Created(store.create(validated.profile)),
        };

        self.mode = CrudMode::Browsing;
        Some(Ok(outcome))
    }

    /// Delete a record. Only applies while browsing.
    ///
    /// Returns whether a record was removed.
    pub fn delete(&mut self, store: &mut RecordStore, id: UserId) -> bool {
        if !self.is_browsing() {
            debug!(user_id = %id, "delete ignored, form open");
            return false;
        }
        store.delete(id)
    }
}
