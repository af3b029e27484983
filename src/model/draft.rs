//! Draft record bound to the open user form.

use crate::model::user::{derive_initials, User, UserId, UserStatus};

/// An in-progress, unvalidated copy of a user record.
///
/// `id` is `None` for a record that has not been committed yet. Initials
/// are not stored: [`Draft::initials`] recomputes them from the current
/// name on every call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Draft {
    /// Id of the record being edited, `None` when creating.
    pub id: Option<UserId>,
    /// Name as typed.
    pub name: String,
    /// Email as typed.
    pub email: String,
    /// Selected status.
    pub status: UserStatus,
    /// Date of birth as typed (expected `YYYY-MM-DD`).
    pub date_of_birth: String,
}

impl Draft {
    /// Blank template for a new record.
    pub fn blank() -> Self {
        Self::default()
    }

    /// Copy of an existing record, bound to its id.
    pub fn from_user(user: &User) -> Self {
        Self {
            id: Some(user.id()),
            name: user.name().to_string(),
            email: user.email().to_string(),
            status: user.status(),
            date_of_birth: user.date_of_birth().to_string(),
        }
    }

    /// Initials derived from the current name.
    pub fn initials(&self) -> String {
        derive_initials(&self.name)
    }

    /// Whether this draft will create a new record on save.
    pub fn is_new(&self) -> bool {
        self.id.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::user::UserProfile;

    #[test]
    fn blank_draft_is_new_and_active() {
        let draft = Draft::blank();
        assert!(draft.is_new());
        assert_eq!(draft.status, UserStatus::Active);
        assert_eq!(draft.name, "");
        assert_eq!(draft.initials(), "");
    }

    #[test]
    fn draft_from_user_copies_fields() {
        let id = UserId::new(3).unwrap();
        let user = User::new(
            id,
            UserProfile::new("Jane Smith", "jane@example.com", UserStatus::Locked, "1988-10-22"),
        );
        let draft = Draft::from_user(&user);

        assert_eq!(draft.id, Some(id));
        assert_eq!(draft.name, "Jane Smith");
        assert_eq!(draft.email, "jane@example.com");
        assert_eq!(draft.status, UserStatus::Locked);
        assert_eq!(draft.date_of_birth, "1988-10-22");
        assert!(!draft.is_new());
    }

    #[test]
    fn initials_track_every_name_edit() {
        let mut draft = Draft::blank();
        let mut seen = Vec::new();
        for ch in "Ann Lee".chars() {
            draft.name.push(ch);
            seen.push(draft.initials());
        }
        assert_eq!(seen, vec!["A", "A", "A", "A", "AL", "AL", "AL"]);

        draft.name.truncate(3);
        assert_eq!(draft.initials(), "A", "undo must not leave stale initials");
    }
}
