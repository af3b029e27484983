//! In-memory record store.
//!
//! Holds committed users in insertion order. Mutations go through a narrow
//! API: `create`, `update`, `delete`. Missing ids are never an error; the
//! returned `bool` only reports whether anything changed.

pub mod seed;

use crate::model::{User, UserId, UserProfile};
use tracing::{debug, info};

/// Ordered collection of committed user records.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordStore {
    users: Vec<User>,
}

impl RecordStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store from existing records, keeping their order.
    ///
    /// Later duplicates of an id are dropped so ids stay unique.
    pub fn from_users(users: impl IntoIterator<Item = User>) -> Self {
        let mut store = Self::new();
        for user in users {
            if store.get(user.id()).is_some() {
                debug!(user_id = %user.id(), "Dropping duplicate seed id");
                continue;
            }
            store.users.push(user);
        }
        store
    }

    /// Create a store holding the bundled demo users.
    pub fn with_demo_users() -> Result<Self, serde_json::Error> {
        Ok(Self::from_users(seed::demo_users()?))
    }

    /// All records in insertion order.
    pub fn list(&self) -> &[User] {
        &self.users
    }

    /// Look up a record by id.
    pub fn get(&self, id: UserId) -> Option<&User> {
        self.users.iter().find(|user| user.id() == id)
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.users.len()
    }

    /// Whether the store holds no records.
    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    /// Id the next `create` will assign: max existing id + 1.
    pub fn next_id(&self) -> UserId {
        self.users
            .iter()
            .map(User::id)
            .max()
            .map_or(UserId::FIRST, UserId::next)
    }

    /// Append a new record with a freshly assigned id.
    pub fn create(&mut self, profile: UserProfile) -> UserId {
        let id = self.next_id();
        info!(user_id = %id, name = profile.name(), "Created user");
        self.users.push(User::new(id, profile));
        id
    }

    /// Replace the fields of the record with `id`.
    ///
    /// Returns `false` (and changes nothing) when no record matches.
    pub fn update(&mut self, id: UserId, profile: UserProfile) -> bool {
        match self.users.iter_mut().find(|user| user.id() == id) {
            Some(user) => {
                info!(user_id = %id, name = profile.name(), "Updated user");
                user.set_profile(profile);
                true
            }
            None => {
                debug!(user_id = %id, "Update ignored, no such user");
                false
            }
        }
    }

    /// Remove the record with `id`.
    ///
    /// Returns `false` (and changes nothing) when no record matches.
    pub fn delete(&mut self, id: UserId) -> bool {
        let before = self.users.len();
        self.users.retain(|user| user.id() != id);
        let removed = self.users.len() != before;
        if removed {
            info!(user_id = %id, "Deleted user");
        } else {
            debug!(user_id = %id, "Delete ignored, no such user");
        }
        removed
    }
}
