//! Demo records bundled with the binary.

use crate::model::{User, UserId, UserProfile, UserStatus};
use serde::Deserialize;

const DEMO_USERS_JSON: &str = include_str!("demo_users.json");

/// One record of the seed document. Initials are derived, not stored.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct SeedUser {
    id: UserId,
    name: String,
    email: String,
    status: UserStatus,
    date_of_birth: String,
}

impl From<SeedUser> for User {
    fn from(seed: SeedUser) -> Self {
        User::new(
            seed.id,
            UserProfile::new(seed.name, seed.email, seed.status, seed.date_of_birth),
        )
    }
}

/// Parse a seed document: a JSON array of user objects.
pub fn parse_seed(json: &str) -> Result<Vec<User>, serde_json::Error> {
    let seeds: Vec<SeedUser> = serde_json::from_str(json)?;
    Ok(seeds.into_iter().map(User::from).collect())
}

/// The eight bundled demo users.
pub fn demo_users() -> Result<Vec<User>, serde_json::Error> {
    parse_seed(DEMO_USERS_JSON)
}
