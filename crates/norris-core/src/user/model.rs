//! User account domain model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A registered user account.
///
/// The password is never stored; only its Argon2id hash (a PHC string) is
/// kept. Facts hold a weak back-reference to `id`; deleting a user does not
/// cascade to their facts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique user identifier (UUID format)
    pub id: String,
    /// Unique login name
    pub username: String,
    /// Argon2id password hash in PHC string format
    pub password_hash: String,
    /// Inactive users cannot authenticate
    #[serde(default = "default_is_active")]
    pub is_active: bool,
    /// Timestamp when the account was created
    pub created_at: DateTime<Utc>,
}

fn default_is_active() -> bool {
    true
}

impl User {
    /// Creates a new active user with a fresh id.
    pub fn new(username: impl Into<String>, password_hash: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            username: username.into(),
            password_hash: password_hash.into(),
            is_active: true,
            created_at: Utc::now(),
        }
    }
}
