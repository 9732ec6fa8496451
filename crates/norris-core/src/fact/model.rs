//! Fact domain model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A short text record, optionally owned by a user.
///
/// This is the "pure" domain model that business logic operates on,
/// independent of any specific storage backend. The id is assigned by the
/// store at creation time and never changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fact {
    /// Unique, immutable identifier assigned by the store
    pub id: u64,
    /// The fact text (required, bounded length)
    pub text: String,
    /// Timestamp when the fact was created (set once)
    pub created_at: DateTime<Utc>,
    /// Timestamp when the fact was last modified
    pub updated_at: DateTime<Utc>,
    /// Weak back-reference to the owning user, if any
    #[serde(default)]
    pub user_id: Option<String>,
}

/// Input for creating a fact: everything except the store-assigned fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewFact {
    pub text: String,
    #[serde(default)]
    pub user_id: Option<String>,
}

impl NewFact {
    pub fn new(text: impl Into<String>, user_id: Option<String>) -> Self {
        Self {
            text: text.into(),
            user_id,
        }
    }
}
