//! Session domain model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Per-client session state.
///
/// A session contains:
/// - The ids of facts already shown to this client (the seen list)
/// - The logged-in user's id, if any
/// - Timestamps for creation and last update
///
/// The seen list grows by one id per random selection and is reset exactly
/// when it covers all currently existing fact ids at selection time. It may
/// reference ids of facts that have since been deleted; such ids are ignored
/// by the selector and cleared on the next reset.
///
/// Sessions are effectively single-client: concurrent requests in the same
/// session resolve read-modify-write races as last-write-wins.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    /// Unique session identifier (UUID format)
    pub id: String,
    /// Ids of facts already shown to this session
    #[serde(default)]
    pub seen_fact_ids: Vec<u64>,
    /// Id of the logged-in user, if any
    #[serde(default)]
    pub user_id: Option<String>,
    /// Timestamp when the session was created
    pub created_at: DateTime<Utc>,
    /// Timestamp when the session was last updated
    pub updated_at: DateTime<Utc>,
}

impl Session {
    /// Creates a fresh, anonymous session with an empty seen list.
    pub fn new() -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4().to_string(),
            seen_fact_ids: Vec::new(),
            user_id: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Creates a session with a caller-chosen id.
    ///
    /// Used when the client already holds a session identifier (e.g., from a
    /// previous run) but the stored record has expired or been deleted.
    pub fn with_id(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::new()
        }
    }

    /// Replaces the seen list and bumps `updated_at`.
    pub fn set_seen_fact_ids(&mut self, seen_fact_ids: Vec<u64>) {
        self.seen_fact_ids = seen_fact_ids;
        self.touch();
    }

    /// Marks a user as logged in on this session.
    pub fn login(&mut self, user_id: impl Into<String>) {
        self.user_id = Some(user_id.into());
        self.touch();
    }

    /// Clears the logged-in user. The seen list survives logout.
    pub fn logout(&mut self) {
        self.user_id = None;
        self.touch();
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_is_anonymous_and_unseen() {
        let session = Session::new();
        assert!(session.seen_fact_ids.is_empty());
        assert!(session.user_id.is_none());
        assert!(!session.id.is_empty());
    }

    #[test]
    fn test_sessions_get_unique_ids() {
        assert_ne!(Session::new().id, Session::new().id);
    }

    #[test]
    fn test_logout_keeps_seen_list() {
        let mut session = Session::new();
        session.set_seen_fact_ids(vec![1, 2]);
        session.login("user-1");
        session.logout();
        assert!(session.user_id.is_none());
        assert_eq!(session.seen_fact_ids, vec![1, 2]);
    }
}
