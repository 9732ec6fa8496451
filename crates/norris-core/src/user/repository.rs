//! User repository trait.

use super::model::User;
use crate::error::Result;
use async_trait::async_trait;

/// An abstract repository for managing user persistence.
///
/// Username uniqueness is a store invariant: `create` must reject a user
/// whose username (case-sensitive) already exists.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Finds a user by id.
    async fn find_by_id(&self, user_id: &str) -> Result<Option<User>>;

    /// Finds a user by username.
    async fn find_by_username(&self, username: &str) -> Result<Option<User>>;

    /// Persists a new user.
    ///
    /// # Errors
    ///
    /// Returns a `Validation` error on a duplicate username, so callers can
    /// surface it as a field-level message.
    async fn create(&self, user: &User) -> Result<()>;

    /// Lists all users.
    async fn list_all(&self) -> Result<Vec<User>>;
}
