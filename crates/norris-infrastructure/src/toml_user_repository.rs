//! File-backed UserRepository implementation.
//!
//! One TOML file per user, named after the user's UUID. Username lookups
//! scan the directory; user counts here are small enough that an index would
//! be overkill.

use crate::toml_dir;
use async_trait::async_trait;
use norris_core::error::{NorrisError, Result};
use norris_core::user::{User, UserRepository};
use std::path::{Path, PathBuf};

/// User repository persisting one TOML file per user.
pub struct TomlUserRepository {
    base_dir: PathBuf,
}

impl TomlUserRepository {
    /// Creates a new repository rooted at `base_dir`, creating it if needed.
    pub async fn new(base_dir: impl AsRef<Path>) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        toml_dir::ensure_dir(&base_dir).await?;
        Ok(Self { base_dir })
    }
}

#[async_trait]
impl UserRepository for TomlUserRepository {
    async fn find_by_id(&self, user_id: &str) -> Result<Option<User>> {
        // User ids are server-minted UUIDs; anything else cannot be a file.
        if uuid::Uuid::parse_str(user_id).is_err() {
            return Ok(None);
        }
        toml_dir::read_entity(&self.base_dir, user_id).await
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>> {
        let users: Vec<User> = toml_dir::read_all_entities(&self.base_dir).await?;
        Ok(users.into_iter().find(|user| user.username == username))
    }

    async fn create(&self, user: &User) -> Result<()> {
        if self.find_by_username(&user.username).await?.is_some() {
            return Err(NorrisError::invalid_field(
                "username",
                "a user with that username already exists",
            ));
        }
        toml_dir::write_entity(&self.base_dir, &user.id, user).await?;
        tracing::info!("Registered user {}", user.username);
        Ok(())
    }

    async fn list_all(&self) -> Result<Vec<User>> {
        let mut users: Vec<User> = toml_dir::read_all_entities(&self.base_dir).await?;
        users.sort_by(|a, b| a.username.cmp(&b.username));
        Ok(users)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    async fn repo() -> (TempDir, TomlUserRepository) {
        let dir = TempDir::new().unwrap();
        let repo = TomlUserRepository::new(dir.path()).await.unwrap();
        (dir, repo)
    }

    #[tokio::test]
    async fn test_create_and_lookup() {
        let (_dir, repo) = repo().await;
        let user = User::new("chuck", "$argon2id$fake");
        repo.create(&user).await.unwrap();

        let by_id = repo.find_by_id(&user.id).await.unwrap().unwrap();
        assert_eq!(by_id.username, "chuck");
        let by_name = repo.find_by_username("chuck").await.unwrap().unwrap();
        assert_eq!(by_name.id, user.id);
        assert!(repo.find_by_username("nobody").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_duplicate_username_rejected() {
        let (_dir, repo) = repo().await;
        repo.create(&User::new("chuck", "h1")).await.unwrap();
        let err = repo.create(&User::new("chuck", "h2")).await.unwrap_err();
        assert!(err.is_validation());
        assert_eq!(repo.list_all().await.unwrap().len(), 1);
    }
}
