//! File-backed TokenRepository implementation.
//!
//! One TOML file per issued token, named after the token value itself.
//! Token values are minted as ASCII alphanumerics, so they are safe as file
//! stems; anything else presented by a caller simply cannot match a file.

use crate::toml_dir;
use async_trait::async_trait;
use norris_core::auth::{ApiToken, TokenRepository};
use norris_core::error::Result;
use std::path::{Path, PathBuf};

/// Token repository persisting one TOML file per issued token.
pub struct TomlTokenRepository {
    base_dir: PathBuf,
}

impl TomlTokenRepository {
    /// Creates a new repository rooted at `base_dir`, creating it if needed.
    pub async fn new(base_dir: impl AsRef<Path>) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        toml_dir::ensure_dir(&base_dir).await?;
        Ok(Self { base_dir })
    }

    fn is_valid_value(token: &str) -> bool {
        !token.is_empty() && token.chars().all(|c| c.is_ascii_alphanumeric())
    }
}

#[async_trait]
impl TokenRepository for TomlTokenRepository {
    async fn find_by_value(&self, token: &str) -> Result<Option<ApiToken>> {
        if !Self::is_valid_value(token) {
            return Ok(None);
        }
        toml_dir::read_entity(&self.base_dir, token).await
    }

    async fn save(&self, token: &ApiToken) -> Result<()> {
        toml_dir::write_entity(&self.base_dir, &token.token, token).await
    }

    async fn delete(&self, token: &str) -> Result<()> {
        if Self::is_valid_value(token) {
            toml_dir::delete_entity(&self.base_dir, token).await?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_save_find_delete_roundtrip() {
        let dir = TempDir::new().unwrap();
        let repo = TomlTokenRepository::new(dir.path()).await.unwrap();

        let token = ApiToken::issue("user-1", None);
        repo.save(&token).await.unwrap();

        let loaded = repo.find_by_value(&token.token).await.unwrap().unwrap();
        assert_eq!(loaded.user_id, "user-1");

        repo.delete(&token.token).await.unwrap();
        assert!(repo.find_by_value(&token.token).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_non_alphanumeric_values_never_match() {
        let dir = TempDir::new().unwrap();
        let repo = TomlTokenRepository::new(dir.path()).await.unwrap();
        assert!(repo.find_by_value("../../etc/passwd").await.unwrap().is_none());
        assert!(repo.find_by_value("").await.unwrap().is_none());
    }
}
