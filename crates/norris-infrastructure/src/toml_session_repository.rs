//! File-backed SessionRepository implementation.
//!
//! One TOML file per session, named after the session's UUID.

use crate::toml_dir;
use async_trait::async_trait;
use norris_core::error::Result;
use norris_core::session::{Session, SessionRepository};
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// Session repository persisting one TOML file per session.
pub struct TomlSessionRepository {
    base_dir: PathBuf,
}

impl TomlSessionRepository {
    /// Creates a new repository rooted at `base_dir`, creating it if needed.
    pub async fn new(base_dir: impl AsRef<Path>) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        toml_dir::ensure_dir(&base_dir).await?;
        Ok(Self { base_dir })
    }

    // Session ids come from clients; only UUID-shaped ids map to filenames.
    fn file_stem(session_id: &str) -> Option<String> {
        Uuid::parse_str(session_id)
            .ok()
            .map(|uuid| uuid.to_string())
    }
}

#[async_trait]
impl SessionRepository for TomlSessionRepository {
    async fn find_by_id(&self, session_id: &str) -> Result<Option<Session>> {
        match Self::file_stem(session_id) {
            Some(stem) => toml_dir::read_entity(&self.base_dir, &stem).await,
            None => Ok(None),
        }
    }

    async fn save(&self, session: &Session) -> Result<()> {
        let stem = Self::file_stem(&session.id).ok_or_else(|| {
            norris_core::NorrisError::data_access(format!(
                "session id is not a UUID: {}",
                session.id
            ))
        })?;
        toml_dir::write_entity(&self.base_dir, &stem, session).await
    }

    async fn delete(&self, session_id: &str) -> Result<()> {
        if let Some(stem) = Self::file_stem(session_id) {
            toml_dir::delete_entity(&self.base_dir, &stem).await?;
        }
        Ok(())
    }

    async fn list_all(&self) -> Result<Vec<Session>> {
        toml_dir::read_all_entities(&self.base_dir).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_save_and_reload_session() {
        let dir = TempDir::new().unwrap();
        let repo = TomlSessionRepository::new(dir.path()).await.unwrap();

        let mut session = Session::new();
        session.set_seen_fact_ids(vec![3, 1, 2]);
        session.login("user-1");
        repo.save(&session).await.unwrap();

        let loaded = repo.find_by_id(&session.id).await.unwrap().unwrap();
        assert_eq!(loaded.seen_fact_ids, vec![3, 1, 2]);
        assert_eq!(loaded.user_id.as_deref(), Some("user-1"));
    }

    #[tokio::test]
    async fn test_missing_and_malformed_ids_find_nothing() {
        let dir = TempDir::new().unwrap();
        let repo = TomlSessionRepository::new(dir.path()).await.unwrap();

        let missing = Session::new();
        assert!(repo.find_by_id(&missing.id).await.unwrap().is_none());
        assert!(repo.find_by_id("../escape").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_save_overwrites_previous_state() {
        let dir = TempDir::new().unwrap();
        let repo = TomlSessionRepository::new(dir.path()).await.unwrap();

        let mut session = Session::new();
        session.set_seen_fact_ids(vec![1]);
        repo.save(&session).await.unwrap();
        session.set_seen_fact_ids(vec![1, 2]);
        repo.save(&session).await.unwrap();

        let loaded = repo.find_by_id(&session.id).await.unwrap().unwrap();
        assert_eq!(loaded.seen_fact_ids, vec![1, 2]);
        assert_eq!(repo.list_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_delete_is_idempotent() {
        let dir = TempDir::new().unwrap();
        let repo = TomlSessionRepository::new(dir.path()).await.unwrap();
        let session = Session::new();
        repo.save(&session).await.unwrap();
        repo.delete(&session.id).await.unwrap();
        repo.delete(&session.id).await.unwrap();
        assert!(repo.find_by_id(&session.id).await.unwrap().is_none());
    }
}
