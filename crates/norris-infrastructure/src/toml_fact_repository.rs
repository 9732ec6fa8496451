//! File-backed FactRepository implementation.
//!
//! Directory structure:
//! ```text
//! base_dir/
//! ├── 1.toml
//! ├── 2.toml
//! └── next_id
//! ```
//!
//! Each fact is one TOML file named after its id; `next_id` holds the next
//! identifier to assign. The process model is single-writer (one request at a
//! time per invocation), so the counter needs no file locking.

use crate::toml_dir;
use async_trait::async_trait;
use chrono::Utc;
use norris_core::error::{NorrisError, Result};
use norris_core::fact::{Fact, FactRepository, NewFact};
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::sync::Mutex;

const NEXT_ID_FILE: &str = "next_id";

/// Fact repository persisting one TOML file per fact.
pub struct TomlFactRepository {
    base_dir: PathBuf,
    // Serializes id allocation within the process.
    id_lock: Mutex<()>,
}

impl TomlFactRepository {
    /// Creates a new repository rooted at `base_dir`, creating it if needed.
    pub async fn new(base_dir: impl AsRef<Path>) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        toml_dir::ensure_dir(&base_dir).await?;
        Ok(Self {
            base_dir,
            id_lock: Mutex::new(()),
        })
    }

    /// Seeds the store with one unowned fact per text, but only when the
    /// store is empty. Used on first run so a fresh install has something to
    /// serve.
    pub async fn seed_if_empty(&self, seed_texts: &[String]) -> Result<usize> {
        if !self.list_all().await?.is_empty() {
            return Ok(0);
        }
        for text in seed_texts {
            self.create(NewFact::new(text.clone(), None)).await?;
        }
        tracing::info!("Seeded fact store with {} facts", seed_texts.len());
        Ok(seed_texts.len())
    }

    async fn allocate_id(&self) -> Result<u64> {
        let _guard = self.id_lock.lock().await;
        let path = self.base_dir.join(NEXT_ID_FILE);
        let next_id = match fs::read_to_string(&path).await {
            Ok(content) => content
                .trim()
                .parse::<u64>()
                .map_err(|e| NorrisError::data_access(format!("corrupt id counter: {}", e)))?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => 1,
            Err(e) => {
                return Err(NorrisError::io(format!(
                    "failed to read id counter {:?}: {}",
                    path, e
                )));
            }
        };
        fs::write(&path, format!("{}\n", next_id + 1))
            .await
            .map_err(|e| NorrisError::io(format!("failed to write id counter: {}", e)))?;
        Ok(next_id)
    }
}

#[async_trait]
impl FactRepository for TomlFactRepository {
    async fn list_all(&self) -> Result<Vec<Fact>> {
        let mut facts: Vec<Fact> = toml_dir::read_all_entities(&self.base_dir).await?;
        facts.sort_by_key(|fact| fact.id);
        Ok(facts)
    }

    async fn find_by_id(&self, id: u64) -> Result<Option<Fact>> {
        toml_dir::read_entity(&self.base_dir, &id.to_string()).await
    }

    async fn create(&self, new_fact: NewFact) -> Result<Fact> {
        let now = Utc::now();
        let fact = Fact {
            id: self.allocate_id().await?,
            text: new_fact.text,
            created_at: now,
            updated_at: now,
            user_id: new_fact.user_id,
        };
        toml_dir::write_entity(&self.base_dir, &fact.id.to_string(), &fact).await?;
        tracing::debug!("Created fact {}", fact.id);
        Ok(fact)
    }

    async fn update(&self, id: u64, text: String) -> Result<Option<Fact>> {
        let Some(mut fact) = self.find_by_id(id).await? else {
            return Ok(None);
        };
        fact.text = text;
        fact.updated_at = Utc::now();
        toml_dir::write_entity(&self.base_dir, &id.to_string(), &fact).await?;
        Ok(Some(fact))
    }

    async fn delete(&self, id: u64) -> Result<bool> {
        let deleted = toml_dir::delete_entity(&self.base_dir, &id.to_string()).await?;
        if deleted {
            tracing::debug!("Deleted fact {}", id);
        }
        Ok(deleted)
    }
}
