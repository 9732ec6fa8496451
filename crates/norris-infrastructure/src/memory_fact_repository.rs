//! In-memory fact repository.
//!
//! Backs the seeded, non-persistent deployment mode: the fact list lives in a
//! `RwLock`ed vector and ids come from an atomic counter. Seeded facts get
//! stable ids 1..=N in seed order, so repeated process starts see the same
//! catalogue.

use async_trait::async_trait;
use chrono::Utc;
use norris_core::error::Result;
use norris_core::fact::{Fact, FactRepository, NewFact};
use std::sync::RwLock;
use std::sync::atomic::{AtomicU64, Ordering};

/// Fact repository holding all records in process memory.
pub struct MemoryFactRepository {
    facts: RwLock<Vec<Fact>>,
    next_id: AtomicU64,
}

impl MemoryFactRepository {
    /// Creates an empty in-memory repository.
    pub fn new() -> Self {
        Self {
            facts: RwLock::new(Vec::new()),
            next_id: AtomicU64::new(1),
        }
    }

    /// Creates a repository pre-populated with one unowned fact per seed
    /// text, in order, with ids starting at 1.
    pub fn with_seed(seed_texts: &[String]) -> Self {
        let now = Utc::now();
        let facts: Vec<Fact> = seed_texts
            .iter()
            .enumerate()
            .map(|(index, text)| Fact {
                id: index as u64 + 1,
                text: text.clone(),
                created_at: now,
                updated_at: now,
                user_id: None,
            })
            .collect();
        let next_id = facts.len() as u64 + 1;
        Self {
            facts: RwLock::new(facts),
            next_id: AtomicU64::new(next_id),
        }
    }

    fn lock_read(&self) -> std::sync::RwLockReadGuard<'_, Vec<Fact>> {
        // Lock poisoning only happens if a writer panicked; propagating the
        // inner data is still sound for this append-only style store.
        self.facts.read().unwrap_or_else(|e| e.into_inner())
    }

    fn lock_write(&self) -> std::sync::RwLockWriteGuard<'_, Vec<Fact>> {
        self.facts.write().unwrap_or_else(|e| e.into_inner())
    }
}

impl Default for MemoryFactRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl FactRepository for MemoryFactRepository {
    async fn list_all(&self) -> Result<Vec<Fact>> {
        let mut facts = self.lock_read().clone();
        facts.sort_by_key(|fact| fact.id);
        Ok(facts)
    }

    async fn find_by_id(&self, id: u64) -> Result<Option<Fact>> {
        Ok(self.lock_read().iter().find(|fact| fact.id == id).cloned())
    }

    async fn create(&self, new_fact: NewFact) -> Result<Fact> {
        let now = Utc::now();
        let fact = Fact {
            id: self.next_id.fetch_add(1, Ordering::SeqCst),
            text: new_fact.text,
            created_at: now,
            updated_at: now,
            user_id: new_fact.user_id,
        };
        self.lock_write().push(fact.clone());
        Ok(fact)
    }

    async fn update(&self, id: u64, text: String) -> Result<Option<Fact>> {
        let mut facts = self.lock_write();
        match facts.iter_mut().find(|fact| fact.id == id) {
            Some(fact) => {
                fact.text = text;
                fact.updated_at = Utc::now();
                Ok(Some(fact.clone()))
            }
            None => Ok(None),
        }
    }

    async fn delete(&self, id: u64) -> Result<bool> {
        let mut facts = self.lock_write();
        let before = facts.len();
        facts.retain(|fact| fact.id != id);
        Ok(facts.len() != before)
    }
}
