//! Fact CRUD use case.
//!
//! Orchestrates validation, ownership attribution, and NotFound mapping over
//! the injected fact repository. Capability checks (is this caller allowed to
//! write) are the responsibility of the boundary invoking these operations;
//! the operations themselves never ask who is logged in.

use norris_core::error::{NorrisError, Result};
use norris_core::fact::{Fact, FactDraft, FactRepository, NewFact};
use std::sync::Arc;

/// Use case for listing, reading, and mutating facts.
pub struct FactUseCase {
    facts: Arc<dyn FactRepository>,
}

impl FactUseCase {
    pub fn new(facts: Arc<dyn FactRepository>) -> Self {
        Self { facts }
    }

    /// Lists all facts, ordered by ascending id.
    pub async fn list(&self) -> Result<Vec<Fact>> {
        self.facts.list_all().await
    }

    /// Resolves an id to a fact.
    ///
    /// # Errors
    ///
    /// `NorrisError::NotFound` when no fact has that id; storage faults are
    /// never surfaced as unhandled panics.
    pub async fn get(&self, id: u64) -> Result<Fact> {
        self.facts
            .find_by_id(id)
            .await?
            .ok_or_else(|| NorrisError::not_found("fact", id))
    }

    /// Validates and persists a new fact, attributing ownership to the acting
    /// user when one is present.
    ///
    /// # Returns
    ///
    /// The stored fact, including its store-assigned id, so callers can
    /// navigate to it.
    pub async fn create(&self, draft: FactDraft, acting_user_id: Option<String>) -> Result<Fact> {
        let text = draft.validate()?;
        let fact = self.facts.create(NewFact::new(text, acting_user_id)).await?;
        tracing::info!("Created fact {}", fact.id);
        Ok(fact)
    }

    /// Validates and applies a text change to an existing fact.
    pub async fn update(&self, id: u64, draft: FactDraft) -> Result<Fact> {
        let text = draft.validate()?;
        self.facts
            .update(id, text)
            .await?
            .ok_or_else(|| NorrisError::not_found("fact", id))
    }

    /// Deletes a fact.
    ///
    /// # Errors
    ///
    /// `NorrisError::NotFound` when no fact has that id.
    pub async fn delete(&self, id: u64) -> Result<()> {
        if self.facts.delete(id).await? {
            tracing::info!("Deleted fact {}", id);
            Ok(())
        } else {
            Err(NorrisError::not_found("fact", id))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use norris_infrastructure::MemoryFactRepository;

    fn usecase() -> FactUseCase {
        FactUseCase::new(Arc::new(MemoryFactRepository::new()))
    }

    #[tokio::test]
    async fn test_create_returns_id_for_navigation() {
        let usecase = usecase();
        let fact = usecase
            .create(FactDraft::new("Chuck Norris can divide by zero."), None)
            .await
            .unwrap();
        assert_eq!(usecase.get(fact.id).await.unwrap().text, fact.text);
    }

    #[tokio::test]
    async fn test_create_attributes_owner() {
        let usecase = usecase();
        let fact = usecase
            .create(FactDraft::new("fact"), Some("user-1".to_string()))
            .await
            .unwrap();
        assert_eq!(fact.user_id.as_deref(), Some("user-1"));
    }

    #[tokio::test]
    async fn test_empty_text_fails_and_store_is_untouched() {
        let usecase = usecase();
        let err = usecase
            .create(FactDraft::new("   "), None)
            .await
            .unwrap_err();
        assert!(err.is_validation());
        assert!(usecase.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_get_missing_is_not_found() {
        let err = usecase().get(42).await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_update_validates_and_maps_missing() {
        let usecase = usecase();
        let fact = usecase.create(FactDraft::new("original"), None).await.unwrap();

        let updated = usecase
            .update(fact.id, FactDraft::new("edited"))
            .await
            .unwrap();
        assert_eq!(updated.text, "edited");

        let err = usecase
            .update(fact.id, FactDraft::new(""))
            .await
            .unwrap_err();
        assert!(err.is_validation());

        let err = usecase
            .update(999, FactDraft::new("edited"))
            .await
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_delete_missing_is_not_found() {
        let usecase = usecase();
        let fact = usecase.create(FactDraft::new("fact"), None).await.unwrap();
        usecase.delete(fact.id).await.unwrap();
        assert!(usecase.delete(fact.id).await.unwrap_err().is_not_found());
    }
}
