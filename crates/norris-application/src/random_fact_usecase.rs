//! Random fact use case.
//!
//! Wires the pure selector to storage: load the session's seen list, select
//! against the live fact collection, persist the updated seen list back.
//!
//! Concurrent requests within one session race on the seen list; the write
//! that completes last wins, which is the accepted resolution for what is
//! effectively a single-client resource. The fact store is never mutated.

use norris_core::error::Result;
use norris_core::fact::{Fact, FactRepository};
use norris_core::selector::select_unseen;
use norris_core::session::{Session, SessionRepository};
use std::sync::Arc;

/// Use case serving one random, not-recently-repeated fact per call.
pub struct RandomFactUseCase {
    facts: Arc<dyn FactRepository>,
    sessions: Arc<dyn SessionRepository>,
}

impl RandomFactUseCase {
    pub fn new(facts: Arc<dyn FactRepository>, sessions: Arc<dyn SessionRepository>) -> Self {
        Self { facts, sessions }
    }

    /// Selects the next fact for a session.
    ///
    /// With `Some(id)`, the stored session is loaded, or recreated empty under
    /// the same id if it has expired. With `None` a fresh session is started.
    /// The (possibly new) session is returned alongside the fact so the caller
    /// can hold on to its id, like a browser holds a cookie.
    ///
    /// # Errors
    ///
    /// `NorrisError::Exhausted` when no facts exist at all.
    pub async fn next_fact(&self, session_id: Option<&str>) -> Result<(Fact, Session)> {
        let mut session = match session_id {
            Some(id) => self
                .sessions
                .find_by_id(id)
                .await?
                .unwrap_or_else(|| Session::with_id(id)),
            None => Session::new(),
        };

        let facts = self.facts.list_all().await?;
        let selection = select_unseen(&facts, &session.seen_fact_ids, &mut rand::thread_rng())?;

        session.set_seen_fact_ids(selection.seen_fact_ids);
        self.sessions.save(&session).await?;
        tracing::debug!(
            "Session {} has seen {}/{} facts",
            session.id,
            session.seen_fact_ids.len(),
            facts.len()
        );

        Ok((selection.fact, session))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use norris_core::fact::{FactDraft, NewFact};
    use norris_infrastructure::{MemoryFactRepository, MemorySessionRepository};
    use std::collections::HashSet;

    async fn seeded(n: usize) -> (Arc<MemoryFactRepository>, RandomFactUseCase) {
        let facts = Arc::new(MemoryFactRepository::new());
        for i in 0..n {
            facts
                .create(NewFact::new(format!("fact {}", i), None))
                .await
                .unwrap();
        }
        let usecase = RandomFactUseCase::new(facts.clone(), Arc::new(MemorySessionRepository::new()));
        (facts, usecase)
    }

    #[tokio::test]
    async fn test_no_repeats_within_one_cycle() {
        let (_facts, usecase) = seeded(5).await;
        let (first, session) = usecase.next_fact(None).await.unwrap();

        let mut shown = HashSet::from([first.id]);
        for _ in 1..5 {
            let (fact, _) = usecase.next_fact(Some(&session.id)).await.unwrap();
            assert!(shown.insert(fact.id), "fact {} repeated", fact.id);
        }
    }

    #[tokio::test]
    async fn test_exhaustion_resets_to_single_seen_id() {
        let (_facts, usecase) = seeded(2).await;
        let (_, session) = usecase.next_fact(None).await.unwrap();
        usecase.next_fact(Some(&session.id)).await.unwrap();

        // Third call: the seen list covered everything; it must now hold
        // exactly the fresh pick.
        let (fact, session) = usecase.next_fact(Some(&session.id)).await.unwrap();
        assert_eq!(session.seen_fact_ids, vec![fact.id]);
    }

    #[tokio::test]
    async fn test_empty_catalogue_is_exhausted() {
        let (_facts, usecase) = seeded(0).await;
        let err = usecase.next_fact(None).await.unwrap_err();
        assert!(err.is_exhausted());
    }

    #[tokio::test]
    async fn test_deleting_a_seen_fact_does_not_break_selection() {
        let facts = Arc::new(MemoryFactRepository::new());
        let fact_usecase = crate::FactUseCase::new(facts.clone());
        let a = fact_usecase
            .create(FactDraft::new("a"), None)
            .await
            .unwrap();
        fact_usecase.create(FactDraft::new("b"), None).await.unwrap();
        fact_usecase.create(FactDraft::new("c"), None).await.unwrap();

        let usecase = RandomFactUseCase::new(facts, Arc::new(MemorySessionRepository::new()));
        let (_, session) = usecase.next_fact(None).await.unwrap();

        // Delete one fact the session may or may not have seen, then keep
        // selecting; no call may fail or return the deleted fact.
        fact_usecase.delete(a.id).await.unwrap();
        for _ in 0..4 {
            let (fact, _) = usecase.next_fact(Some(&session.id)).await.unwrap();
            assert_ne!(fact.id, a.id);
        }
    }

    #[tokio::test]
    async fn test_expired_session_id_is_recreated() {
        let (_facts, usecase) = seeded(1).await;
        let stale = norris_core::session::Session::new();
        let (fact, session) = usecase.next_fact(Some(&stale.id)).await.unwrap();
        assert_eq!(session.id, stale.id);
        assert_eq!(session.seen_fact_ids, vec![fact.id]);
    }
}
