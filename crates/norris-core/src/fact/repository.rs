//! Fact repository trait.
//!
//! Defines the interface for fact persistence operations.

use super::model::{Fact, NewFact};
use crate::error::Result;

/// An abstract repository for managing fact persistence.
///
/// This trait defines the contract for persisting and retrieving facts,
/// decoupling the application's core logic from the specific storage mechanism
/// (e.g., in-memory list, TOML files, database). The earliest static-list
/// deployments and the file-backed ones are just two implementations of this
/// same interface.
///
/// # Implementation Notes
///
/// Implementations assign ids and creation/update timestamps themselves;
/// callers never pick ids. Concurrent access must be tolerated but no
/// cross-call transaction is required.
#[async_trait::async_trait]
pub trait FactRepository: Send + Sync {
    /// Retrieves all facts, ordered by ascending id.
    async fn list_all(&self) -> Result<Vec<Fact>>;

    /// Finds a fact by its id.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Fact))`: fact found
    /// - `Ok(None)`: no fact with that id
    /// - `Err(_)`: storage failure
    async fn find_by_id(&self, id: u64) -> Result<Option<Fact>>;

    /// Persists a new fact, assigning its id and timestamps.
    ///
    /// # Returns
    ///
    /// The stored fact, including its freshly assigned id.
    async fn create(&self, new_fact: NewFact) -> Result<Fact>;

    /// Replaces the text of an existing fact, bumping `updated_at`.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Fact))`: the updated fact
    /// - `Ok(None)`: no fact with that id
    async fn update(&self, id: u64, text: String) -> Result<Option<Fact>>;

    /// Deletes a fact by id.
    ///
    /// # Returns
    ///
    /// `true` if a fact was deleted, `false` if no fact had that id.
    async fn delete(&self, id: u64) -> Result<bool>;
}
