//! Fact domain module.
//!
//! This module contains the fact record domain model, input validation,
//! and the fact repository trait.
//!
//! # Module Structure
//!
//! - `model`: Fact domain model and creation input
//! - `draft`: validated user input for create/update operations
//! - `repository`: fact repository trait

mod draft;
mod model;
mod repository;

// Re-export public API
pub use draft::{FactDraft, MAX_FACT_TEXT_LEN};
pub use model::{Fact, NewFact};
pub use repository::FactRepository;
