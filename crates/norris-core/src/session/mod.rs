//! Session domain module.
//!
//! This module contains the client session entity and its repository trait.
//! A session is the per-client state that survives between requests: which
//! facts have already been shown, and which user (if any) is logged in.

mod model;
mod repository;

// Re-export public API
pub use model::Session;
pub use repository::SessionRepository;
