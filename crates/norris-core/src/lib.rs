//! Core domain layer for norris.
//!
//! Holds the domain models (facts, users, sessions, tokens), the repository
//! traits that decouple them from storage, input validation, and the one
//! genuinely original piece of logic: non-repeating random fact selection.

pub mod auth;
pub mod config;
pub mod error;
pub mod fact;
pub mod selector;
pub mod session;
pub mod user;

// Re-export common error type
pub use error::{FieldError, NorrisError, Result};
