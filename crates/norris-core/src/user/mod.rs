//! User domain module.
//!
//! This module contains the user account model, registration input
//! validation, and the user repository trait.
//!
//! # Module Structure
//!
//! - `model`: user account domain model
//! - `draft`: registration form validation
//! - `repository`: user repository trait

mod draft;
mod model;
mod repository;

// Re-export public API
pub use draft::{MAX_USERNAME_LEN, MIN_PASSWORD_LEN, RegistrationDraft};
pub use model::User;
pub use repository::UserRepository;
