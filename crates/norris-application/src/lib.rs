//! Application layer for norris.
//!
//! This crate provides use case implementations that coordinate between
//! domain and infrastructure layers to implement application-level business
//! logic: fact CRUD, non-repeating random selection, authentication, and the
//! token-gated API facade.

pub mod api_usecase;
pub mod auth_usecase;
pub mod fact_usecase;
pub mod random_fact_usecase;

pub use api_usecase::{ApiUseCase, status_code_for};
pub use auth_usecase::AuthUseCase;
pub use fact_usecase::FactUseCase;
pub use random_fact_usecase::RandomFactUseCase;
