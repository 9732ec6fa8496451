//! Authentication primitives.
//!
//! Password hashing and bearer tokens for the programmatic API. The
//! capability checks themselves (is this caller allowed to do X) live at the
//! application boundary; this module only provides the building blocks.
//!
//! # Module Structure
//!
//! - `password`: Argon2id hashing and verification
//! - `token`: bearer token model, minting, and repository trait

mod password;
mod token;

// Re-export public API
pub use password::{hash_password, verify_password};
pub use token::{ApiToken, TokenRepository, mint_token_value};
