//! Infrastructure layer for norris.
//!
//! Concrete repository implementations (in-memory and directory-of-TOML-files
//! storage), platform path resolution, and configuration loading.

pub mod config_service;
pub mod memory;
pub mod memory_fact_repository;
pub mod paths;
pub mod toml_fact_repository;
pub mod toml_session_repository;
pub mod toml_token_repository;
pub mod toml_user_repository;

mod toml_dir;

pub use config_service::ConfigService;
pub use memory::{MemorySessionRepository, MemoryTokenRepository, MemoryUserRepository};
pub use memory_fact_repository::MemoryFactRepository;
pub use paths::{NorrisPaths, PathError};
pub use toml_fact_repository::TomlFactRepository;
pub use toml_session_repository::TomlSessionRepository;
pub use toml_token_repository::TomlTokenRepository;
pub use toml_user_repository::TomlUserRepository;
