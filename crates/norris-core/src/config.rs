//! Application configuration types.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Which fact store backs the application.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum StorageBackend {
    /// Volatile in-memory store seeded from `seed_facts`
    Memory,
    /// TOML files under the data directory
    File,
}

impl Default for StorageBackend {
    fn default() -> Self {
        StorageBackend::File
    }
}

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct RootConfig {
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub auth: AuthConfig,
    /// Facts seeded into the in-memory store (and into an empty file store on
    /// first run). Defaults to the classic list.
    #[serde(default = "default_seed_facts")]
    pub seed_facts: Vec<String>,
}

impl Default for RootConfig {
    fn default() -> Self {
        Self {
            storage: StorageConfig::default(),
            auth: AuthConfig::default(),
            seed_facts: default_seed_facts(),
        }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, Default)]
pub struct StorageConfig {
    #[serde(default)]
    pub backend: StorageBackend,
    /// Overrides the platform data directory when set.
    #[serde(default)]
    pub data_dir: Option<PathBuf>,
}

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct AuthConfig {
    /// API token lifetime in minutes; `None` disables expiry.
    #[serde(default = "default_token_ttl_minutes")]
    pub token_ttl_minutes: Option<i64>,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            token_ttl_minutes: default_token_ttl_minutes(),
        }
    }
}

fn default_token_ttl_minutes() -> Option<i64> {
    Some(60 * 24)
}

fn default_seed_facts() -> Vec<String> {
    [
        "There are 1424 things in an average room Chuck Norris could kill you with. Including the room itself.",
        "Chuck Norris is the international standard unit of pain.",
        "Chuck Norris once won an underwater breathing contest. Against a fish.",
        "Chuck Norris' tears cure cancer. Too bad he has never cried.",
        "Chuck Norris donates blood often. It is rarely his own.",
        "People wear Superman pajamas. Superman wears Chuck Norris pajamas.",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_gets_defaults() {
        let config: RootConfig = toml::from_str("").unwrap();
        assert_eq!(config.storage.backend, StorageBackend::File);
        assert_eq!(config.auth.token_ttl_minutes, Some(60 * 24));
        assert_eq!(config.seed_facts.len(), 6);
    }

    #[test]
    fn test_backend_round_trips_as_snake_case() {
        let toml_str = "[storage]\nbackend = \"memory\"\n";
        let config: RootConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.storage.backend, StorageBackend::Memory);
    }
}
