//! Configuration service implementation.
//!
//! This module provides a ConfigService that loads the root configuration
//! from the configuration file (~/.config/norris/config.toml).

use crate::paths::NorrisPaths;
use norris_core::config::RootConfig;
use std::path::PathBuf;
use std::sync::{Arc, RwLock};

/// Configuration service that loads and caches the root configuration.
///
/// This implementation reads the configuration from config.toml and caches it
/// to avoid repeated file I/O. A missing file yields the default
/// configuration, which is also written back so users have a file to edit.
#[derive(Debug, Clone)]
pub struct ConfigService {
    /// Cached configuration loaded from file.
    /// Uses RwLock for thread-safe lazy loading.
    config: Arc<RwLock<Option<RootConfig>>>,
    config_path: Option<PathBuf>,
}

impl ConfigService {
    /// Creates a new ConfigService reading from the default location.
    ///
    /// The configuration is loaded lazily on first access to avoid blocking
    /// during initialization.
    pub fn new() -> Self {
        Self {
            config: Arc::new(RwLock::new(None)),
            config_path: NorrisPaths::config_file().ok(),
        }
    }

    /// Creates a ConfigService reading from an explicit path. Used in tests
    /// and by the `--config` CLI flag.
    pub fn with_path(config_path: impl Into<PathBuf>) -> Self {
        Self {
            config: Arc::new(RwLock::new(None)),
            config_path: Some(config_path.into()),
        }
    }

    /// Gets the root configuration, loading from file if not cached.
    pub fn get_config(&self) -> RootConfig {
        {
            let read_lock = self.config.read().unwrap_or_else(|e| e.into_inner());
            if let Some(ref cached) = *read_lock {
                return cached.clone();
            }
        }

        let loaded = self.load_config().unwrap_or_else(|e| {
            tracing::warn!("Falling back to default configuration: {}", e);
            RootConfig::default()
        });

        {
            let mut write_lock = self.config.write().unwrap_or_else(|e| e.into_inner());
            *write_lock = Some(loaded.clone());
        }

        loaded
    }

    /// Invalidates the cache, forcing a reload on next access.
    pub fn invalidate_cache(&self) {
        let mut write_lock = self.config.write().unwrap_or_else(|e| e.into_inner());
        *write_lock = None;
    }

    fn load_config(&self) -> Result<RootConfig, String> {
        let Some(ref config_path) = self.config_path else {
            return Err("config path could not be determined".to_string());
        };

        if !config_path.exists() {
            let default_config = RootConfig::default();
            let content = toml::to_string_pretty(&default_config)
                .map_err(|e| format!("failed to serialize default config: {}", e))?;
            if let Some(parent) = config_path.parent() {
                std::fs::create_dir_all(parent)
                    .map_err(|e| format!("failed to create config dir: {}", e))?;
            }
            std::fs::write(config_path, content)
                .map_err(|e| format!("failed to write default config: {}", e))?;
            tracing::info!("Wrote default configuration to {:?}", config_path);
            return Ok(default_config);
        }

        let content = std::fs::read_to_string(config_path)
            .map_err(|e| format!("failed to read {:?}: {}", config_path, e))?;
        toml::from_str(&content).map_err(|e| format!("failed to parse {:?}: {}", config_path, e))
    }
}

impl Default for ConfigService {
    fn default() -> Self {
        Self::new()
    }
}
