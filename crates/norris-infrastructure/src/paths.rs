//! Unified path management for norris configuration and data files.
//!
//! All norris configuration and stored entities live under the platform
//! config directory, so every storage mechanism agrees on one layout.

use std::path::PathBuf;

/// Errors that can occur during path resolution.
#[derive(Debug)]
pub enum PathError {
    /// Home/config directory could not be determined.
    HomeDirNotFound,
}

impl std::fmt::Display for PathError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PathError::HomeDirNotFound => write!(f, "Cannot find home directory"),
        }
    }
}

impl std::error::Error for PathError {}

/// Unified path management for norris.
///
/// # Directory Structure
///
/// ```text
/// ~/.config/norris/            # Config directory
/// ├── config.toml              # Application configuration
/// ├── active_session           # Id of the CLI's current session
/// ├── facts/                   # One TOML file per fact + id counter
/// ├── users/                   # One TOML file per user
/// ├── sessions/                # One TOML file per session
/// └── tokens/                  # One TOML file per issued API token
/// ```
pub struct NorrisPaths;

impl NorrisPaths {
    /// Returns the norris configuration directory.
    ///
    /// # Returns
    ///
    /// - `Ok(PathBuf)`: path to config directory (e.g., `~/.config/norris/`)
    /// - `Err(PathError::HomeDirNotFound)`: could not determine directory
    pub fn config_dir() -> Result<PathBuf, PathError> {
        dirs::config_dir()
            .map(|dir| dir.join("norris"))
            .ok_or(PathError::HomeDirNotFound)
    }

    /// Returns the path to the main configuration file.
    pub fn config_file() -> Result<PathBuf, PathError> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Returns the file recording the CLI's current session id.
    ///
    /// This plays the role a session cookie plays for a browser client: it
    /// carries the session identity across invocations.
    pub fn active_session_file() -> Result<PathBuf, PathError> {
        Ok(Self::config_dir()?.join("active_session"))
    }

    /// Returns the path to the facts directory.
    pub fn facts_dir() -> Result<PathBuf, PathError> {
        Ok(Self::config_dir()?.join("facts"))
    }

    /// Returns the path to the users directory.
    pub fn users_dir() -> Result<PathBuf, PathError> {
        Ok(Self::config_dir()?.join("users"))
    }

    /// Returns the path to the sessions directory.
    pub fn sessions_dir() -> Result<PathBuf, PathError> {
        Ok(Self::config_dir()?.join("sessions"))
    }

    /// Returns the path to the tokens directory.
    pub fn tokens_dir() -> Result<PathBuf, PathError> {
        Ok(Self::config_dir()?.join("tokens"))
    }
}
