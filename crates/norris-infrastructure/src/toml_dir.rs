//! Shared directory-of-TOML-files storage helpers.
//!
//! Every file-backed repository uses the same layout: one TOML file per
//! entity inside a dedicated directory. These helpers centralize the tokio
//! file I/O and error mapping; unreadable or unparsable files are skipped
//! with a warning when listing, so one corrupt record cannot take down the
//! whole store.

use norris_core::error::{NorrisError, Result};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};
use tokio::fs;

/// Ensures the storage directory exists.
pub(crate) async fn ensure_dir(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir)
        .await
        .map_err(|e| NorrisError::io(format!("failed to create {:?}: {}", dir, e)))
}

pub(crate) fn entity_path(dir: &Path, file_stem: &str) -> PathBuf {
    dir.join(format!("{}.toml", file_stem))
}

/// Reads and deserializes one entity file, `Ok(None)` if it does not exist.
pub(crate) async fn read_entity<T: DeserializeOwned>(
    dir: &Path,
    file_stem: &str,
) -> Result<Option<T>> {
    let path = entity_path(dir, file_stem);
    let content = match fs::read_to_string(&path).await {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(e) => {
            return Err(NorrisError::io(format!(
                "failed to read {:?}: {}",
                path, e
            )));
        }
    };
    let entity = toml::from_str(&content)?;
    Ok(Some(entity))
}

/// Serializes and writes one entity file, replacing any previous content.
pub(crate) async fn write_entity<T: Serialize>(
    dir: &Path,
    file_stem: &str,
    entity: &T,
) -> Result<()> {
    ensure_dir(dir).await?;
    let path = entity_path(dir, file_stem);
    let content = toml::to_string_pretty(entity)?;
    fs::write(&path, content)
        .await
        .map_err(|e| NorrisError::io(format!("failed to write {:?}: {}", path, e)))
}

/// Deletes one entity file. Missing files are not an error.
pub(crate) async fn delete_entity(dir: &Path, file_stem: &str) -> Result<bool> {
    let path = entity_path(dir, file_stem);
    match fs::remove_file(&path).await {
        Ok(()) => Ok(true),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
        Err(e) => Err(NorrisError::io(format!(
            "failed to delete {:?}: {}",
            path, e
        ))),
    }
}

/// Reads every `.toml` entity in the directory, skipping unreadable files.
pub(crate) async fn read_all_entities<T: DeserializeOwned>(dir: &Path) -> Result<Vec<T>> {
    let mut entities = Vec::new();
    let mut read_dir = match fs::read_dir(dir).await {
        Ok(read_dir) => read_dir,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(entities),
        Err(e) => {
            return Err(NorrisError::io(format!(
                "failed to read directory {:?}: {}",
                dir, e
            )));
        }
    };

    while let Some(entry) = read_dir
        .next_entry()
        .await
        .map_err(|e| NorrisError::io(format!("failed to iterate {:?}: {}", dir, e)))?
    {
        let path = entry.path();
        if path.extension().and_then(|ext| ext.to_str()) != Some("toml") {
            continue;
        }
        let content = match fs::read_to_string(&path).await {
            Ok(content) => content,
            Err(e) => {
                tracing::warn!("Skipping unreadable entity file {:?}: {}", path, e);
                continue;
            }
        };
        match toml::from_str(&content) {
            Ok(entity) => entities.push(entity),
            Err(e) => {
                tracing::warn!("Skipping unparsable entity file {:?}: {}", path, e);
            }
        }
    }

    Ok(entities)
}
