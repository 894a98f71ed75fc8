//! JSON file operations with schema validation
//!
//! Provides functions to read and write JSON files with serde validation.

use std::fs;
use std::io::Write;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::errors::{LeadflowError, Result};
use crate::schemas::{Board, Config};

use super::paths::get_config_path;

/// Read and deserialize a JSON file.
///
/// # Arguments
/// * `path` - Path to the JSON file
///
/// # Returns
/// The deserialized value
///
/// # Errors
/// * `FileNotFound` - If the file does not exist
/// * `InvalidJson` - If the file contains invalid JSON or does not match the expected schema
pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            LeadflowError::FileNotFound(format!("File not found: {}", path.display()))
        } else {
            LeadflowError::Io(e)
        }
    })?;

    serde_json::from_str(&content).map_err(|e| {
        LeadflowError::InvalidJson(format!("Invalid JSON in file {}: {}", path.display(), e))
    })
}

/// Write a value to a JSON file with pretty formatting.
///
/// Uses atomic write (write to temp file, then rename) to avoid partial writes.
pub fn write_json<T: Serialize>(path: &Path, data: &T) -> Result<()> {
    let content = serde_json::to_string_pretty(data)
        .map_err(|e| LeadflowError::InvalidJson(e.to_string()))?;

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let temp_path = path.with_extension("json.tmp");
    let mut file = fs::File::create(&temp_path)?;
    file.write_all(content.as_bytes())?;
    file.write_all(b"\n")?;
    file.sync_all()?;
    drop(file);

    fs::rename(&temp_path, path)?;

    Ok(())
}

/// Read the leadflow.json file in `root`, or defaults if it doesn't exist.
pub fn read_config(root: &Path) -> Result<Config> {
    let path = get_config_path(root);
    if !path.exists() {
        return Ok(Config::default());
    }
    read_json(&path)
}

/// Read a board snapshot.
///
/// A missing file is an empty board for `tenant_id`.
pub fn read_board(path: &Path, tenant_id: &str) -> Result<Board> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no board file, starting empty");
        return Ok(Board::new(tenant_id));
    }
    read_json(path)
}

/// Write a board snapshot.
pub fn write_board(path: &Path, board: &Board) -> Result<()> {
    write_json(path, board)
}
