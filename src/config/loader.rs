//! Configuration loading with defaults

use std::path::Path;

use crate::errors::Result;
use crate::fs;
use crate::schemas::Config;

/// Load configuration from the working directory, falling back to defaults.
///
/// If leadflow.json exists, it will be read and merged with defaults.
/// If it doesn't exist, default configuration is returned.
pub fn load_config(root: &Path) -> Result<Config> {
    let config = fs::read_config(root)?;
    tracing::debug!(tenant = %config.tenant_id, board = %config.board_path, "loaded config");
    Ok(config)
}
