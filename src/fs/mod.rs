//! File system utilities for leadflow
//!
//! Provides path resolution and JSON snapshot persistence for boards.

mod json;
mod paths;

pub use json::{read_board, read_config, read_json, write_board, write_json};
pub use paths::{get_board_path, get_config_path, resolve_cwd, CONFIG_FILE_NAME};
