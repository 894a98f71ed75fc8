//! Path resolution utilities for leadflow

use std::path::{Path, PathBuf};

use crate::schemas::Config;

/// Name of the configuration file looked up in the working directory
pub const CONFIG_FILE_NAME: &str = "leadflow.json";

/// Resolve the current working directory, optionally using an override.
pub fn resolve_cwd(cwd_option: Option<&Path>) -> PathBuf {
    match cwd_option {
        Some(path) => path.to_path_buf(),
        None => std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
    }
}

/// Get the path to the leadflow.json file.
pub fn get_config_path(root: &Path) -> PathBuf {
    root.join(CONFIG_FILE_NAME)
}

/// Get the board snapshot path: an explicit override, else the configured one.
///
/// Relative paths are resolved against `root`.
pub fn get_board_path(root: &Path, config: &Config, override_path: Option<&Path>) -> PathBuf {
    let path = override_path
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(&config.board_path));
    if path.is_absolute() {
        path
    } else {
        root.join(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_cwd_with_override() {
        let path = Path::new("/tmp/pipeline");
        assert_eq!(resolve_cwd(Some(path)), PathBuf::from("/tmp/pipeline"));
    }

    #[test]
    fn test_get_config_path() {
        let root = Path::new("/srv/store");
        assert_eq!(get_config_path(root), PathBuf::from("/srv/store/leadflow.json"));
    }

    #[test]
    fn test_get_board_path() {
        let root = Path::new("/srv/store");
        let config = Config::default();

        assert_eq!(
            get_board_path(root, &config, None),
            PathBuf::from("/srv/store/board.json")
        );
        assert_eq!(
            get_board_path(root, &config, Some(Path::new("data/q3.json"))),
            PathBuf::from("/srv/store/data/q3.json")
        );
        assert_eq!(
            get_board_path(root, &config, Some(Path::new("/var/board.json"))),
            PathBuf::from("/var/board.json")
        );
    }
}
