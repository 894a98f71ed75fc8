//! Config schema - Configuration for leadflow

use serde::{Deserialize, Serialize};

use super::DateFilterMode;

/// Main configuration for leadflow
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Schema version for forward compatibility
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Tenant new leads and interactions are stamped with
    #[serde(default = "default_tenant_id")]
    pub tenant_id: String,

    /// Board snapshot location, relative to the working directory
    #[serde(default = "default_board_path")]
    pub board_path: String,

    /// Date window `list` uses when none is given
    #[serde(default)]
    pub default_date_filter: DateFilterMode,
}

fn default_schema_version() -> u32 {
    1
}

fn default_tenant_id() -> String {
    "default".to_string()
}

fn default_board_path() -> String {
    "board.json".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Config {
            schema_version: 1,
            tenant_id: default_tenant_id(),
            board_path: default_board_path(),
            default_date_filter: DateFilterMode::All,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.schema_version, 1);
        assert_eq!(config.tenant_id, "default");
        assert_eq!(config.board_path, "board.json");
        assert_eq!(config.default_date_filter, DateFilterMode::All);
    }

    #[test]
    fn test_config_partial_json() {
        // Simulate a config file with only some fields set
        let json = r#"{"tenant_id": "store-42", "default_date_filter": "last7days"}"#;
        let parsed: Config = serde_json::from_str(json).unwrap();

        assert_eq!(parsed.tenant_id, "store-42");
        assert_eq!(parsed.default_date_filter, DateFilterMode::Last7Days);
        // Other fields should have defaults
        assert_eq!(parsed.board_path, "board.json");
        assert_eq!(parsed.schema_version, 1);
    }

    #[test]
    fn test_config_json_round_trip() {
        let config = Config::default();
        let json = serde_json::to_string_pretty(&config).unwrap();
        let parsed: Config = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed.tenant_id, config.tenant_id);
        assert_eq!(parsed.board_path, config.board_path);
    }
}
