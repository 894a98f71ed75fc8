//! Board schema - Persisted snapshot of a tenant's pipeline

use serde::{Deserialize, Serialize};

use super::{Lead, References};

/// Everything a repository needs to be rebuilt: reference lists and leads
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Board {
    /// Schema version for forward compatibility
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    pub tenant_id: String,

    #[serde(flatten)]
    pub references: References,

    #[serde(default)]
    pub leads: Vec<Lead>,
}

fn default_schema_version() -> u32 {
    1
}

impl Board {
    /// Create an empty board for a tenant
    pub fn new(tenant_id: impl Into<String>) -> Self {
        Board {
            schema_version: 1,
            tenant_id: tenant_id.into(),
            references: References::default(),
            leads: Vec::new(),
        }
    }
}
