//! Lead schema - The central pipeline entity and its ledger entries

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Event, LeadOriginType, Stage, User};

/// Customer gender as recorded on the lead form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Female,
    Male,
}

impl std::str::FromStr for Gender {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "female" | "f" => Ok(Gender::Female),
            "male" | "m" => Ok(Gender::Male),
            _ => Err(format!("Unknown gender: {}", s)),
        }
    }
}

/// Customer contact data, owned exclusively by its lead
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub name: String,

    /// Free-form phone number
    pub phone: String,

    #[serde(default)]
    pub email: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,

    pub gender: Gender,
}

/// An attributed, timestamped note about attendant activity on a lead.
///
/// Never edited or removed once committed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Interaction {
    pub id: String,
    pub tenant_id: String,
    pub lead_id: String,
    pub note: String,

    /// Id of the user who attended the customer
    #[serde(default)]
    pub attendant_id: Option<String>,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A lead moving through the sales pipeline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lead {
    /// Schema version for forward compatibility
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    pub id: String,
    pub tenant_id: String,
    pub customer: Customer,

    #[serde(default)]
    pub assignee: Option<User>,

    #[serde(default)]
    pub origin: Option<LeadOriginType>,

    #[serde(default)]
    pub event: Option<Event>,

    pub stage: Stage,

    /// Non-negative budget in the tenant's currency
    pub budget: f64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub additional_info: Option<String>,

    /// Ledger in insertion order
    #[serde(default)]
    pub interactions: Vec<Interaction>,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

fn default_schema_version() -> u32 {
    1
}

impl Lead {
    /// Create a new lead with no references, no notes and no interactions
    pub fn new(
        id: String,
        tenant_id: String,
        customer: Customer,
        stage: Stage,
        budget: f64,
    ) -> Self {
        let now = Utc::now();
        Lead {
            schema_version: 1,
            id,
            tenant_id,
            customer,
            assignee: None,
            origin: None,
            event: None,
            stage,
            budget,
            message: None,
            additional_info: None,
            interactions: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    // ===== IMMUTABLE BUILDER METHODS =====

    /// Return a new Lead at the given stage, stamped with `at`
    pub fn with_stage(mut self, stage: Stage, at: DateTime<Utc>) -> Self {
        self.stage = stage;
        self.updated_at = at;
        self
    }

    /// Return a new Lead with the interaction appended to its ledger
    pub fn with_interaction(mut self, interaction: Interaction) -> Self {
        self.interactions.push(interaction);
        self
    }

    pub fn with_assignee(mut self, assignee: Option<User>) -> Self {
        self.assignee = assignee;
        self
    }

    pub fn with_origin(mut self, origin: Option<LeadOriginType>) -> Self {
        self.origin = origin;
        self
    }

    pub fn with_event(mut self, event: Option<Event>) -> Self {
        self.event = event;
        self
    }

    pub fn with_message(mut self, message: Option<String>) -> Self {
        self.message = message;
        self
    }

    pub fn with_additional_info(mut self, additional_info: Option<String>) -> Self {
        self.additional_info = additional_info;
        self
    }

    /// Override the creation timestamp (imports and tests)
    pub fn with_created_at(mut self, at: DateTime<Utc>) -> Self {
        self.created_at = at;
        if self.updated_at < at {
            self.updated_at = at;
        }
        self
    }

    pub fn assignee_id(&self) -> Option<&str> {
        self.assignee.as_ref().map(|u| u.id.as_str())
    }

    pub fn origin_id(&self) -> Option<&str> {
        self.origin.as_ref().map(|o| o.id.as_str())
    }

    pub fn event_id(&self) -> Option<&str> {
        self.event.as_ref().map(|e| e.id.as_str())
    }
}
