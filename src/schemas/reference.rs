//! Reference schemas - Lookup records supplied from outside the core
//!
//! Users, origins and events are immutable value objects. Leads embed a copy
//! of the ones they reference.

use serde::{Deserialize, Serialize};

/// A staff member who can be assigned to leads or attend them
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl User {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        User {
            id: id.into(),
            name: name.into(),
            email: None,
        }
    }
}

/// Channel through which a lead arrived (instagram, walk-in, referral...)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LeadOriginType {
    pub id: String,
    pub name: String,
}

impl LeadOriginType {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        LeadOriginType {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// Category of an event
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EventType {
    pub id: String,
    pub name: String,
}

/// A commercial event (fair, open house, campaign) leads can be tied to
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Event {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_type: Option<EventType>,
}

impl Event {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Event {
            id: id.into(),
            name: name.into(),
            event_type: None,
        }
    }

    pub fn with_event_type(mut self, event_type: EventType) -> Self {
        self.event_type = Some(event_type);
        self
    }
}

/// The reference lists a repository resolves form ids against
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct References {
    #[serde(default)]
    pub users: Vec<User>,
    #[serde(default)]
    pub origins: Vec<LeadOriginType>,
    #[serde(default)]
    pub events: Vec<Event>,
    #[serde(default)]
    pub event_types: Vec<EventType>,
}

impl References {
    pub fn find_user(&self, id: &str) -> Option<&User> {
        self.users.iter().find(|u| u.id == id)
    }

    pub fn find_origin(&self, id: &str) -> Option<&LeadOriginType> {
        self.origins.iter().find(|o| o.id == id)
    }

    pub fn find_event(&self, id: &str) -> Option<&Event> {
        self.events.iter().find(|e| e.id == id)
    }
}
