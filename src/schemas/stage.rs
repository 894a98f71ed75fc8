//! Stage schema - Pipeline positions and their phases

use serde::{Deserialize, Serialize};

/// Funnel stage a lead currently occupies.
///
/// Declaration order is funnel order, so the derived `Ord` sorts stages the
/// way the board displays them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    /// Lead showed interest through an online channel
    OnlineInterest,
    /// Lead showed interest in person at the store
    StoreInterest,
    /// A visit or meeting is scheduled
    Scheduled,
    /// Closed on the first contact
    ClosedFirst,
    /// Not closed, but there is still a chance
    NotClosedChance,
    /// Closed after follow-up
    ClosedLater,
    /// Deal lost
    Lost,
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Stage::OnlineInterest => write!(f, "online_interest"),
            Stage::StoreInterest => write!(f, "store_interest"),
            Stage::Scheduled => write!(f, "scheduled"),
            Stage::ClosedFirst => write!(f, "closed_first"),
            Stage::NotClosedChance => write!(f, "not_closed_chance"),
            Stage::ClosedLater => write!(f, "closed_later"),
            Stage::Lost => write!(f, "lost"),
        }
    }
}

impl std::str::FromStr for Stage {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "online_interest" => Ok(Stage::OnlineInterest),
            "store_interest" => Ok(Stage::StoreInterest),
            "scheduled" => Ok(Stage::Scheduled),
            "closed_first" => Ok(Stage::ClosedFirst),
            "not_closed_chance" => Ok(Stage::NotClosedChance),
            "closed_later" => Ok(Stage::ClosedLater),
            "lost" => Ok(Stage::Lost),
            _ => Err(format!("Unknown stage: {}", s)),
        }
    }
}

/// Grouping of stages: prospecting or outcome determined
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    Early,
    Resolved,
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Phase::Early => write!(f, "early"),
            Phase::Resolved => write!(f, "resolved"),
        }
    }
}
