//! Stage transition policy
//!
//! Legality depends only on the phases of the two stages involved:
//!
//! | from \ to | early             | resolved            |
//! |-----------|-------------------|---------------------|
//! | early     | direct            | requires evidence   |
//! | resolved  | forbidden         | direct              |
//!
//! Moving to the stage a lead is already in is a no-op.

use chrono::{DateTime, Utc};

use crate::errors::{LeadflowError, Result};
use crate::schemas::{Lead, Phase, Stage};

use super::ledger;
use super::taxonomy::{stage_phase, PIPELINE_STAGES};

/// How the policy classifies a requested move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionKind {
    /// Allowed with no justification
    Direct,
    /// Allowed only with a note and an attendant
    RequiresEvidence,
    /// Never allowed
    Forbidden,
    /// Source and target are the same stage
    NoOp,
}

/// Classify a move from one stage to another.
pub fn classify_transition(from: Stage, to: Stage) -> TransitionKind {
    if from == to {
        return TransitionKind::NoOp;
    }

    match (stage_phase(from), stage_phase(to)) {
        (Phase::Resolved, Phase::Early) => TransitionKind::Forbidden,
        (Phase::Early, Phase::Resolved) => TransitionKind::RequiresEvidence,
        _ => TransitionKind::Direct,
    }
}

/// Stages a lead at `from` may be moved to, with or without evidence.
pub fn allowed_targets(from: Stage) -> Vec<Stage> {
    PIPELINE_STAGES
        .iter()
        .copied()
        .filter(|&to| {
            matches!(
                classify_transition(from, to),
                TransitionKind::Direct | TransitionKind::RequiresEvidence
            )
        })
        .collect()
}

/// Justification offered for a move
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evidence {
    pub note: String,
    pub attendant_id: Option<String>,
}

impl Evidence {
    pub fn new(note: impl Into<String>, attendant_id: Option<String>) -> Self {
        Evidence {
            note: note.into(),
            attendant_id,
        }
    }

    /// Build evidence from optional parts, if a note was given at all
    pub fn from_parts(note: Option<String>, attendant_id: Option<String>) -> Option<Self> {
        match (note, attendant_id) {
            (None, None) => None,
            (note, attendant_id) => Some(Evidence {
                note: note.unwrap_or_default(),
                attendant_id,
            }),
        }
    }

    pub fn has_note(&self) -> bool {
        !self.note.trim().is_empty()
    }

    pub fn attendant(&self) -> Option<&str> {
        self.attendant_id
            .as_deref()
            .map(str::trim)
            .filter(|id| !id.is_empty())
    }

    /// Both a non-blank note and a non-blank attendant are present
    pub fn is_complete(&self) -> bool {
        self.has_note() && self.attendant().is_some()
    }
}

/// Result of a successful transition attempt
#[derive(Debug)]
pub enum TransitionOutcome {
    /// The lead was already at the target stage; nothing was touched
    Unchanged,
    /// The move was accepted
    Committed {
        /// The lead with updated stage, timestamp and (maybe) a new ledger entry
        next_lead: Lead,
    },
}

impl TransitionOutcome {
    /// Check if the transition changed the lead
    pub fn is_committed(&self) -> bool {
        matches!(self, TransitionOutcome::Committed { .. })
    }

    /// Check if the transition was a no-op
    pub fn is_unchanged(&self) -> bool {
        matches!(self, TransitionOutcome::Unchanged)
    }

    /// Get the next lead if the transition changed anything
    pub fn lead(self) -> Option<Lead> {
        match self {
            TransitionOutcome::Committed { next_lead } => Some(next_lead),
            TransitionOutcome::Unchanged => None,
        }
    }
}

/// Pure function that applies a stage transition to a lead.
///
/// This function:
/// - Never mutates the input lead
/// - Rejects resolved-to-early moves with `TransitionForbidden`
/// - Rejects early-to-resolved moves lacking complete evidence with `EvidenceRequired`
/// - Appends a ledger entry only when a note and an attendant were both supplied
/// - Returns `Unchanged` for same-stage moves without touching the ledger
pub fn commit_transition(
    lead: &Lead,
    to: Stage,
    evidence: Option<&Evidence>,
    at: DateTime<Utc>,
) -> Result<TransitionOutcome> {
    let from = lead.stage;

    match classify_transition(from, to) {
        TransitionKind::NoOp => return Ok(TransitionOutcome::Unchanged),
        TransitionKind::Forbidden => {
            return Err(LeadflowError::TransitionForbidden { from, to });
        }
        TransitionKind::RequiresEvidence => {
            if !evidence.is_some_and(Evidence::is_complete) {
                return Err(LeadflowError::EvidenceRequired { from, to });
            }
        }
        TransitionKind::Direct => {}
    }

    // Create a new lead with the updated stage - never mutate the original
    let mut next_lead = lead.clone().with_stage(to, at);
    if let Some(evidence) = evidence.filter(|e| e.is_complete()) {
        next_lead = ledger::append(next_lead, &evidence.note, evidence.attendant(), at)?;
    }

    Ok(TransitionOutcome::Committed { next_lead })
}
