//! Pipeline taxonomy
//!
//! The funnel is a fixed list of seven stages split into two phases:
//! early (online_interest, store_interest, scheduled) and
//! resolved (closed_first, not_closed_chance, closed_later, lost).

use crate::schemas::{Phase, Stage};

/// The canonical ordering of pipeline stages.
///
/// This is the source of truth for board column order.
pub const PIPELINE_STAGES: &[Stage] = &[
    Stage::OnlineInterest,
    Stage::StoreInterest,
    Stage::Scheduled,
    Stage::ClosedFirst,
    Stage::NotClosedChance,
    Stage::ClosedLater,
    Stage::Lost,
];

/// Get the phase a stage belongs to.
pub fn stage_phase(stage: Stage) -> Phase {
    match stage {
        Stage::OnlineInterest | Stage::StoreInterest | Stage::Scheduled => Phase::Early,
        Stage::ClosedFirst | Stage::NotClosedChance | Stage::ClosedLater | Stage::Lost => {
            Phase::Resolved
        }
    }
}

/// Human-readable column title for a stage.
///
/// Display text is generated from the stage, never parsed back into one.
pub fn display_name(stage: Stage) -> &'static str {
    match stage {
        Stage::OnlineInterest => "Online interest",
        Stage::StoreInterest => "Store interest",
        Stage::Scheduled => "Scheduled",
        Stage::ClosedFirst => "Closed on first visit",
        Stage::NotClosedChance => "Not closed (still a chance)",
        Stage::ClosedLater => "Closed later",
        Stage::Lost => "Lost",
    }
}

/// Get the 0-based position of a stage on the board.
pub fn stage_index(stage: Stage) -> usize {
    match stage {
        Stage::OnlineInterest => 0,
        Stage::StoreInterest => 1,
        Stage::Scheduled => 2,
        Stage::ClosedFirst => 3,
        Stage::NotClosedChance => 4,
        Stage::ClosedLater => 5,
        Stage::Lost => 6,
    }
}

/// Stages belonging to one phase, in board order.
pub fn stages_in_phase(phase: Phase) -> Vec<Stage> {
    PIPELINE_STAGES
        .iter()
        .copied()
        .filter(|&s| stage_phase(s) == phase)
        .collect()
}

/// Check if a stage records a determined outcome.
pub fn is_resolved(stage: Stage) -> bool {
    stage_phase(stage) == Phase::Resolved
}
