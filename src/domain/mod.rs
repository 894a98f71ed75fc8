//! Domain logic: pipeline taxonomy, transition policy, ledger and filtering

pub mod budget;
pub mod filter;
pub mod ledger;
pub mod taxonomy;
pub mod temporal;
pub mod transitions;


pub use budget::classify;
pub use taxonomy::{display_name, is_resolved, stage_index, stage_phase, stages_in_phase, PIPELINE_STAGES};
pub use temporal::{elapsed_label, is_within_day_range, resolve_named_range, ElapsedLabel, LocalRange};
pub use transitions::{
    allowed_targets, classify_transition, commit_transition, Evidence, TransitionKind,
    TransitionOutcome,
};
