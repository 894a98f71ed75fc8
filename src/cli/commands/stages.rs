//! Stages command - Print the pipeline taxonomy

use crate::domain::{allowed_targets, display_name, stage_phase, PIPELINE_STAGES};
use crate::errors::Result;

pub fn run() -> Result<()> {
    for &stage in PIPELINE_STAGES {
        let targets: Vec<String> = allowed_targets(stage).iter().map(|s| s.to_string()).collect();
        println!(
            "{:<18} {:<9} {:<28} -> {}",
            stage.to_string(),
            stage_phase(stage).to_string(),
            display_name(stage),
            targets.join(", ")
        );
    }
    Ok(())
}
