//! Move command - Move a lead to another stage

use crate::cli::Workspace;
use crate::errors::Result;
use crate::schemas::Stage;

/// Move a lead and save the board if the move was accepted
pub fn run(
    ws: &Workspace,
    id: &str,
    stage: Stage,
    note: Option<String>,
    attendant: Option<String>,
) -> Result<()> {
    let mut repo = ws.load_repository()?;
    let before = repo.get(id)?.stage;

    let lead = repo.move_lead(id, stage, note, attendant)?;
    if before == lead.stage {
        println!("Lead {} is already in {}", id, stage);
        return Ok(());
    }

    ws.save_repository(&repo)?;
    println!("Moved lead {} from {} to {}", id, before, lead.stage);
    Ok(())
}
