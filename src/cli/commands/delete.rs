//! Delete command - Remove a lead

use crate::cli::Workspace;
use crate::errors::Result;

pub fn run(ws: &Workspace, id: &str) -> Result<()> {
    let mut repo = ws.load_repository()?;
    let removed = repo.delete_lead(id)?;
    ws.save_repository(&repo)?;

    println!("Deleted lead {} ({})", removed.id, removed.customer.name);
    Ok(())
}
