//! Board command - Leads grouped by stage

use crate::cli::Workspace;
use crate::domain::display_name;
use crate::errors::Result;

use super::summary_line;

pub fn run(ws: &Workspace) -> Result<()> {
    let repo = ws.load_repository()?;

    for (stage, leads) in repo.leads_by_stage() {
        println!("== {} [{}] ({})", display_name(stage), stage, leads.len());
        for lead in leads {
            println!("   {}", summary_line(lead));
        }
    }
    Ok(())
}
