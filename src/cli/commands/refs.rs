//! Refs command - References currently in use across leads

use serde::Serialize;

use crate::cli::Workspace;
use crate::errors::Result;
use crate::schemas::{Event, LeadOriginType, User};

use super::print_json;

#[derive(Serialize)]
struct RefsInUse<'a> {
    assignees: Vec<&'a User>,
    origins: Vec<&'a LeadOriginType>,
    events: Vec<&'a Event>,
}

pub fn run(ws: &Workspace, json: bool) -> Result<()> {
    let repo = ws.load_repository()?;
    let refs = RefsInUse {
        assignees: repo.unique_assignees(),
        origins: repo.unique_origins(),
        events: repo.unique_events(),
    };

    if json {
        return print_json(&refs);
    }

    println!("assignees:");
    for user in &refs.assignees {
        println!("  {}  {}", user.id, user.name);
    }
    println!("origins:");
    for origin in &refs.origins {
        println!("  {}  {}", origin.id, origin.name);
    }
    println!("events:");
    for event in &refs.events {
        println!("  {}  {}", event.id, event.name);
    }
    Ok(())
}
