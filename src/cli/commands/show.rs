//! Show command - Show details of a specific lead

use chrono::Utc;

use crate::cli::Workspace;
use crate::domain::{allowed_targets, classify, display_name, elapsed_label, ledger, stage_phase};
use crate::errors::Result;

use super::print_json;

/// Show a lead and its interaction history, newest first
pub fn run(ws: &Workspace, id: &str, json: bool) -> Result<()> {
    let repo = ws.load_repository()?;
    let lead = repo.get(id)?;

    if json {
        return print_json(lead);
    }

    let now = Utc::now();
    let customer = &lead.customer;
    println!("{} ({})", customer.name, lead.id);
    println!(
        "  stage:    {} [{}, {}]",
        display_name(lead.stage),
        lead.stage,
        stage_phase(lead.stage)
    );
    println!("  budget:   {:.2} ({})", lead.budget, classify(lead.budget));
    println!("  phone:    {}", customer.phone);
    if !customer.email.is_empty() {
        println!("  email:    {}", customer.email);
    }
    if let Some(city) = &customer.city {
        println!("  city:     {}", city);
    }
    if let Some(user) = &lead.assignee {
        println!("  assignee: {} ({})", user.name, user.id);
    }
    if let Some(origin) = &lead.origin {
        println!("  origin:   {}", origin.name);
    }
    if let Some(event) = &lead.event {
        println!("  event:    {}", event.name);
    }
    if let Some(message) = &lead.message {
        println!("  message:  {}", message);
    }
    if let Some(info) = &lead.additional_info {
        println!("  info:     {}", info);
    }
    println!("  created:  {}", elapsed_label(lead.created_at, now));
    println!("  updated:  {}", elapsed_label(lead.updated_at, now));

    let targets: Vec<String> = allowed_targets(lead.stage)
        .iter()
        .map(|s| s.to_string())
        .collect();
    println!("  can move to: {}", targets.join(", "));

    println!("  interactions ({}):", lead.interactions.len());
    for interaction in ledger::timeline(&lead.interactions, &[]) {
        let attendant = interaction
            .attendant_id
            .as_deref()
            .map(|uid| {
                repo.references()
                    .find_user(uid)
                    .map(|u| u.name.clone())
                    .unwrap_or_else(|| uid.to_string())
            })
            .unwrap_or_else(|| "-".to_string());
        println!(
            "    [{}] {}: {}",
            elapsed_label(interaction.created_at, now),
            attendant,
            interaction.note
        );
    }

    Ok(())
}
