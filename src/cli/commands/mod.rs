//! CLI command implementations

pub mod add;
pub mod board;
pub mod delete;
pub mod list;
pub mod move_lead;
pub mod refs;
pub mod show;
pub mod stages;

use crate::domain::{classify, display_name};
use crate::schemas::Lead;

/// One-line summary used by the listing commands
pub(crate) fn summary_line(lead: &Lead) -> String {
    let assignee = lead
        .assignee
        .as_ref()
        .map(|u| u.name.as_str())
        .unwrap_or("-");
    format!(
        "{}  {:<24} {:<28} {:>10.2} ({})  {}",
        lead.id,
        lead.customer.name,
        display_name(lead.stage),
        lead.budget,
        classify(lead.budget),
        assignee
    )
}

pub(crate) fn print_json<T: serde::Serialize>(value: &T) -> crate::Result<()> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| crate::LeadflowError::InvalidJson(e.to_string()))?;
    println!("{}", json);
    Ok(())
}
