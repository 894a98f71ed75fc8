//! Interaction ledger
//!
//! Append-only history of attendant notes on a lead. Entries are created
//! here and never edited or removed afterwards.

use chrono::{DateTime, Utc};

use crate::errors::{LeadflowError, Result};
use crate::schemas::{Interaction, Lead};

/// Build a ledger entry for a lead, stamped with `at`.
///
/// The attendant is taken as given; checking that it names a real user is
/// the repository's job.
pub fn new_interaction(
    lead: &Lead,
    note: &str,
    attendant_id: Option<&str>,
    at: DateTime<Utc>,
) -> Result<Interaction> {
    let note = note.trim();
    if note.is_empty() {
        return Err(LeadflowError::validation("interaction note cannot be empty"));
    }

    Ok(Interaction {
        id: uuid::Uuid::new_v4().to_string(),
        tenant_id: lead.tenant_id.clone(),
        lead_id: lead.id.clone(),
        note: note.to_string(),
        attendant_id: attendant_id.map(str::to_string),
        created_at: at,
        updated_at: at,
    })
}

/// Return a new Lead with a fresh entry appended to its ledger.
pub fn append(
    lead: Lead,
    note: &str,
    attendant_id: Option<&str>,
    at: DateTime<Utc>,
) -> Result<Lead> {
    let interaction = new_interaction(&lead, note, attendant_id, at)?;
    Ok(lead.with_interaction(interaction))
}

/// Committed entries merged with caller-held pending ones, newest first.
///
/// Nothing is committed; pending entries only exist for display. Entries
/// with equal timestamps keep their relative input order.
pub fn timeline<'a>(committed: &'a [Interaction], pending: &'a [Interaction]) -> Vec<&'a Interaction> {
    let mut entries: Vec<&Interaction> = committed.iter().chain(pending.iter()).collect();
    entries.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    entries
}
