//! In-memory lead repository
//!
//! The only writer of leads. Every command either commits completely or
//! returns an error with the collection untouched: new lead values are built
//! first and swapped in as the last step.
//!
//! Callers sharing a repository across threads must serialize mutations
//! (e.g. wrap it in a `Mutex`); `move_lead` and `update_lead` read and then
//! write the same lead.

mod views;

use chrono::{DateTime, Local, TimeZone, Utc};

use crate::domain::filter;
use crate::domain::ledger;
use crate::domain::transitions::{commit_transition, Evidence, TransitionOutcome};
use crate::errors::{LeadflowError, Result};
use crate::schemas::{
    validate_budget, validate_customer_name, Board, Event, FilterSpec, InteractionDraft, Lead,
    LeadForm, LeadOriginType, References, Stage, User,
};

/// Owns a tenant's leads, their reference lists and the active filter
#[derive(Debug, Clone)]
pub struct LeadRepository {
    tenant_id: String,
    references: References,
    leads: Vec<Lead>,
    filter: FilterSpec,
}

impl LeadRepository {
    /// Create an empty repository
    pub fn new(tenant_id: impl Into<String>, references: References) -> Self {
        LeadRepository {
            tenant_id: tenant_id.into(),
            references,
            leads: Vec::new(),
            filter: FilterSpec::default(),
        }
    }

    /// Rebuild a repository from a persisted snapshot.
    ///
    /// # Errors
    /// * `Validation` - If a lead has a blank customer name, an invalid budget,
    ///   or an id already used by another lead
    pub fn from_board(board: Board) -> Result<Self> {
        let mut repo = LeadRepository::new(board.tenant_id, board.references);

        for lead in board.leads {
            validate_customer_name(&lead.customer.name)
                .and_then(|_| validate_budget(lead.budget))
                .map_err(|e| LeadflowError::wrap(e, format!("Invalid lead {}", lead.id)))?;
            if repo.position(&lead.id).is_some() {
                return Err(LeadflowError::validation(format!(
                    "duplicate lead id: {}",
                    lead.id
                )));
            }
            repo.leads.push(lead);
        }

        tracing::debug!(tenant = %repo.tenant_id, leads = repo.leads.len(), "loaded board");
        Ok(repo)
    }

    /// Snapshot the repository for persistence
    pub fn to_board(&self) -> Board {
        Board {
            schema_version: 1,
            tenant_id: self.tenant_id.clone(),
            references: self.references.clone(),
            leads: self.leads.clone(),
        }
    }

    // ===== READ API =====

    pub fn tenant_id(&self) -> &str {
        &self.tenant_id
    }

    pub fn references(&self) -> &References {
        &self.references
    }

    /// All leads in insertion order
    pub fn leads(&self) -> &[Lead] {
        &self.leads
    }

    pub fn get(&self, id: &str) -> Result<&Lead> {
        self.leads
            .iter()
            .find(|l| l.id == id)
            .ok_or_else(|| LeadflowError::NotFound(id.to_string()))
    }

    // ===== COMMAND API =====

    /// Create a lead at `stage` from form data.
    ///
    /// Creation does not go through the transition policy; interactions on
    /// the form are committed as history stamped at creation time.
    pub fn create_lead(&mut self, stage: Stage, form: LeadForm) -> Result<Lead> {
        form.validate()?;
        let assignee = self.resolve_user(form.assignee_id.as_deref())?;
        let origin = self.resolve_origin(form.origin_id.as_deref())?;
        let event = self.resolve_event(form.event_id.as_deref())?;

        let lead = Lead::new(
            uuid::Uuid::new_v4().to_string(),
            self.tenant_id.clone(),
            form.customer.into_customer(),
            stage,
            form.budget,
        )
        .with_assignee(assignee)
        .with_origin(origin)
        .with_event(event)
        .with_message(non_blank(form.message))
        .with_additional_info(non_blank(form.additional_info));

        let created_at = lead.created_at;
        let lead = self.append_drafts(lead, &form.interactions, created_at)?;

        tracing::info!(lead_id = %lead.id, stage = %stage, "created lead");
        self.leads.push(lead.clone());
        Ok(lead)
    }

    /// Replace a lead's customer and lead fields and append any new interactions.
    ///
    /// The stage is never changed here; use [`LeadRepository::move_lead`].
    pub fn update_lead(&mut self, id: &str, form: LeadForm) -> Result<Lead> {
        let index = self.require(id)?;
        form.validate()?;
        let assignee = self.resolve_user(form.assignee_id.as_deref())?;
        let origin = self.resolve_origin(form.origin_id.as_deref())?;
        let event = self.resolve_event(form.event_id.as_deref())?;

        let now = Utc::now();
        let mut lead = self.leads[index].clone();
        lead.customer = form.customer.into_customer();
        lead.budget = form.budget;
        lead.updated_at = now;
        let lead = lead
            .with_assignee(assignee)
            .with_origin(origin)
            .with_event(event)
            .with_message(non_blank(form.message))
            .with_additional_info(non_blank(form.additional_info));
        let lead = self.append_drafts(lead, &form.interactions, now)?;

        tracing::info!(lead_id = %id, "updated lead");
        self.leads[index] = lead.clone();
        Ok(lead)
    }

    /// Move a lead to another stage under the transition policy.
    ///
    /// Returns the lead as it stands afterwards (unchanged for same-stage moves).
    ///
    /// # Errors
    /// * `NotFound` - If no lead has this id
    /// * `TransitionForbidden` - If the lead is resolved and `to` is an early stage
    /// * `EvidenceRequired` - If crossing into resolved without a note and an attendant
    /// * `Validation` - If an interaction would be recorded for an unknown attendant
    pub fn move_lead(
        &mut self,
        id: &str,
        to: Stage,
        note: Option<String>,
        attendant_id: Option<String>,
    ) -> Result<Lead> {
        let index = self.require(id)?;
        let current = &self.leads[index];
        let from = current.stage;
        let evidence = Evidence::from_parts(note, attendant_id);

        let outcome = commit_transition(current, to, evidence.as_ref(), Utc::now()).inspect_err(
            |e| tracing::warn!(lead_id = %id, from = %from, to = %to, code = e.code(), "rejected move"),
        )?;

        let next_lead = match outcome {
            TransitionOutcome::Unchanged => return Ok(current.clone()),
            TransitionOutcome::Committed { next_lead } => next_lead,
        };
        // only a recorded interaction needs a known attendant
        if let Some(attendant) = evidence
            .as_ref()
            .filter(|e| e.is_complete())
            .and_then(Evidence::attendant)
        {
            self.require_user(attendant)?;
        }

        tracing::info!(
            lead_id = %id,
            from = %from,
            to = %to,
            interactions = next_lead.interactions.len(),
            "moved lead"
        );
        self.leads[index] = next_lead.clone();
        Ok(next_lead)
    }

    /// Remove a lead entirely
    pub fn delete_lead(&mut self, id: &str) -> Result<Lead> {
        let index = self.require(id)?;
        let removed = self.leads.remove(index);
        tracing::info!(lead_id = %id, "deleted lead");
        Ok(removed)
    }

    // ===== FILTER API =====

    /// Replace the active filter
    pub fn set_filter_spec(&mut self, spec: FilterSpec) {
        self.filter = spec;
    }

    pub fn filter_spec(&self) -> &FilterSpec {
        &self.filter
    }

    /// Leads passing the active filter, judged on the local clock
    pub fn visible_leads(&self) -> Vec<&Lead> {
        self.visible_leads_at(&Local::now())
    }

    /// Leads passing the active filter, with named date windows anchored at `now`
    pub fn visible_leads_at<Tz: TimeZone>(&self, now: &DateTime<Tz>) -> Vec<&Lead> {
        filter::apply(&self.leads, &self.filter, now)
    }

    // ===== PRIVATE HELPERS =====

    fn position(&self, id: &str) -> Option<usize> {
        self.leads.iter().position(|l| l.id == id)
    }

    fn require(&self, id: &str) -> Result<usize> {
        self.position(id)
            .ok_or_else(|| LeadflowError::NotFound(id.to_string()))
    }

    fn require_user(&self, id: &str) -> Result<&User> {
        self.references
            .find_user(id)
            .ok_or_else(|| LeadflowError::validation(format!("unknown user: {}", id)))
    }

    fn resolve_user(&self, id: Option<&str>) -> Result<Option<User>> {
        match id.map(str::trim).filter(|id| !id.is_empty()) {
            Some(id) => self.require_user(id).cloned().map(Some),
            None => Ok(None),
        }
    }

    fn resolve_origin(&self, id: Option<&str>) -> Result<Option<LeadOriginType>> {
        match id.map(str::trim).filter(|id| !id.is_empty()) {
            Some(id) => self
                .references
                .find_origin(id)
                .cloned()
                .map(Some)
                .ok_or_else(|| LeadflowError::validation(format!("unknown origin: {}", id))),
            None => Ok(None),
        }
    }

    fn resolve_event(&self, id: Option<&str>) -> Result<Option<Event>> {
        match id.map(str::trim).filter(|id| !id.is_empty()) {
            Some(id) => self
                .references
                .find_event(id)
                .cloned()
                .map(Some)
                .ok_or_else(|| LeadflowError::validation(format!("unknown event: {}", id))),
            None => Ok(None),
        }
    }

    fn append_drafts(
        &self,
        mut lead: Lead,
        drafts: &[InteractionDraft],
        at: DateTime<Utc>,
    ) -> Result<Lead> {
        for draft in drafts {
            let attendant = draft
                .attendant_id
                .as_deref()
                .map(str::trim)
                .filter(|id| !id.is_empty());
            if let Some(attendant) = attendant {
                self.require_user(attendant)?;
            }
            lead = ledger::append(lead, &draft.note, attendant, at)?;
        }
        Ok(lead)
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
