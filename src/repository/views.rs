//! Derived read views, recomputed from the current collection on every call

use std::collections::HashSet;

use crate::domain::taxonomy::PIPELINE_STAGES;
use crate::schemas::{Event, Lead, LeadOriginType, Stage, User};

use super::LeadRepository;

impl LeadRepository {
    /// Leads grouped by stage, one entry per stage in board order (empty stages included)
    pub fn leads_by_stage(&self) -> Vec<(Stage, Vec<&Lead>)> {
        PIPELINE_STAGES
            .iter()
            .map(|&stage| {
                let column: Vec<&Lead> = self.leads.iter().filter(|l| l.stage == stage).collect();
                (stage, column)
            })
            .collect()
    }

    /// Leads currently at one stage
    pub fn leads_in_stage(&self, stage: Stage) -> Vec<&Lead> {
        self.leads.iter().filter(|l| l.stage == stage).collect()
    }

    /// Distinct assignees in use, first-seen order
    pub fn unique_assignees(&self) -> Vec<&User> {
        distinct_by_id(self.leads.iter().filter_map(|l| l.assignee.as_ref()), |u| &u.id)
    }

    /// Distinct origins in use, first-seen order
    pub fn unique_origins(&self) -> Vec<&LeadOriginType> {
        distinct_by_id(self.leads.iter().filter_map(|l| l.origin.as_ref()), |o| &o.id)
    }

    /// Distinct events in use, first-seen order
    pub fn unique_events(&self) -> Vec<&Event> {
        distinct_by_id(self.leads.iter().filter_map(|l| l.event.as_ref()), |e| &e.id)
    }
}

fn distinct_by_id<'a, T, I, F>(items: I, id: F) -> Vec<&'a T>
where
    I: Iterator<Item = &'a T>,
    F: Fn(&'a T) -> &'a String,
{
    let mut seen: HashSet<&str> = HashSet::new();
    items.filter(|item| seen.insert(id(*item).as_str())).collect()
}
