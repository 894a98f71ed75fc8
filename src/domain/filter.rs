//! Lead filtering
//!
//! A lead is visible when every selector of the [`FilterSpec`] accepts it.
//! Selectors left at "all" accept everything, so predicates compose freely.

use chrono::{DateTime, TimeZone};

use crate::schemas::{BudgetTier, DateFilter, DateFilterMode, FilterSpec, Lead, Selector};

use super::budget::classify;
use super::temporal::{resolve_named_range, to_local, LocalRange};

/// Keep the leads matching `spec`, preserving input order.
///
/// `now` anchors the named date windows; its time zone decides which
/// calendar day a creation timestamp falls on.
pub fn apply<'a, Tz: TimeZone>(
    leads: &'a [Lead],
    spec: &FilterSpec,
    now: &DateTime<Tz>,
) -> Vec<&'a Lead> {
    let visible: Vec<&Lead> = leads.iter().filter(|lead| matches(lead, spec, now)).collect();
    tracing::debug!(
        total = leads.len(),
        visible = visible.len(),
        "applied lead filter"
    );
    visible
}

/// Whether a single lead passes every selector.
pub fn matches<Tz: TimeZone>(lead: &Lead, spec: &FilterSpec, now: &DateTime<Tz>) -> bool {
    matches_search(lead, &spec.search)
        && matches_budget(lead, &spec.budget)
        && matches_reference(&spec.assignee, lead.assignee_id())
        && matches_reference(&spec.origin, lead.origin_id())
        && matches_reference(&spec.event, lead.event_id())
        && matches_date(lead, &spec.date, now)
}

/// Case-insensitive substring search over name, email, message and additional info.
pub fn matches_search(lead: &Lead, term: &str) -> bool {
    let term = term.to_lowercase();
    if term.is_empty() {
        return true;
    }

    let fields = [
        Some(lead.customer.name.as_str()),
        Some(lead.customer.email.as_str()),
        lead.message.as_deref(),
        lead.additional_info.as_deref(),
    ];
    fields
        .into_iter()
        .flatten()
        .any(|field| field.to_lowercase().contains(&term))
}

pub fn matches_budget(lead: &Lead, selector: &Selector<BudgetTier>) -> bool {
    selector.matches(Some(&classify(lead.budget)))
}

/// A lead without the reference only matches `All`.
pub fn matches_reference(selector: &Selector<String>, id: Option<&str>) -> bool {
    match selector {
        Selector::All => true,
        Selector::Only(expected) => id == Some(expected.as_str()),
    }
}

/// Calendar-day containment of the lead's creation date in the filter window.
///
/// A custom window missing either boundary matches everything.
pub fn matches_date<Tz: TimeZone>(lead: &Lead, filter: &DateFilter, now: &DateTime<Tz>) -> bool {
    let range = match filter.mode {
        DateFilterMode::All => return true,
        DateFilterMode::Custom => match (filter.custom_start, filter.custom_end) {
            (Some(start), Some(end)) => LocalRange::days(start, end),
            _ => return true,
        },
        mode => {
            let today = now.naive_local().date();
            match resolve_named_range(mode, today) {
                Some(range) => range,
                None => return true,
            }
        }
    };

    range.contains(to_local(&lead.created_at, &now.timezone()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schemas::{Customer, Event, Gender, LeadOriginType, Stage, User};
    use chrono::{Duration, FixedOffset, NaiveDate, Utc};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2030, 6, 15, 14, 0, 0).unwrap()
    }

    fn make_lead(id: &str, name: &str, budget: f64) -> Lead {
        Lead::new(
            id.to_string(),
            "tenant-a".to_string(),
            Customer {
                name: name.to_string(),
                phone: "555".to_string(),
                email: format!("{}@example.com", id),
                city: None,
                gender: Gender::Male,
            },
            Stage::OnlineInterest,
            budget,
        )
        .with_created_at(now() - Duration::hours(1))
    }

    fn sample_leads() -> Vec<Lead> {
        vec![
            make_lead("a", "Ana Lima", 5000.0)
                .with_assignee(Some(User::new("u1", "Paula")))
                .with_message(Some("Wants a SUV".to_string())),
            make_lead("b", "Bruno Alves", 15000.0)
                .with_origin(Some(LeadOriginType::new("o1", "Instagram")))
                .with_created_at(now() - Duration::days(3)),
            make_lead("c", "Carla Dias", 30000.0)
                .with_assignee(Some(User::new("u2", "Rafael")))
                .with_event(Some(Event::new("e1", "Auto fair")))
                .with_additional_info(Some("Trade-in: sedan".to_string()))
                .with_created_at(now() - Duration::days(20)),
        ]
    }

    fn ids(leads: &[&Lead]) -> Vec<String> {
        leads.iter().map(|l| l.id.clone()).collect()
    }

    #[test]
    fn test_default_spec_keeps_everything_in_order() {
        let leads = sample_leads();
        let visible = apply(&leads, &FilterSpec::default(), &now());
        assert_eq!(ids(&visible), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_search_is_case_insensitive_across_fields() {
        let leads = sample_leads();

        let by_name = apply(&leads, &FilterSpec::default().with_search("BRUNO"), &now());
        assert_eq!(ids(&by_name), vec!["b"]);

        let by_email = apply(&leads, &FilterSpec::default().with_search("c@example"), &now());
        assert_eq!(ids(&by_email), vec!["c"]);

        let by_message = apply(&leads, &FilterSpec::default().with_search("suv"), &now());
        assert_eq!(ids(&by_message), vec!["a"]);

        let by_info = apply(&leads, &FilterSpec::default().with_search("trade-in"), &now());
        assert_eq!(ids(&by_info), vec!["c"]);

        let none = apply(&leads, &FilterSpec::default().with_search("zebra"), &now());
        assert!(none.is_empty());
    }

    #[test]
    fn test_search_term_is_matched_verbatim() {
        let leads = sample_leads();

        let trailing = apply(&leads, &FilterSpec::default().with_search("lima "), &now());
        assert!(trailing.is_empty());

        let leading = apply(&leads, &FilterSpec::default().with_search(" lima"), &now());
        assert_eq!(ids(&leading), vec!["a"]);
    }

    #[test]
    fn test_budget_tier_selector() {
        let leads = sample_leads();

        let spec = FilterSpec::default().with_budget(BudgetTier::Medium);
        assert_eq!(ids(&apply(&leads, &spec, &now())), vec!["b"]);

        let spec = FilterSpec::default().with_budget(BudgetTier::High);
        assert_eq!(ids(&apply(&leads, &spec, &now())), vec!["c"]);
    }

    #[test]
    fn test_reference_selectors_skip_leads_without_reference() {
        let leads = sample_leads();

        let spec = FilterSpec::default().with_assignee("u1");
        assert_eq!(ids(&apply(&leads, &spec, &now())), vec!["a"]);

        let spec = FilterSpec::default().with_origin("o1");
        assert_eq!(ids(&apply(&leads, &spec, &now())), vec!["b"]);

        let spec = FilterSpec::default().with_event("e1");
        assert_eq!(ids(&apply(&leads, &spec, &now())), vec!["c"]);

        let spec = FilterSpec::default().with_event("missing");
        assert!(apply(&leads, &spec, &now()).is_empty());
    }

    #[test]
    fn test_named_date_windows() {
        let leads = sample_leads();

        let today = FilterSpec::default().with_date(DateFilter::named(DateFilterMode::Today));
        assert_eq!(ids(&apply(&leads, &today, &now())), vec!["a"]);

        let week = FilterSpec::default().with_date(DateFilter::named(DateFilterMode::Last7Days));
        assert_eq!(ids(&apply(&leads, &week, &now())), vec!["a", "b"]);

        let month = FilterSpec::default().with_date(DateFilter::named(DateFilterMode::Last30Days));
        assert_eq!(ids(&apply(&leads, &month, &now())), vec!["a", "b", "c"]);

        let yesterday =
            FilterSpec::default().with_date(DateFilter::named(DateFilterMode::Yesterday));
        assert!(apply(&leads, &yesterday, &now()).is_empty());
    }

    #[test]
    fn test_custom_window_uses_calendar_days() {
        let lead = make_lead("late", "Late Night", 100.0)
            .with_created_at(Utc.with_ymd_and_hms(2030, 6, 10, 23, 59, 59).unwrap());
        let day = NaiveDate::from_ymd_opt(2030, 6, 10).unwrap();

        let filter = DateFilter::custom(day, day);
        assert!(matches_date(&lead, &filter, &now()));

        let next_day = NaiveDate::from_ymd_opt(2030, 6, 11).unwrap();
        assert!(!matches_date(&lead, &DateFilter::custom(next_day, next_day), &now()));
    }

    #[test]
    fn test_custom_window_without_boundaries_matches_everything() {
        let lead = make_lead("a", "Ana", 100.0);
        let day = NaiveDate::from_ymd_opt(1999, 1, 1).unwrap();

        let missing_both = DateFilter::named(DateFilterMode::Custom);
        let missing_end = DateFilter {
            mode: DateFilterMode::Custom,
            custom_start: Some(day),
            custom_end: None,
        };
        assert!(matches_date(&lead, &missing_both, &now()));
        assert!(matches_date(&lead, &missing_end, &now()));
    }

    #[test]
    fn test_date_window_follows_observer_time_zone() {
        // 01:00 UTC on the 15th is still the 14th three hours west of UTC
        let lead = make_lead("a", "Ana", 100.0)
            .with_created_at(Utc.with_ymd_and_hms(2030, 6, 15, 1, 0, 0).unwrap());
        let west = FixedOffset::west_opt(3 * 3600).unwrap();
        let local_now = now().with_timezone(&west);

        let today = DateFilter::named(DateFilterMode::Today);
        let yesterday = DateFilter::named(DateFilterMode::Yesterday);

        assert!(matches_date(&lead, &today, &now()));
        assert!(!matches_date(&lead, &today, &local_now));
        assert!(matches_date(&lead, &yesterday, &local_now));
    }

    #[test]
    fn test_all_selectors_combined() {
        let leads = sample_leads();
        let spec = FilterSpec::default()
            .with_search("carla")
            .with_budget(BudgetTier::High)
            .with_assignee("u2")
            .with_event("e1")
            .with_date(DateFilter::named(DateFilterMode::Last30Days));

        assert_eq!(ids(&apply(&leads, &spec, &now())), vec!["c"]);

        let spec = spec.with_origin("o1");
        assert!(apply(&leads, &spec, &now()).is_empty());
    }
}
