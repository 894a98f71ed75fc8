//! Filter specification schema - Which leads are currently visible

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Budget category a lead falls into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BudgetTier {
    Low,
    Medium,
    High,
}

impl std::fmt::Display for BudgetTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BudgetTier::Low => write!(f, "low"),
            BudgetTier::Medium => write!(f, "medium"),
            BudgetTier::High => write!(f, "high"),
        }
    }
}

impl std::str::FromStr for BudgetTier {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "low" => Ok(BudgetTier::Low),
            "medium" => Ok(BudgetTier::Medium),
            "high" => Ok(BudgetTier::High),
            _ => Err(format!("Unknown budget tier: {}", s)),
        }
    }
}

/// A selector that either matches everything or one specific value
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Selector<T> {
    All,
    Only(T),
}

impl<T> Default for Selector<T> {
    fn default() -> Self {
        Selector::All
    }
}

impl<T: PartialEq> Selector<T> {
    pub fn is_all(&self) -> bool {
        matches!(self, Selector::All)
    }

    /// Whether a value satisfies the selector.
    ///
    /// An absent value only satisfies `All`.
    pub fn matches(&self, value: Option<&T>) -> bool {
        match self {
            Selector::All => true,
            Selector::Only(expected) => value == Some(expected),
        }
    }
}

impl<T> From<Option<T>> for Selector<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => Selector::Only(v),
            None => Selector::All,
        }
    }
}

/// Date window applied to a lead's creation timestamp
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum DateFilterMode {
    #[default]
    All,
    Today,
    Yesterday,
    #[serde(rename = "last7days")]
    Last7Days,
    #[serde(rename = "last30days")]
    Last30Days,
    Custom,
}

impl std::fmt::Display for DateFilterMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DateFilterMode::All => write!(f, "all"),
            DateFilterMode::Today => write!(f, "today"),
            DateFilterMode::Yesterday => write!(f, "yesterday"),
            DateFilterMode::Last7Days => write!(f, "last7days"),
            DateFilterMode::Last30Days => write!(f, "last30days"),
            DateFilterMode::Custom => write!(f, "custom"),
        }
    }
}

impl std::str::FromStr for DateFilterMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(DateFilterMode::All),
            "today" => Ok(DateFilterMode::Today),
            "yesterday" => Ok(DateFilterMode::Yesterday),
            "last7days" => Ok(DateFilterMode::Last7Days),
            "last30days" => Ok(DateFilterMode::Last30Days),
            "custom" => Ok(DateFilterMode::Custom),
            _ => Err(format!("Unknown date filter: {}", s)),
        }
    }
}

/// Date filter mode plus the calendar dates used by `custom`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct DateFilter {
    #[serde(default)]
    pub mode: DateFilterMode,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_start: Option<NaiveDate>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_end: Option<NaiveDate>,
}

impl DateFilter {
    pub fn named(mode: DateFilterMode) -> Self {
        DateFilter {
            mode,
            custom_start: None,
            custom_end: None,
        }
    }

    pub fn custom(start: NaiveDate, end: NaiveDate) -> Self {
        DateFilter {
            mode: DateFilterMode::Custom,
            custom_start: Some(start),
            custom_end: Some(end),
        }
    }
}

/// The combined selectors that decide which leads are visible.
///
/// A value object: callers replace it wholesale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct FilterSpec {
    /// Case-insensitive substring searched in name, email, message and additional info
    #[serde(default)]
    pub search: String,

    #[serde(default)]
    pub budget: Selector<BudgetTier>,

    #[serde(default)]
    pub assignee: Selector<String>,

    #[serde(default)]
    pub origin: Selector<String>,

    #[serde(default)]
    pub event: Selector<String>,

    #[serde(default)]
    pub date: DateFilter,
}

impl FilterSpec {
    // ===== IMMUTABLE BUILDER METHODS =====

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    pub fn with_budget(mut self, tier: BudgetTier) -> Self {
        self.budget = Selector::Only(tier);
        self
    }

    pub fn with_assignee(mut self, id: impl Into<String>) -> Self {
        self.assignee = Selector::Only(id.into());
        self
    }

    pub fn with_origin(mut self, id: impl Into<String>) -> Self {
        self.origin = Selector::Only(id.into());
        self
    }

    pub fn with_event(mut self, id: impl Into<String>) -> Self {
        self.event = Selector::Only(id.into());
        self
    }

    pub fn with_date(mut self, date: DateFilter) -> Self {
        self.date = date;
        self
    }

    /// Whether every selector is in its match-everything state
    pub fn is_unfiltered(&self) -> bool {
        self.search.is_empty()
            && self.budget.is_all()
            && self.assignee.is_all()
            && self.origin.is_all()
            && self.event.is_all()
            && self.date.mode == DateFilterMode::All
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selector_matches() {
        let all: Selector<String> = Selector::All;
        assert!(all.matches(None));
        assert!(all.matches(Some(&"u1".to_string())));

        let only = Selector::Only("u1".to_string());
        assert!(only.matches(Some(&"u1".to_string())));
        assert!(!only.matches(Some(&"u2".to_string())));
        assert!(!only.matches(None));
    }

    #[test]
    fn test_date_filter_mode_serialization() {
        assert_eq!(serde_json::to_string(&DateFilterMode::Last7Days).unwrap(), "\"last7days\"");
        assert_eq!(serde_json::to_string(&DateFilterMode::Last30Days).unwrap(), "\"last30days\"");
        assert_eq!(serde_json::to_string(&DateFilterMode::Today).unwrap(), "\"today\"");
        assert_eq!(
            "last30days".parse::<DateFilterMode>().unwrap(),
            DateFilterMode::Last30Days
        );
    }

    #[test]
    fn test_default_spec_is_unfiltered() {
        assert!(FilterSpec::default().is_unfiltered());
        assert!(FilterSpec::default().with_search("   ").is_unfiltered());
        assert!(!FilterSpec::default().with_budget(BudgetTier::High).is_unfiltered());
        assert!(!FilterSpec::default()
            .with_date(DateFilter::named(DateFilterMode::Today))
            .is_unfiltered());
    }

    #[test]
    fn test_filter_spec_partial_json() {
        let json = r#"{"search": "maria", "assignee": {"only": "u1"}}"#;
        let spec: FilterSpec = serde_json::from_str(json).unwrap();

        assert_eq!(spec.search, "maria");
        assert_eq!(spec.assignee, Selector::Only("u1".to_string()));
        assert!(spec.budget.is_all());
        assert_eq!(spec.date.mode, DateFilterMode::All);
    }

    #[test]
    fn test_selector_from_option() {
        assert_eq!(Selector::from(Some(BudgetTier::Low)), Selector::Only(BudgetTier::Low));
        assert_eq!(Selector::<BudgetTier>::from(None), Selector::All);
    }
}
