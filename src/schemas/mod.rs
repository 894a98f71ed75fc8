//! Schema types for leadflow
//!
//! Plain serde records; the rules that act on them live in `domain`.

mod board;
mod config;
mod filter;
mod form;
mod lead;
mod reference;
mod stage;

pub use board::Board;
pub use config::Config;
pub use filter::{BudgetTier, DateFilter, DateFilterMode, FilterSpec, Selector};
pub use form::{validate_budget, validate_customer_name, CustomerForm, InteractionDraft, LeadForm};
pub use lead::{Customer, Gender, Interaction, Lead};
pub use reference::{Event, EventType, LeadOriginType, References, User};
pub use stage::{Phase, Stage};
