//! Leadflow - Sales-pipeline tracking core
//!
//! This library provides:
//! - Schema definitions for leads, customers, interactions and reference data
//! - The stage transition policy and the append-only interaction ledger
//! - The multi-criteria lead filter and its calendar-day date windows
//! - An in-memory lead repository enforcing all of the above
//! - JSON snapshot persistence and a thin CLI shell

pub mod cli;
pub mod config;
pub mod domain;
pub mod errors;
pub mod fs;
pub mod repository;
pub mod schemas;

// Re-export commonly used types
pub use errors::{LeadflowError, Result};
pub use repository::LeadRepository;
pub use schemas::{FilterSpec, Interaction, Lead, LeadForm, Stage};
