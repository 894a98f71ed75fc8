//! CLI module for leadflow
//!
//! Provides the command-line interface using clap.

pub mod commands;
mod workspace;

pub use workspace::Workspace;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::schemas::{BudgetTier, DateFilterMode, Gender, Stage};

/// Leadflow - Track sales leads through the pipeline
#[derive(Parser, Debug)]
#[command(name = "leadflow")]
#[command(version)]
#[command(about = "Track sales leads through the pipeline")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress info-level output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Override the working directory
    #[arg(long, global = true)]
    pub cwd: Option<PathBuf>,

    /// Board snapshot to use instead of the configured one
    #[arg(long, global = true)]
    pub board: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the pipeline stages in board order
    Stages,

    /// Show leads grouped by stage
    Board,

    /// List leads matching the given filters
    List(ListArgs),

    /// Show details and interaction history of a lead
    Show {
        /// Lead ID
        id: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Create a lead
    Add(AddArgs),

    /// Move a lead to another stage
    Move {
        /// Lead ID
        id: String,

        /// Target stage (online_interest, store_interest, scheduled, closed_first,
        /// not_closed_chance, closed_later, lost)
        stage: Stage,

        /// What happened; required when resolving an early-stage lead
        #[arg(long)]
        note: Option<String>,

        /// Id of the user who attended the customer
        #[arg(long)]
        attendant: Option<String>,
    },

    /// Delete a lead
    Delete {
        /// Lead ID
        id: String,
    },

    /// Show the assignees, origins and events currently in use
    Refs {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Args, Debug, Default)]
pub struct ListArgs {
    /// Case-insensitive text searched in name, email, message and additional info
    #[arg(long)]
    pub search: Option<String>,

    /// Budget tier (low, medium, high)
    #[arg(long)]
    pub budget: Option<BudgetTier>,

    /// Assignee user id
    #[arg(long)]
    pub assignee: Option<String>,

    /// Origin id
    #[arg(long)]
    pub origin: Option<String>,

    /// Event id
    #[arg(long)]
    pub event: Option<String>,

    /// Date window (all, today, yesterday, last7days, last30days, custom)
    #[arg(long)]
    pub date: Option<DateFilterMode>,

    /// First day of a custom window (YYYY-MM-DD)
    #[arg(long)]
    pub from: Option<NaiveDate>,

    /// Last day of a custom window (YYYY-MM-DD)
    #[arg(long)]
    pub to: Option<NaiveDate>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug)]
pub struct AddArgs {
    /// Stage the lead starts in
    #[arg(long, default_value = "online_interest")]
    pub stage: Stage,

    /// Customer name
    #[arg(long)]
    pub name: String,

    /// Customer phone
    #[arg(long)]
    pub phone: String,

    /// Customer email
    #[arg(long)]
    pub email: Option<String>,

    /// Customer city
    #[arg(long)]
    pub city: Option<String>,

    /// Customer gender (female, male)
    #[arg(long)]
    pub gender: Gender,

    /// Budget
    #[arg(long, default_value_t = 0.0)]
    pub budget: f64,

    /// Assignee user id
    #[arg(long)]
    pub assignee: Option<String>,

    /// Origin id
    #[arg(long)]
    pub origin: Option<String>,

    /// Event id
    #[arg(long)]
    pub event: Option<String>,

    /// Customer message
    #[arg(long)]
    pub message: Option<String>,

    /// Additional information
    #[arg(long)]
    pub info: Option<String>,

    /// First interaction note
    #[arg(long)]
    pub note: Option<String>,

    /// Attendant of the first interaction
    #[arg(long, requires = "note")]
    pub attendant: Option<String>,
}
