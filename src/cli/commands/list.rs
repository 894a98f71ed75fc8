//! List command - List leads with optional filtering

use crate::cli::{ListArgs, Workspace};
use crate::errors::{LeadflowError, Result};
use crate::schemas::{DateFilter, DateFilterMode, FilterSpec, Selector};

use super::{print_json, summary_line};

/// List the leads passing the filters given on the command line
pub fn run(ws: &Workspace, args: &ListArgs) -> Result<()> {
    let mut repo = ws.load_repository()?;
    repo.set_filter_spec(build_filter_spec(args, ws.config.default_date_filter)?);

    let visible = repo.visible_leads();
    if args.json {
        return print_json(&visible);
    }

    for lead in &visible {
        println!("{}", summary_line(lead));
    }
    println!("{} of {} leads", visible.len(), repo.leads().len());
    Ok(())
}

/// Translate command-line flags into a filter spec.
///
/// `--from`/`--to` without `--date` imply a custom window.
pub fn build_filter_spec(args: &ListArgs, default_mode: DateFilterMode) -> Result<FilterSpec> {
    let has_bounds = args.from.is_some() || args.to.is_some();
    let mode = match args.date {
        Some(mode) => mode,
        None if has_bounds => DateFilterMode::Custom,
        None => default_mode,
    };

    if let (Some(from), Some(to)) = (args.from, args.to) {
        if from > to {
            return Err(LeadflowError::validation(format!(
                "--from {} is after --to {}",
                from, to
            )));
        }
    }

    let date = if mode == DateFilterMode::Custom {
        DateFilter {
            mode,
            custom_start: args.from,
            custom_end: args.to,
        }
    } else {
        DateFilter::named(mode)
    };

    Ok(FilterSpec {
        search: args.search.clone().unwrap_or_default(),
        budget: Selector::from(args.budget),
        assignee: Selector::from(args.assignee.clone()),
        origin: Selector::from(args.origin.clone()),
        event: Selector::from(args.event.clone()),
        date,
    })
}
