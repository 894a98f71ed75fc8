//! Add command - Create a lead

use crate::cli::{AddArgs, Workspace};
use crate::errors::Result;
use crate::schemas::{CustomerForm, InteractionDraft, LeadForm};

/// Create a lead and save the board
pub fn run(ws: &Workspace, args: AddArgs) -> Result<()> {
    let mut repo = ws.load_repository()?;
    let stage = args.stage;
    let lead = repo.create_lead(stage, into_form(args))?;
    ws.save_repository(&repo)?;

    println!("Created lead {} in {}", lead.id, stage);
    Ok(())
}

pub fn into_form(args: AddArgs) -> LeadForm {
    let mut customer = CustomerForm::new(args.name, args.phone, args.gender);
    if let Some(email) = args.email {
        customer = customer.with_email(email);
    }
    if let Some(city) = args.city {
        customer = customer.with_city(city);
    }

    let mut form = LeadForm::new(customer, args.budget);
    form.assignee_id = args.assignee;
    form.origin_id = args.origin;
    form.event_id = args.event;
    form.message = args.message;
    form.additional_info = args.info;
    if let Some(note) = args.note {
        form = form.with_interaction(InteractionDraft::new(note, args.attendant));
    }
    form
}
