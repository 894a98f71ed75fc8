//! Form schema - Caller-supplied data for creating and updating leads

use serde::{Deserialize, Serialize};

use crate::errors::{LeadflowError, Result};

use super::{Customer, Gender};

/// Customer fields of the lead form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerForm {
    pub name: String,
    pub phone: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub city: Option<String>,
    pub gender: Gender,
}

impl CustomerForm {
    pub fn new(name: impl Into<String>, phone: impl Into<String>, gender: Gender) -> Self {
        CustomerForm {
            name: name.into(),
            phone: phone.into(),
            email: String::new(),
            city: None,
            gender,
        }
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    pub fn with_city(mut self, city: impl Into<String>) -> Self {
        self.city = Some(city.into());
        self
    }

    /// Build the customer record, trimming the name.
    pub fn into_customer(self) -> Customer {
        Customer {
            name: self.name.trim().to_string(),
            phone: self.phone,
            email: self.email,
            city: self.city.filter(|c| !c.trim().is_empty()),
            gender: self.gender,
        }
    }
}

/// A note typed on the form that has not been committed to the ledger yet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InteractionDraft {
    pub note: String,
    #[serde(default)]
    pub attendant_id: Option<String>,
}

impl InteractionDraft {
    pub fn new(note: impl Into<String>, attendant_id: Option<String>) -> Self {
        InteractionDraft {
            note: note.into(),
            attendant_id,
        }
    }
}

/// Everything the lead form submits.
///
/// Reference fields carry ids; `None` means "no reference".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeadForm {
    pub customer: CustomerForm,
    pub budget: f64,
    #[serde(default)]
    pub assignee_id: Option<String>,
    #[serde(default)]
    pub origin_id: Option<String>,
    #[serde(default)]
    pub event_id: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub additional_info: Option<String>,
    #[serde(default)]
    pub interactions: Vec<InteractionDraft>,
}

impl LeadForm {
    pub fn new(customer: CustomerForm, budget: f64) -> Self {
        LeadForm {
            customer,
            budget,
            assignee_id: None,
            origin_id: None,
            event_id: None,
            message: None,
            additional_info: None,
            interactions: Vec::new(),
        }
    }

    pub fn with_assignee(mut self, id: impl Into<String>) -> Self {
        self.assignee_id = Some(id.into());
        self
    }

    pub fn with_origin(mut self, id: impl Into<String>) -> Self {
        self.origin_id = Some(id.into());
        self
    }

    pub fn with_event(mut self, id: impl Into<String>) -> Self {
        self.event_id = Some(id.into());
        self
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn with_additional_info(mut self, info: impl Into<String>) -> Self {
        self.additional_info = Some(info.into());
        self
    }

    pub fn with_interaction(mut self, draft: InteractionDraft) -> Self {
        self.interactions.push(draft);
        self
    }

    /// Check the field-level rules: a customer name and a usable budget.
    pub fn validate(&self) -> Result<()> {
        validate_customer_name(&self.customer.name)?;
        validate_budget(self.budget)?;
        for draft in &self.interactions {
            if draft.note.trim().is_empty() {
                return Err(LeadflowError::validation("interaction note cannot be empty"));
            }
        }
        Ok(())
    }
}

pub fn validate_customer_name(name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(LeadflowError::validation("customer name cannot be empty"));
    }
    Ok(())
}

pub fn validate_budget(budget: f64) -> Result<()> {
    if !budget.is_finite() {
        return Err(LeadflowError::validation(format!(
            "budget must be a finite number, got {}",
            budget
        )));
    }
    if budget < 0.0 {
        return Err(LeadflowError::validation(format!(
            "budget cannot be negative, got {}",
            budget
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_form() -> LeadForm {
        LeadForm::new(CustomerForm::new("Maria", "555-0100", Gender::Female), 12000.0)
    }

    #[test]
    fn test_valid_form() {
        assert!(make_form().validate().is_ok());
    }

    #[test]
    fn test_blank_name_rejected() {
        let mut form = make_form();
        form.customer.name = "   ".to_string();

        let err = form.validate().unwrap_err();
        assert_eq!(err.code(), "VALIDATION");
        assert!(err.to_string().contains("customer name"));
    }

    #[test]
    fn test_negative_budget_rejected() {
        let mut form = make_form();
        form.budget = -1.0;
        assert!(form.validate().is_err());

        form.budget = f64::NAN;
        assert!(form.validate().is_err());

        form.budget = 0.0;
        assert!(form.validate().is_ok());
    }

    #[test]
    fn test_blank_interaction_rejected() {
        let form = make_form().with_interaction(InteractionDraft::new(" ", Some("u1".into())));
        assert!(form.validate().is_err());
    }

    #[test]
    fn test_into_customer_trims_name_and_drops_blank_city() {
        let customer = CustomerForm::new("  Maria  ", "555", Gender::Female)
            .with_city(" ")
            .into_customer();
        assert_eq!(customer.name, "Maria");
        assert!(customer.city.is_none());
    }
}
