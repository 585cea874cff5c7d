//! Contact form fields and the submission state machine.
//!
//! ```text
//! Idle --begin_submit--> Submitting --finish_submit(Ok)--> Submitted
//!                                   --finish_submit(Err)-> Idle (+ error, fields kept)
//! Submitted --reset--> Idle
//! ```

use std::fmt::Display;

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::CoreError;

/// Shown when the submission could not be stored.
pub const SUBMIT_FAILED_MESSAGE: &str =
    "Une erreur est survenue. Veuillez réessayer ou nous appeler directement.";

/// Extra choice appended after the visible services in the dropdown.
pub const OTHER_SERVICE: &str = "Autre";

/// What a visitor types into the quote request form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ContactFields {
    #[validate(length(min = 1, max = 200, message = "must not be empty"))]
    pub name: String,
    #[validate(length(min = 1, max = 50, message = "must not be empty"))]
    pub phone: String,
    #[validate(email(message = "must be a valid email address"))]
    pub email: String,
    #[validate(length(min = 1, max = 200, message = "must be selected"))]
    pub service: String,
    #[validate(length(min = 1, max = 5000, message = "must not be empty"))]
    pub description: String,
}

impl ContactFields {
    /// Validate after trimming surrounding whitespace from every field.
    pub fn cleaned(&self) -> Result<ContactFields, CoreError> {
        let cleaned = ContactFields {
            name: self.name.trim().to_string(),
            phone: self.phone.trim().to_string(),
            email: self.email.trim().to_string(),
            service: self.service.trim().to_string(),
            description: self.description.trim().to_string(),
        };
        cleaned.validate()?;
        Ok(cleaned)
    }
}

/// Dropdown options: visible service titles, then [`OTHER_SERVICE`].
pub fn service_options(visible_titles: Vec<String>) -> Vec<String> {
    let mut options = visible_titles;
    options.push(OTHER_SERVICE.to_string());
    options
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ContactFormState {
    Idle,
    Submitting,
    Submitted,
}

#[derive(Debug, Clone)]
pub struct ContactForm {
    fields: ContactFields,
    state: ContactFormState,
    error: Option<String>,
}

impl ContactForm {
    /// A blank form, optionally preselecting the service from a
    /// "request a quote" link.
    pub fn new(preselected_service: Option<&str>) -> Self {
        Self {
            fields: ContactFields {
                service: preselected_service.unwrap_or_default().to_string(),
                ..ContactFields::default()
            },
            state: ContactFormState::Idle,
            error: None,
        }
    }

    pub fn state(&self) -> ContactFormState {
        self.state
    }

    pub fn fields(&self) -> &ContactFields {
        &self.fields
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Mutable access for editing; `None` unless the form is idle.
    pub fn fields_mut(&mut self) -> Option<&mut ContactFields> {
        (self.state == ContactFormState::Idle).then_some(&mut self.fields)
    }

    /// Validate and move to `Submitting`, returning the payload to send.
    pub fn begin_submit(&mut self) -> Result<ContactFields, CoreError> {
        if self.state != ContactFormState::Idle {
            return Err(CoreError::Conflict(format!(
                "Cannot submit while form is {:?}",
                self.state
            )));
        }
        let payload = self.fields.cleaned()?;
        self.error = None;
        self.state = ContactFormState::Submitting;
        Ok(payload)
    }

    /// Apply the outcome of the store insert.
    pub fn finish_submit<E: Display>(&mut self, outcome: Result<(), E>) {
        if self.state != ContactFormState::Submitting {
            return;
        }
        match outcome {
            Ok(()) => {
                self.fields = ContactFields::default();
                self.state = ContactFormState::Submitted;
            }
            Err(_) => {
                self.error = Some(SUBMIT_FAILED_MESSAGE.to_string());
                self.state = ContactFormState::Idle;
            }
        }
    }

    /// "Send another request".
    pub fn reset(&mut self) {
        if self.state == ContactFormState::Submitted {
            self.state = ContactFormState::Idle;
            self.error = None;
        }
    }
}
