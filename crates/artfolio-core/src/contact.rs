//! Contact form: validation, annotation and simulated submission.

use std::collections::BTreeMap;

use rand::Rng;

use crate::chrome::{LockOwner, PageChrome};
use crate::confetti::ParticleId;
use crate::config::InteractionConfig;
use crate::modal::{self, ModalState};
use crate::submit::SubmitControl;
use crate::surface::Surface;
use crate::validate::{check_field, validate_contact, ContactField, FieldErrors, FormSnapshot};

pub const SUBMIT_LABEL: &str = "Send Message";
pub const SENDING_LABEL: &str = "Sending...";

/// Live state of the contact form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactForm {
    values: BTreeMap<ContactField, String>,
    errors: FieldErrors,
    submit: SubmitControl,
}

impl Default for ContactForm {
    fn default() -> Self {
        Self::new(SUBMIT_LABEL)
    }
}

impl ContactForm {
    pub fn new(submit_label: &str) -> Self {
        Self {
            values: BTreeMap::new(),
            errors: FieldErrors::new(),
            submit: SubmitControl::new(submit_label),
        }
    }

    pub fn value(&self, field: ContactField) -> &str {
        self.values.get(&field).map(String::as_str).unwrap_or("")
    }

    /// Update a field. An annotated field is re-checked against the new
    /// value: the annotation follows the current failure, or is dropped once
    /// the value passes. Unannotated fields stay quiet until the next submit.
    pub fn set(&mut self, field: ContactField, value: impl Into<String>) {
        let value = value.into();
        if self.errors.get(field).is_some() {
            match check_field(field, &value) {
                Some(error) => self.errors.set(field, error),
                None => self.errors.clear(field),
            }
        }
        self.values.insert(field, value);
    }

    pub fn snapshot(&self) -> FormSnapshot {
        ContactField::REQUIRED
            .into_iter()
            .map(|f| (f.name(), self.value(f).to_string()))
            .collect()
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn submit_control(&self) -> &SubmitControl {
        &self.submit
    }

    /// Validate and, on success, enter the pending state.
    ///
    /// The annotations are replaced wholesale by this pass's results.
    pub fn begin_submit(&mut self) -> Result<FormSnapshot, FieldErrors> {
        let snapshot = self.snapshot();
        let errors = validate_contact(&snapshot);
        self.errors = errors.clone();
        if !errors.is_empty() {
            return Err(errors);
        }
        self.submit.pending(SENDING_LABEL, true);
        Ok(snapshot)
    }

    /// Clear every field and restore the submit control.
    pub fn complete(&mut self) {
        self.values.clear();
        self.errors.clear_all();
        self.submit.restore();
    }
}

/// How a submit attempt ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContactOutcome {
    /// A submission is already in flight
    Busy,
    /// Validation failed; the fields are annotated
    Rejected(FieldErrors),
    /// Simulated send finished. The particles still need their lifetimes run.
    Sent { particles: Vec<ParticleId> },
}

/// Run one submit attempt end to end.
///
/// After `contact_latency_ms` the form is cleared, the success dialog (if
/// the page has one) opens with the scroll locked, and a confetti burst is
/// added to the page chrome.
pub async fn submit<F, D, P, R>(
    mut form: F,
    success: Option<D>,
    mut chrome: P,
    config: &InteractionConfig,
    mut rng: R,
) -> ContactOutcome
where
    F: Surface<ContactForm>,
    D: Surface<ModalState<()>>,
    P: Surface<PageChrome>,
    R: Rng,
{
    if form.inspect(|f| f.submit.is_pending()) {
        return ContactOutcome::Busy;
    }

    let snapshot = match form.update(|f| f.begin_submit()) {
        Ok(snapshot) => snapshot,
        Err(errors) => {
            tracing::debug!(failing = errors.len(), "Contact form rejected");
            return ContactOutcome::Rejected(errors);
        }
    };
    tracing::info!(fields = snapshot.len(), "Contact form sending");

    tokio::time::sleep(config.contact_latency()).await;

    form.update(|f| f.complete());
    if let Some(dialog) = success {
        modal::open(dialog, &mut chrome, LockOwner::SuccessDialog, ());
    }
    let particles = chrome.update(|c| c.confetti.burst(&mut rng, config));
    tracing::info!("Contact form sent");

    ContactOutcome::Sent { particles }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validate::FieldError;

    #[test]
    fn test_correction_clears_annotation() {
        let mut form = ContactForm::default();
        assert!(form.begin_submit().is_err());
        assert_eq!(form.errors().len(), 4);

        form.set(ContactField::Name, "Ada");
        assert!(form.errors().get(ContactField::Name).is_none());

        form.set(ContactField::Email, "ada@");
        assert_eq!(
            form.errors().get(ContactField::Email),
            Some(FieldError::InvalidEmail)
        );
        form.set(ContactField::Email, "");
        assert_eq!(form.errors().get(ContactField::Email), Some(FieldError::Required));
        form.set(ContactField::Email, "ada@ink.io");
        assert!(form.errors().get(ContactField::Email).is_none());
        assert_eq!(form.errors().len(), 2);
    }

    #[test]
    fn test_unannotated_field_stays_quiet() {
        let mut form = ContactForm::default();
        form.set(ContactField::Email, "ada@");
        assert!(form.errors().is_empty());
    }

    #[test]
    fn test_begin_submit_sets_pending() {
        let mut form = ContactForm::default();
        form.set(ContactField::Name, "Ada");
        form.set(ContactField::Email, "ada@ink.io");
        form.set(ContactField::ProjectType, "commission");
        form.set(ContactField::Message, "Hello");

        let snapshot = form.begin_submit().unwrap();
        assert_eq!(snapshot.get("project-type"), Some("commission"));
        assert!(form.submit_control().is_disabled());
        assert_eq!(form.submit_control().label(), SENDING_LABEL);

        form.complete();
        assert_eq!(form.value(ContactField::Name), "");
        assert_eq!(form.submit_control().label(), SUBMIT_LABEL);
    }
}
