//! Form snapshots and field validation.

use std::collections::{BTreeMap, HashMap};

use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"));

/// Check an address against the `local@domain.tld` shape.
///
/// This is a plausibility check, not RFC 5322 parsing.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Named field values captured at submit time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormSnapshot(HashMap<String, String>);

impl FormSnapshot {
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FormSnapshot {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// Fields of the contact form, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ContactField {
    Name,
    Email,
    ProjectType,
    Message,
}

impl ContactField {
    /// All required fields.
    pub const REQUIRED: [ContactField; 4] = [
        ContactField::Name,
        ContactField::Email,
        ContactField::ProjectType,
        ContactField::Message,
    ];

    /// Form field name (the `name` attribute).
    pub fn name(&self) -> &'static str {
        match self {
            ContactField::Name => "name",
            ContactField::Email => "email",
            ContactField::ProjectType => "project-type",
            ContactField::Message => "message",
        }
    }
}

/// Why a field failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    Required,
    InvalidEmail,
}

impl FieldError {
    /// Inline message shown under the field.
    pub fn message(&self) -> &'static str {
        match self {
            FieldError::Required => "This field is required",
            FieldError::InvalidEmail => "Please enter a valid email address",
        }
    }
}

/// Error annotations keyed by field. One entry per field at most.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<ContactField, FieldError>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Annotate a field, replacing any earlier annotation.
    pub fn set(&mut self, field: ContactField, error: FieldError) {
        self.0.insert(field, error);
    }

    pub fn clear(&mut self, field: ContactField) {
        self.0.remove(&field);
    }

    pub fn clear_all(&mut self) {
        self.0.clear();
    }

    pub fn get(&self, field: ContactField) -> Option<FieldError> {
        self.0.get(&field).copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (ContactField, FieldError)> + '_ {
        self.0.iter().map(|(f, e)| (*f, *e))
    }
}

/// Check one field value.
///
/// Empty (after trim) values get [`FieldError::Required`]; a non-empty
/// email that fails the pattern gets [`FieldError::InvalidEmail`].
pub fn check_field(field: ContactField, value: &str) -> Option<FieldError> {
    if value.trim().is_empty() {
        Some(FieldError::Required)
    } else if field == ContactField::Email && !is_valid_email(value) {
        Some(FieldError::InvalidEmail)
    } else {
        None
    }
}

/// Validate a contact snapshot with [`check_field`].
pub fn validate_contact(snapshot: &FormSnapshot) -> FieldErrors {
    let mut errors = FieldErrors::new();

    for field in ContactField::REQUIRED {
        let value = snapshot.get(field.name()).unwrap_or("");
        if let Some(error) = check_field(field, value) {
            errors.set(field, error);
        }
    }

    errors
}
