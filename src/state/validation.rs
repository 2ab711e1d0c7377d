//! Field validation for the contact form

use super::form::{ContactForm, Field};
use regex::Regex;
use std::sync::LazyLock;

// Local part, '@', domain labels, and an alphabetic TLD of two or more letters.
static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$")
        .expect("EMAIL_REGEX: invalid regex pattern")
});

/// Kind of validation failure for a single field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    Required,
    InvalidEmail,
}

/// Per-field validation errors
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ContactErrors {
    pub name: Option<ValidationError>,
    pub email: Option<ValidationError>,
    pub subject: Option<ValidationError>,
    pub message: Option<ValidationError>,
}

impl ContactErrors {
    pub fn get(&self, field: Field) -> Option<ValidationError> {
        match field {
            Field::Name => self.name,
            Field::Email => self.email,
            Field::Subject => self.subject,
            Field::Message => self.message,
        }
    }

    pub fn is_empty(&self) -> bool {
        Field::ALL.iter().all(|f| self.get(*f).is_none())
    }
}

fn required(value: &str) -> Option<ValidationError> {
    if value.trim().is_empty() {
        Some(ValidationError::Required)
    } else {
        None
    }
}

/// Check whether a string is an acceptable email address (after trimming)
pub fn is_valid_email(value: &str) -> bool {
    EMAIL_REGEX.is_match(value.trim())
}

/// Validate a form, returning the per-field errors and whether it can be submitted
pub fn validate(form: &ContactForm) -> (ContactErrors, bool) {
    let email = required(&form.email).or_else(|| {
        if is_valid_email(&form.email) {
            None
        } else {
            Some(ValidationError::InvalidEmail)
        }
    });

    let errors = ContactErrors {
        name: required(&form.name),
        email,
        subject: required(&form.subject),
        message: required(&form.message),
    };
    let can_submit = errors.is_empty();
    (errors, can_submit)
}
