//! Contact form value objects

use serde::{Deserialize, Serialize};

/// The editable fields of the contact form, in focus order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Name, Field::Email, Field::Subject, Field::Message];

    /// Display label for the field
    pub fn label(&self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Email => "Email",
            Field::Subject => "Subject",
            Field::Message => "Message",
        }
    }

    /// Maximum accepted length in characters, if any.
    ///
    /// Subject is picked from a fixed option list and has no limit.
    pub fn max_len(&self) -> Option<usize> {
        match self {
            Field::Name => Some(60),
            Field::Email => Some(100),
            Field::Subject => None,
            Field::Message => Some(1024),
        }
    }

    pub fn is_multiline(&self) -> bool {
        matches!(self, Field::Message)
    }
}

/// Current contents of the contact form
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactForm {
    /// Get the value of a field
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Subject => &self.subject,
            Field::Message => &self.message,
        }
    }

    /// Return a copy of this form with one field replaced
    pub fn with_field(&self, field: Field, value: String) -> Self {
        let mut form = self.clone();
        match field {
            Field::Name => form.name = value,
            Field::Email => form.email = value,
            Field::Subject => form.subject = value,
            Field::Message => form.message = value,
        }
        form
    }
}

/// Payload handed to the submission collaborator
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactPayload {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl From<&ContactForm> for ContactPayload {
    fn from(form: &ContactForm) -> Self {
        Self {
            name: form.name.clone(),
            email: form.email.trim().to_string(),
            subject: form.subject.clone(),
            message: form.message.clone(),
        }
    }
}
