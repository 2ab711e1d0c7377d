//! Display strings for the contact screen

use crate::state::{ContactUiEvent, Field, ValidationError};

pub const SCREEN_TITLE: &str = "Contact";
pub const SCREEN_INFO: &str =
    "Send us a message and we will get back to you as soon as possible.";
pub const SEND_LABEL: &str = "Send";
pub const SENDING_LABEL: &str = "Sending...";
pub const SUBJECT_PLACEHOLDER: &str = "Select an option";
pub const EMPTY_PLACEHOLDER: &str = "(empty)";

/// Text shown under a field for a validation error
pub fn error_text(field: Field, error: ValidationError) -> &'static str {
    match (field, error) {
        (Field::Name, ValidationError::Required) => "Name is required",
        (Field::Email, ValidationError::Required) => "Email is required",
        (Field::Email, ValidationError::InvalidEmail) => "Enter a valid email address",
        (Field::Subject, ValidationError::Required) => "Subject is required",
        (Field::Message, ValidationError::Required) => "Message is required",
        // InvalidEmail is only produced for the email field
        (_, ValidationError::InvalidEmail) => "Invalid value",
    }
}

/// Text shown in the snackbar for a submission event
pub fn event_text(event: &ContactUiEvent) -> String {
    match event {
        ContactUiEvent::SubmitSuccess => "Message sent successfully!".to_string(),
        ContactUiEvent::SubmitError(None) => {
            "Could not send your message. Please try again.".to_string()
        }
        ContactUiEvent::SubmitError(Some(cause)) => {
            format!("Could not send your message: {cause}")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::submission::SubmitError;

    #[test]
    fn test_required_text_per_field() {
        for field in Field::ALL {
            let text = error_text(field, ValidationError::Required);
            assert!(text.starts_with(field.label()), "{text}");
        }
    }

    #[test]
    fn test_invalid_email_text() {
        assert_eq!(
            error_text(Field::Email, ValidationError::InvalidEmail),
            "Enter a valid email address"
        );
    }

    #[test]
    fn test_event_text_includes_cause() {
        let event = ContactUiEvent::SubmitError(Some(SubmitError::Unavailable(
            "timeout".to_string(),
        )));
        assert!(event_text(&event).contains("timeout"));
    }

    #[test]
    fn test_event_text_without_cause() {
        let text = event_text(&ContactUiEvent::SubmitError(None));
        assert!(text.contains("try again"));
    }
}
