//! Form state store
//!
//! Owns the contact form state machine. The UI raises intents, the store
//! revalidates and publishes a new [`FormState`] on a watch channel, and
//! after a submission resolves it emits one [`ContactUiEvent`] on a
//! broadcast channel.

use super::form::{ContactForm, ContactPayload, Field};
use super::validation::{validate, ContactErrors};
use crate::submission::{SubmissionClientTrait, SubmitError};
use futures::FutureExt;
use std::any::Any;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::{broadcast, watch};
use tokio::task::JoinHandle;

/// Capacity of the one-shot event channel
const EVENT_CAPACITY: usize = 16;

/// Snapshot of the form as rendered by the UI
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    pub form: ContactForm,
    pub errors: ContactErrors,
    pub can_submit: bool,
    pub is_submitting: bool,
}

/// One-shot notification emitted when a submission resolves
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContactUiEvent {
    SubmitSuccess,
    SubmitError(Option<SubmitError>),
}

/// Why an intent was not applied
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IntentError {
    #[error("a submission is already in progress")]
    Submitting,
    #[error("the form has validation errors")]
    Invalid,
    #[error("{} is limited to {max} characters", field.label())]
    TooLong { field: Field, max: usize },
}

/// Holds the contact form state and drives submissions
pub struct FormStore {
    state: Arc<watch::Sender<FormState>>,
    events: broadcast::Sender<ContactUiEvent>,
    client: Arc<dyn SubmissionClientTrait>,
    in_flight: Option<JoinHandle<()>>,
}

impl FormStore {
    /// Create a store with an empty form
    pub fn new(client: Arc<dyn SubmissionClientTrait>) -> Self {
        let (state, _) = watch::channel(FormState::default());
        let (events, _) = broadcast::channel(EVENT_CAPACITY);
        Self {
            state: Arc::new(state),
            events,
            client,
            in_flight: None,
        }
    }

    /// Current state snapshot
    pub fn state(&self) -> FormState {
        self.state.borrow().clone()
    }

    /// Subscribe to state updates; the receiver starts at the latest value
    pub fn subscribe_state(&self) -> watch::Receiver<FormState> {
        self.state.subscribe()
    }

    /// Subscribe to one-shot events; past events are not replayed
    pub fn subscribe_events(&self) -> broadcast::Receiver<ContactUiEvent> {
        self.events.subscribe()
    }

    /// Replace one field and revalidate the form
    pub fn on_field_changed(
        &self,
        field: Field,
        value: impl Into<String>,
    ) -> Result<(), IntentError> {
        let value = value.into();

        if self.state.borrow().is_submitting {
            tracing::debug!(?field, "Ignoring field change while submitting");
            return Err(IntentError::Submitting);
        }

        if let Some(max) = field.max_len() {
            if value.chars().count() > max {
                tracing::debug!(?field, max, "Ignoring over-long field value");
                return Err(IntentError::TooLong { field, max });
            }
        }

        self.state.send_modify(|state| {
            state.form = state.form.with_field(field, value);
            let (errors, can_submit) = validate(&state.form);
            state.errors = errors;
            state.can_submit = can_submit;
        });
        Ok(())
    }

    pub fn on_name_changed(&self, value: impl Into<String>) -> Result<(), IntentError> {
        self.on_field_changed(Field::Name, value)
    }

    pub fn on_email_changed(&self, value: impl Into<String>) -> Result<(), IntentError> {
        self.on_field_changed(Field::Email, value)
    }

    pub fn on_subject_changed(&self, value: impl Into<String>) -> Result<(), IntentError> {
        self.on_field_changed(Field::Subject, value)
    }

    pub fn on_message_changed(&self, value: impl Into<String>) -> Result<(), IntentError> {
        self.on_field_changed(Field::Message, value)
    }

    /// Validate and, if the form is complete, start a submission.
    ///
    /// Must be called from within a tokio runtime.
    pub fn submit(&mut self) -> Result<(), IntentError> {
        let current = self.state();
        if current.is_submitting {
            tracing::debug!("Ignoring submit while a submission is in flight");
            return Err(IntentError::Submitting);
        }

        let (errors, can_submit) = validate(&current.form);
        if !can_submit {
            self.state.send_modify(|state| {
                state.errors = errors;
                state.can_submit = false;
            });
            return Err(IntentError::Invalid);
        }

        self.state.send_modify(|state| {
            state.errors = errors;
            state.can_submit = true;
            state.is_submitting = true;
        });
        tracing::info!("Submitting contact form");

        let payload = ContactPayload::from(&current.form);
        let client = Arc::clone(&self.client);
        let state = Arc::clone(&self.state);
        let events = self.events.clone();
        self.in_flight = Some(tokio::spawn(async move {
            // The call itself sits inside the guarded future so panics raised
            // before the first poll are caught as well
            let result = AssertUnwindSafe(async { client.submit(&payload).await })
                .catch_unwind()
                .await
                .unwrap_or_else(|panic| Err(panic_to_error(panic)));
            resolve(&state, &events, result);
        }));
        Ok(())
    }
}

impl Drop for FormStore {
    fn drop(&mut self) {
        if let Some(handle) = self.in_flight.take() {
            handle.abort();
        }
    }
}

/// Turn a collaborator panic into an ordinary submission failure
fn panic_to_error(panic: Box<dyn Any + Send>) -> SubmitError {
    let reason = panic
        .downcast_ref::<&str>()
        .map(|s| s.to_string())
        .or_else(|| panic.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "unknown panic".to_string());
    tracing::error!("Submission backend panicked: {reason}");
    SubmitError::Unavailable(format!("backend panicked: {reason}"))
}

/// Apply a submission outcome, then notify subscribers
fn resolve(
    state: &watch::Sender<FormState>,
    events: &broadcast::Sender<ContactUiEvent>,
    result: Result<bool, SubmitError>,
) {
    let event = match result {
        Ok(true) => {
            tracing::info!("Contact form submitted");
            state.send_replace(FormState::default());
            ContactUiEvent::SubmitSuccess
        }
        Ok(false) => {
            tracing::info!("Contact form submission failed");
            state.send_modify(|s| s.is_submitting = false);
            ContactUiEvent::SubmitError(None)
        }
        Err(e) => {
            tracing::warn!("Contact form submission error: {e}");
            state.send_modify(|s| s.is_submitting = false);
            ContactUiEvent::SubmitError(Some(e))
        }
    };

    if events.send(event).is_err() {
        tracing::debug!("No event subscribers, dropping submission event");
    }
}
