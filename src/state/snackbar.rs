//! Transient notification shown after a submission resolves

use super::store::ContactUiEvent;
use std::time::{Duration, Instant};

/// Default time a snackbar stays visible
pub const DEFAULT_SNACKBAR_DURATION: Duration = Duration::from_millis(4000);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnackbarKind {
    Success,
    Error,
}

/// A one-line notification with an expiry
#[derive(Debug, Clone)]
pub struct Snackbar {
    pub kind: SnackbarKind,
    pub message: String,
    shown_at: Instant,
    duration: Duration,
}

impl Snackbar {
    pub fn new(kind: SnackbarKind, message: impl Into<String>, duration: Duration) -> Self {
        Self {
            kind,
            message: message.into(),
            shown_at: Instant::now(),
            duration,
        }
    }

    /// Build the snackbar for a submission event
    pub fn for_event(event: &ContactUiEvent, duration: Duration) -> Self {
        let kind = match event {
            ContactUiEvent::SubmitSuccess => SnackbarKind::Success,
            ContactUiEvent::SubmitError(_) => SnackbarKind::Error,
        };
        Self::new(kind, crate::strings::event_text(event), duration)
    }

    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Instant::now())
    }

    fn is_expired_at(&self, now: Instant) -> bool {
        now.duration_since(self.shown_at) >= self.duration
    }
}
