//! Trait abstraction for the submission collaborator to enable mocking in tests

use crate::state::ContactPayload;
use async_trait::async_trait;
use thiserror::Error;

/// Failure reported by a submission collaborator
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    /// The receiving side refused the message
    #[allow(dead_code)]
    #[error("submission rejected: {0}")]
    Rejected(String),
    /// The collaborator could not be reached or failed internally
    #[error("submission service unavailable: {0}")]
    Unavailable(String),
}

/// Performs the actual submit of a contact message.
///
/// `Ok(true)` means accepted, `Ok(false)` a plain failure without a cause.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SubmissionClientTrait: Send + Sync {
    async fn submit(&self, payload: &ContactPayload) -> Result<bool, SubmitError>;
}
