//! Submission collaborator for the contact form
//!
//! The store only depends on [`SubmissionClientTrait`]; the shipped
//! implementation is [`SimulatedSubmitter`], a delayed coin flip.

mod simulated;
mod traits;

pub use simulated::SimulatedSubmitter;
pub use traits::{SubmissionClientTrait, SubmitError};

#[cfg(test)]
pub use traits::MockSubmissionClientTrait;
