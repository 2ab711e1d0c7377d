//! Simulated submission backend
//!
//! Stands in for a real backend call: waits for a configurable delay and
//! then reports success with a configurable probability.

use super::traits::{SubmissionClientTrait, SubmitError};
use crate::state::ContactPayload;
use async_trait::async_trait;
use rand::Rng;
use std::time::Duration;

/// Default delay before the simulated outcome resolves
pub const DEFAULT_DELAY: Duration = Duration::from_millis(1500);

/// Default probability of a successful submission
pub const DEFAULT_SUCCESS_RATE: f64 = 0.5;

/// Coin-flip submitter
#[derive(Debug, Clone)]
pub struct SimulatedSubmitter {
    delay: Duration,
    success_rate: f64,
}

impl SimulatedSubmitter {
    /// Create a new simulated submitter.
    ///
    /// `success_rate` is clamped into `0.0..=1.0`; NaN is treated as the default.
    pub fn new(delay: Duration, success_rate: f64) -> Self {
        let success_rate = if success_rate.is_nan() {
            DEFAULT_SUCCESS_RATE
        } else {
            success_rate.clamp(0.0, 1.0)
        };
        Self {
            delay,
            success_rate,
        }
    }

    pub fn success_rate(&self) -> f64 {
        self.success_rate
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}

impl Default for SimulatedSubmitter {
    fn default() -> Self {
        Self::new(DEFAULT_DELAY, DEFAULT_SUCCESS_RATE)
    }
}

#[async_trait]
impl SubmissionClientTrait for SimulatedSubmitter {
    async fn submit(&self, payload: &ContactPayload) -> Result<bool, SubmitError> {
        tracing::debug!(
            subject = %payload.subject,
            delay_ms = self.delay.as_millis() as u64,
            "Simulating contact submission"
        );
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        let accepted = rand::thread_rng().gen_bool(self.success_rate);
        Ok(accepted)
    }
}
