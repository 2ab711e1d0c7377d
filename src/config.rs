//! Configuration handling for the TUI

use crate::state::DEFAULT_SNACKBAR_DURATION;
use crate::submission::SimulatedSubmitter;
use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

/// Environment variable overriding the simulated success rate
const SUCCESS_RATE_ENV: &str = "CONTACT_FORM_SUCCESS_RATE";

/// Default options offered by the subject select field
const DEFAULT_SUBJECT_OPTIONS: [&str; 4] = ["Option 1", "Option 2", "Option 3", "Option 4"];

/// User configuration for the TUI
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TuiConfig {
    /// Options offered by the subject field
    pub subject_options: Option<Vec<String>>,
    /// Delay before the simulated submission resolves, in milliseconds
    pub submit_delay_ms: Option<u64>,
    /// Probability that the simulated submission succeeds (0.0 - 1.0)
    pub success_rate: Option<f64>,
    /// How long the result snackbar stays visible, in milliseconds
    pub snackbar_ms: Option<u64>,
}

impl TuiConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("io", "contact-form", "contact-form-tui")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from file, then apply environment overrides
    pub fn load() -> Result<Self> {
        let mut config = match Self::config_path() {
            Some(path) if path.exists() => {
                let content = fs::read_to_string(&path)?;
                serde_json::from_str(&content)?
            }
            _ => Self::default(),
        };

        if let Ok(raw) = std::env::var(SUCCESS_RATE_ENV) {
            match raw.parse::<f64>() {
                Ok(rate) => config.success_rate = Some(rate),
                Err(_) => tracing::warn!("Ignoring invalid {SUCCESS_RATE_ENV}={raw}"),
            }
        }

        Ok(config)
    }

    /// Subject options, falling back to the defaults when unset or empty
    pub fn subject_options(&self) -> Vec<String> {
        match &self.subject_options {
            Some(options) if !options.is_empty() => options.clone(),
            _ => DEFAULT_SUBJECT_OPTIONS.iter().map(|s| s.to_string()).collect(),
        }
    }

    pub fn snackbar_duration(&self) -> Duration {
        self.snackbar_ms
            .map(Duration::from_millis)
            .unwrap_or(DEFAULT_SNACKBAR_DURATION)
    }

    /// Build the simulated submission collaborator from this config
    pub fn submitter(&self) -> SimulatedSubmitter {
        let defaults = SimulatedSubmitter::default();
        SimulatedSubmitter::new(
            self.submit_delay_ms
                .map(Duration::from_millis)
                .unwrap_or(defaults.delay()),
            self.success_rate.unwrap_or(defaults.success_rate()),
        )
    }
}
