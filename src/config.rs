//! Settings of the simulated transfer feed.

use std::env;
use std::time::Duration;
use thiserror::Error;

pub const FAILURE_PROBABILITY_VAR: &str = "EASY_TRANSFER_FAILURE_PROBABILITY";
pub const DELAY_MS_VAR: &str = "EASY_TRANSFER_DELAY_MS";

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("failure probability must be within 0..=1, got {0}")]
    ProbabilityOutOfRange(f64),

    #[error("{var}: cannot parse '{value}'")]
    Invalid { var: &'static str, value: String },
}

/// How the simulated source behaves on every fetch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeedConfig {
    /// Chance in `0..=1` that a fetch reports a network error.
    pub failure_probability: f64,
    /// Artificial latency before a fetch resolves.
    pub simulated_delay: Duration,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            failure_probability: 0.1,
            simulated_delay: Duration::from_millis(1500),
        }
    }
}

impl FeedConfig {
    pub fn new(failure_probability: f64, simulated_delay: Duration) -> Result<Self, ConfigError> {
        validate_probability(failure_probability)?;
        Ok(Self {
            failure_probability,
            simulated_delay,
        })
    }

    /// Defaults overridden by `EASY_TRANSFER_FAILURE_PROBABILITY` and
    /// `EASY_TRANSFER_DELAY_MS` when set.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| env::var(var).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(value) = lookup(FAILURE_PROBABILITY_VAR) {
            let probability = value.trim().parse::<f64>().map_err(|_| ConfigError::Invalid {
                var: FAILURE_PROBABILITY_VAR,
                value: value.clone(),
            })?;
            validate_probability(probability)?;
            config.failure_probability = probability;
        }

        if let Some(value) = lookup(DELAY_MS_VAR) {
            let millis = value.trim().parse::<u64>().map_err(|_| ConfigError::Invalid {
                var: DELAY_MS_VAR,
                value: value.clone(),
            })?;
            config.simulated_delay = Duration::from_millis(millis);
        }

        Ok(config)
    }
}

pub(crate) fn validate_probability(probability: f64) -> Result<(), ConfigError> {
    // NaN fails the range check too
    if (0.0..=1.0).contains(&probability) {
        Ok(())
    } else {
        Err(ConfigError::ProbabilityOutOfRange(probability))
    }
}
