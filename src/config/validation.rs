//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (timeout > 0, multiplier >= 1)
//! - Check that string settings hold known values
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: RdyConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::time::Duration;

use thiserror::Error;

use crate::config::schema::{RdyConfig, Strategy};

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// A single semantic problem in a configuration.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("wait.timeout must be greater than zero")]
    ZeroTimeout,

    #[error("backoff.multiplier must be a finite number >= 1.0, got {0}")]
    InvalidMultiplier(f64),

    #[error("backoff.max_interval ({max:?}) must not be shorter than backoff.interval ({interval:?})")]
    MaxIntervalTooShort { interval: Duration, max: Duration },

    #[error("probe.request_timeout must be greater than zero")]
    ZeroRequestTimeout,

    #[error("probe.user_agent must not be empty")]
    EmptyUserAgent,

    #[error("observability.log_level '{0}' is not one of trace, debug, info, warn, error")]
    UnknownLogLevel(String),
}

/// Check a parsed configuration.
pub fn validate_config(config: &RdyConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.wait.timeout.is_zero() {
        errors.push(ValidationError::ZeroTimeout);
    }

    let backoff = &config.backoff;
    if backoff.strategy == Strategy::Exponential {
        if !backoff.multiplier.is_finite() || backoff.multiplier < 1.0 {
            errors.push(ValidationError::InvalidMultiplier(backoff.multiplier));
        }
        if backoff.max_interval < backoff.interval {
            errors.push(ValidationError::MaxIntervalTooShort {
                interval: backoff.interval,
                max: backoff.max_interval,
            });
        }
    }

    if config.probe.request_timeout.is_some_and(|t| t.is_zero()) {
        errors.push(ValidationError::ZeroRequestTimeout);
    }
    if config.probe.user_agent.trim().is_empty() {
        errors.push(ValidationError::EmptyUserAgent);
    }

    let level = config.observability.log_level.to_ascii_lowercase();
    if !LOG_LEVELS.contains(&level.as_str()) {
        errors.push(ValidationError::UnknownLogLevel(
            config.observability.log_level.clone(),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
