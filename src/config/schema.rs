//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for `rdy`.
//! All types derive Serde traits for deserialization from config files.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::config::duration::{serde_opt_str, serde_str};
use crate::report::Verbosity;
use crate::resilience::backoff::BackoffPolicy;
use crate::resilience::policy::{Constant, Exponential};
use crate::wait::request::CancelMode;

/// Root configuration.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
#[serde(default)]
pub struct RdyConfig {
    /// Overall wait settings.
    pub wait: WaitConfig,

    /// Attempt pacing.
    pub backoff: BackoffConfig,

    /// Per-attempt HTTP settings.
    pub probe: ProbeConfig,

    /// Logging and console output.
    pub observability: ObservabilityConfig,
}

/// Overall wait settings.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct WaitConfig {
    /// Deadline for the whole wait (e.g. "30s", "1m", "1h30m").
    #[serde(with = "serde_str")]
    pub timeout: Duration,

    /// What to do with the poll task when the deadline fires.
    pub cancel_mode: CancelMode,
}

impl Default for WaitConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            cancel_mode: CancelMode::Abandon,
        }
    }
}

/// Backoff strategy selector.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Strategy {
    #[default]
    Constant,
    Exponential,
}

/// Backoff configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct BackoffConfig {
    pub strategy: Strategy,

    /// Delay between attempts (constant) or the first delay (exponential).
    #[serde(with = "serde_str")]
    pub interval: Duration,

    /// Cap for exponential delays.
    #[serde(with = "serde_str")]
    pub max_interval: Duration,

    /// Growth factor for exponential delays.
    pub multiplier: f64,

    /// Add up to 10% random jitter to exponential delays.
    pub jitter: bool,

    /// Retries after the first attempt. Unset means unlimited.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_retries: Option<u32>,
}

impl Default for BackoffConfig {
    fn default() -> Self {
        Self {
            strategy: Strategy::Constant,
            interval: Duration::from_secs(1),
            max_interval: Duration::from_secs(30),
            multiplier: 2.0,
            jitter: false,
            max_retries: None,
        }
    }
}

impl BackoffConfig {
    /// Build the configured policy.
    pub fn build(&self) -> Box<dyn BackoffPolicy> {
        match self.strategy {
            Strategy::Constant => Box::new(Constant {
                interval: self.interval,
                max_retries: self.max_retries,
            }),
            Strategy::Exponential => Box::new(Exponential {
                interval: self.interval,
                max_interval: self.max_interval,
                multiplier: self.multiplier,
                jitter: self.jitter,
                max_retries: self.max_retries,
            }),
        }
    }
}

/// Per-attempt HTTP settings.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct ProbeConfig {
    /// Timeout for a single request. Unset means none.
    #[serde(with = "serde_opt_str", skip_serializing_if = "Option::is_none")]
    pub request_timeout: Option<Duration>,

    /// User-Agent header sent with every probe.
    pub user_agent: String,

    /// Honour HTTP(S)_PROXY environment variables.
    pub use_env_proxy: bool,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            request_timeout: None,
            user_agent: concat!("rdy/", env!("CARGO_PKG_VERSION")).to_string(),
            use_env_proxy: true,
        }
    }
}

impl ProbeConfig {
    /// Build the HTTP client used for probes.
    pub fn build_client(&self) -> Result<reqwest::Client, reqwest::Error> {
        let mut builder = reqwest::Client::builder().user_agent(self.user_agent.clone());
        if let Some(timeout) = self.request_timeout {
            builder = builder.timeout(timeout);
        }
        if !self.use_env_proxy {
            builder = builder.no_proxy();
        }
        builder.build()
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error). `RUST_LOG` overrides it.
    pub log_level: String,

    /// Console diagnostics for each probe.
    pub verbosity: Verbosity,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "warn".to_string(),
            verbosity: Verbosity::Quiet,
        }
    }
}
