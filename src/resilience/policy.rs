//! Shipped backoff policies.

use std::iter;
use std::time::Duration;

use crate::resilience::backoff::{calculate_backoff, BackoffPolicy, Schedule};

/// Fixed interval between attempts.
#[derive(Debug, Clone, PartialEq)]
pub struct Constant {
    pub interval: Duration,
    /// Retries after the first attempt. `None` means unlimited.
    pub max_retries: Option<u32>,
}

impl Constant {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            max_retries: None,
        }
    }

    pub fn with_max_retries(mut self, n: u32) -> Self {
        self.max_retries = Some(n);
        self
    }
}

impl BackoffPolicy for Constant {
    fn schedule(&self) -> Schedule {
        let delays = iter::repeat(self.interval);
        match self.max_retries {
            Some(n) => Box::new(delays.take(n as usize)),
            None => Box::new(delays),
        }
    }
}

/// Delay grows by `multiplier` each retry, capped at `max_interval`.
#[derive(Debug, Clone, PartialEq)]
pub struct Exponential {
    pub interval: Duration,
    pub max_interval: Duration,
    pub multiplier: f64,
    /// Add up to 10% random jitter to every delay.
    pub jitter: bool,
    /// Retries after the first attempt. `None` means unlimited.
    pub max_retries: Option<u32>,
}

impl Exponential {
    pub fn new(interval: Duration, max_interval: Duration) -> Self {
        Self {
            interval,
            max_interval,
            multiplier: 2.0,
            jitter: false,
            max_retries: None,
        }
    }

    pub fn with_multiplier(mut self, multiplier: f64) -> Self {
        self.multiplier = multiplier;
        self
    }

    pub fn with_jitter(mut self, jitter: bool) -> Self {
        self.jitter = jitter;
        self
    }

    pub fn with_max_retries(mut self, n: u32) -> Self {
        self.max_retries = Some(n);
        self
    }
}

impl BackoffPolicy for Exponential {
    fn schedule(&self) -> Schedule {
        let Self {
            interval,
            max_interval,
            multiplier,
            jitter,
            ..
        } = self.clone();
        let delays = (1..=u32::MAX)
            .map(move |retry| calculate_backoff(retry, interval, multiplier, max_interval, jitter));
        match self.max_retries {
            Some(n) => Box::new(delays.take(n as usize)),
            None => Box::new(delays),
        }
    }
}
