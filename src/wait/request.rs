//! Wait request definition.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::report::Reporter;
use crate::resilience::backoff::BackoffPolicy;

/// What happens to the poll task when the wait returns on cancellation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum CancelMode {
    /// Leave the task detached; it stops at its next context check.
    #[default]
    Abandon,
    /// Abort the task immediately, dropping any in-flight request.
    Abort,
}

/// Everything one call to [`wait`](crate::wait::wait) needs.
pub struct WaitRequest<'a> {
    /// Target URL probed with GET.
    pub url: String,

    /// Attempt pacing; borrowed for the duration of the call.
    pub backoff: &'a dyn BackoffPolicy,

    /// Optional diagnostic sink.
    pub reporter: Option<Arc<dyn Reporter>>,

    /// HTTP client used for probes.
    pub client: reqwest::Client,

    pub cancel_mode: CancelMode,
}

impl<'a> WaitRequest<'a> {
    pub fn new(url: impl Into<String>, backoff: &'a dyn BackoffPolicy) -> Self {
        Self {
            url: url.into(),
            backoff,
            reporter: None,
            client: reqwest::Client::new(),
            cancel_mode: CancelMode::default(),
        }
    }

    pub fn with_reporter(mut self, reporter: Arc<dyn Reporter>) -> Self {
        self.reporter = Some(reporter);
        self
    }

    pub fn with_client(mut self, client: reqwest::Client) -> Self {
        self.client = client;
        self
    }

    pub fn with_cancel_mode(mut self, cancel_mode: CancelMode) -> Self {
        self.cancel_mode = cancel_mode;
        self
    }
}

impl fmt::Debug for WaitRequest<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WaitRequest")
            .field("url", &self.url)
            .field("reporter", &self.reporter.is_some())
            .field("cancel_mode", &self.cancel_mode)
            .finish_non_exhaustive()
    }
}
