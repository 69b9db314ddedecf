//! Single readiness check.
//!
//! # Responsibilities
//! - Issue one GET against the target
//! - Report the request, the response status and the body
//! - Classify the attempt
//!
//! # Design Decisions
//! - Only `200 OK` counts as ready; other statuses are retryable
//! - Transport errors (refused, DNS, malformed URL) are retryable too
//! - The response is owned here and dropped on every path

use reqwest::StatusCode;

use crate::report::{Reporter, SafeReporter};

/// Result of one probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttemptOutcome {
    /// Target answered `200 OK`.
    Ready,
    /// Target answered with any other status.
    NotReady(StatusCode),
    /// No response was obtained.
    TransportFailure,
}

impl AttemptOutcome {
    pub fn is_ready(&self) -> bool {
        matches!(self, AttemptOutcome::Ready)
    }
}

/// Probes one target with a shared client.
#[derive(Debug, Clone)]
pub struct Probe {
    client: reqwest::Client,
    url: String,
    reporter: SafeReporter,
}

impl Probe {
    pub fn new(client: reqwest::Client, url: impl Into<String>, reporter: SafeReporter) -> Self {
        Self {
            client,
            url: url.into(),
            reporter,
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Run one check.
    pub async fn attempt(&self) -> AttemptOutcome {
        self.reporter.l1(format_args!(">> Request: GET {}", self.url));

        let response = match self.client.get(&self.url).send().await {
            Ok(response) => response,
            Err(e) => {
                self.reporter
                    .l1(format_args!("failed performing request: {}", e));
                tracing::debug!(url = %self.url, error = %e, "Probe failed: transport error");
                return AttemptOutcome::TransportFailure;
            }
        };

        let status = response.status();
        self.reporter.l1(format_args!("<< Response: {}", status));

        if let Ok(body) = response.bytes().await {
            self.reporter.l2(format_args!("<< Response Body"));
            self.reporter
                .l2(format_args!("{}", String::from_utf8_lossy(&body)));
        }

        if status == StatusCode::OK {
            AttemptOutcome::Ready
        } else {
            tracing::debug!(url = %self.url, status = %status, "Probe failed: not ready");
            AttemptOutcome::NotReady(status)
        }
    }
}
