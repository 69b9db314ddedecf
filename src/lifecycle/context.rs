//! Cancellation context shared between a caller and the work it starts.
//!
//! # Responsibilities
//! - Carry an optional deadline and an explicit cancel signal
//! - Remember why it fired (first cause wins)
//! - Let observers await or poll the outcome without owning it
//!
//! # Design Decisions
//! - Built on `CancellationToken` so children follow their parent
//! - A child keeps the earlier of its own and its parent's deadline
//! - Deadlines use tokio's clock so paused-time tests drive them

use std::sync::{Arc, OnceLock};
use std::time::Duration;

use thiserror::Error;
use tokio::time::{self, Instant};
use tokio_util::sync::CancellationToken;

/// Why a context stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ContextError {
    /// `cancel` was called on this context or one of its parents.
    #[error("context canceled")]
    Cancelled,

    /// The deadline passed.
    #[error("context deadline exceeded")]
    DeadlineExceeded,
}

/// Externally owned deadline/cancellation signal.
///
/// Cloning yields another handle to the same context.
#[derive(Debug, Clone)]
pub struct Context {
    token: CancellationToken,
    deadline: Option<Instant>,
    cause: Arc<OnceLock<ContextError>>,
    parent: Option<Box<Context>>,
}

impl Context {
    /// A context that only stops when cancelled.
    pub fn background() -> Self {
        Self {
            token: CancellationToken::new(),
            deadline: None,
            cause: Arc::new(OnceLock::new()),
            parent: None,
        }
    }

    /// A context that stops after `timeout`.
    pub fn with_timeout(timeout: Duration) -> Self {
        Self::with_deadline(Instant::now() + timeout)
    }

    /// A context that stops at `deadline`.
    pub fn with_deadline(deadline: Instant) -> Self {
        Self {
            deadline: Some(deadline),
            ..Self::background()
        }
    }

    /// Derive a child that also stops after `timeout`.
    pub fn child_with_timeout(&self, timeout: Duration) -> Self {
        let own = Instant::now() + timeout;
        let deadline = match self.deadline {
            Some(parent) => parent.min(own),
            None => own,
        };
        Self {
            token: self.token.child_token(),
            deadline: Some(deadline),
            cause: Arc::new(OnceLock::new()),
            parent: Some(Box::new(self.clone())),
        }
    }

    /// Cancel this context and every child derived from it.
    ///
    /// A context whose deadline already passed keeps `DeadlineExceeded`.
    pub fn cancel(&self) {
        if self.err().is_none() {
            let _ = self.cause.set(ContextError::Cancelled);
        }
        self.token.cancel();
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// The cause if the context has already stopped.
    pub fn err(&self) -> Option<ContextError> {
        if let Some(cause) = self.cause.get() {
            return Some(*cause);
        }
        if self.deadline.is_some_and(|d| Instant::now() >= d) {
            return Some(*self.cause.get_or_init(|| ContextError::DeadlineExceeded));
        }
        if self.token.is_cancelled() {
            let inherited = self
                .parent
                .as_ref()
                .and_then(|p| p.err())
                .unwrap_or(ContextError::Cancelled);
            return Some(*self.cause.get_or_init(|| inherited));
        }
        None
    }

    /// Resolves once the context stops.
    pub async fn done(&self) {
        match self.deadline {
            Some(deadline) => {
                tokio::select! {
                    _ = self.token.cancelled() => {}
                    _ = time::sleep_until(deadline) => {}
                }
            }
            None => self.token.cancelled().await,
        }
    }

    /// Like [`done`](Self::done) but returns the cause.
    pub async fn stopped(&self) -> ContextError {
        self.done().await;
        self.err().unwrap_or(ContextError::Cancelled)
    }

    pub fn is_done(&self) -> bool {
        self.err().is_some()
    }
}

impl Default for Context {
    fn default() -> Self {
        Self::background()
    }
}
