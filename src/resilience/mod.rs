//! Resilience subsystem.
//!
//! # Data Flow
//! ```text
//! wait() borrows a BackoffPolicy:
//!     → policy.start(ctx) (foreground, once per wait)
//!     → Backoff moves into the poll task
//!     → proceed() before every attempt (sleep, then continue/stop)
//! ```
//!
//! # Design Decisions
//! - Policies are pure schedules of delays; pacing lives in Backoff
//! - Backoff honours the context so a wait always terminates
//! - Retry limits are part of the schedule, not of the orchestrator

pub mod backoff;
pub mod policy;

pub use backoff::{Backoff, BackoffPolicy, Schedule};
pub use policy::{Constant, Exponential};
