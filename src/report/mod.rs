//! Diagnostic reporting subsystem.
//!
//! # Data Flow
//! ```text
//! Probe emits progress events:
//!     → SafeReporter (absent sink / disabled channel = no-op)
//!     → Reporter impl
//!         console.rs: stderr, gated by Verbosity (CLI)
//!         traced.rs: tracing debug/trace events (embedding services)
//! ```
//!
//! # Channels
//! - L1: request and response summaries
//! - L2: response bodies (strictly more verbose than L1)
//!
//! # Design Decisions
//! - Emission never fails and never returns a value
//! - Callers always hold a SafeReporter, so call sites never branch on presence

use std::fmt;

pub mod console;
pub mod safe;
pub mod traced;

pub use console::{ConsoleReporter, Verbosity};
pub use safe::SafeReporter;
pub use traced::TracingReporter;

/// Verbosity channel of a diagnostic event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Level {
    L1,
    L2,
}

/// Destination for human-readable progress events.
pub trait Reporter: Send + Sync {
    /// Request and response summaries.
    fn l1(&self, args: fmt::Arguments<'_>);

    /// Response bodies.
    fn l2(&self, args: fmt::Arguments<'_>);

    /// Whether events on `level` are wanted at all.
    fn enabled(&self, _level: Level) -> bool {
        true
    }
}
