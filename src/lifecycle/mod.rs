//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Caller (CLI or embedding service):
//!     Create Context (deadline) → hand it to wait()
//!
//! Signals (signals.rs):
//!     SIGTERM/SIGINT → Context::cancel()
//!
//! Observers (orchestrator, backoff):
//!     Context::done() / Context::err()
//! ```
//!
//! # Design Decisions
//! - The context is owned by the caller; the core only observes it
//! - Cancellation is cooperative: work checks the context between steps
//! - The deadline is fixed at creation and never extended

pub mod context;
pub mod signals;

pub use context::{Context, ContextError};
