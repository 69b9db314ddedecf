//! Readiness waiting subsystem.
//!
//! # Data Flow
//! ```text
//! wait(ctx, request)
//!     → wrap reporter in SafeReporter
//!     → policy.start(ctx) → Backoff
//!     → spawn poll task:
//!         loop: Backoff::proceed → Probe::attempt → reporter
//!         Ready → oneshot send (once) → task exits
//!     → select { oneshot, ctx.stopped() }
//!     → Ok(()) | Err(ContextError)
//! ```
//!
//! # State Machine
//! ```text
//! Running → Ready      (success signal observed first)
//! Running → Cancelled  (context fired first)
//! ```
//!
//! # Design Decisions
//! - Attempts are strictly sequential inside the task
//! - The caller is released on the first of readiness and cancellation
//! - The task is detached by default; CancelMode::Abort aborts it instead

pub mod orchestrator;
pub mod probe;
pub mod request;

pub use orchestrator::wait;
pub use probe::{AttemptOutcome, Probe};
pub use request::{CancelMode, WaitRequest};
