//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! wait / probe / backoff / signals:
//!     → tracing events (target "rdy::...")
//!     → logging.rs subscriber (stderr, EnvFilter)
//!
//! Probe diagnostics:
//!     → report::Reporter (separate, user-facing channel)
//! ```
//!
//! # Design Decisions
//! - Structured fields (url, status, attempts, cause) on every event
//! - Operator logs and probe diagnostics are independent channels

pub mod logging;
