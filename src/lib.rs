//! Block until an HTTP endpoint reports ready or a deadline elapses.
//!
//! ```no_run
//! use std::time::Duration;
//! use rdy::{resilience::Constant, Context, WaitRequest};
//!
//! # async fn run() -> Result<(), rdy::ContextError> {
//! let ctx = Context::with_timeout(Duration::from_secs(30));
//! let policy = Constant::new(Duration::from_secs(1));
//! rdy::wait(&ctx, WaitRequest::new("http://localhost:8080/health", &policy)).await
//! # }
//! ```

// Core
pub mod report;
pub mod wait;

// Cross-cutting concerns
pub mod config;
pub mod lifecycle;
pub mod observability;
pub mod resilience;

pub use config::RdyConfig;
pub use lifecycle::{Context, ContextError};
pub use wait::{wait, CancelMode, WaitRequest};
