//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML, optional)
//!     → loader.rs (parse & deserialize, durations via duration.rs)
//!     → validation.rs (semantic checks)
//!     → CLI flag overrides (main.rs), validated again
//!     → RdyConfig (validated, immutable)
//!     → builds BackoffPolicy, reqwest::Client, ConsoleReporter
//! ```
//!
//! # Design Decisions
//! - Precedence: defaults < config file < command-line flags
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks

pub mod duration;
pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, parse_config, ConfigError};
pub use schema::{BackoffConfig, ObservabilityConfig, ProbeConfig, RdyConfig, Strategy, WaitConfig};
pub use validation::{validate_config, ValidationError};
