//! `rdy`: wait for an HTTP endpoint to become ready.
//!
//! # Flow
//!
//! ```text
//! flags ─┐
//!        ├─▶ RdyConfig ─▶ Context (deadline) ─▶ rdy::wait ─▶ exit code
//! file ──┘                    ▲
//!                 SIGINT/SIGTERM cancel
//! ```
//!
//! Exit status is 0 once the target answers `200 OK` and 1 otherwise.

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;

use clap::{Parser, ValueEnum};

use rdy::config::duration::parse_duration;
use rdy::config::{load_config, validate_config, ConfigError, RdyConfig, Strategy};
use rdy::lifecycle::signals::cancel_on_signal;
use rdy::observability::logging;
use rdy::report::{ConsoleReporter, Verbosity};
use rdy::{CancelMode, Context, WaitRequest};

#[derive(Debug, Parser)]
#[command(name = "rdy", version)]
#[command(about = "Wait until an HTTP endpoint answers 200 OK", long_about = None)]
struct Cli {
    /// Target URL, probed with GET.
    url: String,

    /// Timeout for waiting for readiness. Ex: 30s, 1m, 1h30m
    #[arg(short, long, value_parser = parse_duration)]
    timeout: Option<Duration>,

    /// Verbose L1 mode on (request and response statuses)
    #[arg(short, long)]
    verbose: bool,

    /// Verbose L2 mode on (L1 + response body)
    #[arg(long = "vv")]
    very_verbose: bool,

    /// Delay between attempts (first delay for exponential backoff)
    #[arg(short, long, value_parser = parse_duration)]
    interval: Option<Duration>,

    /// Backoff strategy
    #[arg(long, value_enum)]
    strategy: Option<StrategyArg>,

    /// Cap for exponential backoff delays
    #[arg(long, value_parser = parse_duration)]
    max_interval: Option<Duration>,

    /// Give up attempting after this many retries
    #[arg(long)]
    max_retries: Option<u32>,

    /// Add random jitter to exponential backoff delays
    #[arg(long)]
    jitter: bool,

    /// Timeout for each individual request
    #[arg(long, value_parser = parse_duration)]
    request_timeout: Option<Duration>,

    /// Abort the in-flight request when the wait is cancelled
    #[arg(long)]
    abort_on_cancel: bool,

    /// TOML configuration file; flags take precedence
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum StrategyArg {
    Constant,
    Exponential,
}

impl From<StrategyArg> for Strategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::Constant => Strategy::Constant,
            StrategyArg::Exponential => Strategy::Exponential,
        }
    }
}

impl Cli {
    /// Defaults, then the config file, then flags.
    fn resolve_config(&self) -> Result<RdyConfig, ConfigError> {
        let mut config = match &self.config {
            Some(path) => load_config(path)?,
            None => RdyConfig::default(),
        };
        self.apply(&mut config);
        validate_config(&config).map_err(ConfigError::Validation)?;
        Ok(config)
    }

    fn apply(&self, config: &mut RdyConfig) {
        if let Some(timeout) = self.timeout {
            config.wait.timeout = timeout;
        }
        if self.abort_on_cancel {
            config.wait.cancel_mode = CancelMode::Abort;
        }
        if let Some(interval) = self.interval {
            config.backoff.interval = interval;
        }
        if let Some(strategy) = self.strategy {
            config.backoff.strategy = strategy.into();
        }
        if let Some(max_interval) = self.max_interval {
            config.backoff.max_interval = max_interval;
        }
        if let Some(max_retries) = self.max_retries {
            config.backoff.max_retries = Some(max_retries);
        }
        if self.jitter {
            config.backoff.jitter = true;
        }
        if let Some(request_timeout) = self.request_timeout {
            config.probe.request_timeout = Some(request_timeout);
        }
        let flags = Verbosity::from_flags(self.verbose, self.very_verbose);
        config.observability.verbosity = config.observability.verbosity.max(flags);
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            return if e.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    let config = match cli.resolve_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("invalid configuration: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let _ = logging::init(&config.observability.log_level);

    tracing::debug!(
        url = %cli.url,
        timeout = ?config.wait.timeout,
        strategy = ?config.backoff.strategy,
        interval = ?config.backoff.interval,
        "Configuration loaded"
    );

    run(cli.url, config).await
}

async fn run(url: String, config: RdyConfig) -> ExitCode {
    let client = match config.probe.build_client() {
        Ok(client) => client,
        Err(e) => {
            eprintln!("failed to build HTTP client: {}", e);
            return ExitCode::FAILURE;
        }
    };
    let policy = config.backoff.build();
    let reporter = Arc::new(ConsoleReporter::stderr(config.observability.verbosity));

    let ctx = Context::with_timeout(config.wait.timeout);
    let signals = cancel_on_signal(&ctx);

    let request = WaitRequest::new(url, policy.as_ref())
        .with_reporter(reporter)
        .with_client(client)
        .with_cancel_mode(config.wait.cancel_mode);

    let outcome = rdy::wait(&ctx, request).await;
    signals.abort();

    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}
