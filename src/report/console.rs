//! Line-oriented reporter for terminals.

use std::fmt;
use std::io::{self, Write};
use std::sync::Mutex;

use serde::{Deserialize, Serialize};

use crate::report::{Level, Reporter};

/// How much the console reporter prints.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Verbosity {
    /// Nothing.
    #[default]
    Quiet,
    /// L1: request and response statuses.
    Verbose,
    /// L1 plus L2: response bodies.
    VeryVerbose,
}

impl Verbosity {
    /// Map the `-v` / `--vv` flags; `--vv` implies `-v`.
    pub fn from_flags(verbose: bool, very_verbose: bool) -> Self {
        match (verbose, very_verbose) {
            (_, true) => Verbosity::VeryVerbose,
            (true, false) => Verbosity::Verbose,
            (false, false) => Verbosity::Quiet,
        }
    }

    pub fn allows(self, level: Level) -> bool {
        match level {
            Level::L1 => self >= Verbosity::Verbose,
            Level::L2 => self >= Verbosity::VeryVerbose,
        }
    }
}

/// Writes one line per event to a writer (stderr by default).
pub struct ConsoleReporter<W = io::Stderr> {
    verbosity: Verbosity,
    out: Mutex<W>,
}

impl ConsoleReporter<io::Stderr> {
    pub fn stderr(verbosity: Verbosity) -> Self {
        Self::new(verbosity, io::stderr())
    }
}

impl<W: Write> ConsoleReporter<W> {
    pub fn new(verbosity: Verbosity, out: W) -> Self {
        Self {
            verbosity,
            out: Mutex::new(out),
        }
    }

    pub fn verbosity(&self) -> Verbosity {
        self.verbosity
    }

    fn print(&self, level: Level, args: fmt::Arguments<'_>) {
        if !self.verbosity.allows(level) {
            return;
        }
        // A poisoned lock only means another emission panicked mid-write.
        let mut out = match self.out.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        let _ = writeln!(out, "{}", args);
    }
}

impl<W: Write + Send> Reporter for ConsoleReporter<W> {
    fn l1(&self, args: fmt::Arguments<'_>) {
        self.print(Level::L1, args);
    }

    fn l2(&self, args: fmt::Arguments<'_>) {
        self.print(Level::L2, args);
    }

    fn enabled(&self, level: Level) -> bool {
        self.verbosity.allows(level)
    }
}
