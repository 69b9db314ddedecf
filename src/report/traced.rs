//! Reporter that forwards events to `tracing`.

use std::fmt;

use crate::report::{Level, Reporter};

/// L1 events become `debug`, L2 events become `trace`, both under the
/// `rdy::probe` target.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingReporter;

impl Reporter for TracingReporter {
    fn l1(&self, args: fmt::Arguments<'_>) {
        tracing::debug!(target: "rdy::probe", "{}", args);
    }

    fn l2(&self, args: fmt::Arguments<'_>) {
        tracing::trace!(target: "rdy::probe", "{}", args);
    }

    fn enabled(&self, level: Level) -> bool {
        match level {
            Level::L1 => tracing::enabled!(target: "rdy::probe", tracing::Level::DEBUG),
            Level::L2 => tracing::enabled!(target: "rdy::probe", tracing::Level::TRACE),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::SafeReporter;
    use std::sync::Arc;

    #[test]
    fn test_no_subscriber_disables_both_channels() {
        let reporter = TracingReporter;
        assert!(!reporter.enabled(Level::L1));
        assert!(!reporter.enabled(Level::L2));

        let safe = SafeReporter::new(Some(Arc::new(reporter)));
        safe.l1(format_args!(">> Request: GET {}", "http://localhost"));
        safe.l2(format_args!("body"));
        assert!(!safe.enabled(Level::L1));
    }
}
