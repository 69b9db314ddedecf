//! Null-object wrapper around an optional reporter.

use std::fmt;
use std::sync::Arc;

use crate::report::{Level, Reporter};

/// Makes every emission safe: absent sinks and disabled channels are no-ops.
///
/// `SafeReporter` is itself a [`Reporter`]. Wrapping one again adds a guard
/// layer but each event still reaches the inner sink exactly once.
#[derive(Clone, Default)]
pub struct SafeReporter {
    inner: Option<Arc<dyn Reporter>>,
}

impl SafeReporter {
    pub fn new(inner: Option<Arc<dyn Reporter>>) -> Self {
        Self { inner }
    }

    /// A reporter that drops everything.
    pub fn none() -> Self {
        Self { inner: None }
    }

    fn sink(&self, level: Level) -> Option<&dyn Reporter> {
        self.inner
            .as_deref()
            .filter(|reporter| reporter.enabled(level))
    }
}

impl Reporter for SafeReporter {
    fn l1(&self, args: fmt::Arguments<'_>) {
        if let Some(reporter) = self.sink(Level::L1) {
            reporter.l1(args);
        }
    }

    fn l2(&self, args: fmt::Arguments<'_>) {
        if let Some(reporter) = self.sink(Level::L2) {
            reporter.l2(args);
        }
    }

    fn enabled(&self, level: Level) -> bool {
        self.sink(level).is_some()
    }
}

impl fmt::Debug for SafeReporter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SafeReporter")
            .field("present", &self.inner.is_some())
            .finish()
    }
}

impl From<Arc<dyn Reporter>> for SafeReporter {
    fn from(inner: Arc<dyn Reporter>) -> Self {
        Self::new(Some(inner))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[derive(Default)]
    struct Recorder {
        events: Mutex<Vec<(Level, String)>>,
        l1: bool,
        l2: bool,
    }

    impl Recorder {
        fn with_levels(l1: bool, l2: bool) -> Self {
            Self {
                l1,
                l2,
                ..Self::default()
            }
        }

        fn events(&self) -> Vec<(Level, String)> {
            self.events.lock().unwrap().clone()
        }
    }

    impl Reporter for Recorder {
        fn l1(&self, args: fmt::Arguments<'_>) {
            self.events.lock().unwrap().push((Level::L1, args.to_string()));
        }

        fn l2(&self, args: fmt::Arguments<'_>) {
            self.events.lock().unwrap().push((Level::L2, args.to_string()));
        }

        fn enabled(&self, level: Level) -> bool {
            match level {
                Level::L1 => self.l1,
                Level::L2 => self.l2,
            }
        }
    }

    #[test]
    fn test_absent_sink_is_silent() {
        let reporter = SafeReporter::none();
        reporter.l1(format_args!("request {}", 1));
        reporter.l2(format_args!("body {}", "x"));
        assert!(!reporter.enabled(Level::L1));
        assert!(!reporter.enabled(Level::L2));
    }

    #[test]
    fn test_forwards_enabled_channels() {
        let recorder = Arc::new(Recorder::with_levels(true, true));
        let reporter = SafeReporter::new(Some(recorder.clone()));

        reporter.l1(format_args!(">> Request: GET {}", "http://a"));
        reporter.l2(format_args!("body"));

        assert_eq!(
            recorder.events(),
            vec![
                (Level::L1, ">> Request: GET http://a".to_string()),
                (Level::L2, "body".to_string()),
            ]
        );
    }

    #[test]
    fn test_disabled_channels_drop_events() {
        let recorder = Arc::new(Recorder::with_levels(true, false));
        let reporter = SafeReporter::new(Some(recorder.clone()));

        for _ in 0..10 {
            reporter.l2(format_args!("body"));
        }
        reporter.l1(format_args!("status"));

        assert_eq!(recorder.events(), vec![(Level::L1, "status".to_string())]);
    }

    #[test]
    fn test_double_wrap_delivers_once() {
        let recorder = Arc::new(Recorder::with_levels(true, true));
        let once = Arc::new(SafeReporter::new(Some(recorder.clone())));
        let twice = SafeReporter::new(Some(once));

        twice.l1(format_args!("a"));
        twice.l2(format_args!("b"));

        assert_eq!(recorder.events().len(), 2);
    }
}
