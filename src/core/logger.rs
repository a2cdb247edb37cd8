//! Main logger implementation
//!
//! A logger is a named threshold plus an ordered list of appenders. Every
//! logging call is synchronous: the level is compared against the threshold,
//! and an accepted event is handed to each appender in registration order
//! before the call returns.

use super::{
    appender::Appender,
    error::{LoggerError, Result},
    level::{Level, ToLevel},
    logging_event::LoggingEvent,
    metrics::LoggerMetrics,
};
use parking_lot::RwLock;
use std::any::Any;
use std::cell::Cell;
use std::error::Error;
use std::fmt;
use std::sync::{Arc, Weak};

pub struct Logger {
    name: String,
    threshold: RwLock<Level>,
    appenders: RwLock<Vec<Arc<dyn Appender>>>,
    /// Metrics for observability (dispatched, filtered, appender failures)
    metrics: LoggerMetrics,
    this: Weak<Logger>,
}

impl Logger {
    /// Create a standalone logger at the default `INFO` threshold
    ///
    /// Loggers shared by category name come from the
    /// [`Registry`](super::Registry) instead.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Arc<Self> {
        Self::with_level(name, Level::default())
    }

    #[must_use]
    pub fn with_level(name: impl Into<String>, level: Level) -> Arc<Self> {
        let name = name.into();
        Arc::new_cyclic(|this| Self {
            name,
            threshold: RwLock::new(level),
            appenders: RwLock::new(Vec::new()),
            metrics: LoggerMetrics::new(),
            this: this.clone(),
        })
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn level(&self) -> Level {
        *self.threshold.read()
    }

    /// Replace the threshold
    ///
    /// Accepts a [`Level`], a level name or a rank. Input that names no level
    /// keeps the current threshold.
    ///
    /// ```
    /// use rust_log4::{Level, Logger};
    ///
    /// let logger = Logger::new("svc");
    /// logger.set_level("debug");
    /// assert_eq!(logger.level(), Level::Debug);
    ///
    /// logger.set_level("chatty");
    /// assert_eq!(logger.level(), Level::Debug);
    /// ```
    pub fn set_level<L: ToLevel>(&self, level: L) {
        let mut threshold = self.threshold.write();
        *threshold = level.to_level(*threshold);
    }

    /// Whether an event at `level` would reach the appenders
    #[inline]
    pub fn is_enabled(&self, level: Level) -> bool {
        level.rank() >= self.threshold.read().rank()
    }

    /// Append to the appender list; the same appender may be added twice
    pub fn add_appender(&self, appender: Arc<dyn Appender>) {
        self.appenders.write().push(appender);
    }

    pub fn appender_count(&self) -> usize {
        self.appenders.read().len()
    }

    pub fn log(&self, level: Level, message: impl Into<String>) {
        if !self.accept(level) {
            return;
        }

        let event = LoggingEvent::new(&self.name, level, message, self.this.clone());
        self.dispatch(&event);
    }

    /// Log with an error attached to the event
    pub fn log_with_exception(
        &self,
        level: Level,
        message: impl Into<String>,
        exception: impl Into<Box<dyn Error + Send + Sync>>,
    ) {
        if !self.accept(level) {
            return;
        }

        let exception: Box<dyn Error + Send + Sync> = exception.into();
        let event = LoggingEvent::new(&self.name, level, message, self.this.clone())
            .with_exception(Arc::from(exception));
        self.dispatch(&event);
    }

    /// Run a prebuilt event through this logger's threshold and appenders
    pub fn log_event(&self, event: &LoggingEvent) {
        if self.accept(event.level()) {
            self.dispatch(event);
        }
    }

    fn accept(&self, level: Level) -> bool {
        let enabled = self.is_enabled(level);
        if !enabled {
            self.metrics.record_filtered();
        }
        enabled
    }

    /// Hand an accepted event to every appender with per-appender isolation
    ///
    /// The list is snapshotted first, so appenders may log or reconfigure
    /// this logger while being dispatched to.
    fn dispatch(&self, event: &LoggingEvent) {
        self.metrics.record_dispatched();
        let appenders = self.appenders.read().clone();

        for (idx, appender) in appenders.iter().enumerate() {
            // Failures are reported and counted inside; the caller never sees them
            let _ = self.call_isolated(idx, appender, "dispatch", |a| a.dispatch(event));
        }
    }

    /// Flush every appender, returning the first failure
    pub fn flush(&self) -> Result<()> {
        self.for_each_appender("flush", |a| a.flush())
    }

    /// Clear every appender's destination, returning the first failure
    pub fn clear(&self) -> Result<()> {
        self.for_each_appender("clear", |a| a.clear())
    }

    fn for_each_appender(
        &self,
        action: &str,
        op: impl Fn(&dyn Appender) -> Result<()>,
    ) -> Result<()> {
        let appenders = self.appenders.read().clone();
        let mut first_error: Option<LoggerError> = None;
        for (idx, appender) in appenders.iter().enumerate() {
            if let Err(e) = self.call_isolated(idx, appender, action, &op) {
                first_error.get_or_insert(e);
            }
        }
        first_error.map_or(Ok(()), Err)
    }

    /// Run one appender operation with panic isolation
    ///
    /// Errors and panics are counted, reported on stderr and returned; a
    /// panic comes back as [`LoggerError::AppenderFailure`].
    fn call_isolated(
        &self,
        idx: usize,
        appender: &Arc<dyn Appender>,
        action: &str,
        op: impl FnOnce(&dyn Appender) -> Result<()>,
    ) -> Result<()> {
        let _scope = AppenderScope::enter();
        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            op(appender.as_ref())
        }));

        match result {
            Ok(Ok(())) => Ok(()),
            Ok(Err(e)) => {
                self.metrics.record_appender_failure();
                eprintln!(
                    "[LOGGER ERROR] Appender #{} '{}' on '{}' failed during {}: {}",
                    idx,
                    appender.name(),
                    self.name,
                    action,
                    e
                );
                Err(e)
            }
            Err(panic_info) => {
                self.metrics.record_appender_failure();
                let message = panic_message(panic_info.as_ref());
                eprintln!(
                    "[LOGGER CRITICAL] Appender #{} '{}' on '{}' panicked during {}: {}. \
                     Other appenders continue to function.",
                    idx,
                    appender.name(),
                    self.name,
                    action,
                    message
                );
                Err(LoggerError::appender(
                    appender.name(),
                    format!("panicked during {}: {}", action, message),
                ))
            }
        }
    }

    /// Get the logger metrics
    ///
    /// # Example
    ///
    /// ```
    /// use rust_log4::Logger;
    ///
    /// let logger = Logger::new("svc");
    /// logger.debug("below the INFO threshold");
    /// logger.info("accepted");
    ///
    /// assert_eq!(logger.metrics().filtered_count(), 1);
    /// assert_eq!(logger.metrics().dispatched_count(), 1);
    /// ```
    pub fn metrics(&self) -> &LoggerMetrics {
        &self.metrics
    }

    #[inline]
    pub fn trace(&self, message: impl Into<String>) {
        self.log(Level::Trace, message);
    }

    #[inline]
    pub fn debug(&self, message: impl Into<String>) {
        self.log(Level::Debug, message);
    }

    #[inline]
    pub fn info(&self, message: impl Into<String>) {
        self.log(Level::Info, message);
    }

    #[inline]
    pub fn warn(&self, message: impl Into<String>) {
        self.log(Level::Warn, message);
    }

    #[inline]
    pub fn error(&self, message: impl Into<String>) {
        self.log(Level::Error, message);
    }

    #[inline]
    pub fn fatal(&self, message: impl Into<String>) {
        self.log(Level::Fatal, message);
    }

    /// Helper for warn logging with an attached error
    pub fn warn_with_exception(
        &self,
        message: impl Into<String>,
        exception: impl Into<Box<dyn Error + Send + Sync>>,
    ) {
        self.log_with_exception(Level::Warn, message, exception);
    }

    /// Helper for error logging with an attached error
    pub fn error_with_exception(
        &self,
        message: impl Into<String>,
        exception: impl Into<Box<dyn Error + Send + Sync>>,
    ) {
        self.log_with_exception(Level::Error, message, exception);
    }

    /// Helper for fatal logging with an attached error
    pub fn fatal_with_exception(
        &self,
        message: impl Into<String>,
        exception: impl Into<Box<dyn Error + Send + Sync>>,
    ) {
        self.log_with_exception(Level::Fatal, message, exception);
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let appenders: Vec<String> = self
            .appenders
            .read()
            .iter()
            .map(|a| a.name().to_string())
            .collect();
        f.debug_struct("Logger")
            .field("name", &self.name)
            .field("threshold", &self.level())
            .field("appenders", &appenders)
            .finish()
    }
}

thread_local! {
    static APPENDER_DEPTH: Cell<usize> = const { Cell::new(0) };
}

/// Marks the current thread as running appender code until dropped
struct AppenderScope;

impl AppenderScope {
    fn enter() -> Self {
        APPENDER_DEPTH.with(|depth| depth.set(depth.get() + 1));
        AppenderScope
    }
}

impl Drop for AppenderScope {
    fn drop(&mut self) {
        APPENDER_DEPTH.with(|depth| depth.set(depth.get() - 1));
    }
}

/// Whether a logger is running appender code on the current thread
///
/// A panic raised while this holds is caught by the logger that made the
/// call.
pub(crate) fn in_appender() -> bool {
    APPENDER_DEPTH.with(|depth| depth.get() > 0)
}

/// Extract the message from a panic payload
pub(crate) fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "Unknown panic".to_string()
    }
}

/// Builder for constructing a Logger with a fluent API
///
/// # Example
/// ```
/// use rust_log4::prelude::*;
///
/// let logger = Logger::builder("http")
///     .level(Level::Debug)
///     .appender(ConsoleAppender::shared())
///     .build();
///
/// assert_eq!(logger.level(), Level::Debug);
/// ```
pub struct LoggerBuilder {
    name: String,
    level: Level,
    appenders: Vec<Arc<dyn Appender>>,
}

impl LoggerBuilder {
    /// Create a new builder with default values
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            level: Level::default(),
            appenders: Vec::new(),
        }
    }

    /// Set the threshold
    #[must_use = "builder methods return a new value"]
    pub fn level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    /// Add an appender
    #[must_use = "builder methods return a new value"]
    pub fn appender(mut self, appender: Arc<dyn Appender>) -> Self {
        self.appenders.push(appender);
        self
    }

    /// Add several appenders, keeping their order
    #[must_use = "builder methods return a new value"]
    pub fn appenders<I>(mut self, appenders: I) -> Self
    where
        I: IntoIterator<Item = Arc<dyn Appender>>,
    {
        self.appenders.extend(appenders);
        self
    }

    /// Build the Logger
    pub fn build(self) -> Arc<Logger> {
        let logger = Logger::with_level(self.name, self.level);
        for appender in self.appenders {
            logger.add_appender(appender);
        }
        logger
    }
}

impl Logger {
    /// Create a builder for Logger
    #[must_use]
    pub fn builder(name: impl Into<String>) -> LoggerBuilder {
        LoggerBuilder::new(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::appenders::MemoryAppender;
    use parking_lot::Mutex;

    /// Records `appender_id:level:message` into a shared journal
    struct Recorder {
        id: &'static str,
        journal: Arc<Mutex<Vec<String>>>,
    }

    impl Appender for Recorder {
        fn dispatch(&self, event: &LoggingEvent) -> Result<()> {
            self.journal
                .lock()
                .push(format!("{}:{}:{}", self.id, event.level(), event.message()));
            Ok(())
        }

        fn name(&self) -> &str {
            self.id
        }
    }

    fn recorder(id: &'static str, journal: &Arc<Mutex<Vec<String>>>) -> Arc<dyn Appender> {
        Arc::new(Recorder {
            id,
            journal: Arc::clone(journal),
        })
    }

    #[test]
    fn test_default_threshold_is_info() {
        let logger = Logger::new("svc");
        assert_eq!(logger.level(), Level::Info);
        assert_eq!(logger.name(), "svc");
    }

    #[test]
    fn test_threshold_is_inclusive() {
        let journal = Arc::new(Mutex::new(Vec::new()));
        let logger = Logger::builder("svc")
            .level(Level::Info)
            .appender(recorder("a", &journal))
            .build();

        logger.info("x");
        logger.debug("x");

        assert_eq!(*journal.lock(), vec!["a:INFO:x".to_string()]);
    }

    #[test]
    fn test_registration_order_and_duplicates() {
        let journal = Arc::new(Mutex::new(Vec::new()));
        let a = recorder("a", &journal);
        let logger = Logger::new("svc");
        logger.add_appender(Arc::clone(&a));
        logger.add_appender(recorder("b", &journal));
        logger.add_appender(a);

        logger.warn("w");

        assert_eq!(logger.appender_count(), 3);
        assert_eq!(*journal.lock(), vec!["a:WARN:w", "b:WARN:w", "a:WARN:w"]);
    }

    #[test]
    fn test_set_level_keeps_previous_on_invalid_input() {
        let logger = Logger::new("svc");
        logger.set_level(Level::Warn);
        logger.set_level("nonsense");
        assert_eq!(logger.level(), Level::Warn);

        logger.set_level(12_345_i64);
        assert_eq!(logger.level(), Level::Warn);

        logger.set_level(10_000_i32);
        assert_eq!(logger.level(), Level::Debug);

        logger.set_level(None::<&str>);
        assert_eq!(logger.level(), Level::Debug);
    }

    #[test]
    fn test_off_and_all_thresholds() {
        let logger = Logger::new("svc");

        logger.set_level(Level::Off);
        assert!(!logger.is_enabled(Level::Fatal));

        logger.set_level(Level::All);
        assert!(logger.is_enabled(Level::Trace));
    }

    #[test]
    fn test_event_references_logger() {
        struct OriginRecorder(Mutex<Option<String>>);

        impl Appender for OriginRecorder {
            fn dispatch(&self, event: &LoggingEvent) -> Result<()> {
                *self.0.lock() = event.logger().map(|l| l.name().to_string());
                Ok(())
            }

            fn name(&self) -> &str {
                "origin-recorder"
            }
        }

        let recorder = Arc::new(OriginRecorder(Mutex::new(None)));
        let logger = Logger::new("origin");
        logger.add_appender(recorder.clone());
        logger.error("boom");

        assert_eq!(recorder.0.lock().as_deref(), Some("origin"));
    }

    #[test]
    fn test_failing_appender_is_isolated() {
        struct Failing;

        impl Appender for Failing {
            fn dispatch(&self, _event: &LoggingEvent) -> Result<()> {
                Err(LoggerError::appender(self.name(), "Simulated failure"))
            }

            fn name(&self) -> &str {
                "failing"
            }
        }

        let journal = Arc::new(Mutex::new(Vec::new()));
        let logger = Logger::new("svc");
        logger.add_appender(Arc::new(Failing));
        logger.add_appender(recorder("b", &journal));

        logger.error("e1");

        assert_eq!(*journal.lock(), vec!["b:ERROR:e1"]);
        assert_eq!(logger.metrics().appender_failures(), 1);
        assert_eq!(logger.metrics().dispatched_count(), 1);
    }

    #[test]
    fn test_exception_attached() {
        struct ExceptionCollector(Mutex<Vec<String>>);

        impl Appender for ExceptionCollector {
            fn dispatch(&self, event: &LoggingEvent) -> Result<()> {
                if let Some(e) = event.exception() {
                    self.0.lock().push(e.to_string());
                }
                Ok(())
            }

            fn name(&self) -> &str {
                "exception-collector"
            }
        }

        let collector = Arc::new(ExceptionCollector(Mutex::new(Vec::new())));
        let logger = Logger::new("svc");
        logger.add_appender(collector.clone());

        logger.error_with_exception("read failed", std::io::Error::other("disk gone"));
        logger.fatal_with_exception("giving up", "retries exhausted");

        assert_eq!(*collector.0.lock(), vec!["disk gone", "retries exhausted"]);
    }

    #[test]
    fn test_log_event_applies_threshold() {
        let journal = Arc::new(Mutex::new(Vec::new()));
        let logger = Logger::builder("svc").appender(recorder("a", &journal)).build();

        logger.log_event(&LoggingEvent::detached("elsewhere", Level::Debug, "dropped"));
        logger.log_event(&LoggingEvent::detached("elsewhere", Level::Error, "kept"));

        assert_eq!(*journal.lock(), vec!["a:ERROR:kept"]);
    }

    #[test]
    fn test_builder_appenders() {
        let journal = Arc::new(Mutex::new(Vec::new()));
        let logger = Logger::builder("svc")
            .level(Level::Trace)
            .appenders(vec![recorder("a", &journal), recorder("b", &journal)])
            .build();

        logger.trace("t");
        assert_eq!(*journal.lock(), vec!["a:TRACE:t", "b:TRACE:t"]);
    }

    /// Panics on every lifecycle call so isolation can be observed
    struct Crumbling;

    impl Appender for Crumbling {
        fn dispatch(&self, _event: &LoggingEvent) -> Result<()> {
            Ok(())
        }

        fn clear(&self) -> Result<()> {
            panic!("clear crumbled");
        }

        fn flush(&self) -> Result<()> {
            panic!("flush crumbled");
        }

        fn name(&self) -> &str {
            "crumbling"
        }
    }

    #[test]
    fn test_clear_survives_panicking_appender() {
        let memory = Arc::new(MemoryAppender::new());
        let logger = Logger::new("svc");
        logger.add_appender(Arc::new(Crumbling));
        logger.add_appender(memory.clone());
        logger.info("kept until clear");
        assert_eq!(memory.len(), 1);

        let result = logger.clear();

        match result {
            Err(LoggerError::AppenderFailure { appender, message }) => {
                assert_eq!(appender, "crumbling");
                assert!(message.contains("clear crumbled"));
            }
            other => panic!("unexpected clear outcome: {:?}", other),
        }
        assert!(memory.is_empty());
        assert_eq!(logger.metrics().appender_failures(), 1);
    }

    #[test]
    fn test_flush_survives_panicking_appender() {
        let journal = Arc::new(Mutex::new(Vec::new()));
        let logger = Logger::new("svc");
        logger.add_appender(Arc::new(Crumbling));
        logger.add_appender(recorder("b", &journal));

        assert!(matches!(
            logger.flush(),
            Err(LoggerError::AppenderFailure { .. })
        ));
        assert_eq!(logger.metrics().appender_failures(), 1);

        logger.warn("still routed");
        assert_eq!(*journal.lock(), vec!["b:WARN:still routed"]);
    }

    #[test]
    fn test_in_appender_tracks_dispatch() {
        struct ScopeWitness(Mutex<Vec<bool>>);

        impl Appender for ScopeWitness {
            fn dispatch(&self, _event: &LoggingEvent) -> Result<()> {
                self.0.lock().push(in_appender());
                Ok(())
            }

            fn name(&self) -> &str {
                "scope-witness"
            }
        }

        let witness = Arc::new(ScopeWitness(Mutex::new(Vec::new())));
        let logger = Logger::new("svc");
        logger.add_appender(witness.clone());

        assert!(!in_appender());
        logger.info("inside");
        assert!(!in_appender());

        let _ = std::panic::catch_unwind(|| {
            let _scope = AppenderScope::enter();
            panic!("unwinds through the scope");
        });
        assert!(!in_appender());

        assert_eq!(*witness.0.lock(), vec![true]);
    }

    #[test]
    fn test_panic_message() {
        let payload: Box<dyn Any + Send> = Box::new("static str");
        assert_eq!(panic_message(payload.as_ref()), "static str");

        let payload: Box<dyn Any + Send> = Box::new(String::from("owned"));
        assert_eq!(panic_message(payload.as_ref()), "owned");

        let payload: Box<dyn Any + Send> = Box::new(7_u8);
        assert_eq!(panic_message(payload.as_ref()), "Unknown panic");
    }
}
