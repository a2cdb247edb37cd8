//! Console appender implementation
//!
//! Routing by level:
//!
//! - `WARN` goes to the warning sink when one is configured,
//! - `ERROR` and above go to the error sink when one is configured,
//! - everything else, and anything whose sink is missing, goes to the
//!   standard sink.
//!
//! `WARN` is matched exactly, so a level ranked between `WARN` and `ERROR`
//! would land on the standard sink rather than the warning sink.

use crate::core::{Appender, Layout, Level, LoggerError, LoggingEvent, Result};
use crate::layouts::SimpleLayout;
#[cfg(feature = "color")]
use colored::Colorize;
use parking_lot::RwLock;
use std::io::{self, Write};
use std::sync::{Arc, OnceLock};

const CLEAR_SCREEN: &str = "\x1B[2J\x1B[1;1H";

/// Line-oriented console output
///
/// `write_line` must write the whole line in one go; the built-in sinks
/// hold the stream lock for the duration of the write.
pub trait ConsoleSink: Send + Sync {
    fn write_line(&self, line: &str) -> io::Result<()>;

    fn clear(&self) -> io::Result<()> {
        Ok(())
    }

    fn name(&self) -> &str;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutSink;

impl ConsoleSink for StdoutSink {
    fn write_line(&self, line: &str) -> io::Result<()> {
        let mut out = io::stdout().lock();
        writeln!(out, "{}", line)?;
        out.flush()
    }

    fn clear(&self) -> io::Result<()> {
        let mut out = io::stdout().lock();
        out.write_all(CLEAR_SCREEN.as_bytes())?;
        out.flush()
    }

    fn name(&self) -> &str {
        "stdout"
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct StderrSink;

impl ConsoleSink for StderrSink {
    fn write_line(&self, line: &str) -> io::Result<()> {
        let mut err = io::stderr().lock();
        writeln!(err, "{}", line)?;
        err.flush()
    }

    fn name(&self) -> &str {
        "stderr"
    }
}

/// Which console stream an event is meant for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleStream {
    Standard,
    Warning,
    Error,
}

impl ConsoleStream {
    pub fn for_level(level: Level) -> Self {
        if level == Level::Warn {
            ConsoleStream::Warning
        } else if level.rank() >= Level::Error.rank() {
            ConsoleStream::Error
        } else {
            ConsoleStream::Standard
        }
    }
}

pub struct ConsoleAppender {
    standard: Arc<dyn ConsoleSink>,
    warning: Option<Arc<dyn ConsoleSink>>,
    error: Option<Arc<dyn ConsoleSink>>,
    layout: RwLock<Arc<dyn Layout>>,
    #[cfg_attr(not(feature = "color"), allow(dead_code))]
    use_colors: bool,
}

static SHARED: OnceLock<Arc<ConsoleAppender>> = OnceLock::new();

impl ConsoleAppender {
    /// Stdout for standard output, stderr for errors, no warning stream
    ///
    /// A terminal has no stream reserved for warnings, so `WARN` lines go to
    /// stdout unless a warning sink is configured with [`Self::with_sinks`].
    pub fn new() -> Self {
        Self::with_sinks(Arc::new(StdoutSink), None, Some(Arc::new(StderrSink)))
    }

    pub fn with_sinks(
        standard: Arc<dyn ConsoleSink>,
        warning: Option<Arc<dyn ConsoleSink>>,
        error: Option<Arc<dyn ConsoleSink>>,
    ) -> Self {
        Self {
            standard,
            warning,
            error,
            layout: RwLock::new(Arc::new(SimpleLayout::new())),
            use_colors: false,
        }
    }

    /// Process-wide console appender, created on first use
    ///
    /// ```
    /// use rust_log4::appenders::ConsoleAppender;
    /// use std::sync::Arc;
    ///
    /// assert!(Arc::ptr_eq(&ConsoleAppender::shared(), &ConsoleAppender::shared()));
    /// ```
    pub fn shared() -> Arc<ConsoleAppender> {
        Arc::clone(SHARED.get_or_init(|| Arc::new(ConsoleAppender::new())))
    }

    /// Colour whole lines by level (feature `color`)
    #[must_use]
    pub fn with_colors(mut self, use_colors: bool) -> Self {
        self.use_colors = use_colors;
        self
    }

    /// Set the layout for this appender
    ///
    /// # Example
    ///
    /// ```
    /// use rust_log4::appenders::ConsoleAppender;
    /// use rust_log4::layouts::PatternLayout;
    ///
    /// let appender = ConsoleAppender::new().with_layout(PatternLayout::new("%p %c %m"));
    /// ```
    #[must_use]
    pub fn with_layout(self, layout: impl Layout + 'static) -> Self {
        *self.layout.write() = Arc::new(layout);
        self
    }

    /// Replace the layout of an appender that is already shared
    pub fn set_layout(&self, layout: Arc<dyn Layout>) {
        *self.layout.write() = layout;
    }

    pub fn layout(&self) -> Arc<dyn Layout> {
        Arc::clone(&self.layout.read())
    }

    fn routed_sink(&self, level: Level) -> Option<&Arc<dyn ConsoleSink>> {
        match ConsoleStream::for_level(level) {
            ConsoleStream::Warning => self.warning.as_ref(),
            ConsoleStream::Error => self.error.as_ref(),
            ConsoleStream::Standard => None,
        }
    }

    #[cfg(feature = "color")]
    fn paint(&self, line: String, level: Level) -> String {
        if self.use_colors {
            line.color(level.color()).to_string()
        } else {
            line
        }
    }

    #[cfg(not(feature = "color"))]
    fn paint(&self, line: String, _level: Level) -> String {
        line
    }
}

impl Default for ConsoleAppender {
    fn default() -> Self {
        Self::new()
    }
}

impl Appender for ConsoleAppender {
    fn dispatch(&self, event: &LoggingEvent) -> Result<()> {
        let line = self.paint(self.layout().format(event), event.level());

        // A broken warning or error stream degrades to the standard sink.
        if let Some(sink) = self.routed_sink(event.level()) {
            if sink.write_line(&line).is_ok() {
                return Ok(());
            }
        }

        self.standard
            .write_line(&line)
            .map_err(|e| LoggerError::sink(self.standard.name(), e.to_string()))
    }

    fn clear(&self) -> Result<()> {
        self.standard
            .clear()
            .map_err(|e| LoggerError::sink(self.standard.name(), e.to_string()))
    }

    fn flush(&self) -> Result<()> {
        io::stdout().flush()?;
        io::stderr().flush()?;
        Ok(())
    }

    fn name(&self) -> &str {
        "console"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;

    #[derive(Default)]
    struct RecordingSink {
        lines: Mutex<Vec<String>>,
        broken: bool,
    }

    impl RecordingSink {
        fn broken() -> Self {
            Self {
                broken: true,
                ..Self::default()
            }
        }

        fn count(&self) -> usize {
            self.lines.lock().len()
        }
    }

    impl ConsoleSink for RecordingSink {
        fn write_line(&self, line: &str) -> io::Result<()> {
            if self.broken {
                return Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"));
            }
            self.lines.lock().push(line.to_string());
            Ok(())
        }

        fn name(&self) -> &str {
            "recording"
        }
    }

    struct Sinks {
        standard: Arc<RecordingSink>,
        warning: Arc<RecordingSink>,
        error: Arc<RecordingSink>,
    }

    fn appender_with_sinks() -> (ConsoleAppender, Sinks) {
        let sinks = Sinks {
            standard: Arc::new(RecordingSink::default()),
            warning: Arc::new(RecordingSink::default()),
            error: Arc::new(RecordingSink::default()),
        };
        let appender = ConsoleAppender::with_sinks(
            sinks.standard.clone(),
            Some(sinks.warning.clone()),
            Some(sinks.error.clone()),
        );
        (appender, sinks)
    }

    fn event(level: Level) -> LoggingEvent {
        LoggingEvent::detached("console", level, "message")
    }

    #[test]
    fn test_stream_for_level() {
        assert_eq!(ConsoleStream::for_level(Level::Trace), ConsoleStream::Standard);
        assert_eq!(ConsoleStream::for_level(Level::Info), ConsoleStream::Standard);
        assert_eq!(ConsoleStream::for_level(Level::Warn), ConsoleStream::Warning);
        assert_eq!(ConsoleStream::for_level(Level::Error), ConsoleStream::Error);
        assert_eq!(ConsoleStream::for_level(Level::Fatal), ConsoleStream::Error);
    }

    #[test]
    fn test_routing() {
        let (appender, sinks) = appender_with_sinks();

        appender.dispatch(&event(Level::Warn)).unwrap();
        assert_eq!((sinks.standard.count(), sinks.warning.count(), sinks.error.count()), (0, 1, 0));

        appender.dispatch(&event(Level::Fatal)).unwrap();
        assert_eq!((sinks.standard.count(), sinks.warning.count(), sinks.error.count()), (0, 1, 1));

        appender.dispatch(&event(Level::Info)).unwrap();
        assert_eq!((sinks.standard.count(), sinks.warning.count(), sinks.error.count()), (1, 1, 1));
    }

    #[test]
    fn test_missing_sinks_fall_back_to_standard() {
        let standard = Arc::new(RecordingSink::default());
        let appender = ConsoleAppender::with_sinks(standard.clone(), None, None);

        appender.dispatch(&event(Level::Warn)).unwrap();
        appender.dispatch(&event(Level::Error)).unwrap();

        assert_eq!(standard.count(), 2);
    }

    #[test]
    fn test_broken_sink_degrades_to_standard() {
        let standard = Arc::new(RecordingSink::default());
        let appender = ConsoleAppender::with_sinks(
            standard.clone(),
            Some(Arc::new(RecordingSink::broken())),
            Some(Arc::new(RecordingSink::broken())),
        );

        appender.dispatch(&event(Level::Warn)).unwrap();
        appender.dispatch(&event(Level::Fatal)).unwrap();

        assert_eq!(standard.count(), 2);
    }

    #[test]
    fn test_broken_standard_sink_reports_error() {
        let appender = ConsoleAppender::with_sinks(Arc::new(RecordingSink::broken()), None, None);
        let result = appender.dispatch(&event(Level::Info));
        assert!(matches!(result, Err(LoggerError::SinkUnavailable { .. })));
    }

    #[test]
    fn test_layout_is_applied() {
        let (appender, sinks) = appender_with_sinks();
        appender.set_layout(Arc::new(|e: &LoggingEvent| format!("<{}>", e.message())));

        appender.dispatch(&event(Level::Info)).unwrap();

        assert_eq!(*sinks.standard.lines.lock(), vec!["<message>"]);
    }

    #[test]
    fn test_default_layout_is_simple() {
        let (appender, sinks) = appender_with_sinks();
        appender.dispatch(&event(Level::Info)).unwrap();

        let line = sinks.standard.lines.lock()[0].clone();
        assert!(line.ends_with(" - INFO - console - message"), "{}", line);
    }

    #[test]
    fn test_name() {
        assert_eq!(ConsoleAppender::new().name(), "console");
    }
}
