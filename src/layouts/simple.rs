//! Simple layout: `timestamp - LEVEL - category - message`

use crate::core::layout::escape_line_breaks;
use crate::core::{Layout, LoggingEvent, TimestampFormat};

/// Default layout of the console appender
///
/// Renders `2025.01.08-10:30:45 - INFO - svc - message`, followed by
/// ` - <exception>` when the event carries one.
#[derive(Debug, Clone, Default)]
pub struct SimpleLayout {
    timestamp_format: TimestampFormat,
}

impl SimpleLayout {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use another timestamp prefix
    ///
    /// ```
    /// use rust_log4::layouts::SimpleLayout;
    /// use rust_log4::TimestampFormat;
    ///
    /// let layout = SimpleLayout::new().with_timestamp_format(TimestampFormat::Iso8601);
    /// ```
    #[must_use]
    pub fn with_timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.timestamp_format = format;
        self
    }

    pub fn timestamp_format(&self) -> &TimestampFormat {
        &self.timestamp_format
    }
}

impl Layout for SimpleLayout {
    fn format(&self, event: &LoggingEvent) -> String {
        let mut line = format!(
            "{} - {} - {} - {}",
            self.timestamp_format.format(event.timestamp()),
            event.level(),
            event.category_name(),
            escape_line_breaks(event.message())
        );

        if let Some(exception) = event.exception() {
            line.push_str(" - ");
            line.push_str(&escape_line_breaks(&exception.to_string()));
        }

        line
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Level;
    use chrono::{Duration, TimeZone, Utc};
    use std::sync::Arc;

    fn event_at(seconds: i64) -> LoggingEvent {
        let base = Utc.with_ymd_and_hms(2024, 3, 9, 8, 5, 1).single().expect("valid datetime");
        LoggingEvent::detached("billing", Level::Warn, "quota at 91%")
            .with_timestamp(base + Duration::seconds(seconds))
    }

    #[test]
    fn test_format() {
        let line = SimpleLayout::new().format(&event_at(0));
        assert_eq!(line, "2024.03.09-08:05:01 - WARN - billing - quota at 91%");
    }

    #[test]
    fn test_only_prefix_depends_on_time() {
        let layout = SimpleLayout::new();
        let width = TimestampFormat::Simple.fixed_width().unwrap();
        let first = layout.format(&event_at(0));
        let second = layout.format(&event_at(3_725));

        assert_ne!(&first[..width], &second[..width]);
        assert_eq!(&first[width..], &second[width..]);
    }

    #[test]
    fn test_exception_appended() {
        let err = std::io::Error::new(std::io::ErrorKind::TimedOut, "upstream timed out");
        let event = event_at(0).with_exception(Arc::new(err));
        let line = SimpleLayout::new().format(&event);
        assert!(line.ends_with("quota at 91% - upstream timed out"));
    }

    #[test]
    fn test_message_stays_on_one_line() {
        let event = LoggingEvent::detached("auth", Level::Info, "User login\nERROR forged");
        let line = SimpleLayout::new().format(&event);
        assert_eq!(line.lines().count(), 1);
        assert!(line.ends_with("User login\\nERROR forged"));
    }
}
