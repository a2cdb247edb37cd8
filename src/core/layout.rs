//! Layout trait for turning events into lines

use super::logging_event::LoggingEvent;

/// Formats a [`LoggingEvent`] into a line of text
///
/// Implementations must be pure: two events that differ only in their
/// timestamp produce output that differs only in the timestamp prefix.
pub trait Layout: Send + Sync {
    fn format(&self, event: &LoggingEvent) -> String;
}

impl<F> Layout for F
where
    F: Fn(&LoggingEvent) -> String + Send + Sync,
{
    fn format(&self, event: &LoggingEvent) -> String {
        self(event)
    }
}

/// Escape line breaks and tabs so one event always renders as one line
pub(crate) fn escape_line_breaks(message: &str) -> String {
    if !message.contains(['\n', '\r', '\t']) {
        return message.to_string();
    }
    message
        .replace('\n', "\\n")
        .replace('\r', "\\r")
        .replace('\t', "\\t")
}
