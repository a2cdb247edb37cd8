//! JSON layout for machine-readable lines

use crate::core::{Layout, Level, LoggerError, LoggingEvent, Result, TimestampFormat};
use serde::Serialize;

/// Renders each event as a single-line JSON object
///
/// Compatible with log aggregation tools that ingest JSONL.
#[derive(Debug, Clone)]
pub struct JsonLayout {
    timestamp_format: TimestampFormat,
    pretty: bool,
}

#[derive(Serialize)]
struct JsonRecord<'a> {
    timestamp: String,
    level: Level,
    category: &'a str,
    message: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    exception: Option<String>,
    thread: &'a str,
}

impl JsonLayout {
    pub fn new() -> Self {
        Self {
            timestamp_format: TimestampFormat::Iso8601,
            pretty: false,
        }
    }

    /// Multi-line output, meant for humans reading a file
    pub fn new_pretty() -> Self {
        Self {
            pretty: true,
            ..Self::new()
        }
    }

    #[must_use]
    pub fn with_timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.timestamp_format = format;
        self
    }
}

impl Default for JsonLayout {
    fn default() -> Self {
        Self::new()
    }
}

impl JsonLayout {
    /// Render an event, surfacing serialization failures
    pub fn try_format(&self, event: &LoggingEvent) -> Result<String> {
        let record = JsonRecord {
            timestamp: self.timestamp_format.format(event.timestamp()),
            level: event.level(),
            category: event.category_name(),
            message: event.message(),
            exception: event.exception().map(|e| e.to_string()),
            thread: event.thread_label(),
        };

        let rendered = if self.pretty {
            serde_json::to_string_pretty(&record)?
        } else {
            serde_json::to_string(&record)?
        };
        Ok(rendered)
    }
}

/// Line emitted in place of an event that could not be serialized
fn fallback_line(level: Level, error: &LoggerError) -> String {
    serde_json::json!({
        "level": level.name(),
        "error": format!("unserializable event: {}", error),
    })
    .to_string()
}

impl Layout for JsonLayout {
    fn format(&self, event: &LoggingEvent) -> String {
        self.try_format(event)
            .unwrap_or_else(|e| fallback_line(event.level(), &e))
    }
}
