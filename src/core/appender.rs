//! Appender trait for log output destinations

use super::{error::Result, logging_event::LoggingEvent};

/// Destination for accepted events
///
/// Appenders take `&self` so a single instance can be attached to many
/// loggers and invoked from several threads; implementations keep their
/// mutable state behind locks. A failure that cannot be absorbed by a
/// fallback is returned as `Err`; the logger reports it and moves on to the
/// next appender, it never reaches the code that emitted the event.
pub trait Appender: Send + Sync {
    fn dispatch(&self, event: &LoggingEvent) -> Result<()>;

    /// Reset the destination (clear a terminal, truncate a buffer)
    fn clear(&self) -> Result<()> {
        Ok(())
    }

    fn flush(&self) -> Result<()> {
        Ok(())
    }

    fn name(&self) -> &str;
}
