//! Channel appender: hands formatted events to another thread

use crate::core::{Appender, Layout, Level, LoggerError, LoggingEvent, Result};
use crate::layouts::SimpleLayout;
use crossbeam_channel::{bounded, Receiver, Sender, TrySendError};

/// A formatted event as delivered to the receiving side
#[derive(Debug, Clone)]
pub struct ChannelRecord {
    pub category: String,
    pub level: Level,
    pub line: String,
}

/// Forwards every event into a bounded channel without waiting
///
/// The appender never blocks the logging call: when the channel is full or
/// the receiver is gone the event is dropped and the failure reported to
/// the logger.
///
/// # Example
///
/// ```
/// use rust_log4::appenders::ChannelAppender;
/// use rust_log4::Logger;
/// use std::sync::Arc;
///
/// let (appender, receiver) = ChannelAppender::new(16);
/// let logger = Logger::new("ui");
/// logger.add_appender(Arc::new(appender));
///
/// logger.warn("low battery");
/// let record = receiver.try_recv().unwrap();
/// assert!(record.line.ends_with("WARN - ui - low battery"));
/// ```
pub struct ChannelAppender {
    sender: Sender<ChannelRecord>,
    layout: Box<dyn Layout>,
    capacity: usize,
}

impl ChannelAppender {
    pub fn new(capacity: usize) -> (Self, Receiver<ChannelRecord>) {
        let (sender, receiver) = bounded(capacity);
        let appender = Self {
            sender,
            layout: Box::new(SimpleLayout::new()),
            capacity,
        };
        (appender, receiver)
    }

    #[must_use]
    pub fn with_layout(mut self, layout: impl Layout + 'static) -> Self {
        self.layout = Box::new(layout);
        self
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl Appender for ChannelAppender {
    fn dispatch(&self, event: &LoggingEvent) -> Result<()> {
        let record = ChannelRecord {
            category: event.category_name().to_string(),
            level: event.level(),
            line: self.layout.format(event),
        };

        match self.sender.try_send(record) {
            Ok(()) => Ok(()),
            Err(TrySendError::Full(_)) => Err(LoggerError::ChannelFull {
                capacity: self.capacity,
            }),
            Err(TrySendError::Disconnected(_)) => Err(LoggerError::ChannelDisconnected),
        }
    }

    fn name(&self) -> &str {
        "channel"
    }
}
