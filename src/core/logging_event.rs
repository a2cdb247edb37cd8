//! Logging event record

use super::level::Level;
use super::logger::Logger;
use chrono::{DateTime, Utc};
use std::cell::RefCell;
use std::error::Error;
use std::fmt;
use std::sync::{Arc, Weak};

/// Error attached to an event, shared read-only by every appender
pub type Exception = Arc<dyn Error + Send + Sync + 'static>;

// Thread-local caches for thread information to avoid repeated allocations
thread_local! {
    static THREAD_ID_CACHE: RefCell<Option<String>> = const { RefCell::new(None) };
    static THREAD_NAME_CACHE: RefCell<Option<Option<String>>> = const { RefCell::new(None) };
}

fn current_thread_id() -> String {
    THREAD_ID_CACHE.with(|cache| {
        cache
            .borrow_mut()
            .get_or_insert_with(|| format!("{:?}", std::thread::current().id()))
            .clone()
    })
}

fn current_thread_name() -> Option<String> {
    THREAD_NAME_CACHE.with(|cache| {
        cache
            .borrow_mut()
            .get_or_insert_with(|| std::thread::current().name().map(String::from))
            .clone()
    })
}

/// One emitted log call
///
/// Built by the logger at call time and handed by reference to every
/// appender. Fields are only readable; the builder methods consume the
/// event and are meant to be used before it is shared.
#[derive(Clone)]
pub struct LoggingEvent {
    category_name: String,
    level: Level,
    message: String,
    exception: Option<Exception>,
    logger: Weak<Logger>,
    timestamp: DateTime<Utc>,
    thread_id: String,
    thread_name: Option<String>,
}

impl LoggingEvent {
    pub fn new(
        category_name: impl Into<String>,
        level: Level,
        message: impl Into<String>,
        logger: Weak<Logger>,
    ) -> Self {
        Self {
            category_name: category_name.into(),
            level,
            message: message.into(),
            exception: None,
            logger,
            timestamp: Utc::now(),
            thread_id: current_thread_id(),
            thread_name: current_thread_name(),
        }
    }

    /// Event that is not tied to any logger, e.g. for formatting previews
    pub fn detached(category_name: impl Into<String>, level: Level, message: impl Into<String>) -> Self {
        Self::new(category_name, level, message, Weak::new())
    }

    #[must_use]
    pub fn with_exception(mut self, exception: Exception) -> Self {
        self.exception = Some(exception);
        self
    }

    #[must_use]
    pub fn with_timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = timestamp;
        self
    }

    #[inline]
    pub fn category_name(&self) -> &str {
        &self.category_name
    }

    #[inline]
    pub fn level(&self) -> Level {
        self.level
    }

    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn exception(&self) -> Option<&(dyn Error + Send + Sync + 'static)> {
        self.exception.as_deref()
    }

    /// The originating logger, if it is still alive
    pub fn logger(&self) -> Option<Arc<Logger>> {
        self.logger.upgrade()
    }

    #[inline]
    pub fn timestamp(&self) -> &DateTime<Utc> {
        &self.timestamp
    }

    pub fn thread_id(&self) -> &str {
        &self.thread_id
    }

    pub fn thread_name(&self) -> Option<&str> {
        self.thread_name.as_deref()
    }

    /// Thread name when the thread has one, its id otherwise
    pub fn thread_label(&self) -> &str {
        self.thread_name.as_deref().unwrap_or(&self.thread_id)
    }
}

impl fmt::Debug for LoggingEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoggingEvent")
            .field("category_name", &self.category_name)
            .field("level", &self.level)
            .field("message", &self.message)
            .field("exception", &self.exception.as_ref().map(|e| e.to_string()))
            .field("timestamp", &self.timestamp)
            .field("thread_id", &self.thread_id)
            .field("thread_name", &self.thread_name)
            .finish()
    }
}
