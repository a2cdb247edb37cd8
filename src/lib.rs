//! # Rust Log4
//!
//! Category-based logging: named loggers from a process-wide registry, a
//! threshold level per logger, and pluggable appenders that format events
//! through layouts.
//!
//! ## Features
//!
//! - **Levels**: `ALL < TRACE < DEBUG < INFO < WARN < ERROR < FATAL < OFF`,
//!   compared by rank
//! - **Registry**: one shared logger per category name
//! - **Appenders**: console, in-memory, file and channel appenders, or your own
//! - **Layouts**: simple, pattern and JSON layouts, or any closure
//! - **Fail-safe**: a failing appender never affects the caller or the other
//!   appenders
//!
//! ```
//! use rust_log4::prelude::*;
//!
//! let logger = get_logger("billing");
//! logger.add_appender(ConsoleAppender::shared());
//! logger.set_level(Level::Debug);
//!
//! logger.debug("invoice 1042 created");
//! logger.warn("payment provider slow");
//! ```

pub mod appenders;
pub mod core;
pub mod hooks;
pub mod layouts;
pub mod macros;

pub mod prelude {
    #[cfg(feature = "file")]
    pub use crate::appenders::FileAppender;
    pub use crate::appenders::{ChannelAppender, ConsoleAppender, MemoryAppender};
    pub use crate::core::{
        get_logger, Appender, Layout, Level, Logger, LoggerBuilder, LoggerError, LoggerMetrics,
        LoggingEvent, Registry, RegistryBuilder, Result, TimestampFormat, ToLevel,
        DEFAULT_CATEGORY,
    };
    pub use crate::layouts::{JsonLayout, PatternLayout, SimpleLayout};
}

#[cfg(feature = "file")]
pub use appenders::FileAppender;
pub use appenders::{ChannelAppender, ConsoleAppender, MemoryAppender};
pub use core::{
    get_logger, Appender, Exception, Layout, Level, Logger, LoggerBuilder, LoggerError,
    LoggerMetrics, LoggingEvent, Registry, RegistryBuilder, Result, TimestampFormat, ToLevel,
    DEFAULT_CATEGORY,
};
pub use layouts::{JsonLayout, PatternLayout, SimpleLayout};
