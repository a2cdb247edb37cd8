//! Core logger types and traits

pub mod appender;
pub mod error;
pub mod layout;
pub mod level;
pub mod logger;
pub mod logging_event;
pub mod metrics;
pub mod registry;
pub mod timestamp;

pub use appender::Appender;
pub use error::{LoggerError, Result};
pub use layout::Layout;
pub use level::{Level, ToLevel};
pub use logger::{Logger, LoggerBuilder};
pub use logging_event::{Exception, LoggingEvent};
pub use metrics::LoggerMetrics;
pub use registry::{get_logger, Registry, RegistryBuilder, DEFAULT_CATEGORY};
pub use timestamp::TimestampFormat;
