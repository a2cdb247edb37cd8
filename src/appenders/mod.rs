//! Appender implementations

pub mod channel;
pub mod console;
#[cfg(feature = "file")]
pub mod file;
pub mod memory;

pub use channel::{ChannelAppender, ChannelRecord};
pub use console::{ConsoleAppender, ConsoleSink, ConsoleStream, StderrSink, StdoutSink};
#[cfg(feature = "file")]
pub use file::FileAppender;
pub use memory::MemoryAppender;

pub use crate::core::Appender;
