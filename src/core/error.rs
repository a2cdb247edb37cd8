//! Error types for the logger system

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// IO error with context
    #[error("IO error while {operation}: {message}")]
    IoOperation {
        operation: String,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Generic IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Level name or rank that matches no entry of the level table
    #[error("Invalid log level: '{input}'")]
    InvalidLevel { input: String },

    /// Appender reported a failure while dispatching an event
    #[error("Appender '{appender}' failed: {message}")]
    AppenderFailure { appender: String, message: String },

    /// Console sink could not be written
    #[error("Console sink '{sink}' unavailable: {message}")]
    SinkUnavailable { sink: String, message: String },

    /// File appender error with path
    #[error("File appender error for '{path}': {message}")]
    FileAppenderError { path: String, message: String },

    /// File lock error
    #[error("Failed to acquire file lock on '{path}'")]
    FileLockError { path: String },

    /// Channel appender buffer is full
    #[error("Channel appender full: capacity {capacity}")]
    ChannelFull { capacity: usize },

    /// Channel appender receiver has been dropped
    #[error("Channel appender disconnected")]
    ChannelDisconnected,

    /// Global registry was configured after first use
    #[error("Global logger registry already initialized")]
    AlreadyInitialized,

    /// Panic hook could not be installed
    #[error("Could not install panic hook: {0}")]
    HookInstall(String),
}

impl LoggerError {
    /// Create an IO operation error with context
    pub fn io_operation(
        operation: impl Into<String>,
        message: impl Into<String>,
        source: std::io::Error,
    ) -> Self {
        LoggerError::IoOperation {
            operation: operation.into(),
            message: message.into(),
            source,
        }
    }

    /// Create an invalid level error
    pub fn invalid_level(input: impl Into<String>) -> Self {
        LoggerError::InvalidLevel {
            input: input.into(),
        }
    }

    /// Create an appender failure error
    pub fn appender(appender: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::AppenderFailure {
            appender: appender.into(),
            message: message.into(),
        }
    }

    /// Create a console sink error
    pub fn sink(sink: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::SinkUnavailable {
            sink: sink.into(),
            message: message.into(),
        }
    }

    /// Create a file appender error
    pub fn file_appender(path: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::FileAppenderError {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create a file lock error
    pub fn file_lock(path: impl Into<String>) -> Self {
        LoggerError::FileLockError { path: path.into() }
    }
}
