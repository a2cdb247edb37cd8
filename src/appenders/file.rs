//! File appender implementation

use crate::core::{Appender, Layout, LoggerError, LoggingEvent, Result};
use crate::layouts::SimpleLayout;
use fs2::FileExt;
use parking_lot::Mutex;
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

/// Appends one formatted line per event to a file
///
/// Each line is written and flushed while holding an exclusive lock on the
/// file, so several processes appending to the same file never split a line.
pub struct FileAppender {
    path: PathBuf,
    writer: Mutex<BufWriter<File>>,
    layout: Box<dyn Layout>,
}

impl FileAppender {
    pub fn new(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|e| {
                LoggerError::io_operation(
                    "opening log file",
                    format!("cannot open '{}'", path.display()),
                    e,
                )
            })?;

        Ok(Self {
            path,
            writer: Mutex::new(BufWriter::new(file)),
            layout: Box::new(SimpleLayout::new()),
        })
    }

    /// Set the layout for this appender
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use rust_log4::appenders::FileAppender;
    /// use rust_log4::layouts::JsonLayout;
    ///
    /// let appender = FileAppender::new("/var/log/app.jsonl")
    ///     .unwrap()
    ///     .with_layout(JsonLayout::new());
    /// ```
    #[must_use]
    pub fn with_layout(mut self, layout: impl Layout + 'static) -> Self {
        self.layout = Box::new(layout);
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn path_str(&self) -> String {
        self.path.display().to_string()
    }
}

impl Appender for FileAppender {
    fn dispatch(&self, event: &LoggingEvent) -> Result<()> {
        let mut line = self.layout.format(event);
        line.push('\n');

        let mut writer = self.writer.lock();
        writer
            .get_ref()
            .lock_exclusive()
            .map_err(|_| LoggerError::file_lock(self.path_str()))?;

        let written = writer
            .write_all(line.as_bytes())
            .and_then(|()| writer.flush());
        let unlocked = writer.get_ref().unlock();

        written.map_err(|e| LoggerError::file_appender(self.path_str(), e.to_string()))?;
        unlocked.map_err(|_| LoggerError::file_lock(self.path_str()))
    }

    /// Truncate the file
    fn clear(&self) -> Result<()> {
        let mut writer = self.writer.lock();
        writer.flush()?;
        let file = writer.get_mut();
        file.set_len(0)
            .map_err(|e| LoggerError::file_appender(self.path_str(), e.to_string()))?;
        file.seek(SeekFrom::Start(0))?;
        Ok(())
    }

    fn flush(&self) -> Result<()> {
        self.writer.lock().flush()?;
        Ok(())
    }

    fn name(&self) -> &str {
        "file"
    }
}

impl Drop for FileAppender {
    fn drop(&mut self) {
        // Ensure all buffered data is flushed to disk
        let _ = self.writer.get_mut().flush();
    }
}
