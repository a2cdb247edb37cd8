//! In-memory appender
//!
//! Keeps accepted events and their formatted lines in a buffer. Handy for
//! tests and for surfacing recent log lines inside an application.

use crate::core::{Appender, Layout, LoggingEvent, Result};
use crate::layouts::SimpleLayout;
use parking_lot::Mutex;
use std::collections::VecDeque;

pub struct MemoryAppender {
    entries: Mutex<VecDeque<(LoggingEvent, String)>>,
    layout: Box<dyn Layout>,
    capacity: Option<usize>,
}

impl MemoryAppender {
    /// Unbounded buffer formatting with [`SimpleLayout`]
    pub fn new() -> Self {
        Self {
            entries: Mutex::new(VecDeque::new()),
            layout: Box::new(SimpleLayout::new()),
            capacity: None,
        }
    }

    /// Keep at most `capacity` entries, evicting the oldest
    ///
    /// ```
    /// use rust_log4::appenders::MemoryAppender;
    /// use rust_log4::{Appender, Level, LoggingEvent};
    ///
    /// let memory = MemoryAppender::with_capacity(2);
    /// for message in ["a", "b", "c"] {
    ///     memory.dispatch(&LoggingEvent::detached("svc", Level::Info, message)).unwrap();
    /// }
    /// let kept: Vec<String> = memory.events().iter().map(|e| e.message().to_string()).collect();
    /// assert_eq!(kept, ["b", "c"]);
    /// ```
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            capacity: Some(capacity),
            ..Self::new()
        }
    }

    #[must_use]
    pub fn with_layout(mut self, layout: impl Layout + 'static) -> Self {
        self.layout = Box::new(layout);
        self
    }

    pub fn events(&self) -> Vec<LoggingEvent> {
        self.entries.lock().iter().map(|(event, _)| event.clone()).collect()
    }

    pub fn lines(&self) -> Vec<String> {
        self.entries.lock().iter().map(|(_, line)| line.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }
}

impl Default for MemoryAppender {
    fn default() -> Self {
        Self::new()
    }
}

impl Appender for MemoryAppender {
    fn dispatch(&self, event: &LoggingEvent) -> Result<()> {
        let line = self.layout.format(event);
        let mut entries = self.entries.lock();

        if let Some(capacity) = self.capacity {
            if capacity == 0 {
                return Ok(());
            }
            while entries.len() >= capacity {
                entries.pop_front();
            }
        }

        entries.push_back((event.clone(), line));
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        self.entries.lock().clear();
        Ok(())
    }

    fn name(&self) -> &str {
        "memory"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Level;
    use crate::layouts::PatternLayout;

    fn event(message: &str) -> LoggingEvent {
        LoggingEvent::detached("mem", Level::Info, message)
    }

    #[test]
    fn test_keeps_events_and_lines() {
        let memory = MemoryAppender::new().with_layout(PatternLayout::new("%c|%m"));
        memory.dispatch(&event("one")).unwrap();
        memory.dispatch(&event("two")).unwrap();

        assert_eq!(memory.len(), 2);
        assert_eq!(memory.lines(), vec!["mem|one", "mem|two"]);
        assert_eq!(memory.events()[1].message(), "two");
    }

    #[test]
    fn test_capacity_evicts_oldest() {
        let memory = MemoryAppender::with_capacity(3);
        for i in 0..5 {
            memory.dispatch(&event(&format!("m{}", i))).unwrap();
        }

        let messages: Vec<String> = memory.events().iter().map(|e| e.message().to_string()).collect();
        assert_eq!(messages, vec!["m2", "m3", "m4"]);
    }

    #[test]
    fn test_zero_capacity_keeps_nothing() {
        let memory = MemoryAppender::with_capacity(0);
        memory.dispatch(&event("dropped")).unwrap();
        assert!(memory.is_empty());
    }

    #[test]
    fn test_clear() {
        let memory = MemoryAppender::new();
        memory.dispatch(&event("x")).unwrap();
        memory.clear().unwrap();
        assert!(memory.is_empty());
    }
}
