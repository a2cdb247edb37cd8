//! Pattern layout driven by a conversion pattern
//!
//! | Specifier | Renders                               |
//! |-----------|---------------------------------------|
//! | `%d`      | timestamp (see [`TimestampFormat`])    |
//! | `%p`      | level name                            |
//! | `%c`      | category name                         |
//! | `%m`      | message                               |
//! | `%e`      | exception, empty when there is none   |
//! | `%t`      | thread name, or id when unnamed       |
//! | `%n`      | newline                               |
//! | `%%`      | a literal `%`                         |
//!
//! Any other `%x` is kept as written.

use crate::core::layout::escape_line_breaks;
use crate::core::{Layout, LoggingEvent, TimestampFormat};

pub const DEFAULT_PATTERN: &str = "%d [%p] %c - %m";

#[derive(Debug, Clone, PartialEq, Eq)]
enum Token {
    Literal(String),
    Timestamp,
    Level,
    Category,
    Message,
    Exception,
    Thread,
}

#[derive(Debug, Clone)]
pub struct PatternLayout {
    pattern: String,
    tokens: Vec<Token>,
    timestamp_format: TimestampFormat,
}

impl PatternLayout {
    /// Compile a conversion pattern
    ///
    /// ```
    /// use rust_log4::layouts::PatternLayout;
    /// use rust_log4::{Layout, Level, LoggingEvent};
    ///
    /// let layout = PatternLayout::new("%p %c: %m");
    /// let event = LoggingEvent::detached("db", Level::Error, "pool exhausted");
    /// assert_eq!(layout.format(&event), "ERROR db: pool exhausted");
    /// ```
    pub fn new(pattern: impl Into<String>) -> Self {
        let pattern = pattern.into();
        let tokens = Self::compile(&pattern);
        Self {
            pattern,
            tokens,
            timestamp_format: TimestampFormat::Iso8601,
        }
    }

    #[must_use]
    pub fn with_timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.timestamp_format = format;
        self
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    fn compile(pattern: &str) -> Vec<Token> {
        let mut tokens = Vec::new();
        let mut literal = String::new();
        let mut chars = pattern.chars();

        while let Some(c) = chars.next() {
            if c != '%' {
                literal.push(c);
                continue;
            }

            let token = match chars.next() {
                Some('d') => Token::Timestamp,
                Some('p') => Token::Level,
                Some('c') => Token::Category,
                Some('m') => Token::Message,
                Some('e') => Token::Exception,
                Some('t') => Token::Thread,
                Some('n') => {
                    literal.push('\n');
                    continue;
                }
                Some('%') => {
                    literal.push('%');
                    continue;
                }
                Some(other) => {
                    literal.push('%');
                    literal.push(other);
                    continue;
                }
                None => {
                    literal.push('%');
                    continue;
                }
            };

            if !literal.is_empty() {
                tokens.push(Token::Literal(std::mem::take(&mut literal)));
            }
            tokens.push(token);
        }

        if !literal.is_empty() {
            tokens.push(Token::Literal(literal));
        }
        tokens
    }
}

impl Default for PatternLayout {
    fn default() -> Self {
        Self::new(DEFAULT_PATTERN)
    }
}

impl Layout for PatternLayout {
    fn format(&self, event: &LoggingEvent) -> String {
        let mut out = String::with_capacity(self.pattern.len() + event.message().len() + 32);

        for token in &self.tokens {
            match token {
                Token::Literal(text) => out.push_str(text),
                Token::Timestamp => out.push_str(&self.timestamp_format.format(event.timestamp())),
                Token::Level => out.push_str(event.level().name()),
                Token::Category => out.push_str(event.category_name()),
                Token::Message => out.push_str(&escape_line_breaks(event.message())),
                Token::Exception => {
                    if let Some(exception) = event.exception() {
                        out.push_str(&escape_line_breaks(&exception.to_string()));
                    }
                }
                Token::Thread => out.push_str(event.thread_label()),
            }
        }

        out
    }
}
