//! Logger registry keyed by category name
//!
//! The registry hands out one [`Logger`] per category name. Loggers are
//! created on first lookup, cached for the life of the registry and never
//! removed, so every part of a program asking for the same category shares
//! one threshold and one appender list.
//!
//! The process-wide registry behind [`get_logger`] is created on first use
//! and lives until the process exits.

use super::{
    appender::Appender,
    error::{LoggerError, Result},
    level::Level,
    logger::Logger,
};
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::{Arc, OnceLock};

/// Category used when no name, or an empty name, is given
pub const DEFAULT_CATEGORY: &str = "[default]";

static GLOBAL: OnceLock<Registry> = OnceLock::new();

pub struct Registry {
    loggers: RwLock<HashMap<String, Arc<Logger>>>,
    default_level: RwLock<Level>,
    default_appenders: RwLock<Vec<Arc<dyn Appender>>>,
}

impl Registry {
    /// Empty registry; new loggers start at `INFO` with no appenders
    pub fn new() -> Self {
        Self {
            loggers: RwLock::new(HashMap::new()),
            default_level: RwLock::new(Level::default()),
            default_appenders: RwLock::new(Vec::new()),
        }
    }

    #[must_use]
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::new()
    }

    /// The process-wide registry, created on first access
    pub fn global() -> &'static Registry {
        GLOBAL.get_or_init(Registry::new)
    }

    /// Configure the process-wide registry
    ///
    /// Must run before anything touches [`Registry::global`]; afterwards the
    /// global registry exists already and
    /// [`LoggerError::AlreadyInitialized`] is returned.
    pub fn install_global(builder: RegistryBuilder) -> Result<&'static Registry> {
        let mut installed = false;
        let registry = GLOBAL.get_or_init(|| {
            installed = true;
            builder.build()
        });

        if installed {
            Ok(registry)
        } else {
            Err(LoggerError::AlreadyInitialized)
        }
    }

    /// Category name a lookup resolves to
    ///
    /// ```
    /// use rust_log4::{Registry, DEFAULT_CATEGORY};
    ///
    /// assert_eq!(Registry::resolve_category(Some("db")), "db");
    /// assert_eq!(Registry::resolve_category(Some("")), DEFAULT_CATEGORY);
    /// assert_eq!(Registry::resolve_category(None), DEFAULT_CATEGORY);
    /// ```
    pub fn resolve_category(name: Option<&str>) -> &str {
        match name {
            Some(name) if !name.is_empty() => name,
            _ => DEFAULT_CATEGORY,
        }
    }

    /// Get the logger for a category, creating it on first access
    ///
    /// Repeated calls with the same name return the same instance.
    ///
    /// ```
    /// use rust_log4::{Level, Registry};
    /// use std::sync::Arc;
    ///
    /// let registry = Registry::new();
    /// let a = registry.get_logger("svc");
    /// let b = registry.get_logger("svc");
    /// assert!(Arc::ptr_eq(&a, &b));
    ///
    /// a.set_level(Level::Warn);
    /// assert_eq!(b.level(), Level::Warn);
    /// ```
    pub fn get_logger<'a>(&self, name: impl Into<Option<&'a str>>) -> Arc<Logger> {
        let category = Self::resolve_category(name.into());

        if let Some(logger) = self.loggers.read().get(category) {
            return Arc::clone(logger);
        }

        // Re-check under the write lock: another thread may have won the race.
        let mut loggers = self.loggers.write();
        let logger = loggers
            .entry(category.to_string())
            .or_insert_with(|| self.create_logger(category));
        Arc::clone(logger)
    }

    fn create_logger(&self, category: &str) -> Arc<Logger> {
        Logger::builder(category)
            .level(*self.default_level.read())
            .appenders(self.default_appenders.read().iter().cloned())
            .build()
    }

    /// Threshold given to loggers created from now on
    pub fn set_default_level(&self, level: Level) {
        *self.default_level.write() = level;
    }

    pub fn default_level(&self) -> Level {
        *self.default_level.read()
    }

    /// Attach an appender to every logger created from now on
    pub fn add_default_appender(&self, appender: Arc<dyn Appender>) {
        self.default_appenders.write().push(appender);
    }

    pub fn contains(&self, name: &str) -> bool {
        self.loggers.read().contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.loggers.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.loggers.read().is_empty()
    }

    /// Names of all created loggers, sorted
    pub fn logger_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.loggers.read().keys().cloned().collect();
        names.sort();
        names
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for a configured [`Registry`]
///
/// # Example
/// ```
/// use rust_log4::prelude::*;
/// use std::sync::Arc;
///
/// let memory = Arc::new(MemoryAppender::new());
/// let registry = Registry::builder()
///     .default_level(Level::Debug)
///     .default_appender(memory.clone())
///     .build();
///
/// registry.get_logger("jobs").debug("scheduled");
/// assert_eq!(memory.len(), 1);
/// ```
pub struct RegistryBuilder {
    default_level: Level,
    default_appenders: Vec<Arc<dyn Appender>>,
}

impl RegistryBuilder {
    pub fn new() -> Self {
        Self {
            default_level: Level::default(),
            default_appenders: Vec::new(),
        }
    }

    #[must_use = "builder methods return a new value"]
    pub fn default_level(mut self, level: Level) -> Self {
        self.default_level = level;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn default_appender(mut self, appender: Arc<dyn Appender>) -> Self {
        self.default_appenders.push(appender);
        self
    }

    pub fn build(self) -> Registry {
        Registry {
            loggers: RwLock::new(HashMap::new()),
            default_level: RwLock::new(self.default_level),
            default_appenders: RwLock::new(self.default_appenders),
        }
    }
}

impl Default for RegistryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Get a logger from the process-wide registry
///
/// ```
/// use rust_log4::get_logger;
///
/// let logger = get_logger("startup");
/// logger.info("configuration loaded");
/// ```
pub fn get_logger<'a>(name: impl Into<Option<&'a str>>) -> Arc<Logger> {
    Registry::global().get_logger(name)
}
