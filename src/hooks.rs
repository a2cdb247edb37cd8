//! Panic hook that routes panics into the logging system
//!
//! Optional: nothing in the core depends on it. Once installed, every panic
//! is logged as a `FATAL` event on the [`PANIC_CATEGORY`] logger, then the
//! previously installed hook runs as before.
//!
//! Panics raised by appenders are left to the logger that called them.
//! Appenders on the [`PANIC_CATEGORY`] logger itself must not panic: the
//! hook runs them directly and std aborts on a panic inside a panic hook.

use crate::core::logger::{in_appender, panic_message};
use crate::core::{LoggerError, Registry, Result};
use std::sync::atomic::{AtomicBool, Ordering};

/// Category that receives panic reports
pub const PANIC_CATEGORY: &str = "panic";

static INSTALL_FAILURE_REPORTED: AtomicBool = AtomicBool::new(false);

/// Install the panic hook on the process-wide registry
///
/// ```no_run
/// use rust_log4::hooks::install_panic_hook;
///
/// if install_panic_hook().is_err() {
///     // already reported on stderr; logging keeps working without the hook
/// }
/// ```
pub fn install_panic_hook() -> Result<()> {
    install_panic_hook_in(Registry::global())
}

/// Install the panic hook, logging into `registry`
///
/// Fails when called while the current thread is panicking. The failure is
/// written to stderr once per process and the caller can carry on.
pub fn install_panic_hook_in(registry: &'static Registry) -> Result<()> {
    if std::thread::panicking() {
        let reason = "called while the thread is panicking";
        if !INSTALL_FAILURE_REPORTED.swap(true, Ordering::Relaxed) {
            eprintln!("[LOGGER ERROR] Could not install panic hook: {}", reason);
        }
        return Err(LoggerError::HookInstall(reason.to_string()));
    }

    let previous = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let location = info
            .location()
            .map(|l| format!("{}:{}", l.file(), l.line()))
            .unwrap_or_else(|| "unknown location".to_string());

        // An appender panic is caught and reported by the logger that called
        // it. Routing it here would run appenders inside the hook, where a
        // second panic aborts the process.
        if !in_appender() {
            registry.get_logger(PANIC_CATEGORY).fatal(format!(
                "Panic in ({}) with message ({})",
                location,
                panic_message(info.payload())
            ));
        }

        previous(info);
    }));

    Ok(())
}
