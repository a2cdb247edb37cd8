//! Registry example
//!
//! Configures the process-wide registry once, then hands out loggers per
//! category. Also shows a custom appender, a closure layout and the panic
//! hook.
//!
//! Run with: cargo run --example registry_usage

use rust_log4::appenders::{ConsoleSink, StderrSink, StdoutSink};
use rust_log4::hooks::install_panic_hook;
use rust_log4::prelude::*;
use std::io;
use std::sync::Arc;

/// Prefixes warnings so they stand out on stdout
struct WarningSink;

impl ConsoleSink for WarningSink {
    fn write_line(&self, line: &str) -> io::Result<()> {
        StdoutSink.write_line(&format!("!! {}", line))
    }

    fn name(&self) -> &str {
        "warning"
    }
}

fn main() -> Result<()> {
    println!("=== Rust Log4 - Registry Example ===\n");

    let console = ConsoleAppender::with_sinks(
        Arc::new(StdoutSink),
        Some(Arc::new(WarningSink)),
        Some(Arc::new(StderrSink)),
    )
    .with_layout(|event: &LoggingEvent| {
        format!("[{:<5}] {:<10} {}", event.level(), event.category_name(), event.message())
    });

    let registry = Registry::install_global(
        Registry::builder()
            .default_level(Level::Debug)
            .default_appender(Arc::new(console)),
    )?;

    if install_panic_hook().is_err() {
        println!("continuing without the panic hook");
    }

    println!("1. Loggers per category share the registry defaults:");
    let http = get_logger("http");
    let db = get_logger("db");
    http.info("GET /health 200");
    db.debug("pool size 8");
    db.warn("slow query: 812ms");

    println!("\n2. Thresholds are per category:");
    db.set_level(Level::Error);
    db.warn("hidden now");
    db.error("connection reset");
    http.debug("still visible for http");

    println!("\n3. Known categories: {:?}", registry.logger_names());

    println!("\n4. Panics are logged before the default hook runs:");
    let _ = std::panic::catch_unwind(|| {
        panic!("worker crashed");
    });

    println!("\n=== Example completed successfully! ===");

    Ok(())
}
