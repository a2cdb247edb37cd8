//! Basic logger usage example
//!
//! Demonstrates console logging, thresholds and level routing.
//!
//! Run with: cargo run --example basic_usage

use rust_log4::prelude::*;
use rust_log4::{info, warn};

fn main() -> Result<()> {
    println!("=== Rust Log4 - Basic Usage Example ===\n");

    // Loggers come from the process-wide registry by category
    let logger = get_logger("basic");
    logger.add_appender(ConsoleAppender::shared());
    logger.set_level(Level::Trace);

    // TRACE..INFO go to stdout, ERROR and FATAL to stderr
    println!("1. Logging at different levels:");
    logger.trace("This is a trace message");
    logger.debug("This is a debug message");
    logger.info("This is an info message");
    logger.warn("This is a warning message");
    logger.error("This is an error message");
    logger.fatal("This is a fatal message");

    println!("\n2. Logging with different thresholds:");
    logger.set_level("info");
    println!("   Threshold set to INFO - trace and debug won't show:");
    logger.trace("Trace message (hidden)");
    logger.debug("Debug message (hidden)");
    logger.info("Info message (visible)");
    logger.warn("Warning message (visible)");

    println!("\n3. Format macros and attached errors:");
    let port = 8080;
    info!(logger, "Listening on port {}", port);
    warn!(logger, "{} of {} workers ready", 3, 4);
    logger.error_with_exception(
        "Could not read settings",
        std::io::Error::new(std::io::ErrorKind::NotFound, "settings.toml"),
    );

    println!("\n4. Same category, same logger:");
    let again = get_logger("basic");
    again.info(format!("threshold seen through a second handle: {}", again.level()));

    let m = logger.metrics();
    println!(
        "\nDispatched: {}, filtered: {}",
        m.dispatched_count(),
        m.filtered_count()
    );

    println!("\n=== Example completed successfully! ===");

    Ok(())
}
