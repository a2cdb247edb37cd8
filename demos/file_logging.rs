//! File logging example
//!
//! Demonstrates logging to both console and file appenders simultaneously.
//!
//! Run with: cargo run --example file_logging

use rust_log4::prelude::*;
use std::sync::Arc;

fn main() -> Result<()> {
    println!("=== Rust Log4 - File Logging Example ===\n");

    let file = Arc::new(
        FileAppender::new("application.log")?.with_layout(PatternLayout::new("%d [%p] %c (%t) - %m %e")),
    );

    let logger = Logger::builder("app")
        .level(Level::Debug)
        .appender(ConsoleAppender::shared())
        .appender(file.clone())
        .build();

    println!("1. Logging to both console and file:");

    logger.info("Application started");
    logger.debug("Loading configuration...");
    logger.info("Configuration loaded successfully");
    logger.warn("Using default settings for some options");
    logger.info("Connecting to database...");
    logger.info("Database connection established");
    logger.error("Failed to load optional plugin");
    logger.info("Application initialization complete");

    println!("\n2. Performing some operations:");

    for i in 1..=5 {
        logger.info(format!("Processing item {}/5", i));
        if i == 3 {
            logger.warn("Item 3 took longer than expected");
        }
    }

    logger.info("All operations completed");

    // Make sure everything buffered reaches the file
    logger.flush()?;

    println!("\n=== Example completed successfully! ===");
    println!("Check '{}' for the full log output", file.path().display());

    Ok(())
}
