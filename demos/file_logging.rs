//! File logging example
//!
//! Demonstrates one logger writing identical lines to the console and a file.
//!
//! Run with: cargo run --example file_logging

use leveled_logger::prelude::*;

fn main() -> Result<()> {
    println!("=== Leveled Logger - File Logging Example ===\n");

    let logger = Logger::builder()
        .level(LogLevel::Debug)
        .appender(ConsoleAppender::new())
        .appender(FileAppender::new("application.log")?)
        .build();

    logger.info("Application started");
    logger.debug("Loading configuration...");
    logger.warn("Using default settings for some options");

    for i in 1..=5 {
        logger.info(format!("Processing item {}/5", i));
    }

    logger.error("Failed to load optional plugin");
    logger.info("All operations completed");

    // FileAppender buffers; flush before reading the file
    logger.flush()?;

    println!("\n=== Example completed successfully! ===");
    println!("Check 'application.log' for the full log output");

    Ok(())
}
