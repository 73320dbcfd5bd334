//! Basic logger usage example
//!
//! Demonstrates logging to stdout at different levels and thresholds.
//!
//! Run with: cargo run --example basic_usage

use leveled_logger::prelude::*;
use leveled_logger::{info, warn};

fn serve(logger: &Logger, port: u16) {
    info!(logger, "listening on port {}", port);
    warn!(logger, "no TLS certificate configured");
}

fn main() {
    println!("=== Leveled Logger - Basic Usage Example ===\n");

    let logger = Logger::new();
    logger.set_output(vec![Box::new(ConsoleAppender::new())]);

    println!("1. Logging at every non-fatal level:");
    logger.trace("This is a trace message");
    logger.debug("This is a debug message");
    logger.info("This is an info message");
    logger.warn("This is a warning message");
    logger.error("This is an error message");

    println!("\n2. Threshold set to INFO - trace and debug won't show:");
    logger.set_level(LogLevel::Info);
    logger.trace("Trace message (hidden)");
    logger.debug("Debug message (hidden)");
    logger.info("Info message (visible)");

    println!("\n3. Macros report the enclosing function:");
    serve(&logger, 8080);

    println!("\n4. Custom timestamp format:");
    logger.set_time_format("%H:%M:%S");
    logger.info("Shorter timestamps from here on");

    println!("\n=== Example completed successfully! ===");
}
