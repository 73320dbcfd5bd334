//! # Leveled Logger
//!
//! A minimal leveled logger. Each call that passes the severity threshold
//! becomes one line written to every configured sink:
//!
//! ```text
//! 02.01.2024 10:15:30.123 INFO [my_app::run.42 goid-7] server started
//! ```
//!
//! ## Features
//!
//! - **Six ordered levels**: `TRACE` to `FATAL`; `fatal` exits the process
//! - **Call-site tagging**: caller function and line, never the logger's own
//! - **Thread tagging**: numeric id of the emitting thread
//! - **Write-once sinks**: any `io::Write`, console, file or in-memory buffer
//!
//! ```
//! use leveled_logger::prelude::*;
//! use leveled_logger::info;
//!
//! let buffer = MemoryAppender::new();
//! let logger = Logger::new();
//! logger.set_level(LogLevel::Info);
//! logger.set_output(vec![Box::new(buffer.clone())]);
//!
//! info!(logger, "listening on port {}", 8080);
//! assert!(buffer.contents().contains(" INFO ["));
//! ```

pub mod appenders;
pub mod core;
pub mod macros;

pub mod prelude {
    #[cfg(feature = "console")]
    pub use crate::appenders::ConsoleAppender;
    #[cfg(feature = "file")]
    pub use crate::appenders::FileAppender;
    pub use crate::appenders::{appender, MemoryAppender, WriterAppender};
    pub use crate::core::{
        Appender, CallSite, LogLevel, LogRecord, Logger, LoggerBuilder, LoggerConfig,
        LoggerError, LoggerMetrics, Result, TimestampFormat,
    };
}

#[cfg(feature = "console")]
pub use self::appenders::ConsoleAppender;
#[cfg(feature = "file")]
pub use self::appenders::FileAppender;
pub use self::appenders::{appender, MemoryAppender, WriterAppender};
pub use self::core::{
    Appender, CallSite, LogLevel, LogRecord, Logger, LoggerBuilder, LoggerConfig, LoggerError,
    LoggerMetrics, Result, TimestampFormat, DEFAULT_TIME_FORMAT, FATAL_EXIT_CODE,
};
