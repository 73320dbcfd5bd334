//! Logging macros for ergonomic log message formatting.
//!
//! Unlike the level methods, the macros report the full path of the
//! enclosing function as the call site, and skip formatting entirely when
//! the level is below the threshold.
//!
//! # Examples
//!
//! ```
//! use leveled_logger::prelude::*;
//! use leveled_logger::info;
//!
//! let buffer = MemoryAppender::new();
//! let logger = Logger::builder().appender(buffer.clone()).build();
//!
//! let port = 8080;
//! info!(logger, "Server listening on port {}", port);
//!
//! assert!(buffer.contents().contains("Server listening on port 8080"));
//! ```

/// Build a [`CallSite`](crate::CallSite) for the current function and line.
#[macro_export]
macro_rules! call_site {
    () => {
        $crate::CallSite::new($crate::function_path!(), line!())
    };
}

/// Log a message with automatic formatting.
///
/// # Examples
///
/// ```
/// # use leveled_logger::prelude::*;
/// # let logger = Logger::new();
/// use leveled_logger::log;
/// log!(logger, LogLevel::Info, "Simple message");
/// log!(logger, LogLevel::Error, "Error code: {}", 500);
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, $($arg:tt)+) => {
        $logger.log_fmt($level, $crate::call_site!(), format_args!($($arg)+))
    };
}

/// Log a trace-level message.
#[macro_export]
macro_rules! trace {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Trace, $($arg)+)
    };
}

/// Log a debug-level message.
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Debug, $($arg)+)
    };
}

/// Log an info-level message.
///
/// # Examples
///
/// ```
/// # use leveled_logger::prelude::*;
/// # let logger = Logger::new();
/// use leveled_logger::info;
/// info!(logger, "Application started");
/// info!(logger, "Processing {} items", 100);
/// ```
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Info, $($arg)+)
    };
}

/// Log a warning-level message.
#[macro_export]
macro_rules! warn {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Warn, $($arg)+)
    };
}

/// Log an error-level message.
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Error, $($arg)+)
    };
}

/// Log a fatal-level message and exit the process.
///
/// # Examples
///
/// ```no_run
/// # use leveled_logger::prelude::*;
/// # let logger = Logger::new();
/// use leveled_logger::fatal;
/// fatal!(logger, "Unable to recover from error: {}", "disk full");
/// ```
#[macro_export]
macro_rules! fatal {
    ($logger:expr, $($arg:tt)+) => {
        $logger.fatal_at($crate::call_site!(), format!($($arg)+))
    };
}

#[cfg(test)]
mod tests {
    use crate::appenders::MemoryAppender;
    use crate::core::{Logger, LogLevel};

    fn logger() -> (Logger, MemoryAppender) {
        let buffer = MemoryAppender::new();
        let logger = Logger::builder()
            .time_format("TS")
            .appender(buffer.clone())
            .build();
        (logger, buffer)
    }

    #[test]
    fn test_log_macro() {
        let (logger, buffer) = logger();
        log!(logger, LogLevel::Info, "Formatted: {}", 42);
        assert!(buffer.contents().contains("INFO"));
        assert!(buffer.contents().ends_with("] Formatted: 42\n"));
    }

    #[test]
    fn test_macro_reports_enclosing_function() {
        let (logger, buffer) = logger();
        let line = line!() + 1;
        info!(logger, "Info message");

        let expected = format!(
            "TS INFO [leveled_logger::macros::tests::test_macro_reports_enclosing_function.{} goid-",
            line
        );
        assert!(buffer.contents().starts_with(&expected), "{}", buffer.contents());
    }

    #[test]
    fn test_level_macros() {
        let (logger, buffer) = logger();
        trace!(logger, "Trace {}", 1);
        debug!(logger, "Debug {}", 2);
        info!(logger, "Info {}", 3);
        warn!(logger, "Warn {}", 4);
        error!(logger, "Error {}", 5);

        let lines = buffer.lines();
        let levels: Vec<&str> = lines
            .iter()
            .map(|l| l.split(' ').nth(1).unwrap_or_default())
            .collect();
        assert_eq!(levels, ["TRACE", "DEBUG", "INFO", "WARN", "ERROR"]);
    }

    #[test]
    fn test_macro_respects_threshold() {
        let (logger, buffer) = logger();
        logger.set_level(LogLevel::Error);
        warn!(logger, "hidden");
        error!(logger, "shown");
        assert_eq!(buffer.lines().len(), 1);
    }

    #[test]
    fn test_macro_through_reference() {
        let (logger, buffer) = logger();
        let shared = std::sync::Arc::new(logger);
        let by_ref = &shared;
        info!(by_ref, "via {}", "arc");
        assert!(buffer.contents().contains("via arc"));
    }
}
