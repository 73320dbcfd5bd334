//! Main logger implementation

use super::{
    appender::Appender,
    call_site::CallSite,
    config::LoggerConfig,
    error::{LoggerError, Result},
    log_level::LogLevel,
    metrics::LoggerMetrics,
    record::LogRecord,
    timestamp::TimestampFormat,
};
use parking_lot::{Mutex, RwLock};
use std::fmt;
use std::panic::Location;
use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::OnceLock;

/// Exit status used by [`Logger::fatal`]
pub const FATAL_EXIT_CODE: i32 = 1;

/// A leveled logger writing one line per call to every configured sink.
///
/// All methods take `&self`; share a logger across threads with `Arc`.
/// Threshold and time format may change at any time and apply to later
/// calls. Sinks are set once.
pub struct Logger {
    appenders: OnceLock<Vec<Mutex<Box<dyn Appender>>>>,
    min_level: AtomicU8,
    time_format: RwLock<TimestampFormat>,
    sanitize_messages: bool,
    metrics: LoggerMetrics,
}

impl Logger {
    /// Threshold `Trace`, the day-first millisecond timestamp, no sinks.
    #[must_use]
    pub fn new() -> Self {
        Self::from_config(LoggerConfig::default())
    }

    #[must_use]
    pub fn from_config(config: LoggerConfig) -> Self {
        Self {
            appenders: OnceLock::new(),
            min_level: AtomicU8::new(config.level.ordinal()),
            time_format: RwLock::new(config.time_format),
            sanitize_messages: config.sanitize_messages,
            metrics: LoggerMetrics::new(),
        }
    }

    /// Replace the timestamp format used by subsequent lines.
    ///
    /// Plain strings are taken as strftime patterns and are not validated.
    pub fn set_time_format(&self, format: impl Into<TimestampFormat>) {
        *self.time_format.write() = format.into();
    }

    pub fn time_format(&self) -> TimestampFormat {
        self.time_format.read().clone()
    }

    pub fn set_level(&self, level: LogLevel) {
        self.min_level.store(level.ordinal(), Ordering::Relaxed);
    }

    pub fn level(&self) -> LogLevel {
        // Only ever stored from a valid LogLevel.
        LogLevel::try_from(self.min_level.load(Ordering::Relaxed)).unwrap_or(LogLevel::Trace)
    }

    #[inline]
    pub fn is_enabled(&self, level: LogLevel) -> bool {
        level >= self.level()
    }

    /// Assign the sinks. Only the first call has any effect; later calls are
    /// ignored. Returns whether this call installed the sinks.
    pub fn set_output(&self, appenders: Vec<Box<dyn Appender>>) -> bool {
        self.appenders
            .set(appenders.into_iter().map(Mutex::new).collect())
            .is_ok()
    }

    /// Names of the configured sinks, in write order
    pub fn appender_names(&self) -> Vec<String> {
        self.appenders
            .get()
            .map(|appenders| appenders.iter().map(|a| a.lock().name().to_string()).collect())
            .unwrap_or_default()
    }

    pub fn metrics(&self) -> &LoggerMetrics {
        &self.metrics
    }

    fn emit(
        &self,
        level: LogLevel,
        call_site: impl FnOnce() -> CallSite,
        message: impl FnOnce() -> String,
    ) -> Result<()> {
        if !self.is_enabled(level) {
            self.metrics.record_suppressed();
            return Ok(());
        }

        let appenders = match self.appenders.get() {
            Some(appenders) if !appenders.is_empty() => appenders,
            _ => return Ok(()),
        };

        let message = message();
        let message = if self.sanitize_messages {
            LogRecord::sanitize_message(&message)
        } else {
            message
        };
        let line = LogRecord::new(level, call_site(), message).format_line(&self.time_format.read());

        for appender in appenders {
            let mut appender = appender.lock();
            if let Err(e) = appender.append(level, &line) {
                self.metrics.record_write_failure();
                return Err(match e {
                    LoggerError::Io(source) => LoggerError::sink_write(appender.name(), source),
                    other => other,
                });
            }
        }

        self.metrics.record_logged();
        Ok(())
    }

    /// Write `message` at `level` on behalf of `call_site`, returning the
    /// first sink failure instead of panicking.
    ///
    /// Sinks after a failing one are not written.
    pub fn try_log_at(
        &self,
        level: LogLevel,
        call_site: CallSite,
        message: impl Into<String>,
    ) -> Result<()> {
        self.emit(level, || call_site, || message.into())
    }

    /// # Panics
    ///
    /// Panics if any sink fails to accept the line.
    pub fn log_at(&self, level: LogLevel, call_site: CallSite, message: impl Into<String>) {
        if let Err(e) = self.try_log_at(level, call_site, message) {
            panic!("log write error: {}", e);
        }
    }

    /// Like [`log_at`](Self::log_at), but only renders `args` when `level`
    /// passes the threshold. Used by the logging macros.
    pub fn log_fmt(&self, level: LogLevel, call_site: CallSite, args: fmt::Arguments<'_>) {
        if let Err(e) = self.emit(level, || call_site, || args.to_string()) {
            panic!("log write error: {}", e);
        }
    }

    /// The caller's function is only resolved once `level` passes the threshold.
    #[track_caller]
    pub fn try_log(&self, level: LogLevel, message: impl Into<String>) -> Result<()> {
        let location = Location::caller();
        self.emit(level, || CallSite::from_location(location), || message.into())
    }

    #[track_caller]
    pub fn log(&self, level: LogLevel, message: impl Into<String>) {
        if let Err(e) = self.try_log(level, message) {
            panic!("log write error: {}", e);
        }
    }

    #[inline]
    #[track_caller]
    pub fn trace(&self, message: impl Into<String>) {
        self.log(LogLevel::Trace, message);
    }

    #[inline]
    #[track_caller]
    pub fn debug(&self, message: impl Into<String>) {
        self.log(LogLevel::Debug, message);
    }

    #[inline]
    #[track_caller]
    pub fn info(&self, message: impl Into<String>) {
        self.log(LogLevel::Info, message);
    }

    #[inline]
    #[track_caller]
    pub fn warn(&self, message: impl Into<String>) {
        self.log(LogLevel::Warn, message);
    }

    #[inline]
    #[track_caller]
    pub fn error(&self, message: impl Into<String>) {
        self.log(LogLevel::Error, message);
    }

    /// Write a `FATAL` line, then terminate the process with
    /// [`FATAL_EXIT_CODE`] whether or not the write succeeded.
    #[track_caller]
    pub fn fatal(&self, message: impl Into<String>) -> ! {
        self.fatal_at(CallSite::caller(), message)
    }

    pub fn fatal_at(&self, call_site: CallSite, message: impl Into<String>) -> ! {
        if let Err(e) = self.try_log_at(LogLevel::Fatal, call_site, message) {
            eprintln!("[LOGGER ERROR] Failed to write fatal log: {}", e);
        }
        // process::exit skips destructors, so buffered sinks must be drained here
        if let Err(e) = self.flush() {
            eprintln!("[LOGGER ERROR] Failed to flush before exit: {}", e);
        }
        std::process::exit(FATAL_EXIT_CODE)
    }

    #[inline]
    #[track_caller]
    pub fn try_trace(&self, message: impl Into<String>) -> Result<()> {
        self.try_log(LogLevel::Trace, message)
    }

    #[inline]
    #[track_caller]
    pub fn try_debug(&self, message: impl Into<String>) -> Result<()> {
        self.try_log(LogLevel::Debug, message)
    }

    #[inline]
    #[track_caller]
    pub fn try_info(&self, message: impl Into<String>) -> Result<()> {
        self.try_log(LogLevel::Info, message)
    }

    #[inline]
    #[track_caller]
    pub fn try_warn(&self, message: impl Into<String>) -> Result<()> {
        self.try_log(LogLevel::Warn, message)
    }

    #[inline]
    #[track_caller]
    pub fn try_error(&self, message: impl Into<String>) -> Result<()> {
        self.try_log(LogLevel::Error, message)
    }

    /// Flush every sink, stopping at the first failure.
    pub fn flush(&self) -> Result<()> {
        if let Some(appenders) = self.appenders.get() {
            for appender in appenders {
                let mut appender = appender.lock();
                appender.flush().map_err(|e| match e {
                    LoggerError::Io(source) => LoggerError::sink_write(appender.name(), source),
                    other => other,
                })?;
            }
        }
        Ok(())
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        if let Err(e) = self.flush() {
            eprintln!("[LOGGER ERROR] Failed to flush during shutdown: {}", e);
        }
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("level", &self.level())
            .field("time_format", &*self.time_format.read())
            .field("appenders", &self.appender_names())
            .field("sanitize_messages", &self.sanitize_messages)
            .finish()
    }
}

/// Builder for constructing Logger with a fluent API
///
/// Appenders passed to the builder count as the one-time sink
/// configuration, so a later [`Logger::set_output`] is ignored.
///
/// # Example
/// ```
/// use leveled_logger::prelude::*;
///
/// let buffer = MemoryAppender::new();
/// let logger = Logger::builder()
///     .level(LogLevel::Info)
///     .time_format("%H:%M:%S")
///     .appender(buffer.clone())
///     .build();
///
/// logger.info("ready");
/// logger.debug("skip me");
/// assert_eq!(buffer.lines().len(), 1);
/// ```
pub struct LoggerBuilder {
    config: LoggerConfig,
    appenders: Vec<Box<dyn Appender>>,
}

impl LoggerBuilder {
    /// Create a new builder with default values
    pub fn new() -> Self {
        Self {
            config: LoggerConfig::default(),
            appenders: Vec::new(),
        }
    }

    /// Replace level, time format and sanitizing in one go
    #[must_use = "builder methods return a new value"]
    pub fn config(mut self, config: LoggerConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the threshold
    #[must_use = "builder methods return a new value"]
    pub fn level(mut self, level: LogLevel) -> Self {
        self.config.level = level;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn time_format(mut self, format: impl Into<TimestampFormat>) -> Self {
        self.config.time_format = format.into();
        self
    }

    /// Escape `\n`, `\r` and `\t` in messages
    #[must_use = "builder methods return a new value"]
    pub fn sanitize_messages(mut self, sanitize: bool) -> Self {
        self.config.sanitize_messages = sanitize;
        self
    }

    /// Add an appender; lines are written in the order appenders are added
    #[must_use = "builder methods return a new value"]
    pub fn appender<A: Appender + 'static>(mut self, appender: A) -> Self {
        self.appenders.push(Box::new(appender));
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn boxed_appender(mut self, appender: Box<dyn Appender>) -> Self {
        self.appenders.push(appender);
        self
    }

    /// Build the Logger
    pub fn build(self) -> Logger {
        let logger = Logger::from_config(self.config);
        if !self.appenders.is_empty() {
            logger.set_output(self.appenders);
        }
        logger
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl Logger {
    /// Create a builder for Logger
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }
}
