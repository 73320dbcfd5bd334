//! Appender trait for log output destinations

use super::{error::Result, log_level::LogLevel};

/// A byte-stream sink receiving fully formatted lines.
///
/// `line` already ends with `\n`. An appender reports failures through
/// [`LoggerError::SinkWrite`](super::LoggerError::SinkWrite) so the logger can
/// name the sink that broke.
pub trait Appender: Send {
    fn append(&mut self, level: LogLevel, line: &str) -> Result<()>;
    fn flush(&mut self) -> Result<()>;
    fn name(&self) -> &str;
}
