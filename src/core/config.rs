//! Serializable logger settings

use super::log_level::LogLevel;
use super::timestamp::TimestampFormat;
use serde::{Deserialize, Serialize};

/// Settings that can be loaded from any serde source and applied through
/// [`LoggerBuilder::config`](super::LoggerBuilder::config).
///
/// Sinks are runtime objects and are not part of the config.
///
/// # Example
///
/// ```
/// use leveled_logger::{LogLevel, LoggerConfig, TimestampFormat};
///
/// let config = LoggerConfig {
///     level: LogLevel::Warn,
///     time_format: TimestampFormat::Iso8601,
///     ..LoggerConfig::default()
/// };
/// assert!(!config.sanitize_messages);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggerConfig {
    pub level: LogLevel,
    pub time_format: TimestampFormat,
    pub sanitize_messages: bool,
}
