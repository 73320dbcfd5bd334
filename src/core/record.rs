//! Log record structure

use super::call_site::CallSite;
use super::log_level::LogLevel;
use super::timestamp::TimestampFormat;
use super::unit_id::unit_id;
use chrono::{DateTime, Local};

/// One log call, alive only long enough to be formatted.
#[derive(Debug, Clone)]
pub struct LogRecord {
    pub timestamp: DateTime<Local>,
    pub level: LogLevel,
    pub call_site: CallSite,
    pub unit_id: u64,
    pub message: String,
}

impl LogRecord {
    /// Replace newlines, carriage returns and tabs with escape sequences
    /// so a message cannot forge extra log lines.
    pub fn sanitize_message(message: &str) -> String {
        message
            .replace('\n', "\\n")
            .replace('\r', "\\r")
            .replace('\t', "\\t")
    }

    pub fn new(level: LogLevel, call_site: CallSite, message: String) -> Self {
        Self {
            timestamp: Local::now(),
            level,
            call_site,
            unit_id: unit_id(),
            message,
        }
    }

    /// `<timestamp> <LEVEL> [<function>.<line> goid-<id>] <message>\n`
    pub fn format_line(&self, timestamp_format: &TimestampFormat) -> String {
        format!(
            "{} {} [{} goid-{}] {}\n",
            timestamp_format.format(&self.timestamp),
            self.level,
            self.call_site,
            self.unit_id,
            self.message
        )
    }
}
