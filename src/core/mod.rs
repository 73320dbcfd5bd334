//! Core logger types and traits

pub mod appender;
pub mod call_site;
pub mod config;
pub mod error;
pub mod log_level;
pub mod logger;
pub mod metrics;
pub mod record;
pub mod timestamp;
pub mod unit_id;

pub use appender::Appender;
pub use call_site::CallSite;
pub use config::LoggerConfig;
pub use error::{LoggerError, Result};
pub use log_level::LogLevel;
pub use logger::{Logger, LoggerBuilder, FATAL_EXIT_CODE};
pub use metrics::LoggerMetrics;
pub use record::LogRecord;
pub use timestamp::{TimestampFormat, DEFAULT_TIME_FORMAT};
pub use unit_id::{try_unit_id, unit_id};
