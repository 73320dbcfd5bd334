//! Error types for the logger system

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// A sink refused a write or flush
    #[error("sink '{sink}' failed: {source}")]
    SinkWrite {
        sink: String,
        #[source]
        source: std::io::Error,
    },

    /// The current thread id could not be read back as a number
    #[error("cannot get thread id from '{dump}'")]
    UnitId { dump: String },

    /// Generic IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Unknown level name or ordinal
    #[error("Invalid log level: '{0}'")]
    InvalidLevel(String),
}

impl LoggerError {
    /// Create a sink write error
    pub fn sink_write(sink: impl Into<String>, source: std::io::Error) -> Self {
        LoggerError::SinkWrite {
            sink: sink.into(),
            source,
        }
    }

    /// Create a thread id resolution error
    pub fn unit_id(dump: impl Into<String>) -> Self {
        LoggerError::UnitId { dump: dump.into() }
    }
}
