//! File appender implementation

use crate::core::{Appender, LogLevel, LoggerError, Result};
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Appends lines to a file through a buffer.
///
/// Buffered lines reach disk on [`Logger::flush`](crate::Logger::flush), when
/// the appender is dropped, or before a `fatal` exit.
pub struct FileAppender {
    writer: BufWriter<File>,
    path: PathBuf,
    name: String,
}

impl FileAppender {
    /// Open `path` for appending, creating it if needed.
    pub fn new(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let file = OpenOptions::new().create(true).append(true).open(&path)?;
        let name = format!("file:{}", path.display());

        Ok(Self {
            writer: BufWriter::new(file),
            path,
            name,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Appender for FileAppender {
    fn append(&mut self, _level: LogLevel, line: &str) -> Result<()> {
        self.writer
            .write_all(line.as_bytes())
            .map_err(|e| LoggerError::sink_write(self.name.as_str(), e))
    }

    fn flush(&mut self) -> Result<()> {
        self.writer
            .flush()
            .map_err(|e| LoggerError::sink_write(self.name.as_str(), e))
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl Drop for FileAppender {
    fn drop(&mut self) {
        if let Err(e) = self.writer.flush() {
            eprintln!("[LOGGER ERROR] Failed to flush {} on drop: {}", self.name, e);
        }
    }
}
