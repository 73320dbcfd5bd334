//! Console appender implementation

use crate::core::{Appender, LogLevel, LoggerError, Result};
use colored::Colorize;
use std::io::{self, Write};

/// Which standard stream a [`ConsoleAppender`] writes to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConsoleTarget {
    #[default]
    Stdout,
    Stderr,
}

pub struct ConsoleAppender {
    target: ConsoleTarget,
    use_colors: bool,
}

impl ConsoleAppender {
    /// Plain lines on stdout
    pub fn new() -> Self {
        Self {
            target: ConsoleTarget::Stdout,
            use_colors: false,
        }
    }

    pub fn stderr() -> Self {
        Self {
            target: ConsoleTarget::Stderr,
            use_colors: false,
        }
    }

    /// Colour whole lines by level. Adds ANSI escapes, so the output is no
    /// longer byte-identical to other sinks.
    ///
    /// # Example
    ///
    /// ```
    /// use leveled_logger::appenders::ConsoleAppender;
    ///
    /// let appender = ConsoleAppender::stderr().with_colors(true);
    /// ```
    #[must_use]
    pub fn with_colors(mut self, use_colors: bool) -> Self {
        self.use_colors = use_colors;
        self
    }

    pub fn target(&self) -> ConsoleTarget {
        self.target
    }

    fn render(&self, level: LogLevel, line: &str) -> String {
        if self.use_colors {
            let body = line.strip_suffix('\n').unwrap_or(line);
            format!("{}\n", body.color(level.color_code()))
        } else {
            line.to_string()
        }
    }

    fn write_to_target(&self, bytes: &[u8]) -> io::Result<()> {
        match self.target {
            ConsoleTarget::Stdout => io::stdout().lock().write_all(bytes),
            ConsoleTarget::Stderr => io::stderr().lock().write_all(bytes),
        }
    }
}

impl Default for ConsoleAppender {
    fn default() -> Self {
        Self::new()
    }
}

impl Appender for ConsoleAppender {
    fn append(&mut self, level: LogLevel, line: &str) -> Result<()> {
        let output = self.render(level, line);
        self.write_to_target(output.as_bytes())
            .map_err(|e| LoggerError::sink_write(self.name(), e))
    }

    fn flush(&mut self) -> Result<()> {
        let result = match self.target {
            ConsoleTarget::Stdout => io::stdout().flush(),
            ConsoleTarget::Stderr => io::stderr().flush(),
        };
        result.map_err(|e| LoggerError::sink_write(self.name(), e))
    }

    fn name(&self) -> &str {
        match self.target {
            ConsoleTarget::Stdout => "stdout",
            ConsoleTarget::Stderr => "stderr",
        }
    }
}
