//! Adapter turning any byte writer into an appender

use crate::core::{Appender, LogLevel, LoggerError, Result};
use std::io::Write;

/// Writes each line to a caller-owned [`Write`] implementation.
///
/// The logger never closes the writer; it is dropped along with the logger.
///
/// # Example
///
/// ```
/// use leveled_logger::prelude::*;
///
/// let logger = Logger::new();
/// logger.set_output(vec![
///     appender(std::io::stderr()),
///     Box::new(WriterAppender::new(Vec::<u8>::new()).with_name("scratch")),
/// ]);
/// ```
pub struct WriterAppender<W: Write + Send> {
    writer: W,
    name: String,
}

impl<W: Write + Send> WriterAppender<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            name: "writer".to_string(),
        }
    }

    /// Name used in error reports
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn get_ref(&self) -> &W {
        &self.writer
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write + Send> Appender for WriterAppender<W> {
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

/// Box any writer as an appender, for [`Logger::set_output`](crate::Logger::set_output).
pub fn appender<W: Write + Send + 'static>(writer: W) -> Box<dyn Appender> {
    Box::new(WriterAppender::new(writer))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "reader gone"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_writes_line_bytes() {
        let mut appender = WriterAppender::new(Vec::new());
        appender.append(LogLevel::Info, "one\n").unwrap();
        appender.append(LogLevel::Info, "two\n").unwrap();
        assert_eq!(appender.into_inner(), b"one\ntwo\n");
    }

    #[test]
    fn test_error_names_sink() {
        let mut appender = WriterAppender::new(BrokenPipe).with_name("pipe");
        let err = appender.append(LogLevel::Error, "x\n").unwrap_err();
        assert!(matches!(err, LoggerError::SinkWrite { ref sink, .. } if sink == "pipe"));
    }

    #[test]
    fn test_boxed_helper() {
        let boxed = appender(Vec::<u8>::new());
        assert_eq!(boxed.name(), "writer");
    }
}
