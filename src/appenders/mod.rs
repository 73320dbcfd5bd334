//! Appender implementations

#[cfg(feature = "console")]
pub mod console;
#[cfg(feature = "file")]
pub mod file;
pub mod memory;
pub mod writer;

#[cfg(feature = "console")]
pub use console::{ConsoleAppender, ConsoleTarget};
#[cfg(feature = "file")]
pub use file::FileAppender;
pub use memory::MemoryAppender;
pub use writer::{appender, WriterAppender};

pub use crate::core::Appender;
