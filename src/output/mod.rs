//! Output destinations for rendered log records

pub mod buffer;
pub mod file;

pub use buffer::SharedBuffer;

use crate::core::{LoggerError, Result};
use parking_lot::Mutex;
use std::fmt;
use std::io::{self, Write};
use std::sync::Arc;

type SharedWriter = Arc<Mutex<Box<dyn Write + Send>>>;

/// Byte sink a logger writes to.
///
/// Cloning an `Output` shares the underlying writer, so loggers that inherit
/// a destination from an ancestor write to the same sink. Each record is
/// written with a single `write_all` while holding the sink's lock.
#[derive(Clone, Default)]
pub enum Output {
    #[default]
    Stderr,
    Stdout,
    Writer { label: String, writer: SharedWriter },
}

impl Output {
    pub fn stderr() -> Self {
        Output::Stderr
    }

    pub fn stdout() -> Self {
        Output::Stdout
    }

    /// Wrap any writer as a shared output
    ///
    /// # Example
    ///
    /// ```
    /// use rust_hierarchical_logger::{Output, SharedBuffer};
    ///
    /// let buffer = SharedBuffer::new();
    /// let output = Output::writer("capture", buffer.clone());
    /// output.write_record("hello").unwrap();
    /// assert_eq!(buffer.contents(), "hello");
    /// ```
    pub fn writer<W>(label: impl Into<String>, writer: W) -> Self
    where
        W: Write + Send + 'static,
    {
        Output::Writer {
            label: label.into(),
            writer: Arc::new(Mutex::new(Box::new(writer))),
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Output::Stderr => "stderr",
            Output::Stdout => "stdout",
            Output::Writer { label, .. } => label,
        }
    }

    /// Write one rendered record
    pub fn write_record(&self, text: &str) -> Result<()> {
        let written = match self {
            Output::Stderr => io::stderr().lock().write_all(text.as_bytes()),
            Output::Stdout => io::stdout().lock().write_all(text.as_bytes()),
            Output::Writer { writer, .. } => writer.lock().write_all(text.as_bytes()),
        };
        written.map_err(|e| {
            LoggerError::io_operation(
                "writing log record",
                format!("cannot write to {}", self.label()),
                e,
            )
        })
    }

    pub fn flush(&self) -> Result<()> {
        match self {
            Output::Stderr => io::stderr().flush()?,
            Output::Stdout => io::stdout().flush()?,
            Output::Writer { writer, .. } => writer.lock().flush()?,
        }
        Ok(())
    }

    /// Whether both outputs end up in the same sink
    pub fn same_sink(&self, other: &Output) -> bool {
        match (self, other) {
            (Output::Stderr, Output::Stderr) | (Output::Stdout, Output::Stdout) => true,
            (Output::Writer { writer: a, .. }, Output::Writer { writer: b, .. }) => {
                Arc::ptr_eq(a, b)
            }
            _ => false,
        }
    }
}

impl fmt::Debug for Output {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Output::Stderr => f.write_str("Stderr"),
            Output::Stdout => f.write_str("Stdout"),
            Output::Writer { label, .. } => f.debug_struct("Writer").field("label", label).finish(),
        }
    }
}

impl From<SharedBuffer> for Output {
    fn from(buffer: SharedBuffer) -> Self {
        Output::writer("buffer", buffer)
    }
}
