//! File output

use super::Output;
use crate::core::{LoggerError, Result};
use std::fs::OpenOptions;
use std::path::Path;

impl Output {
    /// Open `path` for appending, creating it if needed.
    ///
    /// Records are written straight to the file, one `write_all` each.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use rust_hierarchical_logger::Output;
    ///
    /// let output = Output::file("/var/log/app.log").unwrap();
    /// ```
    pub fn file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|e| {
                LoggerError::io_operation(
                    "opening log file",
                    format!("cannot open '{}'", path.display()),
                    e,
                )
            })?;

        Ok(Output::writer(path.display().to_string(), file))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_file_output_appends() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("app.log");

        let output = Output::file(&path).expect("Failed to open log file");
        output.write_record("first\n").unwrap();
        output.flush().unwrap();
        drop(output);

        let reopened = Output::file(&path).expect("Failed to reopen log file");
        reopened.write_record("second\n").unwrap();
        reopened.flush().unwrap();

        let content = std::fs::read_to_string(&path).expect("Failed to read log file");
        assert_eq!(content, "first\nsecond\n");
        assert_eq!(reopened.label(), path.display().to_string());
    }

    #[test]
    fn test_missing_directory_is_an_error() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("missing").join("app.log");

        let err = Output::file(&path).unwrap_err();
        assert!(matches!(err, LoggerError::IoOperation { .. }));
    }
}
