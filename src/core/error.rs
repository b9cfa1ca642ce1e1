//! Error types for the logger system

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// Priority name that is not part of the scale
    #[error("cannot parse priority '{name}'")]
    PriorityNotFound { name: String },

    /// Numeric priority outside the declared scale
    #[error("priority does not exist")]
    PriorityDoesNotExist { value: i64 },

    /// Time format specifier chrono cannot render
    #[error("Invalid time format '{format}'")]
    InvalidTimeFormat { format: String },

    /// IO error with context
    #[error("IO error while {operation}: {message}")]
    IoOperation {
        operation: String,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Generic IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl LoggerError {
    /// Create a priority-not-found error for an unknown name
    pub fn priority_not_found(name: impl Into<String>) -> Self {
        LoggerError::PriorityNotFound { name: name.into() }
    }

    /// Create a priority-does-not-exist error for an out-of-range value
    pub fn priority_does_not_exist(value: i64) -> Self {
        LoggerError::PriorityDoesNotExist { value }
    }

    /// Create an invalid time format error
    pub fn time_format(format: impl Into<String>) -> Self {
        LoggerError::InvalidTimeFormat {
            format: format.into(),
        }
    }

    /// Create an IO operation error with context
    pub fn io_operation(
        operation: impl Into<String>,
        message: impl Into<String>,
        source: std::io::Error,
    ) -> Self {
        LoggerError::IoOperation {
            operation: operation.into(),
            message: message.into(),
            source,
        }
    }

    /// Whether this error comes from priority parsing or validation
    pub fn is_invalid_priority(&self) -> bool {
        matches!(
            self,
            LoggerError::PriorityNotFound { .. } | LoggerError::PriorityDoesNotExist { .. }
        )
    }
}
