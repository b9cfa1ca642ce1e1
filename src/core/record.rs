//! Log record structure

use std::fmt::{Display, Write};

/// One rendered log call, ready to be substituted into a template.
///
/// Every field is already a string: `priority` may carry color escapes and
/// `time` is formatted with the logger's time format.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LogRecord {
    pub time: String,
    pub logger: String,
    pub priority: String,
    pub message: String,
}

impl LogRecord {
    pub fn new(
        logger: impl Into<String>,
        priority: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            time: String::new(),
            logger: logger.into(),
            priority: priority.into(),
            message: message.into(),
        }
    }

    pub fn with_time(mut self, time: impl Into<String>) -> Self {
        self.time = time.into();
        self
    }
}

/// Concatenate the `Display` output of every payload item, in order, with
/// no separator.
pub fn render_payload(payload: &[&dyn Display]) -> String {
    let mut message = String::new();
    for item in payload {
        // Writing to a String only fails if a Display impl reports an error;
        // keep whatever it managed to write.
        let _ = write!(message, "{}", item);
    }
    message
}
