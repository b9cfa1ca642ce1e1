//! Per-logger configuration

use super::error::Result;
use super::formatter::{format_message, format_priority, Field, Template};
use super::hierarchy::ROOT;
use super::priority::Priority;
use super::record::{render_payload, LogRecord};
use super::timestamp::TimestampFormat;
use crate::output::Output;
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::sync::Arc;

/// Settings of one logger: threshold, layout and destination.
///
/// The registry hands out copies; changing a copy does not touch the
/// registry.
#[derive(Debug, Clone)]
pub struct LoggerConfig {
    name: String,
    priority: Priority,
    format: Arc<Template>,
    time_format: TimestampFormat,
    no_color: bool,
    output: Output,
}

impl LoggerConfig {
    /// Configuration of the root logger before anything is changed
    pub fn root() -> Self {
        Self {
            name: ROOT.to_string(),
            priority: Priority::DEFAULT,
            format: Arc::new(Template::default()),
            time_format: TimestampFormat::Rfc3339,
            no_color: false,
            output: Output::Stderr,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn priority(&self) -> Priority {
        self.priority
    }

    pub fn format(&self) -> &Template {
        &self.format
    }

    pub fn time_format(&self) -> &TimestampFormat {
        &self.time_format
    }

    pub fn no_color(&self) -> bool {
        self.no_color
    }

    pub fn output(&self) -> &Output {
        &self.output
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    #[must_use]
    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    #[must_use]
    pub fn with_format(mut self, format: Template) -> Self {
        self.format = Arc::new(format);
        self
    }

    #[must_use]
    pub fn with_time_format(mut self, time_format: TimestampFormat) -> Self {
        self.time_format = time_format;
        self
    }

    #[must_use]
    pub fn with_no_color(mut self, no_color: bool) -> Self {
        self.no_color = no_color;
        self
    }

    #[must_use]
    pub fn with_output(mut self, output: Output) -> Self {
        self.output = output;
        self
    }

    /// Whether a message at `priority` passes this logger's threshold.
    ///
    /// A `Disable` threshold rejects everything, `Disable` itself included.
    #[inline]
    pub fn is_enabled(&self, priority: Priority) -> bool {
        self.priority != Priority::Disable && self.priority <= priority
    }

    /// Render one message without consulting the threshold.
    ///
    /// The clock is only read when the template has a `{{Time}}` field.
    pub fn render(&self, priority: Priority, payload: &[&dyn Display]) -> String {
        let mut record = LogRecord::new(
            self.name.as_str(),
            format_priority(priority, self.no_color),
            render_payload(payload),
        );
        if self.format.uses(Field::Time) {
            record.time = self.time_format.format_now();
        }
        format_message(&record, &self.format)
    }

    /// Render one message and write it to the output, without consulting the
    /// threshold.
    pub fn emit(&self, priority: Priority, payload: &[&dyn Display]) -> Result<()> {
        self.output.write_record(&self.render(priority, payload))
    }
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self::root()
    }
}

/// Partial settings for one logger, typically deserialized from a
/// configuration file by the caller.
///
/// Fields left as `None` keep their inherited value.
///
/// # Example
///
/// ```
/// use rust_hierarchical_logger::{LoggerSettings, Priority};
///
/// let settings = LoggerSettings {
///     priority: Some(Priority::Warning),
///     no_color: Some(true),
///     ..LoggerSettings::default()
/// };
/// assert!(settings.format.is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggerSettings {
    pub priority: Option<Priority>,
    pub format: Option<String>,
    pub time_format: Option<TimestampFormat>,
    pub no_color: Option<bool>,
}

impl LoggerSettings {
    /// Apply onto `config`. Every field is validated before any is applied.
    pub fn apply_to(&self, config: LoggerConfig) -> Result<LoggerConfig> {
        let format = self.format.as_deref().map(Template::parse);
        if let Some(ref time_format) = self.time_format {
            time_format.validate()?;
        }

        let mut config = config;
        if let Some(priority) = self.priority {
            config = config.with_priority(priority);
        }
        if let Some(format) = format {
            config = config.with_format(format);
        }
        if let Some(ref time_format) = self.time_format {
            config = config.with_time_format(time_format.clone());
        }
        if let Some(no_color) = self.no_color {
            config = config.with_no_color(no_color);
        }
        Ok(config)
    }

    pub fn is_empty(&self) -> bool {
        self == &LoggerSettings::default()
    }
}
