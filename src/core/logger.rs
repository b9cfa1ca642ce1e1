//! Named logger handle

use super::{
    config::{LoggerConfig, LoggerSettings},
    error::Result,
    hierarchy::get_parent,
    priority::{IntoPriority, Priority},
    registry::{global, Registry},
    timestamp::TimestampFormat,
};
use crate::output::Output;
use std::fmt::{self, Display};

/// A logger name bound to a registry.
///
/// Creating a `Logger` registers nothing; the name only gets its own entry
/// once one of the setters is called. Every logging method forwards to
/// [`Registry::log`].
///
/// # Example
///
/// ```
/// use rust_hierarchical_logger::prelude::*;
///
/// let buffer = SharedBuffer::new();
/// let registry = Registry::builder()
///     .format("{{Logger}}: {{Message}}\n")
///     .output(buffer.clone().into())
///     .build()
///     .unwrap();
///
/// let worker = registry.logger("service.worker");
/// worker.warning(&[&"retrying in ", &5, &"s"]);
/// worker.debug(&[&"hidden below Notice"]);
///
/// assert_eq!(buffer.contents(), "service.worker: retrying in 5s\n");
/// ```
#[derive(Clone)]
pub struct Logger {
    name: String,
    registry: Registry,
}

impl Logger {
    /// Logger named `name` in the process-wide registry
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_registry(name, global().clone())
    }

    pub fn with_registry(name: impl Into<String>, registry: Registry) -> Self {
        Self {
            name: name.into(),
            registry,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Name of the parent logger
    pub fn parent(&self) -> &str {
        get_parent(&self.name)
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Effective threshold
    pub fn level(&self) -> Priority {
        self.registry.get_level(&self.name)
    }

    /// Effective configuration
    pub fn config(&self) -> LoggerConfig {
        self.registry.get_logger(&self.name)
    }

    /// Whether a message at `priority` would be written
    pub fn is_enabled(&self, priority: Priority) -> bool {
        let level = self.level();
        level != Priority::Disable && level <= priority
    }

    pub fn log(&self, priority: Priority, payload: &[&dyn Display]) {
        self.registry.log(&self.name, priority, payload);
    }

    pub fn try_log(&self, priority: Priority, payload: &[&dyn Display]) -> Result<()> {
        self.registry.try_log(&self.name, priority, payload)
    }

    #[inline]
    pub fn debug(&self, payload: &[&dyn Display]) {
        self.log(Priority::Debug, payload);
    }

    #[inline]
    pub fn info(&self, payload: &[&dyn Display]) {
        self.log(Priority::Info, payload);
    }

    #[inline]
    pub fn notice(&self, payload: &[&dyn Display]) {
        self.log(Priority::Notice, payload);
    }

    #[inline]
    pub fn warning(&self, payload: &[&dyn Display]) {
        self.log(Priority::Warning, payload);
    }

    #[inline]
    pub fn error(&self, payload: &[&dyn Display]) {
        self.log(Priority::Error, payload);
    }

    #[inline]
    pub fn critical(&self, payload: &[&dyn Display]) {
        self.log(Priority::Critical, payload);
    }

    #[inline]
    pub fn alert(&self, payload: &[&dyn Display]) {
        self.log(Priority::Alert, payload);
    }

    #[inline]
    pub fn emergency(&self, payload: &[&dyn Display]) {
        self.log(Priority::Emergency, payload);
    }

    pub fn set_level(&self, priority: impl IntoPriority) -> Result<()> {
        self.registry.set_level(&self.name, priority)
    }

    pub fn set_format(&self, format: &str) -> Result<()> {
        self.registry.set_format(&self.name, format)
    }

    pub fn set_time_format(&self, time_format: impl Into<TimestampFormat>) -> Result<()> {
        self.registry.set_time_format(&self.name, time_format)
    }

    pub fn set_no_color(&self, no_color: bool) -> Result<()> {
        self.registry.set_no_color(&self.name, no_color)
    }

    pub fn set_output(&self, output: Output) -> Result<()> {
        self.registry.set_output(&self.name, output)
    }

    pub fn configure(&self, settings: &LoggerSettings) -> Result<()> {
        self.registry.configure(&self.name, settings)
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger").field("name", &self.name).finish()
    }
}

impl fmt::Display for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
