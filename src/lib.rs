//! # Rust Hierarchical Logger
//!
//! A priority-filtered logging library organised around dotted logger names.
//!
//! ## Features
//!
//! - **Hierarchical**: `"service.worker"` inherits threshold, template, time
//!   format, color policy and output from `"service"`, and from the root `"."`
//!   when nothing closer is configured
//! - **Cheap filtering**: calls below the threshold return before anything is
//!   formatted
//! - **Templates**: `{{Time}}`, `{{Logger}}`, `{{Priority}}` and `{{Message}}`
//!   placeholders with literal substitution
//! - **Thread Safe**: one lock-guarded registry shared by every logger
//!
//! ## Example
//!
//! ```
//! use rust_hierarchical_logger::prelude::*;
//! use rust_hierarchical_logger::warning;
//!
//! let buffer = SharedBuffer::new();
//! let registry = Registry::builder()
//!     .format("{{Priority}} {{Logger}}: {{Message}}\n")
//!     .no_color(true)
//!     .output(buffer.clone().into())
//!     .build()?;
//!
//! registry.set_level("db", Priority::Error)?;
//!
//! let pool = registry.logger("db.pool");
//! warning!(pool, "connections: ", 3);
//! let api = registry.logger("api");
//! warning!(api, "slow request: ", 1200, "ms");
//!
//! assert_eq!(buffer.contents(), "Warning api: slow request: 1200ms\n");
//! # Ok::<(), rust_hierarchical_logger::LoggerError>(())
//! ```

pub mod core;
pub mod macros;
pub mod output;

pub mod prelude {
    pub use crate::core::{
        IntoPriority, LogRecord, Logger, LoggerConfig, LoggerError, LoggerMetrics,
        LoggerSettings, Priority, Registry, RegistryBuilder, Result, Template, TimestampFormat,
    };
    pub use crate::output::{Output, SharedBuffer};
}

pub use crate::core::{
    check_priority, format_message, format_priority, get_parent, global, parse_priority,
    IntoPriority, LogRecord, Logger, LoggerConfig, LoggerError, LoggerMetrics, LoggerSettings,
    Priority, Registry, RegistryBuilder, Result, Template, TimestampFormat, DEFAULT_FORMAT, ROOT,
};
pub use output::{Output, SharedBuffer};

/// Logger named `name` in the process-wide registry
///
/// ```
/// let logger = rust_hierarchical_logger::logger("service.worker");
/// assert_eq!(logger.parent(), "service");
/// ```
pub fn logger(name: impl Into<String>) -> Logger {
    Logger::new(name)
}
