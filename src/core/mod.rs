//! Core logger types: priorities, resolution, formatting

pub mod config;
pub mod error;
pub mod formatter;
pub mod hierarchy;
pub mod logger;
pub mod metrics;
pub mod priority;
pub mod record;
pub mod registry;
pub mod timestamp;

pub use config::{LoggerConfig, LoggerSettings};
pub use error::{LoggerError, Result};
pub use formatter::{format_message, format_priority, Field, Template, DEFAULT_FORMAT};
pub use hierarchy::{ancestors, get_parent, ROOT};
pub use logger::Logger;
pub use metrics::LoggerMetrics;
pub use priority::{check_priority, parse_priority, IntoPriority, Priority, TextStyle};
pub use record::{render_payload, LogRecord};
pub use registry::{global, Registry, RegistryBuilder};
pub use timestamp::TimestampFormat;
