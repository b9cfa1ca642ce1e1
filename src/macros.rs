//! Logging macros.
//!
//! Each macro takes a [`Logger`](crate::Logger) followed by any number of
//! payload items. Items are rendered with `Display` and concatenated in order
//! without separators, so no format string is needed.
//!
//! # Examples
//!
//! ```
//! use rust_hierarchical_logger::prelude::*;
//! use rust_hierarchical_logger::info;
//!
//! let logger = Logger::new("service.http");
//!
//! // Basic logging
//! info!(logger, "Server started");
//!
//! // Several payload items
//! let port = 8080;
//! info!(logger, "Listening on port ", port);
//! ```

/// Log at an explicit priority.
///
/// # Examples
///
/// ```
/// # use rust_hierarchical_logger::prelude::*;
/// # let logger = Logger::new("app");
/// use rust_hierarchical_logger::log;
/// log!(logger, Priority::Info, "Simple message");
/// log!(logger, Priority::Error, "Error code: ", 500);
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $priority:expr $(, $item:expr)* $(,)?) => {
        $logger.log($priority, &[$(&$item as &dyn ::std::fmt::Display),*])
    };
}

/// Log a debug-priority message.
///
/// ```
/// # let logger = rust_hierarchical_logger::Logger::new("app");
/// use rust_hierarchical_logger::debug;
/// debug!(logger, "Counter value: ", 10);
/// ```
#[macro_export]
macro_rules! debug {
    ($logger:expr $(, $item:expr)* $(,)?) => {
        $crate::log!($logger, $crate::Priority::Debug $(, $item)*)
    };
}

/// Log an info-priority message.
#[macro_export]
macro_rules! info {
    ($logger:expr $(, $item:expr)* $(,)?) => {
        $crate::log!($logger, $crate::Priority::Info $(, $item)*)
    };
}

/// Log a notice-priority message.
#[macro_export]
macro_rules! notice {
    ($logger:expr $(, $item:expr)* $(,)?) => {
        $crate::log!($logger, $crate::Priority::Notice $(, $item)*)
    };
}

/// Log a warning-priority message.
///
/// ```
/// # let logger = rust_hierarchical_logger::Logger::new("app");
/// use rust_hierarchical_logger::warning;
/// warning!(logger, "Disk usage at ", 85, "%");
/// ```
#[macro_export]
macro_rules! warning {
    ($logger:expr $(, $item:expr)* $(,)?) => {
        $crate::log!($logger, $crate::Priority::Warning $(, $item)*)
    };
}

/// Log an error-priority message.
#[macro_export]
macro_rules! error {
    ($logger:expr $(, $item:expr)* $(,)?) => {
        $crate::log!($logger, $crate::Priority::Error $(, $item)*)
    };
}

/// Log a critical-priority message.
#[macro_export]
macro_rules! critical {
    ($logger:expr $(, $item:expr)* $(,)?) => {
        $crate::log!($logger, $crate::Priority::Critical $(, $item)*)
    };
}

/// Log an alert-priority message.
#[macro_export]
macro_rules! alert {
    ($logger:expr $(, $item:expr)* $(,)?) => {
        $crate::log!($logger, $crate::Priority::Alert $(, $item)*)
    };
}

/// Log an emergency-priority message.
///
/// ```
/// # let logger = rust_hierarchical_logger::Logger::new("app");
/// use rust_hierarchical_logger::emergency;
/// emergency!(logger, "Cluster unreachable");
/// ```
#[macro_export]
macro_rules! emergency {
    ($logger:expr $(, $item:expr)* $(,)?) => {
        $crate::log!($logger, $crate::Priority::Emergency $(, $item)*)
    };
}
