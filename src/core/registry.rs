//! Logger registry and configuration resolution
//!
//! The registry stores configuration only for loggers that were explicitly
//! configured, plus the root. Any other name resolves to its nearest
//! configured ancestor in the dotted namespace, with its own name stamped on
//! the result.

use super::{
    config::{LoggerConfig, LoggerSettings},
    error::Result,
    formatter::Template,
    hierarchy::{ancestors, get_parent, is_root, ROOT},
    logger::Logger,
    metrics::LoggerMetrics,
    priority::{IntoPriority, Priority},
    timestamp::TimestampFormat,
};
use crate::output::Output;
use once_cell::sync::Lazy;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::fmt::{self, Display};
use std::io::Write;
use std::sync::Arc;

static GLOBAL: Lazy<Registry> = Lazy::new(Registry::new);

/// Process-wide registry used by [`Logger::new`] and [`crate::logger`].
///
/// Created with root defaults on first use.
pub fn global() -> &'static Registry {
    &GLOBAL
}

struct Entries {
    root: LoggerConfig,
    loggers: HashMap<String, LoggerConfig>,
}

impl Entries {
    fn lookup(&self, name: &str) -> Option<&LoggerConfig> {
        if is_root(name) {
            Some(&self.root)
        } else {
            self.loggers.get(name)
        }
    }

    /// Configuration of `name` itself or of its nearest configured ancestor
    fn nearest(&self, name: &str) -> &LoggerConfig {
        ancestors(name)
            .find_map(|candidate| self.lookup(candidate))
            .unwrap_or(&self.root)
    }

    fn resolve(&self, name: &str) -> LoggerConfig {
        let config = self.nearest(name);
        if config.name() == name {
            config.clone()
        } else {
            config.clone().with_name(name)
        }
    }

    fn store(&mut self, config: LoggerConfig) {
        if is_root(config.name()) {
            self.root = config;
        } else {
            self.loggers.insert(config.name().to_string(), config);
        }
    }
}

/// Store of explicitly configured loggers.
///
/// Cloning a `Registry` is cheap and shares its state. Reads and writes are
/// serialized by an `RwLock`; log calls resolve under a read guard and
/// release it before formatting and writing.
///
/// # Example
///
/// ```
/// use rust_hierarchical_logger::{Priority, Registry};
///
/// let registry = Registry::new();
/// registry.set_level("service", Priority::Warning).unwrap();
///
/// assert_eq!(registry.get_level("service.worker.pool"), Priority::Warning);
/// assert_eq!(registry.get_level("other"), Priority::Notice);
/// ```
#[derive(Clone)]
pub struct Registry {
    entries: Arc<RwLock<Entries>>,
    metrics: Arc<LoggerMetrics>,
}

impl Registry {
    /// Create a registry whose root logger has the default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::with_root(LoggerConfig::root())
    }

    /// Create a registry with the given root configuration. Its name is
    /// replaced by the root name.
    #[must_use]
    pub fn with_root(root: LoggerConfig) -> Self {
        Self {
            entries: Arc::new(RwLock::new(Entries {
                root: root.with_name(ROOT),
                loggers: HashMap::new(),
            })),
            metrics: Arc::new(LoggerMetrics::new()),
        }
    }

    #[must_use]
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::new()
    }

    /// Handle for logging through `name` in this registry
    pub fn logger(&self, name: impl Into<String>) -> Logger {
        Logger::with_registry(name, self.clone())
    }

    /// Effective threshold of `name`
    pub fn get_level(&self, name: &str) -> Priority {
        self.entries.read().nearest(name).priority()
    }

    /// Effective threshold of the parent of `name`, ignoring any entry for
    /// `name` itself
    pub fn get_parent_level(&self, name: &str) -> Priority {
        self.get_level(get_parent(name))
    }

    /// Effective configuration of `name`, carrying `name` as its name
    pub fn get_logger(&self, name: &str) -> LoggerConfig {
        self.entries.read().resolve(name)
    }

    /// Whether `name` has its own entry. The root always has one.
    pub fn is_configured(&self, name: &str) -> bool {
        self.entries.read().lookup(name).is_some()
    }

    /// Names with their own entry, root first, the rest sorted
    pub fn configured_names(&self) -> Vec<String> {
        let entries = self.entries.read();
        let mut names: Vec<String> = entries.loggers.keys().cloned().collect();
        names.sort_unstable();
        names.insert(0, ROOT.to_string());
        names
    }

    /// Set the threshold of `name`.
    ///
    /// Raw values and names are validated first; on error the registry is
    /// left untouched.
    pub fn set_level(&self, name: &str, priority: impl IntoPriority) -> Result<()> {
        let priority = priority.into_priority()?;
        self.update(name, |config| Ok(config.with_priority(priority)))
    }

    /// Set the message template of `name`. Text that is not a placeholder is
    /// printed as written.
    pub fn set_format(&self, name: &str, format: &str) -> Result<()> {
        let template = Template::parse(format);
        self.update(name, |config| Ok(config.with_format(template)))
    }

    pub fn set_time_format(
        &self,
        name: &str,
        time_format: impl Into<TimestampFormat>,
    ) -> Result<()> {
        let time_format = time_format.into();
        time_format.validate()?;
        self.update(name, |config| Ok(config.with_time_format(time_format)))
    }

    pub fn set_no_color(&self, name: &str, no_color: bool) -> Result<()> {
        self.update(name, |config| Ok(config.with_no_color(no_color)))
    }

    pub fn set_output(&self, name: &str, output: Output) -> Result<()> {
        self.update(name, |config| Ok(config.with_output(output)))
    }

    /// Apply several settings to `name` at once; nothing is stored unless
    /// all of them are valid.
    pub fn configure(&self, name: &str, settings: &LoggerSettings) -> Result<()> {
        self.update(name, |config| settings.apply_to(config))
    }

    /// Resolve the current configuration of `name`, change it, and store
    /// the result under `name`.
    fn update<F>(&self, name: &str, change: F) -> Result<()>
    where
        F: FnOnce(LoggerConfig) -> Result<LoggerConfig>,
    {
        let mut entries = self.entries.write();
        let config = change(entries.resolve(name))?;
        entries.store(config);
        Ok(())
    }

    /// Log `payload` through `name` at `priority`.
    ///
    /// Calls below the effective threshold return before anything is
    /// formatted. Write failures are reported on stderr.
    pub fn log(&self, name: &str, priority: Priority, payload: &[&dyn Display]) {
        if let Err(e) = self.try_log(name, priority, payload) {
            report(format_args!(
                "[LOGGER ERROR] Failed to write record for '{}': {}",
                name, e
            ));
        }
    }

    /// Like [`log`](Self::log), but returns write failures to the caller.
    pub fn try_log(&self, name: &str, priority: Priority, payload: &[&dyn Display]) -> Result<()> {
        let config = {
            let entries = self.entries.read();
            let nearest = entries.nearest(name);
            if !nearest.is_enabled(priority) {
                return Ok(());
            }
            nearest.clone().with_name(name)
        };

        match config.emit(priority, payload) {
            Ok(()) => {
                self.metrics.record_written();
                Ok(())
            }
            Err(e) => {
                self.metrics.record_write_failure();
                Err(e)
            }
        }
    }

    /// Flush every distinct output referenced by a configured logger
    pub fn flush(&self) -> Result<()> {
        let outputs: Vec<Output> = {
            let entries = self.entries.read();
            let mut outputs: Vec<Output> = Vec::new();
            for config in std::iter::once(&entries.root).chain(entries.loggers.values()) {
                if !outputs.iter().any(|seen| seen.same_sink(config.output())) {
                    outputs.push(config.output().clone());
                }
            }
            outputs
        };

        for output in &outputs {
            output.flush()?;
        }
        Ok(())
    }

    pub fn metrics(&self) -> &LoggerMetrics {
        &self.metrics
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("configured", &self.configured_names())
            .finish()
    }
}

/// Report an internal failure without risking a panic on a closed stderr
fn report(message: fmt::Arguments<'_>) {
    let _ = writeln!(std::io::stderr(), "{}", message);
}

/// Builder for a [`Registry`] with a customised root logger
///
/// # Example
/// ```
/// use rust_hierarchical_logger::prelude::*;
///
/// let buffer = SharedBuffer::new();
/// let registry = Registry::builder()
///     .priority(Priority::Debug)
///     .format("{{Priority}} {{Logger}}: {{Message}}\n")
///     .no_color(true)
///     .output(buffer.clone().into())
///     .build()
///     .unwrap();
///
/// registry.log("app", Priority::Info, &[&"started"]);
/// assert_eq!(buffer.contents(), "Info app: started\n");
/// ```
pub struct RegistryBuilder {
    priority: Priority,
    format: Option<String>,
    time_format: TimestampFormat,
    no_color: bool,
    output: Output,
}

impl RegistryBuilder {
    pub fn new() -> Self {
        Self {
            priority: Priority::DEFAULT,
            format: None,
            time_format: TimestampFormat::default(),
            no_color: false,
            output: Output::default(),
        }
    }

    /// Set the root threshold
    #[must_use = "builder methods return a new value"]
    pub fn priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    /// Set the root template; parsed by [`build`](Self::build)
    #[must_use = "builder methods return a new value"]
    pub fn format(mut self, format: impl Into<String>) -> Self {
        self.format = Some(format.into());
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn time_format(mut self, time_format: impl Into<TimestampFormat>) -> Self {
        self.time_format = time_format.into();
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn no_color(mut self, no_color: bool) -> Self {
        self.no_color = no_color;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn output(mut self, output: Output) -> Self {
        self.output = output;
        self
    }

    /// Build the registry, validating the time format
    pub fn build(self) -> Result<Registry> {
        self.time_format.validate()?;
        let mut root = LoggerConfig::root()
            .with_priority(self.priority)
            .with_time_format(self.time_format)
            .with_no_color(self.no_color)
            .with_output(self.output);
        if let Some(format) = self.format {
            root = root.with_format(Template::parse(&format));
        }
        Ok(Registry::with_root(root))
    }
}

impl Default for RegistryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LoggerError;
    use crate::output::SharedBuffer;

    fn capture() -> (Registry, SharedBuffer) {
        let buffer = SharedBuffer::new();
        let registry = Registry::builder()
            .format("{{Logger}} - {{Priority}} - {{Message}}\n")
            .no_color(true)
            .output(buffer.clone().into())
            .build()
            .expect("valid root configuration");
        (registry, buffer)
    }

    #[test]
    fn test_get_level_inherits_through_unconfigured_levels() {
        let registry = Registry::new();
        for name in ["", ".", "Test", ".Test"] {
            assert_eq!(registry.get_level(name), Priority::DEFAULT, "level of {:?}", name);
        }

        registry.set_level("Test2", Priority::Emergency).unwrap();
        for name in [
            "Test2",
            "Test2.Test",
            "Test2.Test.Test",
            "Test2.Test.Test.Test.Test.Test",
        ] {
            assert_eq!(registry.get_level(name), Priority::Emergency, "level of {:?}", name);
        }
    }

    #[test]
    fn test_get_parent_level_skips_self() {
        let registry = Registry::new();
        registry.set_level("Test2", Priority::Emergency).unwrap();

        assert_eq!(registry.get_parent_level("."), Priority::DEFAULT);
        assert_eq!(registry.get_parent_level("Test"), Priority::DEFAULT);
        assert_eq!(registry.get_parent_level("Test.Test"), Priority::DEFAULT);
        assert_eq!(registry.get_parent_level("Test2"), Priority::DEFAULT);
        assert_eq!(registry.get_parent_level("Test2.Test"), Priority::Emergency);
    }

    #[test]
    fn test_get_logger_stamps_requested_name() {
        let registry = Registry::new();
        registry.set_level("svc", Priority::Error).unwrap();

        let config = registry.get_logger("svc.worker.pool");
        assert_eq!(config.name(), "svc.worker.pool");
        assert_eq!(config.priority(), Priority::Error);
        assert!(!registry.is_configured("svc.worker.pool"));

        assert_eq!(registry.get_logger("svc").name(), "svc");
        assert_eq!(registry.get_logger(".").name(), ".");
    }

    #[test]
    fn test_new_entry_is_seeded_from_resolved_ancestor() {
        let registry = Registry::new();
        registry.set_format("svc", "{{Message}}").unwrap();
        registry.set_no_color("svc", true).unwrap();

        registry.set_level("svc.worker", Priority::Debug).unwrap();

        let worker = registry.get_logger("svc.worker");
        assert_eq!(worker.priority(), Priority::Debug);
        assert_eq!(worker.format().as_str(), "{{Message}}");
        assert!(worker.no_color());

        // later ancestor changes no longer reach the configured child
        registry.set_format("svc", "{{Logger}}").unwrap();
        assert_eq!(registry.get_logger("svc.worker").format().as_str(), "{{Message}}");
        assert_eq!(registry.get_logger("svc.other").format().as_str(), "{{Logger}}");
    }

    #[test]
    fn test_set_level_validates() {
        let registry = Registry::new();
        let err = registry.set_level("svc", 9i64).unwrap_err();
        assert_eq!(err.to_string(), "priority does not exist");
        assert!(!registry.is_configured("svc"));

        assert!(registry.set_level("svc", "Loud").is_err());
        assert!(!registry.is_configured("svc"));

        registry.set_level("svc", "Alert").unwrap();
        assert_eq!(registry.get_level("svc"), Priority::Alert);
        registry.set_level("svc", 0i32).unwrap();
        assert_eq!(registry.get_level("svc"), Priority::Debug);
    }

    #[test]
    fn test_set_format_accepts_unmatched_braces() {
        let (registry, buffer) = capture();
        registry.set_format("svc", "{{Message}} {{ raw\n").unwrap();
        registry.set_format("json", "json={{\"a\":1} {{Message}}\n").unwrap();

        registry.log("svc.worker", Priority::Notice, &[&"up"]);
        registry.log("json", Priority::Notice, &[&"up"]);

        assert_eq!(buffer.contents(), "up {{ raw\njson={{\"a\":1} up\n");
        assert_eq!(registry.get_logger("svc").format().as_str(), "{{Message}} {{ raw\n");
    }

    #[test]
    fn test_set_time_format_rejects_broken_specifier() {
        let registry = Registry::new();
        assert!(registry.set_time_format("svc", "%Y-%").is_err());
        assert!(!registry.is_configured("svc"));

        registry.set_time_format("svc", "%H:%M").unwrap();
        assert_eq!(
            registry.get_logger("svc").time_format(),
            &TimestampFormat::from("%H:%M")
        );
    }

    #[test]
    fn test_setting_root_changes_everyone_unconfigured() {
        let registry = Registry::new();
        registry.set_level("pinned", Priority::Info).unwrap();
        registry.set_level(".", Priority::Critical).unwrap();

        assert_eq!(registry.get_level("anything.at.all"), Priority::Critical);
        assert_eq!(registry.get_level("pinned.child"), Priority::Info);
        assert_eq!(registry.configured_names(), vec![".", "pinned"]);
    }

    #[test]
    fn test_log_writes_with_descendant_name() {
        let (registry, buffer) = capture();
        registry.log("svc.worker", Priority::Warning, &[&"queue at ", &90, &"%"]);
        assert_eq!(buffer.contents(), "svc.worker - Warning - queue at 90%\n");
        assert_eq!(registry.metrics().written_count(), 1);
    }

    #[test]
    fn test_log_filters_below_threshold() {
        let (registry, buffer) = capture();
        registry.set_level("quiet", Priority::Error).unwrap();

        registry.log("quiet.child", Priority::Warning, &[&"dropped"]);
        registry.log("quiet", Priority::Debug, &[&"dropped"]);
        assert!(buffer.is_empty());
        assert_eq!(registry.metrics().written_count(), 0);

        registry.log("quiet.child", Priority::Error, &[&"kept"]);
        assert_eq!(buffer.contents(), "quiet.child - Error - kept\n");
    }

    #[test]
    fn test_disable_suppresses_everything() {
        let (registry, buffer) = capture();
        registry.set_level("off", Priority::Disable).unwrap();
        for priority in Priority::ALL {
            registry.log("off.deep", priority, &[&"x"]);
            registry.log("off", priority, &[&"x"]);
        }
        assert!(buffer.is_empty());

        // logging at Disable still passes a real threshold
        registry.log("on", Priority::Disable, &[&"x"]);
        assert_eq!(buffer.contents(), "on - Disabled - x\n");
    }

    #[test]
    fn test_set_output_redirects_subtree() {
        let (registry, root_buffer) = capture();
        let audit = SharedBuffer::new();
        registry.set_output("audit", audit.clone().into()).unwrap();

        registry.log("audit.login", Priority::Notice, &[&"alice"]);
        registry.log("app", Priority::Notice, &[&"started"]);

        assert_eq!(audit.contents(), "audit.login - Notice - alice\n");
        assert_eq!(root_buffer.contents(), "app - Notice - started\n");
        registry.flush().unwrap();
    }

    #[test]
    fn test_configure_is_all_or_nothing() {
        let registry = Registry::new();
        let bad = LoggerSettings {
            priority: Some(Priority::Debug),
            time_format: Some(TimestampFormat::from("%")),
            ..LoggerSettings::default()
        };
        assert!(registry.configure("svc", &bad).is_err());
        assert!(!registry.is_configured("svc"));

        let good = LoggerSettings {
            priority: Some(Priority::Debug),
            no_color: Some(true),
            ..LoggerSettings::default()
        };
        registry.configure("svc", &good).unwrap();
        let config = registry.get_logger("svc");
        assert_eq!(config.priority(), Priority::Debug);
        assert!(config.no_color());
    }

    #[test]
    fn test_builder_validates_time_format() {
        let result = Registry::builder().time_format("%Y-%").build();
        assert!(matches!(result, Err(LoggerError::InvalidTimeFormat { .. })));

        let registry = Registry::builder().format("{{Time").build().unwrap();
        assert_eq!(registry.get_logger("any").format().as_str(), "{{Time");
    }

    #[test]
    fn test_clones_share_state() {
        let registry = Registry::new();
        let clone = registry.clone();
        clone.set_level("shared", Priority::Alert).unwrap();
        assert_eq!(registry.get_level("shared.child"), Priority::Alert);
    }
}
