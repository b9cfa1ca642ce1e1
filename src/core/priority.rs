//! Priority definitions

use super::error::{LoggerError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Severity of a log message, ordered from least to most severe.
///
/// `Disable` sits above every real severity: a logger whose threshold is
/// `Disable` emits nothing.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
pub enum Priority {
    Debug = 0,
    Info = 1,
    #[default]
    Notice = 2,
    Warning = 3,
    Error = 4,
    Critical = 5,
    Alert = 6,
    Emergency = 7,
    #[serde(rename = "Disabled")]
    Disable = 8,
}

/// Text attribute applied in front of the color when printing a priority
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextStyle {
    Normal,
    Bold,
    Blink,
}

impl TextStyle {
    /// SGR parameter for this style
    pub fn code(&self) -> u8 {
        match self {
            TextStyle::Normal => 0,
            TextStyle::Bold => 1,
            TextStyle::Blink => 5,
        }
    }
}

impl Priority {
    /// Threshold of the root logger when nothing else is configured
    pub const DEFAULT: Priority = Priority::Notice;

    /// Every priority in ascending order, sentinel included
    pub const ALL: [Priority; 9] = [
        Priority::Debug,
        Priority::Info,
        Priority::Notice,
        Priority::Warning,
        Priority::Error,
        Priority::Critical,
        Priority::Alert,
        Priority::Emergency,
        Priority::Disable,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Priority::Debug => "Debug",
            Priority::Info => "Info",
            Priority::Notice => "Notice",
            Priority::Warning => "Warning",
            Priority::Error => "Error",
            Priority::Critical => "Critical",
            Priority::Alert => "Alert",
            Priority::Emergency => "Emergency",
            Priority::Disable => "Disabled",
        }
    }

    pub fn value(&self) -> u8 {
        *self as u8
    }

    /// Foreground color used when colors are enabled; `None` prints plain
    pub fn color(&self) -> Option<colored::Color> {
        use colored::Color::*;
        match self {
            Priority::Debug | Priority::Disable => None,
            Priority::Info => Some(Green),
            Priority::Notice => Some(Blue),
            Priority::Warning => Some(Yellow),
            Priority::Error | Priority::Critical | Priority::Alert | Priority::Emergency => {
                Some(Red)
            }
        }
    }

    pub fn style(&self) -> TextStyle {
        match self {
            Priority::Critical | Priority::Alert => TextStyle::Bold,
            Priority::Emergency => TextStyle::Blink,
            _ => TextStyle::Normal,
        }
    }
}

/// Look up a priority by its exact, case-sensitive display name.
pub fn parse_priority(name: &str) -> Result<Priority> {
    Priority::ALL
        .iter()
        .copied()
        .find(|p| p.name() == name)
        .ok_or_else(|| LoggerError::priority_not_found(name))
}

/// Validate a raw priority value against the declared scale.
pub fn check_priority(value: i64) -> Result<Priority> {
    Priority::ALL
        .iter()
        .copied()
        .find(|p| i64::from(p.value()) == value)
        .ok_or_else(|| LoggerError::priority_does_not_exist(value))
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Priority {
    type Err = LoggerError;

    fn from_str(s: &str) -> Result<Self> {
        parse_priority(s)
    }
}

impl TryFrom<i64> for Priority {
    type Error = LoggerError;

    fn try_from(value: i64) -> Result<Self> {
        check_priority(value)
    }
}

/// Anything a setter accepts as a priority: the enum itself, a raw value or
/// a display name. Raw values and names are validated.
pub trait IntoPriority {
    fn into_priority(self) -> Result<Priority>;
}

impl IntoPriority for Priority {
    fn into_priority(self) -> Result<Priority> {
        Ok(self)
    }
}

impl IntoPriority for i64 {
    fn into_priority(self) -> Result<Priority> {
        check_priority(self)
    }
}

impl IntoPriority for i32 {
    fn into_priority(self) -> Result<Priority> {
        check_priority(i64::from(self))
    }
}

impl IntoPriority for u8 {
    fn into_priority(self) -> Result<Priority> {
        check_priority(i64::from(self))
    }
}

impl IntoPriority for &str {
    fn into_priority(self) -> Result<Priority> {
        parse_priority(self)
    }
}

impl IntoPriority for String {
    fn into_priority(self) -> Result<Priority> {
        parse_priority(&self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordering_follows_declaration() {
        for pair in Priority::ALL.windows(2) {
            assert!(pair[0] < pair[1], "{} should sort below {}", pair[0], pair[1]);
        }
        assert!(Priority::Emergency < Priority::Disable);
    }

    #[test]
    fn test_check_priority_accepts_declared() {
        for p in Priority::ALL {
            assert_eq!(check_priority(i64::from(p.value())).unwrap(), p);
        }
    }

    #[test]
    fn test_check_priority_rejects_out_of_range() {
        let past_sentinel = i64::from(Priority::Disable.value()) + 1;
        let err = check_priority(past_sentinel).unwrap_err();
        assert_eq!(err.to_string(), "priority does not exist");

        assert!(check_priority(-1).is_err());
        assert!(check_priority(i64::MAX).is_err());
    }

    #[test]
    fn test_parse_priority() {
        assert_eq!(parse_priority("Warning").unwrap(), Priority::Warning);
        assert_eq!(parse_priority("Disabled").unwrap(), Priority::Disable);
        assert_eq!("Emergency".parse::<Priority>().unwrap(), Priority::Emergency);

        // names are case-sensitive
        assert!(parse_priority("warning").is_err());
        assert!(parse_priority("").is_err());
    }

    #[test]
    fn test_names_are_unique() {
        let mut names: Vec<_> = Priority::ALL.iter().map(Priority::name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), Priority::ALL.len());
    }

    #[test]
    fn test_into_priority() {
        assert_eq!(Priority::Info.into_priority().unwrap(), Priority::Info);
        assert_eq!(3i32.into_priority().unwrap(), Priority::Warning);
        assert_eq!("Alert".into_priority().unwrap(), Priority::Alert);
        assert!(9u8.into_priority().is_err());
        assert!(String::from("Loud").into_priority().is_err());
    }

    #[test]
    fn test_default_is_notice() {
        assert_eq!(Priority::default(), Priority::Notice);
        assert_eq!(Priority::DEFAULT, Priority::Notice);
    }

    #[test]
    fn test_color_policy() {
        assert_eq!(Priority::Debug.color(), None);
        assert_eq!(Priority::Warning.color(), Some(colored::Color::Yellow));
        assert_eq!(Priority::Error.color(), Some(colored::Color::Red));
        assert_eq!(Priority::Emergency.style(), TextStyle::Blink);
        assert_eq!(Priority::Critical.style().code(), 1);
    }
}
