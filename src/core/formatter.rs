//! Message templates and priority coloring
//!
//! A template is plain text with four placeholders, `{{Time}}`, `{{Logger}}`,
//! `{{Priority}}` and `{{Message}}`. Substitution is literal: field values are
//! inserted verbatim and text that is not a placeholder is copied as-is. The
//! older `{{.Time}}` spelling is accepted for every field.
//!
//! Templates are parsed once when they are stored, so rendering is a single
//! pass over precomputed segments. Parsing never fails: anything that is not
//! one of the placeholders, unmatched braces included, is literal text.

use super::priority::Priority;
use super::record::LogRecord;
use once_cell::sync::Lazy;
use std::convert::Infallible;
use std::fmt::{self, Write};

/// Template of the root logger. The trailing newline is part of the
/// template; outputs never append one.
pub const DEFAULT_FORMAT: &str = "[{{Time}} {{Priority}} {{Logger}}] - {{Message}}.\n";

static DEFAULT_TEMPLATE: Lazy<Template> = Lazy::new(|| Template::parse(DEFAULT_FORMAT));

/// Record field a placeholder refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Time,
    Logger,
    Priority,
    Message,
}

const PLACEHOLDERS: [(&str, Field); 8] = [
    ("{{Time}}", Field::Time),
    ("{{Logger}}", Field::Logger),
    ("{{Priority}}", Field::Priority),
    ("{{Message}}", Field::Message),
    ("{{.Time}}", Field::Time),
    ("{{.Logger}}", Field::Logger),
    ("{{.Priority}}", Field::Priority),
    ("{{.Message}}", Field::Message),
];

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Field(Field),
}

/// A parsed message template
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    source: String,
    segments: Vec<Segment>,
}

impl Template {
    /// Parse a template.
    ///
    /// Unknown `{{...}}` tokens and unmatched braces are kept as literal text.
    ///
    /// # Examples
    ///
    /// ```
    /// use rust_hierarchical_logger::{LogRecord, Template};
    ///
    /// let template = Template::parse("{{Logger}} - {{Priority}} - {{Message}}");
    /// let record = LogRecord::new("Test", "Debug", "Test");
    /// assert_eq!(template.render(&record), "Test - Debug - Test");
    ///
    /// let raw = Template::parse("{{Message}} {{ raw");
    /// assert_eq!(raw.render(&record), "Test {{ raw");
    /// ```
    pub fn parse(source: &str) -> Self {
        let mut segments = Vec::new();
        let mut literal = String::new();
        let mut pos = 0;

        while pos < source.len() {
            let rest = &source[pos..];

            if let Some((token, field)) = PLACEHOLDERS
                .iter()
                .find(|(token, _)| rest.starts_with(token))
            {
                if !literal.is_empty() {
                    segments.push(Segment::Literal(std::mem::take(&mut literal)));
                }
                segments.push(Segment::Field(*field));
                pos += token.len();
                continue;
            }

            // pos always sits on a char boundary, rest is non-empty
            let ch = rest.chars().next().unwrap_or_default();
            literal.push(ch);
            pos += ch.len_utf8();
        }

        if !literal.is_empty() {
            segments.push(Segment::Literal(literal));
        }

        Self {
            source: source.to_string(),
            segments,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Whether the template contains a placeholder for `field`
    pub fn uses(&self, field: Field) -> bool {
        self.segments
            .iter()
            .any(|segment| matches!(segment, Segment::Field(f) if *f == field))
    }

    /// Substitute every placeholder with the matching record field
    #[must_use]
    pub fn render(&self, record: &LogRecord) -> String {
        let mut out = String::with_capacity(self.source.len() + record.message.len());
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Field(Field::Time) => out.push_str(&record.time),
                Segment::Field(Field::Logger) => out.push_str(&record.logger),
                Segment::Field(Field::Priority) => out.push_str(&record.priority),
                Segment::Field(Field::Message) => out.push_str(&record.message),
            }
        }
        out
    }
}

impl Default for Template {
    /// The root layout, [`DEFAULT_FORMAT`]
    fn default() -> Self {
        DEFAULT_TEMPLATE.clone()
    }
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

impl std::str::FromStr for Template {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Template::parse(s))
    }
}

/// Render `record` through `template`.
#[must_use]
pub fn format_message(record: &LogRecord, template: &Template) -> String {
    template.render(record)
}

/// Render a priority name, wrapped in its style and color escape sequences
/// unless `no_color` is set.
#[must_use]
pub fn format_priority(priority: Priority, no_color: bool) -> String {
    if no_color {
        return priority.name().to_string();
    }

    let mut out = String::with_capacity(priority.name().len() + 16);
    // Writing to a String cannot fail
    let _ = write!(out, "\x1b[{}m", priority.style().code());
    if let Some(color) = priority.color() {
        let _ = write!(out, "\x1b[{}m", color.to_fg_str());
    }
    out.push_str(priority.name());
    out.push_str("\x1b[0m");
    out
}
