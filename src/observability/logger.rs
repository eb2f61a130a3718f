//! Structured JSON logger
//!
//! - One line per event
//! - Keys in sorted order, `event` and `severity` always present
//! - Synchronous, no buffering
//! - WARN and above go to stderr

use std::fmt;
use std::io::{self, Write};

use serde_json::{Map, Value};

use super::events::Event;

/// Log severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    /// Normal operations
    Info,
    /// Recoverable issues
    Warn,
    /// Operation failures
    Error,
    /// Unrecoverable, process exits
    Fatal,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Info => "INFO",
            Severity::Warn => "WARN",
            Severity::Error => "ERROR",
            Severity::Fatal => "FATAL",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A structured logger that outputs JSON lines
pub struct Logger;

impl Logger {
    /// Log an event with the given severity and fields
    pub fn log(severity: Severity, event: Event, fields: &[(&str, &str)]) {
        let line = Self::format_line(severity, event, fields);
        // Logging must never take a request down with it.
        let _ = if severity >= Severity::Warn {
            Self::write_line(&mut io::stderr().lock(), &line)
        } else {
            Self::write_line(&mut io::stdout().lock(), &line)
        };
    }

    pub fn info(event: Event, fields: &[(&str, &str)]) {
        Self::log(Severity::Info, event, fields);
    }

    pub fn warn(event: Event, fields: &[(&str, &str)]) {
        Self::log(Severity::Warn, event, fields);
    }

    pub fn error(event: Event, fields: &[(&str, &str)]) {
        Self::log(Severity::Error, event, fields);
    }

    pub fn fatal(event: Event, fields: &[(&str, &str)]) {
        Self::log(Severity::Fatal, event, fields);
    }

    /// Render one log line, without the trailing newline.
    ///
    /// A field named `event` or `severity` cannot override the header.
    pub fn format_line(severity: Severity, event: Event, fields: &[(&str, &str)]) -> String {
        let mut map = Map::new();
        for (key, value) in fields {
            map.insert((*key).to_string(), Value::from(*value));
        }
        map.insert("event".into(), Value::from(event.as_str()));
        map.insert("severity".into(), Value::from(severity.as_str()));
        Value::Object(map).to_string()
    }

    fn write_line<W: Write>(writer: &mut W, line: &str) -> io::Result<()> {
        writer.write_all(line.as_bytes())?;
        writer.write_all(b"\n")?;
        writer.flush()
    }
}
