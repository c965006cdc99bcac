//! Structured JSON logging
//!
//! - Structured logs (JSON), one line per event
//! - Deterministic key ordering
//! - Explicit severity levels
//! - Synchronous, no buffering
//!
//! The sink is injected into whoever needs to log; there is no process-wide
//! logger state.

use std::fmt;
use std::io::{self, Write};
use std::sync::Mutex;

/// Log severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    /// Debug-level detail
    Trace = 0,
    /// Normal operations
    Info = 1,
    /// Recoverable issues
    Warn = 2,
    /// Operation failures
    Error = 3,
}

impl Severity {
    /// Returns the string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Trace => "TRACE",
            Severity::Info => "INFO",
            Severity::Warn => "WARN",
            Severity::Error => "ERROR",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A destination for structured log events.
///
/// Implementations must be safe to share between threads; the query parser
/// borrows a sink and logs through it without synchronizing itself.
pub trait LogSink: Send + Sync {
    /// Record one event with the given severity and fields.
    fn log(&self, severity: Severity, event: &str, fields: &[(&str, &str)]);
}

/// Formats one event as a single JSON line.
///
/// The event key comes first, then severity, then the remaining fields in
/// alphabetical order so output is deterministic.
pub fn format_line(severity: Severity, event: &str, fields: &[(&str, &str)]) -> String {
    let mut output = String::with_capacity(256);

    output.push('{');
    output.push_str("\"event\":\"");
    escape_json_string(&mut output, event);
    output.push('"');

    output.push_str(",\"severity\":\"");
    output.push_str(severity.as_str());
    output.push('"');

    let mut sorted_fields: Vec<_> = fields.iter().collect();
    sorted_fields.sort_by_key(|(k, _)| *k);

    for (key, value) in sorted_fields {
        output.push_str(",\"");
        escape_json_string(&mut output, key);
        output.push_str("\":\"");
        escape_json_string(&mut output, value);
        output.push('"');
    }

    output.push('}');
    output.push('\n');
    output
}

/// Escape special characters for JSON strings
fn escape_json_string(output: &mut String, s: &str) {
    for c in s.chars() {
        match c {
            '"' => output.push_str("\\\""),
            '\\' => output.push_str("\\\\"),
            '\n' => output.push_str("\\n"),
            '\r' => output.push_str("\\r"),
            '\t' => output.push_str("\\t"),
            c if c.is_control() => {
                output.push_str(&format!("\\u{:04x}", c as u32));
            }
            c => output.push(c),
        }
    }
}

/// Sink writing JSON lines to stdout (stderr for errors).
#[derive(Debug, Default)]
pub struct JsonLogger;

impl JsonLogger {
    /// Create a stdout/stderr JSON logger.
    pub fn new() -> Self {
        Self
    }
}

impl LogSink for JsonLogger {
    fn log(&self, severity: Severity, event: &str, fields: &[(&str, &str)]) {
        let line = format_line(severity, event, fields);
        // Write atomically (one syscall)
        if severity >= Severity::Error {
            let _ = io::stderr().write_all(line.as_bytes());
            let _ = io::stderr().flush();
        } else {
            let _ = io::stdout().write_all(line.as_bytes());
            let _ = io::stdout().flush();
        }
    }
}

/// Sink that discards everything.
#[derive(Debug, Default)]
pub struct NullSink;

impl LogSink for NullSink {
    fn log(&self, _severity: Severity, _event: &str, _fields: &[(&str, &str)]) {}
}

/// Sink that retains formatted lines in memory, for assertions in tests.
#[derive(Debug, Default)]
pub struct MemorySink {
    lines: Mutex<Vec<String>>,
}

impl MemorySink {
    /// Create an empty in-memory sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// All recorded lines, in order.
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().map(|l| l.clone()).unwrap_or_default()
    }
}

impl LogSink for MemorySink {
    fn log(&self, severity: Severity, event: &str, fields: &[(&str, &str)]) {
        if let Ok(mut lines) = self.lines.lock() {
            lines.push(format_line(severity, event, fields));
        }
    }
}
