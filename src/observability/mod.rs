//! Observability subsystem
//!
//! Structured JSON logging behind an injected sink.
//!
//! # Principles
//!
//! 1. Observability is read-only
//! 2. No side effects on parsing
//! 3. No async or background threads
//! 4. Deterministic output
//! 5. No process-global logger state; sinks are passed in

mod logger;

pub use logger::{format_line, JsonLogger, LogSink, MemorySink, NullSink, Severity};
