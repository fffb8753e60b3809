//! Event Sink Implementations
//!
//! Concrete implementations of PortfolioEventSink:
//! - JsonEventSink: NDJSON output for scripts
//! - ConsoleEventSink: human-readable lines
//! - TracingEventSink: events into the log

mod console;
mod json;
mod trace;

pub use console::{describe, ConsoleEventSink};
pub use json::JsonEventSink;
pub use trace::TracingEventSink;
