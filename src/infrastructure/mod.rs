//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `events/` - Event sinks (JSON, console, tracing)
//! - `viewport` - Row-based scroll viewport
//! - `opener` - Platform link opener

pub mod events;
pub mod opener;
pub mod viewport;

pub use events::{ConsoleEventSink, JsonEventSink, TracingEventSink};
pub use opener::SystemLinkOpener;
pub use viewport::{ScrollViewport, SectionSpan};
