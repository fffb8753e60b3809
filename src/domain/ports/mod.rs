//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod link_opener;
pub mod portfolio_events;
pub mod viewport;

pub use link_opener::LinkOpener;
pub use portfolio_events::{NoopEventSink, PortfolioEvent, PortfolioEventSink};
pub use viewport::Viewport;
