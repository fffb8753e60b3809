//! Tracing Event Sink
//!
//! Forwards portfolio events to `tracing`, for hosts that draw their own
//! screen and only want events in the log.

use crate::domain::ports::{PortfolioEvent, PortfolioEventSink};

use super::console::describe;

#[derive(Debug, Default, Clone, Copy)]
pub struct TracingEventSink;

impl PortfolioEventSink for TracingEventSink {
    fn on_event(&self, event: PortfolioEvent) {
        tracing::debug!(target: "folio::events", event = event.name(), "{}", describe(&event));
    }
}
