//! Portfolio Event Port
//!
//! Push side of the contract between the core and whatever renders it.
//! Hosts that prefer polling can ignore events and read state each frame.

use serde::Serialize;

use crate::domain::value_objects::{SectionId, Stage};

/// Event emitted by the stage controller and the visibility tracker
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum PortfolioEvent {
    /// Progress timer armed
    LoadingStarted { elapsed_ms: u64 },

    /// Progress timer ticked
    ProgressAdvanced { progress: u8, elapsed_ms: u64 },

    /// Stage moved forward
    StageChanged {
        from: Stage,
        to: Stage,
        elapsed_ms: u64,
    },

    /// Visitor entered the site; `Welcome -> Main` is now scheduled
    EnterAccepted { elapsed_ms: u64 },

    /// Enter requested at the wrong time (double activation, wrong stage)
    EnterIgnored { stage: Stage, elapsed_ms: u64 },

    /// Observation started
    TrackerActivated { sections: Vec<SectionId> },

    /// A section crossed the visibility threshold for the first time
    SectionRevealed { section: SectionId, ratio: f32 },

    /// Observation released
    TrackerDeactivated { revealed: usize },

    /// Session torn down
    Shutdown { elapsed_ms: u64 },
}

impl PortfolioEvent {
    /// Event name as it appears in the `event` field of the JSON form.
    pub fn name(&self) -> &'static str {
        match self {
            PortfolioEvent::LoadingStarted { .. } => "loading_started",
            PortfolioEvent::ProgressAdvanced { .. } => "progress_advanced",
            PortfolioEvent::StageChanged { .. } => "stage_changed",
            PortfolioEvent::EnterAccepted { .. } => "enter_accepted",
            PortfolioEvent::EnterIgnored { .. } => "enter_ignored",
            PortfolioEvent::TrackerActivated { .. } => "tracker_activated",
            PortfolioEvent::SectionRevealed { .. } => "section_revealed",
            PortfolioEvent::TrackerDeactivated { .. } => "tracker_deactivated",
            PortfolioEvent::Shutdown { .. } => "shutdown",
        }
    }
}

/// Trait for receiving portfolio events
///
/// Implementations:
/// - `JsonEventSink`: NDJSON stream (`folio timeline --json`)
/// - `ConsoleEventSink`: human-readable lines
/// - `TracingEventSink`: forwards to `tracing`
/// - `NoopEventSink`: silent operation
pub trait PortfolioEventSink: Send + Sync {
    /// Handle an event
    fn on_event(&self, event: PortfolioEvent);
}

/// No-op event sink for silent operation
pub struct NoopEventSink;

impl PortfolioEventSink for NoopEventSink {
    fn on_event(&self, _event: PortfolioEvent) {}
}
