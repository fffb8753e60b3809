//! Visibility Tracker
//!
//! Records, once per section, the first time a registered anchor becomes
//! sufficiently visible in the viewport. Membership only grows.
//!
//! The host either pushes intersection events ([`VisibilityTracker::on_intersection`])
//! or lets the tracker sample an injected [`Viewport`] ([`VisibilityTracker::observe`]).

use std::collections::{BTreeSet, HashMap};
use std::sync::Arc;

use crate::domain::ports::{PortfolioEvent, PortfolioEventSink, Viewport};
use crate::domain::value_objects::{SectionId, VisibilityThreshold};

pub struct VisibilityTracker {
    threshold: VisibilityThreshold,
    registered: BTreeSet<SectionId>,
    /// Observed anchors in page order
    observed: Vec<SectionId>,
    last_ratio: HashMap<SectionId, f32>,
    visible: BTreeSet<SectionId>,
    reveal_order: Vec<SectionId>,
    active: bool,
    sink: Arc<dyn PortfolioEventSink>,
}

impl VisibilityTracker {
    pub fn new(threshold: VisibilityThreshold, sink: Arc<dyn PortfolioEventSink>) -> Self {
        Self {
            threshold,
            registered: BTreeSet::new(),
            observed: Vec::new(),
            last_ratio: HashMap::new(),
            visible: BTreeSet::new(),
            reveal_order: Vec::new(),
            active: false,
            sink,
        }
    }

    /// A section anchor was rendered.
    pub fn register(&mut self, id: impl Into<SectionId>) {
        self.registered.insert(id.into());
    }

    /// A section anchor was unmounted. Its reveal, if any, is kept.
    pub fn unregister(&mut self, id: &str) {
        self.registered.remove(id);
        self.last_ratio.remove(id);
    }

    pub fn is_registered(&self, id: &str) -> bool {
        self.registered.contains(id)
    }

    /// Start observing the given sections, in the order given. Re-activating
    /// replaces the set; duplicates are dropped.
    pub fn activate<I>(&mut self, ids: I)
    where
        I: IntoIterator,
        I::Item: Into<SectionId>,
    {
        self.observed.clear();
        for id in ids {
            let id = id.into();
            if !self.observed.contains(&id) {
                self.observed.push(id);
            }
        }
        self.last_ratio.clear();
        self.active = true;
        tracing::debug!(sections = self.observed.len(), threshold = %self.threshold, "visibility tracking active");
        self.sink.on_event(PortfolioEvent::TrackerActivated {
            sections: self.observed.iter().cloned().collect(),
        });
    }

    /// Stop all observation and release its state. Safe to call repeatedly.
    pub fn deactivate(&mut self) {
        if !self.active {
            return;
        }
        self.active = false;
        self.observed.clear();
        self.last_ratio.clear();
        self.sink.on_event(PortfolioEvent::TrackerDeactivated {
            revealed: self.visible.len(),
        });
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Feed one intersection sample. Returns true if `id` was revealed by it.
    ///
    /// Only a crossing from below the threshold to at-or-above counts; ids not
    /// both observed and registered, and samples while inactive, are ignored.
    pub fn on_intersection(&mut self, id: &str, ratio: f32) -> bool {
        if !self.active || !self.observes(id) || !self.registered.contains(id) {
            return false;
        }

        let ratio = if ratio.is_nan() { 0.0 } else { ratio.clamp(0.0, 1.0) };
        let previous = self.last_ratio.get(id).copied().unwrap_or(0.0);
        let key = SectionId::from(id);
        self.last_ratio.insert(key.clone(), ratio);

        let crossed = !self.threshold.is_met_by(previous) && self.threshold.is_met_by(ratio);
        if !crossed || self.visible.contains(id) {
            return false;
        }

        self.visible.insert(key.clone());
        self.reveal_order.push(key.clone());
        tracing::debug!(section = %key, ratio, "section revealed");
        self.sink.on_event(PortfolioEvent::SectionRevealed {
            section: key,
            ratio,
        });
        true
    }

    /// Sample every observed anchor from `viewport`. Returns the sections
    /// revealed by this pass, in page order.
    pub fn observe<V: Viewport + ?Sized>(&mut self, viewport: &V) -> Vec<SectionId> {
        if !self.active {
            return Vec::new();
        }

        let observed: Vec<SectionId> = self.observed.iter().cloned().collect();
        let mut revealed = Vec::new();
        for id in observed {
            let ratio = viewport.intersection_ratio(&id).unwrap_or(0.0);
            if self.on_intersection(id.as_str(), ratio) {
                revealed.push(id);
            }
        }
        revealed
    }

    fn observes(&self, id: &str) -> bool {
        self.observed.iter().any(|o| o.as_str() == id)
    }

    pub fn is_visible(&self, id: &str) -> bool {
        self.visible.contains(id)
    }

    pub fn visible_count(&self) -> usize {
        self.visible.len()
    }

    /// Revealed sections in the order they were revealed.
    pub fn reveal_order(&self) -> &[SectionId] {
        &self.reveal_order
    }

    pub fn threshold(&self) -> VisibilityThreshold {
        self.threshold
    }
}

impl std::fmt::Debug for VisibilityTracker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VisibilityTracker")
            .field("active", &self.active)
            .field("observed", &self.observed)
            .field("visible", &self.visible)
            .finish()
    }
}
