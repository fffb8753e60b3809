//! Property tests for scroll-reveal tracking.

use std::sync::Arc;

use proptest::prelude::*;

use folio::domain::ports::NoopEventSink;
use folio::{VisibilityThreshold, VisibilityTracker};

const IDS: [&str; 4] = ["sobre-mi", "proyectos", "skills", "contacto"];

fn threshold() -> impl Strategy<Value = VisibilityThreshold> {
    (0.01f32..=1.0).prop_map(|t| VisibilityThreshold::new(t).unwrap())
}

fn sample() -> impl Strategy<Value = (usize, f32)> {
    (0..IDS.len(), prop_oneof![Just(0.0f32), Just(1.0f32), 0.0f32..=1.0])
}

fn tracker(threshold: VisibilityThreshold) -> VisibilityTracker {
    let mut tracker = VisibilityTracker::new(threshold, Arc::new(NoopEventSink));
    for id in IDS {
        tracker.register(id);
    }
    tracker.activate(IDS);
    tracker
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: a section is visible iff some sample met the threshold, and
    /// once visible it stays visible.
    #[test]
    fn property_visible_iff_threshold_met(
        threshold in threshold(),
        samples in proptest::collection::vec(sample(), 0..60),
    ) {
        let mut tracker = tracker(threshold);
        let mut met = [false; IDS.len()];

        for (index, ratio) in samples {
            let was_visible = tracker.is_visible(IDS[index]);
            let revealed = tracker.on_intersection(IDS[index], ratio);

            prop_assert!(!(was_visible && revealed), "revealed twice");
            met[index] |= threshold.is_met_by(ratio);
            for (i, id) in IDS.iter().enumerate() {
                prop_assert_eq!(tracker.is_visible(id), met[i]);
            }
        }

        prop_assert_eq!(tracker.visible_count(), met.iter().filter(|m| **m).count());
        prop_assert_eq!(tracker.reveal_order().len(), tracker.visible_count());
    }

    /// PROPERTY: samples after deactivation change nothing.
    #[test]
    fn property_deactivated_tracker_ignores_samples(
        threshold in threshold(),
        samples in proptest::collection::vec(sample(), 0..30),
    ) {
        let mut tracker = tracker(threshold);
        tracker.deactivate();

        for (index, ratio) in samples {
            prop_assert!(!tracker.on_intersection(IDS[index], ratio));
        }
        prop_assert_eq!(tracker.visible_count(), 0);
    }
}
