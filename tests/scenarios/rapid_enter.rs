//! Scenario: Impatient Visitor
//!
//! Journey: a visitor mashes enter from the first frame, and another leaves
//! while the welcome screen is fading out.
//!
//! Success Criteria:
//! - Presses during loading are ignored and reported
//! - Exactly one press is accepted; Main arrives once, enter_delay later
//! - Unmounting with a transition pending cancels it cleanly

use std::sync::Arc;

use folio::{PortfolioEvent, Stage};

use crate::support::*;

/// SCENARIO: enter is pressed every 100ms from mount
#[test]
fn scenario_enter_mashing_is_accepted_once() {
    let recorder = Arc::new(Recorder::default());
    let viewport = viewport();
    let mut session = session(&recorder);
    session.mount(ms(0));

    let mut accepted_at = Vec::new();
    for t in (0..=6_000).step_by(100) {
        session.advance(ms(t), &viewport);
        if session.enter_site(ms(t)) {
            accepted_at.push(t);
        }
    }

    assert_eq!(accepted_at, vec![4_500]);
    assert_eq!(session.stage(), Stage::Main);
    assert_eq!(recorder.count("enter_accepted"), 1);

    let ignored_in_loading = recorder
        .events()
        .iter()
        .filter(|e| matches!(e, PortfolioEvent::EnterIgnored { stage: Stage::Loading, .. }))
        .count();
    assert_eq!(ignored_in_loading, 45);

    let to_main: Vec<u64> = recorder
        .events()
        .iter()
        .filter_map(|e| match e {
            PortfolioEvent::StageChanged {
                to: Stage::Main,
                elapsed_ms,
                ..
            } => Some(*elapsed_ms),
            _ => None,
        })
        .collect();
    assert_eq!(to_main, vec![4_800]);
}

/// SCENARIO: the page closes during the welcome fade-out
#[test]
fn scenario_unmount_during_transition() {
    let recorder = Arc::new(Recorder::default());
    let viewport = viewport();
    let mut session = session(&recorder);
    session.mount(ms(0));

    session.advance(ms(4_500), &viewport);
    assert!(session.enter_site(ms(4_600)));
    session.shutdown();

    let frame = session.advance(ms(10_000), &viewport);
    assert!(frame.is_idle());
    assert_eq!(session.stage(), Stage::Welcome);
    assert_eq!(session.next_deadline(), None);
    assert_eq!(recorder.count("shutdown"), 1);
    assert_eq!(recorder.count("tracker_activated"), 0);
}
