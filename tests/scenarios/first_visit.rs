//! Scenario: First Visit
//!
//! Journey: a visitor opens the portfolio, waits through the loading bar,
//! presses enter on the welcome screen and scrolls to the contact form.
//!
//! Success Criteria:
//! - Loading runs 0 -> 100 in steps, then Welcome, then Main after enter
//! - Sections reveal in the order they scroll into view, once each
//! - The starfield runs while Main is shown and is gone after unmount

use std::sync::Arc;

use folio::domain::entities::{SECTION_ABOUT, SECTION_CONTACT, SECTION_PROJECTS, SECTION_SKILLS};
use folio::{PortfolioEvent, SectionId, Stage};

use crate::support::*;

/// SCENARIO: visitor walks the whole page
#[test]
fn scenario_first_visit_reveals_page_in_scroll_order() {
    let recorder = Arc::new(Recorder::default());
    let mut viewport = viewport();
    let mut session = session(&recorder);
    session.mount(ms(0));

    let mut seen_progress = Vec::new();
    for t in (0..=4_500).step_by(100) {
        session.advance(ms(t), &viewport);
        seen_progress.push(session.progress().value());
    }
    seen_progress.dedup();
    assert_eq!(seen_progress, vec![0, 20, 40, 60, 80, 100]);
    assert_eq!(session.stage(), Stage::Welcome);
    assert_eq!(session.tracker().visible_count(), 0, "nothing reveals before Main");

    assert!(session.enter_site(ms(6_000)));
    assert!(!session.is_loading_active());
    let frame = session.advance(ms(6_300), &viewport);
    assert_eq!(session.stage(), Stage::Main);
    assert_eq!(frame.revealed, vec![SectionId::from(SECTION_ABOUT)]);
    assert!(session.starfield().is_some_and(|f| f.is_running()));

    let mut now = 6_300;
    while viewport.offset() < viewport.max_offset() {
        viewport.scroll_by(5);
        now += 100;
        session.advance(ms(now), &viewport);
    }

    let order: Vec<&str> = session
        .tracker()
        .reveal_order()
        .iter()
        .map(|s| s.as_str())
        .collect();
    assert_eq!(
        order,
        vec![SECTION_ABOUT, SECTION_PROJECTS, SECTION_SKILLS, SECTION_CONTACT]
    );
    assert_eq!(recorder.count("section_revealed"), 4);

    viewport.scroll_to(0);
    session.advance(ms(now + 100), &viewport);
    assert_eq!(recorder.count("section_revealed"), 4, "scrolling back reveals nothing new");

    assert!(session.starfield().is_some_and(|f| !f.is_empty()));
    drop(session);

    let events = recorder.events();
    assert!(matches!(
        events.last(),
        Some(PortfolioEvent::Shutdown { .. })
    ));
    assert_eq!(recorder.count("tracker_deactivated"), 1);
}

/// SCENARIO: visitor never scrolls; only what was on screen reveals
#[test]
fn scenario_visitor_stays_at_top() {
    let recorder = Arc::new(Recorder::default());
    let viewport = viewport();
    let mut session = session(&recorder);
    session.mount(ms(0));

    session.advance(ms(4_500), &viewport);
    session.enter_site(ms(4_500));
    for t in (4_500..=20_000).step_by(250) {
        session.advance(ms(t), &viewport);
    }

    assert!(session.is_visible(SECTION_ABOUT));
    assert!(!session.is_visible(SECTION_PROJECTS));
    assert_eq!(session.tracker().visible_count(), 1);
}
