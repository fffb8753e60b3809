//! Shared pieces for scenarios: a recording sink and a page of spans.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use folio::domain::entities::{SECTION_ABOUT, SECTION_CONTACT, SECTION_PROJECTS, SECTION_SKILLS};
use folio::infrastructure::{ScrollViewport, SectionSpan};
use folio::{Portfolio, PortfolioEvent, PortfolioEventSink, Session, SessionOptions};

#[derive(Default)]
pub struct Recorder(Mutex<Vec<PortfolioEvent>>);

impl Recorder {
    pub fn events(&self) -> Vec<PortfolioEvent> {
        self.0.lock().unwrap().clone()
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.0.lock().unwrap().iter().map(|e| e.name()).collect()
    }

    pub fn count(&self, name: &str) -> usize {
        self.names().into_iter().filter(|n| *n == name).count()
    }
}

impl PortfolioEventSink for Recorder {
    fn on_event(&self, event: PortfolioEvent) {
        self.0.lock().unwrap().push(event);
    }
}

pub fn ms(v: u64) -> Duration {
    Duration::from_millis(v)
}

/// 100-row page, 20-row window: only the about section starts on screen.
pub fn viewport() -> ScrollViewport {
    ScrollViewport::new(
        vec![
            SectionSpan::new(SECTION_ABOUT, 4, 12),
            SectionSpan::new(SECTION_PROJECTS, 20, 36),
            SectionSpan::new(SECTION_SKILLS, 60, 6),
            SectionSpan::new(SECTION_CONTACT, 70, 26),
        ],
        100,
        20,
    )
}

pub fn session(recorder: &Arc<Recorder>) -> Session {
    let options = SessionOptions {
        seed: Some(7),
        ..SessionOptions::default()
    };
    Session::new(Portfolio::builtin(), options, recorder.clone())
}
