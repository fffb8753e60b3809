//! Portfolio Session
//!
//! Glue between the stage controller, the visibility tracker and the
//! starfield. A host mounts one session per page view, feeds it the elapsed
//! time and a viewport every frame, and reads back what to draw.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::domain::entities::Portfolio;
use crate::domain::ports::{PortfolioEvent, PortfolioEventSink, Viewport};
use crate::domain::services::{
    millis, StageController, StageTiming, Starfield, StarfieldSettings, VisibilityTracker,
};
use crate::domain::value_objects::{LoadingProgress, SectionId, Stage, VisibilityThreshold};

/// Options for a session
#[derive(Debug, Clone)]
pub struct SessionOptions {
    pub timing: StageTiming,
    pub threshold: VisibilityThreshold,
    /// Length of the reveal transition; zero reveals instantly
    pub fade: Duration,
    /// `None` disables the starfield
    pub stars: Option<StarfieldSettings>,
    /// Fixed seed for the starfield RNG (reproducible frames)
    pub seed: Option<u64>,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            timing: StageTiming::default(),
            threshold: VisibilityThreshold::default(),
            fade: Duration::from_millis(700),
            stars: Some(StarfieldSettings::default()),
            seed: None,
        }
    }
}

/// What changed during one `advance` call
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Frame {
    /// Stage or loading progress moved
    pub changed: bool,
    pub revealed: Vec<SectionId>,
}

impl Frame {
    pub fn is_idle(&self) -> bool {
        !self.changed && self.revealed.is_empty()
    }
}

pub struct Session {
    portfolio: Portfolio,
    options: SessionOptions,
    controller: StageController,
    tracker: VisibilityTracker,
    starfield: Option<Starfield>,
    rng: StdRng,
    sink: Arc<dyn PortfolioEventSink>,
    revealed_at: HashMap<SectionId, Duration>,
    main_mounted: bool,
    shut_down: bool,
}

impl Session {
    pub fn new(
        portfolio: Portfolio,
        options: SessionOptions,
        sink: Arc<dyn PortfolioEventSink>,
    ) -> Self {
        let controller = StageController::new(options.timing, Arc::clone(&sink));
        let mut tracker = VisibilityTracker::new(options.threshold, Arc::clone(&sink));
        for id in portfolio.section_ids() {
            tracker.register(id);
        }
        let starfield = options.stars.map(Starfield::new);
        let rng = match options.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        Self {
            portfolio,
            options,
            controller,
            tracker,
            starfield,
            rng,
            sink,
            revealed_at: HashMap::new(),
            main_mounted: false,
            shut_down: false,
        }
    }

    /// Start the loading sequence.
    pub fn mount(&mut self, now: Duration) {
        if self.shut_down {
            return;
        }
        self.controller.start(now);
    }

    /// Run every timer due by `now`, then sample the viewport.
    pub fn advance(&mut self, now: Duration, viewport: &dyn Viewport) -> Frame {
        let mut frame = Frame::default();
        if self.shut_down {
            return frame;
        }

        frame.changed = self.controller.advance(now);

        if self.controller.current_stage() == Stage::Main && !self.main_mounted {
            self.main_mounted = true;
            self.tracker.activate(self.portfolio.section_ids());
            if let Some(field) = self.starfield.as_mut() {
                field.start(now, &mut self.rng);
            }
        }

        if self.tracker.is_active() {
            frame.revealed = self.tracker.observe(viewport);
            for id in &frame.revealed {
                self.revealed_at.entry(id.clone()).or_insert(now);
            }
        }

        if let Some(field) = self.starfield.as_mut() {
            field.advance(now, &mut self.rng);
        }

        frame
    }

    /// Forward the user's enter gesture. Ignored outside `Welcome`.
    pub fn enter_site(&mut self, now: Duration) -> bool {
        if self.shut_down {
            return false;
        }
        self.controller.enter_site(now)
    }

    /// Tear everything down. Runs at most once; also called on drop.
    pub fn shutdown(&mut self) {
        if self.shut_down {
            return;
        }
        self.shut_down = true;
        self.tracker.deactivate();
        if let Some(field) = self.starfield.as_mut() {
            field.stop();
        }
        self.controller.shutdown();
        self.sink.on_event(PortfolioEvent::Shutdown {
            elapsed_ms: millis(self.controller.elapsed()),
        });
        tracing::debug!(revealed = self.tracker.visible_count(), "session shut down");
    }

    /// Earliest instant at which `advance` would change something.
    pub fn next_deadline(&self) -> Option<Duration> {
        if self.shut_down {
            return None;
        }
        let fades = self
            .revealed_at
            .values()
            .map(|at| *at + self.options.fade)
            .filter(|end| *end > self.controller.elapsed());

        [
            self.controller.next_deadline(),
            self.starfield.as_ref().and_then(Starfield::next_deadline),
        ]
        .into_iter()
        .flatten()
        .chain(fades)
        .min()
    }

    /// How far the reveal transition of `id` has run, in `0.0..=1.0`.
    /// `None` while the section is still hidden.
    pub fn reveal_progress(&self, id: &str, now: Duration) -> Option<f32> {
        if !self.tracker.is_visible(id) {
            return None;
        }
        let fade = self.options.fade;
        if fade.is_zero() {
            return Some(1.0);
        }
        let at = self.revealed_at.get(id).copied().unwrap_or_default();
        let ran = now.saturating_sub(at).as_secs_f32() / fade.as_secs_f32();
        Some(ran.clamp(0.0, 1.0))
    }

    pub fn portfolio(&self) -> &Portfolio {
        &self.portfolio
    }

    pub fn stage(&self) -> Stage {
        self.controller.current_stage()
    }

    pub fn progress(&self) -> LoadingProgress {
        self.controller.current_progress()
    }

    pub fn is_loading_active(&self) -> bool {
        self.controller.is_loading_active()
    }

    pub fn controller(&self) -> &StageController {
        &self.controller
    }

    pub fn tracker(&self) -> &VisibilityTracker {
        &self.tracker
    }

    pub fn starfield(&self) -> Option<&Starfield> {
        self.starfield.as_ref()
    }

    pub fn is_visible(&self, id: &str) -> bool {
        self.tracker.is_visible(id)
    }

    pub fn is_shut_down(&self) -> bool {
        self.shut_down
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        self.shutdown();
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("stage", &self.stage())
            .field("progress", &self.progress())
            .field("revealed", &self.tracker.visible_count())
            .field("stars", &self.starfield.as_ref().map(Starfield::len))
            .field("shut_down", &self.shut_down)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{SECTION_ABOUT, SECTION_CONTACT};
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingSink(Mutex<Vec<PortfolioEvent>>);

    impl RecordingSink {
        fn names(&self) -> Vec<&'static str> {
            self.0.lock().unwrap().iter().map(|e| e.name()).collect()
        }
    }

    impl PortfolioEventSink for RecordingSink {
        fn on_event(&self, event: PortfolioEvent) {
            self.0.lock().unwrap().push(event);
        }
    }

    /// Only the about section is on screen.
    struct AboutOnly;

    impl Viewport for AboutOnly {
        fn intersection_ratio(&self, anchor: &SectionId) -> Option<f32> {
            (anchor.as_str() == SECTION_ABOUT).then_some(1.0)
        }
    }

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    fn session(sink: Arc<RecordingSink>) -> Session {
        let options = SessionOptions {
            seed: Some(1),
            ..SessionOptions::default()
        };
        Session::new(Portfolio::builtin(), options, sink)
    }

    #[test]
    fn first_visit_reaches_main_and_reveals_visible_section() {
        let sink = Arc::new(RecordingSink::default());
        let mut s = session(Arc::clone(&sink));
        s.mount(ms(0));

        s.advance(ms(4500), &AboutOnly);
        assert_eq!(s.stage(), Stage::Welcome);
        assert!(!s.is_visible(SECTION_ABOUT));

        assert!(s.enter_site(ms(5000)));
        let frame = s.advance(ms(5300), &AboutOnly);
        assert!(frame.changed);
        assert_eq!(s.stage(), Stage::Main);
        assert_eq!(frame.revealed, vec![SectionId::from(SECTION_ABOUT)]);
        assert!(!s.is_visible(SECTION_CONTACT));
        assert!(s.starfield().is_some_and(Starfield::is_running));
    }

    #[test]
    fn reveal_progress_runs_over_fade() {
        let sink = Arc::new(RecordingSink::default());
        let mut s = session(sink);
        s.mount(ms(0));
        s.advance(ms(4500), &AboutOnly);
        s.enter_site(ms(4500));
        s.advance(ms(4800), &AboutOnly);

        assert_eq!(s.reveal_progress(SECTION_CONTACT, ms(4800)), None);
        assert_eq!(s.reveal_progress(SECTION_ABOUT, ms(4800)), Some(0.0));
        let half = s.reveal_progress(SECTION_ABOUT, ms(5150)).unwrap();
        assert!((half - 0.5).abs() < 1e-4);
        assert_eq!(s.reveal_progress(SECTION_ABOUT, ms(9000)), Some(1.0));
    }

    #[test]
    fn shutdown_is_idempotent_and_runs_on_drop() {
        let sink = Arc::new(RecordingSink::default());
        {
            let mut s = session(Arc::clone(&sink));
            s.mount(ms(0));
            s.shutdown();
            s.shutdown();
            assert!(s.next_deadline().is_none());
            assert!(!s.enter_site(ms(100)));
        }
        let names = sink.names();
        assert_eq!(names.iter().filter(|n| **n == "shutdown").count(), 1);

        let sink = Arc::new(RecordingSink::default());
        {
            let mut s = session(Arc::clone(&sink));
            s.mount(ms(0));
        }
        assert_eq!(sink.names().last(), Some(&"shutdown"));
    }

    #[test]
    fn next_deadline_follows_progress_timer() {
        let sink = Arc::new(RecordingSink::default());
        let mut s = session(sink);
        s.mount(ms(0));
        assert_eq!(s.next_deadline(), Some(ms(800)));
        s.advance(ms(800), &AboutOnly);
        assert_eq!(s.next_deadline(), Some(ms(1600)));
    }

    #[test]
    fn disabled_starfield_stays_absent() {
        let options = SessionOptions {
            stars: None,
            seed: Some(3),
            ..SessionOptions::default()
        };
        let mut s = Session::new(Portfolio::builtin(), options, Arc::new(RecordingSink::default()));
        s.mount(ms(0));
        s.advance(ms(4500), &AboutOnly);
        s.enter_site(ms(4500));
        s.advance(ms(4800), &AboutOnly);
        assert_eq!(s.stage(), Stage::Main);
        assert!(s.starfield().is_none());
    }
}
