//! Stage Controller
//!
//! Owns the [`Stage`] and the [`LoadingProgress`] and drives the timed
//! progression `Loading -> Welcome -> Main`:
//!
//! ```text
//! start()      every progress_interval: progress += step
//!              progress hits 100 -> cancel ticks, after welcome_delay -> Welcome
//! enter_site() (Welcome only) loading inactive now, after enter_delay -> Main
//! ```
//!
//! Timers live in a private [`TimerQueue`]; nothing happens until the host
//! calls [`StageController::advance`] with the current time.

use std::sync::Arc;
use std::time::Duration;

use crate::domain::ports::{PortfolioEvent, PortfolioEventSink};
use crate::domain::services::timers::{TimerId, TimerQueue};
use crate::domain::value_objects::{LoadingProgress, Stage};

/// Fixed delays of the staged reveal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StageTiming {
    pub progress_interval: Duration,
    pub progress_step: u8,
    pub welcome_delay: Duration,
    pub enter_delay: Duration,
}

impl Default for StageTiming {
    fn default() -> Self {
        Self {
            progress_interval: Duration::from_millis(800),
            progress_step: 20,
            welcome_delay: Duration::from_millis(500),
            enter_delay: Duration::from_millis(300),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StageTask {
    ProgressTick,
    ShowWelcome,
    ShowMain,
}

pub struct StageController {
    timing: StageTiming,
    stage: Stage,
    progress: LoadingProgress,
    loading_active: bool,
    started: bool,
    progress_timer: Option<TimerId>,
    pending_transition: Option<TimerId>,
    history: Vec<Stage>,
    timers: TimerQueue<StageTask>,
    sink: Arc<dyn PortfolioEventSink>,
}

impl StageController {
    pub fn new(timing: StageTiming, sink: Arc<dyn PortfolioEventSink>) -> Self {
        Self {
            timing,
            stage: Stage::Loading,
            progress: LoadingProgress::default(),
            loading_active: true,
            started: false,
            progress_timer: None,
            pending_transition: None,
            history: vec![Stage::Loading],
            timers: TimerQueue::new(),
            sink,
        }
    }

    /// Arm the progress timer. Only the first call has an effect.
    pub fn start(&mut self, now: Duration) {
        if self.started {
            tracing::debug!("stage controller already started");
            return;
        }
        self.started = true;
        self.timers.advance_to(now);
        self.progress_timer = Some(
            self.timers
                .schedule_repeating(self.timing.progress_interval, StageTask::ProgressTick),
        );
        self.emit(PortfolioEvent::LoadingStarted {
            elapsed_ms: millis(self.timers.now()),
        });
    }

    /// Visitor asked to enter the site.
    ///
    /// Accepted only while the stage is `Welcome` and no transition is pending;
    /// anything else (double activation, still loading, already in) is ignored.
    pub fn enter_site(&mut self, now: Duration) -> bool {
        self.advance(now);

        if self.stage != Stage::Welcome || self.pending_transition.is_some() {
            tracing::debug!(stage = %self.stage, "enter ignored");
            self.emit(PortfolioEvent::EnterIgnored {
                stage: self.stage,
                elapsed_ms: millis(self.timers.now()),
            });
            return false;
        }

        self.loading_active = false;
        self.pending_transition = Some(
            self.timers
                .schedule_once(self.timing.enter_delay, StageTask::ShowMain),
        );
        self.emit(PortfolioEvent::EnterAccepted {
            elapsed_ms: millis(self.timers.now()),
        });
        true
    }

    /// Fire every timer due at or before `now`. Returns true if stage or
    /// progress changed.
    pub fn advance(&mut self, now: Duration) -> bool {
        let mut changed = false;
        while let Some((id, task)) = self.timers.pop_due(now) {
            changed |= self.handle(id, task);
        }
        self.timers.advance_to(now);
        changed
    }

    /// Cancel every outstanding timer. Safe to call repeatedly.
    pub fn shutdown(&mut self) {
        self.timers.clear();
        self.progress_timer = None;
        self.pending_transition = None;
    }

    pub fn current_stage(&self) -> Stage {
        self.stage
    }

    pub fn current_progress(&self) -> LoadingProgress {
        self.progress
    }

    /// False once the visitor has entered; the welcome screen uses it to
    /// fade out while `Welcome -> Main` is pending.
    pub fn is_loading_active(&self) -> bool {
        self.loading_active
    }

    pub fn transition_pending(&self) -> bool {
        self.pending_transition.is_some()
    }

    pub fn is_started(&self) -> bool {
        self.started
    }

    /// Every stage the controller has been in, oldest first.
    pub fn history(&self) -> &[Stage] {
        &self.history
    }

    pub fn next_deadline(&self) -> Option<Duration> {
        self.timers.next_due()
    }

    pub fn elapsed(&self) -> Duration {
        self.timers.now()
    }

    pub fn timing(&self) -> &StageTiming {
        &self.timing
    }

    fn handle(&mut self, id: TimerId, task: StageTask) -> bool {
        match task {
            StageTask::ProgressTick => self.on_progress_tick(id),
            StageTask::ShowWelcome => {
                self.pending_transition = None;
                self.transition(Stage::Loading, Stage::Welcome)
            }
            StageTask::ShowMain => {
                self.pending_transition = None;
                self.transition(Stage::Welcome, Stage::Main)
            }
        }
    }

    fn on_progress_tick(&mut self, id: TimerId) -> bool {
        if self.stage != Stage::Loading {
            self.timers.cancel(id);
            return false;
        }

        self.progress = self.progress.advance(self.timing.progress_step);
        self.emit(PortfolioEvent::ProgressAdvanced {
            progress: self.progress.value(),
            elapsed_ms: millis(self.timers.now()),
        });

        if self.progress.is_complete() {
            self.timers.cancel(id);
            self.progress_timer = None;
            if self.pending_transition.is_none() {
                self.pending_transition = Some(
                    self.timers
                        .schedule_once(self.timing.welcome_delay, StageTask::ShowWelcome),
                );
            }
        }
        true
    }

    /// Scheduled callbacks re-check the stage before acting.
    fn transition(&mut self, from: Stage, to: Stage) -> bool {
        if self.stage != from || from.next() != Some(to) {
            return false;
        }
        if to == Stage::Welcome && !self.progress.is_complete() {
            return false;
        }

        self.stage = to;
        self.history.push(to);
        tracing::debug!(%from, %to, elapsed_ms = millis(self.timers.now()), "stage transition");
        self.emit(PortfolioEvent::StageChanged {
            from,
            to,
            elapsed_ms: millis(self.timers.now()),
        });
        true
    }

    fn emit(&self, event: PortfolioEvent) {
        self.sink.on_event(event);
    }
}

impl std::fmt::Debug for StageController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StageController")
            .field("stage", &self.stage)
            .field("progress", &self.progress)
            .field("loading_active", &self.loading_active)
            .field("pending_transition", &self.pending_transition.is_some())
            .finish()
    }
}

pub(crate) fn millis(d: Duration) -> u64 {
    d.as_millis().min(u64::MAX as u128) as u64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::NoopEventSink;
    use std::sync::Mutex;

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    #[derive(Default)]
    struct RecordingSink {
        events: Mutex<Vec<PortfolioEvent>>,
    }

    impl PortfolioEventSink for RecordingSink {
        fn on_event(&self, event: PortfolioEvent) {
            self.events.lock().unwrap().push(event);
        }
    }

    fn controller() -> StageController {
        StageController::new(StageTiming::default(), Arc::new(NoopEventSink))
    }

    #[test]
    fn nothing_happens_before_start() {
        let mut c = controller();
        assert!(!c.advance(ms(10_000)));
        assert_eq!(c.current_stage(), Stage::Loading);
        assert_eq!(c.current_progress().value(), 0);
    }

    #[test]
    fn progress_ticks_every_interval() {
        let mut c = controller();
        c.start(ms(0));
        c.advance(ms(799));
        assert_eq!(c.current_progress().value(), 0);
        c.advance(ms(800));
        assert_eq!(c.current_progress().value(), 20);
        c.advance(ms(2400));
        assert_eq!(c.current_progress().value(), 60);
    }

    #[test]
    fn welcome_follows_completion_after_delay() {
        let mut c = controller();
        c.start(ms(0));
        c.advance(ms(4000));
        assert_eq!(c.current_progress().value(), 100);
        assert_eq!(c.current_stage(), Stage::Loading);
        assert!(c.transition_pending());

        c.advance(ms(4499));
        assert_eq!(c.current_stage(), Stage::Loading);
        c.advance(ms(4500));
        assert_eq!(c.current_stage(), Stage::Welcome);
        assert!(!c.transition_pending());
    }

    #[test]
    fn progress_timer_is_cancelled_at_completion() {
        let mut c = controller();
        c.start(ms(0));
        c.advance(ms(4000));
        // only the welcome delay remains
        assert_eq!(c.next_deadline(), Some(ms(4500)));
    }

    #[test]
    fn step_not_dividing_hundred_still_clamps() {
        let timing = StageTiming {
            progress_step: 30,
            ..StageTiming::default()
        };
        let mut c = StageController::new(timing, Arc::new(NoopEventSink));
        c.start(ms(0));
        c.advance(ms(3200));
        assert_eq!(c.current_progress().value(), 100);
        c.advance(ms(3700));
        assert_eq!(c.current_stage(), Stage::Welcome);
    }

    #[test]
    fn enter_site_is_ignored_while_loading() {
        let mut c = controller();
        c.start(ms(0));
        assert!(!c.enter_site(ms(1000)));
        assert!(c.is_loading_active());
        assert_eq!(c.current_stage(), Stage::Loading);
    }

    #[test]
    fn enter_site_moves_to_main_after_delay() {
        let mut c = controller();
        c.start(ms(0));
        c.advance(ms(4500));
        assert!(c.enter_site(ms(5000)));
        assert!(!c.is_loading_active());
        c.advance(ms(5299));
        assert_eq!(c.current_stage(), Stage::Welcome);
        c.advance(ms(5300));
        assert_eq!(c.current_stage(), Stage::Main);
        assert_eq!(c.history(), &[Stage::Loading, Stage::Welcome, Stage::Main]);
    }

    #[test]
    fn double_enter_does_not_double_schedule() {
        let mut c = controller();
        c.start(ms(0));
        c.advance(ms(4500));
        assert!(c.enter_site(ms(4500)));
        assert!(!c.enter_site(ms(4600)));
        c.advance(ms(10_000));
        assert_eq!(c.history(), &[Stage::Loading, Stage::Welcome, Stage::Main]);
        assert!(c.next_deadline().is_none());
    }

    #[test]
    fn enter_site_in_main_is_ignored() {
        let mut c = controller();
        c.start(ms(0));
        c.advance(ms(4500));
        c.enter_site(ms(4500));
        c.advance(ms(4800));
        assert!(!c.enter_site(ms(5000)));
        assert_eq!(c.current_stage(), Stage::Main);
    }

    #[test]
    fn enter_site_catches_up_on_overdue_timers() {
        let mut c = controller();
        c.start(ms(0));
        // host never called advance; the welcome deadline has passed anyway
        assert!(c.enter_site(ms(6000)));
        assert_eq!(c.current_stage(), Stage::Welcome);
    }

    #[test]
    fn second_start_is_ignored() {
        let mut c = controller();
        c.start(ms(0));
        c.advance(ms(800));
        c.start(ms(900));
        c.advance(ms(1600));
        assert_eq!(c.current_progress().value(), 40);
    }

    #[test]
    fn shutdown_cancels_everything_and_is_idempotent() {
        let mut c = controller();
        c.start(ms(0));
        c.advance(ms(1600));
        c.shutdown();
        c.shutdown();
        assert!(!c.advance(ms(60_000)));
        assert_eq!(c.current_progress().value(), 40);
        assert!(c.next_deadline().is_none());
    }

    #[test]
    fn events_describe_the_whole_run() {
        let sink = Arc::new(RecordingSink::default());
        let mut c = StageController::new(StageTiming::default(), sink.clone());
        c.start(ms(0));
        c.advance(ms(4500));
        c.enter_site(ms(4500));
        c.advance(ms(4800));

        let names: Vec<_> = sink.events.lock().unwrap().iter().map(|e| e.name()).collect();
        assert_eq!(
            names,
            vec![
                "loading_started",
                "progress_advanced",
                "progress_advanced",
                "progress_advanced",
                "progress_advanced",
                "progress_advanced",
                "stage_changed",
                "enter_accepted",
                "stage_changed",
            ]
        );
    }
}
