//! Property tests for stage sequencing.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use proptest::prelude::*;

use folio::{PortfolioEvent, PortfolioEventSink, Stage, StageController, StageTiming};

#[derive(Default)]
struct Recorder(Mutex<Vec<PortfolioEvent>>);

impl PortfolioEventSink for Recorder {
    fn on_event(&self, event: PortfolioEvent) {
        self.0.lock().unwrap().push(event);
    }
}

#[derive(Debug, Clone)]
enum Op {
    Wait(u64),
    Enter,
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => (0u64..2_000).prop_map(Op::Wait),
        1 => Just(Op::Enter),
    ]
}

fn timing() -> impl Strategy<Value = StageTiming> {
    (1u64..1_000, 1u8..=100, 0u64..1_000, 0u64..1_000).prop_map(
        |(interval, step, welcome, enter)| StageTiming {
            progress_interval: Duration::from_millis(interval),
            progress_step: step,
            welcome_delay: Duration::from_millis(welcome),
            enter_delay: Duration::from_millis(enter),
        },
    )
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: stages only move forward, one step at a time.
    #[test]
    fn property_stage_is_forward_only(
        timing in timing(),
        ops in proptest::collection::vec(op(), 0..40),
    ) {
        let mut controller = StageController::new(timing, Arc::new(Recorder::default()));
        let mut now = Duration::ZERO;
        controller.start(now);

        let mut last_progress = 0u8;
        for op in ops {
            match op {
                Op::Wait(ms) => {
                    now += Duration::from_millis(ms);
                    controller.advance(now);
                }
                Op::Enter => {
                    controller.enter_site(now);
                }
            }

            let progress = controller.current_progress().value();
            prop_assert!(progress >= last_progress);
            prop_assert!(progress <= 100);
            last_progress = progress;

            let history = controller.history();
            let expected = [Stage::Loading, Stage::Welcome, Stage::Main];
            prop_assert!(history.len() <= expected.len());
            prop_assert_eq!(history, &expected[..history.len()]);
            prop_assert_eq!(controller.current_stage(), *history.last().unwrap());
        }
    }

    /// PROPERTY: Main is only reached through one accepted enter, and only
    /// after loading completed.
    #[test]
    fn property_main_requires_one_accepted_enter(
        timing in timing(),
        ops in proptest::collection::vec(op(), 0..40),
    ) {
        let recorder = Arc::new(Recorder::default());
        let mut controller = StageController::new(timing, recorder.clone());
        let mut now = Duration::ZERO;
        controller.start(now);

        for op in ops {
            match op {
                Op::Wait(ms) => {
                    now += Duration::from_millis(ms);
                    controller.advance(now);
                }
                Op::Enter => {
                    let accepted = controller.enter_site(now);
                    if accepted {
                        prop_assert!(!controller.is_loading_active());
                    }
                }
            }
        }

        let events = recorder.0.lock().unwrap();
        let accepted = events
            .iter()
            .filter(|e| matches!(e, PortfolioEvent::EnterAccepted { .. }))
            .count();
        prop_assert!(accepted <= 1);

        if controller.current_stage() == Stage::Main {
            prop_assert_eq!(accepted, 1);
            prop_assert!(controller.current_progress().is_complete());
        }
        if controller.current_stage() != Stage::Loading {
            prop_assert!(controller.current_progress().is_complete());
        }
    }
}
