//! `folio timeline`: play a session without a screen
//!
//! A scripted visitor presses enter after `enter_after`, then scrolls the
//! page half a viewport at a time. Every event the session emits is printed.
//! The clock is virtual (jumps straight to the next deadline) unless
//! `--realtime` is given.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::Result;
use folio::infrastructure::{ConsoleEventSink, JsonEventSink, ScrollViewport};
use folio::{Config, Portfolio, PortfolioEventSink, Session, Stage};

use crate::ui::context::UiContext;
use crate::ui::views::{page, ContactFormView, PageStyle};

const PAGE_WIDTH: usize = 80;
const SCROLL_STEP: Duration = Duration::from_millis(400);
const POLL: Duration = Duration::from_millis(50);

#[derive(Debug, Clone, Copy)]
pub struct TimelineOptions {
    pub realtime: bool,
    pub enter_after: Duration,
    pub height: usize,
    pub duration: Duration,
}

enum Clock {
    Virtual(Duration),
    Wall {
        start: Instant,
        running: Arc<AtomicBool>,
    },
}

impl Clock {
    fn new(realtime: bool) -> Result<Self> {
        if !realtime {
            return Ok(Clock::Virtual(Duration::ZERO));
        }
        let running = Arc::new(AtomicBool::new(true));
        let handle = Arc::clone(&running);
        ctrlc::set_handler(move || handle.store(false, Ordering::SeqCst))?;
        Ok(Clock::Wall {
            start: Instant::now(),
            running,
        })
    }

    fn now(&self) -> Duration {
        match self {
            Clock::Virtual(now) => *now,
            Clock::Wall { start, .. } => start.elapsed(),
        }
    }

    fn is_running(&self) -> bool {
        match self {
            Clock::Virtual(_) => true,
            Clock::Wall { running, .. } => running.load(Ordering::SeqCst),
        }
    }

    /// Move to `at`: instantly when virtual, by sleeping otherwise.
    fn wait_until(&mut self, at: Duration) {
        match self {
            Clock::Virtual(now) => *now = (*now).max(at),
            Clock::Wall { start, running } => {
                while running.load(Ordering::SeqCst) {
                    let left = at.saturating_sub(start.elapsed());
                    if left.is_zero() {
                        break;
                    }
                    std::thread::sleep(left.min(POLL));
                }
            }
        }
    }
}

/// Scripted visitor state
struct Visitor {
    enter_at: Option<Duration>,
    next_scroll: Option<Duration>,
    viewport: ScrollViewport,
}

impl Visitor {
    /// Act on anything due by `now`. Returns true if the viewport moved or
    /// enter was pressed.
    fn act(&mut self, session: &mut Session, now: Duration) -> bool {
        let mut acted = false;
        if let Some(at) = self.enter_at {
            if now >= at && session.stage() == Stage::Welcome {
                self.enter_at = None;
                session.enter_site(now);
                acted = true;
            }
        }

        if session.stage() != Stage::Main {
            return acted;
        }
        match self.next_scroll {
            None => self.next_scroll = Some(now + SCROLL_STEP),
            Some(at) if now >= at && self.viewport.offset() < self.viewport.max_offset() => {
                let step = (self.viewport.height() / 2).max(1);
                self.viewport.scroll_by(isize::try_from(step).unwrap_or(isize::MAX));
                self.next_scroll = Some(at + SCROLL_STEP);
                acted = true;
            }
            Some(_) => {}
        }
        acted
    }

    fn at_end(&self) -> bool {
        self.viewport.offset() >= self.viewport.max_offset()
    }

    fn next_deadline(&self) -> Option<Duration> {
        let scroll = self.next_scroll.filter(|_| !self.at_end());
        [self.enter_at, scroll].into_iter().flatten().min()
    }
}

pub fn cmd_timeline(config: &Config, ui: &UiContext, options: TimelineOptions) -> Result<()> {
    let sink: Arc<dyn PortfolioEventSink> = if ui.json {
        Arc::new(JsonEventSink::stdout())
    } else {
        Arc::new(ConsoleEventSink::stdout())
    };
    let portfolio = Portfolio::builtin();
    let style = PageStyle {
        width: PAGE_WIDTH,
        unicode: false,
        year: 0,
    };
    let layout = page::layout(&portfolio, &ContactFormView::default(), &style);

    let mut session = Session::new(portfolio, config.session_options(false, None)?, sink);
    let mut visitor = Visitor {
        enter_at: Some(options.enter_after),
        next_scroll: None,
        viewport: layout.viewport(options.height.max(1)),
    };
    let mut clock = Clock::new(options.realtime)?;
    session.mount(clock.now());

    let summary = play(&mut session, &mut visitor, &mut clock, options.duration);
    session.shutdown();

    if !ui.json {
        println!(
            "stage {}, {}/{} sections revealed",
            summary.stage,
            summary.revealed,
            summary.sections
        );
    }
    Ok(())
}

struct Summary {
    stage: Stage,
    revealed: usize,
    sections: usize,
}

fn play(
    session: &mut Session,
    visitor: &mut Visitor,
    clock: &mut Clock,
    duration: Duration,
) -> Summary {
    let sections = session.portfolio().sections.len();

    while clock.is_running() {
        let now = clock.now().min(duration);
        session.advance(now, &visitor.viewport);
        if visitor.act(session, now) {
            session.advance(now, &visitor.viewport);
        }

        let done = session.stage() == Stage::Main
            && session.tracker().visible_count() == sections
            && visitor.at_end();
        if done || now >= duration {
            break;
        }

        let next = [session.next_deadline(), visitor.next_deadline()]
            .into_iter()
            .flatten()
            .filter(|at| *at > now)
            .min()
            .unwrap_or(duration)
            .min(duration);
        clock.wait_until(next);
    }

    Summary {
        stage: session.stage(),
        revealed: session.tracker().visible_count(),
        sections,
    }
}
