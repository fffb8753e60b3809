//! Console Event Sink
//!
//! Human-readable event log, one line per event.

use crate::domain::ports::{PortfolioEvent, PortfolioEventSink};
use crate::domain::value_objects::LoadingProgress;
use std::io::{self, Write};
use std::sync::Mutex;

pub struct ConsoleEventSink {
    writer: Mutex<Box<dyn Write + Send>>,
}

impl ConsoleEventSink {
    pub fn stdout() -> Self {
        Self::with_writer(io::stdout())
    }

    pub fn with_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
        }
    }
}

/// Render an event as a single log line.
pub fn describe(event: &PortfolioEvent) -> String {
    match event {
        PortfolioEvent::LoadingStarted { elapsed_ms } => {
            format!("{} loading started", stamp(*elapsed_ms))
        }
        PortfolioEvent::ProgressAdvanced {
            progress,
            elapsed_ms,
        } => {
            let progress = LoadingProgress::new(*progress);
            format!(
                "{} progress {:>4}  {}",
                stamp(*elapsed_ms),
                progress.to_string(),
                progress.message()
            )
        }
        PortfolioEvent::StageChanged {
            from,
            to,
            elapsed_ms,
        } => format!("{} stage {} -> {}", stamp(*elapsed_ms), from, to),
        PortfolioEvent::EnterAccepted { elapsed_ms } => {
            format!("{} enter accepted", stamp(*elapsed_ms))
        }
        PortfolioEvent::EnterIgnored { stage, elapsed_ms } => {
            format!("{} enter ignored during {}", stamp(*elapsed_ms), stage)
        }
        PortfolioEvent::TrackerActivated { sections } => {
            let ids: Vec<&str> = sections.iter().map(|s| s.as_str()).collect();
            format!("{:>10} tracking {}", "", ids.join(", "))
        }
        PortfolioEvent::SectionRevealed { section, ratio } => {
            format!(
                "{:>10} revealed {} ({:.0}% visible)",
                "",
                section,
                ratio * 100.0
            )
        }
        PortfolioEvent::TrackerDeactivated { revealed } => {
            format!("{:>10} tracking stopped, {} revealed", "", revealed)
        }
        PortfolioEvent::Shutdown { elapsed_ms } => format!("{} shutdown", stamp(*elapsed_ms)),
    }
}

fn stamp(elapsed_ms: u64) -> String {
    format!("[{:>6}ms]", elapsed_ms)
}

impl PortfolioEventSink for ConsoleEventSink {
    fn on_event(&self, event: PortfolioEvent) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", describe(&event));
            let _ = writer.flush();
        }
    }
}
