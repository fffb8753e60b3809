//! JSON Event Sink
//!
//! Streams portfolio events as NDJSON for scripts and automation.

use crate::domain::ports::{PortfolioEvent, PortfolioEventSink};
use std::io::{self, Write};
use std::sync::Mutex;

/// Event sink that writes one JSON object per event
pub struct JsonEventSink {
    writer: Mutex<Box<dyn Write + Send>>,
}

impl JsonEventSink {
    /// Create a new JSON event sink writing to stdout
    pub fn stdout() -> Self {
        Self::with_writer(io::stdout())
    }

    /// Create a JSON event sink writing to a custom writer
    pub fn with_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
        }
    }
}

impl PortfolioEventSink for JsonEventSink {
    fn on_event(&self, event: PortfolioEvent) {
        let line = match serde_json::to_string(&event) {
            Ok(line) => line,
            Err(err) => {
                tracing::warn!(event = event.name(), %err, "failed to encode event");
                return;
            }
        };
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", line);
            let _ = writer.flush();
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::domain::value_objects::{SectionId, Stage};
    use std::sync::{Arc, Mutex};

    pub(crate) struct TestWriter {
        buffer: Arc<Mutex<Vec<u8>>>,
    }

    impl TestWriter {
        pub(crate) fn new() -> (Self, Arc<Mutex<Vec<u8>>>) {
            let buffer = Arc::new(Mutex::new(Vec::new()));
            (
                Self {
                    buffer: buffer.clone(),
                },
                buffer,
            )
        }
    }

    impl Write for TestWriter {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.buffer.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn output(buffer: &Arc<Mutex<Vec<u8>>>) -> String {
        String::from_utf8(buffer.lock().unwrap().clone()).unwrap()
    }

    #[test]
    fn json_sink_outputs_stage_change() {
        let (writer, buffer) = TestWriter::new();
        let sink = JsonEventSink::with_writer(writer);

        sink.on_event(PortfolioEvent::StageChanged {
            from: Stage::Loading,
            to: Stage::Welcome,
            elapsed_ms: 4500,
        });

        insta::assert_snapshot!(
            output(&buffer).trim_end(),
            @r#"{"event":"stage_changed","from":"loading","to":"welcome","elapsed_ms":4500}"#
        );
    }

    #[test]
    fn json_sink_writes_one_line_per_event() {
        let (writer, buffer) = TestWriter::new();
        let sink = JsonEventSink::with_writer(writer);

        sink.on_event(PortfolioEvent::LoadingStarted { elapsed_ms: 0 });
        sink.on_event(PortfolioEvent::SectionRevealed {
            section: SectionId::from("skills"),
            ratio: 0.5,
        });

        let output = output(&buffer);
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("\"event\":\"loading_started\""));
        assert!(lines[1].contains("\"section\":\"skills\""));
        assert!(lines[1].contains("\"ratio\":0.5"));
    }
}
