#![no_main]

use std::sync::Arc;
use std::time::Duration;

use libfuzzer_sys::fuzz_target;

use folio::domain::ports::NoopEventSink;
use folio::infrastructure::{ScrollViewport, SectionSpan};
use folio::{Portfolio, Session, SessionOptions, Stage};

fuzz_target!(|data: &[u8]| {
    let Some((&height, steps)) = data.split_first() else {
        return;
    };

    let portfolio = Portfolio::builtin();
    let spans = portfolio
        .section_ids()
        .into_iter()
        .enumerate()
        .map(|(i, id)| SectionSpan::new(id, i * 30, 20 + i * 3))
        .collect();
    let mut viewport = ScrollViewport::new(spans, 130, usize::from(height));

    let options = SessionOptions {
        seed: Some(0),
        ..SessionOptions::default()
    };
    let mut session = Session::new(portfolio, options, Arc::new(NoopEventSink));
    session.mount(Duration::ZERO);

    let mut now = Duration::ZERO;
    let mut revealed = 0;
    for &step in steps {
        now += Duration::from_millis(u64::from(step) * 20);
        match step % 4 {
            0 => {
                session.enter_site(now);
            }
            1 => viewport.scroll_by(isize::from(step as i8)),
            2 => viewport.resize(usize::from(step)),
            _ => {}
        }
        session.advance(now, &viewport);

        let count = session.tracker().visible_count();
        assert!(count >= revealed);
        revealed = count;
        if session.stage() != Stage::Main {
            assert_eq!(count, 0);
        }
    }
});
