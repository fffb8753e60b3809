use std::io;

use anyhow::Result;
use chrono::Datelike;
use folio::Portfolio;

use crate::ui::context::UiContext;
use crate::ui::output::write_lines;
use crate::ui::views::{page, ContactFormView, PageStyle};

const MIN_WIDTH: usize = 40;

pub fn cmd_page(ui: &UiContext, width: Option<u16>) -> Result<()> {
    let portfolio = Portfolio::builtin();
    let style = PageStyle {
        width: usize::from(width.unwrap_or_else(|| ui.width())).max(MIN_WIDTH),
        unicode: ui.unicode,
        year: chrono::Local::now().year(),
    };
    let layout = page::layout(&portfolio, &ContactFormView::default(), &style);

    if ui.json {
        let sections: Vec<_> = layout
            .spans
            .iter()
            .map(|span| {
                let lines: Vec<String> = layout.lines[span.top..span.bottom()]
                    .iter()
                    .map(|l| l.plain().trim_end().to_string())
                    .collect();
                let title = portfolio
                    .section(span.id.as_str())
                    .map(|s| s.title)
                    .unwrap_or_default();
                serde_json::json!({ "id": span.id.as_str(), "title": title, "lines": lines })
            })
            .collect();
        crate::ui::json::emit(
            "page",
            serde_json::json!({ "name": portfolio.profile.name, "sections": sections }),
        )?;
        return Ok(());
    }

    let mut lines = page::header(&portfolio, &style);
    lines.extend(layout.lines);
    write_lines(&mut io::stdout().lock(), &lines, ui)?;
    Ok(())
}
