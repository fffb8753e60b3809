use std::io::{self, Write};

use folio::config::ConfigWarning;

use crate::ui::context::UiContext;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::line::Line;

pub fn print_config_warnings(warnings: &[ConfigWarning], ui: &UiContext) {
    let icon = Icon::Warning.render(ui.unicode);
    for warning in warnings {
        eprintln!("{} {}", icon, warning);
    }
}

/// Print rendered lines to `out`, one per row.
pub fn write_lines(out: &mut impl Write, lines: &[Line], ui: &UiContext) -> io::Result<()> {
    for line in lines {
        let rendered = line.render(ui.color, ui.true_color);
        writeln!(out, "{}", rendered.trim_end())?;
    }
    out.flush()
}
