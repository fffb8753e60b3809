use folio::LoadingProgress;

use crate::ui::primitives::line::Line;
use crate::ui::primitives::text::ColoredText;
use crate::ui::widgets::progress::ProgressBar;

const BAR_WIDTH: usize = 40;

/// Splash screen: bar and status message, centered in the terminal.
pub fn render(progress: LoadingProgress, width: usize, height: usize, unicode: bool) -> Vec<Line> {
    let mut bar = ProgressBar::new(progress);
    bar.set_width(BAR_WIDTH.min(width.saturating_sub(8)));

    let body = [
        bar.render(unicode).centered(width),
        Line::blank(),
        Line::new(ColoredText::dim(progress.message())).centered(width),
    ];

    let mut lines = vec![Line::blank(); height.saturating_sub(body.len()) / 2];
    lines.extend(body);
    lines
}
