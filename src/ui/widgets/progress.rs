use folio::LoadingProgress;

use crate::ui::primitives::line::Line;
use crate::ui::primitives::text::ColoredText;
use crate::ui::theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgressStyle {
    Bar,
    Blocks,
}

/// Loading bar for the splash screen
#[derive(Debug, Clone)]
pub struct ProgressBar {
    progress: LoadingProgress,
    width: usize,
    style: ProgressStyle,
}

impl ProgressBar {
    pub fn new(progress: LoadingProgress) -> Self {
        Self {
            progress,
            width: 30,
            style: ProgressStyle::Blocks,
        }
    }

    pub fn set_width(&mut self, width: usize) {
        self.width = width.max(1);
    }

    pub fn set_style(&mut self, style: ProgressStyle) {
        self.style = style;
    }

    pub fn render(&self, supports_unicode: bool) -> Line {
        let (filled, empty) = self.bar_segments();
        let (full, rest) = match (self.style, supports_unicode) {
            (ProgressStyle::Bar, true) => theme::bars::LINE,
            (ProgressStyle::Bar, false) => theme::bars_ascii::LINE,
            (ProgressStyle::Blocks, true) => theme::bars::BLOCKS,
            (ProgressStyle::Blocks, false) => theme::bars_ascii::BLOCKS,
        };

        Line::new(ColoredText::accent(full.repeat(filled)))
            .push(ColoredText::dim(rest.repeat(empty)))
            .push(ColoredText::plain(format!(" {:>4}", self.progress.to_string())))
    }

    fn bar_segments(&self) -> (usize, usize) {
        let value = usize::from(self.progress.value());
        let filled = (value * self.width + 50) / 100;
        let filled = filled.min(self.width);
        (filled, self.width - filled)
    }
}
