use unicode_width::UnicodeWidthStr;

use super::text::ColoredText;

/// One screen row: leading indent plus styled runs
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Line {
    pub indent: usize,
    pub parts: Vec<ColoredText>,
}

impl Line {
    pub fn blank() -> Self {
        Self::default()
    }

    pub fn new(part: ColoredText) -> Self {
        Self {
            indent: 0,
            parts: vec![part],
        }
    }

    pub fn indented(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }

    pub fn push(mut self, part: ColoredText) -> Self {
        self.parts.push(part);
        self
    }

    /// Center within `width` columns.
    pub fn centered(mut self, width: usize) -> Self {
        self.indent = width.saturating_sub(self.content_width()) / 2;
        self
    }

    pub fn content_width(&self) -> usize {
        self.parts.iter().map(ColoredText::width).sum()
    }

    /// Columns from the left edge to the end of the content
    pub fn width(&self) -> usize {
        self.indent + self.content_width()
    }

    pub fn is_blank(&self) -> bool {
        self.parts.iter().all(|p| p.text().trim().is_empty())
    }

    pub fn plain(&self) -> String {
        let mut out = " ".repeat(self.indent);
        for part in &self.parts {
            out.push_str(part.text());
        }
        out
    }

    pub fn dimmed(&self) -> Self {
        Self {
            indent: self.indent,
            parts: self.parts.iter().map(ColoredText::dimmed).collect(),
        }
    }

    pub fn render(&self, supports_color: bool, true_color: bool) -> String {
        let mut out = " ".repeat(self.indent);
        for part in &self.parts {
            out.push_str(&part.render(supports_color, true_color));
        }
        out
    }
}

impl From<&str> for Line {
    fn from(text: &str) -> Self {
        Self::new(ColoredText::plain(text))
    }
}

/// Display width of plain text
pub fn visible_width(text: &str) -> usize {
    text.width()
}
