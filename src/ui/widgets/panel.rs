use crate::ui::primitives::border::BorderSet;
use crate::ui::primitives::line::Line;
use crate::ui::primitives::text::ColoredText;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PanelStyle {
    #[default]
    Plain,
    Accent,
    Focused,
}

/// Bordered block of lines with a fixed inner width
#[derive(Debug, Default, Clone)]
pub struct Panel {
    title: Option<ColoredText>,
    content: Vec<Line>,
    inner_width: usize,
    style: PanelStyle,
}

impl Panel {
    pub fn new(inner_width: usize) -> Self {
        Self {
            inner_width: inner_width.max(2),
            ..Self::default()
        }
    }

    pub fn title(mut self, title: ColoredText) -> Self {
        self.title = Some(title);
        self
    }

    pub fn style(mut self, style: PanelStyle) -> Self {
        self.style = style;
        self
    }

    pub fn add(&mut self, line: Line) {
        self.content.push(line);
    }

    pub fn add_text(&mut self, text: ColoredText) {
        self.content.push(Line::new(text));
    }

    /// Outer width including borders
    pub fn width(&self) -> usize {
        self.inner_width + 2
    }

    /// Rows with borders, each starting at column `indent`.
    pub fn render(&self, indent: usize, supports_unicode: bool) -> Vec<Line> {
        let set = BorderSet::new(supports_unicode);
        let edge = |s: String| match self.style {
            PanelStyle::Plain => ColoredText::dim(s),
            PanelStyle::Accent => ColoredText::accent(s),
            PanelStyle::Focused => ColoredText::accent(s).bold(),
        };

        let mut rows = vec![Line::new(edge(set.top(self.inner_width))).indented(indent)];

        let title = self.title.iter().map(|t| Line::new(t.clone()));
        for line in title.chain(self.content.iter().cloned()) {
            let used = 1 + line.width();
            let pad = self.inner_width.saturating_sub(used);
            let mut row = Line::new(edge(set.vertical.to_string()))
                .indented(indent)
                .push(ColoredText::plain(" ".repeat(1 + line.indent)));
            for part in line.parts {
                row = row.push(part);
            }
            rows.push(
                row.push(ColoredText::plain(" ".repeat(pad)))
                    .push(edge(set.vertical.to_string())),
            );
        }

        rows.push(Line::new(edge(set.bottom(self.inner_width))).indented(indent));
        rows
    }
}
