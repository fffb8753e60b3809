use std::fmt;

use crossterm::style::{Color, Stylize};
use unicode_width::UnicodeWidthStr;

use crate::ui::theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SemanticColor {
    Accent,
    Title,
    Success,
    Error,
    Warning,
    Dim,
    /// Brand color (skills); degrades to plain text without true color
    Rgb(u8, u8, u8),
}

/// A run of text with one style
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColoredText {
    text: String,
    color: Option<SemanticColor>,
    bold: bool,
    reverse: bool,
}

impl ColoredText {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            color: None,
            bold: false,
            reverse: false,
        }
    }

    pub fn colored(text: impl Into<String>, color: SemanticColor) -> Self {
        Self {
            color: Some(color),
            ..Self::plain(text)
        }
    }

    pub fn accent(text: impl Into<String>) -> Self {
        Self::colored(text, SemanticColor::Accent)
    }

    pub fn title(text: impl Into<String>) -> Self {
        Self::colored(text, SemanticColor::Title).bold()
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self::colored(text, SemanticColor::Success)
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self::colored(text, SemanticColor::Error)
    }

    pub fn warning(text: impl Into<String>) -> Self {
        Self::colored(text, SemanticColor::Warning)
    }

    pub fn dim(text: impl Into<String>) -> Self {
        Self::colored(text, SemanticColor::Dim)
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    /// Inverted colors (focused button)
    pub fn reverse(mut self) -> Self {
        self.reverse = true;
        self
    }

    /// Same text, forced to the dim color (fading sections).
    pub fn dimmed(&self) -> Self {
        Self {
            color: Some(SemanticColor::Dim),
            bold: false,
            ..self.clone()
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn width(&self) -> usize {
        self.text.width()
    }

    pub fn render(&self, supports_color: bool, true_color: bool) -> String {
        if !supports_color {
            return self.text.clone();
        }

        let color = self.color.and_then(|c| resolve(c, true_color));
        let mut styled = self.text.as_str().stylize();
        if let Some(color) = color {
            styled = styled.with(color);
        }
        if self.bold {
            styled = styled.bold();
        }
        if self.reverse {
            styled = styled.reverse();
        }
        format!("{}", styled)
    }
}

fn resolve(color: SemanticColor, true_color: bool) -> Option<Color> {
    match color {
        SemanticColor::Accent if true_color => Some(theme::colors::ACCENT),
        SemanticColor::Accent => Some(theme::colors::ACCENT_ANSI),
        SemanticColor::Title => Some(theme::colors::TITLE),
        SemanticColor::Success => Some(theme::colors::SUCCESS),
        SemanticColor::Error => Some(theme::colors::ERROR),
        SemanticColor::Warning => Some(theme::colors::WARNING),
        SemanticColor::Dim => Some(theme::colors::DIM),
        SemanticColor::Rgb(r, g, b) if true_color => Some(Color::Rgb { r, g, b }),
        SemanticColor::Rgb(..) => None,
    }
}

/// Greedy word wrap by display width. Words longer than `width` get a line
/// of their own.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let needed = if current.is_empty() {
            word.width()
        } else {
            current.width() + 1 + word.width()
        };
        if needed > width && !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

impl fmt::Display for ColoredText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
