use crate::ui::theme::{self, pick};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Success,
    Error,
    Warning,
    Bullet,
    Arrow,
    Focus,
    Separator,
}

impl Icon {
    pub fn render(&self, supports_unicode: bool) -> &'static str {
        use theme::{icons as u, icons_ascii as a};
        match self {
            Icon::Success => pick(supports_unicode, u::SUCCESS, a::SUCCESS),
            Icon::Error => pick(supports_unicode, u::ERROR, a::ERROR),
            Icon::Warning => pick(supports_unicode, u::WARNING, a::WARNING),
            Icon::Bullet => pick(supports_unicode, u::BULLET, a::BULLET),
            Icon::Arrow => pick(supports_unicode, u::ARROW, a::ARROW),
            Icon::Focus => pick(supports_unicode, u::FOCUS, a::FOCUS),
            Icon::Separator => pick(supports_unicode, u::SEPARATOR, a::SEPARATOR),
        }
    }
}

/// Glyph for a star of `size` 1..=4.
pub fn star(size: u8, supports_unicode: bool) -> &'static str {
    let index = usize::from(size.clamp(1, 4) - 1);
    if supports_unicode {
        theme::icons::STARS[index]
    } else {
        theme::icons_ascii::STARS[index]
    }
}
