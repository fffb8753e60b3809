use crossterm::style::Color;
use dialoguer::theme::{ColorfulTheme, Theme};
use std::fmt;

/// Design tokens for the Folio terminal page.
///
/// Only the semantic colors below plus per-skill brand colors are used.
pub mod colors {
    use super::Color;

    /// Neon accent, #4c9aff
    pub const ACCENT: Color = Color::Rgb {
        r: 0x4c,
        g: 0x9a,
        b: 0xff,
    };
    /// Fallback for terminals without true color
    pub const ACCENT_ANSI: Color = Color::Cyan;
    pub const TITLE: Color = Color::White;
    pub const SUCCESS: Color = Color::Green;
    pub const ERROR: Color = Color::Red;
    pub const WARNING: Color = Color::Yellow;
    pub const DIM: Color = Color::DarkGrey;
}

pub mod icons {
    pub const SUCCESS: &str = "✓";
    pub const ERROR: &str = "✗";
    pub const WARNING: &str = "⚠";
    pub const BULLET: &str = "■";
    pub const ARROW: &str = "→";
    pub const FOCUS: &str = "▸";
    pub const SEPARATOR: &str = "·";
    /// Star glyphs by size, smallest first
    pub const STARS: [&str; 4] = ["·", "∙", "•", "✦"];
}

pub mod icons_ascii {
    pub const SUCCESS: &str = "[OK]";
    pub const ERROR: &str = "[X]";
    pub const WARNING: &str = "[!]";
    pub const BULLET: &str = "*";
    pub const ARROW: &str = "->";
    pub const FOCUS: &str = ">";
    pub const SEPARATOR: &str = "-";
    pub const STARS: [&str; 4] = [".", ".", "+", "*"];
}

pub mod borders {
    pub const TOP_LEFT: &str = "╭";
    pub const TOP_RIGHT: &str = "╮";
    pub const BOTTOM_LEFT: &str = "╰";
    pub const BOTTOM_RIGHT: &str = "╯";
    pub const HORIZONTAL: &str = "─";
    pub const VERTICAL: &str = "│";
}

pub mod borders_ascii {
    pub const TOP_LEFT: &str = "+";
    pub const TOP_RIGHT: &str = "+";
    pub const BOTTOM_LEFT: &str = "+";
    pub const BOTTOM_RIGHT: &str = "+";
    pub const HORIZONTAL: &str = "-";
    pub const VERTICAL: &str = "|";
}

/// Progress bar fill glyphs: (filled, empty)
pub mod bars {
    pub const LINE: (&str, &str) = ("━", "─");
    pub const BLOCKS: (&str, &str) = ("█", "░");
}

pub mod bars_ascii {
    pub const LINE: (&str, &str) = ("=", "-");
    pub const BLOCKS: (&str, &str) = ("#", ".");
}

/// Pick the unicode or ASCII variant of a token.
pub fn pick(unicode: bool, fancy: &'static str, ascii: &'static str) -> &'static str {
    if unicode {
        fancy
    } else {
        ascii
    }
}

// ----------------------------------------------------------------------------
// FolioTheme - dialoguer prompts for `folio contact`
// ----------------------------------------------------------------------------

/// Prompt theme for the contact command.
///
/// Wraps `ColorfulTheme`, replacing its prompt prefix with the page's focus
/// marker (ASCII `>` when unicode is off).
pub struct FolioTheme {
    unicode: bool,
    inner: ColorfulTheme,
}

impl FolioTheme {
    pub fn new(unicode: bool) -> Self {
        Self {
            unicode,
            inner: ColorfulTheme::default(),
        }
    }

    pub fn marker(&self) -> &'static str {
        pick(self.unicode, icons::FOCUS, icons_ascii::FOCUS)
    }
}

impl Theme for FolioTheme {
    fn format_prompt(&self, f: &mut dyn fmt::Write, prompt: &str) -> fmt::Result {
        write!(f, "{} {}", self.marker(), prompt)
    }

    fn format_error(&self, f: &mut dyn fmt::Write, err: &str) -> fmt::Result {
        self.inner.format_error(f, err)
    }

    fn format_input_prompt(
        &self,
        f: &mut dyn fmt::Write,
        prompt: &str,
        default: Option<&str>,
    ) -> fmt::Result {
        match default {
            Some(default) if !default.is_empty() => {
                write!(f, "{} {} ({}): ", self.marker(), prompt, default)
            }
            _ => write!(f, "{} {}: ", self.marker(), prompt),
        }
    }

    fn format_input_prompt_selection(
        &self,
        f: &mut dyn fmt::Write,
        prompt: &str,
        sel: &str,
    ) -> fmt::Result {
        self.inner.format_input_prompt_selection(f, prompt, sel)
    }

    fn format_confirm_prompt(
        &self,
        f: &mut dyn fmt::Write,
        prompt: &str,
        default: Option<bool>,
    ) -> fmt::Result {
        self.inner.format_confirm_prompt(f, prompt, default)
    }

    fn format_confirm_prompt_selection(
        &self,
        f: &mut dyn fmt::Write,
        prompt: &str,
        selection: Option<bool>,
    ) -> fmt::Result {
        self.inner
            .format_confirm_prompt_selection(f, prompt, selection)
    }
}
