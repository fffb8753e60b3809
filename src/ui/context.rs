use folio::config::{AnimationMode, ColorMode, Config};
use folio::presentation::ColorWhen;

use crate::ui::terminal::{detect_capabilities, TerminalCapabilities};

/// Output decisions for one run, from CLI flags, config and the terminal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiContext {
    pub json: bool,
    pub verbose: u8,
    pub caps: TerminalCapabilities,
    pub color: bool,
    pub true_color: bool,
    pub unicode: bool,
    /// Starfield and reveal transitions
    pub animation: bool,
}

impl UiContext {
    pub fn new(
        json: bool,
        verbose: u8,
        cli_color: Option<ColorWhen>,
        cli_no_animation: bool,
        config: &Config,
    ) -> Self {
        let caps = detect_capabilities();
        Self::from_caps(json, verbose, cli_color, cli_no_animation, config, caps)
    }

    pub(crate) fn from_caps(
        json: bool,
        verbose: u8,
        cli_color: Option<ColorWhen>,
        cli_no_animation: bool,
        config: &Config,
        caps: TerminalCapabilities,
    ) -> Self {
        let unicode = config.output.unicode && caps.supports_unicode;

        let color = match cli_color {
            Some(ColorWhen::Never) => false,
            Some(ColorWhen::Always) => true,
            Some(ColorWhen::Auto) | None => match config.output.color {
                ColorMode::Never => false,
                ColorMode::Always => true,
                ColorMode::Auto => caps.supports_color && !caps.is_ci,
            },
        };

        let animation = !json
            && !cli_no_animation
            && match config.output.animation {
                AnimationMode::Never => false,
                AnimationMode::Always => true,
                AnimationMode::Auto => !caps.is_ci,
            };

        Self {
            json,
            verbose,
            caps,
            color,
            true_color: color && caps.supports_true_color,
            unicode,
            animation,
        }
    }

    pub fn width(&self) -> u16 {
        self.caps.width
    }
}
