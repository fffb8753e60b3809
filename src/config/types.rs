//! Configuration type definitions

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::application::SessionOptions;
use crate::domain::services::{StageTiming, StarfieldSettings};
use crate::domain::value_objects::VisibilityThreshold;
use crate::error::{FolioError, FolioResult};

use super::loader::{self, ConfigWarning};

/// Splash and gate timing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimingConfig {
    pub progress_interval_ms: u64,
    pub progress_step: u8,
    pub welcome_delay_ms: u64,
    pub enter_delay_ms: u64,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            progress_interval_ms: 800,
            progress_step: 20,
            welcome_delay_ms: 500,
            enter_delay_ms: 300,
        }
    }
}

impl TimingConfig {
    pub fn stage_timing(&self) -> StageTiming {
        StageTiming {
            progress_interval: Duration::from_millis(self.progress_interval_ms),
            progress_step: self.progress_step,
            welcome_delay: Duration::from_millis(self.welcome_delay_ms),
            enter_delay: Duration::from_millis(self.enter_delay_ms),
        }
    }
}

/// Scroll-reveal settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RevealConfig {
    /// Fraction of a section that must be on screen, `(0, 1]`
    pub threshold: f32,
    pub fade_ms: u64,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            threshold: VisibilityThreshold::DEFAULT.value(),
            fade_ms: 700,
        }
    }
}

/// Starfield backdrop
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StarsConfig {
    pub enabled: bool,
    pub initial: usize,
    pub initial_window_ms: u64,
    pub spawn_interval_ms: u64,
    pub lifetime_ms: u64,
    pub capacity: usize,
}

impl Default for StarsConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            initial: 50,
            initial_window_ms: 2000,
            spawn_interval_ms: 500,
            lifetime_ms: 10_000,
            capacity: 96,
        }
    }
}

impl StarsConfig {
    /// `None` when the starfield is turned off.
    pub fn settings(&self) -> Option<StarfieldSettings> {
        self.enabled.then(|| StarfieldSettings {
            initial: self.initial,
            initial_window: Duration::from_millis(self.initial_window_ms),
            spawn_interval: Duration::from_millis(self.spawn_interval_ms),
            lifetime: Duration::from_millis(self.lifetime_ms),
            capacity: self.capacity,
        })
    }
}

/// Output configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub color: ColorMode,
    pub animation: AnimationMode,
    pub unicode: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            color: ColorMode::default(),
            animation: AnimationMode::default(),
            unicode: true,
        }
    }
}

/// Color output mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

/// Animation output mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum AnimationMode {
    #[default]
    Auto,
    Always,
    Never,
}

/// Contact form hand-off
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactConfig {
    pub recipient: String,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            recipient: "matirom77@gmail.com".to_string(),
        }
    }
}

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub timing: TimingConfig,
    pub reveal: RevealConfig,
    pub stars: StarsConfig,
    pub output: OutputConfig,
    pub contact: ContactConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> FolioResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> FolioResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Apply environment variable overrides (FOLIO_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self)
    }

    /// Default user config location (`~/.config/folio/config.toml`)
    pub fn user_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("folio").join("config.toml"))
    }

    /// Reject values the core cannot run with.
    pub fn validate(&self) -> FolioResult<()> {
        if self.timing.progress_interval_ms == 0 {
            return Err(FolioError::setting(
                "timing.progress_interval_ms",
                "must be greater than zero",
            ));
        }
        if !(1..=100).contains(&self.timing.progress_step) {
            return Err(FolioError::setting(
                "timing.progress_step",
                "must be between 1 and 100",
            ));
        }
        if VisibilityThreshold::new(self.reveal.threshold).is_none() {
            return Err(FolioError::setting(
                "reveal.threshold",
                format!("{} is outside (0, 1]", self.reveal.threshold),
            ));
        }
        if self.stars.spawn_interval_ms == 0 {
            return Err(FolioError::setting(
                "stars.spawn_interval_ms",
                "must be greater than zero",
            ));
        }
        if self.stars.lifetime_ms == 0 {
            return Err(FolioError::setting(
                "stars.lifetime_ms",
                "must be greater than zero",
            ));
        }
        if self.stars.capacity == 0 {
            return Err(FolioError::setting(
                "stars.capacity",
                "must be greater than zero",
            ));
        }
        if self.stars.initial > self.stars.capacity {
            return Err(FolioError::setting(
                "stars.initial",
                format!("must not exceed stars.capacity ({})", self.stars.capacity),
            ));
        }
        if !self.contact.recipient.contains('@') {
            return Err(FolioError::setting(
                "contact.recipient",
                format!("'{}' is not an email address", self.contact.recipient),
            ));
        }
        Ok(())
    }

    /// Session settings derived from this config.
    ///
    /// `animate = false` drops the starfield and makes reveals instant.
    pub fn session_options(&self, animate: bool, seed: Option<u64>) -> FolioResult<SessionOptions> {
        self.validate()?;
        let threshold = VisibilityThreshold::new(self.reveal.threshold)
            .ok_or_else(|| FolioError::setting("reveal.threshold", "is outside (0, 1]"))?;

        Ok(SessionOptions {
            timing: self.timing.stage_timing(),
            threshold,
            fade: if animate {
                Duration::from_millis(self.reveal.fade_ms)
            } else {
                Duration::ZERO
            },
            stars: if animate { self.stars.settings() } else { None },
            seed,
        })
    }
}
