//! Configuration loading
//!
//! Hierarchy, highest first:
//! 1. CLI flags (applied by the binary)
//! 2. Environment variables (FOLIO_*)
//! 3. `--config <path>` or the user config (~/.config/folio/config.toml)
//! 4. Built-in defaults

use std::fmt;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::{FolioError, FolioResult};

use super::env_validator::{closest, EnvVarValidator};
use super::types::{AnimationMode, ColorMode, Config};

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

impl fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown config key '{}' in {}", self.key, self.file.display())?;
        if let Some(line) = self.line {
            write!(f, ":{}", line)?;
        }
        if let Some(suggestion) = &self.suggestion {
            write!(f, ". Did you mean '{}'?", suggestion)?;
        }
        Ok(())
    }
}

/// Effective configuration plus where it came from
#[derive(Debug, Clone, Default)]
pub struct LoadedConfig {
    pub config: Config,
    pub source: Option<PathBuf>,
    pub warnings: Vec<ConfigWarning>,
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> FolioResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;
    parse_with_warnings(&content, path)
}

pub(crate) fn parse_with_warnings(
    content: &str,
    path: &Path,
) -> FolioResult<(Config, Vec<ConfigWarning>)> {
    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| FolioError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                line: find_line_number(content, &key),
                suggestion: suggest_key(&key),
                file: path.to_path_buf(),
                key,
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Resolve the effective configuration.
///
/// An explicit path must exist; the user config is optional.
pub fn load(explicit: Option<&Path>) -> FolioResult<LoadedConfig> {
    let file = match explicit {
        Some(path) if !path.exists() => {
            return Err(FolioError::ConfigNotFound {
                path: path.to_path_buf(),
            })
        }
        Some(path) => Some(path.to_path_buf()),
        None => Config::user_config_path().filter(|p| p.exists()),
    };

    let mut loaded = LoadedConfig::default();
    if let Some(path) = file {
        let (config, warnings) = load_with_warnings(&path)?;
        tracing::debug!(path = %path.display(), warnings = warnings.len(), "loaded config");
        loaded.config = config;
        loaded.warnings = warnings;
        loaded.source = Some(path);
    }

    loaded.config = with_env_overrides(loaded.config);
    loaded.config.validate()?;
    Ok(loaded)
}

/// Apply environment variable overrides (FOLIO_* prefix)
pub fn with_env_overrides(config: Config) -> Config {
    with_env_overrides_from(config, |key| std::env::var(key).ok(), &mut std::io::stderr())
}

/// Same as [`with_env_overrides`] with an injected environment
pub fn with_env_overrides_from<F, W>(mut config: Config, get_env: F, writer: &mut W) -> Config
where
    F: Fn(&str) -> Option<String>,
    W: Write,
{
    if let Some(value) = get_env("FOLIO_COLOR") {
        config.output.color = EnvVarValidator::new("FOLIO_COLOR", &["auto", "always", "never"])
            .parse_with_writer(&value, parse_color, config.output.color, writer);
    }

    if let Some(value) = get_env("FOLIO_ANIMATION") {
        config.output.animation =
            EnvVarValidator::new("FOLIO_ANIMATION", &["auto", "always", "never"])
                .parse_with_writer(&value, parse_animation, config.output.animation, writer);
    }

    if let Some(value) = get_env("FOLIO_STARS") {
        config.stars.enabled = EnvVarValidator::new("FOLIO_STARS", &["true", "false", "on", "off"])
            .parse_with_writer(&value, parse_bool, config.stars.enabled, writer);
    }

    if let Some(value) = get_env("FOLIO_REVEAL_THRESHOLD") {
        config.reveal.threshold = EnvVarValidator::new("FOLIO_REVEAL_THRESHOLD", &["a number in (0, 1]"])
            .parse_with_writer(&value, parse_fraction, config.reveal.threshold, writer);
    }

    config
}

fn parse_color(value: &str) -> Option<ColorMode> {
    match value.trim().to_lowercase().as_str() {
        "auto" => Some(ColorMode::Auto),
        "always" => Some(ColorMode::Always),
        "never" => Some(ColorMode::Never),
        _ => None,
    }
}

fn parse_animation(value: &str) -> Option<AnimationMode> {
    match value.trim().to_lowercase().as_str() {
        "auto" => Some(AnimationMode::Auto),
        "always" => Some(AnimationMode::Always),
        "never" => Some(AnimationMode::Never),
        _ => None,
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "on" | "yes" => Some(true),
        "0" | "false" | "off" | "no" => Some(false),
        _ => None,
    }
}

fn parse_fraction(value: &str) -> Option<f32> {
    value
        .trim()
        .parse::<f32>()
        .ok()
        .filter(|v| *v > 0.0 && *v <= 1.0)
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| line.contains(needle))
        .map(|i| i + 1)
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "timing",
        "progress_interval_ms",
        "progress_step",
        "welcome_delay_ms",
        "enter_delay_ms",
        "reveal",
        "threshold",
        "fade_ms",
        "stars",
        "enabled",
        "initial",
        "initial_window_ms",
        "spawn_interval_ms",
        "lifetime_ms",
        "capacity",
        "output",
        "color",
        "animation",
        "unicode",
        "contact",
        "recipient",
    ];

    closest(unknown, CANDIDATES).map(str::to_string)
}
