//! Configuration module for Folio
//!
//! TOML file with unknown-key warnings, `FOLIO_*` environment overrides and
//! validation of the values the core depends on.

mod env_validator;
mod loader;
mod types;

pub use env_validator::EnvVarValidator;
pub use loader::{load, with_env_overrides_from, ConfigWarning, LoadedConfig};
pub use types::{
    AnimationMode, ColorMode, Config, ContactConfig, OutputConfig, RevealConfig, StarsConfig,
    TimingConfig,
};
