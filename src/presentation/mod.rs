//! Presentation Layer
//!
//! CLI argument parsing shared by the binary and its tests.

pub mod cli;

pub use cli::{Cli, ColorWhen, Commands};
