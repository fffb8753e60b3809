//! Common test utilities for folio CLI tests.
//!
//! - `TestEnv`: isolated HOME / config dir plus helpers to run the binary
//! - Fixtures: config files used across tests

pub mod env;
pub mod fixtures;

#[allow(unused_imports)]
pub use env::*;
#[allow(unused_imports)]
pub use fixtures::*;
