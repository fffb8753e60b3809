//! Stage Value Object
//!
//! The coarse display phase of the page. Stages only move forward.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Display stage of a portfolio session
///
/// - `Loading`: splash with the progress bar
/// - `Welcome`: greeting gate waiting for the visitor to enter
/// - `Main`: the scrollable page (terminal)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    #[default]
    Loading,
    Welcome,
    Main,
}

impl Stage {
    /// The only stage this one may transition to, if any.
    pub fn next(self) -> Option<Stage> {
        match self {
            Stage::Loading => Some(Stage::Welcome),
            Stage::Welcome => Some(Stage::Main),
            Stage::Main => None,
        }
    }

    pub fn is_terminal(self) -> bool {
        self.next().is_none()
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Stage::Loading => "loading",
            Stage::Welcome => "welcome",
            Stage::Main => "main",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
