//! Visibility threshold value object

use std::fmt;

/// Fraction of an anchor's area that must be inside the viewport before it
/// counts as seen. Always in `(0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct VisibilityThreshold(f32);

impl VisibilityThreshold {
    pub const DEFAULT: VisibilityThreshold = VisibilityThreshold(0.2);

    /// Returns `None` for values outside `(0, 1]` (and NaN).
    pub fn new(fraction: f32) -> Option<Self> {
        if fraction > 0.0 && fraction <= 1.0 {
            Some(Self(fraction))
        } else {
            None
        }
    }

    pub fn value(self) -> f32 {
        self.0
    }

    /// True when `ratio` counts as visible.
    pub fn is_met_by(self, ratio: f32) -> bool {
        ratio >= self.0
    }
}

impl Default for VisibilityThreshold {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for VisibilityThreshold {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.0}%", self.0 * 100.0)
    }
}
