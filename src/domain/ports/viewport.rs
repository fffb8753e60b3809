//! Viewport port - the host capability the visibility tracker samples
//!
//! Replaces direct access to a global document/window: the tracker only asks
//! "how much of this anchor is on screen right now?".

use crate::domain::value_objects::SectionId;

/// Source of intersection ratios for section anchors
pub trait Viewport {
    /// Fraction (`0.0..=1.0`) of the anchor currently visible. Hosts whose
    /// screen is smaller than an anchor may measure against the screen.
    ///
    /// `None` when the host has no laid-out region for `anchor`; the tracker
    /// treats that as "not visible yet".
    fn intersection_ratio(&self, anchor: &SectionId) -> Option<f32>;
}

impl<V: Viewport + ?Sized> Viewport for &V {
    fn intersection_ratio(&self, anchor: &SectionId) -> Option<f32> {
        (**self).intersection_ratio(anchor)
    }
}
