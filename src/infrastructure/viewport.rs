//! Scroll Viewport
//!
//! Row-based viewport over a laid-out page. Each section occupies a span of
//! rows; its intersection ratio is the share of those rows currently on
//! screen.

use crate::domain::ports::Viewport;
use crate::domain::value_objects::SectionId;

/// Rows occupied by one section in the laid-out page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionSpan {
    pub id: SectionId,
    pub top: usize,
    pub height: usize,
}

impl SectionSpan {
    pub fn new(id: impl Into<SectionId>, top: usize, height: usize) -> Self {
        Self {
            id: id.into(),
            top,
            height,
        }
    }

    pub fn bottom(&self) -> usize {
        self.top + self.height
    }
}

#[derive(Debug, Clone, Default)]
pub struct ScrollViewport {
    spans: Vec<SectionSpan>,
    content_height: usize,
    offset: usize,
    height: usize,
}

impl ScrollViewport {
    pub fn new(spans: Vec<SectionSpan>, content_height: usize, height: usize) -> Self {
        let content_height = spans
            .iter()
            .map(SectionSpan::bottom)
            .max()
            .unwrap_or(0)
            .max(content_height);
        Self {
            spans,
            content_height,
            offset: 0,
            height,
        }
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn content_height(&self) -> usize {
        self.content_height
    }

    pub fn spans(&self) -> &[SectionSpan] {
        &self.spans
    }

    pub fn span(&self, id: &str) -> Option<&SectionSpan> {
        self.spans.iter().find(|s| s.id.as_str() == id)
    }

    pub fn max_offset(&self) -> usize {
        self.content_height.saturating_sub(self.height)
    }

    /// Set the first visible row, clamped to the scrollable range.
    pub fn scroll_to(&mut self, offset: usize) {
        self.offset = offset.min(self.max_offset());
    }

    pub fn scroll_by(&mut self, delta: isize) {
        let target = if delta.is_negative() {
            self.offset.saturating_sub(delta.unsigned_abs())
        } else {
            self.offset.saturating_add(delta.unsigned_abs())
        };
        self.scroll_to(target);
    }

    pub fn page_down(&mut self) {
        self.scroll_by(self.page() as isize);
    }

    pub fn page_up(&mut self) {
        self.scroll_by(-(self.page() as isize));
    }

    pub fn scroll_to_end(&mut self) {
        self.scroll_to(self.max_offset());
    }

    /// Bring a section's first row to the top of the screen.
    pub fn scroll_into_view(&mut self, id: &str) -> bool {
        match self.span(id).map(|s| s.top) {
            Some(top) => {
                self.scroll_to(top);
                true
            }
            None => false,
        }
    }

    /// Change the number of visible rows (terminal resize).
    pub fn resize(&mut self, height: usize) {
        self.height = height;
        self.scroll_to(self.offset);
    }

    /// Visible row range, `start..end`.
    pub fn visible_rows(&self) -> std::ops::Range<usize> {
        self.offset..(self.offset + self.height).min(self.content_height.max(self.offset))
    }

    fn page(&self) -> usize {
        self.height.saturating_sub(1).max(1)
    }
}

impl Viewport for ScrollViewport {
    fn intersection_ratio(&self, anchor: &SectionId) -> Option<f32> {
        let span = self.span(anchor.as_str())?;
        let top = self.offset;
        let bottom = self.offset + self.height;

        if span.height == 0 {
            let on_screen = (top..bottom).contains(&span.top);
            return Some(if on_screen { 1.0 } else { 0.0 });
        }

        // A section taller than the screen counts as fully visible once it
        // fills every row.
        let visible_max = span.height.min(self.height);
        if visible_max == 0 {
            return Some(0.0);
        }
        let overlap = span.bottom().min(bottom).saturating_sub(span.top.max(top));
        Some(overlap as f32 / visible_max as f32)
    }
}
