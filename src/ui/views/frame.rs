//! Screen composition
//!
//! Turns view lines into terminal rows. On the main page, hidden sections
//! render as blank rows and sections mid-reveal are dimmed. Stars are drawn
//! only into columns a row leaves empty, so they never cover text.

use std::ops::Range;
use std::time::Duration;

use folio::domain::services::Star;
use folio::SectionId;

use super::page::PageLayout;
use crate::ui::primitives::icon;
use crate::ui::primitives::line::Line;
use crate::ui::primitives::text::ColoredText;

/// Reveal fraction below which a section still draws dimmed
const DIM_UNTIL: f32 = 0.5;

#[derive(Debug, Clone, Copy)]
pub struct StarOverlay<'a> {
    pub stars: &'a [Star],
    pub now: Duration,
    pub unicode: bool,
}

/// Page rows in `rows`, with reveal state applied. `reveal` answers how far
/// a section's transition has run (`None` while hidden).
pub fn page_rows<F>(page: &PageLayout, rows: Range<usize>, reveal: F) -> Vec<Line>
where
    F: Fn(&SectionId) -> Option<f32>,
{
    rows.filter_map(|row| {
        let line = page.lines.get(row)?;
        let owner = page.owners.get(row).copied().flatten();
        let state = owner.map(|i| reveal(&page.spans[i].id));
        Some(match state {
            None => line.clone(),
            Some(None) => Line::blank(),
            Some(Some(p)) if p < DIM_UNTIL => line.dimmed(),
            Some(Some(_)) => line.clone(),
        })
    })
    .collect()
}

/// Render exactly `height` rows of at most `width` columns.
pub fn compose(
    lines: &[Line],
    width: usize,
    height: usize,
    overlay: Option<StarOverlay<'_>>,
    color: bool,
    true_color: bool,
) -> Vec<String> {
    let mut grid: Vec<Vec<Option<ColoredText>>> = vec![vec![None; width]; height];
    if let Some(overlay) = overlay {
        for star in overlay.stars {
            let col = ((star.x * width as f32) as usize).min(width.saturating_sub(1));
            let row = ((star.y * height as f32) as usize).min(height.saturating_sub(1));
            if let Some(cell) = grid.get_mut(row).and_then(|r| r.get_mut(col)) {
                *cell = Some(star_glyph(star, overlay.now, overlay.unicode));
            }
        }
    }

    let blank = Line::blank();
    (0..height)
        .map(|row| {
            let line = lines.get(row).unwrap_or(&blank);
            compose_row(line, &grid[row], color, true_color)
        })
        .collect()
}

fn compose_row(line: &Line, stars: &[Option<ColoredText>], color: bool, true_color: bool) -> String {
    let cell = |col: usize| match stars.get(col).and_then(Option::as_ref) {
        Some(star) => star.render(color, true_color),
        None => " ".to_string(),
    };

    let mut out: String = (0..line.indent).map(cell).collect();
    for part in &line.parts {
        out.push_str(&part.render(color, true_color));
    }

    let end = line.width();
    let last = stars.iter().rposition(Option::is_some).filter(|last| *last >= end);
    if let Some(last) = last {
        out.extend((end..=last).map(cell));
    }
    out
}

fn star_glyph(star: &Star, now: Duration, unicode: bool) -> ColoredText {
    let glyph = icon::star(star.size, unicode);
    match star.brightness(now) {
        b if b >= 0.65 => ColoredText::title(glyph),
        b if b >= 0.45 => ColoredText::plain(glyph),
        _ => ColoredText::dim(glyph),
    }
}
