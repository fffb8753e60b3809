//! Main page layout
//!
//! The page is laid out once per frame into plain rows. Section rows are
//! tagged with their owner so the frame can hide or dim them, and the
//! resulting spans feed the scroll viewport.

use folio::domain::entities::{
    ContactField, Portfolio, Project, SECTION_ABOUT, SECTION_CONTACT, SECTION_PROJECTS,
    SECTION_SKILLS,
};
use folio::infrastructure::{ScrollViewport, SectionSpan};

use super::contact_form::{ContactFormView, FormFocus, Notice};
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::line::Line;
use crate::ui::primitives::text::{wrap, ColoredText, SemanticColor};
use crate::ui::widgets::panel::{Panel, PanelStyle};

const MAX_CONTENT_WIDTH: usize = 76;

#[derive(Debug, Clone, Copy)]
pub struct PageStyle {
    pub width: usize,
    pub unicode: bool,
    pub year: i32,
}

#[derive(Debug, Clone, Default)]
pub struct PageLayout {
    pub lines: Vec<Line>,
    /// Index into `spans` for rows that belong to a section
    pub owners: Vec<Option<usize>>,
    pub spans: Vec<SectionSpan>,
}

impl PageLayout {
    pub fn viewport(&self, height: usize) -> ScrollViewport {
        ScrollViewport::new(self.spans.clone(), self.lines.len(), height)
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    fn push(&mut self, line: Line, owner: Option<usize>) {
        self.lines.push(line);
        self.owners.push(owner);
    }

    fn gap(&mut self, rows: usize) {
        for _ in 0..rows {
            self.push(Line::blank(), None);
        }
    }
}

/// Fixed rows above the scrolling page: name and navigation.
pub fn header(portfolio: &Portfolio, style: &PageStyle) -> Vec<Line> {
    let name = Line::new(ColoredText::accent(portfolio.profile.name).bold()).centered(style.width);

    let sep = ColoredText::dim(format!(" {} ", Icon::Separator.render(style.unicode)));
    let nav_item = |i: usize, icons: bool| {
        let section = &portfolio.sections[i];
        let label = if icons {
            format!("{} {}", section.nav_icon, section.nav_label)
        } else {
            section.nav_label.to_string()
        };
        (ColoredText::accent(format!("{}", i + 1)), ColoredText::plain(format!(" {}", label)))
    };

    let build = |icons: bool| {
        let mut nav = Line::blank();
        for i in 0..portfolio.sections.len() {
            if i > 0 {
                nav = nav.push(sep.clone());
            }
            let (key, label) = nav_item(i, icons);
            nav = nav.push(key).push(label);
        }
        nav
    };

    let mut nav = build(style.unicode);
    if nav.content_width() > style.width {
        nav = build(false);
    }

    vec![name, nav.centered(style.width), Line::blank()]
}

pub fn layout(portfolio: &Portfolio, form: &ContactFormView, style: &PageStyle) -> PageLayout {
    let content = style.width.saturating_sub(4).clamp(20, MAX_CONTENT_WIDTH);
    let margin = style.width.saturating_sub(content) / 2;
    let mut page = PageLayout::default();

    for line in wrap(portfolio.profile.tagline, content) {
        page.push(Line::new(ColoredText::dim(line)).centered(style.width), None);
    }
    page.gap(2);

    for section in &portfolio.sections {
        let owner = Some(page.spans.len());
        let top = page.len();

        let title = Line::new(ColoredText::accent(section.title).bold()).centered(style.width);
        page.push(title, owner);
        page.push(Line::blank(), owner);

        let body = match section.id.as_str() {
            SECTION_ABOUT => about(portfolio, content),
            SECTION_PROJECTS => projects(portfolio, content, style.unicode),
            SECTION_SKILLS => skills(portfolio, content, style.unicode),
            SECTION_CONTACT => contact(portfolio, form, content, style.unicode),
            _ => Vec::new(),
        };
        for line in body {
            let indent = line.indent + margin;
            page.push(line.indented(indent), owner);
        }

        page.spans
            .push(SectionSpan::new(section.id.clone(), top, page.len() - top));
        page.gap(2);
    }

    let footer = format!("© {} {}", style.year, portfolio.profile.footer);
    page.push(Line::new(ColoredText::dim(footer)).centered(style.width), None);
    page.gap(1);
    page
}

fn about(portfolio: &Portfolio, width: usize) -> Vec<Line> {
    let mut lines = Vec::new();
    for (i, paragraph) in portfolio.profile.about.iter().enumerate() {
        if i > 0 {
            lines.push(Line::blank());
        }
        lines.extend(wrap(paragraph, width).into_iter().map(|l| Line::from(l.as_str())));
    }
    lines.push(Line::blank());
    for quote in wrap(portfolio.profile.quote, width.saturating_sub(4)) {
        lines.push(Line::new(ColoredText::accent(quote)).indented(2));
    }
    lines
}

fn projects(portfolio: &Portfolio, width: usize, unicode: bool) -> Vec<Line> {
    let mut lines = Vec::new();
    for (i, project) in portfolio.projects.iter().enumerate() {
        if i > 0 {
            lines.push(Line::blank());
        }
        lines.extend(project_card(project, width, unicode));
    }
    lines
}

fn project_card(project: &Project, width: usize, unicode: bool) -> Vec<Line> {
    let inner = width.saturating_sub(2);
    let text_width = inner.saturating_sub(2);
    let title = if unicode {
        format!("{} {}", project.icon, project.title)
    } else {
        project.title.to_string()
    };

    let mut panel = Panel::new(inner)
        .title(ColoredText::title(title))
        .style(PanelStyle::Plain);
    for line in wrap(project.description, text_width) {
        panel.add(Line::from(line.as_str()));
    }
    panel.add(Line::new(ColoredText::dim(project.tech)));
    match project.link() {
        Some(url) => panel.add(
            Line::new(ColoredText::accent(Icon::Arrow.render(unicode)))
                .push(ColoredText::accent(format!(" {}", url))),
        ),
        None => panel.add(Line::new(ColoredText::dim("Próximamente"))),
    }
    panel.render(0, unicode)
}

fn skills(portfolio: &Portfolio, width: usize, unicode: bool) -> Vec<Line> {
    const GAP: usize = 4;
    let bullet = Icon::Bullet.render(unicode);
    let mut lines = Vec::new();
    let mut row = Line::blank();

    for skill in &portfolio.skills {
        let color = skill
            .rgb()
            .map(|(r, g, b)| SemanticColor::Rgb(r, g, b))
            .unwrap_or(SemanticColor::Accent);
        let item = [
            ColoredText::colored(bullet, color),
            ColoredText::plain(format!(" {}", skill.name)),
        ];
        let item_width: usize = item.iter().map(ColoredText::width).sum();

        if !row.parts.is_empty() && row.content_width() + GAP + item_width > width {
            lines.push(std::mem::take(&mut row));
        }
        if !row.parts.is_empty() {
            row = row.push(ColoredText::plain(" ".repeat(GAP)));
        }
        for part in item {
            row = row.push(part);
        }
    }
    if !row.parts.is_empty() {
        lines.push(row);
    }
    lines
}

fn contact(portfolio: &Portfolio, form: &ContactFormView, width: usize, unicode: bool) -> Vec<Line> {
    let mut lines = Vec::new();
    let inner = width.saturating_sub(2);

    for field in ContactField::ALL {
        let focused = form.focus == Some(FormFocus::Field(field));
        let label = if focused {
            ColoredText::accent(format!("{} {}", Icon::Focus.render(unicode), field.label())).bold()
        } else {
            ColoredText::plain(format!("  {}", field.label()))
        };
        lines.push(Line::new(label));

        let value = form.form.field(field);
        let shown = if value.is_empty() {
            ColoredText::dim(field.placeholder())
        } else {
            ColoredText::plain(tail(value, inner.saturating_sub(3)))
        };
        let mut input = Panel::new(inner).style(if focused {
            PanelStyle::Focused
        } else {
            PanelStyle::Plain
        });
        let cursor = if focused { "_" } else { "" };
        input.add(Line::new(shown).push(ColoredText::accent(cursor)));
        lines.extend(input.render(0, unicode));
    }

    lines.push(Line::blank());
    let mut button = ColoredText::accent("[ Enviar Mensaje ]").bold();
    if form.focus == Some(FormFocus::Send) {
        button = button.reverse();
    }
    lines.push(Line::new(button).centered(width));

    match &form.notice {
        Some(Notice::Sent) => lines.push(
            Line::new(ColoredText::success(format!(
                "{} Abriendo tu cliente de correo...",
                Icon::Success.render(unicode)
            )))
            .centered(width),
        ),
        Some(Notice::Error(message)) => lines.push(
            Line::new(ColoredText::error(format!("{} {}", Icon::Error.render(unicode), message)))
                .centered(width),
        ),
        None => lines.push(Line::blank()),
    }

    lines.push(Line::blank());
    lines.push(Line::new(ColoredText::dim("También podés encontrarme en:")).centered(width));
    for link in &portfolio.links {
        lines.push(
            Line::new(ColoredText::accent(format!("{:<9}", link.label)))
                .push(ColoredText::plain(link.url))
                .centered(width),
        );
    }
    lines
}

/// Last `width` columns of `text`, so the cursor end stays visible.
fn tail(text: &str, width: usize) -> String {
    let flat: String = text.chars().map(|c| if c == '\n' { ' ' } else { c }).collect();
    let count = flat.chars().count();
    if count <= width {
        return flat;
    }
    flat.chars().skip(count - width).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn style() -> PageStyle {
        PageStyle {
            width: 80,
            unicode: false,
            year: 2026,
        }
    }

    #[test]
    fn every_section_gets_a_span_in_order() {
        let portfolio = Portfolio::builtin();
        let page = layout(&portfolio, &ContactFormView::default(), &style());

        let ids: Vec<&str> = page.spans.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec![SECTION_ABOUT, SECTION_PROJECTS, SECTION_SKILLS, SECTION_CONTACT]);
        for pair in page.spans.windows(2) {
            assert!(pair[0].bottom() <= pair[1].top);
        }
        assert_eq!(page.lines.len(), page.owners.len());
    }

    #[test]
    fn owners_match_spans() {
        let portfolio = Portfolio::builtin();
        let page = layout(&portfolio, &ContactFormView::default(), &style());
        for (i, span) in page.spans.iter().enumerate() {
            for row in span.top..span.bottom() {
                assert_eq!(page.owners[row], Some(i));
            }
        }
    }

    #[test]
    fn lines_fit_the_width() {
        let portfolio = Portfolio::builtin();
        let page = layout(&portfolio, &ContactFormView::default(), &style());
        for line in &page.lines {
            assert!(line.width() <= 80, "{:?}", line.plain());
        }
    }

    #[test]
    fn footer_carries_year() {
        let portfolio = Portfolio::builtin();
        let page = layout(&portfolio, &ContactFormView::default(), &style());
        assert!(page
            .lines
            .iter()
            .any(|l| l.plain().contains("© 2026 MATÍAS // DEV1990")));
    }

    #[test]
    fn header_drops_icons_when_too_narrow() {
        let portfolio = Portfolio::builtin();
        let narrow = PageStyle {
            width: 40,
            unicode: true,
            year: 2026,
        };
        let rows = header(&portfolio, &narrow);
        assert!(!rows[1].plain().contains('🚀'));
    }

    #[test]
    fn tail_keeps_end_of_long_input() {
        assert_eq!(tail("hola\nmundo", 20), "hola mundo");
        assert_eq!(tail("abcdef", 3), "def");
    }
}
