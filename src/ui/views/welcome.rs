use folio::Portfolio;

use crate::ui::primitives::line::Line;
use crate::ui::primitives::text::ColoredText;
use crate::ui::widgets::panel::{Panel, PanelStyle};

const BUTTON: &str = "INGRESAR";

/// Welcome screen. `fading` dims everything while the splash hands over.
pub fn render(
    portfolio: &Portfolio,
    fading: bool,
    width: usize,
    height: usize,
    unicode: bool,
) -> Vec<Line> {
    let mut body = Vec::new();

    let title = portfolio.profile.welcome_title;
    let (lead, name) = match title.split_once(": ") {
        Some((lead, name)) => (format!("{}:", lead), name),
        None => (String::new(), title),
    };
    if !lead.is_empty() {
        body.push(Line::new(ColoredText::dim(lead)).centered(width));
    }
    body.push(Line::new(ColoredText::accent(name).bold()).centered(width));
    body.push(Line::blank());
    body.push(Line::new(ColoredText::plain(portfolio.profile.greeting)).centered(width));
    body.push(Line::blank());

    let mut button = Panel::new(BUTTON.len() + 4).style(PanelStyle::Accent);
    button.add(Line::new(ColoredText::accent(BUTTON).bold()).indented(1));
    let indent = width.saturating_sub(button.width()) / 2;
    body.extend(button.render(indent, unicode));

    body.push(Line::blank());
    body.push(Line::new(ColoredText::dim("Enter para ingresar, q para salir")).centered(width));

    let mut lines = vec![Line::blank(); height.saturating_sub(body.len()) / 2];
    lines.extend(body);
    if fading {
        lines.iter().map(Line::dimmed).collect()
    } else {
        lines
    }
}
