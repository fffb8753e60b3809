//! Interactive terminal host
//!
//! Owns the screen while the portfolio is open: raw mode, alternate screen,
//! a wall clock feeding the session, and key handling. The session decides
//! what is shown; this module only draws it and forwards input.

use std::io::{self, Write};
use std::time::{Duration, Instant};

use anyhow::Result;
use chrono::Datelike;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::{cursor, style, terminal, QueueableCommand};

use folio::domain::entities::SECTION_CONTACT;
use folio::infrastructure::{ScrollViewport, SystemLinkOpener};
use folio::{Session, Stage};

use crate::ui::context::UiContext;
use crate::ui::primitives::line::Line;
use crate::ui::views::frame::{self, StarOverlay};
use crate::ui::views::{loading, page, welcome, ContactFormView, FormFocus, PageLayout, PageStyle};

/// Redraw cadence while something on screen is animating
const FRAME: Duration = Duration::from_millis(80);
/// Longest sleep between polls when nothing is scheduled
const IDLE: Duration = Duration::from_secs(1);

/// Raw mode plus alternate screen, restored on drop.
struct TerminalGuard;

impl TerminalGuard {
    fn enter(out: &mut impl Write) -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        out.queue(terminal::EnterAlternateScreen)?;
        out.queue(cursor::Hide)?;
        out.queue(terminal::Clear(terminal::ClearType::All))?;
        out.flush()?;
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        restore_terminal();
    }
}

fn restore_terminal() {
    let mut out = io::stdout();
    let _ = out.queue(style::ResetColor);
    let _ = out.queue(cursor::Show);
    let _ = out.queue(terminal::LeaveAlternateScreen);
    let _ = out.flush();
    let _ = terminal::disable_raw_mode();
}

/// Restore the terminal before the default hook prints the panic.
fn install_panic_hook() {
    let previous = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        restore_terminal();
        previous(info);
    }));
}

/// How keys are read in the current state of the page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Loading or welcome screen
    Splash,
    Browse,
    /// A contact form field or the send button has focus
    Editing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    Enter,
    ScrollDown,
    ScrollUp,
    PageDown,
    PageUp,
    Top,
    Bottom,
    /// Jump to the nth section (0-based)
    Jump(usize),
    NextField,
    PrevField,
    Activate,
    Leave,
    Type(char),
    Backspace,
    None,
}

pub fn key_to_action(key: KeyEvent, mode: InputMode) -> Action {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Action::Quit;
    }

    match mode {
        InputMode::Splash => match key.code {
            KeyCode::Enter | KeyCode::Char(' ') => Action::Enter,
            KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
            _ => Action::None,
        },
        InputMode::Browse => match key.code {
            KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
            KeyCode::Down | KeyCode::Char('j') => Action::ScrollDown,
            KeyCode::Up | KeyCode::Char('k') => Action::ScrollUp,
            KeyCode::PageDown | KeyCode::Char(' ') => Action::PageDown,
            KeyCode::PageUp => Action::PageUp,
            KeyCode::Home | KeyCode::Char('g') => Action::Top,
            KeyCode::End | KeyCode::Char('G') => Action::Bottom,
            KeyCode::Char(c @ '1'..='9') => Action::Jump(c as usize - '1' as usize),
            KeyCode::Tab => Action::NextField,
            KeyCode::BackTab => Action::PrevField,
            _ => Action::None,
        },
        InputMode::Editing => match key.code {
            KeyCode::Esc => Action::Leave,
            KeyCode::Tab | KeyCode::Down => Action::NextField,
            KeyCode::BackTab | KeyCode::Up => Action::PrevField,
            KeyCode::Enter => Action::Activate,
            KeyCode::Backspace => Action::Backspace,
            KeyCode::Char(c) => Action::Type(c),
            _ => Action::None,
        },
    }
}

struct App<'a> {
    session: Session,
    ui: &'a UiContext,
    form: ContactFormView,
    recipient: String,
    opener: SystemLinkOpener,
    header: Vec<Line>,
    layout: PageLayout,
    viewport: ScrollViewport,
    width: usize,
    height: usize,
    year: i32,
    quit: bool,
}

impl<'a> App<'a> {
    fn new(session: Session, ui: &'a UiContext, recipient: String, size: (u16, u16)) -> Self {
        let mut app = Self {
            session,
            ui,
            form: ContactFormView::default(),
            recipient,
            opener: SystemLinkOpener,
            header: Vec::new(),
            layout: PageLayout::default(),
            viewport: ScrollViewport::new(Vec::new(), 0, 0),
            width: usize::from(size.0),
            height: usize::from(size.1),
            year: chrono::Local::now().year(),
            quit: false,
        };
        app.relayout();
        app
    }

    fn style(&self) -> PageStyle {
        PageStyle {
            width: self.width,
            unicode: self.ui.unicode,
            year: self.year,
        }
    }

    /// Rebuild the page for the current size and form state, keeping the
    /// scroll position.
    fn relayout(&mut self) {
        let style = self.style();
        self.header = page::header(self.session.portfolio(), &style);
        self.layout = page::layout(self.session.portfolio(), &self.form, &style);
        let offset = self.viewport.offset();
        self.viewport = self
            .layout
            .viewport(self.height.saturating_sub(self.header.len()));
        self.viewport.scroll_to(offset);
    }

    fn resize(&mut self, width: u16, height: u16) {
        self.width = usize::from(width);
        self.height = usize::from(height);
        self.relayout();
    }

    fn mode(&self) -> InputMode {
        match self.session.stage() {
            Stage::Loading | Stage::Welcome => InputMode::Splash,
            Stage::Main if self.form.is_editing() => InputMode::Editing,
            Stage::Main => InputMode::Browse,
        }
    }

    fn handle_key(&mut self, key: KeyEvent, now: Duration) {
        let action = key_to_action(key, self.mode());
        let form_before = (self.form.focus, self.form.form.clone(), self.form.notice.clone());

        match action {
            Action::Quit => self.quit = true,
            Action::Enter => {
                self.session.enter_site(now);
            }
            Action::ScrollDown => self.viewport.scroll_by(1),
            Action::ScrollUp => self.viewport.scroll_by(-1),
            Action::PageDown => self.viewport.page_down(),
            Action::PageUp => self.viewport.page_up(),
            Action::Top => self.viewport.scroll_to(0),
            Action::Bottom => self.viewport.scroll_to_end(),
            Action::Jump(index) => {
                if let Some(section) = self.session.portfolio().sections.get(index) {
                    let id = section.id.clone();
                    self.viewport.scroll_into_view(id.as_str());
                }
            }
            Action::NextField => {
                self.form.focus_next();
                self.viewport.scroll_into_view(SECTION_CONTACT);
            }
            Action::PrevField => {
                self.form.focus_prev();
                self.viewport.scroll_into_view(SECTION_CONTACT);
            }
            Action::Activate => match self.form.focus {
                Some(FormFocus::Send) => self.submit(),
                _ => self.form.focus_next(),
            },
            Action::Leave => self.form.leave(),
            Action::Type(c) => self.form.type_char(c),
            Action::Backspace => self.form.backspace(),
            Action::None => {}
        }

        let form_after = (self.form.focus, self.form.form.clone(), self.form.notice.clone());
        if form_before != form_after {
            self.relayout();
        }
    }

    fn submit(&mut self) {
        match self.form.submit(&self.recipient, &self.opener) {
            Ok(link) => tracing::info!(%link, "contact message handed to mail client"),
            Err(err) => tracing::warn!(error = %err, "contact message not sent"),
        }
    }

    /// Time until the loop should wake up without input.
    fn wait(&self, now: Duration) -> Duration {
        let animating = self.ui.animation
            && self.session.stage() == Stage::Main
            && self.session.starfield().is_some_and(|f| f.is_running());
        let until_deadline = self
            .session
            .next_deadline()
            .map(|at| at.saturating_sub(now))
            .unwrap_or(IDLE);

        if animating {
            until_deadline.min(FRAME)
        } else {
            until_deadline.min(IDLE)
        }
    }

    fn screen(&self, now: Duration) -> Vec<String> {
        let unicode = self.ui.unicode;
        let (w, h) = (self.width, self.height);
        let (lines, overlay) = match self.session.stage() {
            Stage::Loading => (
                loading::render(self.session.progress(), w, h, unicode),
                None,
            ),
            Stage::Welcome => (
                welcome::render(
                    self.session.portfolio(),
                    !self.session.is_loading_active(),
                    w,
                    h,
                    unicode,
                ),
                None,
            ),
            Stage::Main => {
                let mut lines = self.header.clone();
                lines.extend(frame::page_rows(
                    &self.layout,
                    self.viewport.visible_rows(),
                    |id| self.session.reveal_progress(id.as_str(), now),
                ));
                let overlay = self.session.starfield().map(|field| StarOverlay {
                    stars: field.stars(),
                    now,
                    unicode,
                });
                (lines, overlay)
            }
        };
        frame::compose(&lines, w, h, overlay, self.ui.color, self.ui.true_color)
    }

    fn draw(&self, out: &mut impl Write, now: Duration) -> io::Result<()> {
        out.queue(terminal::BeginSynchronizedUpdate)?;
        for (row, text) in self.screen(now).iter().enumerate() {
            let row = u16::try_from(row).unwrap_or(u16::MAX);
            out.queue(cursor::MoveTo(0, row))?;
            out.queue(style::Print(text))?;
            out.queue(terminal::Clear(terminal::ClearType::UntilNewLine))?;
        }
        out.queue(terminal::EndSynchronizedUpdate)?;
        out.flush()
    }
}

/// Take over the terminal and run `session` until the visitor quits.
pub fn run(session: Session, ui: &UiContext, recipient: String) -> Result<()> {
    let mut stdout = io::stdout();
    install_panic_hook();
    let _guard = TerminalGuard::enter(&mut stdout)?;

    let size = terminal::size().unwrap_or((ui.caps.width, ui.caps.height));
    let mut app = App::new(session, ui, recipient, size);
    let clock = Instant::now();
    app.session.mount(Duration::ZERO);

    while !app.quit {
        let now = clock.elapsed();
        let frame = app.session.advance(now, &app.viewport);
        if !frame.revealed.is_empty() {
            tracing::debug!(count = frame.revealed.len(), "sections revealed");
        }
        app.draw(&mut stdout, now)?;

        if event::poll(app.wait(now))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    app.handle_key(key, clock.elapsed());
                }
                Event::Resize(width, height) => app.resize(width, height),
                _ => {}
            }
        }
    }

    app.session.shutdown();
    Ok(())
}
