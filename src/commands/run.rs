use std::sync::Arc;

use anyhow::Result;
use folio::infrastructure::TracingEventSink;
use folio::{Config, Portfolio, Session};

use crate::ui::context::UiContext;

/// Open the interactive page, or print it when there is no terminal to
/// take over.
pub fn cmd_run(config: &Config, ui: &UiContext, seed: Option<u64>) -> Result<()> {
    if ui.json || !ui.caps.is_interactive() {
        tracing::info!("no interactive terminal, printing the page");
        return super::page::cmd_page(ui, None);
    }

    let options = config.session_options(ui.animation, seed)?;
    let session = Session::new(Portfolio::builtin(), options, Arc::new(TracingEventSink));
    crate::ui::app::run(session, ui, config.contact.recipient.clone())
}
