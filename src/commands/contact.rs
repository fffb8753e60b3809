use anyhow::Result;
use dialoguer::Input;
use folio::domain::entities::{ContactField, ContactForm};
use folio::infrastructure::SystemLinkOpener;
use folio::{Config, FolioError, LinkOpener};

use crate::ui::context::UiContext;
use crate::ui::primitives::icon::Icon;
use crate::ui::theme::FolioTheme;

/// Build the mailto link for a message. Missing fields are prompted for
/// when stdin is a terminal.
pub fn cmd_contact(
    config: &Config,
    ui: &UiContext,
    email: Option<String>,
    subject: Option<String>,
    message: Option<String>,
    open: bool,
) -> Result<()> {
    let prompt = !ui.json && ui.caps.stdin_is_tty;
    let theme = FolioTheme::new(ui.unicode);

    let form = ContactForm::new(
        fill(email, ContactField::Email, prompt, &theme)?,
        fill(subject, ContactField::Subject, prompt, &theme)?,
        fill(message, ContactField::Message, prompt, &theme)?,
    );
    let link = form
        .validate()
        .map_err(FolioError::from)?
        .mailto(&config.contact.recipient);

    if open {
        SystemLinkOpener.open(&link)?;
    }

    if ui.json {
        crate::ui::json::emit(
            "contact",
            serde_json::json!({ "link": link, "opened": open }),
        )?;
        return Ok(());
    }

    println!("{}", link);
    if open {
        eprintln!(
            "{} Abriendo tu cliente de correo...",
            Icon::Success.render(ui.unicode)
        );
    }
    Ok(())
}

fn fill(
    value: Option<String>,
    field: ContactField,
    prompt: bool,
    theme: &FolioTheme,
) -> Result<String> {
    match value {
        Some(value) => Ok(value),
        None if prompt => Ok(Input::<String>::with_theme(theme)
            .with_prompt(field.label())
            .allow_empty(true)
            .interact_text()?),
        None => Ok(String::new()),
    }
}
