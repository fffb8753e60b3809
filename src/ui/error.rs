use folio::FolioError;

use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

/// One-line hint printed under a known error
fn hint(err: &FolioError) -> Option<&'static str> {
    match err {
        FolioError::InvalidConfig { .. } => Some("Fix the TOML syntax or remove the file."),
        FolioError::ConfigNotFound { .. } => Some("Pass an existing file to --config, or drop the flag."),
        FolioError::InvalidSetting { .. } => Some("Check the value in your config or FOLIO_* variables."),
        FolioError::OpenLink { .. } => Some("Copy the link above into your mail client instead."),
        FolioError::Contact(_) | FolioError::Io(_) => None,
    }
}

pub fn format_error_with(err: &anyhow::Error, supports_color: bool, supports_unicode: bool) -> String {
    let icon = Icon::Error.render(supports_unicode);
    let mut out = ColoredText::error(format!("{} {}", icon, err)).render(supports_color, false);
    out.push('\n');

    if let Some(hint) = err.downcast_ref::<FolioError>().and_then(hint) {
        out.push_str(&ColoredText::dim(format!("  {}", hint)).render(supports_color, false));
        out.push('\n');
    }
    out
}

pub fn print_error(err: &anyhow::Error, json: bool) {
    if json {
        let _ = crate::ui::json::emit("error", serde_json::json!({ "message": err.to_string() }));
        return;
    }

    let caps = crate::ui::terminal::detect_capabilities();
    eprint!(
        "{}",
        format_error_with(err, caps.supports_color, caps.supports_unicode)
    );
}
