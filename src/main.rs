//! Folio CLI - terminal portfolio
//!
//! Usage: folio [COMMAND]
//!
//! Commands:
//!   run       Open the interactive portfolio (default)
//!   page      Print the fully revealed page once
//!   timeline  Play the session on a clock and print its events
//!   contact   Compose a message for the contact form

use std::fs::File;
use std::io;
use std::path::Path;
use std::sync::Mutex;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use folio::presentation::{Cli, Commands};

mod commands;
mod ui;

use commands::timeline::TimelineOptions;
use ui::context::UiContext;

fn main() {
    let cli = Cli::parse();
    let json = cli.json;

    if let Err(err) = run(cli) {
        ui::error::print_error(&err, json);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let command = cli.command.clone().unwrap_or(Commands::Run { seed: None });
    let takes_screen = matches!(command, Commands::Run { .. })
        && !cli.json
        && crate::ui::terminal::detect_capabilities().is_interactive();
    init_logging(cli.verbose, cli.log_file.as_deref(), takes_screen)?;

    let loaded = folio::config::load(cli.config.as_deref())?;
    let ui = UiContext::new(cli.json, cli.verbose, cli.color, cli.no_animation, &loaded.config);
    if !ui.json {
        crate::ui::output::print_config_warnings(&loaded.warnings, &ui);
    }
    tracing::debug!(
        source = ?loaded.source,
        color = ui.color,
        unicode = ui.unicode,
        animation = ui.animation,
        "starting"
    );

    let config = &loaded.config;
    match command {
        Commands::Run { seed } => commands::run::cmd_run(config, &ui, seed),
        Commands::Page { width } => commands::page::cmd_page(&ui, width),
        Commands::Timeline {
            realtime,
            enter_after,
            height,
            duration,
        } => commands::timeline::cmd_timeline(
            config,
            &ui,
            TimelineOptions {
                realtime,
                enter_after: Duration::from_millis(enter_after),
                height: usize::from(height),
                duration: Duration::from_millis(duration),
            },
        ),
        Commands::Contact {
            email,
            subject,
            message,
            open,
        } => commands::contact::cmd_contact(config, &ui, email, subject, message, open),
    }
}

/// Logs go to stderr, to `--log-file` when given, and nowhere while the
/// page owns the screen without one.
fn init_logging(verbose: u8, log_file: Option<&Path>, takes_screen: bool) -> Result<()> {
    let filter = match verbose {
        0 => EnvFilter::try_from_env("FOLIO_LOG").unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    let builder = fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_level(true);

    match log_file {
        Some(path) => {
            let file = File::create(path)?;
            builder.with_ansi(false).with_writer(Mutex::new(file)).init();
        }
        None if takes_screen => builder.with_writer(io::sink).init(),
        None => builder.with_writer(io::stderr).init(),
    }
    Ok(())
}
