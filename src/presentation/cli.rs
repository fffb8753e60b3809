//! CLI Argument Parsing
//!
//! Global flags (--config, --json, --color, --no-animation, --verbose,
//! --log-file) are inherited by all subcommands. Running `folio` without a
//! subcommand opens the interactive page.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// Folio - terminal portfolio
#[derive(Parser, Debug)]
#[command(name = "folio")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Run 'folio' without arguments to open the portfolio.")]
pub struct Cli {
    /// Config file (default: ~/.config/folio/config.toml)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Emit JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,

    /// Color output mode
    #[arg(long, global = true, value_enum)]
    pub color: Option<ColorWhen>,

    /// Disable the starfield and reveal transitions
    #[arg(long, global = true)]
    pub no_animation: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Write logs to this file (the only log output while the page is open)
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Open the interactive portfolio (default)
    Run {
        /// Seed for the starfield (reproducible backdrop)
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Print the fully revealed page once
    Page {
        /// Render width in columns (default: terminal width)
        #[arg(long)]
        width: Option<u16>,
    },

    /// Play the session on a clock and print its events
    Timeline {
        /// Follow the wall clock instead of a virtual one
        #[arg(long)]
        realtime: bool,

        /// Press enter this many milliseconds after mount
        #[arg(long, value_name = "MS", default_value_t = 5000)]
        enter_after: u64,

        /// Viewport rows used to scroll through the page
        #[arg(long, default_value_t = 24)]
        height: u16,

        /// Stop after this many milliseconds
        #[arg(long, value_name = "MS", default_value_t = 12_000)]
        duration: u64,
    },

    /// Compose a message for the contact form
    Contact {
        /// Your email address
        #[arg(long)]
        email: Option<String>,

        /// Subject line
        #[arg(long)]
        subject: Option<String>,

        /// Message body
        #[arg(long)]
        message: Option<String>,

        /// Hand the mailto link to the system mail client
        #[arg(long)]
        open: bool,
    },
}
