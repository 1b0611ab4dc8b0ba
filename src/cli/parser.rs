use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for surveykiosk
/// CLI application to collect and summarize visitor satisfaction ratings
#[derive(Parser)]
#[command(
    name = "surveykiosk",
    version = env!("CARGO_PKG_VERSION"),
    about = "A local-first kiosk CLI: collect visitor satisfaction ratings into an append-only CSV log",
    long_about = None
)]
pub struct Cli {
    /// Override log file path (useful for tests or a custom location)
    #[arg(global = true, long = "log-file")]
    pub log_file: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration and an empty response log
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/vim/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Record a single rating (scripting entry point, no cooldown)
    Rate {
        /// Rating in any supported spelling, e.g. "very satisfied" or "大変満足"
        rating: String,

        /// Respondent group: japanese/local or foreigner/visitor
        #[arg(long = "group", help = "Respondent group (japanese/local, foreigner/visitor)")]
        group: Option<String>,
    },

    /// Run the interactive kiosk loop (group → rating → cooldown)
    Kiosk {
        /// Override the cooldown between submissions, in seconds
        #[arg(long = "cooldown", value_name = "SECS")]
        cooldown: Option<u64>,
    },

    /// Print the raw log entries, newest first
    Log {
        #[arg(long = "limit", help = "Show at most N entries")]
        limit: Option<usize>,
    },

    /// Show the 7-day response chart and the satisfaction breakdown
    Stats {
        /// Compute the breakdown separately per respondent group
        #[arg(long = "by-group")]
        by_group: bool,

        /// Display labels in this locale (ja or en); defaults to config
        #[arg(long = "locale", value_name = "LOCALE")]
        locale: Option<String>,

        /// Pin "today" for the 7-day window (YYYY-MM-DD)
        #[arg(long = "today", value_name = "DATE", hide = true)]
        today: Option<String>,
    },

    /// Delete the whole response log (all history is lost)
    Clear {
        /// Skip the confirmation prompt
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Export parsed responses in a structured format
    Export {
        /// Export format: csv, json
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        /// Output file path (absolute path required)
        #[arg(long, value_name = "FILE")]
        file: String,

        /// Overwrite output file without confirmation
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Copy the raw log file verbatim to another destination
    Share {
        /// Destination file path
        #[arg(long, value_name = "FILE")]
        file: String,

        /// Compress the copy into a .zip
        #[arg(long)]
        compress: bool,

        /// Overwrite destination without confirmation
        #[arg(long, short = 'f')]
        force: bool,
    },
}
