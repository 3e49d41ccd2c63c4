use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for gatestats
/// CLI application to analyze badge-gate attendance logs
#[derive(Parser)]
#[command(
    name = "gatestats",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple attendance analytics CLI: hours, rankings and longest sessions from badge-gate logs",
    long_about = None
)]
pub struct Cli {
    /// Override the input event log (useful for tests or one-off files)
    #[arg(global = true, long = "input")]
    pub input: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration
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

    /// Run the full analysis and write both report files
    Analyze {
        /// Target month.
        ///
        /// Format: YYYY-MM (e.g. "2023-02").
        ///
        /// Example:
        ///   gatestats analyze --period 2023-02
        ///
        /// If omitted, the configured period is used.
        #[arg(long, short, value_name = "MONTH", help = "Target month (YYYY-MM)")]
        period: Option<String>,

        /// Output directory for the report files (created if absent)
        #[arg(long = "out-dir", value_name = "DIR", help = "Output directory")]
        out_dir: Option<String>,

        /// Report format: csv, json
        #[arg(long, value_enum, value_name = "FORMAT")]
        format: Option<ExportFormat>,

        /// Overwrite existing report files without confirmation
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Print the attendance ranking for a month
    Rank {
        #[arg(long, short, value_name = "MONTH", help = "Target month (YYYY-MM)")]
        period: Option<String>,
    },

    /// Print the longest work session for a month
    Longest {
        #[arg(long, short, value_name = "MONTH", help = "Target month (YYYY-MM)")]
        period: Option<String>,
    },
}
