use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for rollcall
/// CLI application to ingest pasted attendance transcripts
#[derive(Parser)]
#[command(
    name = "rollcall",
    version = env!("CARGO_PKG_VERSION"),
    about = "Parse pasted check-in/check-out transcripts, classify attendance days and build monthly summaries",
    long_about = None
)]
pub struct Cli {
    /// Override config file path (useful for tests or custom rules)
    #[arg(global = true, long = "config")]
    pub config: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration file with the default rule set
    Init,

    /// Manage the configuration file (view or check)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration values for problems")]
        check: bool,
    },

    /// Parse a transcript and show the extracted events and messages
    Parse {
        /// Transcript file ("-" reads from stdin)
        file: String,

        #[arg(long = "json", help = "Print the parse outcome as JSON")]
        json: bool,
    },

    /// Parse, merge and classify a transcript date-wise
    List {
        /// Transcript file ("-" reads from stdin)
        file: String,

        #[arg(long = "holidays", value_name = "FILE", help = "Holiday calendar (YAML)")]
        holidays: Option<String>,

        #[arg(long = "json", help = "Print the labeled records as JSON")]
        json: bool,
    },

    /// Build the monthly pivot for a period
    Pivot {
        /// Transcript file ("-" reads from stdin)
        file: String,

        /// Month to build, as YYYY-MM (default: month of the transcript date)
        #[arg(long, short)]
        period: Option<String>,

        #[arg(long = "holidays", value_name = "FILE", help = "Holiday calendar (YAML)")]
        holidays: Option<String>,

        #[arg(
            long = "roster",
            value_name = "FILE",
            help = "Employee roster (YAML); default: employees seen in the transcript"
        )]
        roster: Option<String>,

        #[arg(long = "json", help = "Print the summaries as JSON")]
        json: bool,
    },

    /// Export monthly summaries to a file
    Export {
        /// Transcript file ("-" reads from stdin)
        file: String,

        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long = "out", value_name = "FILE")]
        out: String,

        /// Month to export, as YYYY-MM (default: month of the transcript date)
        #[arg(long, short)]
        period: Option<String>,

        #[arg(long = "holidays", value_name = "FILE", help = "Holiday calendar (YAML)")]
        holidays: Option<String>,

        #[arg(long = "roster", value_name = "FILE", help = "Employee roster (YAML)")]
        roster: Option<String>,

        #[arg(long, short = 'f')]
        force: bool,
    },
}
