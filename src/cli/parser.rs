use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for controlhoras
/// CLI application to normalize punch-clock sheets and report worked hours
#[derive(Parser)]
#[command(
    name = "controlhoras",
    version = env!("CARGO_PKG_VERSION"),
    about = "Normalize punch-clock records and aggregate worked hours by day, ISO week and month",
    long_about = None
)]
pub struct Cli {
    /// Override the 1-indexed sheet row holding the column headers
    #[arg(global = true, long = "header-row")]
    pub header_row: Option<usize>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration file
    Init,

    /// Manage the configuration file
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(long = "path", help = "Print the configuration file location")]
        path: bool,
    },

    /// Parse a punch sheet and print worked-hours tables
    Report {
        /// Punch sheet (CSV rendition of the source workbook)
        file: String,

        #[arg(long = "user", help = "Only include this user id (repeatable)")]
        users: Vec<String>,

        #[arg(
            long = "week",
            help = "Only include this ISO week, e.g. 2025-W03 (repeatable)"
        )]
        weeks: Vec<String>,

        #[arg(long = "weekly", help = "Show per-week totals instead of per-day rows")]
        weekly: bool,

        #[arg(long = "monthly", help = "Show per-month totals instead of per-day rows")]
        monthly: bool,

        #[arg(long = "details", help = "Show every punch instead of day totals")]
        details: bool,
    },

    /// Export worked-hours tables to a file
    Export {
        /// Punch sheet (CSV rendition of the source workbook)
        file: String,

        #[arg(long, value_enum, default_value = "xlsx")]
        format: ExportFormat,

        #[arg(long = "out", value_name = "FILE")]
        out: String,

        #[arg(long = "user", help = "Only include this user id (repeatable)")]
        users: Vec<String>,

        #[arg(
            long = "week",
            help = "Only include this ISO week, e.g. 2025-W03 (repeatable)"
        )]
        weeks: Vec<String>,

        #[arg(long, short = 'f')]
        force: bool,
    },
}
