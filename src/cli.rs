use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// JPX derivatives dashboard toolkit — normalize option-chain exports,
/// aggregate participant flows, and keep a daily P/L journal.
#[derive(Parser)]
#[command(name = "jpx-lens", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Normalize a pasted/exported options chain into strike buckets
    Chain {
        /// Path to the CSV/TSV export, or "-" for stdin
        file: PathBuf,

        /// Strike bucket step (values ≤ 0 fall back to 1)
        #[arg(long, default_value = "50.0")]
        step: f64,

        /// Output format: table (default) or json
        #[arg(long, default_value = "table")]
        format: String,

        /// Write output to this file instead of stdout
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,
    },

    /// Aggregate the weekly participant-flow feed by week or month
    Trend {
        /// Path to the shutai_data.json feed
        file: PathBuf,

        /// Participant series to aggregate (e.g. foreign, individual_total)
        #[arg(long, default_value = "foreign")]
        series: String,

        /// Grouping: week or month
        #[arg(long, default_value = "week")]
        group_by: String,

        /// Show only the most recent N groups
        #[arg(long)]
        last: Option<usize>,
    },

    /// Show the participant-volume table from the daily feed
    Participants {
        /// Path to the daily_participant.json feed
        file: PathBuf,

        /// List the top N participants per session
        #[arg(long, default_value = "5")]
        top: usize,
    },

    /// Record and summarize daily profit/loss figures
    Journal {
        /// Path to the journal state file
        #[arg(long, default_value = "journal.json")]
        state_file: PathBuf,

        #[command(subcommand)]
        action: JournalAction,
    },

    /// Print a sample options-chain export to stdout
    Example,

    /// Output the JSON schema for normalized strike rows
    Schema,
}

#[derive(Subcommand)]
pub enum JournalAction {
    /// Record one day's profit/loss (same date overwrites)
    Add {
        /// Date, YYYY-MM-DD
        date: String,

        /// Profit/loss figure for the day
        pnl: f64,

        /// Optional note for the day
        #[arg(long)]
        note: Option<String>,
    },

    /// Print per-month totals, win rate, and best/worst day
    Summary {
        /// Restrict to a single month, YYYY-MM
        #[arg(long)]
        month: Option<String>,
    },

    /// Export all entries as CSV, ascending by date
    Export {
        /// Output CSV file path
        #[arg(long, short = 'o')]
        output: PathBuf,
    },
}
