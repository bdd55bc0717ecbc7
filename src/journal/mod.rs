mod state;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use chrono::NaiveDate;

pub use state::{Journal, JournalEntry};

/// Actions of the `journal` subcommand.
pub enum JournalAction {
    /// Upsert one day's P/L figure; the same date overwrites.
    Add {
        date: String,
        pnl: f64,
        note: Option<String>,
    },
    /// Print per-month totals, optionally for a single `YYYY-MM`.
    Summary { month: Option<String> },
    /// Export every entry as CSV, ascending by date.
    Export { output: PathBuf },
}

/// CLI entry point for the `journal` subcommand.
pub fn run(state_file: &Path, action: &JournalAction) -> Result<()> {
    let mut journal = Journal::load_or_new(state_file)?;

    match action {
        JournalAction::Add { date, pnl, note } => {
            let date = parse_date(date)?;
            journal.upsert(date, *pnl, note.clone());
            journal.save(state_file)?;
            println!("Recorded {date}: {pnl:+.0}");
        }
        JournalAction::Summary { month } => {
            if let Some(month) = month {
                if NaiveDate::parse_from_str(&format!("{month}-01"), "%Y-%m-%d").is_err() {
                    bail!("invalid month `{month}` (expected YYYY-MM)");
                }
            }
            print_summary(&journal, month.as_deref());
        }
        JournalAction::Export { output } => {
            export_csv(&journal, output)?;
            println!("Exported {} entries to {}", journal.len(), output.display());
        }
    }
    Ok(())
}

fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .with_context(|| format!("invalid date `{s}` (expected YYYY-MM-DD)"))
}

/// Per-month roll-up of journal entries.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthSummary {
    pub month: String,
    pub days: usize,
    pub total: f64,
    pub mean: f64,
    /// Share of days with positive P/L, 0.0–1.0.
    pub win_rate: f64,
    pub best: (String, f64),
    pub worst: (String, f64),
}

/// Summarize entries grouped by month. Months come out ascending.
pub fn summarize(journal: &Journal, month_filter: Option<&str>) -> Vec<MonthSummary> {
    let mut summaries: Vec<MonthSummary> = Vec::new();
    for (date, entry) in journal.entries() {
        // Keys are YYYY-MM-DD; a hand-edited file may disagree.
        let Some(month) = date.get(..7) else {
            continue;
        };
        if month_filter.is_some_and(|f| f != month) {
            continue;
        }
        match summaries.last_mut() {
            Some(s) if s.month == month => {
                s.days += 1;
                s.total += entry.pnl;
                if entry.pnl > s.best.1 {
                    s.best = (date.clone(), entry.pnl);
                }
                if entry.pnl < s.worst.1 {
                    s.worst = (date.clone(), entry.pnl);
                }
                if entry.pnl > 0.0 {
                    s.win_rate += 1.0;
                }
            }
            _ => summaries.push(MonthSummary {
                month: month.to_string(),
                days: 1,
                total: entry.pnl,
                mean: 0.0,
                win_rate: if entry.pnl > 0.0 { 1.0 } else { 0.0 },
                best: (date.clone(), entry.pnl),
                worst: (date.clone(), entry.pnl),
            }),
        }
    }
    for s in &mut summaries {
        s.mean = s.total / s.days as f64;
        s.win_rate /= s.days as f64;
    }
    summaries
}

fn print_summary(journal: &Journal, month_filter: Option<&str>) {
    let summaries = summarize(journal, month_filter);
    if summaries.is_empty() {
        println!("No journal entries.");
        return;
    }
    for s in &summaries {
        println!(
            "{}: {} days, total {:+.0}, mean {:+.1}, win rate {:.0}%",
            s.month,
            s.days,
            s.total,
            s.mean,
            s.win_rate * 100.0
        );
        println!("  best  {} {:+.0}", s.best.0, s.best.1);
        println!("  worst {} {:+.0}", s.worst.0, s.worst.1);
    }
}

fn export_csv(journal: &Journal, output: &Path) -> Result<()> {
    let mut writer = csv::Writer::from_path(output)
        .with_context(|| format!("creating {}", output.display()))?;
    writer.write_record(["date", "pnl", "note"])?;
    for (date, entry) in journal.entries() {
        writer.write_record([
            date.as_str(),
            &entry.pnl.to_string(),
            entry.note.as_deref().unwrap_or(""),
        ])?;
    }
    writer.flush().context("flushing CSV export")?;
    Ok(())
}
