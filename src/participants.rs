use std::collections::BTreeMap;
use std::path::PathBuf;

use anyhow::Result;

use crate::data;
use crate::model::{BrokerCategory, ParticipantEntry, ParticipantFeed};

/// Resolve an entry's category: trust the feed's label when it carries
/// a real one, otherwise re-categorize from the broker name. `OTHERS`
/// is re-checked too — older feed snapshots predate some keywords.
fn category_of(entry: &ParticipantEntry) -> BrokerCategory {
    match entry.category.as_deref().and_then(BrokerCategory::from_label) {
        Some(cat) if cat != BrokerCategory::Others => cat,
        _ => BrokerCategory::from_name(&entry.name),
    }
}

/// A total/subtotal line, not a broker. Filtered upstream, re-filtered
/// here in case the raw sheet leaks through.
fn is_total_row(name: &str) -> bool {
    name.contains("合計") || name.to_lowercase().contains("total")
}

/// Per-category volume totals and participant counts for one session.
pub fn session_totals(entries: &[ParticipantEntry]) -> BTreeMap<BrokerCategory, (i64, usize)> {
    let mut totals = BTreeMap::new();
    for entry in entries {
        if is_total_row(&entry.name) {
            continue;
        }
        let slot = totals.entry(category_of(entry)).or_insert((0, 0));
        slot.0 += entry.total_volume();
        slot.1 += 1;
    }
    totals
}

/// Options for the `participants` subcommand.
pub struct ParticipantsConfig {
    pub file: PathBuf,
    pub top: usize,
}

/// CLI entry point for the `participants` subcommand.
pub fn run(config: &ParticipantsConfig) -> Result<()> {
    let feed: ParticipantFeed = data::load_json(&config.file)?;
    println!("Participant volume for {}", feed.date);

    print_session("Night session", &feed.night_session, config.top);
    print_session("Day session", &feed.day_session, config.top);
    Ok(())
}

fn print_session(label: &str, entries: &[ParticipantEntry], top: usize) {
    println!("\n{label} ({} participants)", entries.len());
    if entries.is_empty() {
        println!("  (no data)");
        return;
    }

    let totals = session_totals(entries);
    println!("  {:<8}  {:>12}  {:>8}", "category", "volume", "brokers");
    for cat in BrokerCategory::ALL {
        let (volume, count) = totals.get(&cat).copied().unwrap_or((0, 0));
        println!("  {:<8}  {:>12}  {:>8}", cat.label(), volume, count);
    }

    let mut ranked: Vec<&ParticipantEntry> = entries
        .iter()
        .filter(|e| !is_total_row(&e.name))
        .collect();
    ranked.sort_by_key(|e| std::cmp::Reverse(e.total_volume().abs()));
    println!("  top {} by volume:", top.min(ranked.len()));
    for entry in ranked.iter().take(top) {
        println!(
            "    {:<6} {:>12}  {}",
            category_of(entry).label(),
            entry.total_volume(),
            entry.name
        );
    }
}
