use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One day's logged figure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JournalEntry {
    pub pnl: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// The daily P/L journal, saved as JSON between invocations. Keyed by
/// `YYYY-MM-DD` date strings so the map iterates chronologically.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Journal {
    #[serde(default)]
    entries: BTreeMap<String, JournalEntry>,
}

impl Journal {
    /// Load the journal from file, or start fresh if the file doesn't
    /// exist yet.
    pub fn load_or_new(path: &Path) -> Result<Self> {
        if path.exists() {
            let contents = std::fs::read_to_string(path)
                .with_context(|| format!("reading journal {}", path.display()))?;
            serde_json::from_str(&contents)
                .with_context(|| format!("parsing journal {}", path.display()))
        } else {
            Ok(Journal::default())
        }
    }

    /// Save the journal to file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)
            .with_context(|| format!("writing journal {}", path.display()))?;
        Ok(())
    }

    /// Insert or replace the entry for a date.
    pub fn upsert(&mut self, date: NaiveDate, pnl: f64, note: Option<String>) {
        self.entries
            .insert(date.format("%Y-%m-%d").to_string(), JournalEntry { pnl, note });
    }

    /// Entries in ascending date order.
    pub fn entries(&self) -> impl Iterator<Item = (&String, &JournalEntry)> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
