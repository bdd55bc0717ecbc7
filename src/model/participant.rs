use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// The daily participant-volume feed (`daily_participant.json`):
/// one trade date with separate night- and day-session tables.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParticipantFeed {
    /// Trade date, `YYYY/MM/DD`.
    pub date: String,
    #[serde(default)]
    pub updated_at: String,
    #[serde(default)]
    pub night_session: Vec<ParticipantEntry>,
    #[serde(default)]
    pub day_session: Vec<ParticipantEntry>,
}

/// One broker's traded volume per product for a session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParticipantEntry {
    pub name: String,
    /// Category as stored by the upstream analyzer; may be absent.
    #[serde(default)]
    pub category: Option<String>,
    /// Product name → contract volume.
    #[serde(default)]
    pub data: HashMap<String, i64>,
}

impl ParticipantEntry {
    /// Total volume across all products.
    pub fn total_volume(&self) -> i64 {
        self.data.values().sum()
    }
}

/// Broker nationality/style buckets used by the dashboard's table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum BrokerCategory {
    Us,
    Eu,
    Jp,
    Net,
    Others,
}

/// Keyword dictionaries for broker name matching, English and Japanese
/// spellings both. Matching is case-insensitive over the name with
/// spaces removed, same as the upstream analyzer.
const US_KEYWORDS: &[&str] = &[
    "goldman", "morgan", "merrill", "bofa", "citi", "jp morgan", "jpmorgan",
    "sachs", "モルガン", "ゴールドマン", "シティ", "アメリカ", "バンカメ",
];
const EU_KEYWORDS: &[&str] = &[
    "abn", "societe", "barclays", "bnp", "ubs", "deutsche", "hsbc",
    "credit suisse", "ソシエテ", "バークレイズ", "ドイツ", "クレディ", "パリバ",
];
const JP_KEYWORDS: &[&str] = &[
    "nomura", "daiwa", "mizuho", "smbc", "mitsubishi", "nikko", "okasan",
    "tokai", "野村", "大和", "みずほ", "三菱", "日興", "岡三", "東海", "日産",
    "岩井", "ちばぎん", "フィリップ",
];
const NET_KEYWORDS: &[&str] = &[
    "sbi", "rakuten", "monex", "matsui", "au", "kabu.com", "楽天",
    "マネックス", "松井", "カブコム", "gmo",
];

impl BrokerCategory {
    pub const ALL: [BrokerCategory; 5] = [
        BrokerCategory::Us,
        BrokerCategory::Eu,
        BrokerCategory::Jp,
        BrokerCategory::Net,
        BrokerCategory::Others,
    ];

    pub fn label(self) -> &'static str {
        match self {
            BrokerCategory::Us => "US",
            BrokerCategory::Eu => "EU",
            BrokerCategory::Jp => "JP",
            BrokerCategory::Net => "NET",
            BrokerCategory::Others => "OTHERS",
        }
    }

    /// Parse the category string stored in the feed.
    pub fn from_label(label: &str) -> Option<BrokerCategory> {
        match label {
            "US" => Some(BrokerCategory::Us),
            "EU" => Some(BrokerCategory::Eu),
            "JP" => Some(BrokerCategory::Jp),
            "NET" => Some(BrokerCategory::Net),
            "OTHERS" => Some(BrokerCategory::Others),
            _ => None,
        }
    }

    /// Categorize a broker by name, keyword-list contains matching.
    pub fn from_name(name: &str) -> BrokerCategory {
        let check = name.replace(' ', "").to_lowercase();
        let hit = |keywords: &[&str]| {
            keywords
                .iter()
                .any(|kw| check.contains(&kw.replace(' ', "")))
        };
        if hit(US_KEYWORDS) {
            BrokerCategory::Us
        } else if hit(EU_KEYWORDS) {
            BrokerCategory::Eu
        } else if hit(JP_KEYWORDS) {
            BrokerCategory::Jp
        } else if hit(NET_KEYWORDS) {
            BrokerCategory::Net
        } else {
            BrokerCategory::Others
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn categorizes_by_keyword() {
        assert_eq!(
            BrokerCategory::from_name("Goldman Sachs Japan"),
            BrokerCategory::Us
        );
        assert_eq!(BrokerCategory::from_name("BNP Paribas"), BrokerCategory::Eu);
        assert_eq!(BrokerCategory::from_name("野村證券"), BrokerCategory::Jp);
        assert_eq!(
            BrokerCategory::from_name("楽天証券"),
            BrokerCategory::Net
        );
        assert_eq!(
            BrokerCategory::from_name("Unknown Broker"),
            BrokerCategory::Others
        );
    }

    #[test]
    fn keyword_match_ignores_spaces_and_case() {
        assert_eq!(
            BrokerCategory::from_name("JP MORGAN SECURITIES"),
            BrokerCategory::Us
        );
        assert_eq!(
            BrokerCategory::from_name("credit  suisse"),
            BrokerCategory::Eu
        );
    }
}
