use std::collections::BTreeMap;
use std::path::PathBuf;

use anyhow::{Result, bail};
use chrono::{Datelike, NaiveDate};

use crate::data;
use crate::model::ShutaiRecord;

/// How aggregation groups are keyed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupBy {
    /// ISO week, keyed `YYYY-Www`.
    Week,
    /// Calendar month, keyed `YYYY-MM`.
    Month,
}

impl GroupBy {
    pub fn parse(s: &str) -> Result<GroupBy> {
        match s {
            "week" => Ok(GroupBy::Week),
            "month" => Ok(GroupBy::Month),
            other => bail!("unknown grouping `{other}` (expected `week` or `month`)"),
        }
    }

    fn key(self, date: NaiveDate) -> String {
        match self {
            GroupBy::Week => {
                let week = date.iso_week();
                format!("{}-W{:02}", week.year(), week.week())
            }
            GroupBy::Month => format!("{}-{:02}", date.year(), date.month()),
        }
    }
}

/// Aggregate of one week/month group of a participant series.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupStat {
    pub key: String,
    pub count: usize,
    pub sum: f64,
    pub mean: f64,
    pub median: f64,
}

/// Group a participant series by week or month and compute per-group
/// sum, mean, and median. Records with unparseable dates are skipped
/// silently — the feed is append-only and occasionally carries junk
/// rows from upstream layout changes.
pub fn aggregate_series(
    records: &[ShutaiRecord],
    series: &str,
    group_by: GroupBy,
) -> Result<Vec<GroupStat>> {
    let mut groups: BTreeMap<String, Vec<f64>> = BTreeMap::new();
    for record in records {
        let Ok(date) = NaiveDate::parse_from_str(&record.date, "%Y-%m-%d") else {
            continue;
        };
        let value = record.series(series)?;
        groups.entry(group_by.key(date)).or_default().push(value);
    }

    let stats = groups
        .into_iter()
        .map(|(key, mut values)| {
            let count = values.len();
            let sum: f64 = values.iter().sum();
            values.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
            let median = if count % 2 == 1 {
                values[count / 2]
            } else {
                (values[count / 2 - 1] + values[count / 2]) / 2.0
            };
            GroupStat {
                key,
                count,
                sum,
                mean: sum / count as f64,
                median,
            }
        })
        .collect();
    Ok(stats)
}

/// Options for the `trend` subcommand.
pub struct TrendConfig {
    pub file: PathBuf,
    pub series: String,
    pub group_by: String,
    pub last: Option<usize>,
}

/// CLI entry point for the `trend` subcommand.
pub fn run(config: &TrendConfig) -> Result<()> {
    let records: Vec<ShutaiRecord> = data::load_json(&config.file)?;
    let group_by = GroupBy::parse(&config.group_by)?;
    let mut stats = aggregate_series(&records, &config.series, group_by)?;

    if let Some(last) = config.last {
        let skip = stats.len().saturating_sub(last);
        stats.drain(..skip);
    }

    println!(
        "{} by {} ({} groups)",
        config.series,
        config.group_by,
        stats.len()
    );
    println!(
        "{:<10}  {:>5}  {:>14}  {:>14}  {:>14}",
        "group", "n", "sum", "mean", "median"
    );
    for stat in &stats {
        println!(
            "{:<10}  {:>5}  {:>14.1}  {:>14.1}  {:>14.1}",
            stat.key, stat.count, stat.sum, stat.mean, stat.median
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(date: &str, foreign: f64) -> ShutaiRecord {
        ShutaiRecord {
            date: date.to_string(),
            nikkei_avg: 0.0,
            foreign,
            securities_self: 0.0,
            individual_total: 0.0,
            individual_cash: 0.0,
            individual_credit: 0.0,
            investment_trust: 0.0,
            business_corp: 0.0,
            other_corp: 0.0,
            trust_banks: 0.0,
            insurance: 0.0,
            city_banks: 0.0,
        }
    }

    #[test]
    fn groups_by_month_with_sum_mean_median() {
        let records = vec![
            record("2026-08-07", 100.0),
            record("2026-08-14", 300.0),
            record("2026-08-21", -200.0),
            record("2026-09-04", 50.0),
        ];
        let stats = aggregate_series(&records, "foreign", GroupBy::Month).unwrap();
        assert_eq!(stats.len(), 2);
        assert_eq!(stats[0].key, "2026-08");
        assert_eq!(stats[0].count, 3);
        assert_eq!(stats[0].sum, 200.0);
        assert!((stats[0].mean - 200.0 / 3.0).abs() < 1e-9);
        assert_eq!(stats[0].median, 100.0);
        assert_eq!(stats[1].key, "2026-09");
        assert_eq!(stats[1].sum, 50.0);
    }

    #[test]
    fn even_group_median_averages_the_middle_pair() {
        let records = vec![
            record("2026-08-07", 10.0),
            record("2026-08-14", 20.0),
            record("2026-08-21", 30.0),
            record("2026-08-28", 40.0),
        ];
        let stats = aggregate_series(&records, "foreign", GroupBy::Month).unwrap();
        assert_eq!(stats[0].median, 25.0);
    }

    #[test]
    fn groups_by_iso_week() {
        let records = vec![
            record("2026-01-05", 1.0),
            record("2026-01-07", 2.0),
            record("2026-01-12", 3.0),
        ];
        let stats = aggregate_series(&records, "foreign", GroupBy::Week).unwrap();
        assert_eq!(stats.len(), 2);
        assert_eq!(stats[0].key, "2026-W02");
        assert_eq!(stats[0].sum, 3.0);
        assert_eq!(stats[1].key, "2026-W03");
    }

    #[test]
    fn bad_dates_are_skipped() {
        let records = vec![record("月計", 999.0), record("2026-08-07", 1.0)];
        let stats = aggregate_series(&records, "foreign", GroupBy::Month).unwrap();
        assert_eq!(stats.len(), 1);
        assert_eq!(stats[0].sum, 1.0);
    }

    #[test]
    fn unknown_series_is_an_error() {
        let records = vec![record("2026-08-07", 1.0)];
        assert!(aggregate_series(&records, "nope", GroupBy::Month).is_err());
    }
}
