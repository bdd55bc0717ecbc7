use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;

use crate::model::{Cell, RawRow};

/// Read tabular text from a file, or from stdin when the path is `-`.
pub fn read_source(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("reading stdin")?;
        Ok(buf)
    } else {
        std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))
    }
}

/// Parse CSV/TSV text into untyped rows: no header handling, variable
/// column counts allowed, blank rows dropped. The delimiter is sniffed
/// from the first non-empty line (a tab wins over comma, which covers
/// spreadsheet copy-paste).
pub fn parse_rows(text: &str) -> Result<Vec<RawRow>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .delimiter(sniff_delimiter(text))
        .from_reader(text.as_bytes());

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.context("parsing tabular input")?;
        let row: RawRow = record.iter().map(Cell::from_field).collect();
        if row.iter().all(Cell::is_empty) {
            continue;
        }
        rows.push(row);
    }
    Ok(rows)
}

fn sniff_delimiter(text: &str) -> u8 {
    match text.lines().find(|line| !line.trim().is_empty()) {
        Some(line) if line.contains('\t') => b'\t',
        _ => b',',
    }
}

/// Load a JSON feed file into a typed value. Unlike the normalizer's
/// soft error model, a missing or undecodable feed is a hard error.
pub fn load_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let contents =
        std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_str(&contents).with_context(|| format!("parsing {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_csv_with_ragged_rows() {
        let rows = parse_rows("a,b,c\n1\n\n2,3\n").unwrap();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].len(), 3);
        assert_eq!(rows[1], vec![Cell::Number(1.0)]);
        assert_eq!(rows[2], vec![Cell::Number(2.0), Cell::Number(3.0)]);
    }

    #[test]
    fn sniffs_tab_delimiter() {
        let rows = parse_rows("Strike\tCall OI\tPut OI\n100\t5\t3\n").unwrap();
        assert_eq!(rows[0].len(), 3);
        assert_eq!(rows[1][0], Cell::Number(100.0));
    }

    #[test]
    fn quoted_thousands_separators_stay_text() {
        let rows = parse_rows("\"45,000\",1.2K,350\n").unwrap();
        assert_eq!(rows[0][0], Cell::Text("45,000".to_string()));
        assert_eq!(rows[0][1], Cell::Text("1.2K".to_string()));
        assert_eq!(rows[0][2], Cell::Number(350.0));
    }
}
