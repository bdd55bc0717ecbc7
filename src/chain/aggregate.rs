use std::collections::HashMap;

use crate::model::{RawRow, StrikeRow};

use super::header::HeaderLayout;
use super::value::cell_to_number;

/// Bucket every row below the header by strike rounded to the nearest
/// multiple of `step`, summing call/put open interest per bucket.
/// Rows shorter than the highest referenced column are skipped, as are
/// rows whose strike is not positive (total/footer lines).
pub fn aggregate(rows: &[RawRow], layout: HeaderLayout, step: f64) -> Vec<StrikeRow> {
    // Step must be positive; a zero step would divide by zero.
    let step = if step > 0.0 { step } else { 1.0 };
    let max_col = layout.strike_col.max(layout.call_col).max(layout.put_col);

    // Keyed by the bucket's multiple index rather than the f64 strike,
    // so the map key stays hashable and exact.
    let mut buckets: HashMap<i64, (f64, f64)> = HashMap::new();
    for row in &rows[layout.row + 1..] {
        if row.len() <= max_col {
            continue;
        }
        let strike = cell_to_number(&row[layout.strike_col]);
        if strike <= 0.0 {
            continue;
        }
        let call = cell_to_number(&row[layout.call_col]);
        let put = cell_to_number(&row[layout.put_col]);

        // f64::round is round-half-away-from-zero.
        let key = (strike / step).round() as i64;
        let sums = buckets.entry(key).or_insert((0.0, 0.0));
        sums.0 += call;
        sums.1 += put;
    }

    let mut out: Vec<StrikeRow> = buckets
        .into_iter()
        .map(|(key, (call, put))| StrikeRow {
            strike: key as f64 * step,
            call,
            put,
            diff: call - put,
        })
        .collect();
    // Highest strike first — conventional top-of-chain display order.
    out.sort_by(|a, b| {
        b.strike
            .partial_cmp(&a.strike)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Cell;

    fn row(fields: &[&str]) -> RawRow {
        fields.iter().map(|f| Cell::from_field(f)).collect()
    }

    const LAYOUT: HeaderLayout = HeaderLayout {
        row: 0,
        strike_col: 0,
        call_col: 1,
        put_col: 2,
    };

    #[test]
    fn rounds_strikes_into_buckets() {
        let rows = vec![
            row(&["Strike", "Call OI", "Put OI"]),
            row(&["100", "50", "20"]),
            row(&["103", "10", "5"]),
            row(&["150", "0", "0"]),
        ];
        let out = aggregate(&rows, LAYOUT, 50.0);
        assert_eq!(
            out,
            vec![
                StrikeRow { strike: 150.0, call: 0.0, put: 0.0, diff: 0.0 },
                StrikeRow { strike: 100.0, call: 60.0, put: 25.0, diff: 35.0 },
            ]
        );
    }

    #[test]
    fn nonpositive_step_falls_back_to_one() {
        let rows = vec![
            row(&["Strike", "Call OI", "Put OI"]),
            row(&["103", "10", "5"]),
        ];
        let out = aggregate(&rows, LAYOUT, 0.0);
        assert_eq!(out[0].strike, 103.0);
        let out = aggregate(&rows, LAYOUT, -25.0);
        assert_eq!(out[0].strike, 103.0);
    }

    #[test]
    fn skips_short_rows_and_footers() {
        let rows = vec![
            row(&["Strike", "Call OI", "Put OI"]),
            row(&["100", "50", "20"]),
            row(&["105"]),
            row(&["合計", "9999", "9999"]),
            row(&["0", "7", "7"]),
            row(&["-50", "3", "3"]),
        ];
        let out = aggregate(&rows, LAYOUT, 50.0);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].call, 50.0);
        assert_eq!(out[0].put, 20.0);
    }

    #[test]
    fn empty_input_yields_no_buckets() {
        let rows = vec![row(&["Strike", "Call OI", "Put OI"])];
        assert!(aggregate(&rows, LAYOUT, 50.0).is_empty());
    }
}
