use jpx_lens::chain::{self, normalize};
use jpx_lens::data;
use jpx_lens::model::{Cell, ChainError, RawRow};

fn row(fields: &[&str]) -> RawRow {
    fields.iter().map(|f| Cell::from_field(f)).collect()
}

fn sample_chain() -> Vec<RawRow> {
    vec![
        row(&["Strike", "Call OI", "Put OI"]),
        row(&["45000", "1200", "350"]),
        row(&["44750", "980", "410"]),
        row(&["44500", "2100", "1500"]),
        row(&["44480", "300", "200"]),
        row(&["44000", "540", "2300"]),
        row(&["0", "999", "999"]),
    ]
}

#[test]
fn worked_scenario_step_50() {
    let rows = vec![
        row(&["Strike", "Call OI", "Put OI"]),
        row(&["100", "50", "20"]),
        row(&["103", "10", "5"]),
        row(&["150", "0", "0"]),
    ];
    let out = normalize(rows, 50.0).unwrap();
    assert_eq!(out.len(), 2);
    assert_eq!((out[0].strike, out[0].call, out[0].put, out[0].diff), (150.0, 0.0, 0.0, 0.0));
    assert_eq!((out[1].strike, out[1].call, out[1].put, out[1].diff), (100.0, 60.0, 25.0, 35.0));
}

#[test]
fn aggregation_conserves_volume() {
    // Sum over buckets must equal the sum over input rows with a
    // positive strike — nothing lost, nothing duplicated.
    let out = normalize(sample_chain(), 250.0).unwrap();
    let call_sum: f64 = out.iter().map(|r| r.call).sum();
    let put_sum: f64 = out.iter().map(|r| r.put).sum();
    assert_eq!(call_sum, 1200.0 + 980.0 + 2100.0 + 300.0 + 540.0);
    assert_eq!(put_sum, 350.0 + 410.0 + 1500.0 + 200.0 + 2300.0);
}

#[test]
fn buckets_are_strictly_descending() {
    let out = normalize(sample_chain(), 250.0).unwrap();
    for pair in out.windows(2) {
        assert!(pair[0].strike > pair[1].strike);
    }
}

#[test]
fn diff_is_call_minus_put() {
    let out = normalize(sample_chain(), 100.0).unwrap();
    for bucket in &out {
        assert_eq!(bucket.diff, bucket.call - bucket.put);
    }
}

#[test]
fn normalization_is_idempotent() {
    let first = normalize(sample_chain(), 250.0).unwrap();
    let second = normalize(sample_chain(), 250.0).unwrap();
    assert_eq!(first, second);
}

#[test]
fn reshape_round_trip_matches_wide_table() {
    let wide = sample_chain();
    let expected = normalize(wide.clone(), 250.0).unwrap();

    // Simulate a wrapped export: same header, then every cell of every
    // data row on its own single-cell line.
    let mut wrapped = vec![wide[0].clone()];
    for data_row in &wide[1..] {
        for cell in data_row {
            wrapped.push(vec![cell.clone()]);
        }
    }
    let rebuilt = normalize(wrapped, 250.0).unwrap();
    assert_eq!(rebuilt, expected);
}

#[test]
fn header_with_single_oi_column_is_rejected() {
    let rows = vec![
        row(&["Strike", "Call OI", "Volume"]),
        row(&["45000", "1200", "350"]),
    ];
    assert_eq!(normalize(rows, 50.0), Err(ChainError::NoHeaderFound));
}

#[test]
fn all_nonpositive_strikes_yield_no_valid_rows() {
    let rows = vec![
        row(&["Strike", "Call OI", "Put OI"]),
        row(&["0", "10", "10"]),
        row(&["-100", "5", "5"]),
    ];
    assert_eq!(normalize(rows, 50.0), Err(ChainError::NoValidRows));
}

#[test]
fn suffixes_and_dashes_parse_loosely() {
    assert_eq!(chain::parse_loose("1.5K"), 1500.0);
    assert_eq!(chain::parse_loose("2M"), 2_000_000.0);
    assert_eq!(chain::parse_loose("-"), 0.0);
    assert_eq!(chain::parse_loose(""), 0.0);
}

#[test]
fn japanese_export_end_to_end() {
    let text = "日経225オプション,,\n\
                権利行使価格,プット建玉,コール建玉\n\
                \"45,000\",350,1.2K\n\
                \"44,980\",50,100\n\
                合計,▼999,999\n";
    let rows = data::parse_rows(text).unwrap();
    let out = normalize(rows, 50.0).unwrap();
    // Put/call columns are swapped in this export; labels win over
    // position. 45,000 and 44,980 land in the same 50-step bucket.
    assert_eq!(out.len(), 1);
    assert_eq!(out[0].strike, 45_000.0);
    assert_eq!(out[0].call, 1300.0);
    assert_eq!(out[0].put, 400.0);
    assert_eq!(out[0].diff, 900.0);
}
