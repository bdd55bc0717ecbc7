use crate::model::{Cell, RawRow};

/// How many leading rows are scanned when looking for a header.
const SCAN_WINDOW: usize = 50;

/// Needles for the strike-price column label: English, Japanese, and
/// the romanizations seen in broker exports.
const STRIKE_NEEDLES: &[&str] = &["strike", "権利行使", "行使価格", "kenri", "kōshi", "koushi"];

/// Needles for an open-interest column label. A standalone "oi" token
/// is handled separately to avoid matching inside unrelated words.
const OI_NEEDLES: &[&str] = &["open int", "openinterest", "建玉", "tategyoku"];

const CALL_NEEDLES: &[&str] = &["call", "コール"];
const PUT_NEEDLES: &[&str] = &["put", "プット"];

/// Column roles resolved from a detected header row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderLayout {
    /// Index of the header row; data rows start right below it.
    pub row: usize,
    pub strike_col: usize,
    pub call_col: usize,
    pub put_col: usize,
}

fn contains_any(text: &str, needles: &[&str]) -> bool {
    needles.iter().any(|n| text.contains(n))
}

pub fn is_strike_label(text: &str) -> bool {
    contains_any(&text.to_lowercase(), STRIKE_NEEDLES)
}

pub fn is_oi_label(text: &str) -> bool {
    let lower = text.to_lowercase();
    if contains_any(&lower, OI_NEEDLES) {
        return true;
    }
    // Standalone "oi" token, e.g. "Call OI" or "OI (Put)".
    lower
        .split(|c: char| !c.is_alphanumeric())
        .any(|token| token == "oi")
}

fn is_call_label(text: &str) -> bool {
    contains_any(&text.to_lowercase(), CALL_NEEDLES)
}

fn is_put_label(text: &str) -> bool {
    contains_any(&text.to_lowercase(), PUT_NEEDLES)
}

/// Test a row for header shape: one strike-labeled cell plus at least
/// two open-interest-labeled cells. Returns the strike column and every
/// open-interest column in order. A cell matching the OI pattern never
/// doubles as the strike cell.
fn header_match(row: &RawRow) -> Option<(usize, Vec<usize>)> {
    let mut strike_col = None;
    let mut oi_cols = Vec::new();
    for (col, cell) in row.iter().enumerate() {
        let text = cell.text();
        if text.is_empty() {
            continue;
        }
        if is_oi_label(&text) {
            oi_cols.push(col);
        } else if strike_col.is_none() && is_strike_label(&text) {
            strike_col = Some(col);
        }
    }
    match strike_col {
        Some(col) if oi_cols.len() >= 2 => Some((col, oi_cols)),
        _ => None,
    }
}

/// Detect a wrapped export — a wide header followed by one value per
/// line — and rebuild the table at the header's width. Best-effort: if
/// no header in the scan window looks wrapped, rows pass through
/// unchanged. The first qualifying row wins; the tie-break is a
/// heuristic matched to real exports, not a scored search.
pub fn reshape_wrapped(rows: Vec<RawRow>) -> Vec<RawRow> {
    for (idx, row) in rows.iter().enumerate().take(SCAN_WINDOW) {
        if row.len() <= 1 || header_match(row).is_none() {
            continue;
        }
        let width = row.len();
        let wrapped_below = rows[idx + 1..]
            .iter()
            .take(10)
            .filter(|r| r.len() == 1 || r.len() * 2 < width)
            .count();
        if wrapped_below < 5 {
            continue;
        }

        // Flatten every non-empty cell below the header, then re-chunk
        // to the header's width. The header becomes row 0.
        let flat: Vec<Cell> = rows[idx + 1..]
            .iter()
            .flatten()
            .filter(|c| !c.is_empty())
            .cloned()
            .collect();
        let mut rebuilt: Vec<RawRow> = Vec::with_capacity(1 + flat.len() / width);
        rebuilt.push(row.clone());
        rebuilt.extend(flat.chunks(width).map(<[Cell]>::to_vec));
        return rebuilt;
    }
    rows
}

/// Locate the authoritative header and assign column roles. Only the
/// first two open-interest columns are used; call/put is resolved from
/// the header text when unambiguous, positionally otherwise.
pub fn locate_header(rows: &[RawRow]) -> Option<HeaderLayout> {
    for (idx, row) in rows.iter().enumerate().take(SCAN_WINDOW) {
        let Some((strike_col, oi_cols)) = header_match(row) else {
            continue;
        };
        let (first, second) = (oi_cols[0], oi_cols[1]);
        let first_text = row[first].text();
        let second_text = row[second].text();

        let first_is_call = is_call_label(&first_text);
        let second_is_call = is_call_label(&second_text);
        let first_is_put = is_put_label(&first_text);
        let second_is_put = is_put_label(&second_text);

        let (call_col, put_col) =
            if second_is_call && !first_is_call && first_is_put && !second_is_put {
                (second, first)
            } else {
                // Either the labels agree with chain order or they are
                // ambiguous; fall back to positional assignment.
                (first, second)
            };

        return Some(HeaderLayout {
            row: idx,
            strike_col,
            call_col,
            put_col,
        });
    }
    None
}
