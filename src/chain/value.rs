use crate::model::Cell;

/// Coerce a cell to a number, best-effort. Anything unparseable is 0 —
/// source exports are messy by design and the normalizer recovers
/// rather than validates.
pub fn cell_to_number(cell: &Cell) -> f64 {
    match cell {
        Cell::Number(n) => *n,
        Cell::Text(s) => parse_loose(s),
        Cell::Empty => 0.0,
    }
}

/// Parse a loosely formatted numeric string: trailing `K`/`M` suffix
/// expansion, then strip everything that is not a digit, dot, or minus.
/// Tolerates thousands separators, currency symbols, and whitespace.
/// JPX exports mark negatives with 「▼」 (and positives with 「▲」).
pub fn parse_loose(raw: &str) -> f64 {
    let upper = raw.trim().to_uppercase();
    let (body, scale) = if let Some(stripped) = upper.strip_suffix('K') {
        (stripped, 1_000.0)
    } else if let Some(stripped) = upper.strip_suffix('M') {
        (stripped, 1_000_000.0)
    } else {
        (upper.as_str(), 1.0)
    };

    let marked_negative = body.contains('▼');
    let mut cleaned: String = body
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.' || *c == '-')
        .collect();
    if marked_negative && !cleaned.starts_with('-') {
        cleaned.insert(0, '-');
    }

    cleaned.parse::<f64>().map(|n| n * scale).unwrap_or(0.0)
}
