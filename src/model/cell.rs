/// A single cell as produced by a CSV/TSV parser or a pasted export.
/// Exports are messy by design: column counts vary row to row and the
/// same column may hold numbers, decorated strings, or nothing at all.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Number(f64),
    Text(String),
    Empty,
}

/// One untyped input row. No schema invariant — a wrapped export can
/// produce rows of wildly different widths.
pub type RawRow = Vec<Cell>;

impl Cell {
    /// Classify one raw field from a tabular source.
    pub fn from_field(field: &str) -> Cell {
        let trimmed = field.trim();
        if trimmed.is_empty() {
            return Cell::Empty;
        }
        match trimmed.parse::<f64>() {
            Ok(n) => Cell::Number(n),
            Err(_) => Cell::Text(trimmed.to_string()),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// Trimmed string view used for header pattern matching.
    pub fn text(&self) -> String {
        match self {
            Cell::Number(n) => n.to_string(),
            Cell::Text(s) => s.trim().to_string(),
            Cell::Empty => String::new(),
        }
    }
}
