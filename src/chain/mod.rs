mod aggregate;
mod header;
mod value;

use std::path::PathBuf;

use anyhow::{Context, bail};

pub use header::HeaderLayout;
pub use value::parse_loose;

use crate::data;
use crate::model::{ChainError, RawRow, StrikeRow};

/// Normalize loosely structured option-chain rows into sorted strike
/// buckets. Pure and stateless: re-running with the same input and step
/// yields identical output.
///
/// The pipeline is: un-wrap a reshaped single-column export if one is
/// detected, locate the header row and assign column roles, then bucket
/// and sum open interest per rounded strike. Both failure modes are
/// soft — the caller shows the message and renders nothing.
pub fn normalize(rows: Vec<RawRow>, step: f64) -> Result<Vec<StrikeRow>, ChainError> {
    let rows = header::reshape_wrapped(rows);
    let layout = header::locate_header(&rows).ok_or(ChainError::NoHeaderFound)?;
    let buckets = aggregate::aggregate(&rows, layout, step);
    if buckets.is_empty() {
        return Err(ChainError::NoValidRows);
    }
    Ok(buckets)
}

/// Options for the `chain` subcommand.
pub struct ChainConfig {
    /// Input file, `-` for stdin.
    pub file: PathBuf,
    pub step: f64,
    /// `table` or `json`.
    pub format: String,
    pub output: Option<PathBuf>,
}

/// CLI entry point for the `chain` subcommand.
pub fn run(config: &ChainConfig) -> anyhow::Result<()> {
    let text = data::read_source(&config.file)?;
    let rows = data::parse_rows(&text)?;

    let buckets = match normalize(rows, config.step) {
        Ok(buckets) => buckets,
        Err(e) => {
            // Soft failure: show the message, render nothing.
            eprintln!("{e}");
            return Ok(());
        }
    };

    let rendered = match config.format.as_str() {
        "table" => render_table(&buckets),
        "json" => serde_json::to_string_pretty(&buckets)?,
        other => bail!("unknown format `{other}` (expected `table` or `json`)"),
    };

    match &config.output {
        Some(path) => {
            std::fs::write(path, rendered)
                .with_context(|| format!("writing {}", path.display()))?;
            println!("Wrote {} buckets to {}", buckets.len(), path.display());
        }
        None => println!("{rendered}"),
    }
    Ok(())
}

fn render_table(buckets: &[StrikeRow]) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{:>10}  {:>12}  {:>12}  {:>12}\n",
        "strike", "call", "put", "diff"
    ));
    for row in buckets {
        out.push_str(&format!(
            "{:>10}  {:>12}  {:>12}  {:>12}\n",
            row.strike, row.call, row.put, row.diff
        ));
    }
    out
}
