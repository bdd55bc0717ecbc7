use schemars::schema_for;

use crate::model::StrikeRow;

/// Generate and print the JSON Schema for normalized strike rows.
pub fn run() -> anyhow::Result<()> {
    let schema = schema_for!(StrikeRow);
    let json = serde_json::to_string_pretty(&schema)?;
    println!("{json}");
    Ok(())
}
