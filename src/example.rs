/// A realistic pasted options-chain export: a title line, a header with
/// Japanese labels, K-suffixed and comma-separated values, and a total
/// footer. Pipes straight back into the `chain` subcommand.
const SAMPLE: &str = r#"日経225オプション 2026年9月限,,
権利行使価格,コール建玉,プット建玉
"45,000",1.2K,350
"44,500",980,410
"44,000",2.1K,1.5K
"43,500",760,890
"43,000",540,2.3K
"42,500",120,1.8K
合計,5.7K,7.25K
"#;

/// Print a sample export to stdout.
pub fn run() -> anyhow::Result<()> {
    print!("{SAMPLE}");
    Ok(())
}
