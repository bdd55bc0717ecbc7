use anyhow::bail;
use serde::{Deserialize, Serialize};

/// One record from the weekly participant-flow feed (`shutai_data.json`).
/// Field names match the scraper's output exactly; values are net buy
/// amounts in 億円 except `nikkei_avg`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShutaiRecord {
    /// Trade date, `YYYY-MM-DD`.
    pub date: String,
    #[serde(default)]
    pub nikkei_avg: f64,
    #[serde(default)]
    pub foreign: f64,
    #[serde(default)]
    pub securities_self: f64,
    #[serde(default)]
    pub individual_total: f64,
    #[serde(default)]
    pub individual_cash: f64,
    #[serde(default)]
    pub individual_credit: f64,
    #[serde(default)]
    pub investment_trust: f64,
    #[serde(default)]
    pub business_corp: f64,
    #[serde(default)]
    pub other_corp: f64,
    #[serde(default)]
    pub trust_banks: f64,
    #[serde(default)]
    pub insurance: f64,
    #[serde(default)]
    pub city_banks: f64,
}

/// Every selectable series name, in feed column order.
pub const SERIES_NAMES: &[&str] = &[
    "nikkei_avg",
    "foreign",
    "securities_self",
    "individual_total",
    "individual_cash",
    "individual_credit",
    "investment_trust",
    "business_corp",
    "other_corp",
    "trust_banks",
    "insurance",
    "city_banks",
];

impl ShutaiRecord {
    /// Look up a participant series by its feed column name.
    pub fn series(&self, name: &str) -> anyhow::Result<f64> {
        let value = match name {
            "nikkei_avg" => self.nikkei_avg,
            "foreign" => self.foreign,
            "securities_self" => self.securities_self,
            "individual_total" => self.individual_total,
            "individual_cash" => self.individual_cash,
            "individual_credit" => self.individual_credit,
            "investment_trust" => self.investment_trust,
            "business_corp" => self.business_corp,
            "other_corp" => self.other_corp,
            "trust_banks" => self.trust_banks,
            "insurance" => self.insurance,
            "city_banks" => self.city_banks,
            _ => bail!(
                "unknown series `{name}` (expected one of: {})",
                SERIES_NAMES.join(", ")
            ),
        };
        Ok(value)
    }
}
