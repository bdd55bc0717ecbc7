use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One aggregated strike bucket of the normalized options chain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct StrikeRow {
    /// Strike price rounded to the nearest multiple of the bucket step.
    pub strike: f64,
    /// Summed call open interest for this bucket.
    pub call: f64,
    /// Summed put open interest for this bucket.
    pub put: f64,
    /// Call minus put open interest — the primary plotted quantity.
    pub diff: f64,
}

/// Soft failures of the chain normalizer. Neither is fatal: callers
/// render nothing and show the message instead. The messages keep the
/// original dashboard's Japanese register.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ChainError {
    #[error("ヘッダー行が見つかりませんでした（権利行使価格と建玉の列を検出できません）")]
    NoHeaderFound,

    #[error("有効なデータ行がありませんでした（権利行使価格が正の行が0件です）")]
    NoValidRows,
}
