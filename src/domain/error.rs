//! Domain error types.
//!
//! Conditions the strategy recovers from locally — insufficient history, a
//! zero moving-average denominator, an empty bet set — are not errors here;
//! they surface as absent values or empty sets. This enum covers the
//! conditions that abort a day's cycle.

/// Top-level error type for decitrader.
#[derive(Debug, thiserror::Error)]
pub enum DecitraderError {
    #[error("config parse error in {file}: {reason}")]
    ConfigParse { file: String, reason: String },

    #[error("missing config key [{section}] {key}")]
    ConfigMissing { section: String, key: String },

    #[error("invalid config value [{section}] {key}: {reason}")]
    ConfigInvalid {
        section: String,
        key: String,
        reason: String,
    },

    #[error("data error: {reason}")]
    Data { reason: String },

    #[error("no data for {asset_id}")]
    NoData { asset_id: String },

    /// A bet has no momentum score in the day's signal table. This cannot
    /// arise from bad market data — it means the signal and portfolio
    /// phases disagree, so the cycle fails loudly instead of defaulting
    /// the weight to zero.
    #[error("invariant violation: {asset_id} is in the bet set but has no momentum score")]
    MissingScore { asset_id: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl From<&DecitraderError> for std::process::ExitCode {
    fn from(err: &DecitraderError) -> Self {
        let code: u8 = match err {
            DecitraderError::Io(_) => 1,
            DecitraderError::ConfigParse { .. }
            | DecitraderError::ConfigMissing { .. }
            | DecitraderError::ConfigInvalid { .. } => 2,
            DecitraderError::Data { .. } => 3,
            DecitraderError::MissingScore { .. } => 4,
            DecitraderError::NoData { .. } => 5,
        };
        std::process::ExitCode::from(code)
    }
}
