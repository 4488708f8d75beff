//! Tradable asset list: parsing from configuration and per-asset data
//! validation.

use chrono::NaiveDate;
use std::collections::HashSet;

use super::error::DecitraderError;
use super::signal::SMA_LONG_WINDOW;
use crate::ports::market_data_port::MarketDataPort;

#[derive(Debug, Clone)]
pub struct Universe {
    pub asset_ids: Vec<String>,
}

impl Universe {
    pub fn count(&self) -> usize {
        self.asset_ids.len()
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum UniverseError {
    #[error("empty token in asset list")]
    EmptyToken,

    #[error("duplicate asset: {0}")]
    DuplicateAsset(String),

    #[error("all assets failed validation")]
    AllAssetsFailed,
}

/// Parse a comma-separated asset list. Ids are upper-cased; empty tokens
/// and duplicates are rejected.
pub fn parse_assets(input: &str) -> Result<Vec<String>, UniverseError> {
    let mut asset_ids = Vec::new();
    let mut seen = HashSet::new();

    for token in input.split(',') {
        let trimmed = token.trim();
        if trimmed.is_empty() {
            return Err(UniverseError::EmptyToken);
        }
        let asset_id = trimmed.to_uppercase();
        if seen.contains(&asset_id) {
            return Err(UniverseError::DuplicateAsset(asset_id));
        }
        seen.insert(asset_id.clone());
        asset_ids.push(asset_id);
    }

    Ok(asset_ids)
}

#[derive(Debug, Clone)]
pub struct SkippedAsset {
    pub asset_id: String,
    pub reason: SkipReason,
}

#[derive(Debug, Clone)]
pub enum SkipReason {
    NoData,
    FetchFailed(String),
}

pub struct UniverseValidationResult {
    pub universe: Universe,
    pub skipped: Vec<SkippedAsset>,
}

/// Check each asset has at least one session of data as of the trading day.
///
/// Assets with no data are skipped with a warning — the signal engine
/// tolerates short histories (absent windows simply fail the screen), but
/// an asset with nothing at all is dead weight. Fails only when every
/// asset is skipped.
pub fn validate_universe(
    market_data: &dyn MarketDataPort,
    asset_ids: Vec<String>,
    as_of: NaiveDate,
) -> Result<UniverseValidationResult, UniverseError> {
    let mut valid = Vec::new();
    let mut skipped = Vec::new();

    for asset_id in asset_ids {
        let bars = match market_data.fetch_history(&asset_id, as_of, SMA_LONG_WINDOW) {
            Ok(bars) => bars,
            Err(e) => {
                eprintln!("warning: skipping {} ({})", asset_id, e);
                skipped.push(SkippedAsset {
                    asset_id,
                    reason: SkipReason::FetchFailed(e.to_string()),
                });
                continue;
            }
        };

        if bars.is_empty() {
            eprintln!("warning: skipping {} (no data as of {})", asset_id, as_of);
            skipped.push(SkippedAsset {
                asset_id,
                reason: SkipReason::NoData,
            });
            continue;
        }

        valid.push(asset_id);
    }

    if valid.is_empty() {
        return Err(UniverseError::AllAssetsFailed);
    }

    Ok(UniverseValidationResult {
        universe: Universe { asset_ids: valid },
        skipped,
    })
}

impl From<UniverseError> for DecitraderError {
    fn from(err: UniverseError) -> Self {
        DecitraderError::Data {
            reason: err.to_string(),
        }
    }
}
