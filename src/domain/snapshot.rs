//! Per-asset row of the daily cross-section.

use super::sector::Sector;

/// One asset's signals for one trading day. Recomputed fresh every day,
/// never persisted.
///
/// Fields that depend on a trailing window are `None` when the asset lacks
/// sufficient history (or, for the score, when a moving-average denominator
/// is zero). A `None` fails every screen comparison and excludes the asset
/// from decile ranking.
#[derive(Debug, Clone)]
pub struct AssetSnapshot {
    pub asset_id: String,
    pub sector: Sector,
    /// Latest closing price; `None` only when the asset has no bars at all.
    pub close_price: Option<f64>,
    pub sma_10: Option<f64>,
    pub sma_20: Option<f64>,
    pub sma_50: Option<f64>,
    pub dollar_volume_5: Option<f64>,
    pub dollar_volume_20: Option<f64>,
    /// Signed divergence score; positive means upward momentum.
    pub momentum_score: Option<f64>,
    /// |momentum_score|, carried for reporting only.
    pub momentum_abs: Option<f64>,
    /// Rank bucket 0 (lowest score) through 9 (highest) across the day's
    /// scored assets. `None` when the score is undefined or fewer than ten
    /// assets were scored.
    pub decile: Option<u8>,
    pub is_long_candidate: bool,
    pub is_short_candidate: bool,
    pub passes_screen: bool,
}

impl AssetSnapshot {
    /// True when the asset is in the day's bet set: it survived the screen
    /// and sits in a boundary decile.
    pub fn is_bet(&self) -> bool {
        self.passes_screen && (self.is_long_candidate || self.is_short_candidate)
    }
}
