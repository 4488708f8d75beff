//! Per-asset trailing history for one trading day.

use super::bar::SessionBar;
use super::sector::Sector;

/// Everything the signal engine needs for one asset on one day: the trailing
/// session bars (oldest first, most recent last) and the sector label.
///
/// Histories are rebuilt fresh each trading day; nothing here survives to the
/// next day.
#[derive(Debug, Clone)]
pub struct AssetHistory {
    pub asset_id: String,
    pub sector: Sector,
    pub bars: Vec<SessionBar>,
}

impl AssetHistory {
    pub fn new(asset_id: impl Into<String>, sector: Sector, bars: Vec<SessionBar>) -> Self {
        AssetHistory {
            asset_id: asset_id.into(),
            sector,
            bars,
        }
    }

    /// Closing price of the most recent session, if any bars exist.
    pub fn latest_close(&self) -> Option<f64> {
        self.bars.last().map(|b| b.close)
    }

    pub fn session_count(&self) -> usize {
        self.bars.len()
    }
}
