//! Daily session bar.

use chrono::NaiveDate;

/// One trading session for one asset: closing price and traded volume.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionBar {
    pub date: NaiveDate,
    pub close: f64,
    pub volume: i64,
}

impl SessionBar {
    /// close × volume, the day's traded dollar value.
    pub fn dollar_volume(&self) -> f64 {
        self.close * self.volume as f64
    }
}
