//! Market data access port trait.

use chrono::NaiveDate;

use crate::domain::bar::SessionBar;
use crate::domain::error::DecitraderError;
use crate::domain::sector::Sector;

/// External market/reference-data collaborator.
///
/// `fetch_history` returns the trailing bars ending at the most recent
/// session on or before `as_of`, oldest first, at most `sessions` entries.
/// Insufficient history is not an error — callers get a shorter (possibly
/// empty) series and decide what that means.
pub trait MarketDataPort {
    fn fetch_history(
        &self,
        asset_id: &str,
        as_of: NaiveDate,
        sessions: usize,
    ) -> Result<Vec<SessionBar>, DecitraderError>;

    fn sector(&self, asset_id: &str) -> Result<Sector, DecitraderError>;

    fn list_assets(&self) -> Result<Vec<String>, DecitraderError>;

    /// First date, last date, and session count available for an asset.
    fn data_range(
        &self,
        asset_id: &str,
    ) -> Result<Option<(NaiveDate, NaiveDate, usize)>, DecitraderError>;
}
