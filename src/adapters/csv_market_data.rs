//! CSV file market data adapter.
//!
//! Layout: one `{ASSET}.csv` per asset with `date,close,volume` rows, plus
//! a `sectors.csv` mapping `asset_id,sector`.

use chrono::NaiveDate;
use std::fs;
use std::path::PathBuf;

use crate::domain::bar::SessionBar;
use crate::domain::error::DecitraderError;
use crate::domain::sector::Sector;
use crate::ports::market_data_port::MarketDataPort;

pub const SECTORS_FILE: &str = "sectors.csv";

pub struct CsvMarketData {
    base_path: PathBuf,
}

impl CsvMarketData {
    pub fn new(base_path: PathBuf) -> Self {
        Self { base_path }
    }

    fn asset_path(&self, asset_id: &str) -> PathBuf {
        self.base_path.join(format!("{}.csv", asset_id))
    }

    fn read_bars(&self, asset_id: &str) -> Result<Vec<SessionBar>, DecitraderError> {
        let path = self.asset_path(asset_id);
        let content = fs::read_to_string(&path).map_err(|e| DecitraderError::Data {
            reason: format!("failed to read {}: {}", path.display(), e),
        })?;

        let mut rdr = csv::Reader::from_reader(content.as_bytes());
        let mut bars = Vec::new();

        for result in rdr.records() {
            let record = result.map_err(|e| DecitraderError::Data {
                reason: format!("CSV parse error in {}: {}", path.display(), e),
            })?;

            let date_str = record.get(0).ok_or_else(|| DecitraderError::Data {
                reason: "missing date column".into(),
            })?;
            let date = NaiveDate::parse_from_str(date_str, "%Y-%m-%d").map_err(|e| {
                DecitraderError::Data {
                    reason: format!("invalid date format: {}", e),
                }
            })?;

            let close: f64 = record
                .get(1)
                .ok_or_else(|| DecitraderError::Data {
                    reason: "missing close column".into(),
                })?
                .parse()
                .map_err(|e| DecitraderError::Data {
                    reason: format!("invalid close value: {}", e),
                })?;

            let volume: i64 = record
                .get(2)
                .ok_or_else(|| DecitraderError::Data {
                    reason: "missing volume column".into(),
                })?
                .parse()
                .map_err(|e| DecitraderError::Data {
                    reason: format!("invalid volume value: {}", e),
                })?;

            bars.push(SessionBar {
                date,
                close,
                volume,
            });
        }

        bars.sort_by_key(|b| b.date);
        Ok(bars)
    }
}

impl MarketDataPort for CsvMarketData {
    fn fetch_history(
        &self,
        asset_id: &str,
        as_of: NaiveDate,
        sessions: usize,
    ) -> Result<Vec<SessionBar>, DecitraderError> {
        let mut bars = self.read_bars(asset_id)?;
        bars.retain(|b| b.date <= as_of);
        if bars.len() > sessions {
            bars.drain(..bars.len() - sessions);
        }
        Ok(bars)
    }

    fn sector(&self, asset_id: &str) -> Result<Sector, DecitraderError> {
        let path = self.base_path.join(SECTORS_FILE);
        let content = fs::read_to_string(&path).map_err(|e| DecitraderError::Data {
            reason: format!("failed to read {}: {}", path.display(), e),
        })?;

        let mut rdr = csv::Reader::from_reader(content.as_bytes());
        for result in rdr.records() {
            let record = result.map_err(|e| DecitraderError::Data {
                reason: format!("CSV parse error in {}: {}", path.display(), e),
            })?;
            let (Some(id), Some(sector)) = (record.get(0), record.get(1)) else {
                continue;
            };
            if id.eq_ignore_ascii_case(asset_id) {
                return sector.parse().map_err(|e| DecitraderError::Data {
                    reason: format!("{}: {}", path.display(), e),
                });
            }
        }

        // Unclassified assets can never pass the sector screen, but they
        // still show up in the daily table.
        Ok(Sector::Unknown)
    }

    fn list_assets(&self) -> Result<Vec<String>, DecitraderError> {
        let entries = fs::read_dir(&self.base_path).map_err(|e| DecitraderError::Data {
            reason: format!(
                "failed to read directory {}: {}",
                self.base_path.display(),
                e
            ),
        })?;

        let mut asset_ids = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| DecitraderError::Data {
                reason: format!("directory entry error: {}", e),
            })?;
            let name = entry.file_name();
            let name_str = name.to_string_lossy();

            if let Some(stem) = name_str.strip_suffix(".csv") {
                if name_str != SECTORS_FILE {
                    asset_ids.push(stem.to_string());
                }
            }
        }

        asset_ids.sort();
        Ok(asset_ids)
    }

    fn data_range(
        &self,
        asset_id: &str,
    ) -> Result<Option<(NaiveDate, NaiveDate, usize)>, DecitraderError> {
        let bars = match self.read_bars(asset_id) {
            Ok(bars) => bars,
            Err(_) => return Ok(None),
        };
        match (bars.first(), bars.last()) {
            (Some(first), Some(last)) => Ok(Some((first.date, last.date, bars.len()))),
            _ => Ok(None),
        }
    }
}
