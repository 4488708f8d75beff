#![allow(dead_code)]

use chrono::{Days, NaiveDate};
use decitrader::domain::bar::SessionBar;
use decitrader::domain::error::DecitraderError;
use decitrader::domain::sector::Sector;
use decitrader::ports::market_data_port::MarketDataPort;
use std::collections::HashMap;

pub struct MockMarketData {
    pub data: HashMap<String, (Sector, Vec<SessionBar>)>,
    pub errors: HashMap<String, String>,
}

impl MockMarketData {
    pub fn new() -> Self {
        Self {
            data: HashMap::new(),
            errors: HashMap::new(),
        }
    }

    pub fn with_asset(mut self, asset_id: &str, sector: Sector, bars: Vec<SessionBar>) -> Self {
        self.data.insert(asset_id.to_string(), (sector, bars));
        self
    }

    pub fn with_error(mut self, asset_id: &str, reason: &str) -> Self {
        self.errors.insert(asset_id.to_string(), reason.to_string());
        self
    }
}

impl MarketDataPort for MockMarketData {
    fn fetch_history(
        &self,
        asset_id: &str,
        as_of: NaiveDate,
        sessions: usize,
    ) -> Result<Vec<SessionBar>, DecitraderError> {
        if let Some(reason) = self.errors.get(asset_id) {
            return Err(DecitraderError::Data {
                reason: reason.clone(),
            });
        }
        let mut bars: Vec<SessionBar> = self
            .data
            .get(asset_id)
            .map(|(_, bars)| bars.iter().filter(|b| b.date <= as_of).cloned().collect())
            .unwrap_or_default();
        if bars.len() > sessions {
            bars.drain(..bars.len() - sessions);
        }
        Ok(bars)
    }

    fn sector(&self, asset_id: &str) -> Result<Sector, DecitraderError> {
        Ok(self
            .data
            .get(asset_id)
            .map(|(sector, _)| *sector)
            .unwrap_or(Sector::Unknown))
    }

    fn list_assets(&self) -> Result<Vec<String>, DecitraderError> {
        let mut ids: Vec<String> = self.data.keys().cloned().collect();
        ids.sort();
        Ok(ids)
    }

    fn data_range(
        &self,
        asset_id: &str,
    ) -> Result<Option<(NaiveDate, NaiveDate, usize)>, DecitraderError> {
        match self.data.get(asset_id) {
            Some((_, bars)) if !bars.is_empty() => {
                let min = bars.iter().map(|b| b.date).min().unwrap();
                let max = bars.iter().map(|b| b.date).max().unwrap();
                Ok(Some((min, max, bars.len())))
            }
            _ => Ok(None),
        }
    }
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// 50 sessions starting 2024-01-01: flat at `base`, then stepping to
/// `base * (1 + lift)` for the final 10 sessions, with gently rising volume
/// so the liquidity screen passes.
pub fn stepped_bars(base: f64, lift: f64) -> Vec<SessionBar> {
    let start = date(2024, 1, 1);
    (0..50)
        .map(|i| SessionBar {
            date: start.checked_add_days(Days::new(i as u64)).unwrap(),
            close: if i < 40 { base } else { base * (1.0 + lift) },
            volume: 1_000_000 + i as i64 * 10_000,
        })
        .collect()
}

/// The day after the last session produced by [`stepped_bars`].
pub fn as_of_day() -> NaiveDate {
    date(2024, 2, 19)
}

/// Ten technology assets T00..T09 with lifts from -5% to +4%, so momentum
/// scores rise strictly with the index.
pub fn ten_asset_market() -> MockMarketData {
    let mut market = MockMarketData::new();
    for i in 0..10 {
        market = market.with_asset(
            &format!("T{:02}", i),
            Sector::Technology,
            stepped_bars(100.0, (i as f64 - 5.0) * 0.01),
        );
    }
    market
}

pub fn asset_ids(count: usize) -> Vec<String> {
    (0..count).map(|i| format!("T{:02}", i)).collect()
}
