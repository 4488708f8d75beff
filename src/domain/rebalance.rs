//! One trading day, end to end: fetch histories, compute signals, build
//! target weights, submit them.
//!
//! All per-day state lives in the returned [`DayReport`] value — nothing is
//! carried across days except the held-positions set, which the execution
//! collaborator owns.

use chrono::NaiveDate;
use std::collections::BTreeMap;

use super::error::DecitraderError;
use super::history::AssetHistory;
use super::signal::{compute_signals, BetSet, DailySignals, SMA_LONG_WINDOW};
use super::universe::Universe;
use super::weights::build_target_weights;
use crate::ports::execution_port::ExecutionPort;
use crate::ports::market_data_port::MarketDataPort;

/// Everything one day's cycle produced, for reporting.
#[derive(Debug, Clone)]
pub struct DayReport {
    pub as_of: NaiveDate,
    pub signals: DailySignals,
    pub bets: BetSet,
    pub weights: BTreeMap<String, f64>,
}

/// Run the full daily cycle and submit every target weight through the
/// execution port, in sorted asset-id order.
pub fn run_trading_day(
    market_data: &dyn MarketDataPort,
    execution: &mut dyn ExecutionPort,
    universe: &Universe,
    as_of: NaiveDate,
) -> Result<DayReport, DecitraderError> {
    let mut histories = Vec::with_capacity(universe.count());
    for asset_id in &universe.asset_ids {
        let bars = market_data.fetch_history(asset_id, as_of, SMA_LONG_WINDOW)?;
        let sector = market_data.sector(asset_id)?;
        histories.push(AssetHistory::new(asset_id.clone(), sector, bars));
    }

    let signals = compute_signals(&histories);
    let bets = signals.bet_set();

    let held = execution.held_positions()?.into_keys().collect();
    let weights = build_target_weights(&signals, &bets, &held)?;

    for (asset_id, weight) in &weights {
        execution.set_target_weight(asset_id, *weight)?;
    }

    Ok(DayReport {
        as_of,
        signals,
        bets,
        weights,
    })
}
