//! Signal engine: moving-average divergence scores, decile ranks, and the
//! universe screen, computed once per trading day over the full
//! cross-section.

use std::collections::BTreeSet;

use super::decile::assign_deciles;
use super::history::AssetHistory;
use super::rolling::{trailing_close_mean, trailing_dollar_volume_mean};
use super::sector::Sector;
use super::snapshot::AssetSnapshot;

pub const SMA_SHORT_WINDOW: usize = 10;
pub const SMA_MID_WINDOW: usize = 20;
pub const SMA_LONG_WINDOW: usize = 50;
pub const DOLLAR_VOLUME_SHORT_WINDOW: usize = 5;
pub const DOLLAR_VOLUME_LONG_WINDOW: usize = 20;

/// Weight on the short/mid moving-average divergence leg.
pub const FAST_LEG_WEIGHT: f64 = 0.67;
/// Weight on the mid/long moving-average divergence leg.
pub const SLOW_LEG_WEIGHT: f64 = 0.33;

/// Screen thresholds. The strategy is fixed; these are constants, not
/// configuration.
pub const SCREEN_SECTOR: Sector = Sector::Technology;
pub const MIN_SMA_SHORT: f64 = 5.0;
pub const MIN_DOLLAR_VOLUME: f64 = 5_000_000.0;

/// Weighted combination of the two moving-average divergences. `None` when
/// either denominator is zero — such assets are excluded from ranking
/// rather than carrying an undefined score.
pub fn momentum_score(sma_short: f64, sma_mid: f64, sma_long: f64) -> Option<f64> {
    if sma_mid == 0.0 || sma_long == 0.0 {
        return None;
    }
    Some(
        FAST_LEG_WEIGHT * (sma_short - sma_mid) / sma_mid
            + SLOW_LEG_WEIGHT * (sma_mid - sma_long) / sma_long,
    )
}

/// The day's long and short bets: screened assets sitting in the boundary
/// deciles. Ordered sets keep downstream iteration deterministic.
#[derive(Debug, Clone, Default)]
pub struct BetSet {
    pub longs: BTreeSet<String>,
    pub shorts: BTreeSet<String>,
}

impl BetSet {
    pub fn is_empty(&self) -> bool {
        self.longs.is_empty() && self.shorts.is_empty()
    }

    pub fn contains(&self, asset_id: &str) -> bool {
        self.longs.contains(asset_id) || self.shorts.contains(asset_id)
    }

    /// All bet asset ids, longs and shorts together, in sorted order.
    pub fn assets(&self) -> impl Iterator<Item = &String> {
        self.longs.iter().chain(self.shorts.iter())
    }

    pub fn len(&self) -> usize {
        self.longs.len() + self.shorts.len()
    }
}

/// Output of the signal engine for one trading day: the full per-asset
/// table, in input order. Built fresh each day and discarded after the
/// portfolio is constructed.
#[derive(Debug, Clone)]
pub struct DailySignals {
    pub snapshots: Vec<AssetSnapshot>,
}

impl DailySignals {
    /// Rows that passed the universe screen.
    pub fn universe(&self) -> impl Iterator<Item = &AssetSnapshot> {
        self.snapshots.iter().filter(|s| s.passes_screen)
    }

    /// Momentum score for a given asset, if it was defined today.
    pub fn momentum_score(&self, asset_id: &str) -> Option<f64> {
        self.snapshots
            .iter()
            .find(|s| s.asset_id == asset_id)
            .and_then(|s| s.momentum_score)
    }

    pub fn bet_set(&self) -> BetSet {
        let mut bets = BetSet::default();
        for snap in self.universe() {
            if snap.is_long_candidate {
                bets.longs.insert(snap.asset_id.clone());
            } else if snap.is_short_candidate {
                bets.shorts.insert(snap.asset_id.clone());
            }
        }
        bets
    }
}

fn above(value: Option<f64>, threshold: f64) -> bool {
    value.is_some_and(|v| v > threshold)
}

/// Run the signal engine over the day's cross-section.
///
/// Assets lacking history for a window simply carry absent values; they are
/// excluded from decile ranking and fail the screen, and are revisited
/// fresh the next day.
pub fn compute_signals(histories: &[AssetHistory]) -> DailySignals {
    let mut snapshots: Vec<AssetSnapshot> = histories
        .iter()
        .map(|h| {
            let sma_10 = trailing_close_mean(&h.bars, SMA_SHORT_WINDOW);
            let sma_20 = trailing_close_mean(&h.bars, SMA_MID_WINDOW);
            let sma_50 = trailing_close_mean(&h.bars, SMA_LONG_WINDOW);
            let score = match (sma_10, sma_20, sma_50) {
                (Some(short), Some(mid), Some(long)) => momentum_score(short, mid, long),
                _ => None,
            };

            AssetSnapshot {
                asset_id: h.asset_id.clone(),
                sector: h.sector,
                close_price: h.latest_close(),
                sma_10,
                sma_20,
                sma_50,
                dollar_volume_5: trailing_dollar_volume_mean(&h.bars, DOLLAR_VOLUME_SHORT_WINDOW),
                dollar_volume_20: trailing_dollar_volume_mean(&h.bars, DOLLAR_VOLUME_LONG_WINDOW),
                momentum_score: score,
                momentum_abs: score.map(f64::abs),
                decile: None,
                is_long_candidate: false,
                is_short_candidate: false,
                passes_screen: false,
            }
        })
        .collect();

    // Rank only the assets with a defined score, preserving input order so
    // the tie-break is reproducible day to day.
    let scored: Vec<(usize, f64)> = snapshots
        .iter()
        .enumerate()
        .filter_map(|(i, s)| s.momentum_score.map(|v| (i, v)))
        .collect();
    let scores: Vec<f64> = scored.iter().map(|(_, v)| *v).collect();
    let deciles = assign_deciles(&scores);

    for ((idx, _), decile) in scored.iter().zip(deciles) {
        let snap = &mut snapshots[*idx];
        snap.decile = decile;
        snap.is_long_candidate = decile == Some(9);
        snap.is_short_candidate = decile == Some(0);
    }

    for snap in &mut snapshots {
        let rising_volume = match (snap.dollar_volume_5, snap.dollar_volume_20) {
            (Some(short), Some(long)) => short > long,
            _ => false,
        };
        snap.passes_screen = snap.sector == SCREEN_SECTOR
            && above(snap.sma_10, MIN_SMA_SHORT)
            && above(snap.dollar_volume_20, MIN_DOLLAR_VOLUME)
            && rising_volume
            && (snap.is_long_candidate || snap.is_short_candidate);
    }

    DailySignals { snapshots }
}
