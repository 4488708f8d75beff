//! Portfolio constructor: turn the day's bet set into signed target
//! weights, normalised so gross exposure across all bets is 1.

use std::collections::{BTreeMap, BTreeSet};

use super::error::DecitraderError;
use super::signal::{BetSet, DailySignals};

/// Build the day's target-weight mapping.
///
/// Every held asset absent from the bet set receives weight 0 (liquidate).
/// Every bet receives its signed momentum score divided by the total
/// absolute momentum across all bets, so shorts carry negative weight and
/// Σ|weight| over bets is 1.
///
/// An empty bet set skips the weighting step entirely — no division by
/// zero — and liquidates everything held. A bet with no score in the
/// signal table is a logic defect and fails the cycle loudly.
pub fn build_target_weights(
    signals: &DailySignals,
    bets: &BetSet,
    held: &BTreeSet<String>,
) -> Result<BTreeMap<String, f64>, DecitraderError> {
    let mut weights = BTreeMap::new();

    for asset_id in held {
        if !bets.contains(asset_id) {
            weights.insert(asset_id.clone(), 0.0);
        }
    }

    if bets.is_empty() {
        return Ok(weights);
    }

    let mut total_momentum = 0.0;
    for asset_id in bets.assets() {
        let score = signals
            .momentum_score(asset_id)
            .ok_or_else(|| DecitraderError::MissingScore {
                asset_id: asset_id.clone(),
            })?;
        total_momentum += score.abs();
    }

    // All bet scores exactly zero: nothing to weight, treat the bets as
    // positions to stay out of rather than dividing by zero.
    if total_momentum == 0.0 {
        for asset_id in bets.assets() {
            weights.insert(asset_id.clone(), 0.0);
        }
        return Ok(weights);
    }

    for asset_id in bets.assets() {
        let score = signals
            .momentum_score(asset_id)
            .ok_or_else(|| DecitraderError::MissingScore {
                asset_id: asset_id.clone(),
            })?;
        weights.insert(asset_id.clone(), score / total_momentum);
    }

    Ok(weights)
}
