//! Trailing-window means over session bars.
//!
//! The signal engine only ever needs the mean ending at the most recent
//! session, so these return a single value rather than a full series.
//! Insufficient history yields `None`, which downstream code treats as
//! failing every numeric comparison.

use super::bar::SessionBar;

/// Arithmetic mean of closing prices over the trailing `window` sessions,
/// inclusive of the most recent session.
pub fn trailing_close_mean(bars: &[SessionBar], window: usize) -> Option<f64> {
    if window == 0 || bars.len() < window {
        return None;
    }
    let sum: f64 = bars[bars.len() - window..].iter().map(|b| b.close).sum();
    Some(sum / window as f64)
}

/// Arithmetic mean of close × volume over the trailing `window` sessions.
pub fn trailing_dollar_volume_mean(bars: &[SessionBar], window: usize) -> Option<f64> {
    if window == 0 || bars.len() < window {
        return None;
    }
    let sum: f64 = bars[bars.len() - window..]
        .iter()
        .map(|b| b.dollar_volume())
        .sum();
    Some(sum / window as f64)
}
