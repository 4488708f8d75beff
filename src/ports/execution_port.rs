//! Execution/portfolio port trait.

use std::collections::BTreeMap;

use crate::domain::error::DecitraderError;

/// External execution collaborator. Owns the position lifecycle — fills,
/// slippage, P&L — and the held-positions set, which this core only reads.
pub trait ExecutionPort {
    /// Currently held asset ids with their existing target weights.
    fn held_positions(&self) -> Result<BTreeMap<String, f64>, DecitraderError>;

    /// Schedule an order moving the position toward `weight` (a signed
    /// fraction of equity). Weight 0 means full liquidation.
    fn set_target_weight(&mut self, asset_id: &str, weight: f64) -> Result<(), DecitraderError>;
}
