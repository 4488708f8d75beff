//! Core strategy types and logic.

pub mod bar;
pub mod sector;
pub mod history;
pub mod rolling;
pub mod snapshot;
pub mod decile;
pub mod signal;
pub mod weights;
pub mod rebalance;
pub mod universe;
pub mod error;
