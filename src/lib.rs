//! decitrader — daily-rebalanced cross-sectional momentum strategy.
//!
//! Hexagonal architecture: strategy logic in [`domain`], port traits in
//! [`ports`], concrete implementations in [`adapters`].

pub mod domain;
pub mod ports;
pub mod adapters;
pub mod cli;
