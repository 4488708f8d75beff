//! In-memory execution adapter.
//!
//! Records every target-weight submission and maintains the held set, so a
//! day's cycle can run end to end without a broker. Weight 0 removes the
//! holding, anything else replaces it.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use crate::domain::error::DecitraderError;
use crate::ports::execution_port::ExecutionPort;

#[derive(Debug, Clone, PartialEq)]
pub struct TargetOrder {
    pub asset_id: String,
    pub weight: f64,
}

#[derive(Debug, Default)]
pub struct PaperExecution {
    held: BTreeMap<String, f64>,
    orders: Vec<TargetOrder>,
}

impl PaperExecution {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_position(mut self, asset_id: impl Into<String>, weight: f64) -> Self {
        self.held.insert(asset_id.into(), weight);
        self
    }

    /// Seed holdings from a `asset_id,weight` CSV file.
    pub fn from_csv_file<P: AsRef<Path>>(path: P) -> Result<Self, DecitraderError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| DecitraderError::Data {
            reason: format!("failed to read {}: {}", path.display(), e),
        })?;

        let mut rdr = csv::Reader::from_reader(content.as_bytes());
        let mut held = BTreeMap::new();

        for result in rdr.records() {
            let record = result.map_err(|e| DecitraderError::Data {
                reason: format!("CSV parse error in {}: {}", path.display(), e),
            })?;
            let asset_id = record.get(0).ok_or_else(|| DecitraderError::Data {
                reason: "missing asset_id column".into(),
            })?;
            let weight: f64 = record
                .get(1)
                .ok_or_else(|| DecitraderError::Data {
                    reason: "missing weight column".into(),
                })?
                .parse()
                .map_err(|e| DecitraderError::Data {
                    reason: format!("invalid weight value: {}", e),
                })?;
            held.insert(asset_id.to_uppercase(), weight);
        }

        Ok(Self {
            held,
            orders: Vec::new(),
        })
    }

    pub fn orders(&self) -> &[TargetOrder] {
        &self.orders
    }

    pub fn held_count(&self) -> usize {
        self.held.len()
    }
}

impl ExecutionPort for PaperExecution {
    fn held_positions(&self) -> Result<BTreeMap<String, f64>, DecitraderError> {
        Ok(self.held.clone())
    }

    fn set_target_weight(&mut self, asset_id: &str, weight: f64) -> Result<(), DecitraderError> {
        self.orders.push(TargetOrder {
            asset_id: asset_id.to_string(),
            weight,
        });
        if weight == 0.0 {
            self.held.remove(asset_id);
        } else {
            self.held.insert(asset_id.to_string(), weight);
        }
        Ok(())
    }
}
