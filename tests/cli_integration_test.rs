//! CLI orchestration tests.
//!
//! Tests cover:
//! - Config resolution helpers (as-of date, asset list, data path)
//! - End-to-end rebalance from real CSV files on disk
//! - Held-positions file feeding the liquidation pass

mod common;

use chrono::Days;
use common::*;
use decitrader::adapters::csv_market_data::{CsvMarketData, SECTORS_FILE};
use decitrader::adapters::file_config_adapter::FileConfigAdapter;
use decitrader::adapters::paper_execution::PaperExecution;
use decitrader::cli::{resolve_as_of, resolve_assets, resolve_data_path};
use decitrader::domain::error::DecitraderError;
use decitrader::domain::rebalance::run_trading_day;
use decitrader::domain::universe::validate_universe;
use decitrader::ports::execution_port::ExecutionPort;
use std::fmt::Write as _;
use std::fs;
use std::path::PathBuf;

const VALID_INI: &str = r#"
[rebalance]
as_of = 2024-02-19

[universe]
assets = T00,T01,T02,T03,T04,T05,T06,T07,T08,T09

[data]
path = ./data
"#;

mod config_resolution {
    use super::*;

    #[test]
    fn resolve_as_of_from_config() {
        let config = FileConfigAdapter::from_string(VALID_INI).unwrap();
        let as_of = resolve_as_of(None, &config).unwrap();
        assert_eq!(as_of, date(2024, 2, 19));
    }

    #[test]
    fn resolve_as_of_override_wins() {
        let config = FileConfigAdapter::from_string(VALID_INI).unwrap();
        let as_of = resolve_as_of(Some("2024-03-01"), &config).unwrap();
        assert_eq!(as_of, date(2024, 3, 1));
    }

    #[test]
    fn resolve_as_of_missing_key() {
        let config = FileConfigAdapter::from_string("[data]\npath = ./data\n").unwrap();
        let result = resolve_as_of(None, &config);
        assert!(matches!(
            result,
            Err(DecitraderError::ConfigMissing { section, key })
                if section == "rebalance" && key == "as_of"
        ));
    }

    #[test]
    fn resolve_as_of_bad_format() {
        let config =
            FileConfigAdapter::from_string("[rebalance]\nas_of = 19/02/2024\n").unwrap();
        let result = resolve_as_of(None, &config);
        assert!(matches!(
            result,
            Err(DecitraderError::ConfigInvalid { .. })
        ));
    }

    #[test]
    fn resolve_assets_parses_and_uppercases() {
        let config =
            FileConfigAdapter::from_string("[universe]\nassets = aapl, msft\n").unwrap();
        assert_eq!(resolve_assets(&config).unwrap(), vec!["AAPL", "MSFT"]);
    }

    #[test]
    fn resolve_assets_rejects_duplicates() {
        let config =
            FileConfigAdapter::from_string("[universe]\nassets = AAPL,AAPL\n").unwrap();
        assert!(matches!(
            resolve_assets(&config),
            Err(DecitraderError::ConfigInvalid { .. })
        ));
    }

    #[test]
    fn resolve_data_path_missing() {
        let config = FileConfigAdapter::from_string("[rebalance]\n").unwrap();
        assert!(matches!(
            resolve_data_path(&config),
            Err(DecitraderError::ConfigMissing { .. })
        ));
    }

    #[test]
    fn resolve_data_path_present() {
        let config = FileConfigAdapter::from_string("[data]\npath = /srv/bars\n").unwrap();
        assert_eq!(resolve_data_path(&config).unwrap(), PathBuf::from("/srv/bars"));
    }
}

/// Write a stepped-price CSV for one asset into `dir`.
fn write_asset_csv(dir: &std::path::Path, asset_id: &str, base: f64, lift: f64) {
    let mut content = String::from("date,close,volume\n");
    let start = date(2024, 1, 1);
    for i in 0..50u64 {
        let day = start.checked_add_days(Days::new(i)).unwrap();
        let close = if i < 40 { base } else { base * (1.0 + lift) };
        let volume = 1_000_000 + i as i64 * 10_000;
        writeln!(content, "{},{},{}", day, close, volume).unwrap();
    }
    fs::write(dir.join(format!("{}.csv", asset_id)), content).unwrap();
}

mod end_to_end {
    use super::*;

    #[test]
    fn rebalance_from_csv_files() {
        let dir = tempfile::TempDir::new().unwrap();
        let mut sectors = String::from("asset_id,sector\n");
        for i in 0..10 {
            let asset_id = format!("T{:02}", i);
            write_asset_csv(dir.path(), &asset_id, 100.0, (i as f64 - 5.0) * 0.01);
            writeln!(sectors, "{},Technology", asset_id).unwrap();
        }
        fs::write(dir.path().join(SECTORS_FILE), sectors).unwrap();

        let positions_path = dir.path().join("positions.csv");
        fs::write(&positions_path, "asset_id,weight\nT05,0.5\n").unwrap();

        let market = CsvMarketData::new(dir.path().to_path_buf());
        let validation = validate_universe(&market, asset_ids(10), as_of_day()).unwrap();
        assert_eq!(validation.universe.count(), 10);
        assert!(validation.skipped.is_empty());

        let mut execution = PaperExecution::from_csv_file(&positions_path).unwrap();
        let report =
            run_trading_day(&market, &mut execution, &validation.universe, as_of_day()).unwrap();

        assert!(report.bets.shorts.contains("T00"));
        assert!(report.bets.longs.contains("T09"));
        assert_eq!(report.weights["T05"], 0.0);

        let gross: f64 = report
            .weights
            .values()
            .filter(|w| **w != 0.0)
            .map(|w| w.abs())
            .sum();
        assert!((gross - 1.0).abs() < 1e-9);

        let held = execution.held_positions().unwrap();
        assert_eq!(held.len(), 2);
        assert!(!held.contains_key("T05"));
    }

    #[test]
    fn missing_asset_file_is_skipped_by_validation() {
        let dir = tempfile::TempDir::new().unwrap();
        let mut sectors = String::from("asset_id,sector\n");
        for i in 0..10 {
            let asset_id = format!("T{:02}", i);
            write_asset_csv(dir.path(), &asset_id, 100.0, (i as f64 - 5.0) * 0.01);
            writeln!(sectors, "{},Technology", asset_id).unwrap();
        }
        fs::write(dir.path().join(SECTORS_FILE), sectors).unwrap();

        let market = CsvMarketData::new(dir.path().to_path_buf());
        let mut ids = asset_ids(10);
        ids.push("MISSING".to_string());

        let validation = validate_universe(&market, ids, as_of_day()).unwrap();
        assert_eq!(validation.universe.count(), 10);
        assert_eq!(validation.skipped.len(), 1);
        assert_eq!(validation.skipped[0].asset_id, "MISSING");
    }
}
