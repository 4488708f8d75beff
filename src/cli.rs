//! CLI definition and dispatch.

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

use crate::adapters::csv_market_data::CsvMarketData;
use crate::adapters::file_config_adapter::FileConfigAdapter;
use crate::adapters::paper_execution::PaperExecution;
use crate::domain::error::DecitraderError;
use crate::domain::rebalance::{run_trading_day, DayReport};
use crate::domain::universe::{parse_assets, validate_universe};
use crate::ports::config_port::ConfigPort;
use crate::ports::market_data_port::MarketDataPort;

#[derive(Parser, Debug)]
#[command(name = "decitrader", about = "Daily cross-sectional momentum rebalancer")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run one trading day's rebalance
    Rebalance {
        #[arg(short, long)]
        config: PathBuf,
        /// Trading day override (YYYY-MM-DD); defaults to [rebalance] as_of
        #[arg(long)]
        as_of: Option<String>,
        #[arg(long)]
        dry_run: bool,
    },
    /// List assets available in the data directory
    ListAssets {
        #[arg(short, long)]
        config: PathBuf,
    },
    /// Show data range for configured asset(s)
    Info {
        #[arg(short, long)]
        config: PathBuf,
        #[arg(long)]
        asset: Option<String>,
    },
}

pub fn run(cli: Cli) -> ExitCode {
    match cli.command {
        Command::Rebalance {
            config,
            as_of,
            dry_run,
        } => run_rebalance(&config, as_of.as_deref(), dry_run),
        Command::ListAssets { config } => run_list_assets(&config),
        Command::Info { config, asset } => run_info(&config, asset.as_deref()),
    }
}

pub fn load_config(path: &PathBuf) -> Result<FileConfigAdapter, ExitCode> {
    FileConfigAdapter::from_file(path).map_err(|e| {
        let err = DecitraderError::ConfigParse {
            file: path.display().to_string(),
            reason: e.to_string(),
        };
        eprintln!("error: {err}");
        ExitCode::from(&err)
    })
}

pub fn resolve_as_of(
    override_str: Option<&str>,
    config: &dyn ConfigPort,
) -> Result<NaiveDate, DecitraderError> {
    let date_str = match override_str {
        Some(s) => s.to_string(),
        None => config.get_string("rebalance", "as_of").ok_or_else(|| {
            DecitraderError::ConfigMissing {
                section: "rebalance".into(),
                key: "as_of".into(),
            }
        })?,
    };

    NaiveDate::parse_from_str(&date_str, "%Y-%m-%d").map_err(|_| DecitraderError::ConfigInvalid {
        section: "rebalance".into(),
        key: "as_of".into(),
        reason: "invalid date format (expected YYYY-MM-DD)".into(),
    })
}

pub fn resolve_assets(config: &dyn ConfigPort) -> Result<Vec<String>, DecitraderError> {
    let assets_str =
        config
            .get_string("universe", "assets")
            .ok_or_else(|| DecitraderError::ConfigMissing {
                section: "universe".into(),
                key: "assets".into(),
            })?;

    parse_assets(&assets_str).map_err(|e| DecitraderError::ConfigInvalid {
        section: "universe".into(),
        key: "assets".into(),
        reason: e.to_string(),
    })
}

pub fn resolve_data_path(config: &dyn ConfigPort) -> Result<PathBuf, DecitraderError> {
    config
        .get_string("data", "path")
        .map(PathBuf::from)
        .ok_or_else(|| DecitraderError::ConfigMissing {
            section: "data".into(),
            key: "path".into(),
        })
}

fn run_rebalance(config_path: &PathBuf, as_of_override: Option<&str>, dry_run: bool) -> ExitCode {
    eprintln!("Loading config from {}", config_path.display());
    let config = match load_config(config_path) {
        Ok(c) => c,
        Err(code) => return code,
    };

    let as_of = match resolve_as_of(as_of_override, &config) {
        Ok(d) => d,
        Err(e) => {
            eprintln!("error: {e}");
            return (&e).into();
        }
    };
    let asset_ids = match resolve_assets(&config) {
        Ok(a) => a,
        Err(e) => {
            eprintln!("error: {e}");
            return (&e).into();
        }
    };
    let data_path = match resolve_data_path(&config) {
        Ok(p) => p,
        Err(e) => {
            eprintln!("error: {e}");
            return (&e).into();
        }
    };

    if dry_run {
        eprintln!("Config validated successfully");
        eprintln!("  as_of:  {}", as_of);
        eprintln!("  assets: {}", asset_ids.join(", "));
        eprintln!("  data:   {}", data_path.display());
        return ExitCode::SUCCESS;
    }

    let market_data = CsvMarketData::new(data_path);

    eprintln!("Validating {} assets as of {}...", asset_ids.len(), as_of);
    let validation = match validate_universe(&market_data, asset_ids, as_of) {
        Ok(v) => v,
        Err(e) => {
            let err = DecitraderError::from(e);
            eprintln!("error: {err}");
            return (&err).into();
        }
    };
    if !validation.skipped.is_empty() {
        eprintln!(
            "Proceeding with {} of {} assets",
            validation.universe.count(),
            validation.universe.count() + validation.skipped.len()
        );
    }

    let mut execution = match config.get_string("positions", "file") {
        Some(file) => match PaperExecution::from_csv_file(&file) {
            Ok(exec) => exec,
            Err(e) => {
                eprintln!("error: {e}");
                return (&e).into();
            }
        },
        None => PaperExecution::new(),
    };
    eprintln!("Held positions: {}", execution.held_count());

    let report = match run_trading_day(&market_data, &mut execution, &validation.universe, as_of) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("error: {e}");
            return (&e).into();
        }
    };

    print_report(&report);
    ExitCode::SUCCESS
}

fn fmt_opt(value: Option<f64>, precision: usize) -> String {
    match value {
        Some(v) => format!("{:.*}", precision, v),
        None => "-".to_string(),
    }
}

pub fn print_report(report: &DayReport) {
    println!("# signals {}", report.as_of);
    println!(
        "{:<8} {:>10} {:>10} {:>10} {:>10} {:>14} {:>14} {:>10} {:>6} {:>6}",
        "asset", "close", "sma10", "sma20", "sma50", "dv5", "dv20", "score", "decile", "screen"
    );
    for snap in &report.signals.snapshots {
        println!(
            "{:<8} {:>10} {:>10} {:>10} {:>10} {:>14} {:>14} {:>10} {:>6} {:>6}",
            snap.asset_id,
            fmt_opt(snap.close_price, 2),
            fmt_opt(snap.sma_10, 2),
            fmt_opt(snap.sma_20, 2),
            fmt_opt(snap.sma_50, 2),
            fmt_opt(snap.dollar_volume_5, 0),
            fmt_opt(snap.dollar_volume_20, 0),
            fmt_opt(snap.momentum_score, 5),
            snap.decile.map(|d| d.to_string()).unwrap_or_else(|| "-".into()),
            if snap.passes_screen { "yes" } else { "no" },
        );
    }

    println!("\n# target weights");
    if report.weights.is_empty() {
        println!("(none)");
    } else {
        for (asset_id, weight) in &report.weights {
            println!("{:<8} {:>10.5}", asset_id, weight);
        }
    }

    eprintln!(
        "\n{} longs, {} shorts, {} orders submitted",
        report.bets.longs.len(),
        report.bets.shorts.len(),
        report.weights.len()
    );
}

fn run_list_assets(config_path: &PathBuf) -> ExitCode {
    let config = match load_config(config_path) {
        Ok(c) => c,
        Err(code) => return code,
    };
    let data_path = match resolve_data_path(&config) {
        Ok(p) => p,
        Err(e) => {
            eprintln!("error: {e}");
            return (&e).into();
        }
    };

    let market_data = CsvMarketData::new(data_path);
    match market_data.list_assets() {
        Ok(assets) => {
            for asset_id in &assets {
                println!("{}", asset_id);
            }
            eprintln!("{} assets found", assets.len());
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e}");
            (&e).into()
        }
    }
}

fn run_info(config_path: &PathBuf, asset_override: Option<&str>) -> ExitCode {
    let config = match load_config(config_path) {
        Ok(c) => c,
        Err(code) => return code,
    };
    let data_path = match resolve_data_path(&config) {
        Ok(p) => p,
        Err(e) => {
            eprintln!("error: {e}");
            return (&e).into();
        }
    };

    let asset_ids = match asset_override {
        Some(a) => vec![a.to_uppercase()],
        None => match resolve_assets(&config) {
            Ok(a) => a,
            Err(e) => {
                eprintln!("error: {e}");
                return (&e).into();
            }
        },
    };

    let market_data = CsvMarketData::new(data_path);
    for asset_id in &asset_ids {
        match market_data.data_range(asset_id) {
            Ok(Some((first, last, count))) => {
                println!("{}: {} sessions, {} to {}", asset_id, count, first, last);
            }
            Ok(None) => {
                eprintln!("{}: no data found", asset_id);
            }
            Err(e) => {
                eprintln!("error querying {}: {}", asset_id, e);
            }
        }
    }
    ExitCode::SUCCESS
}
