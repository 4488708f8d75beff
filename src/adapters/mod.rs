pub mod csv_market_data;
pub mod file_config_adapter;
pub mod paper_execution;
