pub mod market_data_port;
pub mod execution_port;
pub mod config_port;
