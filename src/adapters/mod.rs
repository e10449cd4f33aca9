//! Concrete adapter implementations for ports.

#[cfg(feature = "remote")]
pub mod upbit_adapter;
pub mod csv_adapter;
pub mod file_config_adapter;
pub mod text_report_adapter;
