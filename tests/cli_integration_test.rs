//! CLI integration tests for config plumbing and the offline scan path.
//!
//! Tests cover:
//! - Scan parameter resolution from real INI files on disk
//! - Config error reporting (missing file, invalid values)
//! - End-to-end `scan --csv` through `cli::run`, checking the written report

mod common;

use common::*;
use sigscan::adapters::csv_adapter::CsvAdapter;
use sigscan::adapters::file_config_adapter::FileConfigAdapter;
use sigscan::cli::{self, Cli, Command};
use sigscan::domain::error::SigscanError;
use sigscan::domain::signal::ScanParams;
use std::io::Write;

fn write_temp_ini(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

mod config_loading {
    use super::*;

    #[test]
    fn scan_params_from_ini_file() {
        let file = write_temp_ini(
            "[scan]\nftd_gain_ratio = 1.03\ncorrection_ratio = 0.8\nvolume_spike_3x = 4.0\n",
        );
        let adapter = FileConfigAdapter::from_file(file.path()).unwrap();
        let params = cli::build_scan_params(&adapter).unwrap();

        assert!((params.ftd_gain_ratio - 1.03).abs() < f64::EPSILON);
        assert!((params.correction_ratio - 0.8).abs() < f64::EPSILON);
        assert!((params.volume_spike_2x - 2.0).abs() < f64::EPSILON);
        assert!((params.volume_spike_3x - 4.0).abs() < f64::EPSILON);
    }

    #[test]
    fn empty_ini_keeps_defaults() {
        let file = write_temp_ini("");
        let adapter = FileConfigAdapter::from_file(file.path()).unwrap();
        let params = cli::build_scan_params(&adapter).unwrap();
        assert_eq!(params, ScanParams::default());
    }

    #[test]
    fn invalid_threshold_is_rejected() {
        let file = write_temp_ini("[scan]\nvolume_spike_2x = -1\n");
        let adapter = FileConfigAdapter::from_file(file.path()).unwrap();
        assert!(matches!(
            cli::build_scan_params(&adapter),
            Err(SigscanError::ConfigInvalid { .. })
        ));
    }

    #[test]
    fn missing_config_file_is_reported() {
        let path = std::path::PathBuf::from("/nonexistent/sigscan.ini");
        assert!(cli::load_config(&path).is_err());
    }
}

mod offline_scan {
    use super::*;

    #[test]
    fn scan_from_csv_writes_report() {
        let dir = tempfile::TempDir::new().unwrap();
        let csv_path = dir.path().join("KRW-BTC.csv");
        let report_path = dir.path().join("report.txt");
        CsvAdapter::write_file(&csv_path, &golden_cross_series()).unwrap();

        let _ = cli::run(Cli {
            command: Command::Scan {
                config: None,
                market: Some("KRW-BTC".into()),
                days: None,
                csv: Some(csv_path),
                output: Some(report_path.clone()),
            },
        });

        let report = std::fs::read_to_string(&report_path).unwrap();
        assert!(report.contains("KRW-BTC (600 bars)"));
        assert!(report.contains("== Golden_Cross_200 =="));
        // The engineered cross rises into every horizon.
        assert!(report.contains("1M: 100.00% (1/1)"));
    }

    #[test]
    fn scan_on_short_csv_reports_empty_conditions() {
        let dir = tempfile::TempDir::new().unwrap();
        let csv_path = dir.path().join("short.csv");
        let report_path = dir.path().join("report.txt");
        let bars: Vec<_> = (0..100).map(|i| doji(i, 100.0)).collect();
        CsvAdapter::write_file(&csv_path, &bars).unwrap();

        let _ = cli::run(Cli {
            command: Command::Scan {
                config: None,
                market: None,
                days: None,
                csv: Some(csv_path),
                output: Some(report_path.clone()),
            },
        });

        let report = std::fs::read_to_string(&report_path).unwrap();
        assert!(report.contains("(100 bars)"));
        assert!(report.contains("matches   none"));
        assert!(report.contains("1M: 0.00% (0/0)"));
    }

    #[test]
    fn fetch_then_info_round_trip() {
        let dir = tempfile::TempDir::new().unwrap();
        let csv_path = dir.path().join("stored.csv");
        CsvAdapter::write_file(&csv_path, &golden_cross_series()).unwrap();

        // Info parses the stored file without error; its output goes to
        // stdout, so only the absence of a failure is observable here.
        let _ = cli::run(Cli {
            command: Command::Info {
                csv: csv_path.clone(),
            },
        });

        let reloaded = CsvAdapter::load_file(&csv_path).unwrap();
        assert_eq!(reloaded.len(), 600);
        assert_eq!(reloaded, golden_cross_series());
    }

    #[test]
    fn compare_handles_two_series() {
        let dir = tempfile::TempDir::new().unwrap();
        let primary = dir.path().join("primary.csv");
        let reference = dir.path().join("reference.csv");
        CsvAdapter::write_file(&primary, &golden_cross_series()).unwrap();
        let flat: Vec<_> = (0..100).map(|i| doji(i, 100.0)).collect();
        CsvAdapter::write_file(&reference, &flat).unwrap();

        let _ = cli::run(Cli {
            command: Command::Compare {
                csv: primary,
                reference,
            },
        });
    }
}
