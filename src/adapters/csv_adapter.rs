//! CSV candle store adapter.
//!
//! Stores one market per file as `date,open,close,low,volume`, oldest
//! first. Doubles as an offline `DataPort` over a directory of such
//! files.

use crate::domain::bar::DailyBar;
use crate::domain::error::SigscanError;
use crate::ports::data_port::DataPort;
use chrono::NaiveDate;
use std::fs;
use std::path::{Path, PathBuf};

pub struct CsvAdapter {
    base_path: PathBuf,
}

impl CsvAdapter {
    pub fn new(base_path: PathBuf) -> Self {
        Self { base_path }
    }

    fn candle_path(&self, market: &str) -> PathBuf {
        self.base_path.join(format!("{}.csv", market))
    }

    /// Load a candle series from one CSV file, sorted by date.
    pub fn load_file(path: &Path) -> Result<Vec<DailyBar>, SigscanError> {
        let file = path.display().to_string();
        let content = fs::read_to_string(path).map_err(|e| SigscanError::Csv {
            file: file.clone(),
            reason: format!("failed to read: {}", e),
        })?;

        let mut rdr = csv::Reader::from_reader(content.as_bytes());
        let mut bars = Vec::new();

        for result in rdr.records() {
            let record = result.map_err(|e| SigscanError::Csv {
                file: file.clone(),
                reason: format!("parse error: {}", e),
            })?;

            let field = |idx: usize, name: &str| {
                record.get(idx).ok_or_else(|| SigscanError::Csv {
                    file: file.clone(),
                    reason: format!("missing {} column", name),
                })
            };

            let date = NaiveDate::parse_from_str(field(0, "date")?, "%Y-%m-%d").map_err(
                |e| SigscanError::Csv {
                    file: file.clone(),
                    reason: format!("invalid date: {}", e),
                },
            )?;
            let open: f64 = field(1, "open")?.parse().map_err(|e| SigscanError::Csv {
                file: file.clone(),
                reason: format!("invalid open value: {}", e),
            })?;
            let close: f64 = field(2, "close")?.parse().map_err(|e| SigscanError::Csv {
                file: file.clone(),
                reason: format!("invalid close value: {}", e),
            })?;
            let low: f64 = field(3, "low")?.parse().map_err(|e| SigscanError::Csv {
                file: file.clone(),
                reason: format!("invalid low value: {}", e),
            })?;
            let volume: f64 = field(4, "volume")?.parse().map_err(|e| SigscanError::Csv {
                file: file.clone(),
                reason: format!("invalid volume value: {}", e),
            })?;

            bars.push(DailyBar {
                date,
                open,
                close,
                low,
                volume,
            });
        }

        bars.sort_by_key(|b| b.date);
        Ok(bars)
    }

    /// Write a candle series to one CSV file, oldest first.
    pub fn write_file(path: &Path, bars: &[DailyBar]) -> Result<(), SigscanError> {
        let file = path.display().to_string();
        let mut wtr = csv::Writer::from_path(path).map_err(|e| SigscanError::Csv {
            file: file.clone(),
            reason: format!("failed to create: {}", e),
        })?;

        wtr.write_record(["date", "open", "close", "low", "volume"])
            .map_err(|e| SigscanError::Csv {
                file: file.clone(),
                reason: format!("write error: {}", e),
            })?;

        for bar in bars {
            wtr.write_record([
                bar.date.format("%Y-%m-%d").to_string(),
                bar.open.to_string(),
                bar.close.to_string(),
                bar.low.to_string(),
                bar.volume.to_string(),
            ])
            .map_err(|e| SigscanError::Csv {
                file: file.clone(),
                reason: format!("write error: {}", e),
            })?;
        }

        wtr.flush().map_err(|e| SigscanError::Csv {
            file,
            reason: format!("flush error: {}", e),
        })?;
        Ok(())
    }
}

impl DataPort for CsvAdapter {
    fn fetch_daily(&self, market: &str, days: usize) -> Result<Vec<DailyBar>, SigscanError> {
        let mut bars = Self::load_file(&self.candle_path(market))?;
        if bars.len() > days {
            bars.drain(..bars.len() - days);
        }
        Ok(bars)
    }
}
