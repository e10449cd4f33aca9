#![allow(dead_code)]

use chrono::NaiveDate;
use sigscan::domain::bar::DailyBar;
use sigscan::domain::error::SigscanError;
use sigscan::domain::series::Series;
use sigscan::ports::data_port::DataPort;
use std::collections::HashMap;

pub struct MockDataPort {
    pub data: HashMap<String, Vec<DailyBar>>,
    pub errors: HashMap<String, String>,
}

impl MockDataPort {
    pub fn new() -> Self {
        Self {
            data: HashMap::new(),
            errors: HashMap::new(),
        }
    }

    pub fn with_bars(mut self, market: &str, bars: Vec<DailyBar>) -> Self {
        self.data.insert(market.to_string(), bars);
        self
    }

    pub fn with_error(mut self, market: &str, reason: &str) -> Self {
        self.errors.insert(market.to_string(), reason.to_string());
        self
    }
}

impl DataPort for MockDataPort {
    fn fetch_daily(&self, market: &str, days: usize) -> Result<Vec<DailyBar>, SigscanError> {
        if let Some(reason) = self.errors.get(market) {
            return Err(SigscanError::DataFetch {
                reason: reason.clone(),
            });
        }
        let mut bars = self.data.get(market).cloned().unwrap_or_default();
        if bars.len() > days {
            bars.drain(..bars.len() - days);
        }
        Ok(bars)
    }
}

pub fn start_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2020, 1, 1).unwrap()
}

pub fn bar_at(i: usize, open: f64, close: f64, low: f64, volume: f64) -> DailyBar {
    DailyBar {
        date: start_date() + chrono::Duration::days(i as i64),
        open,
        close,
        low,
        volume,
    }
}

/// Bar with open == close == low (no intraday movement).
pub fn doji(i: usize, close: f64) -> DailyBar {
    bar_at(i, close, close, close, 1000.0)
}

pub fn series_from_closes(closes: &[f64]) -> Series {
    let bars = closes
        .iter()
        .enumerate()
        .map(|(i, &close)| doji(i, close))
        .collect();
    Series::new(bars).unwrap()
}

/// Deterministic wobbly closes for property-style checks.
pub fn wobbly_closes(n: usize) -> Vec<f64> {
    (0..n)
        .map(|i| 1000.0 + ((i * 37) % 113) as f64 - ((i * 17) % 59) as f64)
        .collect()
}

/// 600 bars engineered so the only golden cross through the 200-day
/// average happens at index 250: a slow decline keeps the close under
/// the average, bar 250 opens below it and closes far above, and the
/// rise afterwards keeps the average below every later bar's body.
pub fn golden_cross_series() -> Vec<DailyBar> {
    let mut bars: Vec<DailyBar> = Vec::with_capacity(600);

    for i in 0..250 {
        let close = 100.0 - 0.1 * i as f64;
        let open = if i == 0 { 100.0 } else { 100.0 - 0.1 * (i - 1) as f64 };
        bars.push(bar_at(i, open, close, close - 1.0, 100.0));
    }

    // The crossing bar: the 200-day average sits near 85 here.
    bars.push(bar_at(250, 80.0, 120.0, 79.0, 100.0));

    for i in 251..600 {
        let close = 120.0 + 0.01 * (i - 250) as f64;
        let open = 120.0 + 0.01 * (i - 251) as f64;
        bars.push(bar_at(i, open, close, open - 1.0, 100.0));
    }

    bars
}
