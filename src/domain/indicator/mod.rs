//! Rolling indicator columns derived from a daily series.
//!
//! `IndicatorTable` joins every derived column 1:1 with the series by
//! index: lag-1 simple moving averages over 20/50/120/200 prior closes,
//! the 365-bar rolling volume average, and the running all-time-high of
//! closes. Computed once in a single forward pass, read-only after.

pub mod all_time_high;
pub mod rolling_volume;
pub mod sma;

use crate::domain::series::Series;

#[derive(Debug, Clone, PartialEq)]
pub struct IndicatorTable {
    pub ma_20: Vec<Option<f64>>,
    pub ma_50: Vec<Option<f64>>,
    pub ma_120: Vec<Option<f64>>,
    pub ma_200: Vec<Option<f64>>,
    pub volume_avg_365: Vec<f64>,
    pub all_time_high: Vec<f64>,
}

impl IndicatorTable {
    /// Pure and deterministic: recomputing from the same series yields
    /// bit-identical columns.
    pub fn compute(series: &Series) -> Self {
        let closes = series.closes();
        let volumes = series.volumes();

        Self {
            ma_20: sma::lagged_sma(&closes, 20),
            ma_50: sma::lagged_sma(&closes, 50),
            ma_120: sma::lagged_sma(&closes, 120),
            ma_200: sma::lagged_sma(&closes, 200),
            volume_avg_365: rolling_volume::rolling_volume_avg(&volumes),
            all_time_high: all_time_high::all_time_high(&closes),
        }
    }

    pub fn len(&self) -> usize {
        self.all_time_high.len()
    }

    pub fn is_empty(&self) -> bool {
        self.all_time_high.is_empty()
    }

    /// Strict bullish alignment MA_20 > MA_50 > MA_120 > MA_200 at `idx`.
    /// False when any of the four is still undefined.
    pub fn sequential_alignment(&self, idx: usize) -> bool {
        match (
            self.ma_20[idx],
            self.ma_50[idx],
            self.ma_120[idx],
            self.ma_200[idx],
        ) {
            (Some(ma_20), Some(ma_50), Some(ma_120), Some(ma_200)) => {
                ma_20 > ma_50 && ma_50 > ma_120 && ma_120 > ma_200
            }
            _ => false,
        }
    }
}
