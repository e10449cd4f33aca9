//! Daily candle bar representation.

use chrono::NaiveDate;

/// One trading day. Upbit day candles carry no usable high for this
/// analysis, so none is stored.
#[derive(Debug, Clone, PartialEq)]
pub struct DailyBar {
    pub date: NaiveDate,
    pub open: f64,
    pub close: f64,
    pub low: f64,
    pub volume: f64,
}

impl DailyBar {
    /// close / open (1.0 = flat day).
    pub fn gain_ratio(&self) -> f64 {
        self.close / self.open
    }

    /// Inclusive open/close body as (lower, upper).
    pub fn body(&self) -> (f64, f64) {
        if self.open <= self.close {
            (self.open, self.close)
        } else {
            (self.close, self.open)
        }
    }

    /// True when `level` lies within the open/close body, inclusive.
    pub fn body_contains(&self, level: f64) -> bool {
        let (lower, upper) = self.body();
        lower <= level && level <= upper
    }
}
