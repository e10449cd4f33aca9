//! Daily-return volatility statistics.
//!
//! Computed independently per series; the primary and a reference
//! benchmark are compared side by side, never joined.

use crate::domain::series::Series;

#[derive(Debug, Clone, PartialEq)]
pub struct VolatilityStats {
    /// Mean daily close-to-close return, in percent.
    pub mean_daily_return: f64,
    /// Population standard deviation of daily returns, in percent.
    pub daily_volatility: f64,
    pub bars: usize,
}

impl VolatilityStats {
    pub fn compute(series: &Series) -> Self {
        let bars = series.bars();
        if bars.len() < 2 {
            return Self {
                mean_daily_return: 0.0,
                daily_volatility: 0.0,
                bars: bars.len(),
            };
        }

        let returns: Vec<f64> = bars
            .windows(2)
            .map(|pair| (pair[1].close - pair[0].close) / pair[0].close * 100.0)
            .collect();

        let n = returns.len() as f64;
        let mean = returns.iter().sum::<f64>() / n;
        let variance = returns.iter().map(|r| (r - mean).powi(2)).sum::<f64>() / n;

        Self {
            mean_daily_return: mean,
            daily_volatility: variance.sqrt(),
            bars: bars.len(),
        }
    }
}
