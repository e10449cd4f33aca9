//! Forward-return evaluation and win rates.

use crate::domain::series::Series;

/// Evaluation horizons in bars: roughly 1, 3 and 6 months of daily candles.
pub const DEFAULT_HORIZONS: [usize; 3] = [30, 90, 180];

/// Percentage forward returns per horizon, aligned with the match-index
/// list they were computed from. `None` where the horizon bar lies past
/// the series end.
#[derive(Debug, Clone, PartialEq)]
pub struct ReturnTable {
    horizons: Vec<usize>,
    samples: Vec<Vec<Option<f64>>>,
}

/// Win statistics for one horizon.
#[derive(Debug, Clone, PartialEq)]
pub struct HorizonWinRate {
    pub horizon: usize,
    /// Percentage of defined samples with strictly positive return,
    /// in [0, 100]. 0 when no sample is defined.
    pub win_rate: f64,
    pub wins: usize,
    pub samples: usize,
}

impl ReturnTable {
    pub fn horizons(&self) -> &[usize] {
        &self.horizons
    }

    /// Samples for one horizon, aligned with the source indices.
    pub fn samples(&self, horizon: usize) -> &[Option<f64>] {
        self.horizons
            .iter()
            .position(|&h| h == horizon)
            .map(|pos| self.samples[pos].as_slice())
            .unwrap_or_default()
    }

    pub fn win_rates(&self) -> Vec<HorizonWinRate> {
        self.horizons
            .iter()
            .zip(&self.samples)
            .map(|(&horizon, samples)| {
                let defined: Vec<f64> = samples.iter().flatten().copied().collect();
                let wins = defined.iter().filter(|&&r| r > 0.0).count();
                let win_rate = if defined.is_empty() {
                    0.0
                } else {
                    wins as f64 / defined.len() as f64 * 100.0
                };
                HorizonWinRate {
                    horizon,
                    win_rate,
                    wins,
                    samples: defined.len(),
                }
            })
            .collect()
    }
}

/// Percentage change from each index's close to the close `horizon` bars
/// later, per horizon.
pub fn compute_returns(series: &Series, indices: &[usize], horizons: &[usize]) -> ReturnTable {
    let bars = series.bars();
    let samples = horizons
        .iter()
        .map(|&horizon| {
            indices
                .iter()
                .map(|&idx| {
                    let future = idx + horizon;
                    if future < bars.len() {
                        let start = bars[idx].close;
                        Some((bars[future].close - start) / start * 100.0)
                    } else {
                        None
                    }
                })
                .collect()
        })
        .collect();

    ReturnTable {
        horizons: horizons.to_vec(),
        samples,
    }
}
