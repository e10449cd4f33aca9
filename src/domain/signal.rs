//! Signal condition identities, scan parameters, and scan results.

use std::collections::HashMap;
use std::fmt;

/// The eight scanned conditions. Non-exclusive: one index may match
/// several.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SignalKind {
    GoldenCross200,
    FtdAbove200,
    HighVolume2xAbove200,
    Ma120TouchAbove200,
    HighVolume3x,
    SequentialFtdAbove200,
    SequentialHighVolume2xAbove200,
    SequentialMa120TouchAbove200,
}

impl SignalKind {
    /// Canonical scan and report order.
    pub const ALL: [SignalKind; 8] = [
        SignalKind::GoldenCross200,
        SignalKind::FtdAbove200,
        SignalKind::HighVolume2xAbove200,
        SignalKind::Ma120TouchAbove200,
        SignalKind::HighVolume3x,
        SignalKind::SequentialFtdAbove200,
        SignalKind::SequentialHighVolume2xAbove200,
        SignalKind::SequentialMa120TouchAbove200,
    ];
}

impl fmt::Display for SignalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SignalKind::GoldenCross200 => "Golden_Cross_200",
            SignalKind::FtdAbove200 => "FTD_Above_200",
            SignalKind::HighVolume2xAbove200 => "High_Volume_2x_above_200",
            SignalKind::Ma120TouchAbove200 => "MA_120_Touch_above_200",
            SignalKind::HighVolume3x => "High_Volume_3x",
            SignalKind::SequentialFtdAbove200 => "Sequential_FTD_above_200",
            SignalKind::SequentialHighVolume2xAbove200 => {
                "Sequential_High_Volume_2x_above_200"
            }
            SignalKind::SequentialMa120TouchAbove200 => {
                "Sequential_MA_120_Touch_above_200"
            }
        };
        write!(f, "{}", name)
    }
}

/// Tunable scan thresholds. Defaults reproduce the historical study
/// values; override them from the `[scan]` config section rather than
/// editing code.
#[derive(Debug, Clone, PartialEq)]
pub struct ScanParams {
    /// Minimum close/open ratio of a follow-through-day signal bar.
    pub ftd_gain_ratio: f64,
    /// A close below this fraction of the all-time-high counts as a
    /// correction.
    pub correction_ratio: f64,
    /// Volume multiple over the 365-bar average for the 2x spike checks.
    pub volume_spike_2x: f64,
    /// Volume multiple over the 365-bar average for the 3x spike check.
    pub volume_spike_3x: f64,
}

impl Default for ScanParams {
    fn default() -> Self {
        Self {
            ftd_gain_ratio: 1.0572,
            correction_ratio: 0.7,
            volume_spike_2x: 2.0,
            volume_spike_3x: 3.0,
        }
    }
}

/// Match indices per condition, ascending, no duplicates per condition.
#[derive(Debug, Clone)]
pub struct ScanResult {
    matches: HashMap<SignalKind, Vec<usize>>,
}

impl ScanResult {
    pub fn new() -> Self {
        let mut matches = HashMap::new();
        for kind in SignalKind::ALL {
            matches.insert(kind, Vec::new());
        }
        Self { matches }
    }

    pub(crate) fn record(&mut self, kind: SignalKind, index: usize) {
        self.matches.entry(kind).or_default().push(index);
    }

    pub fn matches(&self, kind: SignalKind) -> &[usize] {
        self.matches
            .get(&kind)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn total_matches(&self) -> usize {
        self.matches.values().map(Vec::len).sum()
    }
}

impl Default for ScanResult {
    fn default() -> Self {
        Self::new()
    }
}
