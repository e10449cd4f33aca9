//! Signal scanner.
//!
//! Walks the indicator-joined series over indices 200 to n-181 inclusive
//! and evaluates the eight conditions at each index. The lower bound
//! reserves warm-up for the longest moving average; the upper bound
//! reserves lookahead room for the follow-through windows and the
//! 180-bar return horizon. A series too short for that margin scans
//! nothing; that is a silent skip, not an error.

use crate::domain::bar::DailyBar;
use crate::domain::indicator::IndicatorTable;
use crate::domain::series::Series;
use crate::domain::signal::{ScanParams, ScanResult, SignalKind};

/// Indicator warm-up reserved before the first scanned index.
pub const WARMUP_BARS: usize = 200;
/// Lookahead room reserved after the last scanned index.
pub const LOOKAHEAD_BARS: usize = 180;

/// Bars after the signal day that must hold its low (offsets 1..=3).
const HOLD_WINDOW: usize = 3;
/// Confirmation window offsets, inclusive.
const CONFIRM_FROM: usize = 4;
const CONFIRM_TO: usize = 7;

pub fn scan(series: &Series, indicators: &IndicatorTable, params: &ScanParams) -> ScanResult {
    let bars = series.bars();
    let mut result = ScanResult::new();

    for i in WARMUP_BARS..bars.len().saturating_sub(LOOKAHEAD_BARS) {
        let bar = &bars[i];
        let volume_avg = indicators.volume_avg_365[i];
        let ath = indicators.all_time_high[i];
        let aligned = indicators.sequential_alignment(i);

        // 1. Golden cross: yesterday closed below its 200-day average and
        // today's body straddles the current one.
        if let (Some(ma_200), Some(prev_ma_200)) =
            (indicators.ma_200[i], indicators.ma_200[i - 1])
        {
            if bars[i - 1].close < prev_ma_200 && bar.body_contains(ma_200) {
                result.record(SignalKind::GoldenCross200, i);
            }
        }

        // 2. Follow-through day above the 200-day average.
        if let Some(ma_200) = indicators.ma_200[i] {
            if bar.close > ma_200
                && ftd_signal_day(bar, ath, params)
                && follow_through_confirmed(bars, i, params)
            {
                result.record(SignalKind::FtdAbove200, i);
            }
        }

        // 3. Volume spike at 2x with the 200-day trend filter.
        if let Some(ma_200) = indicators.ma_200[i] {
            if bar.close > ma_200 && bar.volume > volume_avg * params.volume_spike_2x {
                result.record(SignalKind::HighVolume2xAbove200, i);
            }
        }

        // 4. 120-day average inside today's body, above the 200-day average.
        if let (Some(ma_120), Some(ma_200)) = (indicators.ma_120[i], indicators.ma_200[i]) {
            if bar.close > ma_200 && bar.body_contains(ma_120) {
                result.record(SignalKind::Ma120TouchAbove200, i);
            }
        }

        // 5. Volume spike at 3x, no trend filter.
        if bar.volume > volume_avg * params.volume_spike_3x {
            result.record(SignalKind::HighVolume3x, i);
        }

        // 6-8. Sequential variants: strict MA_20 > MA_50 > MA_120 > MA_200.
        if aligned {
            // Alignment implies all four averages are defined.
            if let Some(ma_200) = indicators.ma_200[i] {
                if bar.close > ma_200
                    && ftd_signal_day(bar, ath, params)
                    && follow_through_confirmed(bars, i, params)
                {
                    result.record(SignalKind::SequentialFtdAbove200, i);
                }
            }

            if bar.volume > volume_avg * params.volume_spike_2x {
                result.record(SignalKind::SequentialHighVolume2xAbove200, i);
            }

            if let Some(ma_120) = indicators.ma_120[i] {
                if bar.body_contains(ma_120) {
                    result.record(SignalKind::SequentialMa120TouchAbove200, i);
                }
            }
        }
    }

    result
}

/// Correction-plus-strong-up-day precondition shared by the FTD checks:
/// the close sits below `correction_ratio` of the all-time-high and gained
/// at least `ftd_gain_ratio` over the open.
fn ftd_signal_day(bar: &DailyBar, ath: f64, params: &ScanParams) -> bool {
    bar.close < ath * params.correction_ratio && bar.close >= bar.open * params.ftd_gain_ratio
}

/// Follow-through confirmation after a signal day at `i`.
///
/// Bars i+1..=i+3 must not undercut the signal day's low. The first bar k
/// in i+4..=i+7 closing at or above the signal day's open times
/// `ftd_gain_ratio`, holding the signal low, with volume strictly rising
/// on every bar from i+4 through k, confirms. The volume check always
/// starts at offset 4; for k = i+4 it is the single comparison against
/// bar i+3.
///
/// Caller guarantees i + 7 is in bounds.
fn follow_through_confirmed(bars: &[DailyBar], i: usize, params: &ScanParams) -> bool {
    let signal = &bars[i];

    for offset in 1..=HOLD_WINDOW {
        if bars[i + offset].low < signal.low {
            return false;
        }
    }

    let target = signal.open * params.ftd_gain_ratio;
    for k in CONFIRM_FROM..=CONFIRM_TO {
        let candidate = &bars[i + k];
        if candidate.close >= target && candidate.low >= signal.low {
            let volume_rising = (CONFIRM_FROM..=k)
                .all(|n| bars[i + n].volume > bars[i + n - 1].volume);
            if volume_rising {
                return true;
            }
        }
    }

    false
}
