//! Rolling 365-bar volume average.
//!
//! Two-regime streaming accumulator carrying one running value. Below
//! 365 bars the column is the cumulative average of everything seen so
//! far (current bar included); from bar 365 on it switches to the
//! sliding-window recurrence avg[i] = avg[i-1] + (v[i] - v[i-365]) / 365.
//! The incremental form is part of the contract; the column is never
//! recomputed by rescanning history.

pub const VOLUME_WINDOW: usize = 365;

pub fn rolling_volume_avg(volumes: &[f64]) -> Vec<f64> {
    let mut out = Vec::with_capacity(volumes.len());
    let mut avg = 0.0_f64;

    for (i, &volume) in volumes.iter().enumerate() {
        if i == 0 {
            avg = volume;
        } else if i < VOLUME_WINDOW {
            avg = (avg * i as f64 + volume) / (i + 1) as f64;
        } else {
            avg += (volume - volumes[i - VOLUME_WINDOW]) / VOLUME_WINDOW as f64;
        }
        out.push(avg);
    }

    out
}
