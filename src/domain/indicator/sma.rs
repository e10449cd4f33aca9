//! Lag-1 simple moving average.
//!
//! Index i averages the `window` values strictly before i; the current
//! value is never included. A signal read at today's open only uses data
//! known before today. O(n) running-sum sliding window. Warmup: the
//! first `window` indices are undefined.

pub fn lagged_sma(values: &[f64], window: usize) -> Vec<Option<f64>> {
    if window == 0 {
        return vec![None; values.len()];
    }

    let mut out = Vec::with_capacity(values.len());
    let mut window_sum = 0.0_f64;

    for (i, &value) in values.iter().enumerate() {
        // window_sum covers values[i-window .. i] once i >= window,
        // values[0 .. i] before that.
        if i >= window {
            out.push(Some(window_sum / window as f64));
        } else {
            out.push(None);
        }

        window_sum += value;
        if i + 1 > window {
            window_sum -= values[i - window];
        }
    }

    out
}
