//! Running all-time-high of closes.

/// Running maximum inclusive of the current bar. Monotone non-decreasing,
/// defined for every index.
pub fn all_time_high(closes: &[f64]) -> Vec<f64> {
    let mut out = Vec::with_capacity(closes.len());
    let mut high = f64::NEG_INFINITY;

    for &close in closes {
        if close > high {
            high = close;
        }
        out.push(high);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tracks_running_maximum() {
        let out = all_time_high(&[100.0, 120.0, 90.0, 130.0, 110.0]);
        assert_eq!(out, vec![100.0, 120.0, 120.0, 130.0, 130.0]);
    }

    #[test]
    fn first_bar_is_its_own_high() {
        let out = all_time_high(&[42.0]);
        assert_eq!(out, vec![42.0]);
    }

    #[test]
    fn monotone_and_at_least_close() {
        let closes: Vec<f64> = (0..200).map(|i| ((i * 31) % 97) as f64 + 1.0).collect();
        let out = all_time_high(&closes);

        for i in 0..closes.len() {
            assert!(out[i] >= closes[i]);
            if i > 0 {
                assert!(out[i] >= out[i - 1]);
            }
        }
    }

    #[test]
    fn empty_input() {
        assert!(all_time_high(&[]).is_empty());
    }
}
