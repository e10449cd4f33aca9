//! Scan report assembly.
//!
//! The core hands the reporting collaborator one value: per condition,
//! the ordered match indices and dates plus the per-horizon return
//! samples and win rates. Formatting is entirely the adapter's job.

use crate::domain::returns::{self, HorizonWinRate, ReturnTable};
use crate::domain::series::Series;
use crate::domain::signal::{ScanResult, SignalKind};
use chrono::NaiveDate;

#[derive(Debug, Clone)]
pub struct ConditionSummary {
    pub kind: SignalKind,
    pub match_indices: Vec<usize>,
    pub match_dates: Vec<NaiveDate>,
    pub returns: ReturnTable,
    pub win_rates: Vec<HorizonWinRate>,
}

#[derive(Debug, Clone)]
pub struct ScanReport {
    pub market: String,
    pub bars: usize,
    pub conditions: Vec<ConditionSummary>,
}

impl ScanReport {
    pub fn build(
        market: &str,
        series: &Series,
        result: &ScanResult,
        horizons: &[usize],
    ) -> Self {
        let bars = series.bars();
        let conditions = SignalKind::ALL
            .iter()
            .map(|&kind| {
                let match_indices = result.matches(kind).to_vec();
                let match_dates = match_indices.iter().map(|&idx| bars[idx].date).collect();
                let returns = returns::compute_returns(series, &match_indices, horizons);
                let win_rates = returns.win_rates();
                ConditionSummary {
                    kind,
                    match_indices,
                    match_dates,
                    returns,
                    win_rates,
                }
            })
            .collect();

        Self {
            market: market.to_string(),
            bars: series.len(),
            conditions,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::bar::DailyBar;
    use crate::domain::signal::ScanResult;

    fn flat_series(n: usize) -> Series {
        let start = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap();
        let bars = (0..n)
            .map(|i| DailyBar {
                date: start + chrono::Duration::days(i as i64),
                open: 100.0,
                close: 100.0,
                low: 100.0,
                volume: 1000.0,
            })
            .collect();
        Series::new(bars).unwrap()
    }

    #[test]
    fn report_covers_every_condition_in_order() {
        let series = flat_series(400);
        let report = ScanReport::build("KRW-BTC", &series, &ScanResult::new(), &[30]);

        assert_eq!(report.market, "KRW-BTC");
        assert_eq!(report.bars, 400);
        assert_eq!(report.conditions.len(), 8);
        for (summary, kind) in report.conditions.iter().zip(SignalKind::ALL) {
            assert_eq!(summary.kind, kind);
            assert!(summary.match_indices.is_empty());
            assert_eq!(summary.win_rates.len(), 1);
        }
    }

    #[test]
    fn match_dates_align_with_indices() {
        let series = flat_series(400);
        let mut result = ScanResult::new();
        result.record(SignalKind::HighVolume3x, 210);
        result.record(SignalKind::HighVolume3x, 215);

        let report = ScanReport::build("KRW-BTC", &series, &result, &[30]);
        let summary = report
            .conditions
            .iter()
            .find(|c| c.kind == SignalKind::HighVolume3x)
            .unwrap();

        assert_eq!(summary.match_indices, vec![210, 215]);
        assert_eq!(
            summary.match_dates,
            vec![
                NaiveDate::from_ymd_opt(2020, 1, 1).unwrap() + chrono::Duration::days(210),
                NaiveDate::from_ymd_opt(2020, 1, 1).unwrap() + chrono::Duration::days(215),
            ]
        );
    }
}
