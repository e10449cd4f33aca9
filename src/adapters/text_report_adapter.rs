//! Plain-text report adapter implementing ReportPort.
//!
//! One block per condition: the canonical name, the per-horizon win-rate
//! line, and the match dates.

use crate::domain::report::{ConditionSummary, ScanReport};
use crate::ports::report_port::ReportPort;
use std::fmt::Write;

pub struct TextReportAdapter;

/// 30-bar multiples read as months; anything else stays in bars.
fn horizon_label(horizon: usize) -> String {
    if horizon > 0 && horizon % 30 == 0 {
        format!("{}M", horizon / 30)
    } else {
        format!("{}d", horizon)
    }
}

fn render_condition(out: &mut String, summary: &ConditionSummary) {
    let _ = writeln!(out, "== {} ==", summary.kind);

    let rates: Vec<String> = summary
        .win_rates
        .iter()
        .map(|r| {
            format!(
                "{}: {:.2}% ({}/{})",
                horizon_label(r.horizon),
                r.win_rate,
                r.wins,
                r.samples
            )
        })
        .collect();
    let _ = writeln!(out, "win rate  {}", rates.join(", "));

    if summary.match_dates.is_empty() {
        let _ = writeln!(out, "matches   none");
    } else {
        let dates: Vec<String> = summary
            .match_dates
            .iter()
            .map(|d| d.format("%Y-%m-%d").to_string())
            .collect();
        let _ = writeln!(
            out,
            "matches   {}: {}",
            summary.match_indices.len(),
            dates.join(", ")
        );
    }
}

impl ReportPort for TextReportAdapter {
    fn render(&self, report: &ScanReport) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "{} ({} bars)", report.market, report.bars);

        for summary in &report.conditions {
            let _ = writeln!(out);
            render_condition(&mut out, summary);
        }

        out
    }
}
