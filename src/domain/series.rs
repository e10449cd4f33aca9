//! Ordered, time-indexed store of daily bars.

use crate::domain::bar::DailyBar;
use crate::domain::error::SigscanError;
use chrono::NaiveDate;

/// Chronological sequence of daily bars, oldest first. Construction
/// rejects duplicate or out-of-order dates; bars are read-only after.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    bars: Vec<DailyBar>,
}

impl Series {
    pub fn new(bars: Vec<DailyBar>) -> Result<Self, SigscanError> {
        for pair in bars.windows(2) {
            if pair[1].date <= pair[0].date {
                return Err(SigscanError::UnorderedSeries {
                    prev: pair[0].date,
                    next: pair[1].date,
                });
            }
        }
        Ok(Self { bars })
    }

    pub fn bars(&self) -> &[DailyBar] {
        &self.bars
    }

    pub fn len(&self) -> usize {
        self.bars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    /// First and last bar dates, or None for an empty series.
    pub fn date_range(&self) -> Option<(NaiveDate, NaiveDate)> {
        match (self.bars.first(), self.bars.last()) {
            (Some(first), Some(last)) => Some((first.date, last.date)),
            _ => None,
        }
    }

    pub fn closes(&self) -> Vec<f64> {
        self.bars.iter().map(|b| b.close).collect()
    }

    pub fn volumes(&self) -> Vec<f64> {
        self.bars.iter().map(|b| b.volume).collect()
    }
}
