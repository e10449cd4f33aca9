//! Market data acquisition port trait.

use crate::domain::bar::DailyBar;
use crate::domain::error::SigscanError;

pub trait DataPort {
    /// Fetch up to `days` daily candles for `market`, oldest first.
    /// Returning fewer bars than requested is not an error; the source
    /// may simply not have that much history.
    fn fetch_daily(&self, market: &str, days: usize) -> Result<Vec<DailyBar>, SigscanError>;
}
