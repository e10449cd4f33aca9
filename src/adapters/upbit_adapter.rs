//! Upbit day-candle REST adapter (feature `remote`).
//!
//! Pages through the day-candle endpoint newest-first, at most 200
//! candles per request, passing the last candle's timestamp as the `to`
//! cursor for the next page and sleeping between requests to stay under
//! the exchange rate limit. Pages are reversed into chronological order
//! before conversion.

use crate::domain::bar::DailyBar;
use crate::domain::error::SigscanError;
use crate::ports::data_port::DataPort;
use chrono::NaiveDateTime;
use serde::Deserialize;
use std::thread;
use std::time::Duration;

pub const DAY_CANDLES_URL: &str = "https://api.upbit.com/v1/candles/days";
pub const MAX_CANDLES_PER_PAGE: usize = 200;
pub const REQUEST_INTERVAL: Duration = Duration::from_millis(500);

const CANDLE_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

#[derive(Debug, Deserialize)]
struct DayCandle {
    candle_date_time_utc: String,
    opening_price: f64,
    trade_price: f64,
    low_price: f64,
    candle_acc_trade_volume: f64,
}

impl DayCandle {
    fn into_bar(self) -> Result<DailyBar, SigscanError> {
        let timestamp = NaiveDateTime::parse_from_str(
            &self.candle_date_time_utc,
            CANDLE_TIME_FORMAT,
        )
        .map_err(|e| SigscanError::DataFetch {
            reason: format!(
                "invalid candle timestamp {}: {}",
                self.candle_date_time_utc, e
            ),
        })?;

        Ok(DailyBar {
            date: timestamp.date(),
            open: self.opening_price,
            close: self.trade_price,
            low: self.low_price,
            volume: self.candle_acc_trade_volume,
        })
    }
}

pub struct UpbitAdapter {
    base_url: String,
    client: reqwest::blocking::Client,
}

impl UpbitAdapter {
    pub fn new() -> Self {
        Self::with_base_url(DAY_CANDLES_URL)
    }

    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            base_url: base_url.to_string(),
            client: reqwest::blocking::Client::new(),
        }
    }

    fn fetch_page(
        &self,
        market: &str,
        count: usize,
        to: Option<&str>,
    ) -> Result<Vec<DayCandle>, SigscanError> {
        let count = count.to_string();
        let mut request = self
            .client
            .get(&self.base_url)
            .query(&[("market", market), ("count", count.as_str())]);
        if let Some(cursor) = to {
            request = request.query(&[("to", cursor)]);
        }

        let response = request.send().map_err(|e| SigscanError::DataFetch {
            reason: format!("request failed: {}", e),
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(SigscanError::DataFetch {
                reason: format!("status {}: {}", status, body),
            });
        }

        response.json().map_err(|e| SigscanError::DataFetch {
            reason: format!("invalid response body: {}", e),
        })
    }
}

impl Default for UpbitAdapter {
    fn default() -> Self {
        Self::new()
    }
}

impl DataPort for UpbitAdapter {
    fn fetch_daily(&self, market: &str, days: usize) -> Result<Vec<DailyBar>, SigscanError> {
        let mut candles: Vec<DayCandle> = Vec::with_capacity(days);
        let mut cursor: Option<String> = None;

        while candles.len() < days {
            let count = MAX_CANDLES_PER_PAGE.min(days - candles.len());
            let page = self.fetch_page(market, count, cursor.as_deref())?;
            let Some(oldest) = page.last() else {
                // Source exhausted before `days` candles.
                break;
            };
            cursor = Some(oldest.candle_date_time_utc.clone());
            candles.extend(page);
            thread::sleep(REQUEST_INTERVAL);
        }

        candles.reverse();
        candles.into_iter().map(DayCandle::into_bar).collect()
    }
}
