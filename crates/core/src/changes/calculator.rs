//! Change Calculator.
//!
//! Percentage change over an arbitrary lookback window, a year-to-date
//! variant, and a live 24h variant. "Not enough history" is a `None`
//! result, never an error: a newly listed asset simply has no 1-year
//! figure yet.

use std::sync::Arc;

use chrono::{DateTime, Datelike, TimeZone, Utc};
use log::debug;
use rust_decimal::Decimal;

use peakwatch_market_data::{HistoryProvider, HistoryRequest, Interval, Lookback};

use crate::constants::{CHANGE_WINDOW_MIN_DAYS, CHANGE_WINDOW_PADDING_DAYS};
use crate::errors::Result;

pub struct ChangeCalculator {
    provider: Arc<dyn HistoryProvider>,
}

impl ChangeCalculator {
    pub fn new(provider: Arc<dyn HistoryProvider>) -> Self {
        Self { provider }
    }

    /// Close-to-close percentage change over `days` calendar days.
    ///
    /// The fetched window is padded past the horizon so weekends and
    /// holidays still leave enough trading days. When history is
    /// shorter than the horizon, the lookback clamps to the oldest
    /// usable bar instead of indexing out of range.
    pub async fn change_percent(&self, symbol: &str, days: u32) -> Result<Option<Decimal>> {
        let window = (days + CHANGE_WINDOW_PADDING_DAYS).max(CHANGE_WINDOW_MIN_DAYS);
        let closes = self.daily_closes(symbol, Lookback::Days(window)).await?;

        if closes.len() < 2 {
            debug!(
                "Only {} observations for {} over {}d, change unavailable",
                closes.len(),
                symbol,
                days
            );
            return Ok(None);
        }

        let len = closes.len();
        let lookback = (days as usize).min(len - 1);
        let past = closes[len - lookback];
        let last = closes[len - 1];

        Ok(percent_change(past, last))
    }

    /// Change since the first trading day of the current year.
    pub async fn ytd_change(&self, symbol: &str) -> Result<Option<Decimal>> {
        let closes = self
            .closes(
                symbol,
                HistoryRequest::Since {
                    start: start_of_year(Utc::now()),
                    interval: Interval::Day,
                },
            )
            .await?;

        if closes.len() < 2 {
            return Ok(None);
        }

        Ok(percent_change(closes[0], closes[closes.len() - 1]))
    }

    /// 24h change of a live price against the most recent completed
    /// daily close.
    ///
    /// This intentionally differs from `change_percent(symbol, 1)`,
    /// which compares the two most recent daily bars to each other; the
    /// live form is what a "since yesterday" figure means while the
    /// market is open.
    pub async fn live_day_change(&self, symbol: &str, current: Decimal) -> Result<Option<Decimal>> {
        let closes = self.daily_closes(symbol, Lookback::Days(2)).await?;

        match closes.last() {
            Some(baseline) => Ok(percent_change(*baseline, current)),
            None => Ok(None),
        }
    }

    async fn daily_closes(&self, symbol: &str, lookback: Lookback) -> Result<Vec<Decimal>> {
        self.closes(
            symbol,
            HistoryRequest::Range {
                lookback,
                interval: Interval::Day,
            },
        )
        .await
    }

    async fn closes(&self, symbol: &str, request: HistoryRequest) -> Result<Vec<Decimal>> {
        let quotes = self.provider.history(symbol, request).await?;
        Ok(quotes.iter().map(|quote| quote.close).collect())
    }
}

/// `(value / base - 1) * 100`, or `None` when the base is zero.
pub(crate) fn percent_change(base: Decimal, value: Decimal) -> Option<Decimal> {
    value
        .checked_div(base)
        .map(|ratio| (ratio - Decimal::ONE) * Decimal::ONE_HUNDRED)
}

fn start_of_year(now: DateTime<Utc>) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(now.year(), 1, 1, 0, 0, 0)
        .single()
        .unwrap_or(now)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_percent_change() {
        assert_eq!(percent_change(dec!(100), dec!(110)), Some(dec!(10.00)));
        assert_eq!(
            percent_change(dec!(110), dec!(100)).map(|pct| pct.round_dp(2)),
            Some(dec!(-9.09))
        );
        assert_eq!(percent_change(dec!(0), dec!(100)), None);
    }

    #[test]
    fn test_start_of_year() {
        let now = Utc.with_ymd_and_hms(2026, 8, 6, 12, 30, 0).unwrap();
        let start = start_of_year(now);
        assert_eq!(start, Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap());
    }
}
