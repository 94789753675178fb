//! Price Fetcher.
//!
//! Obtains the latest tradable price for a symbol: the most recent
//! intraday close when the feed has one, otherwise the most recent
//! daily close from a short fallback window.

use std::sync::Arc;

use log::debug;
use rust_decimal::Decimal;
use tokio::time::sleep;

use peakwatch_market_data::{HistoryProvider, HistoryRequest, Interval, Lookback};

use crate::constants::PRICE_FALLBACK_LOOKBACK_DAYS;
use crate::errors::{Result, TrackerError};
use crate::prices::RetryPolicy;

pub struct PriceFetcher {
    provider: Arc<dyn HistoryProvider>,
    retry: RetryPolicy,
}

impl PriceFetcher {
    pub fn new(provider: Arc<dyn HistoryProvider>, retry: RetryPolicy) -> Self {
        Self { provider, retry }
    }

    /// Latest tradable price for `symbol`.
    ///
    /// Fails with `DataUnavailable` only when the intraday attempts and
    /// the daily fallback all come back empty.
    pub async fn current_price(&self, symbol: &str) -> Result<Decimal> {
        for attempt in 1..=self.retry.max_attempts {
            let intraday = self
                .provider
                .history(
                    symbol,
                    HistoryRequest::Range {
                        lookback: Lookback::Days(1),
                        interval: Interval::Minute,
                    },
                )
                .await?;

            if let Some(last) = intraday.last() {
                debug!("Current price for {}: {} (intraday)", symbol, last.close);
                return Ok(last.close);
            }

            if attempt < self.retry.max_attempts {
                debug!(
                    "No intraday prices for {} (attempt {}/{}), backing off",
                    symbol, attempt, self.retry.max_attempts
                );
                sleep(self.retry.delay).await;
            }
        }

        let daily = self
            .provider
            .history(
                symbol,
                HistoryRequest::Range {
                    lookback: Lookback::Days(PRICE_FALLBACK_LOOKBACK_DAYS),
                    interval: Interval::Day,
                },
            )
            .await?;

        match daily.last() {
            Some(last) => {
                debug!("Current price for {}: {} (daily fallback)", symbol, last.close);
                Ok(last.close)
            }
            None => Err(TrackerError::DataUnavailable {
                symbol: symbol.to_string(),
            }),
        }
    }
}
