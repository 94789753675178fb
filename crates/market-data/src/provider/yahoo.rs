//! Yahoo Finance market data provider.
//!
//! This provider uses the Yahoo Finance API to fetch history for:
//! - Equities/ETFs (e.g., AAPL, SHOP.TO)
//! - Indices (e.g., ^NDX, ^GSPC)
//! - Cryptocurrencies (e.g., BTC-USD)

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use num_traits::FromPrimitive;
use rust_decimal::Decimal;
use time::OffsetDateTime;
use tracing::{debug, warn};
use yahoo_finance_api as yahoo;

use crate::errors::MarketDataError;
use crate::models::{HistoryRequest, Quote};
use crate::provider::HistoryProvider;

/// Yahoo Finance market data provider.
///
/// Wraps the `yahoo_finance_api` connector. Range requests map to the
/// chart API's range tokens ("5d", "max"); start-date requests map to
/// explicit period queries.
pub struct YahooProvider {
    connector: yahoo::YahooConnector,
}

impl YahooProvider {
    /// Create a new Yahoo Finance provider.
    pub fn new() -> Result<Self, MarketDataError> {
        let connector = yahoo::YahooConnector::new().map_err(|e| MarketDataError::ProviderError {
            provider: "YAHOO".to_string(),
            message: format!("Failed to initialize Yahoo connector: {}", e),
        })?;
        Ok(Self { connector })
    }

    /// Convert chrono DateTime<Utc> to time::OffsetDateTime for the Yahoo API.
    fn chrono_to_offset_datetime(dt: DateTime<Utc>) -> OffsetDateTime {
        OffsetDateTime::from_unix_timestamp(dt.timestamp())
            .unwrap_or_else(|_| OffsetDateTime::now_utc())
    }

    /// Convert a Yahoo quote to our Quote model.
    ///
    /// Bars with an invalid timestamp or a close that does not survive
    /// the float-to-decimal conversion (NaN placeholders in thin
    /// windows) yield `None` and are dropped by the caller.
    fn yahoo_quote_to_quote(yahoo_quote: yahoo::Quote) -> Option<Quote> {
        let timestamp = Utc.timestamp_opt(yahoo_quote.timestamp as i64, 0).single()?;
        let close = Decimal::from_f64_retain(yahoo_quote.close)?;

        Some(Quote {
            timestamp,
            open: Decimal::from_f64_retain(yahoo_quote.open),
            high: Decimal::from_f64_retain(yahoo_quote.high),
            low: Decimal::from_f64_retain(yahoo_quote.low),
            close,
            volume: Decimal::from_u64(yahoo_quote.volume),
        })
    }

    fn provider_error(&self, e: yahoo::YahooError) -> MarketDataError {
        MarketDataError::ProviderError {
            provider: self.id().to_string(),
            message: e.to_string(),
        }
    }
}

#[async_trait]
impl HistoryProvider for YahooProvider {
    fn id(&self) -> &'static str {
        "YAHOO"
    }

    async fn history(
        &self,
        symbol: &str,
        request: HistoryRequest,
    ) -> Result<Vec<Quote>, MarketDataError> {
        let response = match request {
            HistoryRequest::Range { lookback, interval } => {
                debug!(
                    "Fetching {} bars over {} for {} from Yahoo",
                    interval.as_str(),
                    lookback.as_range_str(),
                    symbol
                );
                self.connector
                    .get_quote_range(symbol, interval.as_str(), &lookback.as_range_str())
                    .await
            }
            HistoryRequest::Since { start, interval } => {
                debug!(
                    "Fetching {} bars since {} for {} from Yahoo",
                    interval.as_str(),
                    start.format("%Y-%m-%d"),
                    symbol
                );
                self.connector
                    .get_quote_history_interval(
                        symbol,
                        Self::chrono_to_offset_datetime(start),
                        OffsetDateTime::now_utc(),
                        interval.as_str(),
                    )
                    .await
            }
        };

        let response = match response {
            Ok(response) => response,
            Err(e) if matches!(e, yahoo::YahooError::NoQuotes | yahoo::YahooError::NoResult) => {
                debug!("No data returned for {} from Yahoo", symbol);
                return Ok(Vec::new());
            }
            Err(e) => return Err(self.provider_error(e)),
        };

        match response.quotes() {
            Ok(yahoo_quotes) => {
                let mut dropped = 0usize;
                let quotes: Vec<Quote> = yahoo_quotes
                    .into_iter()
                    .filter_map(|q| match Self::yahoo_quote_to_quote(q) {
                        Some(quote) => Some(quote),
                        None => {
                            dropped += 1;
                            None
                        }
                    })
                    .collect();

                if dropped > 0 {
                    warn!("Dropped {} unusable bars for {} from Yahoo", dropped, symbol);
                }

                Ok(quotes)
            }
            Err(yahoo::YahooError::NoQuotes | yahoo::YahooError::NoResult) => {
                debug!("Empty quote payload for {} from Yahoo", symbol);
                Ok(Vec::new())
            }
            Err(e) => Err(self.provider_error(e)),
        }
    }
}
