//! ATH Service.
//!
//! Decides whether a cached all-time-high is still usable, refreshes it
//! from the provider when it is not, and folds live price breaches back
//! into the cache. Every mutation is written through to disk
//! immediately.

use std::sync::Arc;

use chrono::Utc;
use log::{debug, info};
use rust_decimal::Decimal;

use peakwatch_market_data::{HistoryProvider, HistoryRequest, Interval, Lookback};

use crate::cache::{AthCache, CacheEntry, CacheStore};
use crate::constants::ATH_INTRADAY_LOOKBACK_DAYS;
use crate::errors::{Result, TrackerError};

pub struct AthService {
    provider: Arc<dyn HistoryProvider>,
    store: CacheStore,
}

impl AthService {
    pub fn new(provider: Arc<dyn HistoryProvider>, store: CacheStore) -> Self {
        Self { provider, store }
    }

    /// Return the ATH for `symbol`, consulting the provider only when
    /// the cached entry is stale or missing.
    pub async fn get_or_refresh(&self, symbol: &str, cache: &mut AthCache) -> Result<Decimal> {
        if let Some(entry) = cache.get(symbol) {
            if entry.is_fresh(Utc::now()) {
                debug!("ATH cache hit for {}: {}", symbol, entry.ath);
                return Ok(entry.ath);
            }
        }

        self.refresh(symbol, cache).await
    }

    /// Recompute the ATH from the provider and write it through.
    ///
    /// Two series feed the maximum: the full daily close history and a
    /// short window of intraday highs, which catches a peak set between
    /// daily bars. Either side may be empty for thin symbols; only both
    /// empty is a failure.
    async fn refresh(&self, symbol: &str, cache: &mut AthCache) -> Result<Decimal> {
        let full_history = self
            .provider
            .history(
                symbol,
                HistoryRequest::Range {
                    lookback: Lookback::Max,
                    interval: Interval::Day,
                },
            )
            .await?;
        let close_max = full_history.iter().map(|quote| quote.close).max();

        let intraday = self
            .provider
            .history(
                symbol,
                HistoryRequest::Range {
                    lookback: Lookback::Days(ATH_INTRADAY_LOOKBACK_DAYS),
                    interval: Interval::Minute,
                },
            )
            .await?;
        let intraday_high = intraday.iter().filter_map(|quote| quote.high).max();

        if close_max.is_none() && intraday_high.is_none() {
            return Err(TrackerError::DataUnavailable {
                symbol: symbol.to_string(),
            });
        }

        let ath = close_max
            .unwrap_or(Decimal::ZERO)
            .max(intraday_high.unwrap_or(Decimal::ZERO));

        info!("Refreshed ATH for {}: {}", symbol, ath);
        cache.insert(symbol, CacheEntry::new(ath, Utc::now()));
        self.store.save(cache);

        Ok(ath)
    }

    /// Fold a live price into the cache.
    ///
    /// A live price above the cached ATH is authoritative regardless of
    /// entry age: the entry is overwritten and persisted with a fresh
    /// timestamp. Returns the effective ATH after the comparison.
    pub fn observe_live(&self, symbol: &str, live_price: Decimal, cache: &mut AthCache) -> Decimal {
        match cache.get(symbol) {
            Some(entry) if live_price <= entry.ath => entry.ath,
            _ => {
                info!("Live price {} is a new ATH for {}", live_price, symbol);
                cache.insert(symbol, CacheEntry::new(live_price, Utc::now()));
                self.store.save(cache);
                live_price
            }
        }
    }
}
