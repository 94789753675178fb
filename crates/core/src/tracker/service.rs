//! Tracker Service.
//!
//! Runs the per-asset pipeline: ATH (cached or refreshed), current
//! price, live-breach folding, distance from ATH, then the seven change
//! horizons. Assets are processed strictly one after another, and a
//! failure in one asset is converted into an error report at that
//! asset's boundary so the rest of the list still runs.

use std::sync::Arc;

use log::error;
use rust_decimal::Decimal;

use peakwatch_market_data::HistoryProvider;

use crate::ath::AthService;
use crate::cache::{AthCache, CacheStore};
use crate::changes::{percent_change, ChangeCalculator};
use crate::errors::{Result, TrackerError};
use crate::prices::{PriceFetcher, RetryPolicy};
use crate::tracker::model::{AssetReport, AssetSnapshot, AssetSpec, ChangeSet};

pub struct TrackerService {
    ath: AthService,
    prices: PriceFetcher,
    changes: ChangeCalculator,
}

impl TrackerService {
    pub fn new(provider: Arc<dyn HistoryProvider>, store: CacheStore, retry: RetryPolicy) -> Self {
        Self {
            ath: AthService::new(provider.clone(), store),
            prices: PriceFetcher::new(provider.clone(), retry),
            changes: ChangeCalculator::new(provider),
        }
    }

    /// Produce one report per asset, in input order.
    pub async fn run(&self, assets: &[AssetSpec], cache: &mut AthCache) -> Vec<AssetReport> {
        let mut reports = Vec::with_capacity(assets.len());

        for spec in assets {
            match self.track(spec, cache).await {
                Ok(snapshot) => reports.push(AssetReport::Snapshot(snapshot)),
                Err(e) => {
                    error!("{} ({}): {}", spec.display_name, spec.symbol, e);
                    reports.push(AssetReport::Failed {
                        display_name: spec.display_name.clone(),
                        symbol: spec.symbol.clone(),
                        error: e.to_string(),
                    });
                }
            }
        }

        reports
    }

    async fn track(&self, spec: &AssetSpec, cache: &mut AthCache) -> Result<AssetSnapshot> {
        let symbol = spec.symbol.as_str();

        // Staleness is settled before the live comparison, so a stale
        // entry is refreshed even when today's price won't breach it.
        let ath = self.ath.get_or_refresh(symbol, cache).await?;
        let current_price = self.prices.current_price(symbol).await?;
        let ath = self.ath.observe_live(symbol, current_price, cache);

        let pct_from_ath =
            percent_change(ath, current_price).ok_or_else(|| TrackerError::DataUnavailable {
                symbol: symbol.to_string(),
            })?;

        let changes = ChangeSet {
            day: self.changes.live_day_change(symbol, current_price).await?,
            week: self.changes.change_percent(symbol, 7).await?,
            month: self.changes.change_percent(symbol, 30).await?,
            three_months: self.changes.change_percent(symbol, 90).await?,
            six_months: self.changes.change_percent(symbol, 180).await?,
            year: self.changes.change_percent(symbol, 365).await?,
            ytd: self.changes.ytd_change(symbol).await?,
        };

        Ok(AssetSnapshot {
            display_name: spec.display_name.clone(),
            symbol: spec.symbol.clone(),
            current_price,
            ath,
            pct_from_ath,
            changes,
        })
    }
}
