//! Tests for the ATH service freshness and refresh contract.

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use async_trait::async_trait;
    use chrono::{Duration, TimeZone, Utc};
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    use peakwatch_market_data::{
        HistoryProvider, HistoryRequest, Interval, Lookback, MarketDataError, Quote,
    };

    use crate::ath::AthService;
    use crate::cache::{AthCache, CacheEntry, CacheStore};
    use crate::errors::TrackerError;

    // =========================================================================
    // Mock provider
    // =========================================================================

    struct MockProvider {
        daily_closes: Vec<Decimal>,
        intraday_highs: Vec<Decimal>,
        calls: Mutex<Vec<HistoryRequest>>,
    }

    impl MockProvider {
        fn new(daily_closes: Vec<Decimal>, intraday_highs: Vec<Decimal>) -> Arc<Self> {
            Arc::new(Self {
                daily_closes,
                intraday_highs,
                calls: Mutex::new(Vec::new()),
            })
        }

        fn call_count(&self) -> usize {
            self.calls.lock().unwrap().len()
        }

        fn calls(&self) -> Vec<HistoryRequest> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl HistoryProvider for MockProvider {
        fn id(&self) -> &'static str {
            "MOCK"
        }

        async fn history(
            &self,
            _symbol: &str,
            request: HistoryRequest,
        ) -> Result<Vec<Quote>, MarketDataError> {
            self.calls.lock().unwrap().push(request);
            let quotes = match request {
                HistoryRequest::Range {
                    interval: Interval::Day,
                    ..
                } => series(&self.daily_closes, |i, close| {
                    Quote::new(bar_time(i), close)
                }),
                HistoryRequest::Range {
                    interval: Interval::Minute,
                    ..
                } => series(&self.intraday_highs, |i, high| Quote {
                    timestamp: bar_time(i),
                    open: None,
                    high: Some(high),
                    low: None,
                    close: high,
                    volume: None,
                }),
                HistoryRequest::Since { .. } => Vec::new(),
            };
            Ok(quotes)
        }
    }

    fn bar_time(index: usize) -> chrono::DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap() + Duration::minutes(index as i64)
    }

    fn series(values: &[Decimal], build: impl Fn(usize, Decimal) -> Quote) -> Vec<Quote> {
        values
            .iter()
            .enumerate()
            .map(|(i, value)| build(i, *value))
            .collect()
    }

    fn service_with(provider: Arc<MockProvider>, dir: &tempfile::TempDir) -> AthService {
        let store = CacheStore::new(dir.path().join("ath_cache.json"));
        AthService::new(provider, store)
    }

    // =========================================================================
    // Freshness
    // =========================================================================

    #[tokio::test]
    async fn test_fresh_entry_served_without_provider_call() {
        let provider = MockProvider::new(vec![dec!(100)], vec![]);
        let dir = tempfile::tempdir().unwrap();
        let service = service_with(provider.clone(), &dir);

        let mut cache = AthCache::new();
        cache.insert(
            "^NDX",
            CacheEntry::new(dec!(20973.53), Utc::now() - Duration::days(6)),
        );

        let ath = service.get_or_refresh("^NDX", &mut cache).await.unwrap();
        assert_eq!(ath, dec!(20973.53));
        assert_eq!(provider.call_count(), 0);
    }

    #[tokio::test]
    async fn test_stale_entry_triggers_one_refresh_cycle() {
        let provider = MockProvider::new(vec![dec!(90), dec!(120)], vec![dec!(95)]);
        let dir = tempfile::tempdir().unwrap();
        let service = service_with(provider.clone(), &dir);

        let mut cache = AthCache::new();
        let stale_updated = Utc::now() - Duration::days(10);
        cache.insert("^NDX", CacheEntry::new(dec!(100), stale_updated));

        let ath = service.get_or_refresh("^NDX", &mut cache).await.unwrap();
        assert_eq!(ath, dec!(120));

        // One refresh cycle = the max-history query plus the intraday query.
        let calls = provider.calls();
        assert_eq!(calls.len(), 2);
        assert_eq!(
            calls[0],
            HistoryRequest::Range {
                lookback: Lookback::Max,
                interval: Interval::Day,
            }
        );
        assert_eq!(
            calls[1],
            HistoryRequest::Range {
                lookback: Lookback::Days(5),
                interval: Interval::Minute,
            }
        );

        let entry = cache.get("^NDX").unwrap();
        assert_eq!(entry.ath, dec!(120));
        assert!(entry.updated > stale_updated);
    }

    #[tokio::test]
    async fn test_missing_entry_triggers_refresh() {
        let provider = MockProvider::new(vec![dec!(100)], vec![dec!(110)]);
        let dir = tempfile::tempdir().unwrap();
        let service = service_with(provider.clone(), &dir);

        let mut cache = AthCache::new();
        let ath = service.get_or_refresh("BTC-USD", &mut cache).await.unwrap();

        assert_eq!(ath, dec!(110));
        assert_eq!(provider.call_count(), 2);
    }

    // =========================================================================
    // Refresh sourcing
    // =========================================================================

    #[tokio::test]
    async fn test_refresh_takes_max_of_history_and_intraday() {
        let provider = MockProvider::new(vec![dec!(80), dec!(100), dec!(60)], vec![dec!(110)]);
        let dir = tempfile::tempdir().unwrap();
        let service = service_with(provider, &dir);

        let mut cache = AthCache::new();
        let ath = service.get_or_refresh("BTC-USD", &mut cache).await.unwrap();
        assert_eq!(ath, dec!(110));
    }

    #[tokio::test]
    async fn test_refresh_tolerates_empty_intraday_side() {
        let provider = MockProvider::new(vec![dec!(80), dec!(100)], vec![]);
        let dir = tempfile::tempdir().unwrap();
        let service = service_with(provider, &dir);

        let mut cache = AthCache::new();
        let ath = service.get_or_refresh("^GSPC", &mut cache).await.unwrap();
        assert_eq!(ath, dec!(100));
    }

    #[tokio::test]
    async fn test_refresh_fails_when_both_sides_empty() {
        let provider = MockProvider::new(vec![], vec![]);
        let dir = tempfile::tempdir().unwrap();
        let service = service_with(provider, &dir);

        let mut cache = AthCache::new();
        let result = service.get_or_refresh("NOPE", &mut cache).await;
        assert!(matches!(
            result,
            Err(TrackerError::DataUnavailable { symbol }) if symbol == "NOPE"
        ));
        assert!(cache.is_empty());
    }

    #[tokio::test]
    async fn test_refresh_persists_to_disk() {
        let provider = MockProvider::new(vec![dec!(100)], vec![dec!(110)]);
        let dir = tempfile::tempdir().unwrap();
        let store = CacheStore::new(dir.path().join("ath_cache.json"));
        let service = AthService::new(provider, store.clone());

        let mut cache = AthCache::new();
        service.get_or_refresh("BTC-USD", &mut cache).await.unwrap();

        let reloaded = store.load();
        assert_eq!(reloaded.get("BTC-USD").unwrap().ath, dec!(110));
    }

    // =========================================================================
    // Live breaches
    // =========================================================================

    #[tokio::test]
    async fn test_live_breach_updates_regardless_of_age() {
        let provider = MockProvider::new(vec![], vec![]);
        let dir = tempfile::tempdir().unwrap();
        let store = CacheStore::new(dir.path().join("ath_cache.json"));
        let service = AthService::new(provider, store.clone());

        let mut cache = AthCache::new();
        let fresh_updated = Utc::now() - Duration::hours(1);
        cache.insert("BTC-USD", CacheEntry::new(dec!(100), fresh_updated));

        let ath = service.observe_live("BTC-USD", dec!(105), &mut cache);
        assert_eq!(ath, dec!(105));

        let entry = cache.get("BTC-USD").unwrap();
        assert_eq!(entry.ath, dec!(105));
        assert!(entry.updated > fresh_updated);

        let reloaded = store.load();
        assert_eq!(reloaded.get("BTC-USD").unwrap().ath, dec!(105));
    }

    #[tokio::test]
    async fn test_live_below_ath_leaves_entry_alone() {
        let provider = MockProvider::new(vec![], vec![]);
        let dir = tempfile::tempdir().unwrap();
        let service = service_with(provider, &dir);

        let mut cache = AthCache::new();
        let updated = Utc::now() - Duration::days(2);
        cache.insert("BTC-USD", CacheEntry::new(dec!(110), updated));

        let ath = service.observe_live("BTC-USD", dec!(105), &mut cache);
        assert_eq!(ath, dec!(110));

        let entry = cache.get("BTC-USD").unwrap();
        assert_eq!(entry.ath, dec!(110));
        assert_eq!(entry.updated, updated);
    }

    #[tokio::test]
    async fn test_ath_is_non_decreasing_across_writes() {
        let provider = MockProvider::new(vec![dec!(100)], vec![dec!(110)]);
        let dir = tempfile::tempdir().unwrap();
        let service = service_with(provider, &dir);

        let mut cache = AthCache::new();
        let mut observed = Vec::new();

        observed.push(service.get_or_refresh("BTC-USD", &mut cache).await.unwrap());
        observed.push(service.observe_live("BTC-USD", dec!(105), &mut cache));
        observed.push(service.observe_live("BTC-USD", dec!(120), &mut cache));
        observed.push(service.get_or_refresh("BTC-USD", &mut cache).await.unwrap());

        for pair in observed.windows(2) {
            assert!(pair[1] >= pair[0], "ATH regressed: {:?}", observed);
        }
    }
}
