use std::collections::HashMap;

use chrono::{DateTime, Duration, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::constants::ATH_STALENESS_DAYS;

/// One cached all-time-high observation for a ticker.
///
/// `updated` carries its offset so cache files written in any local
/// timezone keep loading; comparisons happen in UTC.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CacheEntry {
    /// The all-time-high price
    pub ath: Decimal,
    /// When this entry was last written
    pub updated: DateTime<Utc>,
}

impl CacheEntry {
    pub fn new(ath: Decimal, updated: DateTime<Utc>) -> Self {
        Self { ath, updated }
    }

    /// Whether the entry is young enough to serve without a refresh.
    pub fn is_fresh(&self, now: DateTime<Utc>) -> bool {
        now - self.updated < Duration::days(ATH_STALENESS_DAYS)
    }
}

/// In-memory mapping from ticker symbol to its cached ATH.
///
/// Entries are inserted or overwritten, never deleted; the map is
/// bounded by whatever fixed asset list the caller tracks. Per symbol,
/// `ath` is monotonically non-decreasing across writes: refreshes
/// recompute it from full history (which contains every previously
/// observed close) and the live-breach path only ever writes a higher
/// value.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AthCache {
    entries: HashMap<String, CacheEntry>,
}

impl AthCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, symbol: &str) -> Option<&CacheEntry> {
        self.entries.get(symbol)
    }

    pub fn insert(&mut self, symbol: impl Into<String>, entry: CacheEntry) {
        self.entries.insert(symbol.into(), entry);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
