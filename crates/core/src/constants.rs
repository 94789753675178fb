//! Tunables for the tracker engine.

use std::time::Duration;

/// A cached ATH younger than this many days is served without a
/// provider call.
pub const ATH_STALENESS_DAYS: i64 = 7;

/// Trailing window of minute bars consulted for intraday highs during
/// an ATH refresh.
pub const ATH_INTRADAY_LOOKBACK_DAYS: u32 = 5;

/// Total attempts at the intraday price before falling back to daily
/// closes.
pub const PRICE_MAX_ATTEMPTS: u32 = 2;

/// Pause between intraday price attempts.
pub const PRICE_RETRY_DELAY: Duration = Duration::from_secs(2);

/// Trailing window of daily closes used as the price fallback.
pub const PRICE_FALLBACK_LOOKBACK_DAYS: u32 = 5;

/// Extra calendar days fetched beyond a change horizon, so weekends and
/// holidays don't starve the lookback of trading days.
pub const CHANGE_WINDOW_PADDING_DAYS: u32 = 5;

/// Smallest window ever requested for a change horizon.
pub const CHANGE_WINDOW_MIN_DAYS: u32 = 10;
