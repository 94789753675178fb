//! Data models shared by all market data providers.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single bar of market data.
///
/// Open/high/low/volume are optional because intraday feeds frequently
/// omit them; the close is required and doubles as "the price" for
/// latest-quote style queries.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    /// Timestamp of the bar
    pub timestamp: DateTime<Utc>,

    /// Opening price
    #[serde(skip_serializing_if = "Option::is_none")]
    pub open: Option<Decimal>,

    /// High price
    #[serde(skip_serializing_if = "Option::is_none")]
    pub high: Option<Decimal>,

    /// Low price
    #[serde(skip_serializing_if = "Option::is_none")]
    pub low: Option<Decimal>,

    /// Closing/current price (required)
    pub close: Decimal,

    /// Trading volume
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volume: Option<Decimal>,
}

impl Quote {
    /// Create a new quote with minimal required fields
    pub fn new(timestamp: DateTime<Utc>, close: Decimal) -> Self {
        Self {
            timestamp,
            open: None,
            high: None,
            low: None,
            close,
            volume: None,
        }
    }

    /// Create a full OHLCV quote
    pub fn ohlcv(
        timestamp: DateTime<Utc>,
        open: Decimal,
        high: Decimal,
        low: Decimal,
        close: Decimal,
        volume: Decimal,
    ) -> Self {
        Self {
            timestamp,
            open: Some(open),
            high: Some(high),
            low: Some(low),
            close,
            volume: Some(volume),
        }
    }
}

/// Bar granularity for a history request.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Interval {
    /// Daily bars
    Day,
    /// One-minute bars (the finest granularity Yahoo serves)
    Minute,
}

impl Interval {
    /// Provider interval token ("1d", "1m").
    pub fn as_str(&self) -> &'static str {
        match self {
            Interval::Day => "1d",
            Interval::Minute => "1m",
        }
    }
}

/// How far back a range query reaches.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Lookback {
    /// A trailing window of calendar days
    Days(u32),
    /// The maximum history the provider has for the symbol
    Max,
}

impl Lookback {
    /// Provider range token ("5d", "max").
    pub fn as_range_str(&self) -> String {
        match self {
            Lookback::Days(days) => format!("{}d", days),
            Lookback::Max => "max".to_string(),
        }
    }
}

/// What slice of history to fetch.
///
/// Providers answer with bars ordered by timestamp ascending. An empty
/// answer is a normal condition (unknown symbol, no-data window), never
/// a transport error.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum HistoryRequest {
    /// A trailing window ending now
    Range {
        lookback: Lookback,
        interval: Interval,
    },
    /// Everything from an explicit start date to now
    Since {
        start: DateTime<Utc>,
        interval: Interval,
    },
}
