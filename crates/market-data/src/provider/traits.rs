//! Market data provider trait definition.

use async_trait::async_trait;

use crate::errors::MarketDataError;
use crate::models::{HistoryRequest, Quote};

/// Trait for historical market data sources.
///
/// Implement this trait to add support for a new market data source.
/// Callers only ever need one operation: an ordered series of bars for a
/// symbol over a requested slice of history.
///
/// # Contract
///
/// - Bars are returned ordered by timestamp ascending.
/// - An empty vector is a normal answer for unknown symbols and no-data
///   windows; implementations must not turn it into an error.
/// - Bars the source reports with unusable values (NaN prices, invalid
///   timestamps) are dropped, mirroring how gaps appear in the feed.
#[async_trait]
pub trait HistoryProvider: Send + Sync {
    /// Unique identifier for this provider.
    ///
    /// Should be a constant string like "YAHOO". Used for logging and
    /// error messages.
    fn id(&self) -> &'static str;

    /// Fetch a series of bars for `symbol` over the requested slice.
    async fn history(
        &self,
        symbol: &str,
        request: HistoryRequest,
    ) -> Result<Vec<Quote>, MarketDataError>;
}
