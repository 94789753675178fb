//! Core error types for the tracker engine.
//!
//! Only total data unavailability is an error here. "Not enough history
//! for this horizon" is a valid `None` result from the change
//! calculator, and cache file problems are recovered from silently by
//! the store.

use peakwatch_market_data::MarketDataError;
use thiserror::Error;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, TrackerError>;

/// Errors raised while processing a single asset.
///
/// Each of these is caught at the per-asset boundary in the tracker
/// service and converted into an error report; one asset's failure
/// never aborts the run.
#[derive(Error, Debug)]
pub enum TrackerError {
    /// The provider yielded no usable series for a required query.
    #[error("No usable market data for {symbol}")]
    DataUnavailable {
        /// The symbol the data was requested for
        symbol: String,
    },

    /// A market data transport or payload failure.
    #[error("Market data operation failed: {0}")]
    MarketData(#[from] MarketDataError),
}
