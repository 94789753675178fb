//! Error types for the market data crate.

use thiserror::Error;

/// Errors that can occur during market data operations.
///
/// Note that a window with no data is NOT an error: providers answer it
/// with an empty series. These variants cover transport and payload
/// failures only.
#[derive(Error, Debug)]
pub enum MarketDataError {
    /// A provider-specific failure: the request itself could not be
    /// completed (network, authentication, malformed response).
    #[error("Provider error: {provider} - {message}")]
    ProviderError {
        /// The provider that returned the error
        provider: String,
        /// The error message from the provider
        message: String,
    },

    /// The provider returned data that failed validation checks.
    #[error("Validation failed: {message}")]
    ValidationFailed {
        /// Description of the validation failure
        message: String,
    },
}
