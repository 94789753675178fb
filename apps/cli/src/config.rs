//! Environment-driven configuration for the CLI.

use std::path::PathBuf;
use std::time::Duration;

use peakwatch_core::prices::RetryPolicy;

/// Runtime configuration, read once at startup.
///
/// Every knob has a default so a bare `peakwatch` invocation works.
#[derive(Clone, Debug)]
pub struct Config {
    /// Where the ATH cache file lives.
    pub cache_file: PathBuf,
    /// Seconds to wait between intraday price attempts.
    pub retry_delay_secs: u64,
}

impl Config {
    pub fn from_env() -> Self {
        let cache_file = std::env::var("PW_CACHE_FILE")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("ath_cache.json"));

        let retry_delay_secs = std::env::var("PW_RETRY_DELAY_SECS")
            .ok()
            .and_then(|raw| raw.parse().ok())
            .unwrap_or(2);

        Self {
            cache_file,
            retry_delay_secs,
        }
    }

    pub fn retry_policy(&self) -> RetryPolicy {
        RetryPolicy {
            delay: Duration::from_secs(self.retry_delay_secs),
            ..RetryPolicy::default()
        }
    }
}
