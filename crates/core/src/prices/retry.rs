use std::time::Duration;

use crate::constants::{PRICE_MAX_ATTEMPTS, PRICE_RETRY_DELAY};

/// Bounded retry policy for the intraday price query.
///
/// Right after market events the intraday feed can briefly serve an
/// empty window; one delayed re-read usually resolves it. The policy is
/// a value so tests can run with a zero delay.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct RetryPolicy {
    /// Total attempts, including the first one.
    pub max_attempts: u32,
    /// Pause between attempts.
    pub delay: Duration,
}

impl RetryPolicy {
    pub fn new(max_attempts: u32, delay: Duration) -> Self {
        Self {
            max_attempts: max_attempts.max(1),
            delay,
        }
    }

    /// The default policy without the inter-attempt pause.
    pub fn without_delay() -> Self {
        Self {
            delay: Duration::ZERO,
            ..Self::default()
        }
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: PRICE_MAX_ATTEMPTS,
            delay: PRICE_RETRY_DELAY,
        }
    }
}
