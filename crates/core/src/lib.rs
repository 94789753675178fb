//! Peakwatch Core
//!
//! The tracker engine: a persisted all-time-high cache with a staleness
//! window, a retrying price fetcher, and a multi-horizon percentage
//! change calculator. Market data comes in through the
//! `peakwatch-market-data` provider trait; rendering and the run loop
//! live in the CLI app.

pub mod ath;
pub mod cache;
pub mod changes;
pub mod constants;
pub mod errors;
pub mod prices;
pub mod tracker;

pub use errors::{Result, TrackerError};
