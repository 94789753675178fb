//! Peakwatch Market Data Crate
//!
//! This crate provides provider-agnostic historical market data fetching
//! for the peakwatch tracker.
//!
//! # Overview
//!
//! The market data crate supports:
//! - Daily and intraday history for equities, indices and crypto
//! - Range-based queries ("last 5 days", "maximum available") and
//!   explicit start-date queries (year-to-date)
//! - An empty series as a first-class answer: illiquid windows and
//!   unknown symbols yield no bars, which callers treat as data, not
//!   as a transport failure
//!
//! # Core Types
//!
//! - [`Quote`] - A single OHLCV bar with a required close
//! - [`HistoryRequest`] - What slice of history to fetch
//! - [`HistoryProvider`] - The trait a market data source implements
//! - [`YahooProvider`] - Yahoo Finance implementation

pub mod errors;
pub mod models;
pub mod provider;

pub use errors::MarketDataError;
pub use models::{HistoryRequest, Interval, Lookback, Quote};
pub use provider::yahoo::YahooProvider;
pub use provider::HistoryProvider;
