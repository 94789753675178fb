//! All-time-high retrieval with staleness-based refresh.

mod service;

mod service_tests;

pub use service::AthService;
