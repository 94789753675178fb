mod config;
mod render;

use std::sync::Arc;

use config::Config;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use peakwatch_core::cache::CacheStore;
use peakwatch_core::tracker::{AssetSpec, TrackerService};
use peakwatch_market_data::YahooProvider;

/// The tracked universe. Fixed and ordered; the report comes out in
/// this order.
fn tracked_assets() -> Vec<AssetSpec> {
    vec![
        AssetSpec::new("NASDAQ-100", "^NDX"),
        AssetSpec::new("S&P 500", "^GSPC"),
        AssetSpec::new("Bitcoin", "BTC-USD"),
    ]
}

fn init_tracing() {
    let log_format = std::env::var("PW_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    // Logs go to stderr; stdout carries only the report.
    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
            .init();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env();
    init_tracing();

    let provider = Arc::new(YahooProvider::new()?);
    let store = CacheStore::new(&config.cache_file);
    let mut cache = store.load();
    tracing::info!(
        "Loaded {} cached ATH entries from {}",
        cache.len(),
        config.cache_file.display()
    );

    let tracker = TrackerService::new(provider, store, config.retry_policy());
    let reports = tracker.run(&tracked_assets(), &mut cache).await;

    print!("{}", render::render_reports(&reports));
    Ok(())
}
