mod catalog;
mod config;
mod models;
mod runner;
mod scrapers;
mod storage;

use config::Config;
use runner::Runner;
use tracing::{info, Level};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .init();

    let cfg = Config::from_env();
    let listings = catalog::listings();
    let (start, end) = parse_range_args(listings.len());

    info!("🏠 Listing Scout - Airbnb Listing Sync");
    info!("Processing listings {} to {} of {}", start + 1, end, listings.len());
    info!("");

    let runner = Runner::new(cfg)?;
    let report = runner.run(&listings, start, end).await?;

    info!("");
    info!("✅ Done: {} scraped, {} failed", report.succeeded, report.failed);

    Ok(())
}

/// Optional positional args select a catalog slice: `listing-scout 2 5`
/// processes indices 2, 3, 4. Defaults to the whole catalog.
fn parse_range_args(catalog_len: usize) -> (usize, usize) {
    let mut args = std::env::args().skip(1);
    let start = args.next().and_then(|a| a.parse().ok()).unwrap_or(0);
    let end = args.next().and_then(|a| a.parse().ok()).unwrap_or(catalog_len);
    (start, end)
}
