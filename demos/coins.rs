//! Coin endpoints walkthrough.
//!
//! Reads the API key from `LUNARCRUSH_API_KEY`. Run with tracing enabled:
//! ```sh
//! RUST_LOG=info,lunarcrush_client_sdk=debug,hyper_util=off,reqwest=off cargo run --example coins --features tracing
//! ```
//!
//! Optionally log to a file:
//! ```sh
//! LOG_FILE=coins.log RUST_LOG=info cargo run --example coins --features tracing
//! ```

use std::fs::File;

use lunarcrush_client_sdk::types::NaiveDate;
use lunarcrush_client_sdk::v3::Client;
use lunarcrush_client_sdk::v3::types::request::{
    ChangeRequest, FeedsRequest, ListingRequest, TimeSeriesRequest,
};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt as _;
use tracing_subscriber::util::SubscriberInitExt as _;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if let Ok(path) = std::env::var("LOG_FILE") {
        let file = File::create(path)?;
        tracing_subscriber::registry()
            .with(EnvFilter::from_default_env())
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(file)
                    .with_ansi(false),
            )
            .init();
    } else {
        tracing_subscriber::fmt::init();
    }

    let client = Client::from_env()?.initialize().await?;
    info!(
        coins = client.tables().coins().len(),
        nfts = client.tables().nfts().len(),
        btc_id = %client.coin_id("BTC")
    );

    let listing = ListingRequest::builder()
        .sort("galaxy_score")
        .limit(5)
        .desc(true)
        .build();
    match client.coins(&listing).await {
        Ok(response) => info!(endpoint = "coins", body = %response["data"]),
        Err(e) => debug!(endpoint = "coins", error = %e),
    }

    match client.coin_change("ETH", &ChangeRequest::default()).await {
        Ok(response) => info!(endpoint = "coin_change", body = %response),
        Err(e) => debug!(endpoint = "coin_change", error = %e),
    }

    let start = NaiveDate::from_ymd_opt(2023, 1, 1).and_then(|d| d.and_hms_opt(0, 0, 0));
    let series = TimeSeriesRequest::builder()
        .maybe_start(start)
        .bucket("day")
        .data_points(30)
        .build();
    match client.coin_time_series("BTC", &series).await {
        Ok(response) => info!(endpoint = "coin_time_series", body = %response),
        Err(e) => debug!(endpoint = "coin_time_series", error = %e),
    }

    let feeds = FeedsRequest::builder()
        .sources(["twitter", "news"])
        .symbol("BTC")
        .build();
    match client.feeds(&feeds).await {
        Ok(response) => info!(endpoint = "feeds", body = %response),
        Err(e) => debug!(endpoint = "feeds", error = %e),
    }

    Ok(())
}
