//! Client and types for version 3 of the API.
//!
//! **Feature flag:** `v3` (enabled by default)
//!
//! Every endpoint returns the decoded JSON body as a [`serde_json::Value`]; no response schema
//! is enforced.
//!
//! ## Available Endpoints
//!
//! | Endpoint | Description |
//! |----------|-------------|
//! | `/coinoftheday`, `/nftoftheday` | Daily picks and their history |
//! | `/coins`, `/nfts` | Snapshot of every tracked asset |
//! | `/coins/list`, `/nfts/list` | Every supported asset with its id |
//! | `/coins/:coin/...` | Snapshot, change, history, influencers, insights, meta, time series |
//! | `/nfts/:nft/...` | Same as coins, plus `/tokens` |
//! | `/coins/global/...`, `/nfts/global/...` | Aggregated market metrics |
//! | `/exchanges`, `/market-pairs/:coin` | Exchanges and trading pairs |
//! | `/feeds`, `/influencers/:id`, `/insights/:id` | Social content |
//! | `/opinions`, `/sparks/:id`, `/stats/lunrfi`, `/top-mentions` | Community data |
//!
//! # Example
//!
//! ```no_run
//! use lunarcrush_client_sdk::v3::{Client, types::request::ListingRequest};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = Client::connect("my-api-key").await?;
//!
//! let top = client
//!     .coins(&ListingRequest::builder().sort("galaxy_score").limit(10).build())
//!     .await?;
//! println!("BTC id: {}", client.coin_id("BTC"));
//! # Ok(())
//! # }
//! ```
//!
//! # API Base URL
//!
//! The default API endpoint is `https://lunarcrush.com/api3`.

pub mod client;
pub mod types;

pub use client::{BASE_URL, Client};
