//! Request types for the v3 API.
//!
//! Each struct holds the optional query parameters of one or more endpoints and is built with
//! [`bon`](https://docs.rs/bon). Serialized field names are the query parameter names, see
//! [`ToParams`](crate::params::ToParams). Defaults match what the API documents as its own
//! defaults, so `Request::default()` sends the same query the API would assume.
//!
//! Option strings such as `sort`, `interval` or `order` are not validated locally; the API is the
//! authority on which values it accepts.

#![allow(
    clippy::module_name_repetitions,
    reason = "Request suffix is intentional for clarity"
)]

use bon::Builder;
use chrono::NaiveDateTime;
use serde::Serialize;
use serde_with::serde_as;

use crate::serde_helpers::LocalTimestamp;

/// Sorting and size options for the `/coins` and `/nfts` listings.
///
/// # Example
///
/// ```
/// use lunarcrush_client_sdk::v3::types::request::ListingRequest;
///
/// let request = ListingRequest::builder()
///     .sort("galaxy_score")
///     .limit(20)
///     .desc(true)
///     .build();
/// ```
#[non_exhaustive]
#[derive(Debug, Clone, Builder, Serialize)]
pub struct ListingRequest {
    /// Metric to sort by, e.g. `galaxy_score`, `alt_rank`, `market_cap` (default: `alt_rank`).
    #[builder(into, default = "alt_rank".to_owned())]
    pub sort: String,
    pub limit: Option<u32>,
    /// Reverse the sort order (default: false).
    #[builder(default)]
    pub desc: bool,
}

impl Default for ListingRequest {
    fn default() -> Self {
        Self::builder().build()
    }
}

/// Interval for the `*/change` endpoints.
#[non_exhaustive]
#[derive(Debug, Clone, Builder, Serialize)]
pub struct ChangeRequest {
    /// One of `1d`, `1w`, `1m`, `3m`, `6m`, `1y`, `2y` (default: `1w`).
    #[builder(into, default = "1w".to_owned())]
    pub interval: String,
}

impl Default for ChangeRequest {
    fn default() -> Self {
        Self::builder().build()
    }
}

/// Options for the influencer listings of a coin, an NFT collection or a whole market.
///
/// # Example
///
/// ```
/// use lunarcrush_client_sdk::v3::types::request::InfluencersRequest;
///
/// let request = InfluencersRequest::builder()
///     .order("followers")
///     .page(2)
///     .build();
/// ```
#[non_exhaustive]
#[derive(Debug, Clone, Builder, Serialize)]
pub struct InfluencersRequest {
    /// Time interval (default: `1w`).
    #[builder(into, default = "1w".to_owned())]
    pub interval: String,
    /// One of `influential`, `engagement`, `followers`, `volume` (default: `influential`).
    #[builder(into, default = "influential".to_owned())]
    pub order: String,
    #[builder(default = 100)]
    pub limit: u32,
    /// Page number starting at 0.
    pub page: Option<u32>,
}

impl Default for InfluencersRequest {
    fn default() -> Self {
        Self::builder().build()
    }
}

/// Insight filters for a single asset or for global metrics.
#[non_exhaustive]
#[derive(Debug, Clone, Builder, Serialize)]
pub struct InsightsRequest {
    /// Restrict insights to these metrics, e.g. `social_volume`, `market_cap`.
    #[builder(with = |metrics: impl IntoIterator<Item = impl Into<String>>| {
        metrics.into_iter().map(Into::into).collect::<Vec<_>>()
    })]
    pub metrics: Option<Vec<String>>,
    #[builder(default = 10)]
    pub limit: u32,
}

impl Default for InsightsRequest {
    fn default() -> Self {
        Self::builder().build()
    }
}

/// Insight filters across a whole market (`/coins/insights`, `/nfts/insights`).
///
/// # Example
///
/// ```
/// use lunarcrush_client_sdk::v3::types::request::MarketInsightsRequest;
///
/// let request = MarketInsightsRequest::builder()
///     .metrics(["galaxy_score", "alt_rank"])
///     .market_cap(1_000_000.0)
///     .alt_rank(50)
///     .build();
/// ```
#[non_exhaustive]
#[derive(Debug, Clone, Builder, Serialize)]
pub struct MarketInsightsRequest {
    #[builder(with = |metrics: impl IntoIterator<Item = impl Into<String>>| {
        metrics.into_iter().map(Into::into).collect::<Vec<_>>()
    })]
    pub metrics: Option<Vec<String>>,
    #[builder(default = 10)]
    pub limit: u32,
    /// Minimum 24h volume.
    pub volume: Option<f64>,
    /// Minimum market cap.
    pub market_cap: Option<f64>,
    /// Maximum alt rank.
    pub alt_rank: Option<u32>,
}

impl Default for MarketInsightsRequest {
    fn default() -> Self {
        Self::builder().build()
    }
}

/// Options for the `*/time-series` endpoints.
///
/// `start` is a local wall-clock time and is sent as a unix timestamp.
///
/// # Example
///
/// ```
/// use lunarcrush_client_sdk::types::NaiveDate;
/// use lunarcrush_client_sdk::v3::types::request::TimeSeriesRequest;
///
/// let start = NaiveDate::from_ymd_opt(2023, 1, 1)
///     .and_then(|d| d.and_hms_opt(0, 0, 0))
///     .unwrap();
///
/// let request = TimeSeriesRequest::builder()
///     .start(start)
///     .bucket("day")
///     .data_points(30)
///     .build();
///
/// assert_eq!(request.interval, "1w");
/// ```
#[serde_as]
#[non_exhaustive]
#[derive(Debug, Clone, Builder, Serialize)]
pub struct TimeSeriesRequest {
    /// Time interval (default: `1w`).
    #[builder(into, default = "1w".to_owned())]
    pub interval: String,
    #[serde_as(as = "Option<LocalTimestamp>")]
    pub start: Option<NaiveDateTime>,
    /// `hour` or `day` (default: `hour`).
    #[builder(into, default = "hour".to_owned())]
    pub bucket: String,
    /// Number of data points to fetch from `start`.
    pub data_points: Option<u32>,
}

impl Default for TimeSeriesRequest {
    fn default() -> Self {
        Self::builder().build()
    }
}

/// Options for the `/exchanges` listing.
#[non_exhaustive]
#[derive(Debug, Clone, Builder, Serialize)]
pub struct ExchangesRequest {
    /// Metric to order by, e.g. `trust_rank`, `1d_volume`, `num_pairs` (default: `1m`).
    #[builder(into, default = "1m".to_owned())]
    pub order: String,
    #[builder(default = 10)]
    pub limit: u32,
}

impl Default for ExchangesRequest {
    fn default() -> Self {
        Self::builder().build()
    }
}

/// Filters for the `/feeds` endpoint.
///
/// # Example
///
/// ```
/// use lunarcrush_client_sdk::v3::types::request::FeedsRequest;
///
/// let request = FeedsRequest::builder()
///     .sources(["twitter", "news"])
///     .symbol("ETH")
///     .build();
/// ```
#[non_exhaustive]
#[derive(Debug, Clone, Builder, Serialize)]
#[builder(on(String, into))]
pub struct FeedsRequest {
    /// Maximum number of posts, up to 1000 (default: 10).
    #[builder(default = 10)]
    pub limit: u32,
    /// Look-back window (default: `1m`).
    #[builder(default = "1m".to_owned())]
    pub since: String,
    pub hours: Option<u32>,
    pub days: Option<u32>,
    /// Any of `twitter`, `news`, `medium`, `urls`, `youtube`, `reddit`. Unset means all.
    #[builder(with = |sources: impl IntoIterator<Item = impl Into<String>>| {
        sources.into_iter().map(Into::into).collect::<Vec<_>>()
    })]
    pub sources: Option<Vec<String>>,
    pub coin_id: Option<u64>,
    pub symbol: Option<String>,
    pub lunar_id: Option<String>,
    /// `coins` or `nfts` (default: `coins`).
    #[builder(default = "coins".to_owned())]
    pub market: String,
}

impl Default for FeedsRequest {
    fn default() -> Self {
        Self::builder().build()
    }
}

/// Options for a single influencer.
#[non_exhaustive]
#[derive(Debug, Clone, Builder, Serialize)]
#[builder(on(String, into))]
pub struct InfluencerRequest {
    /// Skip the list of posts for a faster response (default: false).
    #[builder(default)]
    pub fast: bool,
    pub interval: Option<String>,
    /// Sort for the posts, e.g. `time`.
    pub sort: Option<String>,
}

impl Default for InfluencerRequest {
    fn default() -> Self {
        Self::builder().build()
    }
}

/// Which market a single insight belongs to.
#[non_exhaustive]
#[derive(Debug, Clone, Builder, Serialize)]
pub struct InsightRequest {
    /// One of `coins`, `nfts`, `global`, `nfts-global`, `influencers` (default: `coins`).
    #[builder(into, default = "coins".to_owned())]
    #[serde(rename = "type")]
    pub insight_type: String,
}

impl Default for InsightRequest {
    fn default() -> Self {
        Self::builder().build()
    }
}

/// Paging and sorting for `/market-pairs/{coin}`.
#[non_exhaustive]
#[derive(Debug, Clone, Builder, Serialize)]
pub struct MarketPairsRequest {
    #[builder(default = 100)]
    pub limit: u32,
    #[builder(default = 100)]
    pub page: u32,
    /// One of `name`, `market_sort`, `price`, `1d_volume`, `30d_volume`, `type`, `last_updated`.
    #[builder(into)]
    pub sort: Option<String>,
}

impl Default for MarketPairsRequest {
    fn default() -> Self {
        Self::builder().build()
    }
}

/// Sorting for the tokens of one NFT collection.
#[non_exhaustive]
#[derive(Debug, Clone, Builder, Serialize)]
pub struct NftTokensRequest {
    /// One of `last_sold_amount`, `last_sold_time`, `name` (default: `last_sold_amount`).
    #[builder(into, default = "last_sold_amount".to_owned())]
    pub sort: String,
    #[builder(default = 100)]
    pub limit: u32,
    #[builder(default)]
    pub desc: bool,
}

impl Default for NftTokensRequest {
    fn default() -> Self {
        Self::builder().build()
    }
}

/// Filters for the `/opinions` index.
#[non_exhaustive]
#[derive(Debug, Clone, Default, Builder, Serialize)]
#[builder(on(String, into))]
pub struct OpinionsRequest {
    /// One of `all`, `global`, `coin`, `nft`, `feed`, `exchange`, `influencer`.
    pub context: Option<String>,
    /// One of `all`, `positive`, `negative`, `split`.
    pub sort: Option<String>,
}

/// Options for `/top-mentions`.
#[non_exhaustive]
#[derive(Debug, Clone, Builder, Serialize)]
#[builder(on(String, into))]
pub struct TopMentionsRequest {
    #[builder(default = "all".to_owned())]
    pub interval: String,
    /// One of `all`, `word`, `emoji`, `hashtag` (default: `all`).
    #[builder(default = "all".to_owned())]
    #[serde(rename = "type")]
    pub mention_type: String,
    /// `coins` or `nfts` (default: `coins`).
    #[builder(default = "coins".to_owned())]
    pub market: String,
}

impl Default for TopMentionsRequest {
    fn default() -> Self {
        Self::builder().build()
    }
}
