//! Client for the v3 API.
//!
//! A [`Client`] starts out [`Uninitialized`]: it knows where to send requests and with which key,
//! but has not fetched the coin and NFT listings yet. [`Client::initialize`] fetches both and
//! returns a [`Ready`] client, which is the only state that exposes the endpoint methods.
//!
//! # Example
//!
//! ```no_run
//! use lunarcrush_client_sdk::v3::{Client, types::request::TimeSeriesRequest};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = Client::connect("my-api-key").await?;
//!
//! let btc = client.coin("BTC").await?;
//! let series = client
//!     .coin_time_series("BTC", &TimeSeriesRequest::builder().bucket("day").build())
//!     .await?;
//!
//! println!("{btc}\n{series}");
//! # Ok(())
//! # }
//! ```

use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};
use secrecy::ExposeSecret as _;
use serde_json::Value;

use super::types::IdTables;
use super::types::request::{
    ChangeRequest, ExchangesRequest, FeedsRequest, InfluencerRequest, InfluencersRequest,
    InsightRequest, InsightsRequest, ListingRequest, MarketInsightsRequest, MarketPairsRequest,
    NftTokensRequest, OpinionsRequest, TimeSeriesRequest, TopMentionsRequest,
};
use super::types::response::Listing;
use crate::Result;
use crate::config::Config;
use crate::params::{ParamValue, ToParams, build_url, encode_params};
use crate::transport::{HttpTransport, Transport};
use crate::types::AssetId;
pub use state::{Ready, State, Uninitialized};

/// Root of the v3 API.
pub const BASE_URL: &str = "https://lunarcrush.com/api3";

pub mod state {
    use crate::v3::types::IdTables;

    /// The listings have not been fetched; only the list endpoints and the raw
    /// [`request`](super::Client::request) are available.
    #[non_exhaustive]
    #[derive(Clone, Debug)]
    pub struct Uninitialized;

    /// The id tables are loaded and every endpoint is available.
    #[non_exhaustive]
    #[derive(Clone, Debug)]
    pub struct Ready {
        pub(crate) tables: IdTables,
    }

    pub trait State: sealed::Sealed {}

    impl State for Uninitialized {}
    impl sealed::Sealed for Uninitialized {}

    impl State for Ready {}
    impl sealed::Sealed for Ready {}

    mod sealed {
        pub trait Sealed {}
    }
}

/// Client for the v3 API.
///
/// Holds the [`Config`] and a [`Transport`]. `S` is the lifecycle state: a client is created
/// [`Uninitialized`] and turned [`Ready`] by [`Client::initialize`] or [`Client::with_tables`].
/// Only a ready client has the endpoint methods, and it is `Send + Sync`, so one instance can
/// be shared across tasks.
///
/// # Example
///
/// ```no_run
/// use lunarcrush_client_sdk::v3::Client;
/// use lunarcrush_client_sdk::v3::types::request::{ChangeRequest, ListingRequest};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = Client::from_env()?.initialize().await?;
///
/// // Top coins by Galaxy Score
/// let top = client
///     .coins(&ListingRequest::builder().sort("galaxy_score").desc(true).build())
///     .await?;
///
/// // Weekly change for ETH, looked up by symbol
/// let change = client.coin_change("ETH", &ChangeRequest::default()).await?;
/// println!("{} {top} {change}", client.coin_id("ETH"));
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct Client<S: State = Uninitialized, T: Transport = HttpTransport> {
    config: Config,
    transport: T,
    state: S,
}

impl Client<Uninitialized, HttpTransport> {
    /// Creates a client for the public v3 API using `api_key`.
    ///
    /// No request is made until [`Client::initialize`] is called.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(api_key: &str) -> Result<Self> {
        let config = Config::builder()
            .base_url(BASE_URL)
            .api_key(api_key)
            .build();
        Self::with_config(config)
    }

    /// Creates a client for an arbitrary base URL, e.g. a proxy or a mock server.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn with_config(config: Config) -> Result<Self> {
        Ok(Self::with_transport(config, HttpTransport::new()?))
    }

    /// Creates a client for the public v3 API using the `LUNARCRUSH_API_KEY` variable.
    ///
    /// # Errors
    ///
    /// Returns an error if the variable is unset or the HTTP client cannot be built.
    pub fn from_env() -> Result<Self> {
        Self::with_config(Config::from_env(BASE_URL)?)
    }

    /// Creates a client and loads its id tables in one step.
    ///
    /// # Errors
    ///
    /// Returns an error if either listing request fails.
    pub async fn connect(api_key: &str) -> Result<Client<Ready, HttpTransport>> {
        Self::new(api_key)?.initialize().await
    }
}

impl<T: Transport> Client<Uninitialized, T> {
    /// Creates a client that sends its requests through `transport`.
    #[must_use]
    pub fn with_transport(config: Config, transport: T) -> Self {
        Self {
            config,
            transport,
            state: Uninitialized,
        }
    }

    /// Fetches `/coins/list` and `/nfts/list` and builds the id tables from them.
    ///
    /// # Errors
    ///
    /// Fails if either request fails or either body has no `data` array. No client is returned
    /// in that case.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "debug", skip(self)))]
    pub async fn initialize(self) -> Result<Client<Ready, T>> {
        let coins: Listing = serde_json::from_value(self.coins_list().await?)?;
        let nfts: Listing = serde_json::from_value(self.nfts_list().await?)?;
        let tables = IdTables::from_listings(coins.data, nfts.data);

        #[cfg(feature = "tracing")]
        tracing::debug!(
            coins = tables.coins().len(),
            nfts = tables.nfts().len(),
            "loaded id tables"
        );

        Ok(self.with_tables(tables))
    }

    /// Skips the listing requests and uses precomputed `tables` instead.
    #[must_use]
    pub fn with_tables(self, tables: IdTables) -> Client<Ready, T> {
        Client {
            config: self.config,
            transport: self.transport,
            state: Ready { tables },
        }
    }
}

impl<S: State, T: Transport> Client<S, T> {
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        self.config.base_url()
    }

    #[must_use]
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Sends a GET to `endpoint` with `params` and returns the decoded body.
    ///
    /// This is what every endpoint method goes through, exposed for endpoints this client does
    /// not wrap yet. The status code is not checked: the API reports errors in a JSON body, which
    /// is returned like any other value.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use lunarcrush_client_sdk::params::ParamValue;
    /// use lunarcrush_client_sdk::v3::Client;
    ///
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// let client = Client::new("my-api-key")?;
    /// let body = client
    ///     .request("/coins", [("limit", Some(ParamValue::from(5_u32)))])
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is invalid, the request fails or the body is not JSON.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(level = "debug", skip(self, params))
    )]
    pub async fn request<P, N>(&self, endpoint: &str, params: P) -> Result<Value>
    where
        P: IntoIterator<Item = (N, Option<ParamValue>)> + Send,
        N: Into<String>,
    {
        let params = encode_params(params);
        let url = build_url(self.config.base_url(), endpoint, &params)?;

        self.transport.get(url, self.auth_headers()?).await
    }

    fn auth_headers(&self) -> Result<HeaderMap> {
        let mut value = HeaderValue::from_str(&format!(
            "Bearer {}",
            self.config.api_key().expose_secret()
        ))?;
        value.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, value);
        Ok(headers)
    }

    async fn get<R: ToParams + Sync>(&self, endpoint: &str, request: &R) -> Result<Value> {
        self.request(endpoint, request.params()?).await
    }

    /// Every supported coin with its id, name, symbol and logo.
    pub async fn coins_list(&self) -> Result<Value> {
        self.get("/coins/list", &()).await
    }

    /// Every supported NFT collection.
    pub async fn nfts_list(&self) -> Result<Value> {
        self.get("/nfts/list", &()).await
    }
}

impl<T: Transport> Client<Ready, T> {
    /// The id tables loaded at initialization.
    #[must_use]
    pub fn tables(&self) -> &IdTables {
        &self.state.tables
    }

    /// Id of the coin with `symbol`, or the string `"None"` if the symbol was not listed.
    #[must_use]
    pub fn coin_id(&self, symbol: &str) -> String {
        self.state.tables.coin_id(symbol)
    }

    /// Id of the NFT collection called `name`, or the string `"None"` if it was not listed.
    #[must_use]
    pub fn nft_id(&self, name: &str) -> String {
        self.state.tables.nft_id(name)
    }

    /// The current Coin of the Day: the coin with the best combined Galaxy Score and `AltRank`.
    pub async fn coin_of_the_day(&self) -> Result<Value> {
        self.get("/coinoftheday", &()).await
    }

    /// Previous Coins of the Day and when the pick was last updated.
    pub async fn coin_of_the_day_info(&self) -> Result<Value> {
        self.get("/coinoftheday/info", &()).await
    }

    /// Snapshot of the main metrics for every tracked coin.
    ///
    /// For the full metric set of one coin use [`Client::coin`].
    pub async fn coins(&self, request: &ListingRequest) -> Result<Value> {
        self.get("/coins", request).await
    }

    /// Detailed snapshot of one coin, by numeric id or symbol.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body is not JSON.
    pub async fn coin<C: Into<AssetId>>(&self, coin: C) -> Result<Value> {
        self.get(&format!("/coins/{}", coin.into()), &()).await
    }

    /// Change of every coin metric over `interval` compared to the interval before it.
    pub async fn coin_change<C: Into<AssetId>>(
        &self,
        coin: C,
        request: &ChangeRequest,
    ) -> Result<Value> {
        self.get(&format!("/coins/{}/change", coin.into()), request)
            .await
    }

    /// Full hourly history of one coin up to the last completed day. Usually over 30 MB.
    pub async fn coin_historical<C: Into<AssetId>>(&self, coin: C) -> Result<Value> {
        self.get(&format!("/coins/{}/historical", coin.into()), &())
            .await
    }

    pub async fn coin_influencers<C: Into<AssetId>>(
        &self,
        coin: C,
        request: &InfluencersRequest,
    ) -> Result<Value> {
        self.get(&format!("/coins/{}/influencers", coin.into()), request)
            .await
    }

    /// Anomalies detected by the API for one coin, e.g. a sentiment spike against the 90-day
    /// moving average.
    pub async fn coin_insights<C: Into<AssetId>>(
        &self,
        coin: C,
        request: &InsightsRequest,
    ) -> Result<Value> {
        self.get(&format!("/coins/{}/insights", coin.into()), request)
            .await
    }

    /// Description, links and white paper of one coin.
    pub async fn coin_meta<C: Into<AssetId>>(&self, coin: C) -> Result<Value> {
        self.get(&format!("/coins/{}/meta", coin.into()), &()).await
    }

    /// Metrics of one coin in hourly or daily buckets, capped at 1000 points.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use lunarcrush_client_sdk::types::NaiveDate;
    /// use lunarcrush_client_sdk::v3::{Client, types::request::TimeSeriesRequest};
    ///
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// let client = Client::connect("my-api-key").await?;
    /// let start = NaiveDate::from_ymd_opt(2023, 1, 1)
    ///     .and_then(|d| d.and_hms_opt(0, 0, 0))
    ///     .unwrap();
    ///
    /// let request = TimeSeriesRequest::builder()
    ///     .start(start)
    ///     .bucket("day")
    ///     .data_points(30)
    ///     .build();
    /// let series = client.coin_time_series("ETH", &request).await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn coin_time_series<C: Into<AssetId>>(
        &self,
        coin: C,
        request: &TimeSeriesRequest,
    ) -> Result<Value> {
        self.get(&format!("/coins/{}/time-series", coin.into()), request)
            .await
    }

    /// Aggregated metrics across all coins, including BTC and altcoin dominance.
    pub async fn coins_global(&self) -> Result<Value> {
        self.get("/coins/global", &()).await
    }

    pub async fn coins_global_change(&self, request: &ChangeRequest) -> Result<Value> {
        self.get("/coins/global/change", request).await
    }

    /// Full hourly history of the global coin metrics. Usually over 30 MB.
    pub async fn coins_global_historical(&self) -> Result<Value> {
        self.get("/coins/global/historical", &()).await
    }

    pub async fn coins_global_insights(&self, request: &InsightsRequest) -> Result<Value> {
        self.get("/coins/global/insights", request).await
    }

    pub async fn coins_global_time_series(&self, request: &TimeSeriesRequest) -> Result<Value> {
        self.get("/coins/global/time-series", request).await
    }

    /// Top crypto influencers across all coins.
    pub async fn coins_influencers(&self, request: &InfluencersRequest) -> Result<Value> {
        self.get("/coins/influencers", request).await
    }

    /// Insights across every coin, with volume, market cap and `AltRank` filters.
    pub async fn coins_insights(&self, request: &MarketInsightsRequest) -> Result<Value> {
        self.get("/coins/insights", request).await
    }

    /// All exchanges with global exchange metrics.
    pub async fn exchanges(&self, request: &ExchangesRequest) -> Result<Value> {
        self.get("/exchanges", request).await
    }

    /// Metrics and market pairs for one exchange, by id or lunar id.
    pub async fn exchange<E: Into<AssetId>>(&self, exchange: E) -> Result<Value> {
        self.get(&format!("/exchanges/{}", exchange.into()), &())
            .await
    }

    /// Highly engaged social posts, optionally filtered by asset, market and source.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use lunarcrush_client_sdk::v3::{Client, types::request::FeedsRequest};
    ///
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// let client = Client::connect("my-api-key").await?;
    /// let request = FeedsRequest::builder()
    ///     .sources(["twitter", "news"])
    ///     .symbol("BTC")
    ///     .limit(50)
    ///     .build();
    /// let feeds = client.feeds(&request).await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn feeds(&self, request: &FeedsRequest) -> Result<Value> {
        self.get("/feeds", request).await
    }

    /// One feed post by lunar id, e.g. `tweets-1559564427413729287`.
    pub async fn feed(&self, feed: &str) -> Result<Value> {
        self.get(&format!("/feeds/{feed}"), &()).await
    }

    /// One influencer by numeric id or screen name.
    pub async fn influencer(&self, influencer: &str, request: &InfluencerRequest) -> Result<Value> {
        self.get(&format!("/influencers/{influencer}"), request)
            .await
    }

    /// One insight by id, e.g. `D1l133`.
    pub async fn insight(&self, insight: &str, request: &InsightRequest) -> Result<Value> {
        self.get(&format!("/insights/{insight}"), request).await
    }

    /// Market pairs of one coin across all exchanges.
    pub async fn market_pairs<C: Into<AssetId>>(
        &self,
        coin: C,
        request: &MarketPairsRequest,
    ) -> Result<Value> {
        self.get(&format!("/market-pairs/{}", coin.into()), request)
            .await
    }

    /// The current NFT of the Day: the collection with the best combined NFT Score and `NFTRank`.
    pub async fn nft_of_the_day(&self) -> Result<Value> {
        self.get("/nftoftheday", &()).await
    }

    pub async fn nft_of_the_day_info(&self) -> Result<Value> {
        self.get("/nftoftheday/info", &()).await
    }

    /// Snapshot of the main metrics for every tracked NFT collection.
    pub async fn nfts(&self, request: &ListingRequest) -> Result<Value> {
        self.get("/nfts", request).await
    }

    /// Detailed snapshot of one NFT collection, by numeric id or lunar id.
    ///
    /// Requests `/nfts/{nft}`, the plural path shared by every other NFT endpoint. Older
    /// wrappers of the API used the singular `/nft/{nft}`.
    pub async fn nft<N: Into<AssetId>>(&self, nft: N) -> Result<Value> {
        self.get(&format!("/nfts/{}", nft.into()), &()).await
    }

    pub async fn nft_change<N: Into<AssetId>>(
        &self,
        nft: N,
        request: &ChangeRequest,
    ) -> Result<Value> {
        self.get(&format!("/nfts/{}/change", nft.into()), request)
            .await
    }

    /// Full hourly history of one collection up to the last completed day. Usually over 10 MB.
    pub async fn nft_historical<N: Into<AssetId>>(&self, nft: N) -> Result<Value> {
        self.get(&format!("/nfts/{}/historical", nft.into()), &())
            .await
    }

    pub async fn nft_influencers<N: Into<AssetId>>(
        &self,
        nft: N,
        request: &InfluencersRequest,
    ) -> Result<Value> {
        self.get(&format!("/nfts/{}/influencers", nft.into()), request)
            .await
    }

    pub async fn nft_insights<N: Into<AssetId>>(
        &self,
        nft: N,
        request: &InsightsRequest,
    ) -> Result<Value> {
        self.get(&format!("/nfts/{}/insights", nft.into()), request)
            .await
    }

    pub async fn nft_time_series<N: Into<AssetId>>(
        &self,
        nft: N,
        request: &TimeSeriesRequest,
    ) -> Result<Value> {
        self.get(&format!("/nfts/{}/time-series", nft.into()), request)
            .await
    }

    /// Every token of one collection with its last sale.
    pub async fn nft_tokens<N: Into<AssetId>>(
        &self,
        nft: N,
        request: &NftTokensRequest,
    ) -> Result<Value> {
        self.get(&format!("/nfts/{}/tokens", nft.into()), request)
            .await
    }

    pub async fn nfts_global(&self) -> Result<Value> {
        self.get("/nfts/global", &()).await
    }

    pub async fn nfts_global_change(&self, request: &ChangeRequest) -> Result<Value> {
        self.get("/nfts/global/change", request).await
    }

    /// Full hourly history of the global NFT metrics. Usually over 10 MB.
    pub async fn nfts_global_historical(&self) -> Result<Value> {
        self.get("/nfts/global/historical", &()).await
    }

    pub async fn nfts_global_insights(&self, request: &InsightsRequest) -> Result<Value> {
        self.get("/nfts/global/insights", request).await
    }

    pub async fn nfts_global_time_series(&self, request: &TimeSeriesRequest) -> Result<Value> {
        self.get("/nfts/global/time-series", request).await
    }

    pub async fn nfts_influencers(&self, request: &InfluencersRequest) -> Result<Value> {
        self.get("/nfts/influencers", request).await
    }

    pub async fn nfts_insights(&self, request: &MarketInsightsRequest) -> Result<Value> {
        self.get("/nfts/insights", request).await
    }

    /// Index of community opinions on coins, collections, influencers and posts.
    pub async fn opinions(&self, request: &OpinionsRequest) -> Result<Value> {
        self.get("/opinions", request).await
    }

    pub async fn opinions_summary(&self) -> Result<Value> {
        self.get("/opinions/summary", &()).await
    }

    /// Sparks for one `{context_type}-{context_id}` identifier, e.g.
    /// `feeds-twitter-1544881801687994369`.
    pub async fn spark(&self, spark_id: &str) -> Result<Value> {
        self.get(&format!("/sparks/{spark_id}"), &()).await
    }

    pub async fn stats_lunrfi(&self) -> Result<Value> {
        self.get("/stats/lunrfi", &()).await
    }

    /// Top words, emoji or hashtags in influential content.
    pub async fn top_mentions(&self, request: &TopMentionsRequest) -> Result<Value> {
        self.get("/top-mentions", request).await
    }
}
