use std::collections::HashMap;

pub mod request;
pub mod response;

use response::ListingEntry;

/// Returned by the id lookups when a key is not in the table.
pub const MISSING_ID: &str = "None";

/// Symbol → id and name → id tables built from the list endpoints.
///
/// Built once when a [`Client`](super::Client) is initialized and never refreshed. Create a new
/// client to pick up newly listed assets.
///
/// # Example
///
/// ```
/// use lunarcrush_client_sdk::v3::types::IdTables;
///
/// let tables = IdTables::builder()
///     .coin("BTC", "1")
///     .nft("CryptoPunks", "7")
///     .build();
///
/// assert_eq!(tables.coin_id("BTC"), "1");
/// assert_eq!(tables.nft_id("Azuki"), "None");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IdTables {
    coins: HashMap<String, String>,
    nfts: HashMap<String, String>,
}

impl IdTables {
    #[must_use]
    pub fn builder() -> IdTablesBuilder {
        IdTablesBuilder::default()
    }

    /// Builds the tables from the `data` rows of `/coins/list` and `/nfts/list`.
    ///
    /// Coins are keyed by `symbol`, NFTs by `name`. Rows without a key are skipped; later rows
    /// overwrite earlier ones with the same key.
    #[must_use]
    pub fn from_listings(coins: Vec<ListingEntry>, nfts: Vec<ListingEntry>) -> Self {
        let coins = coins
            .into_iter()
            .filter_map(|entry| Some((entry.symbol?, stringify_id(entry.id))))
            .collect();
        let nfts = nfts
            .into_iter()
            .filter_map(|entry| Some((entry.name?, stringify_id(entry.id))))
            .collect();

        Self { coins, nfts }
    }

    /// Id of the coin with `symbol`, or `"None"` when unknown.
    #[must_use]
    pub fn coin_id(&self, symbol: &str) -> String {
        lookup(&self.coins, symbol)
    }

    /// Id of the NFT collection called `name`, or `"None"` when unknown.
    #[must_use]
    pub fn nft_id(&self, name: &str) -> String {
        lookup(&self.nfts, name)
    }

    #[must_use]
    pub fn coins(&self) -> &HashMap<String, String> {
        &self.coins
    }

    #[must_use]
    pub fn nfts(&self) -> &HashMap<String, String> {
        &self.nfts
    }
}

fn stringify_id(id: Option<String>) -> String {
    id.unwrap_or_else(|| MISSING_ID.to_owned())
}

fn lookup(table: &HashMap<String, String>, key: &str) -> String {
    table
        .get(key)
        .cloned()
        .unwrap_or_else(|| MISSING_ID.to_owned())
}

/// Assembles [`IdTables`] by hand, e.g. from a cached copy of the listings.
#[derive(Debug, Default)]
pub struct IdTablesBuilder {
    tables: IdTables,
}

impl IdTablesBuilder {
    #[must_use]
    pub fn coin<S: Into<String>, I: Into<String>>(mut self, symbol: S, id: I) -> Self {
        self.tables.coins.insert(symbol.into(), id.into());
        self
    }

    #[must_use]
    pub fn nft<S: Into<String>, I: Into<String>>(mut self, name: S, id: I) -> Self {
        self.tables.nfts.insert(name.into(), id.into());
        self
    }

    #[must_use]
    pub fn build(self) -> IdTables {
        self.tables
    }
}
