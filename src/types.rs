//! Shared types and re-exports from external crates.

use std::fmt;

/// Wall-clock date and time, used for `start` parameters of time-series endpoints.
pub use chrono::{NaiveDate, NaiveDateTime};
/// Generic JSON value returned by every endpoint.
pub use serde_json::Value;

/// Identifies a coin, NFT collection or exchange in a URL path.
///
/// The API accepts either the numeric id or a symbol / lunar id, e.g. `BTC` or
/// `cryptopunks`.
///
/// # Example
///
/// ```
/// use lunarcrush_client_sdk::types::AssetId;
///
/// assert_eq!(AssetId::from(1_u64).to_string(), "1");
/// assert_eq!(AssetId::from("BTC").to_string(), "BTC");
/// ```
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AssetId {
    Id(u64),
    Symbol(String),
}

impl fmt::Display for AssetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssetId::Id(id) => write!(f, "{id}"),
            AssetId::Symbol(symbol) => f.write_str(symbol),
        }
    }
}

impl From<u64> for AssetId {
    fn from(id: u64) -> Self {
        AssetId::Id(id)
    }
}

impl From<u32> for AssetId {
    fn from(id: u32) -> Self {
        AssetId::Id(u64::from(id))
    }
}

impl From<&str> for AssetId {
    fn from(symbol: &str) -> Self {
        AssetId::Symbol(symbol.to_owned())
    }
}

impl From<String> for AssetId {
    fn from(symbol: String) -> Self {
        AssetId::Symbol(symbol)
    }
}

impl From<&String> for AssetId {
    fn from(symbol: &String) -> Self {
        AssetId::Symbol(symbol.clone())
    }
}
