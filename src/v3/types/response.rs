use serde::Deserialize;
use serde_with::serde_as;

use crate::serde_helpers::StringFromAny;

/// Body of `/coins/list` and `/nfts/list`, reduced to what the id lookup needs.
///
/// A body without a `data` array fails to deserialize.
#[non_exhaustive]
#[derive(Debug, Clone, Deserialize)]
pub struct Listing {
    pub data: Vec<ListingEntry>,
}

/// One row of a listing. Every other field the API sends is ignored.
#[serde_as]
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ListingEntry {
    #[serde_as(as = "Option<StringFromAny>")]
    #[serde(default)]
    pub id: Option<String>,
    /// Coin ticker; only present on coin listings.
    #[serde(default)]
    pub symbol: Option<String>,
    /// Collection name; the key NFTs are looked up by.
    #[serde(default)]
    pub name: Option<String>,
}
