#![allow(
    dead_code,
    reason = "Each test binary uses a different subset of these helpers"
)]

use std::collections::HashMap;
use std::io;
use std::sync::Mutex;

use async_trait::async_trait;
use lunarcrush_client_sdk::error::{Error, Kind};
use lunarcrush_client_sdk::{Config, Result, Transport};
use reqwest::header::HeaderMap;
use serde_json::{Value, json};
use url::Url;

pub const API_KEY: &str = "test-key";
pub const BEARER: &str = "Bearer test-key";

#[must_use]
pub fn config(base_url: &str) -> Config {
    Config::builder().base_url(base_url).api_key(API_KEY).build()
}

#[must_use]
pub fn coins_list() -> Value {
    json!({
        "data": [
            { "id": 1, "symbol": "BTC", "name": "Bitcoin", "logo": "https://example.com/btc.png" },
            { "id": 2, "symbol": "ETH", "name": "Ethereum", "logo": "https://example.com/eth.png" }
        ]
    })
}

#[must_use]
pub fn nfts_list() -> Value {
    json!({
        "data": [
            { "id": 7, "name": "CryptoPunks", "lunar_id": "cryptopunks" },
            { "id": 9, "name": "Azuki", "lunar_id": "azuki" }
        ]
    })
}

/// A request seen by [`RecordingTransport`].
#[derive(Debug, Clone)]
pub struct Recorded {
    pub url: Url,
    pub headers: HeaderMap,
}

/// In-memory [`Transport`] that answers by path and remembers every request.
#[derive(Debug, Default)]
pub struct RecordingTransport {
    responses: HashMap<String, Value>,
    failures: Vec<String>,
    requests: Mutex<Vec<Recorded>>,
}

impl RecordingTransport {
    /// Answers both list endpoints with [`coins_list`] and [`nfts_list`].
    #[must_use]
    pub fn with_listings() -> Self {
        Self::default()
            .respond("/coins/list", coins_list())
            .respond("/nfts/list", nfts_list())
    }

    #[must_use]
    pub fn respond(mut self, path: &str, body: Value) -> Self {
        self.responses.insert(path.to_owned(), body);
        self
    }

    #[must_use]
    pub fn fail(mut self, path: &str) -> Self {
        self.failures.push(path.to_owned());
        self
    }

    #[must_use]
    pub fn requests(&self) -> Vec<Recorded> {
        self.requests.lock().unwrap().clone()
    }

    #[must_use]
    pub fn paths(&self) -> Vec<String> {
        self.requests()
            .iter()
            .map(|r| r.url.path().to_owned())
            .collect()
    }
}

#[async_trait]
impl Transport for RecordingTransport {
    async fn get(&self, url: Url, headers: HeaderMap) -> Result<Value> {
        let path = url.path().to_owned();
        self.requests.lock().unwrap().push(Recorded { url, headers });

        if self.failures.contains(&path) {
            return Err(Error::with_source(
                Kind::Transport,
                io::Error::new(io::ErrorKind::ConnectionRefused, "connection refused"),
            ));
        }

        Ok(self.responses.get(&path).cloned().unwrap_or(Value::Null))
    }
}
