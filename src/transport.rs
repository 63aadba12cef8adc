//! The HTTP seam used by every versioned client.
//!
//! A [`Transport`] performs one GET and hands back the decoded JSON body. [`HttpTransport`] is the
//! `reqwest` implementation; tests can swap in their own.

use async_trait::async_trait;
use reqwest::{
    Client as ReqwestClient, Method,
    header::{HeaderMap, HeaderValue},
};
use serde_json::Value;
use url::Url;

use crate::Result;

#[async_trait]
pub trait Transport: Send + Sync {
    /// Issues a single GET to `url` with `headers` and decodes the body as JSON.
    ///
    /// The status code is not inspected: an error body that is valid JSON is returned as-is.
    async fn get(&self, url: Url, headers: HeaderMap) -> Result<Value>;
}

/// [`Transport`] backed by a [`reqwest::Client`].
#[derive(Clone, Debug)]
#[expect(
    clippy::module_name_repetitions,
    reason = "HttpTransport is re-exported at the crate root"
)]
pub struct HttpTransport {
    client: ReqwestClient,
}

impl HttpTransport {
    /// Creates a transport with the default headers sent on every request.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new() -> Result<Self> {
        let mut headers = HeaderMap::new();

        headers.insert(
            "User-Agent",
            HeaderValue::from_static("lunarcrush_client_sdk"),
        );
        headers.insert("Accept", HeaderValue::from_static("application/json"));
        headers.insert("Connection", HeaderValue::from_static("keep-alive"));
        let client = ReqwestClient::builder().default_headers(headers).build()?;

        Ok(Self { client })
    }

    /// Wraps an existing [`reqwest::Client`], e.g. one configured with a proxy or timeout.
    #[must_use]
    pub fn with_client(client: ReqwestClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Transport for HttpTransport {
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            level = "debug",
            skip(self, url, headers),
            fields(method = %Method::GET, path = url.path(), status_code)
        )
    )]
    async fn get(&self, url: Url, headers: HeaderMap) -> Result<Value> {
        let request = self
            .client
            .request(Method::GET, url)
            .headers(headers)
            .build()?;

        let response = self.client.execute(request).await?;

        #[cfg(feature = "tracing")]
        {
            let status_code = response.status();
            tracing::Span::current().record("status_code", status_code.as_u16());
            if !status_code.is_success() {
                tracing::warn!(status = %status_code, "API returned a non-success status");
            }
        }

        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}
