use bon::Builder;
use secrecy::SecretString;

use crate::error::Error;
use crate::{API_KEY_VAR, Result};

/// Connection settings shared by every versioned client: where to send requests and which
/// bearer token to send with them.
///
/// # Example
///
/// ```
/// use lunarcrush_client_sdk::Config;
///
/// let config = Config::builder()
///     .base_url("https://lunarcrush.com/api3")
///     .api_key("my-key")
///     .build();
///
/// assert_eq!(config.base_url(), "https://lunarcrush.com/api3");
/// ```
#[non_exhaustive]
#[derive(Clone, Debug, Builder)]
pub struct Config {
    /// API root without a trailing slash, e.g. `https://lunarcrush.com/api3`.
    #[builder(with = |url: impl Into<String>| trim_base(url.into()))]
    base_url: String,
    #[builder(with = |key: impl Into<String>| SecretString::from(Into::<String>::into(key)))]
    api_key: SecretString,
}

impl Config {
    /// Reads the API key from the `LUNARCRUSH_API_KEY` environment variable.
    ///
    /// # Errors
    ///
    /// Returns an error if the variable is unset or empty.
    pub fn from_env(base_url: &str) -> Result<Self> {
        match std::env::var(API_KEY_VAR) {
            Ok(key) if !key.is_empty() => {
                Ok(Config::builder().base_url(base_url).api_key(key).build())
            }
            _ => Err(Error::missing_api_key(API_KEY_VAR)),
        }
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    #[must_use]
    pub fn api_key(&self) -> &SecretString {
        &self.api_key
    }
}

fn trim_base(mut url: String) -> String {
    while url.ends_with('/') {
        url.pop();
    }
    url
}

#[cfg(test)]
mod tests {
    use secrecy::ExposeSecret as _;

    use super::*;

    #[test]
    fn trailing_slash_should_be_trimmed() {
        let config = Config::builder()
            .base_url("http://127.0.0.1:8080/")
            .api_key("key")
            .build();

        assert_eq!(config.base_url(), "http://127.0.0.1:8080");
        assert_eq!(config.api_key().expose_secret(), "key");
    }

    #[test]
    fn debug_should_not_leak_api_key() {
        let config = Config::builder()
            .base_url("https://lunarcrush.com/api3")
            .api_key("super-secret")
            .build();

        assert!(
            !format!("{config:?}").contains("super-secret"),
            "api key must be redacted"
        );
    }
}
