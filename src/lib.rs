#![cfg_attr(doc, doc = include_str!("../README.md"))]

pub mod config;
pub mod error;
pub mod params;
#[cfg(feature = "v3")]
pub(crate) mod serde_helpers;
pub mod transport;
pub mod types;
#[cfg(feature = "v3")]
pub mod v3;

pub use config::Config;
pub use transport::{HttpTransport, Transport};

use crate::error::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Environment variable read by [`Config::from_env`].
pub const API_KEY_VAR: &str = "LUNARCRUSH_API_KEY";
