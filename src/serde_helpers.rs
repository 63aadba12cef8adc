//! Serde helpers for flexible deserialization and query encoding.

use std::fmt;

use chrono::NaiveDateTime;
use serde::Serializer;
use serde::de::{self, Visitor};

use crate::params::local_timestamp;

/// A `serde_as` type that serializes a local wall-clock time as its unix timestamp.
///
/// Use with `#[serde_as(as = "Option<LocalTimestamp>")]` on request fields.
pub struct LocalTimestamp;

impl serde_with::SerializeAs<NaiveDateTime> for LocalTimestamp {
    fn serialize_as<S>(source: &NaiveDateTime, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_i64(local_timestamp(source))
    }
}

/// A `serde_as` type that deserializes strings or numbers as `String`.
///
/// Use with `#[serde_as(as = "Option<StringFromAny>")]` for `Option<String>` fields.
pub struct StringFromAny;

impl<'de> serde_with::DeserializeAs<'de, String> for StringFromAny {
    fn deserialize_as<D>(deserializer: D) -> std::result::Result<String, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct StringOrNumberVisitor;

        impl Visitor<'_> for StringOrNumberVisitor {
            type Value = String;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("string or number")
            }

            fn visit_str<E>(self, v: &str) -> std::result::Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(v.to_owned())
            }

            fn visit_string<E>(self, v: String) -> std::result::Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(v)
            }

            fn visit_i64<E>(self, v: i64) -> std::result::Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(v.to_string())
            }

            fn visit_u64<E>(self, v: u64) -> std::result::Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(v.to_string())
            }

            fn visit_f64<E>(self, v: f64) -> std::result::Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(v.to_string())
            }
        }

        deserializer.deserialize_any(StringOrNumberVisitor)
    }
}
