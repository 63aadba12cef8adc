//! Query parameter encoding and URL construction.
//!
//! Every endpoint turns its inputs into a list of raw parameters, either a [`Param`] list or a
//! request type through [`ToParams`]. Before the request goes out the list is run through
//! [`encode_params`], which flattens each value into the string form the API expects, and then
//! through [`build_url`].

use chrono::{FixedOffset, Local, LocalResult, NaiveDateTime, Offset, TimeDelta, TimeZone};
use serde::Serialize;
use serde_json::Value;
use url::Url;

use crate::Result;

/// A raw query parameter. `None` values are dropped by [`encode_params`].
pub type Param = (&'static str, Option<ParamValue>);

/// A single query parameter value before encoding.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq)]
pub enum ParamValue {
    /// Joined with `,`.
    List(Vec<String>),
    /// Wall-clock time in the local time zone, sent as a unix timestamp.
    DateTime(NaiveDateTime),
    /// Sent as `1` or `0`.
    Bool(bool),
    Text(String),
    Int(i64),
    UInt(u64),
    Float(f64),
}

impl ParamValue {
    /// Returns the string sent on the wire for this value.
    #[must_use]
    pub fn encode(&self) -> String {
        match self {
            ParamValue::List(values) => values.join(","),
            ParamValue::DateTime(dt) => local_timestamp(dt).to_string(),
            ParamValue::Bool(b) => u8::from(*b).to_string(),
            ParamValue::Text(s) => s.clone(),
            ParamValue::Int(i) => i.to_string(),
            ParamValue::UInt(i) => i.to_string(),
            ParamValue::Float(f) => f.to_string(),
        }
    }

    fn from_json(value: Value) -> Option<Self> {
        match value {
            Value::Null => None,
            Value::Bool(b) => Some(ParamValue::Bool(b)),
            Value::Number(n) => Some(if let Some(u) = n.as_u64() {
                ParamValue::UInt(u)
            } else if let Some(i) = n.as_i64() {
                ParamValue::Int(i)
            } else {
                ParamValue::Float(n.as_f64().unwrap_or(f64::NAN))
            }),
            Value::String(s) => Some(ParamValue::Text(s)),
            Value::Array(items) => Some(ParamValue::List(
                items
                    .into_iter()
                    .map(|item| match item {
                        Value::String(s) => s,
                        other => other.to_string(),
                    })
                    .collect(),
            )),
            object @ Value::Object(_) => Some(ParamValue::Text(object.to_string())),
        }
    }
}

impl From<Vec<String>> for ParamValue {
    fn from(values: Vec<String>) -> Self {
        ParamValue::List(values)
    }
}

impl From<&[&str]> for ParamValue {
    fn from(values: &[&str]) -> Self {
        ParamValue::List(values.iter().map(|v| (*v).to_owned()).collect())
    }
}

impl From<NaiveDateTime> for ParamValue {
    fn from(dt: NaiveDateTime) -> Self {
        ParamValue::DateTime(dt)
    }
}

impl From<bool> for ParamValue {
    fn from(b: bool) -> Self {
        ParamValue::Bool(b)
    }
}

impl From<String> for ParamValue {
    fn from(s: String) -> Self {
        ParamValue::Text(s)
    }
}

impl From<&str> for ParamValue {
    fn from(s: &str) -> Self {
        ParamValue::Text(s.to_owned())
    }
}

impl From<&String> for ParamValue {
    fn from(s: &String) -> Self {
        ParamValue::Text(s.clone())
    }
}

impl From<i64> for ParamValue {
    fn from(i: i64) -> Self {
        ParamValue::Int(i)
    }
}

impl From<u32> for ParamValue {
    fn from(i: u32) -> Self {
        ParamValue::UInt(u64::from(i))
    }
}

impl From<u64> for ParamValue {
    fn from(i: u64) -> Self {
        ParamValue::UInt(i)
    }
}

impl From<f64> for ParamValue {
    fn from(f: f64) -> Self {
        ParamValue::Float(f)
    }
}

/// Converts a request type into the raw parameters for its endpoint.
///
/// Implemented for every [`Serialize`] type. Each serialized field becomes one parameter named
/// after the field: `null` is absent, arrays become [`ParamValue::List`] and booleans
/// [`ParamValue::Bool`]. Numbers and strings pass through. Parameters come out in field name
/// order, and a value that does not serialize to a map, such as `()`, has none.
pub trait ToParams: Serialize {
    /// # Errors
    ///
    /// Returns an error if the value cannot be serialized.
    fn params(&self) -> Result<Vec<(String, Option<ParamValue>)>> {
        let Value::Object(fields) = serde_json::to_value(self)? else {
            return Ok(Vec::new());
        };

        Ok(fields
            .into_iter()
            .map(|(name, value)| (name, ParamValue::from_json(value)))
            .collect())
    }
}

impl<T: Serialize> ToParams for T {}

/// Encodes raw parameters into name/value string pairs, preserving their order.
///
/// Absent values are dropped. Each present value is encoded by exactly one rule, see
/// [`ParamValue::encode`].
#[must_use]
#[expect(
    clippy::module_name_repetitions,
    reason = "encode_params reads better than encode at call sites"
)]
pub fn encode_params<I, N>(params: I) -> Vec<(String, String)>
where
    I: IntoIterator<Item = (N, Option<ParamValue>)>,
    N: Into<String>,
{
    params
        .into_iter()
        .filter_map(|(name, value)| value.map(|v| (name.into(), v.encode())))
        .collect()
}

/// Builds `base + endpoint`, followed by `?query` when `params` is non-empty.
pub fn build_url(base: &str, endpoint: &str, params: &[(String, String)]) -> Result<Url> {
    let mut url = format!("{base}{endpoint}");

    if !params.is_empty() {
        let query = url::form_urlencoded::Serializer::new(String::new())
            .extend_pairs(params)
            .finish();
        url.push('?');
        url.push_str(&query);
    }

    Ok(Url::parse(&url)?)
}

/// Unix timestamp of a wall-clock value read in the local time zone, the way C `mktime` reads it.
///
/// A time that occurs twice, when clocks go back, is read with the lower UTC offset, i.e. as
/// standard time. A time skipped when clocks go forward is read with the offset in force just
/// before the gap, which lands it after the gap.
#[must_use]
pub fn local_timestamp(dt: &NaiveDateTime) -> i64 {
    timestamp_in(&Local, dt)
}

/// Every zone offset in use is a multiple of this.
const GAP_STEP: TimeDelta = TimeDelta::minutes(15);
/// The longest skipped interval on record is a whole day.
const MAX_GAP_STEPS: i32 = 25 * 4;

fn timestamp_in<Tz: TimeZone>(tz: &Tz, dt: &NaiveDateTime) -> i64 {
    let offset = resolve(tz.offset_from_local_datetime(dt)).unwrap_or_else(|| {
        (1..=MAX_GAP_STEPS)
            .find_map(|step| resolve(tz.offset_from_local_datetime(&(*dt - GAP_STEP * step))))
            .unwrap_or_else(|| tz.offset_from_utc_datetime(dt).fix())
    });

    dt.and_utc().timestamp() - i64::from(offset.local_minus_utc())
}

fn resolve<O: Offset>(result: LocalResult<O>) -> Option<FixedOffset> {
    match result {
        LocalResult::Single(offset) => Some(offset.fix()),
        LocalResult::Ambiguous(a, b) => {
            let (a, b) = (a.fix(), b.fix());
            Some(if a.local_minus_utc() <= b.local_minus_utc() {
                a
            } else {
                b
            })
        }
        LocalResult::None => None,
    }
}
