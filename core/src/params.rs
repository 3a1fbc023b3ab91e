//! Form/query parameter values and their wire serialization.
//!
//! # Design
//! `ParamValue` is a closed set of value kinds instead of an untyped "any"
//! map, so every value has exactly one textual rendering and serialization
//! output is deterministic. Timestamps render as RFC 3339 with seconds
//! precision and a `Z` suffix. Pairs serialize in ascending key order
//! (the `BTreeMap` order) — a documented guarantee, not an accident of map
//! iteration.

use std::collections::BTreeMap;
use std::fmt;

use chrono::{DateTime, SecondsFormat, Utc};

use crate::encode::percent_encode;

/// A key-ordered parameter mapping for query strings and form bodies.
pub type Params = BTreeMap<String, ParamValue>;

/// A single parameter value.
///
/// Non-finite floats render through `f64`'s `Display` form: `NaN`, `inf`,
/// and `-inf`. Servers expecting numeric values usually reject these, so
/// prefer finite values.
#[derive(Debug, Clone, PartialEq)]
pub enum ParamValue {
    Text(String),
    Integer(i64),
    Float(f64),
    Bool(bool),
    Timestamp(DateTime<Utc>),
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamValue::Text(s) => f.write_str(s),
            ParamValue::Integer(n) => write!(f, "{n}"),
            ParamValue::Float(x) => write!(f, "{x}"),
            ParamValue::Bool(b) => write!(f, "{b}"),
            ParamValue::Timestamp(t) => {
                f.write_str(&t.to_rfc3339_opts(SecondsFormat::Secs, true))
            }
        }
    }
}

impl From<&str> for ParamValue {
    fn from(s: &str) -> Self {
        ParamValue::Text(s.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(s: String) -> Self {
        ParamValue::Text(s)
    }
}

impl From<i64> for ParamValue {
    fn from(n: i64) -> Self {
        ParamValue::Integer(n)
    }
}

impl From<f64> for ParamValue {
    fn from(x: f64) -> Self {
        ParamValue::Float(x)
    }
}

impl From<bool> for ParamValue {
    fn from(b: bool) -> Self {
        ParamValue::Bool(b)
    }
}

impl From<DateTime<Utc>> for ParamValue {
    fn from(t: DateTime<Utc>) -> Self {
        ParamValue::Timestamp(t)
    }
}

/// Serialize the mapping as `k1=v1&k2=v2&...`, percent-encoding each key and
/// rendered value. An empty mapping serializes to the empty string.
pub fn serialize(params: &Params) -> String {
    let mut pairs = Vec::with_capacity(params.len());
    for (key, value) in params {
        pairs.push(format!(
            "{}={}",
            percent_encode(key),
            percent_encode(&value.to_string())
        ));
    }
    pairs.join("&")
}
