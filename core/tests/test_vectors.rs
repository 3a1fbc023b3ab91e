//! Verify the encoder and serializer against JSON vectors in `test-vectors/`.
//!
//! Each vector file is a flat list of named cases, so new cases can be added
//! without touching test code.

use chrono::{DateTime, Utc};
use request_core::params::{self, ParamValue, Params};
use request_core::{percent_decode, percent_encode};

#[test]
fn encoding_test_vectors() {
    let raw = include_str!("../../test-vectors/encoding.json");
    let vectors: serde_json::Value = serde_json::from_str(raw).unwrap();

    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let input = case["input"].as_str().unwrap();
        let encoded = case["encoded"].as_str().unwrap();

        assert_eq!(percent_encode(input), encoded, "{name}: encode");
        assert_eq!(percent_decode(encoded), input, "{name}: decode");
    }
}

/// Build a `ParamValue` from a vector entry's kind tag and textual value.
fn parse_value(kind: &str, value: &str) -> ParamValue {
    match kind {
        "text" => ParamValue::from(value),
        "integer" => ParamValue::Integer(value.parse().unwrap()),
        "float" => ParamValue::Float(value.parse().unwrap()),
        "bool" => ParamValue::Bool(value.parse().unwrap()),
        "timestamp" => ParamValue::Timestamp(
            DateTime::parse_from_rfc3339(value)
                .unwrap()
                .with_timezone(&Utc),
        ),
        other => panic!("unknown kind: {other}"),
    }
}

#[test]
fn serialize_test_vectors() {
    let raw = include_str!("../../test-vectors/serialize.json");
    let vectors: serde_json::Value = serde_json::from_str(raw).unwrap();

    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let expected = case["expected"].as_str().unwrap();

        let mut p = Params::new();
        for entry in case["params"].as_array().unwrap() {
            let entry = entry.as_array().unwrap();
            let key = entry[0].as_str().unwrap().to_string();
            let kind = entry[1].as_str().unwrap();
            let value = entry[2].as_str().unwrap();
            p.insert(key, parse_value(kind, value));
        }

        assert_eq!(params::serialize(&p), expected, "{name}");
    }
}
