#![allow(dead_code)]

use graphmodel_serialization::{
    decode_json, encode_json_value, JsonConfig, Parsable, ParsableFactory, Result,
};

/// Decodes a JSON value through `factory`.
pub fn decode_with(factory: ParsableFactory, json: serde_json::Value) -> Result<Option<Box<dyn Parsable>>> {
    let bytes = serde_json::to_vec(&json).expect("serialize test payload");
    decode_json(&bytes, &JsonConfig::default(), factory)
}

/// Decodes a non-null JSON value through `factory`, panicking on error.
pub fn decode_ok(factory: ParsableFactory, json: serde_json::Value) -> Box<dyn Parsable> {
    decode_with(factory, json).expect("decode").expect("non-null payload")
}

/// Re-encodes a decoded instance into a JSON value.
pub fn reencode(value: &dyn Parsable) -> serde_json::Value {
    encode_json_value(value).expect("encode")
}
