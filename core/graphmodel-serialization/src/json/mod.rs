//! JSON implementation of the wire layer, backed by `serde_json`.

mod parse_node;
mod writer;

pub use parse_node::JsonParseNode;
pub use writer::JsonSerializationWriter;

use crate::decode::{object_value, typed_object_value};
use crate::{JsonConfig, Parsable, ParsableFactory};
use graphmodel_types::{Error, Result};
use serde_json::Value;

/// An owned, parsed JSON payload.
#[derive(Debug, Clone)]
pub struct JsonDocument {
    value: Value,
    config: JsonConfig,
}

impl JsonDocument {
    /// Parses raw bytes. Malformed JSON is a [`Error::Serialization`].
    pub fn from_slice(bytes: &[u8], config: JsonConfig) -> Result<Self> {
        let value = serde_json::from_slice(bytes)?;
        Ok(Self { value, config })
    }

    pub fn from_value(value: Value, config: JsonConfig) -> Self {
        Self { value, config }
    }

    /// Parse node over the whole document.
    pub fn root(&self) -> JsonParseNode<'_> {
        JsonParseNode::new(&self.value, &self.config)
    }

    pub fn value(&self) -> &Value {
        &self.value
    }

    pub fn config(&self) -> &JsonConfig {
        &self.config
    }
}

/// Decodes a JSON payload through a family factory. A `null` payload yields
/// `Ok(None)`.
pub fn decode_json(bytes: &[u8], config: &JsonConfig, factory: ParsableFactory) -> Result<Option<Box<dyn Parsable>>> {
    let document = JsonDocument::from_slice(bytes, config.clone())?;
    object_value(&document.root(), factory)
}

/// Decodes a JSON payload into one concrete type.
pub fn decode_json_as<T: Parsable>(bytes: &[u8], config: &JsonConfig, factory: ParsableFactory) -> Result<Option<Box<T>>> {
    let document = JsonDocument::from_slice(bytes, config.clone())?;
    typed_object_value::<T>(&document.root(), factory)
}

/// Serializes a model into a JSON value tree.
pub fn encode_json_value(value: &dyn Parsable) -> Result<Value> {
    let mut writer = JsonSerializationWriter::new();
    value.serialize(&mut writer)?;
    Ok(writer.into_value())
}

/// Serializes a model into JSON bytes, indented when `config.pretty` is set.
pub fn encode_json(value: &dyn Parsable, config: &JsonConfig) -> Result<Vec<u8>> {
    let tree = encode_json_value(value)?;
    let bytes = if config.pretty {
        serde_json::to_vec_pretty(&tree)
    } else {
        serde_json::to_vec(&tree)
    };
    bytes.map_err(Error::from)
}
