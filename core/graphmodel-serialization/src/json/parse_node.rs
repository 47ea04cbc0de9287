use crate::{JsonConfig, ParseNode};
use chrono::{DateTime, FixedOffset, NaiveDateTime};
use graphmodel_types::{DecodeError, Error, Result, UntypedValue};
use serde_json::Value;
use std::collections::BTreeMap;

/// [`ParseNode`] over a borrowed `serde_json::Value`.
#[derive(Debug, Clone, Copy)]
pub struct JsonParseNode<'a> {
    value: &'a Value,
    config: &'a JsonConfig,
    depth: usize,
}

impl<'a> JsonParseNode<'a> {
    /// A root node (depth 0).
    pub fn new(value: &'a Value, config: &'a JsonConfig) -> Self {
        Self {
            value,
            config,
            depth: 0,
        }
    }

    pub fn value(&self) -> &'a Value {
        self.value
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    fn descend(&self, value: &'a Value) -> Result<JsonParseNode<'a>> {
        let depth = self.depth + 1;
        if depth > self.config.max_depth {
            return Err(DecodeError::DepthExceeded {
                limit: self.config.max_depth,
            }
            .into());
        }
        Ok(Self {
            value,
            config: self.config,
            depth,
        })
    }

    fn mismatch(&self, expected: &'static str) -> Error {
        DecodeError::TypeMismatch {
            expected,
            found: kind_of(self.value),
        }
        .into()
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(n) if n.is_f64() => "float",
        Value::Number(_) => "integer",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

impl ParseNode for JsonParseNode<'_> {
    fn kind(&self) -> &'static str {
        kind_of(self.value)
    }

    fn is_null(&self) -> bool {
        self.value.is_null()
    }

    fn child_node(&self, name: &str) -> Result<Option<Box<dyn ParseNode + '_>>> {
        let Value::Object(map) = self.value else {
            return Ok(None);
        };
        match map.get(name) {
            Some(child) => Ok(Some(Box::new(self.descend(child)?))),
            None => Ok(None),
        }
    }

    fn object_fields(&self) -> Result<Vec<(String, Box<dyn ParseNode + '_>)>> {
        match self.value {
            Value::Object(map) => {
                let mut fields = Vec::with_capacity(map.len());
                for (name, child) in map {
                    let node: Box<dyn ParseNode + '_> = Box::new(self.descend(child)?);
                    fields.push((name.clone(), node));
                }
                Ok(fields)
            }
            Value::Null => Ok(Vec::new()),
            _ => Err(self.mismatch("object")),
        }
    }

    fn collection_nodes(&self) -> Result<Option<Vec<Box<dyn ParseNode + '_>>>> {
        match self.value {
            Value::Array(items) => {
                let mut nodes = Vec::with_capacity(items.len());
                for item in items {
                    let node: Box<dyn ParseNode + '_> = Box::new(self.descend(item)?);
                    nodes.push(node);
                }
                Ok(Some(nodes))
            }
            Value::Null => Ok(None),
            _ => Err(self.mismatch("array")),
        }
    }

    fn get_string_value(&self) -> Result<Option<String>> {
        match self.value {
            Value::String(s) => Ok(Some(s.clone())),
            Value::Null => Ok(None),
            _ => Err(self.mismatch("string")),
        }
    }

    fn get_bool_value(&self) -> Result<Option<bool>> {
        match self.value {
            Value::Bool(b) => Ok(Some(*b)),
            Value::Null => Ok(None),
            _ => Err(self.mismatch("bool")),
        }
    }

    fn get_i32_value(&self) -> Result<Option<i32>> {
        let Some(wide) = self.get_i64_value()? else {
            return Ok(None);
        };
        i32::try_from(wide).map(Some).map_err(|_| {
            DecodeError::OutOfRange {
                kind: "i32",
                value: wide.to_string(),
            }
            .into()
        })
    }

    fn get_i64_value(&self) -> Result<Option<i64>> {
        match self.value {
            Value::Number(n) => match n.as_i64() {
                Some(i) => Ok(Some(i)),
                None if n.is_u64() => Err(DecodeError::OutOfRange {
                    kind: "i64",
                    value: n.to_string(),
                }
                .into()),
                None => Err(self.mismatch("integer")),
            },
            Value::Null => Ok(None),
            _ => Err(self.mismatch("integer")),
        }
    }

    fn get_f64_value(&self) -> Result<Option<f64>> {
        match self.value {
            Value::Number(n) => Ok(n.as_f64()),
            // IEEE 754 specials travel as strings
            Value::String(s) => match s.as_str() {
                "NaN" => Ok(Some(f64::NAN)),
                "INF" => Ok(Some(f64::INFINITY)),
                "-INF" => Ok(Some(f64::NEG_INFINITY)),
                _ => Err(self.mismatch("number")),
            },
            Value::Null => Ok(None),
            _ => Err(self.mismatch("number")),
        }
    }

    fn get_date_time_value(&self) -> Result<Option<DateTime<FixedOffset>>> {
        let Some(raw) = self.get_string_value()? else {
            return Ok(None);
        };
        let parsed = match DateTime::parse_from_rfc3339(&raw) {
            Ok(value) => Ok(value),
            Err(rfc_error) if self.config.assume_utc => {
                NaiveDateTime::parse_from_str(&raw, "%Y-%m-%dT%H:%M:%S%.f")
                    .map(|naive| naive.and_utc().fixed_offset())
                    .map_err(|_| rfc_error)
            }
            Err(rfc_error) => Err(rfc_error),
        };
        parsed.map(Some).map_err(|e| {
            DecodeError::InvalidFormat {
                kind: "date-time",
                value: raw.clone(),
                reason: e.to_string(),
            }
            .into()
        })
    }

    fn raw_value(&self) -> Result<UntypedValue> {
        match self.value {
            Value::Array(items) => {
                let mut values = Vec::with_capacity(items.len());
                for item in items {
                    values.push(self.descend(item)?.raw_value()?);
                }
                Ok(UntypedValue::Array(values))
            }
            Value::Object(map) => {
                let mut fields = BTreeMap::new();
                for (name, child) in map {
                    fields.insert(name.clone(), self.descend(child)?.raw_value()?);
                }
                Ok(UntypedValue::Object(fields))
            }
            scalar => Ok(UntypedValue::from(scalar)),
        }
    }
}
