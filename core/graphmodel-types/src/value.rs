//! Untyped values for the additional-data bag.
//!
//! Wire fields a model does not declare are kept as [`UntypedValue`] so they
//! survive a decode and re-encode cycle unchanged.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Unmodelled wire fields, keyed by field name.
pub type AdditionalData = BTreeMap<String, UntypedValue>;

/// A dynamically typed wire value.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum UntypedValue {
    #[default]
    Null,
    Bool(bool),
    Integer(i64),
    /// Integers above `i64::MAX`.
    Unsigned(u64),
    Float(f64),
    String(String),
    Array(Vec<UntypedValue>),
    Object(BTreeMap<String, UntypedValue>),
}

impl UntypedValue {
    /// Short name of the wire shape, used in error messages.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool(_) => "bool",
            Self::Integer(_) | Self::Unsigned(_) => "integer",
            Self::Float(_) => "float",
            Self::String(_) => "string",
            Self::Array(_) => "array",
            Self::Object(_) => "object",
        }
    }

    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Integer(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_u64(&self) -> Option<u64> {
        match self {
            Self::Integer(i) => u64::try_from(*i).ok(),
            Self::Unsigned(u) => Some(*u),
            _ => None,
        }
    }

    /// Integers widen to `f64`.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Integer(i) => Some(*i as f64),
            Self::Unsigned(u) => Some(*u as f64),
            Self::Float(f) => Some(*f),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[UntypedValue]> {
        match self {
            Self::Array(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&BTreeMap<String, UntypedValue>> {
        match self {
            Self::Object(map) => Some(map),
            _ => None,
        }
    }

    /// Looks up a member of an object value.
    pub fn get(&self, key: &str) -> Option<&UntypedValue> {
        self.as_object().and_then(|map| map.get(key))
    }
}

impl From<serde_json::Value> for UntypedValue {
    fn from(value: serde_json::Value) -> Self {
        use serde_json::Value;
        match value {
            Value::Null => Self::Null,
            Value::Bool(b) => Self::Bool(b),
            Value::Number(n) => match (n.as_i64(), n.as_u64()) {
                (Some(i), _) => Self::Integer(i),
                (None, Some(u)) => Self::Unsigned(u),
                (None, None) => Self::Float(n.as_f64().unwrap_or(f64::NAN)),
            },
            Value::String(s) => Self::String(s),
            Value::Array(items) => Self::Array(items.into_iter().map(Self::from).collect()),
            Value::Object(map) => {
                Self::Object(map.into_iter().map(|(k, v)| (k, Self::from(v))).collect())
            }
        }
    }
}

impl From<&serde_json::Value> for UntypedValue {
    fn from(value: &serde_json::Value) -> Self {
        Self::from(value.clone())
    }
}

impl From<UntypedValue> for serde_json::Value {
    fn from(value: UntypedValue) -> Self {
        use serde_json::Value;
        match value {
            UntypedValue::Null => Value::Null,
            UntypedValue::Bool(b) => Value::Bool(b),
            UntypedValue::Integer(i) => Value::from(i),
            UntypedValue::Unsigned(u) => Value::from(u),
            // Non-finite floats have no JSON form
            UntypedValue::Float(f) => serde_json::Number::from_f64(f).map_or(Value::Null, Value::Number),
            UntypedValue::String(s) => Value::String(s),
            UntypedValue::Array(items) => Value::Array(items.into_iter().map(Value::from).collect()),
            UntypedValue::Object(map) => {
                Value::Object(map.into_iter().map(|(k, v)| (k, Value::from(v))).collect())
            }
        }
    }
}

impl From<&str> for UntypedValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for UntypedValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<bool> for UntypedValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for UntypedValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<u64> for UntypedValue {
    fn from(value: u64) -> Self {
        i64::try_from(value).map_or(Self::Unsigned(value), Self::Integer)
    }
}

impl From<f64> for UntypedValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}
