use crate::{Parsable, SerializationWriter};
use graphmodel_types::{Error, Result, UntypedValue};
use serde_json::{Map, Number, Value};

/// [`SerializationWriter`] that builds a `serde_json::Value` object.
#[derive(Debug, Default)]
pub struct JsonSerializationWriter {
    fields: Map<String, Value>,
}

impl JsonSerializationWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// The object written so far.
    pub fn into_value(self) -> Value {
        Value::Object(self.fields)
    }

    fn put(&mut self, key: &str, value: Value) -> Result<()> {
        self.fields.insert(key.to_string(), value);
        Ok(())
    }

    fn render(value: &dyn Parsable) -> Result<Value> {
        let mut child = Self::new();
        value.serialize(&mut child)?;
        Ok(child.into_value())
    }
}

impl SerializationWriter for JsonSerializationWriter {
    fn write_string_value(&mut self, key: &str, value: Option<&str>) -> Result<()> {
        match value {
            Some(v) => self.put(key, Value::String(v.to_string())),
            None => Ok(()),
        }
    }

    fn write_bool_value(&mut self, key: &str, value: Option<bool>) -> Result<()> {
        match value {
            Some(v) => self.put(key, Value::Bool(v)),
            None => Ok(()),
        }
    }

    fn write_i32_value(&mut self, key: &str, value: Option<i32>) -> Result<()> {
        match value {
            Some(v) => self.put(key, Value::from(v)),
            None => Ok(()),
        }
    }

    fn write_i64_value(&mut self, key: &str, value: Option<i64>) -> Result<()> {
        match value {
            Some(v) => self.put(key, Value::from(v)),
            None => Ok(()),
        }
    }

    fn write_f64_value(&mut self, key: &str, value: Option<f64>) -> Result<()> {
        let Some(v) = value else {
            return Ok(());
        };
        let number = Number::from_f64(v).ok_or_else(|| Error::Encode(format!("{key}: non-finite number {v}")))?;
        self.put(key, Value::Number(number))
    }

    fn write_collection_of_string_values(&mut self, key: &str, values: Option<&[String]>) -> Result<()> {
        match values {
            Some(items) => self.put(key, Value::Array(items.iter().cloned().map(Value::String).collect())),
            None => Ok(()),
        }
    }

    fn write_object_value(&mut self, key: &str, value: Option<&dyn Parsable>) -> Result<()> {
        match value {
            Some(v) => {
                let rendered = Self::render(v)?;
                self.put(key, rendered)
            }
            None => Ok(()),
        }
    }

    fn write_collection_of_object_values(&mut self, key: &str, values: Option<&[&dyn Parsable]>) -> Result<()> {
        let Some(items) = values else {
            return Ok(());
        };
        let rendered = items
            .iter()
            .map(|item| Self::render(*item))
            .collect::<Result<Vec<_>>>()?;
        self.put(key, Value::Array(rendered))
    }

    fn write_untyped_value(&mut self, key: &str, value: &UntypedValue) -> Result<()> {
        self.put(key, Value::from(value.clone()))
    }

    fn write_null_value(&mut self, key: &str) -> Result<()> {
        self.put(key, Value::Null)
    }
}
