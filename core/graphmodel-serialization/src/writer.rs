use crate::Parsable;
use base64::{engine::general_purpose::STANDARD, Engine};
use chrono::{DateTime, FixedOffset, SecondsFormat};
use graphmodel_types::{AdditionalData, DateOnly, Result, TimeOnly, UntypedValue};
use uuid::Uuid;

/// Write side of the wire layer.
///
/// Model types call one method per declared field. `None` values are skipped
/// rather than written as null; use [`write_null_value`](Self::write_null_value)
/// for an explicit null.
pub trait SerializationWriter {
    fn write_string_value(&mut self, key: &str, value: Option<&str>) -> Result<()>;

    fn write_bool_value(&mut self, key: &str, value: Option<bool>) -> Result<()>;

    fn write_i32_value(&mut self, key: &str, value: Option<i32>) -> Result<()>;

    fn write_i64_value(&mut self, key: &str, value: Option<i64>) -> Result<()>;

    fn write_f64_value(&mut self, key: &str, value: Option<f64>) -> Result<()>;

    fn write_collection_of_string_values(&mut self, key: &str, values: Option<&[String]>) -> Result<()>;

    fn write_object_value(&mut self, key: &str, value: Option<&dyn Parsable>) -> Result<()>;

    fn write_collection_of_object_values(&mut self, key: &str, values: Option<&[&dyn Parsable]>) -> Result<()>;

    fn write_untyped_value(&mut self, key: &str, value: &UntypedValue) -> Result<()>;

    fn write_null_value(&mut self, key: &str) -> Result<()>;

    fn write_date_time_value(&mut self, key: &str, value: Option<&DateTime<FixedOffset>>) -> Result<()> {
        let rendered = value.map(|v| v.to_rfc3339_opts(SecondsFormat::AutoSi, true));
        self.write_string_value(key, rendered.as_deref())
    }

    fn write_byte_array_value(&mut self, key: &str, value: Option<&[u8]>) -> Result<()> {
        let rendered = value.map(|bytes| STANDARD.encode(bytes));
        self.write_string_value(key, rendered.as_deref())
    }

    fn write_date_only_value(&mut self, key: &str, value: Option<DateOnly>) -> Result<()> {
        let rendered = value.map(|d| d.to_string());
        self.write_string_value(key, rendered.as_deref())
    }

    fn write_time_only_value(&mut self, key: &str, value: Option<TimeOnly>) -> Result<()> {
        let rendered = value.map(|t| t.to_string());
        self.write_string_value(key, rendered.as_deref())
    }

    fn write_uuid_value(&mut self, key: &str, value: Option<Uuid>) -> Result<()> {
        let rendered = value.map(|u| u.to_string());
        self.write_string_value(key, rendered.as_deref())
    }

    /// Enums travel as their wire member name.
    fn write_enum_value(&mut self, key: &str, value: Option<&str>) -> Result<()> {
        self.write_string_value(key, value)
    }

    /// Writes every entry of the bag as a top-level field.
    fn write_additional_data(&mut self, data: &AdditionalData) -> Result<()> {
        for (key, value) in data {
            self.write_untyped_value(key, value)?;
        }
        Ok(())
    }
}
