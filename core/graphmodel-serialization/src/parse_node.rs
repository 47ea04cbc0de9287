use base64::{engine::general_purpose::STANDARD, Engine};
use chrono::{DateTime, FixedOffset};
use graphmodel_types::{DateOnly, DecodeError, Result, TimeOnly, UntypedValue};
use uuid::Uuid;

/// Read-only handle over one node of an already-parsed payload.
///
/// Implementations wrap a concrete wire format. Every getter returns
/// `Ok(None)` for an explicit null and `Err` when the node holds a different
/// wire type than the one requested. A node is never mutated by readers.
///
/// Objects nested inside a node are decoded with the free functions in
/// [`crate::decode`], which drive a model's field table over
/// [`object_fields`](Self::object_fields).
pub trait ParseNode {
    /// Name of the node's wire shape (`"string"`, `"object"`, ...).
    fn kind(&self) -> &'static str;

    fn is_null(&self) -> bool;

    /// Child of an object node. Returns `Ok(None)` when the field is absent
    /// or when this node is not an object.
    fn child_node(&self, name: &str) -> Result<Option<Box<dyn ParseNode + '_>>>;

    /// Fields of an object node in the parse tree's order. A null node has no
    /// fields; any other shape is a type mismatch.
    fn object_fields(&self) -> Result<Vec<(String, Box<dyn ParseNode + '_>)>>;

    /// Elements of an array node, or `Ok(None)` for null.
    fn collection_nodes(&self) -> Result<Option<Vec<Box<dyn ParseNode + '_>>>>;

    fn get_string_value(&self) -> Result<Option<String>>;

    fn get_bool_value(&self) -> Result<Option<bool>>;

    fn get_i32_value(&self) -> Result<Option<i32>>;

    fn get_i64_value(&self) -> Result<Option<i64>>;

    fn get_f64_value(&self) -> Result<Option<f64>>;

    /// Date and time with offset (`Edm.DateTimeOffset`).
    fn get_date_time_value(&self) -> Result<Option<DateTime<FixedOffset>>>;

    /// Base64 encoded binary content (`Edm.Binary`).
    fn get_byte_array_value(&self) -> Result<Option<Vec<u8>>> {
        let Some(encoded) = self.get_string_value()? else {
            return Ok(None);
        };
        STANDARD
            .decode(encoded.as_bytes())
            .map(Some)
            .map_err(|e| {
                DecodeError::InvalidFormat {
                    kind: "base64",
                    value: encoded,
                    reason: e.to_string(),
                }
                .into()
            })
    }

    fn get_date_only_value(&self) -> Result<Option<DateOnly>> {
        match self.get_string_value()? {
            Some(raw) => Ok(Some(raw.parse()?)),
            None => Ok(None),
        }
    }

    fn get_time_only_value(&self) -> Result<Option<TimeOnly>> {
        match self.get_string_value()? {
            Some(raw) => Ok(Some(raw.parse()?)),
            None => Ok(None),
        }
    }

    fn get_uuid_value(&self) -> Result<Option<Uuid>> {
        let Some(raw) = self.get_string_value()? else {
            return Ok(None);
        };
        Uuid::parse_str(&raw).map(Some).map_err(|e| {
            DecodeError::InvalidFormat {
                kind: "uuid",
                value: raw,
                reason: e.to_string(),
            }
            .into()
        })
    }

    /// The node rendered as an untyped value, for the additional-data bag.
    /// Nested members count against the same depth limit as child lookups.
    fn raw_value(&self) -> Result<UntypedValue>;
}
