//! Core wire types for graphmodel.
//!
//! This crate defines the format-agnostic types shared by the parse and
//! serialization layers:
//! - [`UntypedValue`] and [`AdditionalData`], the catch-all storage for wire
//!   fields a model does not declare
//! - [`DateOnly`] and [`TimeOnly`], the calendar primitives of the wire schema
//! - the error taxonomy ([`Error`], [`DecodeError`])
//!
//! Nothing here knows about JSON or about any concrete model type.

mod temporal;
mod value;

pub use temporal::{DateOnly, TimeOnly};
pub use value::{AdditionalData, UntypedValue};

/// Result type alias using the crate's error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while decoding or encoding model values.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("decode error: {0}")]
    Decode(#[from] DecodeError),

    #[error("encode error: {0}")]
    Encode(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("duplicate discriminator {discriminator:?} in {family} registry")]
    DuplicateDiscriminator {
        family: &'static str,
        discriminator: String,
    },
}

impl Error {
    /// Attaches a field name to a decode error. Other variants pass through.
    #[must_use]
    pub fn in_field(self, field: &str) -> Self {
        match self {
            Self::Decode(source) => Self::Decode(DecodeError::Field {
                field: field.to_string(),
                source: Box::new(source),
            }),
            other => other,
        }
    }

    /// Returns the decode error, if this is one.
    pub fn as_decode(&self) -> Option<&DecodeError> {
        match self {
            Self::Decode(e) => Some(e),
            _ => None,
        }
    }
}

/// Failures while reading typed values out of a parse tree.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DecodeError {
    /// The node holds a different wire type than the one requested.
    #[error("expected {expected}, found {found}")]
    TypeMismatch {
        expected: &'static str,
        found: &'static str,
    },

    /// The node holds the right wire type but its content does not parse.
    #[error("invalid {kind} value {value:?}: {reason}")]
    InvalidFormat {
        kind: &'static str,
        value: String,
        reason: String,
    },

    /// A number does not fit the requested width.
    #[error("{value} is out of range for {kind}")]
    OutOfRange { kind: &'static str, value: String },

    /// A string does not name a member of the requested enum.
    #[error("unknown {kind} member {value:?}")]
    UnknownEnumMember { kind: &'static str, value: String },

    /// The payload nests deeper than the configured limit.
    #[error("nesting depth exceeds limit of {limit}")]
    DepthExceeded { limit: usize },

    /// A factory produced a different concrete type than the field declares.
    #[error("expected an instance of {expected}, factory produced {found}")]
    UnexpectedType {
        expected: &'static str,
        found: &'static str,
    },

    /// A nested failure, annotated with the field it occurred in.
    #[error("field {field:?}: {source}")]
    Field {
        field: String,
        #[source]
        source: Box<DecodeError>,
    },
}

impl DecodeError {
    /// Returns the dotted field path and the innermost error.
    pub fn path(&self) -> (String, &DecodeError) {
        let mut segments = Vec::new();
        let mut current = self;
        while let Self::Field { field, source } = current {
            segments.push(field.as_str());
            current = source.as_ref();
        }
        (segments.join("."), current)
    }
}
