//! Serialization core for graphmodel.
//!
//! Defines the contract between generated model types and the wire layer:
//! - [`ParseNode`] / [`SerializationWriter`]: read and write access to a
//!   parsed payload, independent of the wire format
//! - [`Parsable`]: implemented by every model type; populated field by field
//!   through its [`FieldDeserializers`] table
//! - [`TypeRegistry`]: per-family map from `@odata.type` discriminator to
//!   constructor, used to pick the concrete type before population
//! - [`decode`]: the generic pipeline that ties the pieces together
//! - [`json`]: the JSON implementation of both node and writer
//!
//! Model crates build one `TypeRegistry` per polymorphic family and expose a
//! `create_<family>_from_discriminator_value` factory backed by it.

mod config;
pub mod decode;
mod fields;
pub mod json;
mod parsable;
mod parse_node;
mod registry;
mod writer;

pub use config::JsonConfig;
pub use decode::{
    collection_of_object_values, collection_of_primitive_values, enum_value, object_value,
    populate, typed_collection_of_object_values, typed_object_value,
};
pub use fields::{FieldDeserializer, FieldDeserializers, Model};
pub use json::{decode_json, decode_json_as, encode_json, encode_json_value, JsonDocument};
pub use parsable::{
    as_parsables, boxed_as_parsables, construct, downcast, short_type_name, Parsable,
    ParsableConstructor, ParsableFactory,
};
pub use parse_node::ParseNode;
pub use registry::{create_from_discriminator_value, TypeRegistry, TypeRegistryBuilder, ODATA_TYPE_KEY};
pub use writer::SerializationWriter;

pub use graphmodel_types::{AdditionalData, DateOnly, DecodeError, Error, Result, TimeOnly, UntypedValue};
