use crate::{ParseNode, SerializationWriter};
use graphmodel_types::{AdditionalData, Result};
use std::any::Any;
use std::fmt;

/// Selects and constructs the concrete type for a node, without populating it.
///
/// Every polymorphic family exposes one of these; leaf types expose one that
/// ignores the node.
pub type ParsableFactory = fn(Option<&dyn ParseNode>) -> Result<Box<dyn Parsable>>;

/// Builds a new, empty instance of one concrete type.
pub type ParsableConstructor = fn() -> Box<dyn Parsable>;

/// A model type that can be populated from a [`ParseNode`] and written to a
/// [`SerializationWriter`].
///
/// Generated types implement `deserialize_field` by delegating to their
/// [`FieldDeserializers`](crate::FieldDeserializers) table. Types that keep an
/// additional-data bag expose it so the decode pipeline can store unmodelled
/// fields in it.
pub trait Parsable: Any + fmt::Debug + Send + Sync {
    /// Applies one wire field. Returns `Ok(false)` if the type does not
    /// declare the field.
    fn deserialize_field(&mut self, name: &str, node: &dyn ParseNode) -> Result<bool>;

    /// Writes all set fields, base type first.
    fn serialize(&self, writer: &mut dyn SerializationWriter) -> Result<()>;

    /// The `@odata.type` discriminator carried by the instance.
    fn odata_type(&self) -> Option<&str> {
        None
    }

    fn additional_data(&self) -> Option<&AdditionalData> {
        None
    }

    fn additional_data_mut(&mut self) -> Option<&mut AdditionalData> {
        None
    }

    /// Unqualified name of the concrete Rust type.
    fn type_name(&self) -> &'static str {
        short_type_name::<Self>()
    }
}

impl dyn Parsable {
    pub fn is<T: Parsable>(&self) -> bool {
        (self as &dyn Any).is::<T>()
    }

    pub fn downcast_ref<T: Parsable>(&self) -> Option<&T> {
        (self as &dyn Any).downcast_ref::<T>()
    }

    pub fn downcast_mut<T: Parsable>(&mut self) -> Option<&mut T> {
        (self as &mut dyn Any).downcast_mut::<T>()
    }
}

/// Converts a boxed instance into its concrete type, handing the box back
/// untouched on a type mismatch.
pub fn downcast<T: Parsable>(value: Box<dyn Parsable>) -> std::result::Result<Box<T>, Box<dyn Parsable>> {
    if !value.is::<T>() {
        return Err(value);
    }
    let any: Box<dyn Any> = value;
    match any.downcast::<T>() {
        Ok(concrete) => Ok(concrete),
        Err(_) => unreachable!("is::<T>() held, so the Any downcast to T cannot fail"),
    }
}

/// Constructor for any default-constructible model type, for use as a
/// [`ParsableConstructor`].
pub fn construct<T: Parsable + Default>() -> Box<dyn Parsable> {
    Box::new(T::default())
}

/// Last path segment of a type name.
pub fn short_type_name<T: ?Sized>() -> &'static str {
    let full = std::any::type_name::<T>();
    full.rsplit("::").next().unwrap_or(full)
}

/// Borrows a slice of concrete models as trait objects for the writer.
pub fn as_parsables<T: Parsable>(items: &[T]) -> Vec<&dyn Parsable> {
    items.iter().map(|item| item as &dyn Parsable).collect()
}

/// Borrows a slice of boxed models as trait objects for the writer.
pub fn boxed_as_parsables(items: &[Box<dyn Parsable>]) -> Vec<&dyn Parsable> {
    items.iter().map(|item| item.as_ref()).collect()
}
