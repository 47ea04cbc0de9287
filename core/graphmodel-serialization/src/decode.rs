//! Generic population pipeline.
//!
//! A factory selects the concrete instance for a node; [`populate`] then
//! walks the node's fields and hands each one to the instance's table.
//! Fields the instance does not declare go to its additional-data bag.

use crate::{downcast, short_type_name, Parsable, ParsableFactory, ParseNode};
use graphmodel_types::{DecodeError, Result};
use std::str::FromStr;
use tracing::trace;

/// Applies every field of `node` to `target`.
///
/// Errors are annotated with the name of the field they occurred in.
pub fn populate(target: &mut dyn Parsable, node: &dyn ParseNode) -> Result<()> {
    for (name, child) in node.object_fields()? {
        let declared = target
            .deserialize_field(&name, child.as_ref())
            .map_err(|e| e.in_field(&name))?;
        if declared {
            continue;
        }
        if let Some(bag) = target.additional_data_mut() {
            let raw = child.raw_value().map_err(|e| e.in_field(&name))?;
            trace!(field = %name, "captured unmodelled field");
            bag.insert(name, raw);
        }
    }
    Ok(())
}

/// Decodes an object node through `factory`. Null yields `Ok(None)`.
pub fn object_value(node: &dyn ParseNode, factory: ParsableFactory) -> Result<Option<Box<dyn Parsable>>> {
    if node.is_null() {
        return Ok(None);
    }
    let mut instance = factory(Some(node))?;
    populate(instance.as_mut(), node)?;
    Ok(Some(instance))
}

/// Like [`object_value`], for fields declared with a concrete type.
pub fn typed_object_value<T: Parsable>(node: &dyn ParseNode, factory: ParsableFactory) -> Result<Option<Box<T>>> {
    match object_value(node, factory)? {
        Some(instance) => expect_type::<T>(instance).map(Some),
        None => Ok(None),
    }
}

/// Decodes every element of an array node. Null elements are skipped.
pub fn collection_of_object_values(
    node: &dyn ParseNode,
    factory: ParsableFactory,
) -> Result<Option<Vec<Box<dyn Parsable>>>> {
    let Some(items) = node.collection_nodes()? else {
        return Ok(None);
    };
    let mut values = Vec::with_capacity(items.len());
    for (index, item) in items.iter().enumerate() {
        let decoded = object_value(item.as_ref(), factory).map_err(|e| e.in_field(&index.to_string()))?;
        values.extend(decoded);
    }
    Ok(Some(values))
}

/// Like [`collection_of_object_values`], for collections of one concrete type.
pub fn typed_collection_of_object_values<T: Parsable>(
    node: &dyn ParseNode,
    factory: ParsableFactory,
) -> Result<Option<Vec<T>>> {
    let Some(items) = collection_of_object_values(node, factory)? else {
        return Ok(None);
    };
    items
        .into_iter()
        .map(|item| expect_type::<T>(item).map(|boxed| *boxed))
        .collect::<Result<Vec<_>>>()
        .map(Some)
}

/// Decodes an array of primitives with `extract`. Null elements are skipped.
pub fn collection_of_primitive_values<T, F>(node: &dyn ParseNode, extract: F) -> Result<Option<Vec<T>>>
where
    F: Fn(&dyn ParseNode) -> Result<Option<T>>,
{
    let Some(items) = node.collection_nodes()? else {
        return Ok(None);
    };
    let mut values = Vec::with_capacity(items.len());
    for (index, item) in items.iter().enumerate() {
        let value = extract(item.as_ref()).map_err(|e| e.in_field(&index.to_string()))?;
        values.extend(value);
    }
    Ok(Some(values))
}

/// Reads a string node as an enum member.
pub fn enum_value<E>(node: &dyn ParseNode) -> Result<Option<E>>
where
    E: FromStr<Err = DecodeError>,
{
    match node.get_string_value()? {
        Some(raw) => Ok(Some(raw.parse()?)),
        None => Ok(None),
    }
}

fn expect_type<T: Parsable>(instance: Box<dyn Parsable>) -> Result<Box<T>> {
    downcast::<T>(instance).map_err(|other| {
        DecodeError::UnexpectedType {
            expected: short_type_name::<T>(),
            found: other.type_name(),
        }
        .into()
    })
}
