//! Per-type field deserializer tables.
//!
//! A table maps each declared wire field name to a closure that reads the
//! field from a [`ParseNode`] and assigns it onto the instance. Derived types
//! build their table from the parent's with [`FieldDeserializers::inherit`],
//! which re-targets every parent entry through a projection onto the embedded
//! parent value; entries added afterwards override inherited ones.

use crate::ParseNode;
use graphmodel_types::Result;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Reads one field from a node and assigns it onto `T`.
pub type FieldDeserializer<T> = Arc<dyn Fn(&mut T, &dyn ParseNode) -> Result<()> + Send + Sync>;

/// Field name → deserializer map for one concrete type.
pub struct FieldDeserializers<T> {
    entries: HashMap<&'static str, FieldDeserializer<T>>,
}

impl<T: 'static> FieldDeserializers<T> {
    /// An empty table, for types without a parent.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Starts a table from a parent type's table.
    ///
    /// `project` borrows the parent value embedded in `T`.
    #[must_use]
    pub fn inherit<B: 'static>(base: &FieldDeserializers<B>, project: fn(&mut T) -> &mut B) -> Self {
        let entries = base
            .entries
            .iter()
            .map(|(name, parent)| {
                let parent = Arc::clone(parent);
                let lifted: FieldDeserializer<T> =
                    Arc::new(move |target: &mut T, node: &dyn ParseNode| parent(project(target), node));
                (*name, lifted)
            })
            .collect();
        Self { entries }
    }

    /// Adds a field, replacing any inherited entry of the same name.
    #[must_use]
    pub fn field<F>(mut self, name: &'static str, deserializer: F) -> Self
    where
        F: Fn(&mut T, &dyn ParseNode) -> Result<()> + Send + Sync + 'static,
    {
        self.entries.insert(name, Arc::new(deserializer));
        self
    }

    /// Runs the deserializer registered for `name`, if any.
    ///
    /// Returns whether the field is declared by the table.
    pub fn apply(&self, target: &mut T, name: &str, node: &dyn ParseNode) -> Result<bool> {
        match self.entries.get(name) {
            Some(deserializer) => {
                deserializer(target, node)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    pub fn get(&self, name: &str) -> Option<&FieldDeserializer<T>> {
        self.entries.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Declared field names, sorted.
    pub fn names(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.entries.keys().copied().collect();
        names.sort_unstable();
        names
    }
}

impl<T: 'static> Default for FieldDeserializers<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for FieldDeserializers<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<_> = self.entries.keys().collect();
        names.sort_unstable();
        f.debug_struct("FieldDeserializers").field("fields", &names).finish()
    }
}

/// A model type with a static field table.
///
/// Implementors usually build the table once in a `LazyLock`:
///
/// ```ignore
/// impl Model for AccessPackage {
///     fn field_deserializers() -> &'static FieldDeserializers<Self> {
///         static FIELDS: LazyLock<FieldDeserializers<AccessPackage>> = LazyLock::new(|| {
///             FieldDeserializers::inherit(Entity::field_deserializers(), |m| &mut m.entity)
///                 .field("displayName", |m, n| {
///                     m.display_name = n.get_string_value()?;
///                     Ok(())
///                 })
///         });
///         &FIELDS
///     }
/// }
/// ```
pub trait Model: Sized + 'static {
    fn field_deserializers() -> &'static FieldDeserializers<Self>;
}
