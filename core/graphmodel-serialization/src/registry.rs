//! Discriminator registries for polymorphic families.
//!
//! Each abstract base type in the schema owns one [`TypeRegistry`] mapping
//! the `@odata.type` values of its subtypes to their constructors. The
//! registry picks the concrete type for a payload; population is done
//! afterwards by [`crate::decode`].

use crate::{Parsable, ParsableConstructor, ParseNode};
use graphmodel_types::{Error, Result};
use std::collections::HashMap;
use std::fmt;
use tracing::{debug, trace};

/// Reserved field carrying the concrete type name of a payload.
pub const ODATA_TYPE_KEY: &str = "@odata.type";

/// Immutable discriminator → constructor map for one family.
///
/// Lookups are exact and case-sensitive. Unknown discriminators resolve to
/// the family's base type so that subtypes added on the server do not break
/// older clients.
pub struct TypeRegistry {
    family: &'static str,
    base: ParsableConstructor,
    types: HashMap<String, ParsableConstructor>,
}

impl TypeRegistry {
    /// Starts a registry for the family rooted at `base`.
    pub fn builder(family: &'static str, base: ParsableConstructor) -> TypeRegistryBuilder {
        TypeRegistryBuilder {
            family,
            base,
            types: HashMap::new(),
            duplicate: None,
        }
    }

    /// Name of the family's base type.
    pub fn family(&self) -> &'static str {
        self.family
    }

    /// Constructor registered for an exact discriminator value.
    pub fn resolve(&self, discriminator: &str) -> Option<ParsableConstructor> {
        self.types.get(discriminator).copied()
    }

    pub fn contains(&self, discriminator: &str) -> bool {
        self.types.contains_key(discriminator)
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Registered discriminator values, sorted.
    pub fn discriminators(&self) -> Vec<&str> {
        let mut values: Vec<_> = self.types.keys().map(String::as_str).collect();
        values.sort_unstable();
        values
    }

    /// A new, empty instance of the base type.
    pub fn base_instance(&self) -> Box<dyn Parsable> {
        (self.base)()
    }

    /// Creates the instance a node should be decoded into.
    ///
    /// An absent node, a node without a discriminator, a null discriminator
    /// and an unregistered discriminator all produce the base type. The only
    /// error is a discriminator that cannot be read as a string.
    pub fn create(&self, node: Option<&dyn ParseNode>) -> Result<Box<dyn Parsable>> {
        let Some(node) = node else {
            return Ok(self.base_instance());
        };
        let Some(discriminator_node) = node.child_node(ODATA_TYPE_KEY)? else {
            return Ok(self.base_instance());
        };
        let Some(discriminator) = discriminator_node.get_string_value()? else {
            return Ok(self.base_instance());
        };

        match self.types.get(discriminator.as_str()) {
            Some(constructor) => {
                trace!(family = self.family, discriminator = %discriminator, "resolved discriminator");
                Ok(constructor())
            }
            None => {
                debug!(
                    family = self.family,
                    discriminator = %discriminator,
                    "unregistered discriminator, using base type"
                );
                Ok(self.base_instance())
            }
        }
    }
}

impl fmt::Debug for TypeRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypeRegistry")
            .field("family", &self.family)
            .field("discriminators", &self.discriminators())
            .finish()
    }
}

/// Collects registrations for a [`TypeRegistry`].
pub struct TypeRegistryBuilder {
    family: &'static str,
    base: ParsableConstructor,
    types: HashMap<String, ParsableConstructor>,
    duplicate: Option<String>,
}

impl TypeRegistryBuilder {
    /// Registers a subtype. Registering the same discriminator twice makes
    /// [`build`](Self::build) fail.
    #[must_use]
    pub fn register(mut self, discriminator: impl Into<String>, constructor: ParsableConstructor) -> Self {
        let discriminator = discriminator.into();
        if self.types.contains_key(&discriminator) {
            if self.duplicate.is_none() {
                self.duplicate = Some(discriminator);
            }
        } else {
            self.types.insert(discriminator, constructor);
        }
        self
    }

    pub fn build(self) -> Result<TypeRegistry> {
        if let Some(discriminator) = self.duplicate {
            return Err(Error::DuplicateDiscriminator {
                family: self.family,
                discriminator,
            });
        }
        Ok(TypeRegistry {
            family: self.family,
            base: self.base,
            types: self.types,
        })
    }
}

/// Selects the concrete type for `node` within `registry`'s family.
///
/// Generated families wrap this in a `create_<family>_from_discriminator_value`
/// function bound to their static registry.
pub fn create_from_discriminator_value(
    registry: &TypeRegistry,
    node: Option<&dyn ParseNode>,
) -> Result<Box<dyn Parsable>> {
    registry.create(node)
}
