//! Shared test family for dispatcher and pipeline tests.
//!
//! `TypeA` is the base: it declares `name` but not the discriminator, so an
//! unknown `@odata.type` lands in its additional-data bag. `TypeB` and `TypeC`
//! are registered subtypes that do declare it.

#![allow(dead_code)]

use graphmodel_serialization::{
    as_parsables, collection_of_object_values, collection_of_primitive_values, construct,
    object_value, AdditionalData, FieldDeserializers, JsonConfig, JsonDocument, Model, Parsable,
    ParseNode, Result, SerializationWriter, TypeRegistry,
};
use std::sync::LazyLock;

pub const TYPE_B: &str = "pkg.typeB";
pub const TYPE_C: &str = "pkg.typeC";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TypeA {
    pub name: Option<String>,
    pub additional_data: AdditionalData,
}

impl Model for TypeA {
    fn field_deserializers() -> &'static FieldDeserializers<Self> {
        static FIELDS: LazyLock<FieldDeserializers<TypeA>> = LazyLock::new(|| {
            FieldDeserializers::new().field("name", |m: &mut TypeA, n| {
                m.name = n.get_string_value()?;
                Ok(())
            })
        });
        &FIELDS
    }
}

impl Parsable for TypeA {
    fn deserialize_field(&mut self, name: &str, node: &dyn ParseNode) -> Result<bool> {
        Self::field_deserializers().apply(self, name, node)
    }

    fn serialize(&self, writer: &mut dyn SerializationWriter) -> Result<()> {
        writer.write_string_value("name", self.name.as_deref())?;
        writer.write_additional_data(&self.additional_data)
    }

    fn additional_data(&self) -> Option<&AdditionalData> {
        Some(&self.additional_data)
    }

    fn additional_data_mut(&mut self) -> Option<&mut AdditionalData> {
        Some(&mut self.additional_data)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TypeB {
    pub base: TypeA,
    pub odata_type: Option<String>,
    pub score: Option<i32>,
}

impl Default for TypeB {
    fn default() -> Self {
        Self {
            base: TypeA::default(),
            odata_type: Some(TYPE_B.to_string()),
            score: None,
        }
    }
}

impl Model for TypeB {
    fn field_deserializers() -> &'static FieldDeserializers<Self> {
        static FIELDS: LazyLock<FieldDeserializers<TypeB>> = LazyLock::new(|| {
            FieldDeserializers::inherit(TypeA::field_deserializers(), |m: &mut TypeB| &mut m.base)
                .field("@odata.type", |m: &mut TypeB, n| {
                    m.odata_type = n.get_string_value()?;
                    Ok(())
                })
                .field("score", |m: &mut TypeB, n| {
                    m.score = n.get_i32_value()?;
                    Ok(())
                })
        });
        &FIELDS
    }
}

impl Parsable for TypeB {
    fn deserialize_field(&mut self, name: &str, node: &dyn ParseNode) -> Result<bool> {
        Self::field_deserializers().apply(self, name, node)
    }

    fn serialize(&self, writer: &mut dyn SerializationWriter) -> Result<()> {
        self.base.serialize(writer)?;
        writer.write_string_value("@odata.type", self.odata_type.as_deref())?;
        writer.write_i32_value("score", self.score)
    }

    fn odata_type(&self) -> Option<&str> {
        self.odata_type.as_deref()
    }

    fn additional_data(&self) -> Option<&AdditionalData> {
        self.base.additional_data()
    }

    fn additional_data_mut(&mut self) -> Option<&mut AdditionalData> {
        self.base.additional_data_mut()
    }
}

/// Carries a polymorphic child, a polymorphic collection and string tags.
#[derive(Debug)]
pub struct TypeC {
    pub base: TypeA,
    pub odata_type: Option<String>,
    pub tags: Option<Vec<String>>,
    pub child: Option<Box<dyn Parsable>>,
    pub items: Option<Vec<Box<dyn Parsable>>>,
    pub peers: Option<Vec<TypeB>>,
}

impl Default for TypeC {
    fn default() -> Self {
        Self {
            base: TypeA::default(),
            odata_type: Some(TYPE_C.to_string()),
            tags: None,
            child: None,
            items: None,
            peers: None,
        }
    }
}

impl Model for TypeC {
    fn field_deserializers() -> &'static FieldDeserializers<Self> {
        static FIELDS: LazyLock<FieldDeserializers<TypeC>> = LazyLock::new(|| {
            FieldDeserializers::inherit(TypeA::field_deserializers(), |m: &mut TypeC| &mut m.base)
                .field("@odata.type", |m: &mut TypeC, n| {
                    m.odata_type = n.get_string_value()?;
                    Ok(())
                })
                .field("tags", |m: &mut TypeC, n| {
                    m.tags = collection_of_primitive_values(n, |item| item.get_string_value())?;
                    Ok(())
                })
                .field("child", |m: &mut TypeC, n| {
                    m.child = object_value(n, create_type_a_from_discriminator_value)?;
                    Ok(())
                })
                .field("items", |m: &mut TypeC, n| {
                    m.items = collection_of_object_values(n, create_type_a_from_discriminator_value)?;
                    Ok(())
                })
                .field("peers", |m: &mut TypeC, n| {
                    m.peers = graphmodel_serialization::typed_collection_of_object_values(
                        n,
                        create_type_b_from_discriminator_value,
                    )?;
                    Ok(())
                })
        });
        &FIELDS
    }
}

impl Parsable for TypeC {
    fn deserialize_field(&mut self, name: &str, node: &dyn ParseNode) -> Result<bool> {
        Self::field_deserializers().apply(self, name, node)
    }

    fn serialize(&self, writer: &mut dyn SerializationWriter) -> Result<()> {
        self.base.serialize(writer)?;
        writer.write_string_value("@odata.type", self.odata_type.as_deref())?;
        writer.write_collection_of_string_values("tags", self.tags.as_deref())?;
        writer.write_object_value("child", self.child.as_deref())?;
        if let Some(items) = &self.items {
            let items = graphmodel_serialization::boxed_as_parsables(items);
            writer.write_collection_of_object_values("items", Some(&items))?;
        }
        if let Some(peers) = &self.peers {
            writer.write_collection_of_object_values("peers", Some(&as_parsables(peers)))?;
        }
        Ok(())
    }

    fn odata_type(&self) -> Option<&str> {
        self.odata_type.as_deref()
    }

    fn additional_data(&self) -> Option<&AdditionalData> {
        self.base.additional_data()
    }

    fn additional_data_mut(&mut self) -> Option<&mut AdditionalData> {
        self.base.additional_data_mut()
    }
}

/// A type without an additional-data bag.
#[derive(Debug, Default)]
pub struct Sealed {
    pub name: Option<String>,
}

impl Parsable for Sealed {
    fn deserialize_field(&mut self, name: &str, node: &dyn ParseNode) -> Result<bool> {
        if name == "name" {
            self.name = node.get_string_value()?;
            return Ok(true);
        }
        Ok(false)
    }

    fn serialize(&self, writer: &mut dyn SerializationWriter) -> Result<()> {
        writer.write_string_value("name", self.name.as_deref())
    }
}

pub static TYPE_A_FAMILY: LazyLock<TypeRegistry> = LazyLock::new(|| {
    TypeRegistry::builder("TypeA", construct::<TypeA>)
        .register(TYPE_B, construct::<TypeB>)
        .register(TYPE_C, construct::<TypeC>)
        .build()
        .expect("test family has unique discriminators")
});

pub fn create_type_a_from_discriminator_value(node: Option<&dyn ParseNode>) -> Result<Box<dyn Parsable>> {
    TYPE_A_FAMILY.create(node)
}

pub fn create_type_b_from_discriminator_value(_node: Option<&dyn ParseNode>) -> Result<Box<dyn Parsable>> {
    Ok(construct::<TypeB>())
}

pub fn create_sealed_from_discriminator_value(_node: Option<&dyn ParseNode>) -> Result<Box<dyn Parsable>> {
    Ok(Box::new(Sealed::default()))
}

/// Decodes a JSON value through the `TypeA` family.
pub fn decode(json: serde_json::Value) -> Result<Option<Box<dyn Parsable>>> {
    let document = JsonDocument::from_value(json, JsonConfig::default());
    object_value(&document.root(), create_type_a_from_discriminator_value)
}

/// Decodes a JSON value that must not be null.
pub fn decode_some(json: serde_json::Value) -> Box<dyn Parsable> {
    decode(json).expect("decode").expect("non-null payload")
}
