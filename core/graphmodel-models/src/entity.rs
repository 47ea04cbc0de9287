use crate::{AccessPackage, AccessPackageAssignment, AccessPackageCatalog, MobileApp, WebApp};
use graphmodel_serialization::{
    construct, AdditionalData, FieldDeserializers, Model, Parsable, ParseNode, Result,
    SerializationWriter, TypeRegistry, ODATA_TYPE_KEY,
};
use std::sync::LazyLock;

/// Root of the schema: everything addressable by id derives from it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Entity {
    pub id: Option<String>,
    pub odata_type: Option<String>,
    pub additional_data: AdditionalData,
}

impl Entity {
    /// An entity tagged with a concrete subtype's discriminator.
    pub(crate) fn tagged(odata_type: &str) -> Self {
        Self {
            odata_type: Some(odata_type.to_string()),
            ..Self::default()
        }
    }
}

impl Model for Entity {
    fn field_deserializers() -> &'static FieldDeserializers<Self> {
        static FIELDS: LazyLock<FieldDeserializers<Entity>> = LazyLock::new(|| {
            FieldDeserializers::new()
                .field("id", |m: &mut Entity, n| {
                    m.id = n.get_string_value()?;
                    Ok(())
                })
                .field(ODATA_TYPE_KEY, |m: &mut Entity, n| {
                    m.odata_type = n.get_string_value()?;
                    Ok(())
                })
        });
        &FIELDS
    }
}

impl Parsable for Entity {
    fn deserialize_field(&mut self, name: &str, node: &dyn ParseNode) -> Result<bool> {
        Self::field_deserializers().apply(self, name, node)
    }

    fn serialize(&self, writer: &mut dyn SerializationWriter) -> Result<()> {
        writer.write_string_value("id", self.id.as_deref())?;
        writer.write_string_value(ODATA_TYPE_KEY, self.odata_type.as_deref())?;
        writer.write_additional_data(&self.additional_data)
    }

    fn odata_type(&self) -> Option<&str> {
        self.odata_type.as_deref()
    }

    fn additional_data(&self) -> Option<&AdditionalData> {
        Some(&self.additional_data)
    }

    fn additional_data_mut(&mut self) -> Option<&mut AdditionalData> {
        Some(&mut self.additional_data)
    }
}

static ENTITY_FAMILY: LazyLock<TypeRegistry> = LazyLock::new(|| {
    TypeRegistry::builder("Entity", construct::<Entity>)
        .register(AccessPackage::ODATA_TYPE, construct::<AccessPackage>)
        .register(AccessPackageAssignment::ODATA_TYPE, construct::<AccessPackageAssignment>)
        .register(AccessPackageCatalog::ODATA_TYPE, construct::<AccessPackageCatalog>)
        .register(MobileApp::ODATA_TYPE, construct::<MobileApp>)
        .register(WebApp::ODATA_TYPE, construct::<WebApp>)
        .build()
        .expect("Entity discriminators are unique")
});

/// The registry behind [`create_entity_from_discriminator_value`].
pub fn entity_family() -> &'static TypeRegistry {
    &ENTITY_FAMILY
}

/// Creates the [`Entity`] subtype named by the node's `@odata.type`.
pub fn create_entity_from_discriminator_value(node: Option<&dyn ParseNode>) -> Result<Box<dyn Parsable>> {
    ENTITY_FAMILY.create(node)
}
