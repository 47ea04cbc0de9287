use crate::{create_access_package_catalog_from_discriminator_value, AccessPackageCatalog, Entity};
use chrono::{DateTime, FixedOffset};
use graphmodel_serialization::{
    as_parsables, construct, typed_collection_of_object_values, typed_object_value, AdditionalData,
    FieldDeserializers, Model, Parsable, ParseNode, Result, SerializationWriter,
};
use std::sync::LazyLock;

/// A bundle of resources a subject can request access to.
#[derive(Debug, Clone, PartialEq)]
pub struct AccessPackage {
    pub entity: Entity,
    pub catalog_id: Option<String>,
    pub created_by: Option<String>,
    pub created_date_time: Option<DateTime<FixedOffset>>,
    pub description: Option<String>,
    pub display_name: Option<String>,
    pub is_hidden: Option<bool>,
    pub is_role_scopes_visible: Option<bool>,
    pub modified_by: Option<String>,
    pub modified_date_time: Option<DateTime<FixedOffset>>,
    pub access_package_catalog: Option<Box<AccessPackageCatalog>>,
    pub access_packages_incompatible_with: Option<Vec<AccessPackage>>,
}

impl AccessPackage {
    pub const ODATA_TYPE: &'static str = "#microsoft.graph.accessPackage";
}

impl Default for AccessPackage {
    fn default() -> Self {
        Self {
            entity: Entity::tagged(Self::ODATA_TYPE),
            catalog_id: None,
            created_by: None,
            created_date_time: None,
            description: None,
            display_name: None,
            is_hidden: None,
            is_role_scopes_visible: None,
            modified_by: None,
            modified_date_time: None,
            access_package_catalog: None,
            access_packages_incompatible_with: None,
        }
    }
}

impl Model for AccessPackage {
    fn field_deserializers() -> &'static FieldDeserializers<Self> {
        static FIELDS: LazyLock<FieldDeserializers<AccessPackage>> = LazyLock::new(|| {
            FieldDeserializers::inherit(Entity::field_deserializers(), |m: &mut AccessPackage| &mut m.entity)
                .field("accessPackageCatalog", |m: &mut AccessPackage, n| {
                    m.access_package_catalog =
                        typed_object_value(n, create_access_package_catalog_from_discriminator_value)?;
                    Ok(())
                })
                .field("accessPackagesIncompatibleWith", |m: &mut AccessPackage, n| {
                    m.access_packages_incompatible_with =
                        typed_collection_of_object_values(n, create_access_package_from_discriminator_value)?;
                    Ok(())
                })
                .field("catalogId", |m: &mut AccessPackage, n| {
                    m.catalog_id = n.get_string_value()?;
                    Ok(())
                })
                .field("createdBy", |m: &mut AccessPackage, n| {
                    m.created_by = n.get_string_value()?;
                    Ok(())
                })
                .field("createdDateTime", |m: &mut AccessPackage, n| {
                    m.created_date_time = n.get_date_time_value()?;
                    Ok(())
                })
                .field("description", |m: &mut AccessPackage, n| {
                    m.description = n.get_string_value()?;
                    Ok(())
                })
                .field("displayName", |m: &mut AccessPackage, n| {
                    m.display_name = n.get_string_value()?;
                    Ok(())
                })
                .field("isHidden", |m: &mut AccessPackage, n| {
                    m.is_hidden = n.get_bool_value()?;
                    Ok(())
                })
                .field("isRoleScopesVisible", |m: &mut AccessPackage, n| {
                    m.is_role_scopes_visible = n.get_bool_value()?;
                    Ok(())
                })
                .field("modifiedBy", |m: &mut AccessPackage, n| {
                    m.modified_by = n.get_string_value()?;
                    Ok(())
                })
                .field("modifiedDateTime", |m: &mut AccessPackage, n| {
                    m.modified_date_time = n.get_date_time_value()?;
                    Ok(())
                })
        });
        &FIELDS
    }
}

impl Parsable for AccessPackage {
    fn deserialize_field(&mut self, name: &str, node: &dyn ParseNode) -> Result<bool> {
        Self::field_deserializers().apply(self, name, node)
    }

    fn serialize(&self, writer: &mut dyn SerializationWriter) -> Result<()> {
        self.entity.serialize(writer)?;
        writer.write_object_value(
            "accessPackageCatalog",
            self.access_package_catalog.as_deref().map(|c| c as &dyn Parsable),
        )?;
        if let Some(incompatible) = &self.access_packages_incompatible_with {
            writer.write_collection_of_object_values("accessPackagesIncompatibleWith", Some(&as_parsables(incompatible)))?;
        }
        writer.write_string_value("catalogId", self.catalog_id.as_deref())?;
        writer.write_string_value("createdBy", self.created_by.as_deref())?;
        writer.write_date_time_value("createdDateTime", self.created_date_time.as_ref())?;
        writer.write_string_value("description", self.description.as_deref())?;
        writer.write_string_value("displayName", self.display_name.as_deref())?;
        writer.write_bool_value("isHidden", self.is_hidden)?;
        writer.write_bool_value("isRoleScopesVisible", self.is_role_scopes_visible)?;
        writer.write_string_value("modifiedBy", self.modified_by.as_deref())?;
        writer.write_date_time_value("modifiedDateTime", self.modified_date_time.as_ref())
    }

    fn odata_type(&self) -> Option<&str> {
        self.entity.odata_type()
    }

    fn additional_data(&self) -> Option<&AdditionalData> {
        self.entity.additional_data()
    }

    fn additional_data_mut(&mut self) -> Option<&mut AdditionalData> {
        self.entity.additional_data_mut()
    }
}

pub fn create_access_package_from_discriminator_value(_node: Option<&dyn ParseNode>) -> Result<Box<dyn Parsable>> {
    Ok(construct::<AccessPackage>())
}
