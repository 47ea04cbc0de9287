use crate::{create_access_package_from_discriminator_value, AccessPackage, Entity};
use chrono::{DateTime, FixedOffset};
use graphmodel_serialization::{
    as_parsables, construct, typed_collection_of_object_values, AdditionalData, FieldDeserializers,
    Model, Parsable, ParseNode, Result, SerializationWriter,
};
use std::sync::LazyLock;

/// A container of access packages and the resources they grant.
#[derive(Debug, Clone, PartialEq)]
pub struct AccessPackageCatalog {
    pub entity: Entity,
    pub catalog_status: Option<String>,
    pub catalog_type: Option<String>,
    pub created_by: Option<String>,
    pub created_date_time: Option<DateTime<FixedOffset>>,
    pub description: Option<String>,
    pub display_name: Option<String>,
    pub is_externally_visible: Option<bool>,
    pub modified_by: Option<String>,
    pub modified_date_time: Option<DateTime<FixedOffset>>,
    pub access_packages: Option<Vec<AccessPackage>>,
}

impl AccessPackageCatalog {
    pub const ODATA_TYPE: &'static str = "#microsoft.graph.accessPackageCatalog";
}

impl Default for AccessPackageCatalog {
    fn default() -> Self {
        Self {
            entity: Entity::tagged(Self::ODATA_TYPE),
            catalog_status: None,
            catalog_type: None,
            created_by: None,
            created_date_time: None,
            description: None,
            display_name: None,
            is_externally_visible: None,
            modified_by: None,
            modified_date_time: None,
            access_packages: None,
        }
    }
}

impl Model for AccessPackageCatalog {
    fn field_deserializers() -> &'static FieldDeserializers<Self> {
        static FIELDS: LazyLock<FieldDeserializers<AccessPackageCatalog>> = LazyLock::new(|| {
            FieldDeserializers::inherit(Entity::field_deserializers(), |m: &mut AccessPackageCatalog| &mut m.entity)
                .field("accessPackages", |m: &mut AccessPackageCatalog, n| {
                    m.access_packages =
                        typed_collection_of_object_values(n, create_access_package_from_discriminator_value)?;
                    Ok(())
                })
                .field("catalogStatus", |m: &mut AccessPackageCatalog, n| {
                    m.catalog_status = n.get_string_value()?;
                    Ok(())
                })
                .field("catalogType", |m: &mut AccessPackageCatalog, n| {
                    m.catalog_type = n.get_string_value()?;
                    Ok(())
                })
                .field("createdBy", |m: &mut AccessPackageCatalog, n| {
                    m.created_by = n.get_string_value()?;
                    Ok(())
                })
                .field("createdDateTime", |m: &mut AccessPackageCatalog, n| {
                    m.created_date_time = n.get_date_time_value()?;
                    Ok(())
                })
                .field("description", |m: &mut AccessPackageCatalog, n| {
                    m.description = n.get_string_value()?;
                    Ok(())
                })
                .field("displayName", |m: &mut AccessPackageCatalog, n| {
                    m.display_name = n.get_string_value()?;
                    Ok(())
                })
                .field("isExternallyVisible", |m: &mut AccessPackageCatalog, n| {
                    m.is_externally_visible = n.get_bool_value()?;
                    Ok(())
                })
                .field("modifiedBy", |m: &mut AccessPackageCatalog, n| {
                    m.modified_by = n.get_string_value()?;
                    Ok(())
                })
                .field("modifiedDateTime", |m: &mut AccessPackageCatalog, n| {
                    m.modified_date_time = n.get_date_time_value()?;
                    Ok(())
                })
        });
        &FIELDS
    }
}

impl Parsable for AccessPackageCatalog {
    fn deserialize_field(&mut self, name: &str, node: &dyn ParseNode) -> Result<bool> {
        Self::field_deserializers().apply(self, name, node)
    }

    fn serialize(&self, writer: &mut dyn SerializationWriter) -> Result<()> {
        self.entity.serialize(writer)?;
        if let Some(packages) = &self.access_packages {
            writer.write_collection_of_object_values("accessPackages", Some(&as_parsables(packages)))?;
        }
        writer.write_string_value("catalogStatus", self.catalog_status.as_deref())?;
        writer.write_string_value("catalogType", self.catalog_type.as_deref())?;
        writer.write_string_value("createdBy", self.created_by.as_deref())?;
        writer.write_date_time_value("createdDateTime", self.created_date_time.as_ref())?;
        writer.write_string_value("description", self.description.as_deref())?;
        writer.write_string_value("displayName", self.display_name.as_deref())?;
        writer.write_bool_value("isExternallyVisible", self.is_externally_visible)?;
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

pub fn create_access_package_catalog_from_discriminator_value(
    _node: Option<&dyn ParseNode>,
) -> Result<Box<dyn Parsable>> {
    Ok(construct::<AccessPackageCatalog>())
}
