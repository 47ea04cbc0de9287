use crate::{create_access_package_from_discriminator_value, AccessPackage, Entity};
use chrono::{DateTime, FixedOffset};
use graphmodel_serialization::{
    construct, typed_object_value, AdditionalData, FieldDeserializers, Model, Parsable, ParseNode,
    Result, SerializationWriter,
};
use std::sync::LazyLock;

/// A subject's granted access to one access package.
#[derive(Debug, Clone, PartialEq)]
pub struct AccessPackageAssignment {
    pub entity: Entity,
    pub access_package: Option<Box<AccessPackage>>,
    pub access_package_id: Option<String>,
    pub assignment_policy_id: Option<String>,
    pub assignment_state: Option<String>,
    pub assignment_status: Option<String>,
    pub catalog_id: Option<String>,
    pub expired_date_time: Option<DateTime<FixedOffset>>,
    pub is_extended: Option<bool>,
    pub target_id: Option<String>,
}

impl AccessPackageAssignment {
    pub const ODATA_TYPE: &'static str = "#microsoft.graph.accessPackageAssignment";
}

impl Default for AccessPackageAssignment {
    fn default() -> Self {
        Self {
            entity: Entity::tagged(Self::ODATA_TYPE),
            access_package: None,
            access_package_id: None,
            assignment_policy_id: None,
            assignment_state: None,
            assignment_status: None,
            catalog_id: None,
            expired_date_time: None,
            is_extended: None,
            target_id: None,
        }
    }
}

impl Model for AccessPackageAssignment {
    fn field_deserializers() -> &'static FieldDeserializers<Self> {
        static FIELDS: LazyLock<FieldDeserializers<AccessPackageAssignment>> = LazyLock::new(|| {
            FieldDeserializers::inherit(Entity::field_deserializers(), |m: &mut AccessPackageAssignment| {
                &mut m.entity
            })
            .field("accessPackage", |m: &mut AccessPackageAssignment, n| {
                m.access_package = typed_object_value(n, create_access_package_from_discriminator_value)?;
                Ok(())
            })
            .field("accessPackageId", |m: &mut AccessPackageAssignment, n| {
                m.access_package_id = n.get_string_value()?;
                Ok(())
            })
            .field("assignmentPolicyId", |m: &mut AccessPackageAssignment, n| {
                m.assignment_policy_id = n.get_string_value()?;
                Ok(())
            })
            .field("assignmentState", |m: &mut AccessPackageAssignment, n| {
                m.assignment_state = n.get_string_value()?;
                Ok(())
            })
            .field("assignmentStatus", |m: &mut AccessPackageAssignment, n| {
                m.assignment_status = n.get_string_value()?;
                Ok(())
            })
            .field("catalogId", |m: &mut AccessPackageAssignment, n| {
                m.catalog_id = n.get_string_value()?;
                Ok(())
            })
            .field("expiredDateTime", |m: &mut AccessPackageAssignment, n| {
                m.expired_date_time = n.get_date_time_value()?;
                Ok(())
            })
            .field("isExtended", |m: &mut AccessPackageAssignment, n| {
                m.is_extended = n.get_bool_value()?;
                Ok(())
            })
            .field("targetId", |m: &mut AccessPackageAssignment, n| {
                m.target_id = n.get_string_value()?;
                Ok(())
            })
        });
        &FIELDS
    }
}

impl Parsable for AccessPackageAssignment {
    fn deserialize_field(&mut self, name: &str, node: &dyn ParseNode) -> Result<bool> {
        Self::field_deserializers().apply(self, name, node)
    }

    fn serialize(&self, writer: &mut dyn SerializationWriter) -> Result<()> {
        self.entity.serialize(writer)?;
        writer.write_object_value("accessPackage", self.access_package.as_deref().map(|p| p as &dyn Parsable))?;
        writer.write_string_value("accessPackageId", self.access_package_id.as_deref())?;
        writer.write_string_value("assignmentPolicyId", self.assignment_policy_id.as_deref())?;
        writer.write_string_value("assignmentState", self.assignment_state.as_deref())?;
        writer.write_string_value("assignmentStatus", self.assignment_status.as_deref())?;
        writer.write_string_value("catalogId", self.catalog_id.as_deref())?;
        writer.write_date_time_value("expiredDateTime", self.expired_date_time.as_ref())?;
        writer.write_bool_value("isExtended", self.is_extended)?;
        writer.write_string_value("targetId", self.target_id.as_deref())
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

pub fn create_access_package_assignment_from_discriminator_value(
    _node: Option<&dyn ParseNode>,
) -> Result<Box<dyn Parsable>> {
    Ok(construct::<AccessPackageAssignment>())
}
