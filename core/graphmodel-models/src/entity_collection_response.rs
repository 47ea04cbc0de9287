use crate::create_entity_from_discriminator_value;
use graphmodel_serialization::{
    boxed_as_parsables, collection_of_object_values, construct, AdditionalData, FieldDeserializers,
    Model, Parsable, ParseNode, Result, SerializationWriter,
};
use std::sync::LazyLock;

/// One page of a collection of entities.
///
/// Each element of `value` is resolved through the [`Entity`](crate::Entity)
/// family, so a page can mix subtypes.
#[derive(Debug, Default)]
pub struct EntityCollectionResponse {
    pub odata_count: Option<i64>,
    pub odata_next_link: Option<String>,
    pub value: Option<Vec<Box<dyn Parsable>>>,
    pub additional_data: AdditionalData,
}

impl Model for EntityCollectionResponse {
    fn field_deserializers() -> &'static FieldDeserializers<Self> {
        static FIELDS: LazyLock<FieldDeserializers<EntityCollectionResponse>> = LazyLock::new(|| {
            FieldDeserializers::new()
                .field("@odata.count", |m: &mut EntityCollectionResponse, n| {
                    m.odata_count = n.get_i64_value()?;
                    Ok(())
                })
                .field("@odata.nextLink", |m: &mut EntityCollectionResponse, n| {
                    m.odata_next_link = n.get_string_value()?;
                    Ok(())
                })
                .field("value", |m: &mut EntityCollectionResponse, n| {
                    m.value = collection_of_object_values(n, create_entity_from_discriminator_value)?;
                    Ok(())
                })
        });
        &FIELDS
    }
}

impl Parsable for EntityCollectionResponse {
    fn deserialize_field(&mut self, name: &str, node: &dyn ParseNode) -> Result<bool> {
        Self::field_deserializers().apply(self, name, node)
    }

    fn serialize(&self, writer: &mut dyn SerializationWriter) -> Result<()> {
        writer.write_i64_value("@odata.count", self.odata_count)?;
        writer.write_string_value("@odata.nextLink", self.odata_next_link.as_deref())?;
        if let Some(value) = &self.value {
            writer.write_collection_of_object_values("value", Some(&boxed_as_parsables(value)))?;
        }
        writer.write_additional_data(&self.additional_data)
    }

    fn additional_data(&self) -> Option<&AdditionalData> {
        Some(&self.additional_data)
    }

    fn additional_data_mut(&mut self) -> Option<&mut AdditionalData> {
        Some(&mut self.additional_data)
    }
}

pub fn create_entity_collection_response_from_discriminator_value(
    _node: Option<&dyn ParseNode>,
) -> Result<Box<dyn Parsable>> {
    Ok(construct::<EntityCollectionResponse>())
}
