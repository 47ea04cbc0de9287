use graphmodel_serialization::{
    construct, AdditionalData, FieldDeserializers, Model, Parsable, ParseNode, Result,
    SerializationWriter, ODATA_TYPE_KEY,
};
use std::sync::LazyLock;

/// Binary content tagged with its MIME type. `value` travels as base64.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MimeContent {
    pub odata_type: Option<String>,
    pub mime_type: Option<String>,
    pub value: Option<Vec<u8>>,
    pub additional_data: AdditionalData,
}

impl Model for MimeContent {
    fn field_deserializers() -> &'static FieldDeserializers<Self> {
        static FIELDS: LazyLock<FieldDeserializers<MimeContent>> = LazyLock::new(|| {
            FieldDeserializers::new()
                .field(ODATA_TYPE_KEY, |m: &mut MimeContent, n| {
                    m.odata_type = n.get_string_value()?;
                    Ok(())
                })
                .field("type", |m: &mut MimeContent, n| {
                    m.mime_type = n.get_string_value()?;
                    Ok(())
                })
                .field("value", |m: &mut MimeContent, n| {
                    m.value = n.get_byte_array_value()?;
                    Ok(())
                })
        });
        &FIELDS
    }
}

impl Parsable for MimeContent {
    fn deserialize_field(&mut self, name: &str, node: &dyn ParseNode) -> Result<bool> {
        Self::field_deserializers().apply(self, name, node)
    }

    fn serialize(&self, writer: &mut dyn SerializationWriter) -> Result<()> {
        writer.write_string_value(ODATA_TYPE_KEY, self.odata_type.as_deref())?;
        writer.write_string_value("type", self.mime_type.as_deref())?;
        writer.write_byte_array_value("value", self.value.as_deref())?;
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

pub fn create_mime_content_from_discriminator_value(_node: Option<&dyn ParseNode>) -> Result<Box<dyn Parsable>> {
    Ok(construct::<MimeContent>())
}
