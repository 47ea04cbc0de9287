use crate::{create_mime_content_from_discriminator_value, Entity, MimeContent, WebApp};
use chrono::{DateTime, FixedOffset};
use graphmodel_serialization::{
    collection_of_primitive_values, construct, enum_value, typed_object_value, AdditionalData,
    DecodeError, FieldDeserializers, Model, Parsable, ParseNode, Result, SerializationWriter,
    TypeRegistry,
};
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

/// Publishing lifecycle of a managed app.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MobileAppPublishingState {
    NotPublished,
    Processing,
    Published,
}

impl MobileAppPublishingState {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::NotPublished => "notPublished",
            Self::Processing => "processing",
            Self::Published => "published",
        }
    }
}

impl fmt::Display for MobileAppPublishingState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MobileAppPublishingState {
    type Err = DecodeError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "notPublished" => Ok(Self::NotPublished),
            "processing" => Ok(Self::Processing),
            "published" => Ok(Self::Published),
            other => Err(DecodeError::UnknownEnumMember {
                kind: "mobileAppPublishingState",
                value: other.to_string(),
            }),
        }
    }
}

/// An app managed through device management. Base of the app hierarchy.
#[derive(Debug, Clone, PartialEq)]
pub struct MobileApp {
    pub entity: Entity,
    pub created_date_time: Option<DateTime<FixedOffset>>,
    pub dependent_app_count: Option<i32>,
    pub description: Option<String>,
    pub developer: Option<String>,
    pub display_name: Option<String>,
    pub information_url: Option<String>,
    pub is_assigned: Option<bool>,
    pub is_featured: Option<bool>,
    pub large_icon: Option<Box<MimeContent>>,
    pub last_modified_date_time: Option<DateTime<FixedOffset>>,
    pub notes: Option<String>,
    pub owner: Option<String>,
    pub privacy_information_url: Option<String>,
    pub publisher: Option<String>,
    pub publishing_state: Option<MobileAppPublishingState>,
    pub role_scope_tag_ids: Option<Vec<String>>,
    pub superseded_app_count: Option<i32>,
    pub superseding_app_count: Option<i32>,
    pub upload_state: Option<i32>,
}

impl MobileApp {
    pub const ODATA_TYPE: &'static str = "#microsoft.graph.mobileApp";

    pub(crate) fn tagged(odata_type: &str) -> Self {
        Self {
            entity: Entity::tagged(odata_type),
            created_date_time: None,
            dependent_app_count: None,
            description: None,
            developer: None,
            display_name: None,
            information_url: None,
            is_assigned: None,
            is_featured: None,
            large_icon: None,
            last_modified_date_time: None,
            notes: None,
            owner: None,
            privacy_information_url: None,
            publisher: None,
            publishing_state: None,
            role_scope_tag_ids: None,
            superseded_app_count: None,
            superseding_app_count: None,
            upload_state: None,
        }
    }
}

impl Default for MobileApp {
    fn default() -> Self {
        Self::tagged(Self::ODATA_TYPE)
    }
}

impl Model for MobileApp {
    fn field_deserializers() -> &'static FieldDeserializers<Self> {
        static FIELDS: LazyLock<FieldDeserializers<MobileApp>> = LazyLock::new(|| {
            FieldDeserializers::inherit(Entity::field_deserializers(), |m: &mut MobileApp| &mut m.entity)
                .field("createdDateTime", |m: &mut MobileApp, n| {
                    m.created_date_time = n.get_date_time_value()?;
                    Ok(())
                })
                .field("dependentAppCount", |m: &mut MobileApp, n| {
                    m.dependent_app_count = n.get_i32_value()?;
                    Ok(())
                })
                .field("description", |m: &mut MobileApp, n| {
                    m.description = n.get_string_value()?;
                    Ok(())
                })
                .field("developer", |m: &mut MobileApp, n| {
                    m.developer = n.get_string_value()?;
                    Ok(())
                })
                .field("displayName", |m: &mut MobileApp, n| {
                    m.display_name = n.get_string_value()?;
                    Ok(())
                })
                .field("informationUrl", |m: &mut MobileApp, n| {
                    m.information_url = n.get_string_value()?;
                    Ok(())
                })
                .field("isAssigned", |m: &mut MobileApp, n| {
                    m.is_assigned = n.get_bool_value()?;
                    Ok(())
                })
                .field("isFeatured", |m: &mut MobileApp, n| {
                    m.is_featured = n.get_bool_value()?;
                    Ok(())
                })
                .field("largeIcon", |m: &mut MobileApp, n| {
                    m.large_icon = typed_object_value(n, create_mime_content_from_discriminator_value)?;
                    Ok(())
                })
                .field("lastModifiedDateTime", |m: &mut MobileApp, n| {
                    m.last_modified_date_time = n.get_date_time_value()?;
                    Ok(())
                })
                .field("notes", |m: &mut MobileApp, n| {
                    m.notes = n.get_string_value()?;
                    Ok(())
                })
                .field("owner", |m: &mut MobileApp, n| {
                    m.owner = n.get_string_value()?;
                    Ok(())
                })
                .field("privacyInformationUrl", |m: &mut MobileApp, n| {
                    m.privacy_information_url = n.get_string_value()?;
                    Ok(())
                })
                .field("publisher", |m: &mut MobileApp, n| {
                    m.publisher = n.get_string_value()?;
                    Ok(())
                })
                .field("publishingState", |m: &mut MobileApp, n| {
                    m.publishing_state = enum_value(n)?;
                    Ok(())
                })
                .field("roleScopeTagIds", |m: &mut MobileApp, n| {
                    m.role_scope_tag_ids = collection_of_primitive_values(n, |item| item.get_string_value())?;
                    Ok(())
                })
                .field("supersededAppCount", |m: &mut MobileApp, n| {
                    m.superseded_app_count = n.get_i32_value()?;
                    Ok(())
                })
                .field("supersedingAppCount", |m: &mut MobileApp, n| {
                    m.superseding_app_count = n.get_i32_value()?;
                    Ok(())
                })
                .field("uploadState", |m: &mut MobileApp, n| {
                    m.upload_state = n.get_i32_value()?;
                    Ok(())
                })
        });
        &FIELDS
    }
}

impl Parsable for MobileApp {
    fn deserialize_field(&mut self, name: &str, node: &dyn ParseNode) -> Result<bool> {
        Self::field_deserializers().apply(self, name, node)
    }

    fn serialize(&self, writer: &mut dyn SerializationWriter) -> Result<()> {
        self.entity.serialize(writer)?;
        writer.write_date_time_value("createdDateTime", self.created_date_time.as_ref())?;
        writer.write_i32_value("dependentAppCount", self.dependent_app_count)?;
        writer.write_string_value("description", self.description.as_deref())?;
        writer.write_string_value("developer", self.developer.as_deref())?;
        writer.write_string_value("displayName", self.display_name.as_deref())?;
        writer.write_string_value("informationUrl", self.information_url.as_deref())?;
        writer.write_bool_value("isAssigned", self.is_assigned)?;
        writer.write_bool_value("isFeatured", self.is_featured)?;
        writer.write_object_value("largeIcon", self.large_icon.as_deref().map(|icon| icon as &dyn Parsable))?;
        writer.write_date_time_value("lastModifiedDateTime", self.last_modified_date_time.as_ref())?;
        writer.write_string_value("notes", self.notes.as_deref())?;
        writer.write_string_value("owner", self.owner.as_deref())?;
        writer.write_string_value("privacyInformationUrl", self.privacy_information_url.as_deref())?;
        writer.write_string_value("publisher", self.publisher.as_deref())?;
        writer.write_enum_value("publishingState", self.publishing_state.map(MobileAppPublishingState::as_str))?;
        writer.write_collection_of_string_values("roleScopeTagIds", self.role_scope_tag_ids.as_deref())?;
        writer.write_i32_value("supersededAppCount", self.superseded_app_count)?;
        writer.write_i32_value("supersedingAppCount", self.superseding_app_count)?;
        writer.write_i32_value("uploadState", self.upload_state)
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

static MOBILE_APP_FAMILY: LazyLock<TypeRegistry> = LazyLock::new(|| {
    TypeRegistry::builder("MobileApp", construct::<MobileApp>)
        .register(WebApp::ODATA_TYPE, construct::<WebApp>)
        .build()
        .expect("MobileApp discriminators are unique")
});

/// The registry behind [`create_mobile_app_from_discriminator_value`].
pub fn mobile_app_family() -> &'static TypeRegistry {
    &MOBILE_APP_FAMILY
}

/// Creates the [`MobileApp`] subtype named by the node's `@odata.type`.
pub fn create_mobile_app_from_discriminator_value(node: Option<&dyn ParseNode>) -> Result<Box<dyn Parsable>> {
    MOBILE_APP_FAMILY.create(node)
}
