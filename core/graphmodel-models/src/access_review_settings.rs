use graphmodel_serialization::{
    construct, AdditionalData, FieldDeserializers, Model, Parsable, ParseNode, Result,
    SerializationWriter, TypeRegistry, ODATA_TYPE_KEY,
};
use std::sync::LazyLock;

/// Settings of an access review. Complex type: no id, carries its own bag.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AccessReviewSettings {
    pub odata_type: Option<String>,
    pub access_recommendations_enabled: Option<bool>,
    pub activity_duration_in_days: Option<i32>,
    pub auto_apply_review_results_enabled: Option<bool>,
    pub auto_review_enabled: Option<bool>,
    pub justification_required_on_approval: Option<bool>,
    pub mail_notifications_enabled: Option<bool>,
    pub reminders_enabled: Option<bool>,
    pub additional_data: AdditionalData,
}

impl Model for AccessReviewSettings {
    fn field_deserializers() -> &'static FieldDeserializers<Self> {
        static FIELDS: LazyLock<FieldDeserializers<AccessReviewSettings>> = LazyLock::new(|| {
            FieldDeserializers::new()
                .field("accessRecommendationsEnabled", |m: &mut AccessReviewSettings, n| {
                    m.access_recommendations_enabled = n.get_bool_value()?;
                    Ok(())
                })
                .field("activityDurationInDays", |m: &mut AccessReviewSettings, n| {
                    m.activity_duration_in_days = n.get_i32_value()?;
                    Ok(())
                })
                .field("autoApplyReviewResultsEnabled", |m: &mut AccessReviewSettings, n| {
                    m.auto_apply_review_results_enabled = n.get_bool_value()?;
                    Ok(())
                })
                .field("autoReviewEnabled", |m: &mut AccessReviewSettings, n| {
                    m.auto_review_enabled = n.get_bool_value()?;
                    Ok(())
                })
                .field("justificationRequiredOnApproval", |m: &mut AccessReviewSettings, n| {
                    m.justification_required_on_approval = n.get_bool_value()?;
                    Ok(())
                })
                .field("mailNotificationsEnabled", |m: &mut AccessReviewSettings, n| {
                    m.mail_notifications_enabled = n.get_bool_value()?;
                    Ok(())
                })
                .field(ODATA_TYPE_KEY, |m: &mut AccessReviewSettings, n| {
                    m.odata_type = n.get_string_value()?;
                    Ok(())
                })
                .field("remindersEnabled", |m: &mut AccessReviewSettings, n| {
                    m.reminders_enabled = n.get_bool_value()?;
                    Ok(())
                })
        });
        &FIELDS
    }
}

impl Parsable for AccessReviewSettings {
    fn deserialize_field(&mut self, name: &str, node: &dyn ParseNode) -> Result<bool> {
        Self::field_deserializers().apply(self, name, node)
    }

    fn serialize(&self, writer: &mut dyn SerializationWriter) -> Result<()> {
        writer.write_bool_value("accessRecommendationsEnabled", self.access_recommendations_enabled)?;
        writer.write_i32_value("activityDurationInDays", self.activity_duration_in_days)?;
        writer.write_bool_value("autoApplyReviewResultsEnabled", self.auto_apply_review_results_enabled)?;
        writer.write_bool_value("autoReviewEnabled", self.auto_review_enabled)?;
        writer.write_bool_value("justificationRequiredOnApproval", self.justification_required_on_approval)?;
        writer.write_bool_value("mailNotificationsEnabled", self.mail_notifications_enabled)?;
        writer.write_string_value(ODATA_TYPE_KEY, self.odata_type.as_deref())?;
        writer.write_bool_value("remindersEnabled", self.reminders_enabled)?;
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

/// Review settings for business flows.
#[derive(Debug, Clone, PartialEq)]
pub struct BusinessFlowSettings {
    pub settings: AccessReviewSettings,
    pub duration_in_days: Option<i32>,
}

impl BusinessFlowSettings {
    pub const ODATA_TYPE: &'static str = "#microsoft.graph.businessFlowSettings";
}

impl Default for BusinessFlowSettings {
    fn default() -> Self {
        Self {
            settings: AccessReviewSettings {
                odata_type: Some(Self::ODATA_TYPE.to_string()),
                ..AccessReviewSettings::default()
            },
            duration_in_days: None,
        }
    }
}

impl Model for BusinessFlowSettings {
    fn field_deserializers() -> &'static FieldDeserializers<Self> {
        static FIELDS: LazyLock<FieldDeserializers<BusinessFlowSettings>> = LazyLock::new(|| {
            FieldDeserializers::inherit(AccessReviewSettings::field_deserializers(), |m: &mut BusinessFlowSettings| {
                &mut m.settings
            })
            .field("durationInDays", |m: &mut BusinessFlowSettings, n| {
                m.duration_in_days = n.get_i32_value()?;
                Ok(())
            })
        });
        &FIELDS
    }
}

impl Parsable for BusinessFlowSettings {
    fn deserialize_field(&mut self, name: &str, node: &dyn ParseNode) -> Result<bool> {
        Self::field_deserializers().apply(self, name, node)
    }

    fn serialize(&self, writer: &mut dyn SerializationWriter) -> Result<()> {
        self.settings.serialize(writer)?;
        writer.write_i32_value("durationInDays", self.duration_in_days)
    }

    fn odata_type(&self) -> Option<&str> {
        self.settings.odata_type()
    }

    fn additional_data(&self) -> Option<&AdditionalData> {
        self.settings.additional_data()
    }

    fn additional_data_mut(&mut self) -> Option<&mut AdditionalData> {
        self.settings.additional_data_mut()
    }
}

static ACCESS_REVIEW_SETTINGS_FAMILY: LazyLock<TypeRegistry> = LazyLock::new(|| {
    TypeRegistry::builder("AccessReviewSettings", construct::<AccessReviewSettings>)
        .register(BusinessFlowSettings::ODATA_TYPE, construct::<BusinessFlowSettings>)
        .build()
        .expect("AccessReviewSettings discriminators are unique")
});

/// The registry behind [`create_access_review_settings_from_discriminator_value`].
pub fn access_review_settings_family() -> &'static TypeRegistry {
    &ACCESS_REVIEW_SETTINGS_FAMILY
}

/// Creates the [`AccessReviewSettings`] subtype named by the node's `@odata.type`.
pub fn create_access_review_settings_from_discriminator_value(
    node: Option<&dyn ParseNode>,
) -> Result<Box<dyn Parsable>> {
    ACCESS_REVIEW_SETTINGS_FAMILY.create(node)
}

pub fn create_business_flow_settings_from_discriminator_value(
    _node: Option<&dyn ParseNode>,
) -> Result<Box<dyn Parsable>> {
    Ok(construct::<BusinessFlowSettings>())
}
