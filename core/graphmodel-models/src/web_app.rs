use crate::MobileApp;
use graphmodel_serialization::{
    construct, AdditionalData, FieldDeserializers, Model, Parsable, ParseNode, Result,
    SerializationWriter,
};
use std::sync::LazyLock;

/// A web link published as an app.
#[derive(Debug, Clone, PartialEq)]
pub struct WebApp {
    pub mobile_app: MobileApp,
    pub app_url: Option<String>,
    pub use_managed_browser: Option<bool>,
}

impl WebApp {
    pub const ODATA_TYPE: &'static str = "#microsoft.graph.webApp";
}

impl Default for WebApp {
    fn default() -> Self {
        Self {
            mobile_app: MobileApp::tagged(Self::ODATA_TYPE),
            app_url: None,
            use_managed_browser: None,
        }
    }
}

impl Model for WebApp {
    fn field_deserializers() -> &'static FieldDeserializers<Self> {
        static FIELDS: LazyLock<FieldDeserializers<WebApp>> = LazyLock::new(|| {
            FieldDeserializers::inherit(MobileApp::field_deserializers(), |m: &mut WebApp| &mut m.mobile_app)
                .field("appUrl", |m: &mut WebApp, n| {
                    m.app_url = n.get_string_value()?;
                    Ok(())
                })
                .field("useManagedBrowser", |m: &mut WebApp, n| {
                    m.use_managed_browser = n.get_bool_value()?;
                    Ok(())
                })
        });
        &FIELDS
    }
}

impl Parsable for WebApp {
    fn deserialize_field(&mut self, name: &str, node: &dyn ParseNode) -> Result<bool> {
        Self::field_deserializers().apply(self, name, node)
    }

    fn serialize(&self, writer: &mut dyn SerializationWriter) -> Result<()> {
        self.mobile_app.serialize(writer)?;
        writer.write_string_value("appUrl", self.app_url.as_deref())?;
        writer.write_bool_value("useManagedBrowser", self.use_managed_browser)
    }

    fn odata_type(&self) -> Option<&str> {
        self.mobile_app.odata_type()
    }

    fn additional_data(&self) -> Option<&AdditionalData> {
        self.mobile_app.additional_data()
    }

    fn additional_data_mut(&mut self) -> Option<&mut AdditionalData> {
        self.mobile_app.additional_data_mut()
    }
}

pub fn create_web_app_from_discriminator_value(_node: Option<&dyn ParseNode>) -> Result<Box<dyn Parsable>> {
    Ok(construct::<WebApp>())
}
