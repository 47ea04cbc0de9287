//! Decoding reports for the inspect tool.

use std::fs;
use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use clap::ValueEnum;
use graphmodel_models::{
    create_access_review_settings_from_discriminator_value,
    create_entity_collection_response_from_discriminator_value,
    create_entity_from_discriminator_value, create_mobile_app_from_discriminator_value,
};
use graphmodel_serialization::{decode_json, encode_json_value, JsonConfig, ParsableFactory};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Model family a payload is decoded through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Family {
    Entity,
    MobileApp,
    AccessReviewSettings,
    EntityCollection,
}

impl Family {
    pub fn name(self) -> &'static str {
        match self {
            Family::Entity => "entity",
            Family::MobileApp => "mobile-app",
            Family::AccessReviewSettings => "access-review-settings",
            Family::EntityCollection => "entity-collection",
        }
    }

    pub fn factory(self) -> ParsableFactory {
        match self {
            Family::Entity => create_entity_from_discriminator_value,
            Family::MobileApp => create_mobile_app_from_discriminator_value,
            Family::AccessReviewSettings => create_access_review_settings_from_discriminator_value,
            Family::EntityCollection => create_entity_collection_response_from_discriminator_value,
        }
    }
}

/// What a payload decoded into.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Report {
    pub family: String,
    /// Concrete type chosen by the family's factory. `None` for a null payload.
    pub resolved_type: Option<String>,
    pub odata_type: Option<String>,
    /// Top-level fields the resolved type does not declare.
    pub unmodelled_fields: Vec<String>,
    /// The decoded instance, encoded again.
    pub payload: serde_json::Value,
}

/// Decodes `bytes` through `family` and describes the result.
pub fn inspect(bytes: &[u8], family: Family, config: &JsonConfig) -> Result<Report> {
    let decoded = decode_json(bytes, config, family.factory())
        .with_context(|| format!("failed to decode payload as {}", family.name()))?;

    let Some(instance) = decoded else {
        debug!(family = family.name(), "payload is null");
        return Ok(Report {
            family: family.name().to_string(),
            resolved_type: None,
            odata_type: None,
            unmodelled_fields: Vec::new(),
            payload: serde_json::Value::Null,
        });
    };

    let payload = encode_json_value(instance.as_ref()).context("failed to re-encode decoded payload")?;
    let unmodelled_fields = instance
        .additional_data()
        .map(|bag| bag.keys().cloned().collect())
        .unwrap_or_default();
    debug!(family = family.name(), resolved = instance.type_name(), "decoded payload");

    Ok(Report {
        family: family.name().to_string(),
        resolved_type: Some(instance.type_name().to_string()),
        odata_type: instance.odata_type().map(str::to_string),
        unmodelled_fields,
        payload,
    })
}

/// Reads a payload from a file, or from stdin when `path` is `-`.
pub fn read_input(path: &Path) -> Result<Vec<u8>> {
    if path == Path::new("-") {
        let mut bytes = Vec::new();
        std::io::stdin()
            .read_to_end(&mut bytes)
            .context("failed to read payload from stdin")?;
        return Ok(bytes);
    }
    fs::read(path).with_context(|| format!("failed to read {}", path.display()))
}

/// Renders a report as JSON text.
pub fn render(report: &Report, pretty: bool) -> Result<String> {
    let text = if pretty {
        serde_json::to_string_pretty(report)
    } else {
        serde_json::to_string(report)
    };
    text.context("failed to render report")
}
