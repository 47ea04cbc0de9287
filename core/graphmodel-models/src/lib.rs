//! Model types for the directory and device-management schema.
//!
//! Every type implements [`Parsable`](graphmodel_serialization::Parsable) and
//! exposes a `create_<type>_from_discriminator_value` factory. Abstract bases
//! that have registered subtypes resolve the concrete type from the payload's
//! `@odata.type`:
//! - [`Entity`]: access packages, catalogs, assignments and mobile apps
//! - [`MobileApp`]: web apps
//! - [`AccessReviewSettings`]: business-flow settings
//!
//! Leaf types ignore the payload and always construct themselves.

mod access_package;
mod access_package_assignment;
mod access_package_catalog;
mod access_review_settings;
mod entity;
mod entity_collection_response;
mod mime_content;
mod mobile_app;
mod web_app;

pub use access_package::{create_access_package_from_discriminator_value, AccessPackage};
pub use access_package_assignment::{
    create_access_package_assignment_from_discriminator_value, AccessPackageAssignment,
};
pub use access_package_catalog::{
    create_access_package_catalog_from_discriminator_value, AccessPackageCatalog,
};
pub use access_review_settings::{
    access_review_settings_family, create_access_review_settings_from_discriminator_value,
    create_business_flow_settings_from_discriminator_value, AccessReviewSettings,
    BusinessFlowSettings,
};
pub use entity::{create_entity_from_discriminator_value, entity_family, Entity};
pub use entity_collection_response::{
    create_entity_collection_response_from_discriminator_value, EntityCollectionResponse,
};
pub use mime_content::{create_mime_content_from_discriminator_value, MimeContent};
pub use mobile_app::{
    create_mobile_app_from_discriminator_value, mobile_app_family, MobileApp,
    MobileAppPublishingState,
};
pub use web_app::{create_web_app_from_discriminator_value, WebApp};
