mod common;

use common::{decode_ok, decode_with, reencode};
use graphmodel_models::{
    create_entity_collection_response_from_discriminator_value, AccessPackage, Entity,
    EntityCollectionResponse, MobileApp, WebApp,
};
use graphmodel_serialization::{Parsable, ODATA_TYPE_KEY};
use pretty_assertions::assert_eq;
use serde_json::json;

fn page() -> serde_json::Value {
    json!({
        "@odata.count": 4,
        "@odata.nextLink": "https://graph.example.com/items?$skiptoken=abc",
        "value": [
            {ODATA_TYPE_KEY: "#microsoft.graph.accessPackage", "id": "1", "displayName": "A"},
            {ODATA_TYPE_KEY: "#microsoft.graph.webApp", "id": "2", "appUrl": "https://x"},
            {ODATA_TYPE_KEY: "#microsoft.graph.mobileApp", "id": "3"},
            {"id": "4"}
        ]
    })
}

#[test]
fn page_metadata() {
    let decoded = decode_ok(create_entity_collection_response_from_discriminator_value, page());
    let response = decoded.downcast_ref::<EntityCollectionResponse>().unwrap();
    assert_eq!(response.odata_count, Some(4));
    assert_eq!(
        response.odata_next_link.as_deref(),
        Some("https://graph.example.com/items?$skiptoken=abc")
    );
    assert!(response.additional_data.is_empty());
}

#[test]
fn elements_resolve_independently() {
    let decoded = decode_ok(create_entity_collection_response_from_discriminator_value, page());
    let response = decoded.downcast_ref::<EntityCollectionResponse>().unwrap();
    let value = response.value.as_ref().unwrap();
    assert!(value[0].is::<AccessPackage>());
    assert!(value[1].is::<WebApp>());
    assert!(value[2].is::<MobileApp>());
    assert!(value[3].is::<Entity>());
    assert_eq!(
        value[1].downcast_ref::<WebApp>().unwrap().app_url.as_deref(),
        Some("https://x")
    );
}

#[test]
fn page_round_trips() {
    let decoded = decode_ok(create_entity_collection_response_from_discriminator_value, page());
    assert_eq!(reencode(decoded.as_ref()), page());
}

#[test]
fn element_error_is_located_by_index() {
    let err = decode_with(
        create_entity_collection_response_from_discriminator_value,
        json!({"value": [{"id": "ok"}, {ODATA_TYPE_KEY: 7}]}),
    )
    .unwrap_err();
    assert_eq!(err.as_decode().unwrap().path().0, "value.1");
}

#[test]
fn empty_page() {
    let decoded = decode_ok(create_entity_collection_response_from_discriminator_value, json!({"value": []}));
    let response = decoded.downcast_ref::<EntityCollectionResponse>().unwrap();
    assert_eq!(response.value.as_ref().map(Vec::len), Some(0));
    assert_eq!(decoded.odata_type(), None);
}
