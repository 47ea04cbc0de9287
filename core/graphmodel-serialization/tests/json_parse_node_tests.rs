use chrono::{DateTime, Datelike, Timelike};
use graphmodel_serialization::json::JsonParseNode;
use graphmodel_serialization::{
    DateOnly, DecodeError, Error, JsonConfig, ParseNode, TimeOnly, UntypedValue,
};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use uuid::Uuid;

fn with_node<R>(value: Value, read: impl FnOnce(&dyn ParseNode) -> R) -> R {
    let config = JsonConfig::default();
    let node = JsonParseNode::new(&value, &config);
    read(&node)
}

fn decode_error(err: Error) -> DecodeError {
    match err {
        Error::Decode(e) => e,
        other => panic!("expected decode error, got {other}"),
    }
}

// ── Scalars ──────────────────────────────────────────────────────

#[test]
fn reads_strings_and_bools() {
    assert_eq!(with_node(json!("hi"), |n| n.get_string_value().unwrap()), Some("hi".into()));
    assert_eq!(with_node(json!(false), |n| n.get_bool_value().unwrap()), Some(false));
}

#[test]
fn null_reads_as_absent_for_every_getter() {
    with_node(Value::Null, |n| {
        assert!(n.is_null());
        assert_eq!(n.get_string_value().unwrap(), None);
        assert_eq!(n.get_bool_value().unwrap(), None);
        assert_eq!(n.get_i32_value().unwrap(), None);
        assert_eq!(n.get_i64_value().unwrap(), None);
        assert_eq!(n.get_f64_value().unwrap(), None);
        assert_eq!(n.get_date_time_value().unwrap(), None);
        assert_eq!(n.get_byte_array_value().unwrap(), None);
        assert_eq!(n.get_uuid_value().unwrap(), None);
        assert!(n.collection_nodes().unwrap().is_none());
        assert!(n.object_fields().unwrap().is_empty());
    });
}

#[test]
fn integer_widths() {
    assert_eq!(with_node(json!(-7), |n| n.get_i32_value().unwrap()), Some(-7));
    assert_eq!(with_node(json!(i64::MAX), |n| n.get_i64_value().unwrap()), Some(i64::MAX));

    let err = with_node(json!(i64::from(i32::MAX) + 1), |n| n.get_i32_value().unwrap_err());
    assert_eq!(
        decode_error(err),
        DecodeError::OutOfRange {
            kind: "i32",
            value: "2147483648".into()
        }
    );

    let err = with_node(json!(u64::MAX), |n| n.get_i64_value().unwrap_err());
    assert!(matches!(decode_error(err), DecodeError::OutOfRange { kind: "i64", .. }));
}

#[test]
fn float_is_not_an_integer() {
    let err = with_node(json!(1.5), |n| n.get_i64_value().unwrap_err());
    assert_eq!(
        decode_error(err),
        DecodeError::TypeMismatch {
            expected: "integer",
            found: "float"
        }
    );
}

#[test]
fn doubles_accept_integers_and_special_strings() {
    assert_eq!(with_node(json!(2), |n| n.get_f64_value().unwrap()), Some(2.0));
    assert_eq!(with_node(json!(0.25), |n| n.get_f64_value().unwrap()), Some(0.25));
    assert!(with_node(json!("NaN"), |n| n.get_f64_value().unwrap()).unwrap().is_nan());
    assert_eq!(with_node(json!("INF"), |n| n.get_f64_value().unwrap()), Some(f64::INFINITY));
    assert_eq!(with_node(json!("-INF"), |n| n.get_f64_value().unwrap()), Some(f64::NEG_INFINITY));
    assert!(with_node(json!("1.0"), |n| n.get_f64_value()).is_err());
}

#[test]
fn wrong_wire_type_reports_both_kinds() {
    let err = with_node(json!([1]), |n| n.get_string_value().unwrap_err());
    assert_eq!(
        decode_error(err),
        DecodeError::TypeMismatch {
            expected: "string",
            found: "array"
        }
    );
}

// ── Formatted strings ────────────────────────────────────────────

#[test]
fn date_time_keeps_offset() {
    let parsed = with_node(json!("2024-03-01T10:30:00+02:00"), |n| n.get_date_time_value().unwrap()).unwrap();
    assert_eq!(parsed.offset().local_minus_utc(), 2 * 3600);
    assert_eq!(parsed.hour(), 10);
}

#[test]
fn date_time_with_fraction_and_zulu() {
    let parsed = with_node(json!("2024-03-01T10:30:00.1234567Z"), |n| n.get_date_time_value().unwrap()).unwrap();
    assert_eq!(parsed, DateTime::parse_from_rfc3339("2024-03-01T10:30:00.1234567+00:00").unwrap());
}

#[test]
fn naive_date_time_is_read_as_utc_by_default() {
    let parsed = with_node(json!("2024-03-01T10:30:00"), |n| n.get_date_time_value().unwrap()).unwrap();
    assert_eq!(parsed.offset().local_minus_utc(), 0);
    assert_eq!(parsed.day(), 1);
}

#[test]
fn naive_date_time_rejected_without_assume_utc() {
    let config = JsonConfig {
        assume_utc: false,
        ..JsonConfig::default()
    };
    let value = json!("2024-03-01T10:30:00");
    let node = JsonParseNode::new(&value, &config);
    let err = decode_error(node.get_date_time_value().unwrap_err());
    assert!(matches!(err, DecodeError::InvalidFormat { kind: "date-time", .. }));
}

#[test]
fn date_and_time_only() {
    assert_eq!(
        with_node(json!("2024-02-29"), |n| n.get_date_only_value().unwrap()),
        Some(DateOnly::from_ymd(2024, 2, 29).unwrap())
    );
    assert_eq!(
        with_node(json!("08:15:30"), |n| n.get_time_only_value().unwrap()),
        Some(TimeOnly::from_hms(8, 15, 30).unwrap())
    );
    assert!(with_node(json!("2023-02-29"), |n| n.get_date_only_value()).is_err());
}

#[test]
fn byte_arrays_are_standard_base64() {
    assert_eq!(
        with_node(json!("aGVsbG8="), |n| n.get_byte_array_value().unwrap()),
        Some(b"hello".to_vec())
    );
    let err = with_node(json!("not base64!"), |n| n.get_byte_array_value().unwrap_err());
    assert!(matches!(decode_error(err), DecodeError::InvalidFormat { kind: "base64", .. }));
}

#[test]
fn uuids() {
    let id = Uuid::parse_str("7c9e6679-7425-40de-944b-e07fc1f90ae7").unwrap();
    assert_eq!(
        with_node(json!("7c9e6679-7425-40de-944b-e07fc1f90ae7"), |n| n.get_uuid_value().unwrap()),
        Some(id)
    );
    assert!(with_node(json!("7c9e6679"), |n| n.get_uuid_value()).is_err());
}

// ── Structure ────────────────────────────────────────────────────

#[test]
fn child_node_lookup() {
    with_node(json!({"a": 1, "b": null}), |n| {
        assert_eq!(n.child_node("a").unwrap().unwrap().get_i64_value().unwrap(), Some(1));
        assert!(n.child_node("b").unwrap().unwrap().is_null());
        assert!(n.child_node("c").unwrap().is_none());
    });
}

#[test]
fn child_node_of_scalar_is_absent() {
    with_node(json!(5), |n| assert!(n.child_node("a").unwrap().is_none()));
}

#[test]
fn object_fields_in_key_order() {
    let names = with_node(json!({"b": 1, "a": 2, "@odata.type": "t"}), |n| {
        n.object_fields()
            .unwrap()
            .into_iter()
            .map(|(name, _)| name)
            .collect::<Vec<_>>()
    });
    assert_eq!(names, vec!["@odata.type", "a", "b"]);
}

#[test]
fn collection_nodes_of_non_array_fail() {
    let err = with_node(json!({"a": 1}), |n| n.collection_nodes().map(|nodes| nodes.map(|v| v.len())).unwrap_err());
    assert!(matches!(decode_error(err), DecodeError::TypeMismatch { expected: "array", found: "object" }));
}

#[test]
fn kinds() {
    let kinds: Vec<_> = [json!(null), json!(true), json!(1), json!(1.5), json!("s"), json!([]), json!({})]
        .into_iter()
        .map(|v| with_node(v, |n| n.kind()))
        .collect();
    assert_eq!(kinds, vec!["null", "bool", "integer", "float", "string", "array", "object"]);
}

#[test]
fn raw_value_preserves_structure() {
    let raw = with_node(json!({"k": [1, "two", null, {"x": 2.5}]}), |n| n.raw_value().unwrap());
    assert_eq!(
        raw,
        UntypedValue::from(json!({"k": [1, "two", null, {"x": 2.5}]}))
    );
    assert_eq!(raw.get("k").and_then(|k| k.as_array()).map(|items| items.len()), Some(4));
}

// ── Depth limit ──────────────────────────────────────────────────

fn nested(depth: usize) -> Value {
    (0..depth).fold(json!(1), |inner, _| json!({ "n": inner }))
}

#[test]
fn depth_within_limit_is_readable() {
    let config = JsonConfig {
        max_depth: 3,
        ..JsonConfig::default()
    };
    let value = nested(3);
    let root = JsonParseNode::new(&value, &config);
    let a = root.child_node("n").unwrap().unwrap();
    let b = a.child_node("n").unwrap().unwrap();
    let c = b.child_node("n").unwrap().unwrap();
    assert_eq!(c.get_i64_value().unwrap(), Some(1));
}

#[test]
fn depth_beyond_limit_fails() {
    let config = JsonConfig {
        max_depth: 2,
        ..JsonConfig::default()
    };
    let value = nested(3);
    let root = JsonParseNode::new(&value, &config);
    let a = root.child_node("n").unwrap().unwrap();
    let b = a.child_node("n").unwrap().unwrap();
    let err = b.child_node("n").map(|child| child.is_some()).unwrap_err();
    assert_eq!(decode_error(err), DecodeError::DepthExceeded { limit: 2 });
}

#[test]
fn raw_value_counts_nested_depth() {
    let config = JsonConfig {
        max_depth: 2,
        ..JsonConfig::default()
    };
    let value = nested(3);
    let root = JsonParseNode::new(&value, &config);
    let err = root.raw_value().unwrap_err();
    assert_eq!(decode_error(err), DecodeError::DepthExceeded { limit: 2 });

    let shallow = nested(2);
    let raw = JsonParseNode::new(&shallow, &config).raw_value().unwrap();
    assert_eq!(raw, UntypedValue::from(shallow.clone()));
}

#[test]
fn raw_value_keeps_large_unsigned() {
    let raw = with_node(json!(u64::MAX), |n| n.raw_value().unwrap());
    assert_eq!(raw, UntypedValue::Unsigned(u64::MAX));
}

#[test]
fn nodes_report_their_depth() {
    let config = JsonConfig::default();
    let value = json!([[1]]);
    let root = JsonParseNode::new(&value, &config);
    assert_eq!(root.depth(), 0);
    assert_eq!(root.value(), &value);
}
