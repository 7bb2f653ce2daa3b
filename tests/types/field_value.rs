use std::borrow::Cow;

use error_fields::FieldValue;

#[test]
fn conversions_cover_the_primitive_palette() {
    assert_eq!(FieldValue::from(true), FieldValue::Bool(true));
    assert_eq!(FieldValue::from(-3i32), FieldValue::Int(-3));
    assert_eq!(FieldValue::from(42u64), FieldValue::UInt(42));
    assert_eq!(FieldValue::from(3usize), FieldValue::UInt(3));
    assert_eq!(FieldValue::from(1.5f64), FieldValue::Float(1.5));
    assert_eq!(FieldValue::from("s"), FieldValue::Str("s".to_string()));
    assert_eq!(FieldValue::from(String::from("owned")), FieldValue::Str("owned".into()));
    assert_eq!(FieldValue::from(Cow::Borrowed("cow")), FieldValue::Str("cow".into()));
    assert_eq!(FieldValue::from(None::<u64>), FieldValue::Null);
    assert_eq!(FieldValue::from(Some(7u8)), FieldValue::UInt(7));
}

#[test]
fn as_str_only_matches_strings() {
    assert_eq!(FieldValue::from("users").as_str(), Some("users"));
    assert_eq!(FieldValue::from(180u32).as_str(), None);
    assert_eq!(FieldValue::Null.as_str(), None);
}

#[test]
fn display_renders_bare_values() {
    assert_eq!(FieldValue::from("users").to_string(), "users");
    assert_eq!(FieldValue::from(-3i64).to_string(), "-3");
    assert_eq!(FieldValue::from(true).to_string(), "true");
    assert_eq!(FieldValue::Null.to_string(), "null");
}

#[cfg(feature = "serde")]
#[test]
fn serializes_untagged_through_serde_json() {
    use serde_json::json;

    assert_eq!(serde_json::to_value(FieldValue::from("x")).unwrap(), json!("x"));
    assert_eq!(serde_json::to_value(FieldValue::from(42i64)).unwrap(), json!(42));
    assert_eq!(serde_json::to_value(FieldValue::Null).unwrap(), json!(null));

    let back: FieldValue = serde_json::from_value(json!(true)).unwrap();
    assert_eq!(back, FieldValue::Bool(true));
}
