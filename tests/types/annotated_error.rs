use std::error::Error;
use std::thread;

use error_fields::{fields, AnnotatedError, FieldValue, FieldVec};

#[test]
fn root_holds_exactly_the_supplied_pairs() {
    let err = AnnotatedError::root(fields!["a" => 1, "b" => "two", "c" => true]);

    let fields_map = err.fields();
    assert_eq!(fields_map.len(), 3);
    assert_eq!(fields_map["a"], FieldValue::from(1));
    assert_eq!(fields_map["b"], FieldValue::from("two"));
    assert_eq!(fields_map["c"], FieldValue::from(true));
}

#[test]
fn odd_trailing_entry_is_ignored() {
    let mut pairs = FieldVec::new();
    pairs.push(FieldValue::from("a"));
    pairs.push(FieldValue::from(1));
    pairs.push(FieldValue::from("b"));

    let fields_map = AnnotatedError::root(pairs).fields();
    assert_eq!(fields_map.len(), 1);
    assert_eq!(fields_map["a"], FieldValue::from(1));
}

#[test]
fn non_string_key_drops_the_pair() {
    let mut pairs = FieldVec::new();
    pairs.push(FieldValue::from(7));
    pairs.push(FieldValue::from("x"));
    pairs.push(FieldValue::from("a"));
    pairs.push(FieldValue::from(1));

    let fields_map = AnnotatedError::root(pairs).fields();
    assert_eq!(fields_map.len(), 1);
    assert_eq!(fields_map["a"], FieldValue::from(1));
}

#[test]
fn wrap_overlays_new_values_on_collision() {
    let inner = AnnotatedError::wrap("boom", fields!["attempt" => 1, "host" => "db-01"]);
    let outer = AnnotatedError::wrap(inner, fields!["attempt" => 2]);

    let fields_map = outer.fields();
    assert_eq!(fields_map.len(), 2);
    assert_eq!(fields_map["attempt"], FieldValue::from(2));
    assert_eq!(fields_map["host"], FieldValue::from("db-01"));
}

#[test]
fn message_is_the_cause_message_untouched() {
    let err = AnnotatedError::wrap("mysql has gone away", fields!["user_id" => 180]);

    assert_eq!(err.to_string(), "mysql has gone away");
    assert!(!err.to_string().contains("180"));
}

#[test]
fn causeless_root_renders_its_fields() {
    let err = AnnotatedError::root(fields!["only_key" => "only_value"]);

    let rendered = err.to_string();
    assert!(rendered.contains("only_key"));
    assert!(rendered.contains("only_value"));
}

#[test]
fn source_exposes_the_cause() {
    let err = AnnotatedError::wrap(std::io::Error::other("disk full"), fields![]);
    let source = err.source().expect("wrap stores a cause");
    assert_eq!(source.to_string(), "disk full");

    assert!(AnnotatedError::root(fields![]).source().is_none());
}

#[test]
fn extracted_map_is_independent_of_the_error() {
    let err = AnnotatedError::root(fields!["a" => 1]);

    let mut copy = err.fields();
    copy.insert("b".to_string(), FieldValue::from(2));
    copy.insert("a".to_string(), FieldValue::from(99));

    let fields_map = err.fields();
    assert_eq!(fields_map.len(), 1);
    assert_eq!(fields_map["a"], FieldValue::from(1));
}

#[test]
fn pairs_flatten_the_whole_map() {
    let err = AnnotatedError::root(fields!["a" => 1, "b" => 2]);

    let pairs = err.pairs();
    assert_eq!(pairs.len(), 4);
    assert!(pairs.contains(&FieldValue::from("a")));
    assert!(pairs.contains(&FieldValue::from("b")));
}

#[test]
fn debug_names_the_wrapper() {
    let err = AnnotatedError::wrap("boom", fields!["a" => 1]);
    let rendered = format!("{:?}", err);
    assert!(rendered.contains("AnnotatedError"));
    assert!(rendered.contains("fields"));
}

#[test]
fn concurrent_readers_observe_the_complete_map() {
    let err = AnnotatedError::root(fields![
        "a" => 1, "b" => 2, "c" => 3, "d" => 4, "e" => 5, "f" => 6, "g" => 7, "h" => 8,
    ]);
    let expected = err.fields();
    assert_eq!(expected.len(), 8);

    thread::scope(|scope| {
        for _ in 0..8 {
            scope.spawn(|| {
                for _ in 0..100 {
                    assert_eq!(err.fields(), expected);
                }
            });
        }
    });
}
