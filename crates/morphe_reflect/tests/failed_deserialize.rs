use std::collections::HashMap;

use morphe_reflect::convert::{DeserializeDriver, DeserializeError, PathSegment};
use morphe_reflect::prelude::*;
use serde_json::json;

#[derive(Reflect, Debug, PartialEq, Eq, Hash)]
#[reflect(rename_all = "lowercase")]
enum Number {
    One,
    Two,
    Five,
}

#[derive(Reflect, Debug)]
struct Klass3 {
    e: Number,
}

#[derive(Reflect, Debug)]
struct Klass2 {
    d: Vec<Klass3>,
}

#[derive(Reflect, Debug)]
struct Klass1 {
    a: i64,
    b: f64,
    c: Klass2,
}

fn value(json: serde_json::Value) -> Value {
    serde_json::from_value(json).unwrap()
}

fn fail<T: FromReflect + Typed + core::fmt::Debug>(input: serde_json::Value) -> DeserializeError {
    deserialize_as::<T>(&value(input), &Middleware::new(), false).unwrap_err()
}

#[test]
fn nested_struct_path() {
    let err = fail::<Klass1>(json!({
        "a": 2,
        "b": 1.0,
        "c": {"d": [{"e": "one"}, {"e": "1"}]}
    }));

    assert_eq!(
        err.to_string(),
        "Klass1 -> c:Klass2 -> d:Vec<Klass3>[1] -> e:Number -> '1' |'1' is not a valid Number|"
    );
    assert_eq!(
        err.path(),
        [
            PathSegment::Field { name: "c", field_type: "Klass2" },
            PathSegment::Field { name: "d", field_type: "Vec<Klass3>" },
            PathSegment::Index(1),
            PathSegment::Field { name: "e", field_type: "Number" },
        ]
    );
    assert_eq!(err.root().type_name(), "Number");
    assert_eq!(err.raw_value(), Some(&Value::from("1")));
}

#[test]
fn primitive_int() {
    let err = fail::<i64>(json!("Not a number"));
    assert_eq!(
        err.to_string(),
        "i64 -> 'Not a number' |invalid literal for i64: 'Not a number'|"
    );
    assert!(err.path().is_empty());
}

#[test]
fn primitive_float() {
    let err = fail::<f64>(json!("Not a number"));
    assert_eq!(
        err.to_string(),
        "f64 -> 'Not a number' |could not convert string to float: 'Not a number'|"
    );
}

#[test]
fn list_element() {
    let err = fail::<Vec<i64>>(json!([123, 456, "SevenEightNine"]));
    assert_eq!(
        err.to_string(),
        "Vec<i64>[2] -> 'SevenEightNine' |invalid literal for i64: 'SevenEightNine'|"
    );
}

#[test]
fn map_value_and_key() {
    let err = fail::<HashMap<String, i64>>(json!({
        "Key1": 123,
        "Key2": 456,
        "Key3": "SevenEightNine"
    }));
    assert_eq!(
        err.to_string(),
        "HashMap<String, i64>.value['Key3'] -> 'SevenEightNine' \
         |invalid literal for i64: 'SevenEightNine'|"
    );
    assert_eq!(err.path(), [PathSegment::Value(&Value::from("Key3"))]);

    let err = fail::<HashMap<Number, i64>>(json!({"one": 1, "Three": 3}));
    assert_eq!(
        err.to_string(),
        "HashMap<Number, i64>.key -> 'Three' |'Three' is not a valid Number|"
    );
    assert_eq!(err.path(), [PathSegment::Key]);
}

#[test]
fn shape_mismatch() {
    let err = fail::<Klass2>(json!([1, 2]));
    assert!(matches!(err, DeserializeError::Coercion { type_name: "Klass2", .. }));
    assert_eq!(err.to_string(), "Klass2 -> [1, 2] |expected a mapping, received sequence|");
}

#[test]
fn missing_required_field() {
    let err = fail::<Klass3>(json!({}));
    assert_eq!(err.path(), [PathSegment::Field { name: "e", field_type: "Number" }]);
    assert!(matches!(err.root(), DeserializeError::Conversion { type_name: "Number" }));
    assert_eq!(err.to_string(), "Klass3 -> e:Number |the deserialized value does not fit Number|");
    assert_eq!(err.raw_value(), None);
}

#[test]
fn depth_limit() {
    let input = value(json!([[[1]]]));
    let driver = DeserializeDriver::new(&Middleware::new()).with_max_depth(2);

    let err = driver.deserialize_as::<Vec<Vec<Vec<u8>>>>(&input).unwrap_err();
    assert!(matches!(err.root(), DeserializeError::DepthExceeded { limit: 2, .. }));
    assert_eq!(err.path(), [PathSegment::Index(0), PathSegment::Index(0)]);
}

#[test]
fn error_source_chain() {
    use std::error::Error;

    let err = fail::<Vec<i64>>(json!(["x"]));
    let source = err.source().unwrap();
    assert_eq!(source.to_string(), "i64 -> 'x' |invalid literal for i64: 'x'|");
    assert!(source.source().is_none());
}
