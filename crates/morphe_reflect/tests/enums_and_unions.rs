use std::collections::BTreeMap;

use morphe_reflect::convert::DeserializeError;
use morphe_reflect::prelude::*;
use serde_json::json;

#[derive(Reflect, Debug, PartialEq, Eq, PartialOrd, Ord)]
#[reflect(rename_all = "lowercase")]
enum Number {
    One,
    Two,
    Five,
}

#[derive(Reflect, Debug, PartialEq)]
enum Priority {
    Low = 1,
    #[reflect(tag = 5)]
    High,
    #[reflect(tag = -1)]
    Ignored,
}

#[derive(Reflect, Debug, PartialEq)]
#[reflect(union)]
enum Amount {
    Float(f64),
    Int(i64),
    Text(String),
}

#[derive(Reflect, Debug, PartialEq)]
struct Entry {
    a: Amount,
}

#[derive(Reflect, Debug, PartialEq)]
struct Circle {
    radius: f64,
}

#[derive(Reflect, Debug, PartialEq)]
#[reflect(union)]
enum Shape {
    Circle(Circle),
    Label(String),
}

fn value(json: serde_json::Value) -> Value {
    serde_json::from_value(json).unwrap()
}

#[test]
fn enum_tags_out() {
    let mw = Middleware::new();

    assert_eq!(serialize(&Number::One, &mw).unwrap(), Value::from("one"));
    assert_eq!(
        serialize(&vec![Number::One, Number::Two], &mw).unwrap(),
        value(json!(["one", "two"]))
    );
    assert_eq!(
        serialize(&BTreeMap::from([(Number::Five, 5)]), &mw).unwrap(),
        value(json!({"five": 5}))
    );
    assert_eq!(serialize(&Priority::Low, &mw).unwrap(), Value::from(1));
    assert_eq!(serialize(&Priority::High, &mw).unwrap(), Value::from(5));
    assert_eq!(serialize(&Priority::Ignored, &mw).unwrap(), Value::from(-1));
}

#[test]
fn enum_tags_in() {
    let mw = Middleware::new();

    let one: Number = deserialize_as(&Value::from("one"), &mw, false).unwrap();
    assert_eq!(one, Number::One);

    let list: Vec<Number> = deserialize_as(&value(json!(["one", "two"])), &mw, false).unwrap();
    assert_eq!(list, [Number::One, Number::Two]);

    let map: BTreeMap<Number, i32> = deserialize_as(&value(json!({"five": 5})), &mw, false).unwrap();
    assert_eq!(map, BTreeMap::from([(Number::Five, 5)]));

    let high: Priority = deserialize_as(&Value::from(5), &mw, false).unwrap();
    assert_eq!(high, Priority::High);
}

#[test]
fn enum_tags_are_exact() {
    let mw = Middleware::new();

    // A string never matches an integer tag.
    let err = deserialize_as::<Priority>(&Value::from("5"), &mw, false).unwrap_err();
    assert_eq!(err.to_string(), "Priority -> '5' |'5' is not a valid Priority|");

    let err = deserialize_as::<Number>(&Value::from("One"), &mw, false).unwrap_err();
    assert_eq!(err.to_string(), "Number -> 'One' |'One' is not a valid Number|");
}

#[test]
fn union_takes_first_accepting_alternative() {
    let mw = Middleware::new();
    let entries = vec![
        Entry { a: Amount::Int(1) },
        Entry { a: Amount::Text("4".to_owned()) },
        Entry { a: Amount::Text("four".to_owned()) },
    ];

    let serialized = serialize(&entries, &mw).unwrap();
    assert_eq!(serialized, value(json!([{"a": 1}, {"a": "4"}, {"a": "four"}])));

    let back: Vec<Entry> = deserialize_as(&serialized, &mw, false).unwrap();
    assert_eq!(
        back,
        [
            Entry { a: Amount::Float(1.0) },
            Entry { a: Amount::Float(4.0) },
            Entry { a: Amount::Text("four".to_owned()) },
        ]
    );
    assert_ne!(back, entries);
}

#[test]
fn union_of_struct_and_scalar() {
    let mw = Middleware::new();

    let circle: Shape = deserialize_as(&value(json!({"radius": "2.5"})), &mw, false).unwrap();
    assert_eq!(circle, Shape::Circle(Circle { radius: 2.5 }));
    assert_eq!(serialize(&circle, &mw).unwrap(), value(json!({"radius": 2.5})));

    let label: Shape = deserialize_as(&Value::from("big"), &mw, false).unwrap();
    assert_eq!(label, Shape::Label("big".to_owned()));
}

#[test]
fn union_exhausted() {
    let mw = Middleware::new();

    let err = deserialize_as::<Shape>(&value(json!([1])), &mw, false).unwrap_err();
    assert!(matches!(err, DeserializeError::UnionExhausted { type_name: "Shape", .. }));
    assert_eq!(err.to_string(), "Shape -> [1] |no alternative of Shape accepted the value|");
}
