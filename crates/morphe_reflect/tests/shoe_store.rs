use morphe_reflect::prelude::*;
use serde_json::json;

#[derive(Reflect, Debug, PartialEq)]
enum Condition {
    #[reflect(tag = "Excellent")]
    Excellent,
    #[reflect(tag = "Good")]
    Good,
    Bad,
}

#[derive(Reflect, Debug, PartialEq)]
struct ShoeBox {
    size: u32,
    name: Option<String>,
    condition: Condition,
}

#[derive(Reflect, Debug, PartialEq)]
struct Shelf {
    rows: Vec<Vec<ShoeBox>>,
}

fn shoe(size: u32, name: Option<&str>, condition: Condition) -> ShoeBox {
    ShoeBox {
        size,
        name: name.map(str::to_owned),
        condition,
    }
}

fn value(json: serde_json::Value) -> Value {
    serde_json::from_value(json).unwrap()
}

fn store() -> Vec<Shelf> {
    vec![Shelf {
        rows: vec![
            vec![
                shoe(10, Some("Jordans"), Condition::Excellent),
                shoe(10, Some("Jordans"), Condition::Excellent),
            ],
            vec![
                shoe(11, Some("Jordans"), Condition::Good),
                shoe(12, None, Condition::Bad),
            ],
        ],
    }]
}

fn store_json() -> serde_json::Value {
    json!([{
        "rows": [
            [
                {"size": 10, "name": "Jordans", "condition": "Excellent"},
                {"size": 10, "name": "Jordans", "condition": "Excellent"}
            ],
            [
                {"size": 11, "name": "Jordans", "condition": "Good"},
                {"size": 12, "name": null, "condition": "Bad"}
            ]
        ]
    }])
}

#[test]
fn serialize_store() {
    let output = serialize(&store(), &Middleware::new()).unwrap();
    assert_eq!(output, value(store_json()));
}

#[test]
fn deserialize_store() {
    let store: Vec<Shelf> = deserialize_as(&value(store_json()), &Middleware::new(), false).unwrap();
    assert_eq!(store, self::store());
}

#[test]
fn coerces_scalars_on_the_way_in() {
    let input = value(json!({"size": "9", "name": 7, "condition": "Good"}));
    let shoe: ShoeBox = deserialize_as(&input, &Middleware::new(), false).unwrap();
    assert_eq!(shoe, self::shoe(9, Some("7"), Condition::Good));
}

#[test]
fn missing_optional_field_is_none() {
    let input = value(json!({"size": 8, "condition": "Bad"}));
    let shoe: ShoeBox = deserialize_as(&input, &Middleware::new(), true).unwrap();
    assert_eq!(shoe, self::shoe(8, None, Condition::Bad));
}

#[test]
fn serialized_json_text() {
    let output = serialize(&shoe(12, None, Condition::Bad), &Middleware::new()).unwrap();
    assert_eq!(
        serde_json::to_string(&output).unwrap(),
        r#"{"size":12,"name":null,"condition":"Bad"}"#
    );
}
