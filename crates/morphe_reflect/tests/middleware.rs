use morphe_reflect::convert::{DeserializeError, SerializeDriver, SerializeError};
use morphe_reflect::prelude::*;
use serde_json::json;

#[derive(Reflect, Debug, PartialEq)]
struct Money {
    cents: i64,
    currency: String,
}

#[derive(Reflect, Debug, PartialEq)]
struct Invoice {
    total: Money,
    lines: Vec<Money>,
    note: Option<Money>,
}

fn value(json: serde_json::Value) -> Value {
    serde_json::from_value(json).unwrap()
}

fn money(cents: i64) -> Money {
    Money {
        cents,
        currency: "EUR".to_owned(),
    }
}

fn money_as_text() -> Middleware {
    Middleware::new().with::<Money, _, _>(
        |money, _| {
            Ok(Value::from(format!(
                "{}.{:02} {}",
                money.cents / 100,
                money.cents % 100,
                money.currency
            )))
        },
        |value, _| {
            let text = value
                .as_str()
                .ok_or_else(|| DeserializeError::custom::<Money>(value, "expected text"))?;
            let (amount, currency) = text
                .split_once(' ')
                .ok_or_else(|| DeserializeError::custom::<Money>(value, "missing currency"))?;
            let (whole, frac) = amount.split_once('.').unwrap_or((amount, "0"));
            let parse = |part: &str| {
                part.parse::<i64>()
                    .map_err(|err| DeserializeError::custom::<Money>(value, err))
            };
            Ok(Money {
                cents: parse(whole)? * 100 + parse(frac)?,
                currency: currency.to_owned(),
            })
        },
    )
}

#[test]
fn middleware_replaces_reflection_in_both_directions() {
    let mw = money_as_text();
    let invoice = Invoice {
        total: money(1250),
        lines: vec![money(1000), money(250)],
        note: None,
    };

    let output = serialize(&invoice, &mw).unwrap();
    assert_eq!(
        output,
        value(json!({
            "total": "12.50 EUR",
            "lines": ["10.00 EUR", "2.50 EUR"],
            "note": null
        }))
    );

    let back: Invoice = deserialize_as(&output, &mw, false).unwrap();
    assert_eq!(back, invoice);
}

#[test]
fn middleware_failure_is_located() {
    let input = value(json!({"total": "12.50 EUR", "lines": ["x.00 EUR"]}));

    let err = deserialize_as::<Invoice>(&input, &money_as_text(), false).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Invoice -> lines:Vec<Money>[0] -> 'x.00 EUR' |invalid digit found in string|"
    );
}

#[test]
fn null_skips_middleware() {
    let mw = Middleware::new().with_deserializer::<Money, _>(|value, _| {
        Err(DeserializeError::custom::<Money>(value, "never reached for null"))
    });

    let invoice = value(json!({"total": {"cents": 1, "currency": "EUR"}, "lines": [], "note": null}));
    let err = deserialize_as::<Invoice>(&invoice, &mw, false).unwrap_err();
    assert_eq!(err.path().len(), 1);

    let note: Option<Money> = deserialize_as(&Value::Null, &mw, false).unwrap();
    assert_eq!(note, None);
}

#[test]
fn middleware_can_recurse_through_the_driver() {
    // Wraps every invoice in an envelope, converting the body by reflection.
    let plain = Middleware::new();
    let mw = Middleware::new().with_serializer::<Invoice, _>(move |invoice, driver| {
        let inner = SerializeDriver::new(&plain).with_max_depth(driver.max_depth());
        Ok(Value::from_iter([("invoice", inner.serialize(invoice)?)]))
    });

    let invoice = Invoice {
        total: money(5),
        lines: vec![],
        note: None,
    };
    let output = serialize(&invoice, &mw).unwrap();
    assert_eq!(
        output,
        value(json!({"invoice": {
            "total": {"cents": 5, "currency": "EUR"},
            "lines": [],
            "note": null
        }}))
    );
}

#[test]
fn later_merge_wins() {
    let first = Middleware::new().with_serializer::<bool, _>(|_, _| Ok(Value::from("first")));
    let second = Middleware::new().with_serializer::<bool, _>(|_, _| Ok(Value::from("second")));

    let merged = first.merge(&second);
    assert_eq!(serialize(&true, &merged).unwrap(), Value::from("second"));
    assert_eq!(merged.len(), 1);
}

#[test]
fn serialize_middleware_error_surfaces() {
    let mw = Middleware::new()
        .with_serializer::<Money, _>(|_, _| Err(SerializeError::custom::<Money>("no rate")));

    let err = serialize(&money(1), &mw).unwrap_err();
    assert!(err.to_string().contains("no rate"));
}

#[cfg(feature = "chrono")]
mod chrono_middleware {
    use chrono::{NaiveDate, NaiveDateTime};
    use morphe_reflect::prelude::*;

    #[derive(Reflect, Debug, PartialEq)]
    struct Event {
        at: NaiveDateTime,
        on: NaiveDate,
    }

    #[test]
    fn date_times_round_trip() {
        let on = NaiveDate::from_ymd_opt(2022, 7, 25).unwrap();
        let event = Event {
            at: on.and_hms_opt(11, 3, 44).unwrap(),
            on,
        };

        let mw = Middleware::new().with_chrono();
        let output = serialize(&event, &mw).unwrap();
        assert_eq!(
            output,
            Value::from_iter([("at", "2022-07-25T11:03:44"), ("on", "2022-07-25")])
        );

        let back: Event = deserialize_as(&output, &mw, false).unwrap();
        assert_eq!(back, event);
    }

    #[test]
    fn opaque_without_middleware_fails() {
        let on = NaiveDate::from_ymd_opt(2022, 7, 25).unwrap();
        assert!(serialize(&on, &Middleware::new()).is_err());
    }
}
