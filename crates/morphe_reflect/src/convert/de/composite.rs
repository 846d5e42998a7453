use std::borrow::Cow;

use super::DeserializeDriver;

use crate::Reflect;
use crate::convert::{DeserializeError, resolve_fields};
use crate::info::TypeInfo;
use crate::ops::DynamicStruct;
use crate::value::Value;

impl DeserializeDriver {
    /// Fills an empty [`DynamicStruct`] representing `info` from a mapping.
    ///
    /// Keys with a resolved field are converted to the field's type. Other
    /// keys are dropped in strict mode and kept raw otherwise. Declared
    /// fields missing from the input stay unset.
    pub(super) fn deserialize_composite(
        &self,
        value: &Value,
        info: &'static TypeInfo,
    ) -> Result<Box<dyn Reflect>, DeserializeError> {
        let fields = resolve_fields(info).map_err(|source| DeserializeError::Resolution {
            value: value.clone(),
            source,
        })?;

        let Some(mapping) = value.as_mapping() else {
            let message = format!("expected a mapping, received {}", value.kind_name());
            return Err(DeserializeError::coercion(info.type_name(), value, message));
        };

        let mut instance = DynamicStruct::with_capacity(mapping.len());
        instance.set_represented_type(Some(info));

        for (key, raw) in mapping.iter() {
            let Some(name) = key.as_str() else {
                let message = format!("field names must be strings, received {}", key.kind_name());
                return Err(DeserializeError::coercion(info.type_name(), key, message));
            };

            match fields.get(name) {
                Some(field) => {
                    let output = self.deserialize(raw, field.type_info()).map_err(|source| {
                        DeserializeError::Field {
                            type_name: info.type_name(),
                            field: Cow::Borrowed(field.name()),
                            field_type: field.type_name(),
                            source: Box::new(source),
                        }
                    })?;
                    instance.insert_boxed(field.name(), output);
                }
                None if self.is_strict() => {
                    log::debug!("strict mode drops `{name}` of `{}`", info.type_path());
                }
                None => instance.insert_boxed(name.to_owned(), Box::new(raw.clone())),
            }
        }

        Ok(Box::new(instance))
    }
}

#[cfg(test)]
mod tests {
    use crate::convert::{DeserializeDriver, DeserializeError, Middleware, PathSegment};
    use crate::derive::Reflect;
    use crate::info::Typed;
    use crate::ops::{DynamicStruct, Struct};
    use crate::value::Value;

    #[derive(Reflect, Debug, PartialEq)]
    struct Lace {
        length: u32,
    }

    #[derive(Reflect, Debug, PartialEq)]
    struct Shoe {
        size: u32,
        lace: Option<Lace>,
    }

    fn input() -> Value {
        Value::from_iter([
            ("size", Value::from(41)),
            ("lace", Value::from_iter([("length", 90)])),
            ("color", Value::from("red")),
        ])
    }

    #[test]
    fn lax_keeps_unknown_keys() {
        let driver = DeserializeDriver::new(&Middleware::new());
        let output = driver.deserialize(&input(), Shoe::type_info()).unwrap();
        let record = output.downcast_ref::<DynamicStruct>().unwrap();

        assert!(output.represents::<Shoe>());
        assert_eq!(record.field_len(), 3);
        assert_eq!(
            record.field("color").unwrap().downcast_ref::<Value>(),
            Some(&Value::from("red"))
        );
        assert_eq!(record.field("size").unwrap().downcast_ref::<u32>(), Some(&41));
    }

    #[test]
    fn strict_drops_unknown_keys() {
        let driver = DeserializeDriver::new(&Middleware::new()).strict(true);
        let output = driver.deserialize(&input(), Shoe::type_info()).unwrap();
        let record = output.downcast_ref::<DynamicStruct>().unwrap();

        assert_eq!(record.field_len(), 2);
        assert!(record.field("color").is_none());

        let shoe: Shoe = driver.deserialize_as(&input()).unwrap();
        assert_eq!(shoe, Shoe { size: 41, lace: Some(Lace { length: 90 }) });
    }

    #[test]
    fn missing_fields_stay_unset() {
        let driver = DeserializeDriver::new(&Middleware::new());
        let output = driver.deserialize(&Value::from_iter([("size", 3)]), Shoe::type_info()).unwrap();
        let record = output.downcast_ref::<DynamicStruct>().unwrap();
        assert!(record.field("lace").is_none());

        let shoe: Shoe = driver.deserialize_as(&Value::from_iter([("size", 3)])).unwrap();
        assert_eq!(shoe.lace, None);
    }

    #[test]
    fn field_path() {
        let driver = DeserializeDriver::new(&Middleware::new());
        let input = Value::from_iter([
            ("size", Value::from(41)),
            ("lace", Value::from_iter([("length", "long")])),
        ]);

        let err = driver.deserialize_as::<Shoe>(&input).unwrap_err();
        assert_eq!(
            err.path(),
            [
                PathSegment::Field { name: "lace", field_type: "Option<Lace>" },
                PathSegment::Field { name: "length", field_type: "u32" },
            ]
        );
        assert_eq!(
            err.to_string(),
            "Shoe -> lace:Option<Lace> -> length:u32 -> 'long' |invalid literal for u32: 'long'|"
        );
    }

    #[test]
    fn rejects_bad_shapes() {
        let driver = DeserializeDriver::new(&Middleware::new());

        let err = driver.deserialize_as::<Shoe>(&Value::from("shoe")).unwrap_err();
        assert_eq!(err.to_string(), "Shoe -> 'shoe' |expected a mapping, received string|");

        let err = driver
            .deserialize_as::<Shoe>(&Value::from_iter([(1, 2)]))
            .unwrap_err();
        assert!(matches!(err, DeserializeError::Coercion { .. }));
    }
}
