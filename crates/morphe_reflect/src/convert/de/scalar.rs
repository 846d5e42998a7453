use super::DeserializeDriver;

use crate::Reflect;
use crate::convert::DeserializeError;
use crate::info::{EnumInfo, PrimitiveInfo};
use crate::value::Value;

impl DeserializeDriver {
    pub(super) fn deserialize_primitive(
        &self,
        value: &Value,
        info: &'static PrimitiveInfo,
    ) -> Result<Box<dyn Reflect>, DeserializeError> {
        info.coerce(value)
            .map_err(|message| DeserializeError::coercion(info.type_name(), value, message))
    }

    /// Finds the member whose tag equals `value`. Numeric strings never
    /// match an integer tag.
    pub(super) fn deserialize_enum(
        &self,
        value: &Value,
        info: &'static EnumInfo,
    ) -> Result<Box<dyn Reflect>, DeserializeError> {
        info.index_of_tag(value)
            .and_then(|index| info.instantiate(index))
            .ok_or_else(|| {
                let message = format!("{value} is not a valid {}", info.type_name());
                DeserializeError::coercion(info.type_name(), value, message)
            })
    }
}

#[cfg(test)]
mod tests {
    use crate::convert::{DeserializeDriver, Middleware};
    use crate::derive::Reflect;
    use crate::value::Value;

    #[derive(Reflect, Debug, PartialEq)]
    #[reflect(rename_all = "lowercase")]
    enum Fit {
        Narrow,
        Wide,
    }

    #[derive(Reflect, Debug, PartialEq)]
    enum Width {
        Slim = 1,
        Broad = 2,
    }

    #[test]
    fn primitive_messages() {
        let driver = DeserializeDriver::new(&Middleware::new());

        assert_eq!(driver.deserialize_as::<i64>(&Value::from(" 12 ")).unwrap(), 12);
        let err = driver.deserialize_as::<i64>(&Value::from("Not a number")).unwrap_err();
        assert_eq!(
            err.to_string(),
            "i64 -> 'Not a number' |invalid literal for i64: 'Not a number'|"
        );
    }

    #[test]
    fn enum_by_string_tag() {
        let driver = DeserializeDriver::new(&Middleware::new());

        assert_eq!(driver.deserialize_as::<Fit>(&Value::from("wide")).unwrap(), Fit::Wide);
        let err = driver.deserialize_as::<Fit>(&Value::from("Wide")).unwrap_err();
        assert_eq!(err.to_string(), "Fit -> 'Wide' |'Wide' is not a valid Fit|");
    }

    #[test]
    fn enum_by_int_tag() {
        let driver = DeserializeDriver::new(&Middleware::new());

        assert_eq!(driver.deserialize_as::<Width>(&Value::from(2)).unwrap(), Width::Broad);
        assert_eq!(driver.deserialize_as::<Width>(&Value::from(1.0)).unwrap(), Width::Slim);
        assert!(driver.deserialize_as::<Width>(&Value::from("1")).is_err());
        assert!(driver.deserialize_as::<Width>(&Value::from(3)).is_err());
    }
}
