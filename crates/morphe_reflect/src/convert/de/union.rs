use super::DeserializeDriver;

use crate::Reflect;
use crate::convert::DeserializeError;
use crate::info::UnionInfo;
use crate::value::Value;

impl DeserializeDriver {
    /// Tries the alternatives in declared order, the first success wins.
    ///
    /// This is the only place where conversion errors are discarded.
    pub(super) fn deserialize_union(
        &self,
        value: &Value,
        info: &'static UnionInfo,
    ) -> Result<Box<dyn Reflect>, DeserializeError> {
        for alternative in info.alternatives() {
            match self.deserialize(value, alternative.type_info()) {
                Ok(output) => return Ok(output),
                Err(err) => log::trace!(
                    "`{}` rejects alternative `{}`: {err}",
                    info.type_path(),
                    alternative.name(),
                ),
            }
        }

        Err(DeserializeError::UnionExhausted {
            type_name: info.type_name(),
            value: value.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::convert::{DeserializeDriver, DeserializeError, Middleware};
    use crate::derive::Reflect;
    use crate::value::Value;

    #[derive(Reflect, Debug, PartialEq)]
    #[reflect(union)]
    enum Amount {
        Float(f64),
        Int(i64),
        Text(String),
    }

    #[derive(Reflect, Debug, PartialEq)]
    #[reflect(union)]
    enum Strict {
        Int(i64),
        Flags(Vec<bool>),
    }

    #[test]
    fn first_alternative_wins() {
        let driver = DeserializeDriver::new(&Middleware::new());

        assert_eq!(
            driver.deserialize_as::<Amount>(&Value::from("4")).unwrap(),
            Amount::Float(4.0)
        );
        assert_eq!(
            driver.deserialize_as::<Amount>(&Value::from("four")).unwrap(),
            Amount::Text("four".to_owned())
        );
    }

    #[test]
    fn exhausted() {
        let driver = DeserializeDriver::new(&Middleware::new());
        let input = Value::from_iter([("a", 1)]);

        let err = driver.deserialize_as::<Strict>(&input).unwrap_err();
        assert!(matches!(err, DeserializeError::UnionExhausted { .. }));
        assert_eq!(err.raw_value(), Some(&input));
    }
}
