use crate::Reflect;
use crate::convert::{Middleware, ProjectError, deserialize, serialize};
use crate::info::{TypeInfo, Typed};
use crate::value::Value;

/// Reshapes `value` to the fields `target` declares.
///
/// The value is serialized with `ser`, deserialized strictly into `target`
/// with `de`, then serialized again with `ser`. Keys without a declared
/// field disappear, declared fields absent from the source stay absent, and
/// every kept value is coerced to its declared type.
///
/// # Examples
///
/// ```
/// use morphe_reflect::convert::{Middleware, project_into};
/// use morphe_reflect::derive::Reflect;
/// use morphe_reflect::value::Value;
///
/// #[derive(Reflect)]
/// struct Account {
///     name: String,
///     password: String,
/// }
///
/// #[derive(Reflect)]
/// struct PublicAccount {
///     name: String,
/// }
///
/// let account = Account { name: "ann".into(), password: "hunter2".into() };
/// let mw = Middleware::new();
///
/// let public = project_into::<PublicAccount>(&account, &mw, &mw).unwrap();
/// assert_eq!(public, Value::from_iter([("name", "ann")]));
/// ```
pub fn project(
    value: &dyn Reflect,
    target: &'static TypeInfo,
    ser: &Middleware,
    de: &Middleware,
) -> Result<Value, ProjectError> {
    let serialized = serialize(value, ser)?;
    let projected = deserialize(&serialized, target, de, true)?;
    Ok(serialize(&*projected, ser)?)
}

/// [`project`] onto the descriptor of `T`.
#[inline]
pub fn project_into<T: Typed>(
    value: &dyn Reflect,
    ser: &Middleware,
    de: &Middleware,
) -> Result<Value, ProjectError> {
    project(value, T::type_info(), ser, de)
}

#[cfg(test)]
mod tests {
    use super::project_into;
    use crate::convert::{DeserializeError, Middleware, ProjectError};
    use crate::derive::Reflect;
    use crate::value::Value;

    #[derive(Reflect)]
    struct Wide {
        id: String,
        count: String,
        secret: u64,
    }

    #[derive(Reflect)]
    struct Narrow {
        id: u32,
        count: Option<i64>,
        missing: Option<bool>,
    }

    #[test]
    fn coerces_and_drops() {
        let wide = Wide {
            id: "17".into(),
            count: "3".into(),
            secret: 99,
        };
        let mw = Middleware::new();

        let narrow = project_into::<Narrow>(&wide, &mw, &mw).unwrap();
        assert_eq!(narrow, Value::from_iter([("id", 17), ("count", 3)]));
    }

    #[test]
    fn reports_deserialize_failure() {
        let wide = Wide {
            id: "x".into(),
            count: "3".into(),
            secret: 0,
        };
        let mw = Middleware::new();

        let err = project_into::<Narrow>(&wide, &mw, &mw).unwrap_err();
        assert!(matches!(err, ProjectError::Deserialize(DeserializeError::Field { .. })));
        assert_eq!(err.to_string(), "Narrow -> id:u32 -> 'x' |invalid literal for u32: 'x'|");
    }
}
