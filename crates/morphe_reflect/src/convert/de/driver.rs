use core::any::TypeId;
use core::cell::Cell;
use std::borrow::Cow;

use crate::convert::info_stack;
use crate::convert::{Category, DEFAULT_MAX_DEPTH, DeserializeError, Middleware, classify};
use crate::convert::resolve_fields;
use crate::info::{TypeInfo, Typed};
use crate::ops::{Null, ReflectRef};
use crate::value::Value;
use crate::{FromReflect, Reflect};

// -----------------------------------------------------------------------------
// DeserializeDriver

/// Converts [`Value`] trees into reflected values, directed by a target
/// [`TypeInfo`].
///
/// # Deserialization Rules
///
/// Checked in order, the first match wins:
///
/// 1. **Null**: null input becomes the [`Null`] marker whatever the target,
///    before middleware is consulted.
/// 2. **Middleware**: a deserialize function registered for the exact target
///    type produces the result on its own.
/// 3. **Reflection**: the target's [`Category`] picks the algorithm.
///
/// Containers and structs come back as dynamic values
/// ([`DynamicList`](crate::ops::DynamicList),
/// [`DynamicMap`](crate::ops::DynamicMap),
/// [`DynamicStruct`](crate::ops::DynamicStruct)) representing the target;
/// primitives and enums come back concrete. [`deserialize_as`] converts the
/// result into the concrete type once, at the end.
///
/// In strict mode, mapping keys with no declared field are dropped; otherwise
/// they are kept as raw [`Value`]s.
///
/// # Examples
///
/// ```
/// use morphe_reflect::convert::{DeserializeDriver, Middleware};
/// use morphe_reflect::derive::Reflect;
/// use morphe_reflect::value::Value;
///
/// #[derive(Reflect, Debug, PartialEq)]
/// struct Shoe {
///     size: u32,
///     laces: Option<String>,
/// }
///
/// let mw = Middleware::new();
/// let driver = DeserializeDriver::new(&mw).strict(true);
///
/// let input = Value::from_iter([("size", Value::from("42")), ("color", Value::from("red"))]);
/// let shoe: Shoe = driver.deserialize_as(&input).unwrap();
/// assert_eq!(shoe, Shoe { size: 42, laces: None });
/// ```
///
/// [`deserialize_as`]: DeserializeDriver::deserialize_as
#[derive(Debug, Clone)]
pub struct DeserializeDriver {
    middleware: Middleware,
    strict: bool,
    max_depth: usize,
    depth: Cell<usize>,
}

impl DeserializeDriver {
    /// Creates a lax driver using `middleware`.
    pub fn new(middleware: &Middleware) -> Self {
        Self {
            middleware: middleware.clone(),
            strict: false,
            max_depth: DEFAULT_MAX_DEPTH,
            depth: Cell::new(0),
        }
    }

    /// Sets whether unknown mapping keys are dropped.
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Sets the maximum nesting depth, 128 by default.
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    #[inline]
    pub fn is_strict(&self) -> bool {
        self.strict
    }

    #[inline]
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    #[inline]
    pub fn middleware(&self) -> &Middleware {
        &self.middleware
    }

    /// Deserializes `value` into the type described by `info`.
    ///
    /// Middleware may call this to convert nested values; the depth limit
    /// covers those calls too.
    pub fn deserialize(
        &self,
        value: &Value,
        info: &'static TypeInfo,
    ) -> Result<Box<dyn Reflect>, DeserializeError> {
        if value.is_null() {
            return Ok(Box::new(Null));
        }

        let depth = self.depth.get();
        if depth >= self.max_depth {
            return Err(DeserializeError::DepthExceeded {
                type_name: info.type_name(),
                limit: self.max_depth,
            });
        }

        self.depth.set(depth + 1);
        let _frame = info_stack::enter(info);
        let result = self.dispatch(value, info);
        self.depth.set(depth);

        if let Err(err) = &result
            && err.child().is_none()
        {
            info_stack::report(err);
        }
        result
    }

    /// Deserializes `value` into a `T`.
    ///
    /// When the final conversion fails because a null stands where a value is
    /// required, the error points at the outermost such field or element.
    pub fn deserialize_as<T: FromReflect + Typed>(&self, value: &Value) -> Result<T, DeserializeError> {
        let output = self.deserialize(value, T::type_info())?;
        T::from_reflect(&*output).ok_or_else(|| {
            locate_null(&*output, T::type_info()).unwrap_or(DeserializeError::Conversion {
                type_name: T::type_name(),
            })
        })
    }

    fn dispatch(
        &self,
        value: &Value,
        info: &'static TypeInfo,
    ) -> Result<Box<dyn Reflect>, DeserializeError> {
        match classify(info, &self.middleware) {
            Category::Middleware(f) => {
                log::debug!("middleware deserializes `{}`", info.type_path());
                f(value, info, self)
            }
            Category::Generic => Ok(Box::new(value.clone())),
            Category::Primitive(primitive) => self.deserialize_primitive(value, primitive),
            Category::Enum(members) => self.deserialize_enum(value, members),
            Category::Optional(optional) => self.deserialize(value, optional.inner_info()),
            Category::List(list) => self.deserialize_list(value, info, list),
            Category::Map(map) => self.deserialize_map(value, info, map),
            Category::Union(union) => self.deserialize_union(value, union),
            Category::Composite(info) => self.deserialize_composite(value, info),
        }
    }
}

fn accepts_null(info: &'static TypeInfo) -> bool {
    matches!(info, TypeInfo::Optional(_)) || info.type_id() == TypeId::of::<Value>()
}

/// Finds the outermost missing or null value whose type requires one, framed
/// the way a failed conversion at that spot would be.
fn locate_null(value: &dyn Reflect, info: &'static TypeInfo) -> Option<DeserializeError> {
    if let ReflectRef::Null | ReflectRef::Optional(None) = value.reflect_ref() {
        return (!accepts_null(info)).then(|| DeserializeError::Conversion {
            type_name: info.type_name(),
        });
    }

    match (value.reflect_ref(), info) {
        (_, TypeInfo::Optional(optional)) => locate_null(value, optional.inner_info()),
        (ReflectRef::List(list), TypeInfo::List(list_info)) => {
            list.iter().enumerate().find_map(|(index, item)| {
                let source = locate_null(item, list_info.item_info())?;
                Some(DeserializeError::ListElement {
                    type_name: info.type_name(),
                    index,
                    source: Box::new(source),
                })
            })
        }
        (ReflectRef::Struct(record), TypeInfo::Struct(_)) => {
            let fields = resolve_fields(info).ok()?;
            fields.iter().find_map(|field| {
                let field_info = field.type_info();
                let source = match record.field(field.name()) {
                    Some(item) => locate_null(item, field_info)?,
                    None if accepts_null(field_info) => return None,
                    None => DeserializeError::Conversion {
                        type_name: field_info.type_name(),
                    },
                };
                Some(DeserializeError::Field {
                    type_name: info.type_name(),
                    field: Cow::Borrowed(field.name()),
                    field_type: field.type_name(),
                    source: Box::new(source),
                })
            })
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::DeserializeDriver;
    use crate::convert::{DeserializeError, Middleware, PathSegment};
    use crate::derive::Reflect;
    use crate::info::Typed;
    use crate::ops::Null;
    use crate::value::Value;

    #[test]
    fn null_before_middleware() {
        let mw = Middleware::new().with_deserializer::<u8, _>(|_, _| Ok(9u8));
        let driver = DeserializeDriver::new(&mw);

        let output = driver.deserialize(&Value::Null, u8::type_info()).unwrap();
        assert!(output.is::<Null>());
        assert_eq!(driver.deserialize_as::<u8>(&Value::from(1)).unwrap(), 9);
        assert_eq!(driver.deserialize_as::<Option<u8>>(&Value::Null).unwrap(), None);
    }

    #[test]
    fn generic_target_keeps_input() {
        let driver = DeserializeDriver::new(&Middleware::new());
        let input = Value::from(vec![Value::from(1), Value::from("a")]);
        assert_eq!(driver.deserialize_as::<Value>(&input).unwrap(), input);
    }

    #[test]
    fn conversion_failure() {
        let driver = DeserializeDriver::new(&Middleware::new());
        let err = driver.deserialize_as::<u8>(&Value::Null).unwrap_err();
        assert!(matches!(err, DeserializeError::Conversion { type_name: "u8" }));
    }

    #[test]
    fn depth_limit() {
        let driver = DeserializeDriver::new(&Middleware::new()).with_max_depth(2);
        let shallow = Value::from(vec![1]);
        let deep = Value::from(vec![Value::from(vec![1])]);

        assert_eq!(driver.deserialize_as::<Vec<u8>>(&shallow).unwrap(), [1]);

        let err = driver.deserialize_as::<Vec<Vec<u8>>>(&deep).unwrap_err();
        assert_eq!(err.path().len(), 2);
        assert!(matches!(err.root(), DeserializeError::DepthExceeded { limit: 2, .. }));
    }

    #[test]
    fn null_at_depth_limit_passes() {
        let driver = DeserializeDriver::new(&Middleware::new()).with_max_depth(1);
        let input = Value::from(vec![Value::Null]);

        assert_eq!(driver.deserialize_as::<Vec<Option<u8>>>(&input).unwrap(), [None]);
    }

    #[test]
    fn null_element_is_located() {
        let driver = DeserializeDriver::new(&Middleware::new());
        let input = Value::from(vec![Value::from(1), Value::Null]);

        let err = driver.deserialize_as::<Vec<u8>>(&input).unwrap_err();
        assert_eq!(err.path(), [PathSegment::Index(1)]);
        assert_eq!(err.to_string(), "Vec<u8>[1] |the deserialized value does not fit u8|");
    }

    #[derive(Reflect, Debug)]
    struct Heel {
        height: u8,
    }

    #[derive(Reflect, Debug)]
    struct Boot {
        name: Option<String>,
        heels: Vec<Heel>,
    }

    #[test]
    fn missing_field_is_located() {
        let driver = DeserializeDriver::new(&Middleware::new());
        let input = Value::from_iter([(
            "heels",
            Value::from(vec![Value::from_iter([("height", 2)]), Value::from_iter([("tall", true)])]),
        )]);

        let err = driver.deserialize_as::<Boot>(&input).unwrap_err();
        assert_eq!(
            err.path(),
            [
                PathSegment::Field { name: "heels", field_type: "Vec<Heel>" },
                PathSegment::Index(1),
                PathSegment::Field { name: "height", field_type: "u8" },
            ]
        );
        assert_eq!(
            err.to_string(),
            "Boot -> heels:Vec<Heel>[1] -> height:u8 |the deserialized value does not fit u8|"
        );
    }
}
