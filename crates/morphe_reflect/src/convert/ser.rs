use core::cell::Cell;

use crate::Reflect;
use crate::convert::{DEFAULT_MAX_DEPTH, Middleware, SerializeError};
use crate::info::TypeInfo;
use crate::ops::ReflectRef;
use crate::value::{Mapping, Value};

// -----------------------------------------------------------------------------
// SerializeDriver

/// Converts reflected values into [`Value`] trees.
///
/// # Serialization Rules
///
/// Checked in order, the first match wins:
///
/// 1. **Null**: the [`Null`](crate::ops::Null) marker and `None` become
///    [`Value::Null`].
/// 2. **Middleware**: a serialize function registered for the exact runtime
///    type produces the result on its own.
/// 3. **Reflection**: primitives become scalars, enums their tag, lists and
///    maps are converted element by element, unions convert their active
///    alternative and structs become mappings keyed by field name.
///
/// Opaque types have no default conversion and fail without middleware.
///
/// # Examples
///
/// ```
/// use morphe_reflect::convert::{Middleware, SerializeDriver};
/// use morphe_reflect::derive::Reflect;
/// use morphe_reflect::value::Value;
///
/// #[derive(Reflect)]
/// struct Shoe {
///     size: u32,
///     laces: Option<String>,
/// }
///
/// let mw = Middleware::new();
/// let driver = SerializeDriver::new(&mw);
///
/// let output = driver.serialize(&Shoe { size: 42, laces: None }).unwrap();
/// assert_eq!(
///     output,
///     Value::from_iter([("size", Value::from(42)), ("laces", Value::Null)]),
/// );
/// ```
#[derive(Debug, Clone)]
pub struct SerializeDriver {
    middleware: Middleware,
    max_depth: usize,
    depth: Cell<usize>,
}

impl SerializeDriver {
    /// Creates a driver using `middleware`.
    pub fn new(middleware: &Middleware) -> Self {
        Self {
            middleware: middleware.clone(),
            max_depth: DEFAULT_MAX_DEPTH,
            depth: Cell::new(0),
        }
    }

    /// Sets the maximum nesting depth, 128 by default.
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    #[inline]
    pub fn middleware(&self) -> &Middleware {
        &self.middleware
    }

    #[inline]
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Serializes `value`.
    ///
    /// Middleware may call this to convert nested values; the depth limit
    /// covers those calls too.
    pub fn serialize(&self, value: &dyn Reflect) -> Result<Value, SerializeError> {
        let depth = self.depth.get();
        if depth >= self.max_depth {
            return Err(SerializeError::DepthExceeded {
                type_path: type_path_of(value),
                limit: self.max_depth,
            });
        }

        self.depth.set(depth + 1);
        let result = self.serialize_value(value);
        self.depth.set(depth);
        result
    }

    fn serialize_value(&self, value: &dyn Reflect) -> Result<Value, SerializeError> {
        let reflect_ref = value.reflect_ref();
        if let ReflectRef::Null | ReflectRef::Optional(None) = reflect_ref {
            return Ok(Value::Null);
        }

        if let Some(f) = self.middleware.serializer(value.ty_id()) {
            log::debug!("middleware serializes `{}`", value.reflect_type_path());
            return f(value, self);
        }

        match reflect_ref {
            ReflectRef::Null | ReflectRef::Optional(None) => Ok(Value::Null),
            ReflectRef::Primitive(primitive) => Ok(primitive.to_value()),
            ReflectRef::Enum(member) => Ok(member.tag().to_value()),
            ReflectRef::Optional(Some(inner)) => self.serialize(inner),
            ReflectRef::List(list) => list
                .iter()
                .map(|item| self.serialize(item))
                .collect::<Result<Vec<_>, _>>()
                .map(Value::Sequence),
            ReflectRef::Map(map) => {
                let mut mapping = Mapping::with_capacity(map.len());
                for (key, value) in map.iter() {
                    mapping.insert(self.serialize(key)?, self.serialize(value)?);
                }
                Ok(Value::Mapping(mapping))
            }
            ReflectRef::Union(union) => self.serialize(union.active()),
            ReflectRef::Struct(record) => {
                let mut mapping = Mapping::with_capacity(record.field_len());
                for (name, field) in record.iter_fields() {
                    let key = Value::from(name);
                    if mapping.contains_key(&key) {
                        continue;
                    }
                    // A shadowed base field appears once, holding the most derived value.
                    let field = record.field(name).unwrap_or(field);
                    mapping.insert(key, self.serialize(field)?);
                }
                Ok(Value::Mapping(mapping))
            }
            ReflectRef::Generic(raw) => Ok(raw.clone()),
            ReflectRef::Opaque(_) => Err(SerializeError::Opaque {
                type_path: type_path_of(value),
            }),
        }
    }
}

/// The path of the type `value` stands for.
fn type_path_of(value: &dyn Reflect) -> &'static str {
    value
        .represented_type_info()
        .map_or_else(|| value.reflect_type_path(), TypeInfo::type_path)
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::SerializeDriver;
    use crate::Reflect;
    use crate::convert::{Middleware, SerializeError};
    use crate::impls::NonGenericTypeInfoCell;
    use crate::info::{OpaqueInfo, TypeInfo, TypePath, Typed};
    use crate::ops::{DynamicStruct, Null, ReflectRef};
    use crate::value::Value;

    #[test]
    fn scalars_and_containers() {
        let driver = SerializeDriver::new(&Middleware::new());

        assert_eq!(driver.serialize(&Null).unwrap(), Value::Null);
        assert_eq!(driver.serialize(&None::<u8>).unwrap(), Value::Null);
        assert_eq!(driver.serialize(&Some(1.5f64)).unwrap(), Value::from(1.5));
        assert_eq!(
            driver.serialize(&vec![Some(1u8), None]).unwrap(),
            Value::from(vec![Value::from(1), Value::Null])
        );

        let map = BTreeMap::from([(2u8, "b".to_owned()), (1u8, "a".to_owned())]);
        assert_eq!(
            driver.serialize(&map).unwrap(),
            Value::from_iter([(1u8, "a"), (2u8, "b")])
        );
    }

    #[test]
    fn dynamic_struct_keeps_set_fields() {
        let mut record = DynamicStruct::new();
        record.insert("id", 7u32);
        record.insert("extra", Value::from("kept"));

        let driver = SerializeDriver::new(&Middleware::new());
        assert_eq!(
            driver.serialize(&record).unwrap(),
            Value::from_iter([("id", Value::from(7)), ("extra", Value::from("kept"))])
        );
    }

    #[test]
    fn middleware_sees_runtime_type() {
        let mw = Middleware::new()
            .with_serializer::<u8, _>(|value, _| Ok(Value::from(format!("#{value}"))));
        let driver = SerializeDriver::new(&mw);

        assert_eq!(driver.serialize(&vec![1u8]).unwrap(), Value::from(vec!["#1"]));
        assert_eq!(driver.serialize(&1u16).unwrap(), Value::from(1));
    }

    #[test]
    fn depth_limit() {
        let driver = SerializeDriver::new(&Middleware::new()).with_max_depth(2);
        assert!(driver.serialize(&vec![1u8]).is_ok());

        let err = driver.serialize(&vec![vec![1u8]]).unwrap_err();
        assert!(matches!(err, SerializeError::DepthExceeded { limit: 2, .. }));
    }

    struct Handle;

    impl TypePath for Handle {
        fn type_path() -> &'static str {
            "tests::Handle"
        }

        fn type_name() -> &'static str {
            "Handle"
        }
    }

    impl Typed for Handle {
        fn type_info() -> &'static TypeInfo {
            static CELL: NonGenericTypeInfoCell = NonGenericTypeInfoCell::new();
            CELL.get_or_init(|| TypeInfo::Opaque(OpaqueInfo::new::<Self>()))
        }
    }

    impl Reflect for Handle {
        fn reflect_ref(&self) -> ReflectRef<'_> {
            ReflectRef::Opaque(self)
        }
    }

    #[test]
    fn opaque_needs_middleware() {
        let err = SerializeDriver::new(&Middleware::new())
            .serialize(&Handle)
            .unwrap_err();
        assert!(matches!(err, SerializeError::Opaque { type_path: "tests::Handle" }));

        let mw = Middleware::new().with_serializer::<Handle, _>(|_, _| Ok(Value::from("handle")));
        assert_eq!(SerializeDriver::new(&mw).serialize(&Handle).unwrap(), Value::from("handle"));
    }

    #[derive(crate::derive::Reflect)]
    struct Plain {
        shared: u8,
        kept: u8,
    }

    #[derive(crate::derive::Reflect)]
    struct Layered {
        #[reflect(base)]
        plain: Plain,
        shared: u8,
    }

    #[test]
    fn shadowed_base_field_written_once() {
        let value = Layered {
            plain: Plain { shared: 1, kept: 2 },
            shared: 3,
        };

        let output = SerializeDriver::new(&Middleware::new()).serialize(&value).unwrap();
        let Value::Mapping(mapping) = &output else {
            panic!("expected a mapping, got {output:?}");
        };
        assert_eq!(mapping.len(), 2);
        assert_eq!(mapping.get_str("shared"), Some(&Value::from(3)));
        assert_eq!(mapping.get_str("kept"), Some(&Value::from(2)));
    }
}
