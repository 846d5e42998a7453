//! Per-type converters that replace the generic algorithm.
//!
//! A [`Middleware`] table maps an exact [`TypeId`] to a [`Converter`]. The
//! serializer looks up the runtime type of each value it visits, the
//! deserializer looks up the target type before classifying it. Both hand
//! their driver to the converter so custom logic can recurse.

use core::any::TypeId;
use core::fmt;
use std::sync::Arc;

use crate::convert::{DeserializeDriver, DeserializeError, SerializeDriver, SerializeError};
use crate::hash::TypeIdMap;
use crate::info::{TypeInfo, TypePath};
use crate::value::Value;
use crate::{FromReflect, Reflect};

#[cfg(feature = "chrono")]
mod chrono;

// -----------------------------------------------------------------------------
// Converter

/// A type-erased serialize function.
pub type SerializeFn =
    Arc<dyn Fn(&dyn Reflect, &SerializeDriver) -> Result<Value, SerializeError> + Send + Sync>;

/// A type-erased deserialize function.
pub type DeserializeFn = Arc<
    dyn Fn(&Value, &'static TypeInfo, &DeserializeDriver) -> Result<Box<dyn Reflect>, DeserializeError>
        + Send
        + Sync,
>;

/// The converters registered for one type, either direction optional.
#[derive(Clone, Default)]
pub struct Converter {
    pub serialize: Option<SerializeFn>,
    pub deserialize: Option<DeserializeFn>,
}

impl fmt::Debug for Converter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Converter")
            .field("serialize", &self.serialize.is_some())
            .field("deserialize", &self.deserialize.is_some())
            .finish()
    }
}

fn erase_serializer<F>(f: F) -> SerializeFn
where
    F: Fn(&dyn Reflect, &SerializeDriver) -> Result<Value, SerializeError> + Send + Sync + 'static,
{
    Arc::new(f)
}

fn erase_deserializer<F>(f: F) -> DeserializeFn
where
    F: Fn(&Value, &'static TypeInfo, &DeserializeDriver) -> Result<Box<dyn Reflect>, DeserializeError>
        + Send
        + Sync
        + 'static,
{
    Arc::new(f)
}

fn typed_serializer<T, F>(f: F) -> SerializeFn
where
    T: Reflect + TypePath,
    F: Fn(&T, &SerializeDriver) -> Result<Value, SerializeError> + Send + Sync + 'static,
{
    erase_serializer(move |value, driver| match value.downcast_ref::<T>() {
        Some(value) => f(value, driver),
        None => Err(SerializeError::custom::<T>(format_args!(
            "received a `{}`",
            value.reflect_type_path()
        ))),
    })
}

fn typed_deserializer<T, F>(f: F) -> DeserializeFn
where
    T: Reflect,
    F: Fn(&Value, &DeserializeDriver) -> Result<T, DeserializeError> + Send + Sync + 'static,
{
    erase_deserializer(move |value, _, driver| f(value, driver).map(Reflect::into_boxed_reflect))
}

// -----------------------------------------------------------------------------
// Middleware

/// An immutable-once-shared table of per-type converters.
///
/// Registration consumes and returns the table, so a table is usually built
/// in one expression. Clones share their entries.
///
/// # Examples
///
/// ```
/// use morphe_reflect::convert::{DeserializeError, Middleware, deserialize_as, serialize};
/// use morphe_reflect::value::Value;
///
/// // Booleans travel as "yes"/"no".
/// let mw = Middleware::new().with::<bool, _, _>(
///     |value, _| Ok(Value::from(if *value { "yes" } else { "no" })),
///     |value, _| match value.as_str() {
///         Some("yes") => Ok(true),
///         Some("no") => Ok(false),
///         _ => Err(DeserializeError::custom::<bool>(value, "expected yes or no")),
///     },
/// );
///
/// assert_eq!(serialize(&true, &mw).unwrap(), Value::from("yes"));
/// assert_eq!(deserialize_as::<bool>(&Value::from("no"), &mw, false).unwrap(), false);
/// assert!(deserialize_as::<bool>(&Value::from(true), &mw, false).is_err());
/// ```
#[derive(Clone, Default)]
pub struct Middleware {
    converters: Arc<TypeIdMap<Converter>>,
}

impl Middleware {
    /// Creates an empty table.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers both directions for `T`.
    pub fn with<T, S, D>(self, serialize: S, deserialize: D) -> Self
    where
        T: Reflect + TypePath,
        S: Fn(&T, &SerializeDriver) -> Result<Value, SerializeError> + Send + Sync + 'static,
        D: Fn(&Value, &DeserializeDriver) -> Result<T, DeserializeError> + Send + Sync + 'static,
    {
        self.with_converter(
            TypeId::of::<T>(),
            Converter {
                serialize: Some(typed_serializer(serialize)),
                deserialize: Some(typed_deserializer(deserialize)),
            },
        )
    }

    /// Registers a serialize function for `T`, keeping any deserialize
    /// function already present.
    pub fn with_serializer<T, S>(mut self, serialize: S) -> Self
    where
        T: Reflect + TypePath,
        S: Fn(&T, &SerializeDriver) -> Result<Value, SerializeError> + Send + Sync + 'static,
    {
        let converters = Arc::make_mut(&mut self.converters);
        converters
            .get_or_insert(TypeId::of::<T>(), Converter::default)
            .serialize = Some(typed_serializer(serialize));
        self
    }

    /// Registers a deserialize function for `T`, keeping any serialize
    /// function already present.
    pub fn with_deserializer<T, D>(mut self, deserialize: D) -> Self
    where
        T: Reflect,
        D: Fn(&Value, &DeserializeDriver) -> Result<T, DeserializeError> + Send + Sync + 'static,
    {
        let converters = Arc::make_mut(&mut self.converters);
        converters
            .get_or_insert(TypeId::of::<T>(), Converter::default)
            .deserialize = Some(typed_deserializer(deserialize));
        self
    }

    /// Registers a deserialize function for `T` that also receives the
    /// target descriptor and may return any value `T` converts from.
    ///
    /// The result goes through [`FromReflect`] only when the caller asks for
    /// a concrete type, so dynamic values are allowed.
    pub fn with_raw_deserializer<T, D>(mut self, deserialize: D) -> Self
    where
        T: FromReflect,
        D: Fn(&Value, &'static TypeInfo, &DeserializeDriver) -> Result<Box<dyn Reflect>, DeserializeError>
            + Send
            + Sync
            + 'static,
    {
        let converters = Arc::make_mut(&mut self.converters);
        converters
            .get_or_insert(TypeId::of::<T>(), Converter::default)
            .deserialize = Some(erase_deserializer(deserialize));
        self
    }

    /// Registers a type-erased converter, replacing any previous one.
    pub fn with_converter(mut self, type_id: TypeId, converter: Converter) -> Self {
        Arc::make_mut(&mut self.converters).insert(type_id, converter);
        self
    }

    /// Merges `other` into `self`; entries of `other` win.
    pub fn merge(mut self, other: &Middleware) -> Self {
        let converters = Arc::make_mut(&mut self.converters);
        for (type_id, converter) in other.converters.iter() {
            converters.insert(*type_id, converter.clone());
        }
        self
    }

    #[inline]
    pub fn serializer(&self, type_id: TypeId) -> Option<&SerializeFn> {
        self.converters.get(&type_id)?.serialize.as_ref()
    }

    #[inline]
    pub fn deserializer(&self, type_id: TypeId) -> Option<&DeserializeFn> {
        self.converters.get(&type_id)?.deserialize.as_ref()
    }

    #[inline]
    pub fn contains(&self, type_id: TypeId) -> bool {
        self.converters.contains(&type_id)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.converters.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.converters.is_empty()
    }
}

impl fmt::Debug for Middleware {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Middleware")
            .field("len", &self.converters.len())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use core::any::TypeId;

    use super::Middleware;
    use crate::Reflect;
    use crate::convert::{DeserializeError, SerializeDriver};
    use crate::value::Value;

    #[test]
    fn registration_keeps_other_direction() {
        let mw = Middleware::new()
            .with_serializer::<u8, _>(|value, _| Ok(Value::from(u64::from(*value) * 2)))
            .with_deserializer::<u8, _>(|_, _| Ok(0u8));

        assert_eq!(mw.len(), 1);
        assert!(mw.serializer(TypeId::of::<u8>()).is_some());
        assert!(mw.deserializer(TypeId::of::<u8>()).is_some());
        assert!(mw.serializer(TypeId::of::<u16>()).is_none());
    }

    #[test]
    fn clones_are_independent() {
        let base = Middleware::new().with_serializer::<u8, _>(|_, _| Ok(Value::Null));
        let extended = base
            .clone()
            .with_deserializer::<String, _>(|value, _| {
                value
                    .as_str()
                    .map(str::to_uppercase)
                    .ok_or_else(|| DeserializeError::custom::<String>(value, "not a string"))
            });

        assert_eq!(base.len(), 1);
        assert_eq!(extended.len(), 2);
        assert_eq!(extended.merge(&base).len(), 2);
    }

    #[test]
    fn typed_serializer_checks_runtime_type() {
        let mw = Middleware::new().with_serializer::<u8, _>(|_, _| Ok(Value::Null));
        let driver = SerializeDriver::new(&mw);
        let f = mw.serializer(TypeId::of::<u8>()).unwrap();

        assert_eq!(f(&1u8 as &dyn Reflect, &driver).unwrap(), Value::Null);
        assert!(f(&1u16 as &dyn Reflect, &driver).is_err());
    }
}
