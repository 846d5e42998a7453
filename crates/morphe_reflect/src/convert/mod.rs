//! Conversion between reflected values and [`Value`] trees.
//!
//! ## Menu
//!
//! - [`serialize`] / [`SerializeDriver`]: reflected value to [`Value`].
//! - [`deserialize`] / [`deserialize_as`] / [`DeserializeDriver`]: [`Value`]
//!   to reflected value, directed by a [`TypeInfo`].
//! - [`project`] / [`project_into`]: reshape a value to a target's fields.
//! - [`Middleware`]: per-type converters overriding the generic algorithm.
//! - [`classify`]: how the deserializer treats a target type.
//! - [`resolve_fields`]: the merged field table of a struct, bases included.
//! - [`DeserializeError`]: a path-annotated failure.

// -----------------------------------------------------------------------------
// Modules

mod classify;
mod de;
mod error;
mod info_stack;
mod middleware;
mod project;
mod resolve;
mod ser;

// -----------------------------------------------------------------------------
// Exports

pub use classify::{Category, classify};
pub use de::DeserializeDriver;
pub use error::{DeserializeError, PathSegment, ProjectError, SerializeError};
pub use middleware::{Converter, DeserializeFn, Middleware, SerializeFn};
pub use project::{project, project_into};
pub use resolve::{ResolutionError, ResolvedFields, resolve, resolve_fields};
pub use ser::SerializeDriver;

use crate::info::{TypeInfo, Typed};
use crate::value::Value;
use crate::{FromReflect, Reflect};

/// The nesting limit of both drivers unless configured otherwise.
pub const DEFAULT_MAX_DEPTH: usize = 128;

// -----------------------------------------------------------------------------
// Entry points

/// Serializes `value` with a fresh [`SerializeDriver`].
///
/// # Examples
///
/// ```
/// use morphe_reflect::convert::{Middleware, serialize};
/// use morphe_reflect::value::Value;
///
/// let output = serialize(&vec![Some(1u8), None], &Middleware::new()).unwrap();
/// assert_eq!(output, Value::from(vec![Value::from(1), Value::Null]));
/// ```
#[inline]
pub fn serialize(value: &dyn Reflect, middleware: &Middleware) -> Result<Value, SerializeError> {
    SerializeDriver::new(middleware).serialize(value)
}

/// Deserializes `value` into the type described by `info` with a fresh
/// [`DeserializeDriver`].
#[inline]
pub fn deserialize(
    value: &Value,
    info: &'static TypeInfo,
    middleware: &Middleware,
    strict: bool,
) -> Result<Box<dyn Reflect>, DeserializeError> {
    DeserializeDriver::new(middleware)
        .strict(strict)
        .deserialize(value, info)
}

/// Deserializes `value` into a `T` with a fresh [`DeserializeDriver`].
///
/// # Examples
///
/// ```
/// use std::collections::HashMap;
///
/// use morphe_reflect::convert::{Middleware, deserialize_as};
/// use morphe_reflect::value::Value;
///
/// let input = Value::from_iter([("a", "1"), ("b", "2")]);
/// let map: HashMap<String, u8> = deserialize_as(&input, &Middleware::new(), false).unwrap();
/// assert_eq!(map["b"], 2);
/// ```
#[inline]
pub fn deserialize_as<T: FromReflect + Typed>(
    value: &Value,
    middleware: &Middleware,
    strict: bool,
) -> Result<T, DeserializeError> {
    DeserializeDriver::new(middleware)
        .strict(strict)
        .deserialize_as(value)
}
