#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]

// -----------------------------------------------------------------------------
// Extern Self

// Usually, we need to use `crate` in the crate itself and use `morphe_reflect` in doc testing.
// But `macro_utils::Manifest` can only choose one, so we must have an
// `extern self` to ensure `morphe_reflect` can be used as an alias for `crate`.
extern crate self as morphe_reflect;

// -----------------------------------------------------------------------------
// Modules

mod reflection;

pub mod convert;
pub mod hash;
pub mod impls;
pub mod info;
pub mod ops;
pub mod value;

// -----------------------------------------------------------------------------
// Top-Level exports

pub use morphe_reflect_derive as derive;
pub use reflection::{FromReflect, Reflect};

/// The most commonly used items.
///
/// ```
/// use morphe_reflect::prelude::*;
///
/// #[derive(Reflect, Debug, PartialEq)]
/// struct Point {
///     x: i64,
///     y: i64,
/// }
///
/// let input = Value::from_iter([("x", Value::from(1)), ("y", Value::from("2"))]);
/// let point: Point = deserialize_as(&input, &Middleware::new(), false).unwrap();
/// assert_eq!(point, Point { x: 1, y: 2 });
/// ```
pub mod prelude {
    pub use crate::convert::{Middleware, deserialize, deserialize_as, serialize};
    pub use crate::convert::{project, project_into};
    pub use crate::derive::Reflect;
    pub use crate::info::{TypeInfo, TypePath, Typed};
    pub use crate::value::{Mapping, Number, Value};
    pub use crate::{FromReflect, Reflect};
}
