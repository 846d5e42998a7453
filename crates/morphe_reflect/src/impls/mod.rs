//! Reflection for foreign types and the helpers their implementations share.
//!
//! - Primitives: `bool`, `char`, all integers up to 64 bits, `f32`, `f64`, `String`.
//! - `Option<T>`.
//! - Lists: `Vec<T>`, `VecDeque<T>`.
//! - Maps: `HashMap<K, V, S>`, `BTreeMap<K, V>`.
//! - [`Value`](crate::value::Value), kept as a raw generic value.
//! - `chrono::NaiveDateTime` and `chrono::NaiveDate` as opaque types, with the
//!   `chrono` feature.

// -----------------------------------------------------------------------------
// Modules

mod cell;
mod concat;
mod list;
mod map;
mod option;
mod primitives;
mod utils;
mod value;

#[cfg(feature = "chrono")]
mod chrono;

// -----------------------------------------------------------------------------
// Exports

pub use cell::{GenericTypeInfoCell, GenericTypePathCell, NonGenericTypeInfoCell};
pub use concat::concat;
pub use utils::{list_debug, map_debug, reflect_debug, reflect_hash, reflect_partial_eq, struct_debug};
