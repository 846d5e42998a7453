//! Static type descriptors.
//!
//! ## Menu
//!
//! - [`TypePath`]: A trait for obtaining stable type names.
//!     - [`type_path`](TypePath::type_path): Full name, a fixed and unique identifier for the type.
//!     - [`type_name`](TypePath::type_name): The name without module path, used in error messages.
//!
//! - [`DynamicTypePath`]: Provide dynamic dispatch for `TypePath`.
//!
//! - [`Type`]: A `TypeId` plus the `TypePath` functions of one type.
//!
//! - [`TypeInfo`]: The descriptor of one type, the inner is one of following:
//!     - [`PrimitiveInfo`]: bool, integers, floats and strings, including the coercion function.
//!     - [`EnumInfo`]: unit-only enums, including ordered members and their tags.
//!     - [`OptionalInfo`]: `Option<T>`, including the inner type info.
//!     - [`ListInfo`]: list-like (e.g. `Vec<T>`), including item type info.
//!     - [`MapInfo`]: map-like (e.g. `HashMap<K, V>`), including key and value type info.
//!     - [`UnionInfo`]: tagless unions, including the ordered alternatives.
//!     - [`StructInfo`]: named-field records, including bases and constructor fields.
//!     - [`OpaqueInfo`]: types whose inside is invisible, only middleware converts them.
//!
//! - [`Typed`]: A trait for obtaining `TypeInfo` data.
//!
//! - [`DynamicTyped`]: Provide dynamic dispatch for `Typed`.

// -----------------------------------------------------------------------------
// Modules

mod enum_info;
mod field_info;
mod list_info;
mod map_info;
mod opaque_info;
mod optional_info;
mod primitive_info;
mod struct_info;
mod type_info;
mod type_path;
mod typed;
mod union_info;

// -----------------------------------------------------------------------------
// Internal API

pub(crate) use type_path::impl_type_fn;

// -----------------------------------------------------------------------------
// Exports

pub use enum_info::{EnumInfo, EnumMember, Tag};
pub use field_info::NamedField;
pub use list_info::ListInfo;
pub use map_info::MapInfo;
pub use opaque_info::OpaqueInfo;
pub use optional_info::OptionalInfo;
pub use primitive_info::{PrimitiveInfo, PrimitiveKind};
pub use struct_info::StructInfo;
pub use type_info::{ReflectKind, ReflectKindError, TypeInfo};
pub use type_path::{DynamicTypePath, Type, TypePath};
pub use typed::{DynamicTyped, Typed};
pub use union_info::{Alternative, UnionInfo};
