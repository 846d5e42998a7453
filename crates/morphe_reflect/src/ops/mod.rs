//! Runtime views of reflected values.
//!
//! [`Reflect::reflect_ref`](crate::Reflect::reflect_ref) returns a
//! [`ReflectRef`], through which the serializer walks a value without knowing
//! its concrete type. Each kind has a trait ([`Struct`], [`List`], ...) and,
//! where the deserializer needs to build one, a dynamic container
//! ([`DynamicStruct`], [`DynamicList`], [`DynamicMap`]).

// -----------------------------------------------------------------------------
// Modules

mod enum_ops;
mod list_ops;
mod map_ops;
mod null;
mod primitive_ops;
mod reflect_ref;
mod struct_ops;
mod union_ops;

// -----------------------------------------------------------------------------
// Exports

pub use enum_ops::Enum;
pub use list_ops::{DynamicList, List, ListItemIter};
pub use map_ops::{DynamicMap, Map};
pub use null::Null;
pub use primitive_ops::{Coerce, Primitive};
pub use reflect_ref::ReflectRef;
pub use struct_ops::{DynamicStruct, Struct, StructFieldIter, field_or_null};
pub use union_ops::Union;
