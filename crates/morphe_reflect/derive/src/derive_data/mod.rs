//! Provide some tools for parsing token stream.

// -----------------------------------------------------------------------------
// Modules

mod attributes;
mod reflect_derive;
mod reflect_enum;
mod reflect_meta;
mod reflect_struct;
mod reflect_union;

// -----------------------------------------------------------------------------
// Internal API

pub(crate) use attributes::{FieldAttributes, TagValue, TypeAttributes, VariantAttributes};

pub(crate) use reflect_derive::ReflectDerive;
pub(crate) use reflect_enum::{EnumMemberData, ReflectEnum};
pub(crate) use reflect_meta::ReflectMeta;
pub(crate) use reflect_struct::{ReflectStruct, StructField};
pub(crate) use reflect_union::{ReflectUnion, UnionVariant};
