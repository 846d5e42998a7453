use crate::Reflect;
use crate::ops::{Enum, List, Map, Primitive, Struct, Union};
use crate::value::Value;

/// An immutable view of a reflected value, by kind.
#[derive(Clone, Copy)]
pub enum ReflectRef<'a> {
    /// The null marker, see [`Null`](crate::ops::Null).
    Null,
    Primitive(&'a dyn Primitive),
    Enum(&'a dyn Enum),
    /// `None` serializes to null, `Some` to its content.
    Optional(Option<&'a dyn Reflect>),
    List(&'a dyn List),
    Map(&'a dyn Map),
    Union(&'a dyn Union),
    Struct(&'a dyn Struct),
    /// A raw generic value kept as is.
    Generic(&'a Value),
    Opaque(&'a dyn Reflect),
}

impl ReflectRef<'_> {
    /// A short name of the kind, used in debug output and messages.
    pub const fn kind_name(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Primitive(_) => "primitive",
            Self::Enum(_) => "enum",
            Self::Optional(_) => "optional",
            Self::List(_) => "list",
            Self::Map(_) => "map",
            Self::Union(_) => "union",
            Self::Struct(_) => "struct",
            Self::Generic(_) => "generic",
            Self::Opaque(_) => "opaque",
        }
    }
}
