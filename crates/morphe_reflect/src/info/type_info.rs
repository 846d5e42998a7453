use core::{error, fmt};

use crate::info::Type;
use crate::info::{EnumInfo, ListInfo, MapInfo, OpaqueInfo};
use crate::info::{OptionalInfo, PrimitiveInfo, StructInfo, UnionInfo};

// -----------------------------------------------------------------------------
// ReflectKind

/// The kind of a [`TypeInfo`] without its content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReflectKind {
    Primitive,
    Enum,
    Optional,
    List,
    Map,
    Union,
    Struct,
    Opaque,
}

impl fmt::Display for ReflectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Primitive => f.pad("Primitive"),
            Self::Enum => f.pad("Enum"),
            Self::Optional => f.pad("Optional"),
            Self::List => f.pad("List"),
            Self::Map => f.pad("Map"),
            Self::Union => f.pad("Union"),
            Self::Struct => f.pad("Struct"),
            Self::Opaque => f.pad("Opaque"),
        }
    }
}

/// Returned by the `as_*` casts of [`TypeInfo`].
#[derive(Debug)]
pub struct ReflectKindError {
    pub expected: ReflectKind,
    pub received: ReflectKind,
}

impl fmt::Display for ReflectKindError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "reflect kind mismatch: expected {}, received {}",
            self.expected, self.received
        )
    }
}

impl error::Error for ReflectKindError {}

// -----------------------------------------------------------------------------
// TypeInfo

/// The static descriptor of a type.
///
/// Every value reachable through a descriptor's child functions is a
/// `&'static TypeInfo`, so descriptors may reference each other recursively.
///
/// # Examples
///
/// ```
/// use morphe_reflect::info::{ReflectKind, Typed};
///
/// let info = <Option<Vec<u8>>>::type_info();
/// assert_eq!(info.kind(), ReflectKind::Optional);
///
/// let inner = info.as_optional().unwrap().inner_info();
/// assert_eq!(inner.as_list().unwrap().item_info().type_name(), "u8");
/// ```
#[derive(Debug, Clone)]
pub enum TypeInfo {
    Primitive(PrimitiveInfo),
    Enum(EnumInfo),
    Optional(OptionalInfo),
    List(ListInfo),
    Map(MapInfo),
    Union(UnionInfo),
    Struct(StructInfo),
    Opaque(OpaqueInfo),
}

// Helper macro that implements type-safe accessor methods like `as_struct`.
macro_rules! impl_cast_method {
    ($name:ident : $kind:ident => $info:ident) => {
        pub const fn $name(&self) -> Result<&$info, ReflectKindError> {
            match self {
                Self::$kind(info) => Ok(info),
                _ => Err(ReflectKindError {
                    expected: ReflectKind::$kind,
                    received: self.kind(),
                }),
            }
        }
    };
}

impl TypeInfo {
    impl_cast_method!(as_primitive: Primitive => PrimitiveInfo);
    impl_cast_method!(as_enum: Enum => EnumInfo);
    impl_cast_method!(as_optional: Optional => OptionalInfo);
    impl_cast_method!(as_list: List => ListInfo);
    impl_cast_method!(as_map: Map => MapInfo);
    impl_cast_method!(as_union: Union => UnionInfo);
    impl_cast_method!(as_struct: Struct => StructInfo);
    impl_cast_method!(as_opaque: Opaque => OpaqueInfo);

    pub const fn ty(&self) -> &Type {
        match self {
            Self::Primitive(info) => info.ty(),
            Self::Enum(info) => info.ty(),
            Self::Optional(info) => info.ty(),
            Self::List(info) => info.ty(),
            Self::Map(info) => info.ty(),
            Self::Union(info) => info.ty(),
            Self::Struct(info) => info.ty(),
            Self::Opaque(info) => info.ty(),
        }
    }

    crate::info::impl_type_fn!();

    pub const fn kind(&self) -> ReflectKind {
        match self {
            Self::Primitive(_) => ReflectKind::Primitive,
            Self::Enum(_) => ReflectKind::Enum,
            Self::Optional(_) => ReflectKind::Optional,
            Self::List(_) => ReflectKind::List,
            Self::Map(_) => ReflectKind::Map,
            Self::Union(_) => ReflectKind::Union,
            Self::Struct(_) => ReflectKind::Struct,
            Self::Opaque(_) => ReflectKind::Opaque,
        }
    }
}
