use core::fmt;

use crate::impls::NonGenericTypeInfoCell;
use crate::info::{OpaqueInfo, TypeInfo, TypePath, Typed};
use crate::ops::ReflectRef;
use crate::{FromReflect, Reflect};

/// The reflected null.
///
/// Produced by the deserializer for null input, whatever the target type,
/// and serialized back to null. [`FromReflect`] for `Option<T>` turns it
/// into `None`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Null;

impl TypePath for Null {
    #[inline]
    fn type_path() -> &'static str {
        "morphe_reflect::ops::Null"
    }

    #[inline]
    fn type_name() -> &'static str {
        "Null"
    }

    #[inline]
    fn module_path() -> Option<&'static str> {
        Some("morphe_reflect::ops")
    }
}

impl Typed for Null {
    fn type_info() -> &'static TypeInfo {
        static CELL: NonGenericTypeInfoCell = NonGenericTypeInfoCell::new();
        CELL.get_or_init(|| TypeInfo::Opaque(OpaqueInfo::new::<Self>()))
    }
}

impl Reflect for Null {
    #[inline]
    fn represented_type_info(&self) -> Option<&'static TypeInfo> {
        None
    }

    #[inline]
    fn reflect_ref(&self) -> ReflectRef<'_> {
        ReflectRef::Null
    }

    fn reflect_debug(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Null")
    }
}

impl FromReflect for Null {
    fn from_reflect(reflect: &dyn Reflect) -> Option<Self> {
        matches!(reflect.reflect_ref(), ReflectRef::Null).then_some(Null)
    }
}
