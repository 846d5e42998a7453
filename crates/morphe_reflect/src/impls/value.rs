use core::fmt;

use crate::impls::NonGenericTypeInfoCell;
use crate::info::{OpaqueInfo, TypeInfo, TypePath, Typed};
use crate::ops::ReflectRef;
use crate::value::Value;
use crate::{FromReflect, Reflect};

impl TypePath for Value {
    #[inline]
    fn type_path() -> &'static str {
        "morphe_reflect::value::Value"
    }

    #[inline]
    fn type_name() -> &'static str {
        "Value"
    }

    #[inline]
    fn module_path() -> Option<&'static str> {
        Some("morphe_reflect::value")
    }
}

impl Typed for Value {
    fn type_info() -> &'static TypeInfo {
        static CELL: NonGenericTypeInfoCell = NonGenericTypeInfoCell::new();
        CELL.get_or_init(|| TypeInfo::Opaque(OpaqueInfo::new::<Self>()))
    }
}

/// A raw generic value, for untyped fields and `Value`-typed targets.
impl Reflect for Value {
    #[inline]
    fn reflect_ref(&self) -> ReflectRef<'_> {
        ReflectRef::Generic(self)
    }

    fn reflect_debug(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Value({self})")
    }
}

impl FromReflect for Value {
    fn from_reflect(reflect: &dyn Reflect) -> Option<Self> {
        match reflect.reflect_ref() {
            ReflectRef::Generic(value) => Some(value.clone()),
            ReflectRef::Null => Some(Value::Null),
            ReflectRef::Primitive(p) => Some(p.to_value()),
            ReflectRef::Enum(e) => Some(e.tag().to_value()),
            _ => None,
        }
    }
}
