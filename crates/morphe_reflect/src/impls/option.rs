use crate::impls::{GenericTypeInfoCell, GenericTypePathCell, concat};
use crate::info::{OptionalInfo, TypeInfo, TypePath, Typed};
use crate::ops::ReflectRef;
use crate::{FromReflect, Reflect};

impl<T: TypePath> TypePath for Option<T> {
    fn type_path() -> &'static str {
        static CELL: GenericTypePathCell = GenericTypePathCell::new();
        CELL.get_or_insert::<Self>(|| concat(&["core::option::Option<", T::type_path(), ">"]))
    }

    fn type_name() -> &'static str {
        static CELL: GenericTypePathCell = GenericTypePathCell::new();
        CELL.get_or_insert::<Self>(|| concat(&["Option<", T::type_name(), ">"]))
    }

    #[inline]
    fn module_path() -> Option<&'static str> {
        Some("core::option")
    }
}

impl<T: Reflect + Typed> Typed for Option<T> {
    fn type_info() -> &'static TypeInfo {
        static CELL: GenericTypeInfoCell = GenericTypeInfoCell::new();
        CELL.get_or_insert::<Self>(|| TypeInfo::Optional(OptionalInfo::new::<Self, T>()))
    }
}

impl<T: Reflect + Typed> Reflect for Option<T> {
    #[inline]
    fn reflect_ref(&self) -> ReflectRef<'_> {
        ReflectRef::Optional(self.as_ref().map(|v| v as &dyn Reflect))
    }
}

/// Null and `None` convert to `None`; anything else converts into `T`.
impl<T: FromReflect + Typed> FromReflect for Option<T> {
    fn from_reflect(reflect: &dyn Reflect) -> Option<Self> {
        match reflect.reflect_ref() {
            ReflectRef::Null | ReflectRef::Optional(None) => Some(None),
            ReflectRef::Optional(Some(inner)) => T::from_reflect(inner).map(Some),
            _ => T::from_reflect(reflect).map(Some),
        }
    }
}
