use core::fmt;
use core::hash::BuildHasher;

use chrono::{NaiveDate, NaiveDateTime};

use crate::hash::FixedHashState;
use crate::impls::NonGenericTypeInfoCell;
use crate::info::{OpaqueInfo, TypeInfo, TypePath, Typed};
use crate::ops::ReflectRef;
use crate::{FromReflect, Reflect};

macro_rules! impl_reflect_opaque {
    ($ty:ident, $path:literal) => {
        impl TypePath for $ty {
            #[inline]
            fn type_path() -> &'static str {
                $path
            }

            #[inline]
            fn type_name() -> &'static str {
                stringify!($ty)
            }

            #[inline]
            fn module_path() -> Option<&'static str> {
                Some("chrono")
            }
        }

        impl Typed for $ty {
            fn type_info() -> &'static TypeInfo {
                static CELL: NonGenericTypeInfoCell = NonGenericTypeInfoCell::new();
                CELL.get_or_init(|| TypeInfo::Opaque(OpaqueInfo::new::<Self>()))
            }
        }

        impl Reflect for $ty {
            #[inline]
            fn reflect_ref(&self) -> ReflectRef<'_> {
                ReflectRef::Opaque(self)
            }

            #[inline]
            fn reflect_partial_eq(&self, other: &dyn Reflect) -> Option<bool> {
                other.downcast_ref::<Self>().map(|other| self == other)
            }

            #[inline]
            fn reflect_hash(&self) -> Option<u64> {
                Some(FixedHashState.hash_one(self))
            }

            #[inline]
            fn reflect_debug(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                fmt::Debug::fmt(self, f)
            }
        }

        impl FromReflect for $ty {
            #[inline]
            fn from_reflect(reflect: &dyn Reflect) -> Option<Self> {
                reflect.downcast_ref::<Self>().copied()
            }
        }
    };
}

impl_reflect_opaque!(NaiveDateTime, "chrono::NaiveDateTime");
impl_reflect_opaque!(NaiveDate, "chrono::NaiveDate");
