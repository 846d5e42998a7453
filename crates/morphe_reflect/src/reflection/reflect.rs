use core::any::{Any, TypeId};
use core::fmt;

use crate::impls::NonGenericTypeInfoCell;
use crate::info::{DynamicTypePath, DynamicTyped, TypePath, Typed};
use crate::info::{OpaqueInfo, TypeInfo};
use crate::ops::ReflectRef;

// -----------------------------------------------------------------------------
// Reflect

/// The core trait of reflection: a value that exposes its type descriptor and
/// a kind-specific runtime view.
///
/// Usually implemented through `#[derive(Reflect)]`.
///
/// Dynamic containers ([`DynamicStruct`](crate::ops::DynamicStruct) and
/// friends) report the descriptor of the type they stand in for through
/// [`represented_type_info`](Reflect::represented_type_info), while
/// [`reflect_type_info`](DynamicTyped::reflect_type_info) describes the
/// container itself.
pub trait Reflect: DynamicTypePath + DynamicTyped + Send + Sync + Any {
    #[inline(always)]
    fn as_reflect(&self) -> &dyn Reflect
    where
        Self: Sized,
    {
        self
    }

    #[inline(always)]
    fn into_boxed_reflect(self) -> Box<dyn Reflect>
    where
        Self: Sized,
    {
        Box::new(self)
    }

    /// The [`TypeId`] of the concrete runtime type.
    #[inline]
    fn ty_id(&self) -> TypeId {
        TypeId::of::<Self>()
    }

    #[inline]
    fn is_dynamic(&self) -> bool {
        false
    }

    /// The descriptor of the type this value stands for.
    #[inline]
    fn represented_type_info(&self) -> Option<&'static TypeInfo> {
        Some(self.reflect_type_info())
    }

    fn reflect_ref(&self) -> ReflectRef<'_>;

    /// Structural equality. `None` if the values cannot be compared.
    #[inline]
    fn reflect_partial_eq(&self, other: &dyn Reflect) -> Option<bool> {
        crate::impls::reflect_partial_eq(self.reflect_ref(), other)
    }

    /// A hash consistent with [`reflect_partial_eq`](Reflect::reflect_partial_eq).
    /// `None` for values that cannot be compared.
    #[inline]
    fn reflect_hash(&self) -> Option<u64> {
        crate::impls::reflect_hash(self.reflect_ref())
    }

    fn reflect_debug(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        crate::impls::reflect_debug(self.reflect_ref(), self.reflect_type_path(), f)
    }
}

impl dyn Reflect {
    #[inline(always)]
    pub fn is<T: Any>(&self) -> bool {
        self.ty_id() == TypeId::of::<T>()
    }

    /// Returns `true` if the value is, or stands in for, a `T`.
    #[inline]
    pub fn represents<T: Reflect>(&self) -> bool {
        match self.represented_type_info() {
            Some(t) => t.type_id() == TypeId::of::<T>(),
            None => false,
        }
    }

    #[inline]
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        <dyn Any>::downcast_ref(self)
    }
}

impl fmt::Debug for dyn Reflect {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.reflect_debug(f)
    }
}

impl TypePath for dyn Reflect {
    #[inline]
    fn type_path() -> &'static str {
        "dyn morphe_reflect::Reflect"
    }

    #[inline]
    fn type_name() -> &'static str {
        "dyn Reflect"
    }
}

impl Typed for dyn Reflect {
    fn type_info() -> &'static TypeInfo {
        static CELL: NonGenericTypeInfoCell = NonGenericTypeInfoCell::new();
        CELL.get_or_init(|| TypeInfo::Opaque(OpaqueInfo::new::<Self>()))
    }
}
