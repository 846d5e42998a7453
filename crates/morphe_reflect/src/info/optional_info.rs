use core::any::TypeId;

use crate::info::{Type, TypeInfo, TypePath, Typed, impl_type_fn};

/// Descriptor of `Option<T>`.
#[derive(Clone, Debug)]
pub struct OptionalInfo {
    ty: Type,
    inner_id: TypeId,
    inner_info: fn() -> &'static TypeInfo,
}

impl OptionalInfo {
    impl_type_fn!(ty);

    #[inline]
    pub const fn new<TOption: TypePath, TInner: Typed>() -> Self {
        Self {
            ty: Type::of::<TOption>(),
            inner_id: TypeId::of::<TInner>(),
            inner_info: TInner::type_info,
        }
    }

    #[inline]
    pub const fn inner_id(&self) -> TypeId {
        self.inner_id
    }

    /// Returns the [`TypeInfo`] of the wrapped type.
    #[inline]
    pub fn inner_info(&self) -> &'static TypeInfo {
        (self.inner_info)()
    }
}
