use crate::info::{Type, TypeInfo, Typed, impl_type_fn};

/// A named field of a struct.
#[derive(Clone, Debug)]
pub struct NamedField {
    name: &'static str,
    ty: Type,
    // `TypeInfo` is created on the first visit, use function pointers to delay it.
    type_info: fn() -> &'static TypeInfo,
}

impl NamedField {
    impl_type_fn!(ty);

    #[inline]
    pub const fn new<T: Typed>(name: &'static str) -> Self {
        Self {
            name,
            ty: Type::of::<T>(),
            type_info: T::type_info,
        }
    }

    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    #[inline]
    pub fn type_info(&self) -> &'static TypeInfo {
        (self.type_info)()
    }
}
