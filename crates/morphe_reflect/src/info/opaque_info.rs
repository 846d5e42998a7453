use crate::info::{Type, TypePath, impl_type_fn};

/// Descriptor of a type whose content is invisible to reflection.
///
/// Opaque values are only converted by middleware.
#[derive(Clone, Debug)]
pub struct OpaqueInfo {
    ty: Type,
}

impl OpaqueInfo {
    impl_type_fn!(ty);

    #[inline]
    pub const fn new<T: TypePath + ?Sized>() -> Self {
        Self { ty: Type::of::<T>() }
    }
}
