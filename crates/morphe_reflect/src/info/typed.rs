use crate::info::{TypeInfo, TypePath};

// -----------------------------------------------------------------------------
// Typed

/// Provides the static [`TypeInfo`] of a type.
///
/// Implementations build the descriptor lazily and cache it in a
/// [`NonGenericTypeInfoCell`](crate::impls::NonGenericTypeInfoCell) or
/// [`GenericTypeInfoCell`](crate::impls::GenericTypeInfoCell), so every call
/// returns the same `&'static` descriptor.
pub trait Typed: TypePath {
    fn type_info() -> &'static TypeInfo;
}

// -----------------------------------------------------------------------------
// DynamicTyped

/// Dynamic dispatch for [`Typed`].
pub trait DynamicTyped {
    fn reflect_type_info(&self) -> &'static TypeInfo;
}

impl<T: Typed> DynamicTyped for T {
    #[inline]
    fn reflect_type_info(&self) -> &'static TypeInfo {
        Self::type_info()
    }
}
