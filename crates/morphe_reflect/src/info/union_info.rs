use core::any::TypeId;

use crate::info::{Type, TypeInfo, TypePath, Typed, impl_type_fn};
use crate::ops::Union;

/// One alternative of a union.
#[derive(Clone, Debug)]
pub struct Alternative {
    name: &'static str,
    type_id: TypeId,
    type_info: fn() -> &'static TypeInfo,
}

impl Alternative {
    #[inline]
    pub const fn new<T: Typed>(name: &'static str) -> Self {
        Self {
            name,
            type_id: TypeId::of::<T>(),
            type_info: T::type_info,
        }
    }

    /// The variant name carrying the alternative.
    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    #[inline]
    pub const fn type_id(&self) -> TypeId {
        self.type_id
    }

    #[inline]
    pub fn type_info(&self) -> &'static TypeInfo {
        (self.type_info)()
    }
}

/// Descriptor of a tagless union.
///
/// Alternatives are ordered; deserialization commits to the first one that
/// accepts the input.
///
/// # Panics
///
/// [`UnionInfo::new`] panics with fewer than two alternatives.
#[derive(Clone, Debug)]
pub struct UnionInfo {
    ty: Type,
    alternatives: Box<[Alternative]>,
}

impl UnionInfo {
    impl_type_fn!(ty);

    pub fn new<T: Union + TypePath>(alternatives: &[Alternative]) -> Self {
        assert!(
            alternatives.len() >= 2,
            "union `{}` needs at least two alternatives",
            T::type_path()
        );
        Self {
            ty: Type::of::<T>(),
            alternatives: alternatives.into(),
        }
    }

    #[inline]
    pub fn alternatives(&self) -> &[Alternative] {
        &self.alternatives
    }

    #[inline]
    pub fn alternative_at(&self, index: usize) -> Option<&Alternative> {
        self.alternatives.get(index)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.alternatives.len()
    }
}
