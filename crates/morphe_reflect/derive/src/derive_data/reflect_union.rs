use syn::{Ident, Type};

use super::ReflectMeta;

/// A variant wrapping one alternative of a union.
pub(crate) struct UnionVariant<'a> {
    pub ident: &'a Ident,
    pub ty: &'a Type,
}

/// A `#[reflect(union)]` enum: ordered alternatives, tried first to last.
pub(crate) struct ReflectUnion<'a> {
    pub meta: ReflectMeta<'a>,
    pub variants: Vec<UnionVariant<'a>>,
}

impl<'a> ReflectUnion<'a> {
    #[inline]
    pub fn meta(&self) -> &ReflectMeta<'a> {
        &self.meta
    }
}
