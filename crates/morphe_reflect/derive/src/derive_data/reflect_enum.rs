use syn::Ident;

use super::{ReflectMeta, TagValue};

/// A unit variant and the tag it stands for.
pub(crate) struct EnumMemberData<'a> {
    pub ident: &'a Ident,
    pub tag: TagValue,
}

/// A unit-only enum: a closed set of named constants.
pub(crate) struct ReflectEnum<'a> {
    pub meta: ReflectMeta<'a>,
    pub members: Vec<EnumMemberData<'a>>,
}

impl<'a> ReflectEnum<'a> {
    #[inline]
    pub fn meta(&self) -> &ReflectMeta<'a> {
        &self.meta
    }
}
