use syn::{Field, Ident, Type};

use super::{FieldAttributes, ReflectMeta};

/// A named field of a derived struct.
pub(crate) struct StructField<'a> {
    pub data: &'a Field,
    pub attrs: FieldAttributes,
}

impl<'a> StructField<'a> {
    pub fn ident(&self) -> &'a Ident {
        self.data
            .ident
            .as_ref()
            .expect("Struct should not have unnamed fields.")
    }

    pub fn ty(&self) -> &'a Type {
        &self.data.ty
    }

    pub fn is_base(&self) -> bool {
        self.attrs.base.is_some()
    }
}

pub(crate) struct ReflectStruct<'a> {
    pub meta: ReflectMeta<'a>,
    pub fields: Vec<StructField<'a>>,
}

impl<'a> ReflectStruct<'a> {
    #[inline]
    pub fn meta(&self) -> &ReflectMeta<'a> {
        &self.meta
    }

    /// Fields declared by the struct itself.
    pub fn own_fields(&self) -> impl Iterator<Item = &StructField<'a>> {
        self.fields.iter().filter(|field| !field.is_base())
    }

    /// Fields holding base structs.
    pub fn base_fields(&self) -> impl Iterator<Item = &StructField<'a>> {
        self.fields.iter().filter(|field| field.is_base())
    }
}
