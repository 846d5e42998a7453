use std::sync::OnceLock;

use crate::convert::{ResolutionError, ResolvedFields};
use crate::hash::HashMap;
use crate::info::{NamedField, Type, TypeInfo, TypePath, impl_type_fn};
use crate::ops::Struct;

/// Descriptor of a struct with named fields.
///
/// Besides its own fields a struct may name base structs, whose fields it
/// inherits, and constructor fields, whose types take precedence over any
/// other declaration of the same name. The merged view is produced by
/// [`resolve_fields`](crate::convert::resolve_fields).
///
/// # Examples
///
/// ```
/// use morphe_reflect::derive::Reflect;
/// use morphe_reflect::info::Typed;
///
/// #[derive(Reflect)]
/// struct Shoe {
///     size: u32,
///     name: String,
/// }
///
/// let info = Shoe::type_info().as_struct().unwrap();
/// assert_eq!(info.field("size").unwrap().type_name(), "u32");
/// assert_eq!(info.field_names().collect::<Vec<_>>(), ["size", "name"]);
/// ```
#[derive(Clone, Debug)]
pub struct StructInfo {
    ty: Type,
    fields: Box<[NamedField]>,
    field_indices: HashMap<&'static str, usize>,
    bases: Box<[fn() -> &'static TypeInfo]>,
    constructor: Box<[NamedField]>,
    resolved: OnceLock<Result<ResolvedFields, ResolutionError>>,
}

impl StructInfo {
    impl_type_fn!(ty);

    /// Creates a new [`StructInfo`] from the struct's own fields.
    pub fn new<T: Struct + TypePath>(fields: &[NamedField]) -> Self {
        let field_indices = fields
            .iter()
            .enumerate()
            .map(|(index, field)| (field.name(), index))
            .collect();

        Self {
            ty: Type::of::<T>(),
            fields: fields.into(),
            field_indices,
            bases: Box::new([]),
            constructor: Box::new([]),
            resolved: OnceLock::new(),
        }
    }

    /// Sets the base structs, in declaration order.
    pub fn with_bases(mut self, bases: &[fn() -> &'static TypeInfo]) -> Self {
        self.bases = bases.into();
        self
    }

    /// Sets the constructor fields.
    pub fn with_constructor(mut self, fields: &[NamedField]) -> Self {
        self.constructor = fields.into();
        self
    }

    /// The struct's own fields, in declaration order.
    #[inline]
    pub fn fields(&self) -> &[NamedField] {
        &self.fields
    }

    pub fn field(&self, name: &str) -> Option<&NamedField> {
        self.field_indices.get(name).map(|index| &self.fields[*index])
    }

    #[inline]
    pub fn field_at(&self, index: usize) -> Option<&NamedField> {
        self.fields.get(index)
    }

    #[inline]
    pub fn field_names(&self) -> impl ExactSizeIterator<Item = &'static str> + '_ {
        self.fields.iter().map(NamedField::name)
    }

    #[inline]
    pub fn field_len(&self) -> usize {
        self.fields.len()
    }

    /// Returns the descriptors of the direct bases.
    #[inline]
    pub fn bases(&self) -> impl ExactSizeIterator<Item = &'static TypeInfo> + '_ {
        self.bases.iter().map(|base| base())
    }

    #[inline]
    pub fn constructor(&self) -> &[NamedField] {
        &self.constructor
    }

    #[inline]
    pub(crate) fn resolved_cell(&self) -> &OnceLock<Result<ResolvedFields, ResolutionError>> {
        &self.resolved
    }
}
