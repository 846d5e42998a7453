use std::borrow::Cow;
use core::fmt;

use crate::Reflect;
use crate::hash::HashMap;
use crate::impls::NonGenericTypeInfoCell;
use crate::info::{OpaqueInfo, TypeInfo, TypePath, Typed};
use crate::ops::{Null, ReflectRef};

// -----------------------------------------------------------------------------
// Struct trait

/// A record of named fields.
///
/// Fields inherited from base structs are part of the view: they are found by
/// [`field`](Struct::field) and counted by [`field_len`](Struct::field_len).
pub trait Struct: Reflect {
    fn field(&self, name: &str) -> Option<&dyn Reflect>;

    fn field_at(&self, index: usize) -> Option<&dyn Reflect>;

    fn name_at(&self, index: usize) -> Option<&str>;

    fn field_len(&self) -> usize;
}

impl dyn Struct {
    #[inline]
    pub fn iter_fields(&self) -> StructFieldIter<'_> {
        StructFieldIter::new(self)
    }

    #[inline]
    pub fn field_as<T: Reflect>(&self, name: &str) -> Option<&T> {
        self.field(name).and_then(<dyn Reflect>::downcast_ref)
    }
}

/// Returns the field `name`, or [`Null`] when the struct has no such field.
///
/// Used by derived [`FromReflect`](crate::FromReflect) so an absent field
/// converts like an explicit null.
#[inline]
pub fn field_or_null<'a>(value: &'a dyn Struct, name: &str) -> &'a dyn Reflect {
    value.field(name).unwrap_or(&Null)
}

// -----------------------------------------------------------------------------
// Struct Field Iterator

/// Iterator over the `(name, value)` pairs of a [`Struct`].
pub struct StructFieldIter<'a> {
    struct_val: &'a dyn Struct,
    index: usize,
}

impl<'a> StructFieldIter<'a> {
    #[inline(always)]
    pub const fn new(value: &'a dyn Struct) -> Self {
        StructFieldIter {
            struct_val: value,
            index: 0,
        }
    }
}

impl<'a> Iterator for StructFieldIter<'a> {
    type Item = (&'a str, &'a dyn Reflect);

    fn next(&mut self) -> Option<Self::Item> {
        let name = self.struct_val.name_at(self.index)?;
        let value = self.struct_val.field_at(self.index)?;
        self.index += 1;
        Some((name, value))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let size = self.struct_val.field_len().saturating_sub(self.index);
        (size, Some(size))
    }
}

// -----------------------------------------------------------------------------
// Dynamic Struct

/// A struct built at runtime, optionally representing a concrete struct type.
///
/// This is what the deserializer produces for record types: fields keep the
/// input order and untyped fields may hold raw [`Value`](crate::value::Value)s.
///
/// # Examples
///
/// ```
/// use morphe_reflect::ops::{DynamicStruct, Struct};
///
/// let mut value = DynamicStruct::new();
/// value.insert("size", 42_u32);
/// value.insert("name", String::from("Hightop"));
///
/// assert_eq!(value.field_len(), 2);
/// assert_eq!(value.name_at(1), Some("name"));
/// ```
#[derive(Default)]
pub struct DynamicStruct {
    info: Option<&'static TypeInfo>,
    fields: Vec<Box<dyn Reflect>>,
    field_names: Vec<Cow<'static, str>>,
    field_indices: HashMap<Cow<'static, str>, usize>,
}

impl TypePath for DynamicStruct {
    #[inline]
    fn type_path() -> &'static str {
        "morphe_reflect::ops::DynamicStruct"
    }

    #[inline]
    fn type_name() -> &'static str {
        "DynamicStruct"
    }

    #[inline]
    fn module_path() -> Option<&'static str> {
        Some("morphe_reflect::ops")
    }
}

impl Typed for DynamicStruct {
    fn type_info() -> &'static TypeInfo {
        static CELL: NonGenericTypeInfoCell = NonGenericTypeInfoCell::new();
        CELL.get_or_init(|| TypeInfo::Opaque(OpaqueInfo::new::<Self>()))
    }
}

impl DynamicStruct {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            info: None,
            fields: Vec::with_capacity(capacity),
            field_names: Vec::with_capacity(capacity),
            field_indices: HashMap::with_capacity_and_hasher(capacity, Default::default()),
        }
    }

    /// Sets the struct type this value represents.
    ///
    /// # Panics
    ///
    /// Panics if `info` is not a struct descriptor.
    #[inline]
    pub fn set_represented_type(&mut self, info: Option<&'static TypeInfo>) {
        if let Some(info) = info {
            assert!(info.as_struct().is_ok(), "`TypeInfo` mismatched.");
        }
        self.info = info;
    }

    /// Inserts a field, replacing the value if the name is already present.
    pub fn insert_boxed(&mut self, name: impl Into<Cow<'static, str>>, value: Box<dyn Reflect>) {
        let name: Cow<'static, str> = name.into();
        if let Some(index) = self.field_indices.get(&name) {
            self.fields[*index] = value;
        } else {
            self.fields.push(value);
            self.field_indices.insert(name.clone(), self.fields.len() - 1);
            self.field_names.push(name);
        }
    }

    #[inline]
    pub fn insert<T: Reflect>(&mut self, name: impl Into<Cow<'static, str>>, value: T) {
        self.insert_boxed(name, Box::new(value));
    }

    #[inline]
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.field_indices.get(name).copied()
    }
}

impl Struct for DynamicStruct {
    #[inline]
    fn field(&self, name: &str) -> Option<&dyn Reflect> {
        self.field_indices
            .get(name)
            .map(|index| &*self.fields[*index])
    }

    #[inline]
    fn field_at(&self, index: usize) -> Option<&dyn Reflect> {
        self.fields.get(index).map(|field| &**field)
    }

    #[inline]
    fn name_at(&self, index: usize) -> Option<&str> {
        self.field_names.get(index).map(AsRef::as_ref)
    }

    #[inline]
    fn field_len(&self) -> usize {
        self.fields.len()
    }
}

impl Reflect for DynamicStruct {
    #[inline]
    fn is_dynamic(&self) -> bool {
        true
    }

    #[inline]
    fn represented_type_info(&self) -> Option<&'static TypeInfo> {
        self.info
    }

    #[inline]
    fn reflect_ref(&self) -> ReflectRef<'_> {
        ReflectRef::Struct(self)
    }

    fn reflect_debug(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DynamicStruct(")?;
        crate::impls::struct_debug(self, f)?;
        write!(f, ")")
    }
}

impl fmt::Debug for DynamicStruct {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.reflect_debug(f)
    }
}

impl<N: Into<Cow<'static, str>>> FromIterator<(N, Box<dyn Reflect>)> for DynamicStruct {
    fn from_iter<T: IntoIterator<Item = (N, Box<dyn Reflect>)>>(fields: T) -> Self {
        let mut dynamic_struct = DynamicStruct::new();
        for (name, value) in fields {
            dynamic_struct.insert_boxed(name, value);
        }
        dynamic_struct
    }
}

#[cfg(test)]
mod tests {
    use super::{DynamicStruct, Struct, field_or_null};
    use crate::ops::ReflectRef;

    #[test]
    fn insert_keeps_first_position() {
        let mut value = DynamicStruct::new();
        value.insert("a", 1_i64);
        value.insert("b", 2_i64);
        value.insert("a", 3_i64);

        let dyn_struct: &dyn Struct = &value;
        let fields: Vec<_> = dyn_struct
            .iter_fields()
            .map(|(name, v)| (name, *v.downcast_ref::<i64>().unwrap()))
            .collect();
        assert_eq!(fields, [("a", 3), ("b", 2)]);
    }

    #[test]
    fn absent_field_reads_as_null() {
        let value = DynamicStruct::new();
        assert!(matches!(field_or_null(&value, "x").reflect_ref(), ReflectRef::Null));
    }
}
