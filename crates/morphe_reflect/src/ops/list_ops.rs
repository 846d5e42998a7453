use core::fmt;

use crate::Reflect;
use crate::impls::NonGenericTypeInfoCell;
use crate::info::{OpaqueInfo, TypeInfo, TypePath, Typed};
use crate::ops::ReflectRef;

// -----------------------------------------------------------------------------
// List trait

/// An ordered, indexable sequence.
pub trait List: Reflect {
    fn get(&self, index: usize) -> Option<&dyn Reflect>;

    fn len(&self) -> usize;

    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl dyn List {
    #[inline]
    pub fn iter(&self) -> ListItemIter<'_> {
        ListItemIter::new(self)
    }
}

// -----------------------------------------------------------------------------
// List Item Iterator

/// Iterator over the items of a [`List`].
pub struct ListItemIter<'a> {
    list: &'a dyn List,
    index: usize,
}

impl<'a> ListItemIter<'a> {
    #[inline(always)]
    pub const fn new(list: &'a dyn List) -> Self {
        Self { list, index: 0 }
    }
}

impl<'a> Iterator for ListItemIter<'a> {
    type Item = &'a dyn Reflect;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let value = self.list.get(self.index);
        self.index += value.is_some() as usize;
        value
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let size = self.list.len() - self.index;
        (size, Some(size))
    }
}

impl ExactSizeIterator for ListItemIter<'_> {}

// -----------------------------------------------------------------------------
// Dynamic List

/// A list built at runtime, optionally representing a concrete list type.
#[derive(Default)]
pub struct DynamicList {
    info: Option<&'static TypeInfo>,
    items: Vec<Box<dyn Reflect>>,
}

impl TypePath for DynamicList {
    #[inline]
    fn type_path() -> &'static str {
        "morphe_reflect::ops::DynamicList"
    }

    #[inline]
    fn type_name() -> &'static str {
        "DynamicList"
    }

    #[inline]
    fn module_path() -> Option<&'static str> {
        Some("morphe_reflect::ops")
    }
}

impl Typed for DynamicList {
    fn type_info() -> &'static TypeInfo {
        static CELL: NonGenericTypeInfoCell = NonGenericTypeInfoCell::new();
        CELL.get_or_init(|| TypeInfo::Opaque(OpaqueInfo::new::<Self>()))
    }
}

impl DynamicList {
    #[inline]
    pub const fn new() -> Self {
        Self {
            info: None,
            items: Vec::new(),
        }
    }

    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            info: None,
            items: Vec::with_capacity(capacity),
        }
    }

    /// Sets the list type this value represents.
    ///
    /// # Panics
    ///
    /// Panics if `info` is not a list descriptor.
    #[inline]
    pub fn set_represented_type(&mut self, info: Option<&'static TypeInfo>) {
        if let Some(info) = info {
            assert!(info.as_list().is_ok(), "`TypeInfo` mismatched.");
        }
        self.info = info;
    }

    #[inline]
    pub fn push_boxed(&mut self, value: Box<dyn Reflect>) {
        self.items.push(value);
    }

    #[inline]
    pub fn push<T: Reflect>(&mut self, value: T) {
        self.items.push(Box::new(value));
    }
}

impl List for DynamicList {
    #[inline]
    fn get(&self, index: usize) -> Option<&dyn Reflect> {
        self.items.get(index).map(|item| &**item)
    }

    #[inline]
    fn len(&self) -> usize {
        self.items.len()
    }
}

impl Reflect for DynamicList {
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
        ReflectRef::List(self)
    }

    fn reflect_debug(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DynamicList(")?;
        crate::impls::list_debug(self, f)?;
        write!(f, ")")
    }
}

impl fmt::Debug for DynamicList {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.reflect_debug(f)
    }
}

impl FromIterator<Box<dyn Reflect>> for DynamicList {
    fn from_iter<I: IntoIterator<Item = Box<dyn Reflect>>>(items: I) -> Self {
        Self {
            info: None,
            items: items.into_iter().collect(),
        }
    }
}
