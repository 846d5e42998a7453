//! Containers for static storage of type information.
//!
//! This is usually used to implement [`Typed`](crate::info::Typed) and
//! [`TypePath`](crate::info::TypePath).
//!
//! ## NonGenericTypeInfoCell
//!
//! For non generic types, [`NonGenericTypeInfoCell`] stores the [`TypeInfo`]
//! in a [`OnceLock`].
//!
//! There is no `NonGenericTypePathCell` because it can be replaced by a static string literal.
//!
//! ## GenericTypeCell
//!
//! If the type is generic, the `static CELL` inside the function is shared by
//! every instantiation. Therefore [`GenericTypeInfoCell`] and
//! [`GenericTypePathCell`] hold a [`TypeIdMap`] wrapped in a [`RwLock`].

use core::any::{Any, TypeId};
use std::sync::{OnceLock, PoisonError, RwLock};

use crate::hash::TypeIdMap;
use crate::info::TypeInfo;

mod sealed {
    use super::TypeInfo;

    pub trait TypedProperty: 'static + Send + Sync {}

    impl TypedProperty for String {}
    impl TypedProperty for TypeInfo {}
}

use sealed::TypedProperty;

/// Container for static storage of non-generic type information.
///
/// ## Example
///
/// ```
/// use morphe_reflect::impls::NonGenericTypeInfoCell;
/// use morphe_reflect::info::{OpaqueInfo, TypeInfo, TypePath, Typed};
///
/// struct Handle;
///
/// impl TypePath for Handle {
///     fn type_path() -> &'static str { "app::Handle" }
///     fn type_name() -> &'static str { "Handle" }
/// }
///
/// impl Typed for Handle {
///     fn type_info() -> &'static TypeInfo {
///         static CELL: NonGenericTypeInfoCell = NonGenericTypeInfoCell::new();
///         CELL.get_or_init(|| TypeInfo::Opaque(OpaqueInfo::new::<Self>()))
///     }
/// }
///
/// assert!(core::ptr::eq(Handle::type_info(), Handle::type_info()));
/// ```
pub struct NonGenericTypeInfoCell(OnceLock<TypeInfo>);

impl NonGenericTypeInfoCell {
    /// Create a empty cell.
    #[inline]
    pub const fn new() -> Self {
        Self(OnceLock::new())
    }

    /// Returns the stored `TypeInfo`, initializing it with `f` on first use.
    #[inline]
    pub fn get_or_init<F>(&self, f: F) -> &TypeInfo
    where
        F: FnOnce() -> TypeInfo,
    {
        self.0.get_or_init(f)
    }
}

/// Container for static storage of type information with generics.
///
/// See [`GenericTypeInfoCell`] and [`GenericTypePathCell`].
pub struct GenericTypeCell<T: TypedProperty>(RwLock<TypeIdMap<&'static T>>);

/// Container for static storage of type information with generics.
///
/// ## Example
///
/// ```
/// use morphe_reflect::impls::GenericTypeInfoCell;
/// use morphe_reflect::info::{OpaqueInfo, TypeInfo, TypePath, Typed};
///
/// struct Slot<T>(T);
///
/// impl<T: TypePath> TypePath for Slot<T> {
///     fn type_path() -> &'static str { "app::Slot" }
///     fn type_name() -> &'static str { "Slot" }
/// }
///
/// impl<T: TypePath> Typed for Slot<T> {
///     fn type_info() -> &'static TypeInfo {
///         static CELL: GenericTypeInfoCell = GenericTypeInfoCell::new();
///         CELL.get_or_insert::<Self>(|| TypeInfo::Opaque(OpaqueInfo::new::<Self>()))
///     }
/// }
///
/// assert!(<Slot<u8>>::type_info().type_is::<Slot<u8>>());
/// assert!(<Slot<u16>>::type_info().type_is::<Slot<u16>>());
/// ```
pub type GenericTypeInfoCell = GenericTypeCell<TypeInfo>;

/// Container for static storage of type path with generics.
///
/// See [`concat`](crate::impls::concat) for building the strings.
pub type GenericTypePathCell = GenericTypeCell<String>;

impl<T: TypedProperty> GenericTypeCell<T> {
    /// Create a empty cell.
    #[inline]
    pub const fn new() -> Self {
        Self(RwLock::new(TypeIdMap::new()))
    }

    /// Returns the value stored for type `G`.
    ///
    /// If there is no entry found, a new one will be generated from the given function.
    #[inline(always)]
    pub fn get_or_insert<G: Any + ?Sized>(&self, f: impl FnOnce() -> T) -> &T {
        // Separate to reduce code compilation times
        self.get_or_insert_by_type_id(TypeId::of::<G>(), f)
    }

    #[inline(never)]
    fn get_or_insert_by_type_id(&self, type_id: TypeId, f: impl FnOnce() -> T) -> &T {
        match self.get_by_type_id(type_id) {
            Some(info) => info,
            None => self.insert_by_type_id(type_id, f()),
        }
    }

    #[inline(never)]
    fn get_by_type_id(&self, type_id: TypeId) -> Option<&'static T> {
        self.0
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&type_id)
            .copied()
    }

    #[inline(never)]
    fn insert_by_type_id(&self, type_id: TypeId, value: T) -> &'static T {
        *self
            .0
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .get_or_insert(type_id, || Box::leak(Box::new(value)))
    }
}
