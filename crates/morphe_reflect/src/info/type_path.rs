use core::any::{Any, TypeId};
use core::fmt;

// -----------------------------------------------------------------------------
// TypePath

/// Stable names of a type.
///
/// Unlike [`core::any::type_name`], the values are part of the API:
/// error messages render [`type_name`](TypePath::type_name) of every type on
/// the failing path.
///
/// # Examples
///
/// ```
/// use morphe_reflect::info::TypePath;
///
/// assert_eq!(<Vec<Option<u8>>>::type_path(), "alloc::vec::Vec<core::option::Option<u8>>");
/// assert_eq!(<Vec<Option<u8>>>::type_name(), "Vec<Option<u8>>");
/// ```
pub trait TypePath: 'static {
    /// Full name, a fixed and unique identifier for the type.
    fn type_path() -> &'static str;

    /// The name without module path.
    fn type_name() -> &'static str;

    /// Module path of the type, `None` for primitives.
    fn module_path() -> Option<&'static str> {
        None
    }
}

// -----------------------------------------------------------------------------
// DynamicTypePath

/// Dynamic dispatch for [`TypePath`].
pub trait DynamicTypePath {
    fn reflect_type_path(&self) -> &'static str;

    fn reflect_type_name(&self) -> &'static str;
}

impl<T: TypePath> DynamicTypePath for T {
    #[inline]
    fn reflect_type_path(&self) -> &'static str {
        Self::type_path()
    }

    #[inline]
    fn reflect_type_name(&self) -> &'static str {
        Self::type_name()
    }
}

// -----------------------------------------------------------------------------
// Type

/// The [`TypeId`] and [`TypePath`] functions of a single type.
#[derive(Copy, Clone)]
pub struct Type {
    type_id: TypeId,
    type_path: fn() -> &'static str,
    type_name: fn() -> &'static str,
}

impl Type {
    #[inline]
    pub const fn of<T: TypePath + ?Sized>() -> Self {
        Self {
            type_id: TypeId::of::<T>(),
            type_path: T::type_path,
            type_name: T::type_name,
        }
    }

    #[inline(always)]
    pub const fn id(&self) -> TypeId {
        self.type_id
    }

    #[inline(always)]
    pub fn path(&self) -> &'static str {
        (self.type_path)()
    }

    #[inline(always)]
    pub fn name(&self) -> &'static str {
        (self.type_name)()
    }

    #[inline]
    pub fn is<T: Any>(&self) -> bool {
        self.type_id == TypeId::of::<T>()
    }
}

impl PartialEq for Type {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.type_id == other.type_id
    }
}

impl Eq for Type {}

impl fmt::Debug for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

// -----------------------------------------------------------------------------
// Auxiliary macro

/// Implements the `Type` accessors for a descriptor.
///
/// - `impl_type_fn!(field)` for structs holding a `Type` in `field`.
/// - `impl_type_fn!()` for types providing `const fn ty(&self) -> &Type`.
macro_rules! impl_type_fn {
    ($field:ident) => {
        #[inline]
        pub const fn ty(&self) -> &$crate::info::Type {
            &self.$field
        }

        $crate::info::impl_type_fn!();
    };
    () => {
        #[inline]
        pub const fn type_id(&self) -> ::core::any::TypeId {
            self.ty().id()
        }

        #[inline]
        pub fn type_path(&self) -> &'static str {
            self.ty().path()
        }

        #[inline]
        pub fn type_name(&self) -> &'static str {
            self.ty().name()
        }

        #[inline]
        pub fn type_is<T: ::core::any::Any>(&self) -> bool {
            self.ty().is::<T>()
        }
    };
}

pub(crate) use impl_type_fn;
