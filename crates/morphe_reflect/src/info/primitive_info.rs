use core::fmt;

use crate::Reflect;
use crate::info::{Type, TypePath, impl_type_fn};
use crate::ops::{Coerce, Primitive};
use crate::value::Value;

/// The scalar families a primitive belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveKind {
    Bool,
    Int,
    Float,
    Str,
}

/// Descriptor of a primitive type.
///
/// Holds the coercion function that turns a generic [`Value`] into the
/// concrete type, so user-defined specializations of a primitive (such as an
/// id newtype) carry their own conversion.
///
/// # Examples
///
/// ```
/// use morphe_reflect::info::{PrimitiveKind, Typed};
/// use morphe_reflect::value::Value;
///
/// let info = u8::type_info().as_primitive().unwrap();
/// assert_eq!(info.kind(), PrimitiveKind::Int);
///
/// let byte = info.coerce(&Value::from("7")).unwrap();
/// assert_eq!(byte.downcast_ref::<u8>(), Some(&7));
/// assert!(info.coerce(&Value::from(300)).is_err());
/// ```
#[derive(Clone)]
pub struct PrimitiveInfo {
    ty: Type,
    kind: PrimitiveKind,
    coerce: fn(&Value) -> Result<Box<dyn Reflect>, String>,
}

fn coerce_boxed<T: Coerce + Reflect>(value: &Value) -> Result<Box<dyn Reflect>, String> {
    T::coerce(value).map(|v| Box::new(v) as Box<dyn Reflect>)
}

impl PrimitiveInfo {
    impl_type_fn!(ty);

    /// Creates a new [`PrimitiveInfo`].
    #[inline]
    pub const fn new<T: Primitive + Coerce + TypePath>(kind: PrimitiveKind) -> Self {
        Self {
            ty: Type::of::<T>(),
            kind,
            coerce: coerce_boxed::<T>,
        }
    }

    #[inline]
    pub const fn kind(&self) -> PrimitiveKind {
        self.kind
    }

    /// Converts `value` into the described type.
    ///
    /// The error is a message without path context.
    #[inline]
    pub fn coerce(&self, value: &Value) -> Result<Box<dyn Reflect>, String> {
        (self.coerce)(value)
    }
}

impl fmt::Debug for PrimitiveInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PrimitiveInfo")
            .field("ty", &self.ty)
            .field("kind", &self.kind)
            .finish_non_exhaustive()
    }
}
