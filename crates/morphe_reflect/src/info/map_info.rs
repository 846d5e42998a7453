use core::any::TypeId;

use crate::info::{Type, TypeInfo, TypePath, Typed, impl_type_fn};
use crate::ops::Map;

/// A container for map-like info.
///
/// # Examples
///
/// ```
/// use std::collections::BTreeMap;
/// use morphe_reflect::info::Typed;
///
/// let info = <BTreeMap<String, f64>>::type_info().as_map().unwrap();
///
/// assert_eq!(info.key_info().type_name(), "String");
/// assert_eq!(info.value_info().type_name(), "f64");
/// ```
#[derive(Clone, Debug)]
pub struct MapInfo {
    ty: Type,
    key_id: TypeId,
    key_info: fn() -> &'static TypeInfo,
    value_id: TypeId,
    value_info: fn() -> &'static TypeInfo,
}

impl MapInfo {
    impl_type_fn!(ty);

    /// Creates a new [`MapInfo`].
    #[inline]
    pub const fn new<TMap: Map + TypePath, TKey: Typed, TValue: Typed>() -> Self {
        Self {
            ty: Type::of::<TMap>(),
            key_id: TypeId::of::<TKey>(),
            key_info: TKey::type_info,
            value_id: TypeId::of::<TValue>(),
            value_info: TValue::type_info,
        }
    }

    #[inline]
    pub const fn key_id(&self) -> TypeId {
        self.key_id
    }

    #[inline]
    pub fn key_info(&self) -> &'static TypeInfo {
        (self.key_info)()
    }

    #[inline]
    pub const fn value_id(&self) -> TypeId {
        self.value_id
    }

    #[inline]
    pub fn value_info(&self) -> &'static TypeInfo {
        (self.value_info)()
    }
}
