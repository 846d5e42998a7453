use crate::Reflect;

/// Builds a concrete value from any reflected value of the same shape.
///
/// This is how the dynamic output of deserialization becomes a concrete type
/// again, see [`deserialize_as`](crate::convert::deserialize_as). Usually
/// implemented through `#[derive(Reflect)]`.
///
/// Conversion is structural: a [`DynamicStruct`](crate::ops::DynamicStruct)
/// with the right fields converts into the struct, extra fields are ignored,
/// and absent fields convert like null (so only `Option` fields may be absent).
///
/// # Examples
///
/// ```
/// use morphe_reflect::FromReflect;
/// use morphe_reflect::ops::{DynamicList, Null};
///
/// let mut list = DynamicList::new();
/// list.push(1_u8);
/// list.push(Null);
///
/// let value = <Vec<Option<u8>>>::from_reflect(&list).unwrap();
/// assert_eq!(value, [Some(1), None]);
/// ```
pub trait FromReflect: Reflect + Sized {
    fn from_reflect(reflect: &dyn Reflect) -> Option<Self>;
}
