use core::fmt;

use crate::Reflect;
use crate::info::{Type, TypePath, impl_type_fn};
use crate::ops::Enum;
use crate::value::{Number, Value};

// -----------------------------------------------------------------------------
// Tag

/// The underlying value of an enum member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tag {
    Str(&'static str),
    Int(i64),
}

impl Tag {
    /// Returns the generic form of the tag.
    pub fn to_value(&self) -> Value {
        match *self {
            Self::Str(s) => Value::from(s),
            Self::Int(n) => Value::Number(Number::Int(n)),
        }
    }

    /// Returns `true` if `value` is exactly this tag.
    ///
    /// Integer tags also match integral floats, strings never match an
    /// integer tag.
    pub fn matches(&self, value: &Value) -> bool {
        match (*self, value) {
            (Self::Str(s), Value::String(v)) => s == v,
            (Self::Int(n), Value::Number(v)) => *v == Number::Int(n),
            _ => false,
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Str(s) => write!(f, "'{s}'"),
            Self::Int(n) => write!(f, "{n}"),
        }
    }
}

// -----------------------------------------------------------------------------
// EnumMember

/// A member of a unit-only enum: its name and its tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnumMember {
    name: &'static str,
    tag: Tag,
}

impl EnumMember {
    #[inline]
    pub const fn new(name: &'static str, tag: Tag) -> Self {
        Self { name, tag }
    }

    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    #[inline]
    pub const fn tag(&self) -> Tag {
        self.tag
    }
}

// -----------------------------------------------------------------------------
// EnumInfo

/// Descriptor of a unit-only enum.
///
/// Members are kept in declaration order. Deserialization selects the member
/// whose tag equals the input.
#[derive(Clone)]
pub struct EnumInfo {
    ty: Type,
    members: Box<[EnumMember]>,
    instantiate: fn(usize) -> Option<Box<dyn Reflect>>,
}

impl EnumInfo {
    impl_type_fn!(ty);

    /// Creates a new [`EnumInfo`].
    ///
    /// `instantiate` builds the member at the given declaration index.
    pub fn new<T: Enum + TypePath>(
        members: &[EnumMember],
        instantiate: fn(usize) -> Option<Box<dyn Reflect>>,
    ) -> Self {
        Self {
            ty: Type::of::<T>(),
            members: members.into(),
            instantiate,
        }
    }

    #[inline]
    pub fn members(&self) -> &[EnumMember] {
        &self.members
    }

    #[inline]
    pub fn member_at(&self, index: usize) -> Option<&EnumMember> {
        self.members.get(index)
    }

    pub fn member(&self, name: &str) -> Option<&EnumMember> {
        self.members.iter().find(|m| m.name == name)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Returns the index of the member tagged by `value`.
    pub fn index_of_tag(&self, value: &Value) -> Option<usize> {
        self.members.iter().position(|m| m.tag.matches(value))
    }

    /// Builds the member at `index`.
    #[inline]
    pub fn instantiate(&self, index: usize) -> Option<Box<dyn Reflect>> {
        (self.instantiate)(index)
    }
}

impl fmt::Debug for EnumInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EnumInfo")
            .field("ty", &self.ty)
            .field("members", &self.members)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::Tag;
    use crate::value::Value;

    #[test]
    fn tag_matching_is_exact() {
        assert!(Tag::Str("one").matches(&Value::from("one")));
        assert!(!Tag::Str("one").matches(&Value::from("One")));
        assert!(Tag::Int(5).matches(&Value::from(5)));
        assert!(Tag::Int(5).matches(&Value::from(5.0)));
        assert!(!Tag::Int(5).matches(&Value::from("5")));
        assert!(!Tag::Int(1).matches(&Value::from(true)));
    }
}
