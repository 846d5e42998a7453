//! The generic value tree.
//!
//! [`Value`] is the untyped side of every conversion: the serializer produces
//! it and the deserializer consumes it. It mirrors what a JSON or YAML parser
//! yields, so it carries a [`serde_core`] adapter and plugs into any serde
//! data format.
//!
//! ```
//! use morphe_reflect::value::{Number, Value};
//!
//! let value = Value::from_iter([("name", Value::from("Hightop")), ("size", Value::from(42))]);
//!
//! assert_eq!(value.get("size"), Some(&Value::Number(Number::Int(42))));
//! assert_eq!(value.to_string(), "{'name': 'Hightop', 'size': 42}");
//! ```

// -----------------------------------------------------------------------------
// Modules

mod mapping;
mod number;
mod serde;

// -----------------------------------------------------------------------------
// Exports

pub use mapping::Mapping;
pub use number::Number;

// -----------------------------------------------------------------------------
// Value

use core::fmt::{self, Write};
use core::hash::{Hash, Hasher};
use core::mem;

/// A node of the generic value tree.
///
/// Mappings keep insertion order. Numeric equality is by value, so
/// `Number::Int(1)` equals `Number::Float(1.0)`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Number(Number),
    String(String),
    Sequence(Vec<Value>),
    Mapping(Mapping),
}

impl Value {
    #[inline]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    #[inline]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    #[inline]
    pub const fn as_number(&self) -> Option<&Number> {
        match self {
            Self::Number(n) => Some(n),
            _ => None,
        }
    }

    #[inline]
    pub fn as_i64(&self) -> Option<i64> {
        self.as_number().and_then(Number::as_i64)
    }

    #[inline]
    pub fn as_f64(&self) -> Option<f64> {
        self.as_number().map(Number::as_f64)
    }

    #[inline]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    #[inline]
    pub fn as_sequence(&self) -> Option<&[Value]> {
        match self {
            Self::Sequence(items) => Some(items),
            _ => None,
        }
    }

    #[inline]
    pub const fn as_mapping(&self) -> Option<&Mapping> {
        match self {
            Self::Mapping(m) => Some(m),
            _ => None,
        }
    }

    /// Looks up a string key when `self` is a mapping.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.as_mapping().and_then(|m| m.get_str(key))
    }

    /// A short name of the node kind, used in error messages.
    pub const fn kind_name(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool(_) => "bool",
            Self::Number(Number::Float(_)) => "float",
            Self::Number(_) => "int",
            Self::String(_) => "string",
            Self::Sequence(_) => "sequence",
            Self::Mapping(_) => "mapping",
        }
    }
}

impl Hash for Value {
    fn hash<H: Hasher>(&self, state: &mut H) {
        mem::discriminant(self).hash(state);
        match self {
            Self::Null => {}
            Self::Bool(b) => b.hash(state),
            Self::Number(n) => n.hash(state),
            Self::String(s) => s.hash(state),
            Self::Sequence(items) => items.hash(state),
            // Mapping equality ignores order.
            Self::Mapping(m) => m.len().hash(state),
        }
    }
}

/// Renders the value the way conversion errors quote raw input:
/// strings in single quotes, containers inline.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("null"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Number(n) => write!(f, "{n}"),
            Self::String(s) => {
                f.write_char('\'')?;
                for c in s.chars() {
                    match c {
                        '\'' => f.write_str("\\'")?,
                        '\\' => f.write_str("\\\\")?,
                        '\n' => f.write_str("\\n")?,
                        c => f.write_char(c)?,
                    }
                }
                f.write_char('\'')
            }
            Self::Sequence(items) => {
                f.write_char('[')?;
                for (index, item) in items.iter().enumerate() {
                    if index > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_char(']')
            }
            Self::Mapping(m) => {
                f.write_char('{')?;
                for (index, (key, value)) in m.iter().enumerate() {
                    if index > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{key}: {value}")?;
                }
                f.write_char('}')
            }
        }
    }
}

// -----------------------------------------------------------------------------
// Conversions

macro_rules! impl_from_number {
    ($($ty:ty),*) => {$(
        impl From<$ty> for Value {
            #[inline]
            fn from(v: $ty) -> Self {
                Self::Number(Number::from(v))
            }
        }
    )*};
}

impl_from_number!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);

impl From<bool> for Value {
    #[inline]
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<Number> for Value {
    #[inline]
    fn from(v: Number) -> Self {
        Self::Number(v)
    }
}

impl From<&str> for Value {
    #[inline]
    fn from(v: &str) -> Self {
        Self::String(v.to_owned())
    }
}

impl From<String> for Value {
    #[inline]
    fn from(v: String) -> Self {
        Self::String(v)
    }
}

impl From<Mapping> for Value {
    #[inline]
    fn from(v: Mapping) -> Self {
        Self::Mapping(v)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(v: Vec<T>) -> Self {
        Self::Sequence(v.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        match v {
            Some(v) => v.into(),
            None => Self::Null,
        }
    }
}

impl<K: Into<Value>, V: Into<Value>> FromIterator<(K, V)> for Value {
    #[inline]
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self::Mapping(Mapping::from_iter(iter))
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use super::{Mapping, Number, Value};

    #[test]
    fn display_quotes_strings() {
        assert_eq!(Value::from("it's").to_string(), r"'it\'s'");
        assert_eq!(Value::from(vec![1, 2]).to_string(), "[1, 2]");
        assert_eq!(Value::from(2.0).to_string(), "2.0");
        assert_eq!(Value::Null.to_string(), "null");
    }

    #[test]
    fn numeric_equality_crosses_representations() {
        assert_eq!(Value::from(1), Value::from(1.0));
        assert_ne!(Value::from(1), Value::from(1.5));
        assert_ne!(Value::from(1), Value::from("1"));
        assert_eq!(Value::from(u64::MAX), Value::Number(Number::UInt(u64::MAX)));
    }

    #[test]
    fn mapping_lookup() {
        let value = Value::from_iter([("a", 1), ("b", 2)]);
        assert_eq!(value.get("b"), Some(&Value::from(2)));
        assert_eq!(value.get("c"), None);
        assert_eq!(Value::from(3).get("a"), None);

        let mut keyed = Mapping::new();
        keyed.insert(Value::from(1), Value::from("one"));
        assert_eq!(keyed.get(&Value::from(1.0)), Some(&Value::from("one")));
    }

    #[test]
    fn kind_names() {
        assert_eq!(Value::from(1).kind_name(), "int");
        assert_eq!(Value::from(1.5).kind_name(), "float");
        assert_eq!(Value::Sequence(vec![]).kind_name(), "sequence");
    }
}
