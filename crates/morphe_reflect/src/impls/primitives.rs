use core::fmt;
use core::str::FromStr;

use crate::impls::NonGenericTypeInfoCell;
use crate::info::{PrimitiveInfo, PrimitiveKind, TypeInfo, TypePath, Typed};
use crate::ops::{Coerce, Primitive, ReflectRef};
use crate::value::{Number, Value};
use crate::{FromReflect, Reflect};

// -----------------------------------------------------------------------------
// Coercion rules

fn integer<T>(value: &Value) -> Result<T, String>
where
    T: TryFrom<i64> + TryFrom<u64> + FromStr,
{
    let name = core::any::type_name::<T>();
    let out_of_range = || format!("{value} is out of range for {name}");
    match value {
        Value::Number(Number::Int(n)) => {
            <T as TryFrom<i64>>::try_from(*n).map_err(|_| out_of_range())
        }
        Value::Number(Number::UInt(n)) => {
            <T as TryFrom<u64>>::try_from(*n).map_err(|_| out_of_range())
        }
        Value::Number(Number::Float(f)) => {
            if !f.is_finite() {
                return Err(format!("cannot convert float {value} to {name}"));
            }
            let truncated = f.trunc();
            if truncated >= i64::MIN as f64 && truncated < i64::MAX as f64 {
                <T as TryFrom<i64>>::try_from(truncated as i64).map_err(|_| out_of_range())
            } else if truncated >= 0.0 && truncated < u64::MAX as f64 {
                <T as TryFrom<u64>>::try_from(truncated as u64).map_err(|_| out_of_range())
            } else {
                Err(out_of_range())
            }
        }
        Value::Bool(b) => {
            <T as TryFrom<i64>>::try_from(i64::from(*b)).map_err(|_| out_of_range())
        }
        Value::String(s) => s
            .trim()
            .parse::<T>()
            .map_err(|_| format!("invalid literal for {name}: {value}")),
        other => Err(format!("expected {name}, found {}", other.kind_name())),
    }
}

fn float(value: &Value) -> Result<f64, String> {
    match value {
        Value::Number(n) => Ok(n.as_f64()),
        Value::Bool(b) => Ok(if *b { 1.0 } else { 0.0 }),
        Value::String(s) => s
            .trim()
            .parse::<f64>()
            .map_err(|_| format!("could not convert string to float: {value}")),
        other => Err(format!("expected a float, found {}", other.kind_name())),
    }
}

fn truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64() != 0.0,
        Value::String(s) => !s.is_empty(),
        Value::Sequence(items) => !items.is_empty(),
        Value::Mapping(m) => !m.is_empty(),
    }
}

fn string(value: &Value) -> Result<String, String> {
    match value {
        Value::String(s) => Ok(s.clone()),
        Value::Bool(b) => Ok(b.to_string()),
        Value::Number(n) => Ok(n.to_string()),
        other => Err(format!("expected a string, found {}", other.kind_name())),
    }
}

// -----------------------------------------------------------------------------
// Macro

macro_rules! impl_reflect_primitive {
    ($ty:ty, $path:expr, $name:expr, $kind:ident) => {
        impl TypePath for $ty {
            #[inline]
            fn type_path() -> &'static str {
                $path
            }

            #[inline]
            fn type_name() -> &'static str {
                $name
            }
        }

        impl Typed for $ty {
            fn type_info() -> &'static TypeInfo {
                static CELL: NonGenericTypeInfoCell = NonGenericTypeInfoCell::new();
                CELL.get_or_init(|| {
                    TypeInfo::Primitive(PrimitiveInfo::new::<Self>(PrimitiveKind::$kind))
                })
            }
        }

        impl Reflect for $ty {
            #[inline]
            fn reflect_ref(&self) -> ReflectRef<'_> {
                ReflectRef::Primitive(self)
            }

            #[inline]
            fn reflect_debug(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                fmt::Debug::fmt(self, f)
            }
        }

        impl FromReflect for $ty {
            #[inline]
            fn from_reflect(reflect: &dyn Reflect) -> Option<Self> {
                reflect.downcast_ref::<Self>().cloned()
            }
        }
    };
}

macro_rules! impl_integer {
    ($($ty:ident),*) => {$(
        impl_reflect_primitive!($ty, stringify!($ty), stringify!($ty), Int);

        impl Primitive for $ty {
            #[inline]
            fn to_value(&self) -> Value {
                Value::Number(Number::from(*self))
            }
        }

        impl Coerce for $ty {
            #[inline]
            fn coerce(value: &Value) -> Result<Self, String> {
                integer::<$ty>(value)
            }
        }
    )*};
}

impl_integer!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

// -----------------------------------------------------------------------------
// Floats

impl_reflect_primitive!(f32, "f32", "f32", Float);
impl_reflect_primitive!(f64, "f64", "f64", Float);

impl Primitive for f32 {
    #[inline]
    fn to_value(&self) -> Value {
        Value::Number(Number::from(*self))
    }
}

impl Coerce for f32 {
    #[inline]
    fn coerce(value: &Value) -> Result<Self, String> {
        float(value).map(|f| f as f32)
    }
}

impl Primitive for f64 {
    #[inline]
    fn to_value(&self) -> Value {
        Value::Number(Number::Float(*self))
    }
}

impl Coerce for f64 {
    #[inline]
    fn coerce(value: &Value) -> Result<Self, String> {
        float(value)
    }
}

// -----------------------------------------------------------------------------
// bool

impl_reflect_primitive!(bool, "bool", "bool", Bool);

impl Primitive for bool {
    #[inline]
    fn to_value(&self) -> Value {
        Value::Bool(*self)
    }
}

impl Coerce for bool {
    #[inline]
    fn coerce(value: &Value) -> Result<Self, String> {
        Ok(truthy(value))
    }
}

// -----------------------------------------------------------------------------
// Strings

impl_reflect_primitive!(String, "alloc::string::String", "String", Str);
impl_reflect_primitive!(char, "char", "char", Str);

impl Primitive for String {
    #[inline]
    fn to_value(&self) -> Value {
        Value::String(self.clone())
    }
}

impl Coerce for String {
    #[inline]
    fn coerce(value: &Value) -> Result<Self, String> {
        string(value)
    }
}

impl Primitive for char {
    #[inline]
    fn to_value(&self) -> Value {
        Value::String(self.to_string())
    }
}

impl Coerce for char {
    fn coerce(value: &Value) -> Result<Self, String> {
        let s = string(value)?;
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Ok(c),
            _ => Err(format!("expected a single character, found {value}")),
        }
    }
}

// -----------------------------------------------------------------------------
// Tests
