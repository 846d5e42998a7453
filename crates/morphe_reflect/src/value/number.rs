use core::fmt;
use core::hash::{Hash, Hasher};

/// A numeric value node.
///
/// `UInt` is only produced for values above `i64::MAX`, every `From`
/// conversion normalizes smaller unsigned values into `Int`.
#[derive(Clone, Copy, Debug)]
pub enum Number {
    Int(i64),
    UInt(u64),
    Float(f64),
}

impl Number {
    /// Returns the value as `i64` if it is an integer that fits.
    pub fn as_i64(&self) -> Option<i64> {
        match *self {
            Self::Int(n) => Some(n),
            Self::UInt(n) => i64::try_from(n).ok(),
            Self::Float(_) => None,
        }
    }

    /// Returns the value as `u64` if it is a non-negative integer.
    pub fn as_u64(&self) -> Option<u64> {
        match *self {
            Self::Int(n) => u64::try_from(n).ok(),
            Self::UInt(n) => Some(n),
            Self::Float(_) => None,
        }
    }

    /// Returns the value as `f64`, possibly losing precision.
    pub fn as_f64(&self) -> f64 {
        match *self {
            Self::Int(n) => n as f64,
            Self::UInt(n) => n as f64,
            Self::Float(f) => f,
        }
    }

    #[inline]
    pub const fn is_float(&self) -> bool {
        matches!(self, Self::Float(_))
    }

    // Exact integral value, floats included when they have no fraction.
    fn integral(&self) -> Option<i128> {
        match *self {
            Self::Int(n) => Some(i128::from(n)),
            Self::UInt(n) => Some(i128::from(n)),
            Self::Float(f) if f.is_finite() && f.fract() == 0.0 && f.abs() < 1e38 => {
                Some(f as i128)
            }
            Self::Float(_) => None,
        }
    }
}

impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        match (self.integral(), other.integral()) {
            (Some(a), Some(b)) => a == b,
            _ => self.as_f64() == other.as_f64(),
        }
    }
}

// `NaN` is the only value breaking reflexivity, matching mapping semantics
// of the formats this tree is parsed from.
impl Eq for Number {}

impl Hash for Number {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self.integral() {
            Some(n) => n.hash(state),
            None => self.as_f64().to_bits().hash(state),
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(n) => write!(f, "{n}"),
            Self::UInt(n) => write!(f, "{n}"),
            Self::Float(v) => write!(f, "{v:?}"),
        }
    }
}

macro_rules! impl_from_signed {
    ($($ty:ty),*) => {$(
        impl From<$ty> for Number {
            #[inline]
            fn from(v: $ty) -> Self {
                Self::Int(v as i64)
            }
        }
    )*};
}

macro_rules! impl_from_unsigned {
    ($($ty:ty),*) => {$(
        impl From<$ty> for Number {
            #[inline]
            fn from(v: $ty) -> Self {
                let v = v as u64;
                match i64::try_from(v) {
                    Ok(n) => Self::Int(n),
                    Err(_) => Self::UInt(v),
                }
            }
        }
    )*};
}

impl_from_signed!(i8, i16, i32, i64, isize);
impl_from_unsigned!(u8, u16, u32, u64, usize);

impl From<f32> for Number {
    #[inline]
    fn from(v: f32) -> Self {
        Self::Float(f64::from(v))
    }
}

impl From<f64> for Number {
    #[inline]
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

#[cfg(test)]
mod tests {
    use super::Number;

    #[test]
    fn unsigned_normalizes() {
        assert!(matches!(Number::from(7_u64), Number::Int(7)));
        assert!(matches!(Number::from(u64::MAX), Number::UInt(u64::MAX)));
    }

    #[test]
    fn float_display_keeps_fraction() {
        assert_eq!(Number::from(4.0).to_string(), "4.0");
        assert_eq!(Number::from(0.25).to_string(), "0.25");
        assert_eq!(Number::from(-3).to_string(), "-3");
    }
}
