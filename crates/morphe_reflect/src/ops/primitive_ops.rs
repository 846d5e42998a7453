use crate::Reflect;
use crate::value::Value;

/// A scalar value: bool, integer, float or string.
pub trait Primitive: Reflect {
    /// Returns the generic form of the value.
    fn to_value(&self) -> Value;
}

/// Conversion of a generic [`Value`] into a primitive.
///
/// This is where the permissive scalar rules live: integers accept numeric
/// strings and truncate floats, strings accept any scalar, booleans follow
/// truthiness. The error is a message without path context.
///
/// # Examples
///
/// ```
/// use morphe_reflect::ops::Coerce;
/// use morphe_reflect::value::Value;
///
/// assert_eq!(i64::coerce(&Value::from(" 42 ")), Ok(42));
/// assert_eq!(i64::coerce(&Value::from(3.9)), Ok(3));
/// assert_eq!(f64::coerce(&Value::from("4")), Ok(4.0));
/// assert_eq!(String::coerce(&Value::from(7)), Ok("7".to_owned()));
/// assert_eq!(bool::coerce(&Value::from("")), Ok(false));
/// assert!(i64::coerce(&Value::from("Not a number")).is_err());
/// ```
pub trait Coerce: Sized {
    fn coerce(value: &Value) -> Result<Self, String>;
}
