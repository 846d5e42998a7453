use std::borrow::Cow;
use core::{error, fmt};

use thiserror::Error;

use crate::convert::ResolutionError;
use crate::info::TypePath;
use crate::value::Value;

// -----------------------------------------------------------------------------
// DeserializeError

/// A failed deserialization, as a chain from the outermost frame to the root
/// cause.
///
/// Frame variants (`Field`, `ListElement`, `MapKey`, `MapValue`) wrap the
/// error of a nested conversion; every other variant is a root cause.
/// `Display` renders the whole chain as a path:
///
/// ```text
/// Klass1 -> c:Klass2 -> d:Vec<Klass3>[1] -> e:Number -> '1' |'1' is not a valid Number|
/// ```
///
/// Each `type_name` is the [`TypePath::type_name`] of the type converted by
/// that frame.
#[derive(Debug)]
#[non_exhaustive]
pub enum DeserializeError {
    /// A scalar could not be converted into a primitive or enum.
    Coercion {
        type_name: &'static str,
        value: Value,
        message: Cow<'static, str>,
    },
    /// No alternative of a union accepted the value.
    UnionExhausted { type_name: &'static str, value: Value },
    /// The fields of the target could not be resolved.
    Resolution { value: Value, source: ResolutionError },
    /// A middleware converter rejected the value.
    Custom {
        type_name: &'static str,
        value: Value,
        message: String,
    },
    /// The input nests deeper than the driver allows.
    DepthExceeded { type_name: &'static str, limit: usize },
    /// The deserialized value did not convert into the requested type.
    Conversion { type_name: &'static str },
    /// A field of a struct failed.
    Field {
        type_name: &'static str,
        field: Cow<'static, str>,
        field_type: &'static str,
        source: Box<DeserializeError>,
    },
    /// An element of a list failed.
    ListElement {
        type_name: &'static str,
        index: usize,
        source: Box<DeserializeError>,
    },
    /// A key of a map failed.
    MapKey {
        type_name: &'static str,
        key: Value,
        source: Box<DeserializeError>,
    },
    /// A value of a map failed.
    ///
    /// `key` is the entry's key as it appeared in the input, before
    /// conversion to the map's key type. It renders in the path as
    /// `.value[key]`.
    MapValue {
        type_name: &'static str,
        key: Value,
        source: Box<DeserializeError>,
    },
}

/// One step of the path leading to the root cause.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathSegment<'a> {
    Field {
        name: &'a str,
        field_type: &'static str,
    },
    Index(usize),
    Key,
    Value(&'a Value),
}

impl DeserializeError {
    /// Creates the error a middleware converter returns for type `T`.
    pub fn custom<T: TypePath + ?Sized>(value: &Value, message: impl fmt::Display) -> Self {
        Self::Custom {
            type_name: T::type_name(),
            value: value.clone(),
            message: message.to_string(),
        }
    }

    pub(crate) fn coercion(
        type_name: &'static str,
        value: &Value,
        message: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self::Coercion {
            type_name,
            value: value.clone(),
            message: message.into(),
        }
    }

    /// The name of the type converted by this frame.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Coercion { type_name, .. }
            | Self::UnionExhausted { type_name, .. }
            | Self::Custom { type_name, .. }
            | Self::DepthExceeded { type_name, .. }
            | Self::Conversion { type_name }
            | Self::Field { type_name, .. }
            | Self::ListElement { type_name, .. }
            | Self::MapKey { type_name, .. }
            | Self::MapValue { type_name, .. } => type_name,
            Self::Resolution { source, .. } => source.type_name(),
        }
    }

    /// The wrapped error of a frame, `None` for a root cause.
    pub fn child(&self) -> Option<&DeserializeError> {
        match self {
            Self::Field { source, .. }
            | Self::ListElement { source, .. }
            | Self::MapKey { source, .. }
            | Self::MapValue { source, .. } => Some(source),
            _ => None,
        }
    }

    /// Follows the chain down to the root cause.
    pub fn root(&self) -> &DeserializeError {
        let mut current = self;
        while let Some(child) = current.child() {
            current = child;
        }
        current
    }

    /// The raw value the root cause failed on, if it carries one.
    pub fn raw_value(&self) -> Option<&Value> {
        match self.root() {
            Self::Coercion { value, .. }
            | Self::UnionExhausted { value, .. }
            | Self::Resolution { value, .. }
            | Self::Custom { value, .. } => Some(value),
            _ => None,
        }
    }

    /// The path from the outermost frame to the root cause.
    ///
    /// # Examples
    ///
    /// ```
    /// use morphe_reflect::convert::{Middleware, PathSegment, deserialize_as};
    /// use morphe_reflect::value::Value;
    ///
    /// let input = Value::from(vec![Value::from(1), Value::from("x")]);
    /// let err = deserialize_as::<Vec<i32>>(&input, &Middleware::new(), false).unwrap_err();
    ///
    /// assert_eq!(err.path(), [PathSegment::Index(1)]);
    /// assert_eq!(err.raw_value(), Some(&Value::from("x")));
    /// ```
    pub fn path(&self) -> Vec<PathSegment<'_>> {
        let mut path = Vec::new();
        let mut current = self;
        loop {
            match current {
                Self::Field {
                    field,
                    field_type,
                    source,
                    ..
                } => {
                    path.push(PathSegment::Field {
                        name: field,
                        field_type,
                    });
                    current = source;
                }
                Self::ListElement { index, source, .. } => {
                    path.push(PathSegment::Index(*index));
                    current = source;
                }
                Self::MapKey { source, .. } => {
                    path.push(PathSegment::Key);
                    current = source;
                }
                Self::MapValue { key, source, .. } => {
                    path.push(PathSegment::Value(key));
                    current = source;
                }
                _ => return path,
            }
        }
    }

    fn fmt_cause(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Coercion { value, message, .. } => write!(f, " -> {value} |{message}|"),
            Self::Custom { value, message, .. } => write!(f, " -> {value} |{message}|"),
            Self::UnionExhausted { type_name, value } => {
                write!(f, " -> {value} |no alternative of {type_name} accepted the value|")
            }
            Self::Resolution { value, source } => write!(f, " -> {value} |{source}|"),
            Self::DepthExceeded { limit, .. } => {
                write!(f, " |recursion limit of {limit} exceeded|")
            }
            Self::Conversion { type_name } => {
                write!(f, " |the deserialized value does not fit {type_name}|")
            }
            Self::Field { .. } | Self::ListElement { .. } | Self::MapKey { .. } | Self::MapValue { .. } => {
                Ok(())
            }
        }
    }
}

impl fmt::Display for DeserializeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.type_name())?;
        let mut current = self;
        loop {
            match current {
                Self::Field {
                    field,
                    field_type,
                    source,
                    ..
                } => {
                    write!(f, " -> {field}:{field_type}")?;
                    current = source;
                }
                Self::ListElement { index, source, .. } => {
                    write!(f, "[{index}]")?;
                    current = source;
                }
                Self::MapKey { source, .. } => {
                    f.write_str(".key")?;
                    current = source;
                }
                Self::MapValue { key, source, .. } => {
                    write!(f, ".value[{key}]")?;
                    current = source;
                }
                root => return root.fmt_cause(f),
            }
        }
    }
}

impl error::Error for DeserializeError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Self::Resolution { source, .. } => Some(source),
            _ => self.child().map(|child| child as &(dyn error::Error + 'static)),
        }
    }
}

// -----------------------------------------------------------------------------
// SerializeError

/// A failed serialization.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SerializeError {
    #[error("`{type_path}` is opaque and has no serialize middleware")]
    Opaque { type_path: &'static str },
    #[error("recursion limit of {limit} exceeded while serializing `{type_path}`")]
    DepthExceeded { type_path: &'static str, limit: usize },
    #[error("middleware for `{type_path}` failed: {message}")]
    Custom {
        type_path: &'static str,
        message: String,
    },
}

impl SerializeError {
    /// Creates the error a middleware converter returns for type `T`.
    pub fn custom<T: TypePath + ?Sized>(message: impl fmt::Display) -> Self {
        Self::Custom {
            type_path: T::type_path(),
            message: message.to_string(),
        }
    }
}

// -----------------------------------------------------------------------------
// ProjectError

/// A failed projection, from either pass.
#[derive(Debug, Error)]
pub enum ProjectError {
    #[error(transparent)]
    Serialize(#[from] SerializeError),
    #[error(transparent)]
    Deserialize(#[from] DeserializeError),
}

#[cfg(test)]
mod tests {
    use super::{DeserializeError, PathSegment};
    use crate::value::Value;

    fn chain() -> DeserializeError {
        DeserializeError::Field {
            type_name: "Shelf",
            field: "rows".into(),
            field_type: "Vec<Vec<ShoeBox>>",
            source: Box::new(DeserializeError::ListElement {
                type_name: "Vec<Vec<ShoeBox>>",
                index: 0,
                source: Box::new(DeserializeError::ListElement {
                    type_name: "Vec<ShoeBox>",
                    index: 2,
                    source: Box::new(DeserializeError::coercion(
                        "u32",
                        &Value::from("big"),
                        "invalid literal for u32: 'big'",
                    )),
                }),
            }),
        }
    }

    #[test]
    fn renders_path() {
        assert_eq!(
            chain().to_string(),
            "Shelf -> rows:Vec<Vec<ShoeBox>>[0][2] -> 'big' |invalid literal for u32: 'big'|"
        );
    }

    #[test]
    fn exposes_path_and_root() {
        let err = chain();
        assert_eq!(
            err.path(),
            [
                PathSegment::Field {
                    name: "rows",
                    field_type: "Vec<Vec<ShoeBox>>"
                },
                PathSegment::Index(0),
                PathSegment::Index(2),
            ]
        );
        assert_eq!(err.root().type_name(), "u32");
        assert_eq!(err.raw_value(), Some(&Value::from("big")));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn map_frames() {
        let err = DeserializeError::MapValue {
            type_name: "HashMap<String, i64>",
            key: Value::from("Key3"),
            source: Box::new(DeserializeError::coercion("i64", &Value::from("x"), "bad")),
        };
        assert_eq!(err.to_string(), "HashMap<String, i64>.value['Key3'] -> 'x' |bad|");
    }
}
