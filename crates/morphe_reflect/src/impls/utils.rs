//! Structural debug output, equality and hashing shared by every implementation.

use core::fmt;
use core::hash::{BuildHasher, Hash, Hasher};

use crate::Reflect;
use crate::hash::FixedHashState;
use crate::ops::{List, Map, ReflectRef, Struct};
use crate::value::Value;

// -----------------------------------------------------------------------------
// Debug

pub fn list_debug(list: &dyn List, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_list().entries(list.iter()).finish()
}

pub fn map_debug(map: &dyn Map, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_map().entries(map.iter()).finish()
}

pub fn struct_debug(value: &dyn Struct, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let name = match value.represented_type_info() {
        Some(info) => info.type_name(),
        None => "_",
    };
    let mut debug = f.debug_struct(name);
    for (field, item) in value.iter_fields() {
        debug.field(field, &item);
    }
    debug.finish()
}

/// Debug output of a reflected value by its [`ReflectRef`].
pub fn reflect_debug(
    value: ReflectRef<'_>,
    type_path: &str,
    f: &mut fmt::Formatter<'_>,
) -> fmt::Result {
    match value {
        ReflectRef::Null => f.write_str("Null"),
        ReflectRef::Primitive(p) => write!(f, "{}", p.to_value()),
        ReflectRef::Enum(e) => write!(f, "{}::{}", e.reflect_type_name(), e.member_name()),
        ReflectRef::Optional(None) => f.write_str("None"),
        ReflectRef::Optional(Some(inner)) => f.debug_tuple("Some").field(&inner).finish(),
        ReflectRef::List(list) => list_debug(list, f),
        ReflectRef::Map(map) => map_debug(map, f),
        ReflectRef::Union(u) => u.active().reflect_debug(f),
        ReflectRef::Struct(s) => struct_debug(s, f),
        ReflectRef::Generic(v) => write!(f, "{v}"),
        ReflectRef::Opaque(_) => write!(f, "Opaque({type_path})"),
    }
}

// -----------------------------------------------------------------------------
// Equality

/// Structural equality of a [`ReflectRef`] and another value.
///
/// Primitives compare by their generic form, enums by type and member,
/// containers element-wise, structs field-wise by name. Opaque values are
/// incomparable.
pub fn reflect_partial_eq(value: ReflectRef<'_>, other: &dyn Reflect) -> Option<bool> {
    let other_ref = other.reflect_ref();
    let eq = match (value, other_ref) {
        (ReflectRef::Union(u), _) => return u.active().reflect_partial_eq(other),
        (_, ReflectRef::Union(u)) => return reflect_partial_eq(value, u.active()),
        (ReflectRef::Null, ReflectRef::Null) => true,
        (ReflectRef::Null, ReflectRef::Optional(None))
        | (ReflectRef::Optional(None), ReflectRef::Null)
        | (ReflectRef::Optional(None), ReflectRef::Optional(None)) => true,
        (ReflectRef::Optional(Some(a)), ReflectRef::Optional(Some(b))) => {
            return a.reflect_partial_eq(b);
        }
        (ReflectRef::Primitive(a), ReflectRef::Primitive(b)) => a.to_value() == b.to_value(),
        (ReflectRef::Enum(a), ReflectRef::Enum(b)) => {
            a.ty_id() == b.ty_id() && a.member_index() == b.member_index()
        }
        (ReflectRef::Generic(a), ReflectRef::Generic(b)) => a == b,
        (ReflectRef::List(a), ReflectRef::List(b)) => {
            if a.len() != b.len() {
                return Some(false);
            }
            for (x, y) in a.iter().zip(b.iter()) {
                if !x.reflect_partial_eq(y)? {
                    return Some(false);
                }
            }
            true
        }
        (ReflectRef::Map(a), ReflectRef::Map(b)) => {
            if a.len() != b.len() {
                return Some(false);
            }
            for (key, x) in a.iter() {
                let Some(y) = b.get(key) else {
                    return Some(false);
                };
                if !x.reflect_partial_eq(y)? {
                    return Some(false);
                }
            }
            true
        }
        (ReflectRef::Struct(a), ReflectRef::Struct(b)) => {
            if a.field_len() != b.field_len() {
                return Some(false);
            }
            for (name, x) in a.iter_fields() {
                let Some(y) = b.field(name) else {
                    return Some(false);
                };
                if !x.reflect_partial_eq(y)? {
                    return Some(false);
                }
            }
            true
        }
        (ReflectRef::Opaque(_), _) | (_, ReflectRef::Opaque(_)) => return None,
        _ => false,
    };
    Some(eq)
}

// -----------------------------------------------------------------------------
// Hashing

/// Hash of a [`ReflectRef`]; values that [`reflect_partial_eq`] finds equal
/// hash equal. Opaque values have no hash.
///
/// Maps and structs only hash their length, their equality ignores order.
pub fn reflect_hash(value: ReflectRef<'_>) -> Option<u64> {
    let mut hasher = FixedHashState.build_hasher();
    match value {
        ReflectRef::Null | ReflectRef::Optional(None) => Value::Null.hash(&mut hasher),
        ReflectRef::Optional(Some(inner)) => return inner.reflect_hash(),
        ReflectRef::Union(u) => return u.active().reflect_hash(),
        ReflectRef::Primitive(p) => p.to_value().hash(&mut hasher),
        ReflectRef::Generic(v) => v.hash(&mut hasher),
        ReflectRef::Enum(e) => {
            e.ty_id().hash(&mut hasher);
            e.member_index().hash(&mut hasher);
        }
        ReflectRef::List(list) => {
            list.len().hash(&mut hasher);
            for item in list.iter() {
                hasher.write_u64(item.reflect_hash()?);
            }
        }
        ReflectRef::Map(map) => map.len().hash(&mut hasher),
        ReflectRef::Struct(s) => s.field_len().hash(&mut hasher),
        ReflectRef::Opaque(_) => return None,
    }
    Some(hasher.finish())
}
