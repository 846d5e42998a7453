use core::any::TypeId;

use thiserror::Error;

use crate::hash::{HashMap, HashSet};
use crate::info::{NamedField, ReflectKind, StructInfo, TypeInfo};

// -----------------------------------------------------------------------------
// ResolutionError

/// The fields of a composite target could not be resolved.
#[derive(Debug, Clone, Error)]
#[non_exhaustive]
pub enum ResolutionError {
    #[error("`{type_path}` is {kind}, not a struct")]
    NotComposite {
        type_path: &'static str,
        type_name: &'static str,
        kind: ReflectKind,
    },
    #[error("base `{base}` of `{owner}` is {kind}, not a struct")]
    InvalidBase {
        owner: &'static str,
        owner_name: &'static str,
        base: &'static str,
        kind: ReflectKind,
    },
}

impl ResolutionError {
    /// The name of the type whose resolution failed.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::NotComposite { type_name, .. } => type_name,
            Self::InvalidBase { owner_name, .. } => owner_name,
        }
    }
}

// -----------------------------------------------------------------------------
// ResolvedFields

/// The merged, ordered field table of a struct: own fields, inherited fields
/// and constructor fields.
#[derive(Debug, Clone, Default)]
pub struct ResolvedFields {
    fields: Vec<NamedField>,
    indices: HashMap<&'static str, usize>,
}

impl ResolvedFields {
    pub fn get(&self, name: &str) -> Option<&NamedField> {
        self.indices.get(name).map(|index| &self.fields[*index])
    }

    #[inline]
    pub fn contains(&self, name: &str) -> bool {
        self.indices.contains_key(name)
    }

    #[inline]
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &NamedField> {
        self.fields.iter()
    }

    #[inline]
    pub fn names(&self) -> impl ExactSizeIterator<Item = &'static str> + '_ {
        self.fields.iter().map(NamedField::name)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Adds a field unless the name is already taken.
    fn add(&mut self, field: &NamedField) {
        if !self.indices.contains_key(field.name()) {
            self.indices.insert(field.name(), self.fields.len());
            self.fields.push(field.clone());
        }
    }

    /// Adds a field, replacing the type of a same-named one in place.
    fn replace(&mut self, field: &NamedField) {
        match self.indices.get(field.name()) {
            Some(&index) => self.fields[index] = field.clone(),
            None => {
                self.indices.insert(field.name(), self.fields.len());
                self.fields.push(field.clone());
            }
        }
    }
}

// -----------------------------------------------------------------------------
// Resolution

/// Resolves the field table of a composite target.
///
/// Fails for anything that is not a struct descriptor, opaque types included.
pub fn resolve_fields(info: &'static TypeInfo) -> Result<&'static ResolvedFields, ResolutionError> {
    match info {
        TypeInfo::Struct(struct_info) => resolve(struct_info),
        _ => Err(ResolutionError::NotComposite {
            type_path: info.type_path(),
            type_name: info.type_name(),
            kind: info.kind(),
        }),
    }
}

/// Resolves the field table of a struct, memoized inside the descriptor.
///
/// Ancestors are walked depth-first, left to right, each one once. The
/// most specific declaration of a name wins, then constructor fields
/// override or extend the table.
///
/// # Examples
///
/// ```
/// use morphe_reflect::convert::resolve_fields;
/// use morphe_reflect::derive::Reflect;
/// use morphe_reflect::info::Typed;
///
/// #[derive(Reflect)]
/// struct Named {
///     name: String,
///     id: u32,
/// }
///
/// #[derive(Reflect)]
/// struct User {
///     #[reflect(base)]
///     named: Named,
///     id: String,
/// }
///
/// let fields = resolve_fields(User::type_info()).unwrap();
/// assert_eq!(fields.names().collect::<Vec<_>>(), ["id", "name"]);
/// assert_eq!(fields.get("id").unwrap().type_name(), "String");
/// ```
pub fn resolve(info: &'static StructInfo) -> Result<&'static ResolvedFields, ResolutionError> {
    info.resolved_cell()
        .get_or_init(|| compute(info))
        .as_ref()
        .map_err(Clone::clone)
}

fn compute(info: &'static StructInfo) -> Result<ResolvedFields, ResolutionError> {
    let mut resolved = ResolvedFields::default();
    for ancestor in linearize(info)? {
        for field in ancestor.fields() {
            resolved.add(field);
        }
    }
    for field in info.constructor() {
        resolved.replace(field);
    }
    Ok(resolved)
}

/// Pre-order walk over the base graph, deduplicated by `TypeId`.
fn linearize(info: &'static StructInfo) -> Result<Vec<&'static StructInfo>, ResolutionError> {
    let mut order = Vec::new();
    let mut visited: HashSet<TypeId> = HashSet::default();
    let mut stack = vec![info];

    while let Some(current) = stack.pop() {
        if !visited.insert(current.type_id()) {
            continue;
        }
        order.push(current);

        let mut bases = Vec::with_capacity(current.bases().len());
        for base in current.bases() {
            match base {
                TypeInfo::Struct(base_info) => bases.push(base_info),
                _ => {
                    return Err(ResolutionError::InvalidBase {
                        owner: current.type_path(),
                        owner_name: current.type_name(),
                        base: base.type_path(),
                        kind: base.kind(),
                    });
                }
            }
        }
        stack.extend(bases.into_iter().rev());
    }

    Ok(order)
}

#[cfg(test)]
mod tests {
    use super::{ResolutionError, resolve_fields};
    use crate::derive::Reflect;
    use crate::info::{StructInfo, Typed};

    #[derive(Reflect)]
    struct D {
        d: u8,
    }

    #[derive(Reflect)]
    struct E {
        e: u8,
    }

    #[derive(Reflect)]
    struct F {
        f: u8,
        shared: u8,
    }

    #[derive(Reflect)]
    struct G {
        g: u8,
    }

    #[derive(Reflect)]
    struct B {
        #[reflect(base)]
        base_d: D,
        b: u8,
    }

    #[derive(Reflect)]
    struct C {
        #[reflect(base)]
        base_e: E,
        #[reflect(base)]
        base_f: F,
        c: u8,
        shared: String,
    }

    #[derive(Reflect)]
    struct H {
        #[reflect(base)]
        base_g: G,
        h: u8,
    }

    #[derive(Reflect)]
    struct A {
        #[reflect(base)]
        base_b: B,
        #[reflect(base)]
        base_c: C,
        #[reflect(base)]
        base_h: H,
        a: u8,
    }

    #[derive(Reflect)]
    #[reflect(constructor(b = String, extra = Vec<u8>))]
    struct Built {
        #[reflect(base)]
        base_b: B,
        a: u8,
    }

    fn type_names(info: &'static StructInfo) -> Vec<&'static str> {
        super::linearize(info)
            .unwrap()
            .into_iter()
            .map(StructInfo::type_name)
            .collect()
    }

    #[test]
    fn linearizes_depth_first() {
        let info = A::type_info().as_struct().unwrap();
        assert_eq!(type_names(info), ["A", "B", "D", "C", "E", "F", "H", "G"]);
    }

    #[test]
    fn most_specific_wins() {
        let fields = resolve_fields(A::type_info()).unwrap();
        assert_eq!(
            fields.names().collect::<Vec<_>>(),
            ["a", "b", "d", "c", "shared", "e", "f", "h", "g"]
        );
        assert_eq!(fields.get("shared").unwrap().type_name(), "String");
        assert!(!fields.contains("base_b"));
    }

    #[test]
    fn constructor_overrides() {
        let fields = resolve_fields(Built::type_info()).unwrap();
        assert_eq!(fields.names().collect::<Vec<_>>(), ["a", "b", "d", "extra"]);
        assert_eq!(fields.get("b").unwrap().type_name(), "String");
        assert_eq!(fields.get("extra").unwrap().type_name(), "Vec<u8>");
    }

    #[test]
    fn memoized() {
        let first = resolve_fields(A::type_info()).unwrap();
        let second = resolve_fields(A::type_info()).unwrap();
        assert!(core::ptr::eq(first, second));
    }

    #[test]
    fn rejects_non_struct() {
        let err = resolve_fields(<Vec<u8>>::type_info()).unwrap_err();
        assert!(matches!(err, ResolutionError::NotComposite { .. }));
        assert_eq!(err.to_string(), "`alloc::vec::Vec<u8>` is List, not a struct");
    }
}
