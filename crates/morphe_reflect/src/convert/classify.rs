use core::any::TypeId;

use crate::convert::{DeserializeFn, Middleware};
use crate::info::{EnumInfo, ListInfo, MapInfo, OptionalInfo, PrimitiveInfo, TypeInfo, UnionInfo};
use crate::value::Value;

/// How the deserializer treats a target type.
#[derive(Clone, Copy)]
pub enum Category<'a> {
    /// A converter is registered for the exact type.
    Middleware(&'a DeserializeFn),
    /// The target is [`Value`] itself; the input is kept as is.
    Generic,
    Primitive(&'static PrimitiveInfo),
    Enum(&'static EnumInfo),
    Optional(&'static OptionalInfo),
    List(&'static ListInfo),
    Map(&'static MapInfo),
    Union(&'static UnionInfo),
    /// Structs, and opaque types which then fail field resolution.
    Composite(&'static TypeInfo),
}

impl Category<'_> {
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Middleware(_) => "middleware",
            Self::Generic => "generic",
            Self::Primitive(_) => "primitive",
            Self::Enum(_) => "enum",
            Self::Optional(_) => "optional",
            Self::List(_) => "list",
            Self::Map(_) => "map",
            Self::Union(_) => "union",
            Self::Composite(_) => "composite",
        }
    }
}

/// Classifies a target descriptor. First match wins, and middleware wins
/// over everything.
///
/// # Examples
///
/// ```
/// use morphe_reflect::convert::{Middleware, classify};
/// use morphe_reflect::info::Typed;
/// use morphe_reflect::value::Value;
///
/// let plain = Middleware::new();
/// assert_eq!(classify(<Option<u8>>::type_info(), &plain).name(), "optional");
/// assert_eq!(classify(Value::type_info(), &plain).name(), "generic");
///
/// let custom = Middleware::new().with_deserializer::<u8, _>(|_, _| Ok(0));
/// assert_eq!(classify(u8::type_info(), &custom).name(), "middleware");
/// ```
pub fn classify<'a>(info: &'static TypeInfo, middleware: &'a Middleware) -> Category<'a> {
    if let Some(f) = middleware.deserializer(info.type_id()) {
        return Category::Middleware(f);
    }
    if info.type_id() == TypeId::of::<Value>() {
        return Category::Generic;
    }
    match info {
        TypeInfo::Primitive(info) => Category::Primitive(info),
        TypeInfo::Enum(info) => Category::Enum(info),
        TypeInfo::Optional(info) => Category::Optional(info),
        TypeInfo::List(info) => Category::List(info),
        TypeInfo::Map(info) => Category::Map(info),
        TypeInfo::Union(info) => Category::Union(info),
        TypeInfo::Struct(_) | TypeInfo::Opaque(_) => Category::Composite(info),
    }
}

#[cfg(test)]
mod tests {
    use super::classify;
    use crate::convert::Middleware;
    use crate::info::Typed;

    #[test]
    fn categories() {
        let mw = Middleware::new();
        let name = |info| classify(info, &mw).name();

        assert_eq!(name(bool::type_info()), "primitive");
        assert_eq!(name(String::type_info()), "primitive");
        assert_eq!(name(<Vec<String>>::type_info()), "list");
        assert_eq!(name(<std::collections::BTreeMap<String, u8>>::type_info()), "map");
        assert_eq!(name(<Option<Vec<u8>>>::type_info()), "optional");
        assert_eq!(name(<dyn crate::Reflect>::type_info()), "composite");
    }

    #[test]
    fn middleware_beats_shape() {
        let mw = Middleware::new().with_deserializer::<Vec<u8>, _>(|_, _| Ok(Vec::new()));
        assert_eq!(classify(<Vec<u8>>::type_info(), &mw).name(), "middleware");
        assert_eq!(classify(<Vec<u16>>::type_info(), &mw).name(), "list");
    }
}
