//! Paths of the items generated code refers to, kept in one place so the
//! layout of `morphe_reflect` can change with minimal edits here.

use proc_macro2::TokenStream;
use quote::quote;

// -----------------------------------------------------------------------------
// Crate Path

/// Get the correct access path to the `morphe_reflect` crate.
///
/// 1. For crates that depend on `morphe_reflect`, `::morphe_reflect` is returned.
/// 2. For crates that depend on `morphe`, `::morphe::reflect` is returned.
/// 3. For other situations, `::morphe_reflect` is returned, which is what
///    `morphe_reflect` itself relies on through `extern crate self`.
///
/// Reading the manifest is not cheap, so the path is obtained once per
/// derive and passed around.
pub(crate) fn morphe_reflect() -> syn::Path {
    morphe_macro_utils::Manifest::shared(|manifest| manifest.get_crate_path("morphe_reflect"))
}

// -----------------------------------------------------------------------------
// Items

macro_rules! item_paths {
    ($($fn_name:ident => $($segment:ident)::+;)*) => {
        $(
            #[inline(always)]
            pub(crate) fn $fn_name(krate: &syn::Path) -> TokenStream {
                quote! { #krate $(:: $segment)+ }
            }
        )*
    };
}

item_paths! {
    reflect_ => Reflect;
    from_reflect_ => FromReflect;
    type_path_ => info::TypePath;
    typed_ => info::Typed;
    type_info_ => info::TypeInfo;
    named_field_ => info::NamedField;
    struct_info_ => info::StructInfo;
    enum_info_ => info::EnumInfo;
    enum_member_ => info::EnumMember;
    tag_ => info::Tag;
    union_info_ => info::UnionInfo;
    alternative_ => info::Alternative;
    type_info_cell_ => impls::NonGenericTypeInfoCell;
    reflect_ref_ => ops::ReflectRef;
    struct_ => ops::Struct;
    enum_ => ops::Enum;
    union_ => ops::Union;
    field_or_null_ => ops::field_or_null;
}
