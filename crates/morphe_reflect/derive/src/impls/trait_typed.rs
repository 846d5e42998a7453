use proc_macro2::TokenStream;
use quote::quote;

use crate::derive_data::ReflectMeta;

/// Generate `Typed` implementation tokens around a `TypeInfo` expression.
pub(crate) fn impl_trait_typed(meta: &ReflectMeta, info_tokens: TokenStream) -> TokenStream {
    let krate = meta.krate();
    let typed_ = crate::path::typed_(krate);
    let type_info_ = crate::path::type_info_(krate);
    let type_info_cell_ = crate::path::type_info_cell_(krate);

    let ident = meta.ident();

    quote! {
        impl #typed_ for #ident {
            fn type_info() -> &'static #type_info_ {
                static CELL: #type_info_cell_ = #type_info_cell_::new();
                CELL.get_or_init(|| #info_tokens)
            }
        }
    }
}
