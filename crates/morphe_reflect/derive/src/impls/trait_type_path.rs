use proc_macro2::TokenStream;
use quote::quote;

use crate::derive_data::ReflectMeta;

/// Generate `TypePath` implementation tokens.
pub(crate) fn impl_trait_type_path(meta: &ReflectMeta) -> TokenStream {
    let type_path_ = crate::path::type_path_(meta.krate());

    let ident = meta.ident();
    let type_name = ident.to_string();
    let type_path = meta.type_path_tokens();

    // A custom path may not live in the defining module.
    let module_path_tokens = if meta.attrs().type_path.is_none() {
        quote! {
            #[inline]
            fn module_path() -> ::core::option::Option<&'static str> {
                ::core::option::Option::Some(::core::module_path!())
            }
        }
    } else {
        crate::utils::empty()
    };

    quote! {
        impl #type_path_ for #ident {
            #[inline]
            fn type_path() -> &'static str {
                #type_path
            }

            #[inline]
            fn type_name() -> &'static str {
                #type_name
            }

            #module_path_tokens
        }
    }
}
