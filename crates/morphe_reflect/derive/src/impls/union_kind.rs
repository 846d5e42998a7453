use proc_macro2::TokenStream;
use quote::quote;
use syn::ext::IdentExt;

use super::{impl_trait_type_path, impl_trait_typed};

use crate::derive_data::ReflectUnion;

/// Implement full reflect for `#[reflect(union)]` enums.
pub(crate) fn impl_union(info: &ReflectUnion) -> TokenStream {
    let meta = info.meta();
    let krate = meta.krate();
    let reflect_ = crate::path::reflect_(krate);
    let from_reflect_ = crate::path::from_reflect_(krate);
    let reflect_ref_ = crate::path::reflect_ref_(krate);
    let union_ = crate::path::union_(krate);
    let type_info_ = crate::path::type_info_(krate);
    let union_info_ = crate::path::union_info_(krate);
    let alternative_ = crate::path::alternative_(krate);
    let ident = meta.ident();

    let variants = info.variants.iter().map(|v| v.ident).collect::<Vec<_>>();
    let types = info.variants.iter().map(|v| v.ty).collect::<Vec<_>>();
    let names = variants
        .iter()
        .map(|variant| variant.unraw().to_string())
        .collect::<Vec<_>>();
    let indices = (0..variants.len()).collect::<Vec<_>>();

    // trait: TypePath
    let type_path_trait_tokens = impl_trait_type_path(meta);

    // trait: Typed
    let typed_trait_tokens = impl_trait_typed(
        meta,
        quote! {
            #type_info_::Union(#union_info_::new::<Self>(&[
                #( #alternative_::new::<#types>(#names) ),*
            ]))
        },
    );

    quote! {
        #type_path_trait_tokens

        #typed_trait_tokens

        impl #union_ for #ident {
            fn active_index(&self) -> usize {
                match self {
                    #( Self::#variants(_) => #indices, )*
                }
            }

            fn active(&self) -> &dyn #reflect_ {
                match self {
                    #( Self::#variants(value) => value as &dyn #reflect_, )*
                }
            }
        }

        impl #reflect_ for #ident {
            #[inline]
            fn reflect_ref(&self) -> #reflect_ref_<'_> {
                #reflect_ref_::Union(self)
            }
        }

        impl #from_reflect_ for #ident {
            /// An alternative matching the represented type of `reflect` is
            /// taken first, then every alternative is tried in order.
            fn from_reflect(reflect: &dyn #reflect_) -> ::core::option::Option<Self> {
                if let #reflect_ref_::Union(union) = reflect.reflect_ref() {
                    return <Self as #from_reflect_>::from_reflect(#union_::active(union));
                }

                if let ::core::option::Option::Some(info) = reflect.represented_type_info() {
                    #(
                        if info.type_id() == ::core::any::TypeId::of::<#types>() {
                            if let ::core::option::Option::Some(value) =
                                <#types as #from_reflect_>::from_reflect(reflect)
                            {
                                return ::core::option::Option::Some(Self::#variants(value));
                            }
                        }
                    )*
                }

                #(
                    if let ::core::option::Option::Some(value) =
                        <#types as #from_reflect_>::from_reflect(reflect)
                    {
                        return ::core::option::Option::Some(Self::#variants(value));
                    }
                )*

                ::core::option::Option::None
            }
        }
    }
}
