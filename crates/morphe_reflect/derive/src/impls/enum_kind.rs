use proc_macro2::{Literal, TokenStream};
use quote::quote;
use syn::ext::IdentExt;

use super::{impl_trait_type_path, impl_trait_typed};

use crate::derive_data::{ReflectEnum, TagValue};

fn tag_tokens(tag_: &TokenStream, tag: &TagValue) -> TokenStream {
    match tag {
        TagValue::Str(text) => quote!(#tag_::Str(#text)),
        TagValue::Int(value) => {
            let value = Literal::i64_unsuffixed(*value);
            quote!(#tag_::Int(#value))
        }
    }
}

/// Implement full reflect for unit-only enums.
pub(crate) fn impl_enum(info: &ReflectEnum) -> TokenStream {
    let meta = info.meta();
    let krate = meta.krate();
    let reflect_ = crate::path::reflect_(krate);
    let from_reflect_ = crate::path::from_reflect_(krate);
    let reflect_ref_ = crate::path::reflect_ref_(krate);
    let enum_ = crate::path::enum_(krate);
    let tag_ = crate::path::tag_(krate);
    let type_info_ = crate::path::type_info_(krate);
    let enum_info_ = crate::path::enum_info_(krate);
    let enum_member_ = crate::path::enum_member_(krate);
    let ident = meta.ident();

    let variants = info.members.iter().map(|member| member.ident).collect::<Vec<_>>();
    let names = variants
        .iter()
        .map(|variant| variant.unraw().to_string())
        .collect::<Vec<_>>();
    let tags = info
        .members
        .iter()
        .map(|member| tag_tokens(&tag_, &member.tag))
        .collect::<Vec<_>>();
    let indices = (0..variants.len()).collect::<Vec<_>>();

    // trait: TypePath
    let type_path_trait_tokens = impl_trait_type_path(meta);

    // trait: Typed
    let typed_trait_tokens = impl_trait_typed(
        meta,
        quote! {
            #type_info_::Enum(#enum_info_::new::<Self>(
                &[ #( #enum_member_::new(#names, #tags) ),* ],
                |index| match index {
                    #( #indices => ::core::option::Option::Some(
                        ::std::boxed::Box::new(Self::#variants) as ::std::boxed::Box<dyn #reflect_>
                    ), )*
                    _ => ::core::option::Option::None,
                },
            ))
        },
    );

    quote! {
        #type_path_trait_tokens

        #typed_trait_tokens

        impl #enum_ for #ident {
            fn member_index(&self) -> usize {
                match self {
                    #( Self::#variants => #indices, )*
                }
            }

            fn member_name(&self) -> &'static str {
                match self {
                    #( Self::#variants => #names, )*
                }
            }

            fn tag(&self) -> #tag_ {
                match self {
                    #( Self::#variants => #tags, )*
                }
            }
        }

        impl #reflect_ for #ident {
            #[inline]
            fn reflect_ref(&self) -> #reflect_ref_<'_> {
                #reflect_ref_::Enum(self)
            }
        }

        impl #from_reflect_ for #ident {
            fn from_reflect(reflect: &dyn #reflect_) -> ::core::option::Option<Self> {
                let #reflect_ref_::Enum(member) = reflect.reflect_ref() else {
                    return ::core::option::Option::None;
                };
                if !reflect.is::<Self>() {
                    return ::core::option::Option::None;
                }
                match #enum_::member_index(member) {
                    #( #indices => ::core::option::Option::Some(Self::#variants), )*
                    _ => ::core::option::Option::None,
                }
            }
        }
    }
}
