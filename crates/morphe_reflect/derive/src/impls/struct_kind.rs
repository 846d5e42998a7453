use proc_macro2::TokenStream;
use quote::quote;
use syn::ext::IdentExt;

use super::{impl_trait_type_path, impl_trait_typed};

use crate::derive_data::{ReflectStruct, StructField};

/// A field name as it appears in the reflected view.
fn field_name(field: &StructField) -> String {
    field.ident().unraw().to_string()
}

/// Implement full reflect for struct type.
pub(crate) fn impl_struct(info: &ReflectStruct) -> TokenStream {
    let meta = info.meta();

    // trait: TypePath
    let type_path_trait_tokens = impl_trait_type_path(meta);

    // trait: Typed
    let typed_trait_tokens = impl_trait_typed(meta, get_struct_info_tokens(info));

    // trait: Struct
    let struct_trait_tokens = impl_trait_struct(info);

    // trait: Reflect
    let reflect_trait_tokens = {
        let krate = meta.krate();
        let reflect_ = crate::path::reflect_(krate);
        let reflect_ref_ = crate::path::reflect_ref_(krate);
        let ident = meta.ident();

        quote! {
            impl #reflect_ for #ident {
                #[inline]
                fn reflect_ref(&self) -> #reflect_ref_<'_> {
                    #reflect_ref_::Struct(self)
                }
            }
        }
    };

    // trait: FromReflect
    let from_reflect_trait_tokens = impl_struct_from_reflect(info);

    quote! {
        #type_path_trait_tokens

        #typed_trait_tokens

        #struct_trait_tokens

        #reflect_trait_tokens

        #from_reflect_trait_tokens
    }
}

/// Generate the `TypeInfo::Struct(...)` expression.
fn get_struct_info_tokens(info: &ReflectStruct) -> TokenStream {
    let krate = info.meta().krate();
    let type_info_ = crate::path::type_info_(krate);
    let struct_info_ = crate::path::struct_info_(krate);
    let named_field_ = crate::path::named_field_(krate);
    let typed_ = crate::path::typed_(krate);

    let fields = info.own_fields().map(|field| {
        let name = field_name(field);
        let ty = field.ty();
        quote!(#named_field_::new::<#ty>(#name))
    });

    let with_bases = if info.base_fields().next().is_some() {
        let bases = info.base_fields().map(|field| {
            let ty = field.ty();
            quote!(<#ty as #typed_>::type_info as fn() -> &'static #type_info_)
        });
        quote!(.with_bases(&[ #(#bases),* ]))
    } else {
        crate::utils::empty()
    };

    let constructor = &info.meta().attrs().constructor;
    let with_constructor = if constructor.is_empty() {
        crate::utils::empty()
    } else {
        let fields = constructor
            .iter()
            .map(|(name, ty)| quote!(#named_field_::new::<#ty>(#name)));
        quote!(.with_constructor(&[ #(#fields),* ]))
    };

    quote! {
        #type_info_::Struct(
            #struct_info_::new::<Self>(&[ #(#fields),* ])
                #with_bases
                #with_constructor
        )
    }
}

/// Generate `Struct` trait implementation tokens.
///
/// Own fields shadow base fields in name lookup; positional access walks
/// the declaration order with base fields flattened in place.
fn impl_trait_struct(info: &ReflectStruct) -> TokenStream {
    let meta = info.meta();
    let krate = meta.krate();
    let struct_ = crate::path::struct_(krate);
    let reflect_ = crate::path::reflect_(krate);
    let ident = meta.ident();

    let own_names = info.own_fields().map(field_name).collect::<Vec<_>>();
    let own_idents = info.own_fields().map(StructField::ident).collect::<Vec<_>>();
    let base_idents = info.base_fields().map(StructField::ident).collect::<Vec<_>>();
    let own_count = own_names.len();

    let mut field_at_steps = Vec::with_capacity(info.fields.len());
    let mut name_at_steps = Vec::with_capacity(info.fields.len());
    for field in &info.fields {
        let member = field.ident();
        if field.is_base() {
            field_at_steps.push(quote! {
                let len = #struct_::field_len(&self.#member);
                if index < len {
                    return #struct_::field_at(&self.#member, index);
                }
                index -= len;
            });
            name_at_steps.push(quote! {
                let len = #struct_::field_len(&self.#member);
                if index < len {
                    return #struct_::name_at(&self.#member, index);
                }
                index -= len;
            });
        } else {
            let name = field_name(field);
            field_at_steps.push(quote! {
                if index == 0 {
                    return ::core::option::Option::Some(&self.#member);
                }
                index -= 1;
            });
            name_at_steps.push(quote! {
                if index == 0 {
                    return ::core::option::Option::Some(#name);
                }
                index -= 1;
            });
        }
    }

    let (field_at_body, name_at_body) = if info.fields.is_empty() {
        let body = quote! {
            let _ = index;
            ::core::option::Option::None
        };
        (body.clone(), body)
    } else {
        (
            quote! {
                let mut index = index;
                #(#field_at_steps)*
                let _ = index;
                ::core::option::Option::None
            },
            quote! {
                let mut index = index;
                #(#name_at_steps)*
                let _ = index;
                ::core::option::Option::None
            },
        )
    };

    quote! {
        impl #struct_ for #ident {
            fn field(&self, name: &str) -> ::core::option::Option<&dyn #reflect_> {
                match name {
                    #(#own_names => ::core::option::Option::Some(&self.#own_idents),)*
                    _ => ::core::option::Option::None
                        #(.or_else(|| #struct_::field(&self.#base_idents, name)))*,
                }
            }

            fn field_at(&self, index: usize) -> ::core::option::Option<&dyn #reflect_> {
                #field_at_body
            }

            fn name_at(&self, index: usize) -> ::core::option::Option<&str> {
                #name_at_body
            }

            fn field_len(&self) -> usize {
                #own_count #(+ #struct_::field_len(&self.#base_idents))*
            }
        }
    }
}

/// Generate `FromReflect` implementation tokens.
///
/// The source only needs to be struct-shaped; bases read the same source,
/// since their fields are flattened into it.
fn impl_struct_from_reflect(info: &ReflectStruct) -> TokenStream {
    let meta = info.meta();
    let krate = meta.krate();
    let reflect_ = crate::path::reflect_(krate);
    let from_reflect_ = crate::path::from_reflect_(krate);
    let reflect_ref_ = crate::path::reflect_ref_(krate);
    let field_or_null_ = crate::path::field_or_null_(krate);
    let ident = meta.ident();

    let inits = info.fields.iter().map(|field| {
        let member = field.ident();
        let ty = field.ty();
        if field.is_base() {
            quote!(#member: <#ty as #from_reflect_>::from_reflect(reflect)?)
        } else {
            let name = field_name(field);
            quote!(#member: <#ty as #from_reflect_>::from_reflect(#field_or_null_(value, #name))?)
        }
    });

    let ignore_value = if info.own_fields().next().is_none() {
        quote!(let _ = value;)
    } else {
        crate::utils::empty()
    };

    quote! {
        impl #from_reflect_ for #ident {
            fn from_reflect(reflect: &dyn #reflect_) -> ::core::option::Option<Self> {
                let #reflect_ref_::Struct(value) = reflect.reflect_ref() else {
                    return ::core::option::Option::None;
                };
                #ignore_value
                ::core::option::Option::Some(Self {
                    #(#inits,)*
                })
            }
        }
    }
}
