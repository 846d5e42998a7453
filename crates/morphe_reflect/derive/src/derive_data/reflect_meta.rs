use proc_macro2::TokenStream;
use quote::quote;
use syn::Ident;

use super::TypeAttributes;

/// What every generated impl needs: the type, its container attributes and
/// the path of `morphe_reflect` as seen from the deriving crate.
pub(crate) struct ReflectMeta<'a> {
    ident: &'a Ident,
    attrs: TypeAttributes,
    krate: syn::Path,
}

impl<'a> ReflectMeta<'a> {
    pub fn new(ident: &'a Ident, attrs: TypeAttributes) -> Self {
        Self {
            ident,
            attrs,
            krate: crate::path::morphe_reflect(),
        }
    }

    #[inline]
    pub fn ident(&self) -> &'a Ident {
        self.ident
    }

    #[inline]
    pub fn attrs(&self) -> &TypeAttributes {
        &self.attrs
    }

    #[inline]
    pub fn krate(&self) -> &syn::Path {
        &self.krate
    }

    /// The expression of the full type path.
    pub fn type_path_tokens(&self) -> TokenStream {
        match &self.attrs.type_path {
            Some(custom) => quote!(#custom),
            None => {
                let name = self.ident.to_string();
                quote!(::core::concat!(::core::module_path!(), "::", #name))
            }
        }
    }
}
