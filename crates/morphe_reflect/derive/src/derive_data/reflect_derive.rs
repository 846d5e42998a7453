use syn::spanned::Spanned;
use syn::{Data, DataEnum, DataStruct, DeriveInput, Fields};

use super::{EnumMemberData, ReflectEnum, ReflectMeta, ReflectStruct, ReflectUnion};
use super::{FieldAttributes, StructField, TagValue, TypeAttributes, UnionVariant, VariantAttributes};

/// The parsed input of `#[derive(Reflect)]`.
pub(crate) enum ReflectDerive<'a> {
    Struct(ReflectStruct<'a>),
    Enum(ReflectEnum<'a>),
    Union(ReflectUnion<'a>),
}

impl<'a> ReflectDerive<'a> {
    pub fn from_input(input: &'a DeriveInput) -> syn::Result<Self> {
        if !input.generics.params.is_empty() {
            return Err(syn::Error::new(
                input.generics.span(),
                "`Reflect` cannot be derived for generic types",
            ));
        }

        let attrs = TypeAttributes::parse_attrs(&input.attrs)?;

        match &input.data {
            Data::Struct(data) => Self::parse_struct(input, data, attrs),
            Data::Enum(data) if attrs.union.is_some() => Self::parse_union(input, data, attrs),
            Data::Enum(data) => Self::parse_enum(input, data, attrs),
            Data::Union(_) => Err(syn::Error::new(
                input.ident.span(),
                "`Reflect` cannot be derived for Rust unions, use a `#[reflect(union)]` enum",
            )),
        }
    }

    fn parse_struct(
        input: &'a DeriveInput,
        data: &'a DataStruct,
        attrs: TypeAttributes,
    ) -> syn::Result<Self> {
        if let Some(span) = attrs.union {
            return Err(syn::Error::new(span, "`union` only applies to enums"));
        }
        if attrs.rename_all.is_some() {
            return Err(syn::Error::new(input.ident.span(), "`rename_all` only applies to enums"));
        }

        let Fields::Named(named) = &data.fields else {
            return Err(syn::Error::new(
                data.fields.span(),
                "`Reflect` can only be derived for structs with named fields",
            ));
        };

        let fields = named
            .named
            .iter()
            .map(|field| {
                Ok(StructField {
                    data: field,
                    attrs: FieldAttributes::parse_attrs(&field.attrs)?,
                })
            })
            .collect::<syn::Result<Vec<_>>>()?;

        Ok(Self::Struct(ReflectStruct {
            meta: ReflectMeta::new(&input.ident, attrs),
            fields,
        }))
    }

    fn parse_enum(
        input: &'a DeriveInput,
        data: &'a DataEnum,
        attrs: TypeAttributes,
    ) -> syn::Result<Self> {
        if !attrs.constructor.is_empty() {
            return Err(syn::Error::new(input.ident.span(), "`constructor` only applies to structs"));
        }

        let mut members: Vec<EnumMemberData<'a>> = Vec::with_capacity(data.variants.len());
        for variant in &data.variants {
            if !matches!(variant.fields, Fields::Unit) {
                return Err(syn::Error::new(
                    variant.span(),
                    "enum members must be unit variants, or mark the enum `#[reflect(union)]`",
                ));
            }

            let variant_attrs = VariantAttributes::parse_attrs(&variant.attrs)?;
            let tag = match (variant_attrs.tag, &variant.discriminant) {
                (Some(tag), _) => tag,
                (None, Some((_, expr))) => TagValue::from_discriminant(expr)?,
                (None, None) => {
                    let name = variant.ident.to_string();
                    TagValue::Str(match attrs.rename_all {
                        Some(rule) => rule.apply(&name),
                        None => name,
                    })
                }
            };

            if members.iter().any(|member| member.tag == tag) {
                return Err(syn::Error::new(variant.span(), "duplicate enum tag"));
            }
            members.push(EnumMemberData {
                ident: &variant.ident,
                tag,
            });
        }

        Ok(Self::Enum(ReflectEnum {
            meta: ReflectMeta::new(&input.ident, attrs),
            members,
        }))
    }

    fn parse_union(
        input: &'a DeriveInput,
        data: &'a DataEnum,
        attrs: TypeAttributes,
    ) -> syn::Result<Self> {
        if !attrs.constructor.is_empty() || attrs.rename_all.is_some() {
            return Err(syn::Error::new(
                input.ident.span(),
                "`constructor` and `rename_all` do not apply to unions",
            ));
        }
        if data.variants.len() < 2 {
            return Err(syn::Error::new(
                input.ident.span(),
                "a union needs at least two alternatives",
            ));
        }

        let variants = data
            .variants
            .iter()
            .map(|variant| match &variant.fields {
                Fields::Unnamed(fields) if fields.unnamed.len() == 1 => Ok(UnionVariant {
                    ident: &variant.ident,
                    ty: &fields.unnamed[0].ty,
                }),
                _ => Err(syn::Error::new(
                    variant.span(),
                    "union alternatives must be tuple variants with exactly one field",
                )),
            })
            .collect::<syn::Result<Vec<_>>>()?;

        Ok(Self::Union(ReflectUnion {
            meta: ReflectMeta::new(&input.ident, attrs),
            variants,
        }))
    }
}
