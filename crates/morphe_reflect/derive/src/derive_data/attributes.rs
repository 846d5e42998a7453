//! Parsing of `#[reflect(...)]` attributes.

use proc_macro2::Span;
use syn::meta::ParseNestedMeta;
use syn::{Attribute, Expr, ExprLit, ExprUnary, Lit, LitStr, Token, Type, UnOp};

use crate::REFLECT_ATTRIBUTE_NAME;

// -----------------------------------------------------------------------------
// RenameRule

/// `#[reflect(rename_all = "...")]`, applied to member names to derive tags.
#[derive(Debug, Clone, Copy)]
pub(crate) enum RenameRule {
    Lowercase,
    Uppercase,
    SnakeCase,
    ScreamingSnakeCase,
    KebabCase,
}

impl RenameRule {
    fn parse(lit: &LitStr) -> syn::Result<Self> {
        Ok(match lit.value().as_str() {
            "lowercase" => Self::Lowercase,
            "UPPERCASE" => Self::Uppercase,
            "snake_case" => Self::SnakeCase,
            "SCREAMING_SNAKE_CASE" => Self::ScreamingSnakeCase,
            "kebab-case" => Self::KebabCase,
            _ => {
                return Err(syn::Error::new(
                    lit.span(),
                    "expected one of `lowercase`, `UPPERCASE`, `snake_case`, \
                     `SCREAMING_SNAKE_CASE` or `kebab-case`",
                ));
            }
        })
    }

    pub fn apply(self, name: &str) -> String {
        match self {
            Self::Lowercase => name.to_lowercase(),
            Self::Uppercase => name.to_uppercase(),
            Self::SnakeCase => split_words(name, '_').to_lowercase(),
            Self::ScreamingSnakeCase => split_words(name, '_').to_uppercase(),
            Self::KebabCase => split_words(name, '-').to_lowercase(),
        }
    }
}

/// `PascalCase` to words joined by `separator`.
fn split_words(name: &str, separator: char) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    for (index, ch) in name.char_indices() {
        if index > 0 && ch.is_uppercase() {
            out.push(separator);
        }
        out.push(ch);
    }
    out
}

// -----------------------------------------------------------------------------
// TagValue

/// The underlying value of an enum member.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum TagValue {
    Str(String),
    Int(i64),
}

impl TagValue {
    fn parse_int(lit: &Lit, negative: bool, span: Span) -> syn::Result<Self> {
        match lit {
            Lit::Int(int) => {
                let value: i64 = int.base10_parse()?;
                Ok(Self::Int(if negative { -value } else { value }))
            }
            _ => Err(syn::Error::new(span, "expected an integer literal")),
        }
    }

    /// `tag = "text"`, `tag = 5` or `tag = -5`.
    fn parse_meta(meta: &ParseNestedMeta) -> syn::Result<Self> {
        let input = meta.value()?;
        let negative = input.peek(Token![-]);
        if negative {
            input.parse::<Token![-]>()?;
        }
        let lit: Lit = input.parse()?;
        match &lit {
            Lit::Str(text) if !negative => Ok(Self::Str(text.value())),
            _ => Self::parse_int(&lit, negative, lit.span()),
        }
    }

    /// An explicit discriminant such as `= 3` or `= -1`.
    pub fn from_discriminant(expr: &Expr) -> syn::Result<Self> {
        match expr {
            Expr::Lit(ExprLit { lit, .. }) => Self::parse_int(lit, false, lit.span()),
            Expr::Unary(ExprUnary {
                op: UnOp::Neg(_),
                expr,
                ..
            }) => match &**expr {
                Expr::Lit(ExprLit { lit, .. }) => Self::parse_int(lit, true, lit.span()),
                other => Err(syn::Error::new_spanned(other, "expected an integer literal")),
            },
            other => Err(syn::Error::new_spanned(
                other,
                "discriminant must be an integer literal, or use `#[reflect(tag = ...)]`",
            )),
        }
    }
}

// -----------------------------------------------------------------------------
// TypeAttributes

/// Container attributes.
#[derive(Default)]
pub(crate) struct TypeAttributes {
    /// `#[reflect(type_path = "...")]`
    pub type_path: Option<LitStr>,
    /// `#[reflect(union)]`
    pub union: Option<Span>,
    /// `#[reflect(rename_all = "...")]`
    pub rename_all: Option<RenameRule>,
    /// `#[reflect(constructor(name = Type, ...))]`
    pub constructor: Vec<(String, Type)>,
}

impl TypeAttributes {
    pub fn parse_attrs(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut out = Self::default();

        for attr in attrs {
            if !attr.path().is_ident(REFLECT_ATTRIBUTE_NAME) {
                continue;
            }
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("type_path") {
                    out.type_path = Some(meta.value()?.parse()?);
                } else if meta.path.is_ident("union") {
                    out.union = Some(meta.path.require_ident()?.span());
                } else if meta.path.is_ident("rename_all") {
                    out.rename_all = Some(RenameRule::parse(&meta.value()?.parse()?)?);
                } else if meta.path.is_ident("constructor") {
                    meta.parse_nested_meta(|field| {
                        let name = field.path.require_ident()?.to_string();
                        if out.constructor.iter().any(|(prev, _)| *prev == name) {
                            return Err(field.error("duplicate constructor field"));
                        }
                        let ty: Type = field.value()?.parse()?;
                        out.constructor.push((name, ty));
                        Ok(())
                    })?;
                } else {
                    return Err(meta.error("unknown container attribute"));
                }
                Ok(())
            })?;
        }

        Ok(out)
    }
}

// -----------------------------------------------------------------------------
// FieldAttributes

/// Field attributes.
#[derive(Default)]
pub(crate) struct FieldAttributes {
    /// `#[reflect(base)]`: the field holds a base struct whose fields are
    /// flattened into this one.
    pub base: Option<Span>,
}

impl FieldAttributes {
    pub fn parse_attrs(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut out = Self::default();

        for attr in attrs {
            if !attr.path().is_ident(REFLECT_ATTRIBUTE_NAME) {
                continue;
            }
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("base") {
                    out.base = Some(meta.path.require_ident()?.span());
                    Ok(())
                } else {
                    Err(meta.error("unknown field attribute"))
                }
            })?;
        }

        Ok(out)
    }
}

// -----------------------------------------------------------------------------
// VariantAttributes

/// Variant attributes.
#[derive(Default)]
pub(crate) struct VariantAttributes {
    /// `#[reflect(tag = ...)]`
    pub tag: Option<TagValue>,
}

impl VariantAttributes {
    pub fn parse_attrs(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut out = Self::default();

        for attr in attrs {
            if !attr.path().is_ident(REFLECT_ATTRIBUTE_NAME) {
                continue;
            }
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("tag") {
                    out.tag = Some(TagValue::parse_meta(&meta)?);
                    Ok(())
                } else {
                    Err(meta.error("unknown variant attribute"))
                }
            })?;
        }

        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::RenameRule;

    #[test]
    fn rename_rules() {
        assert_eq!(RenameRule::Lowercase.apply("NotFound"), "notfound");
        assert_eq!(RenameRule::SnakeCase.apply("NotFound"), "not_found");
        assert_eq!(RenameRule::ScreamingSnakeCase.apply("NotFound"), "NOT_FOUND");
        assert_eq!(RenameRule::KebabCase.apply("NotFound"), "not-found");
    }
}
