//! See [`Reflect`].
#![cfg_attr(docsrs, feature(doc_cfg))]

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

static REFLECT_ATTRIBUTE_NAME: &str = "reflect";

// -----------------------------------------------------------------------------
// Modules

mod derive_data;
mod impls;
mod path;
mod utils;

// -----------------------------------------------------------------------------
// Macros

/// # Full Reflection Derivation
///
/// `#[derive(Reflect)]` implements the following traits:
///
/// - `TypePath`
/// - `Typed`
/// - `Reflect`
/// - `FromReflect`
/// - `Struct` (for `struct T { ... }`)
/// - `Enum` (for `enum T { A, B, ... }`)
/// - `Union` (for `#[reflect(union)] enum T { A(X), B(Y), ... }`)
///
/// Generic types, tuple structs and unit structs are rejected. Types the
/// derive cannot describe are reflected as opaque by hand and converted
/// through middleware.
///
/// ## Custom Type Path
///
/// The default path is `module_path!()` followed by the type name. It can be
/// overridden at the type level:
///
/// ```rust, ignore
/// #[derive(Reflect)]
/// #[reflect(type_path = "shop::Shoe")]
/// struct Shoe { /* ... */ }
/// ```
///
/// ## Structs
///
/// ### Bases
///
/// A field marked `base` is flattened: its fields become fields of the outer
/// type, in front of the outer type's own fields. The base type must itself be
/// a derived struct. Fields of an earlier base win over a later one, and own
/// fields win over every base.
///
/// ```rust, ignore
/// #[derive(Reflect)]
/// struct Named {
///     name: String,
/// }
///
/// #[derive(Reflect)]
/// struct Shoe {
///     #[reflect(base)]
///     named: Named,
///     size: u32,
/// }
/// ```
///
/// ### Constructor Fields
///
/// Some types take their values from a constructor whose parameters differ
/// from the declared fields. `constructor` lists those parameters with their
/// types. They are added to the resolved fields after bases and own fields,
/// replacing a field of the same name.
///
/// ```rust, ignore
/// #[derive(Reflect)]
/// #[reflect(constructor(size = String, extra = Vec<u8>))]
/// struct Built { /* ... */ }
/// ```
///
/// ## Enums
///
/// Only unit variants are allowed. Each variant has a tag, the value it is
/// written as and read from. In order of precedence the tag is:
///
/// 1. `#[reflect(tag = "text")]`, `#[reflect(tag = 3)]` or `#[reflect(tag = -3)]`.
/// 2. The explicit discriminant, `Broad = 2`.
/// 3. The variant name, transformed by the type-level `rename_all`.
/// 4. The variant name.
///
/// ```rust, ignore
/// #[derive(Reflect)]
/// #[reflect(rename_all = "kebab-case")]
/// enum Fit {
///     Narrow,             // "narrow"
///     ExtraWide,          // "extra-wide"
///     #[reflect(tag = "std")]
///     Standard,           // "std"
/// }
/// ```
///
/// `rename_all` accepts `lowercase`, `UPPERCASE`, `snake_case`,
/// `SCREAMING_SNAKE_CASE` and `kebab-case`. Tags must be unique.
///
/// ## Unions
///
/// `#[reflect(union)]` turns an enum of single-field tuple variants into a
/// tagless union. Alternatives are tried in declaration order, the first one
/// that accepts the input wins. At least two alternatives are required.
///
/// ```rust, ignore
/// #[derive(Reflect)]
/// #[reflect(union)]
/// enum Amount {
///     Float(f64),
///     Int(i64),
///     Text(String),
/// }
/// ```
#[proc_macro_derive(Reflect, attributes(reflect))]
pub fn derive_reflect(input: TokenStream) -> TokenStream {
    let ast = parse_macro_input!(input as DeriveInput);
    impls::match_reflect_impls(ast)
}
