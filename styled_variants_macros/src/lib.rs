//! Procedural macros for `styled_variants`.
//!
//! - [`VariantValue`](macro@VariantValue) turns a fieldless enum into a set
//!   of variant keys. Each enum variant converts into
//!   `styled_variants::VariantValue` and `styled_variants::PropValue` as a
//!   string, named in kebab-case unless renamed.
//! - [`VariantProps`](macro@VariantProps) implements
//!   `styled_variants::VariantProps` for a struct of typed props. `Option`
//!   fields are written only when `Some`; prop names default to
//!   lowerCamelCase.
//!
//! Both derives accept `#[variant(crate = "...")]` when the runtime crate is
//! imported under another name.

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

mod derive;

/// Derive string conversions into variant and prop values for an enum.
///
/// Attributes:
/// - `#[variant(rename_all = "...")]` on the enum: one of `lowercase`,
///   `UPPERCASE`, `camelCase`, `PascalCase`, `snake_case`, `kebab-case`,
///   `SCREAMING_SNAKE_CASE`.
/// - `#[variant(rename = "...")]` on an enum variant.
#[proc_macro_derive(VariantValue, attributes(variant))]
pub fn derive_variant_value(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    derive::value::expand(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

/// Derive `styled_variants::VariantProps` for a struct with named fields.
///
/// Attributes:
/// - `#[variant(rename_all = "...")]` on the struct (default `camelCase`).
/// - `#[variant(rename = "...")]` on a field.
/// - `#[variant(skip)]` on a field that is not a prop.
#[proc_macro_derive(VariantProps, attributes(variant))]
pub fn derive_variant_props(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    derive::props::expand(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
