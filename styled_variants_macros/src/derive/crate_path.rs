//! Crate path resolution for dependency aliasing support.
//!
//! Converts the optional `#[variant(crate = "...")]` attribute value into a
//! `TokenStream` that replaces hardcoded `::styled_variants` paths in
//! generated code.

use proc_macro2::TokenStream;
use quote::quote;

/// Resolve the crate path, defaulting to `::styled_variants`.
pub(crate) fn resolve(crate_path: Option<&syn::Path>) -> TokenStream {
    crate_path.map_or_else(|| quote! { ::styled_variants }, |path| quote! { #path })
}
