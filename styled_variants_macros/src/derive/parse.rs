//! Parsing of `#[variant(...)]` attributes.

use syn::meta::ParseNestedMeta;
use syn::{Attribute, LitStr};

use super::rename::RenameRule;

/// Attributes on the deriving enum or struct.
#[derive(Default)]
pub(crate) struct ContainerAttrs {
    pub rename_all: Option<RenameRule>,
    pub crate_path: Option<syn::Path>,
}

/// Attributes on an enum variant or struct field.
#[derive(Default)]
pub(crate) struct MemberAttrs {
    pub rename: Option<String>,
    pub skip: bool,
}

/// Iterate all `#[variant(...)]` attributes once and apply a callback.
fn parse_variant_attrs<F>(attrs: &[Attribute], mut f: F) -> syn::Result<()>
where
    F: FnMut(&ParseNestedMeta) -> syn::Result<()>,
{
    for attr in attrs.iter().filter(|a| a.path().is_ident("variant")) {
        attr.parse_nested_meta(|meta| f(&meta))?;
    }
    Ok(())
}

fn lit_str(meta: &ParseNestedMeta) -> syn::Result<LitStr> {
    meta.value()?.parse::<LitStr>()
}

fn unknown(meta: &ParseNestedMeta) -> syn::Error {
    let key = meta
        .path
        .get_ident()
        .map_or_else(|| String::from("?"), ToString::to_string);
    meta.error(format!("unknown variant attribute `{key}`"))
}

pub(crate) fn parse_container_attrs(attrs: &[Attribute]) -> syn::Result<ContainerAttrs> {
    let mut out = ContainerAttrs::default();
    parse_variant_attrs(attrs, |meta| {
        if meta.path.is_ident("rename_all") {
            let s = lit_str(meta)?;
            out.rename_all = Some(RenameRule::parse(&s.value(), s.span())?);
            Ok(())
        } else if meta.path.is_ident("crate") {
            out.crate_path = Some(lit_str(meta)?.parse::<syn::Path>()?);
            Ok(())
        } else {
            Err(unknown(meta))
        }
    })?;
    Ok(out)
}

pub(crate) fn parse_member_attrs(attrs: &[Attribute]) -> syn::Result<MemberAttrs> {
    let mut out = MemberAttrs::default();
    parse_variant_attrs(attrs, |meta| {
        if meta.path.is_ident("rename") {
            out.rename = Some(lit_str(meta)?.value());
            Ok(())
        } else if meta.path.is_ident("skip") {
            out.skip = true;
            Ok(())
        } else {
            Err(unknown(meta))
        }
    })?;
    Ok(out)
}
