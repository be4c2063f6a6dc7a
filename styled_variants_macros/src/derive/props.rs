//! Code generation for `#[derive(VariantProps)]`.

use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::ext::IdentExt;
use syn::{Data, DeriveInput, Fields};

use super::crate_path;
use super::parse::{parse_container_attrs, parse_member_attrs};
use super::rename::RenameRule;
use super::type_utils::option_inner;

pub(crate) fn expand(input: &DeriveInput) -> syn::Result<TokenStream> {
    let Data::Struct(data) = &input.data else {
        return Err(syn::Error::new_spanned(
            &input.ident,
            "VariantProps can only be derived for structs",
        ));
    };
    let Fields::Named(fields) = &data.fields else {
        return Err(syn::Error::new_spanned(
            data.struct_token,
            "VariantProps requires named fields",
        ));
    };
    let attrs = parse_container_attrs(&input.attrs)?;
    let krate = crate_path::resolve(attrs.crate_path.as_ref());
    let rule = attrs.rename_all.unwrap_or(RenameRule::Camel);

    let mut writes = Vec::with_capacity(fields.named.len());
    for field in &fields.named {
        let member = parse_member_attrs(&field.attrs)?;
        if member.skip {
            continue;
        }
        let Some(ident) = field.ident.as_ref() else {
            continue;
        };
        let key = member
            .rename
            .unwrap_or_else(|| rule.apply(&ident.unraw().to_string()));
        writes.push(if option_inner(&field.ty).is_some() {
            quote! {
                if let ::core::option::Option::Some(value) = &self.#ident {
                    props.insert(#key, #krate::PropValue::from(::core::clone::Clone::clone(value)));
                }
            }
        } else {
            quote! {
                props.insert(#key, #krate::PropValue::from(::core::clone::Clone::clone(&self.#ident)));
            }
        });
    }

    let props_arg = if writes.is_empty() {
        format_ident!("_props")
    } else {
        format_ident!("props")
    };
    let ident = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();
    Ok(quote! {
        impl #impl_generics #krate::VariantProps for #ident #ty_generics #where_clause {
            fn write_props(&self, #props_arg: &mut #krate::Props) {
                #(#writes)*
            }
        }
    })
}
