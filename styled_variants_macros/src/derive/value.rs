//! Code generation for `#[derive(VariantValue)]`.

use proc_macro2::TokenStream;
use quote::quote;
use syn::ext::IdentExt;
use syn::{Data, DeriveInput, Fields};

use super::crate_path;
use super::parse::{parse_container_attrs, parse_member_attrs};
use super::rename::RenameRule;

pub(crate) fn expand(input: &DeriveInput) -> syn::Result<TokenStream> {
    let Data::Enum(data) = &input.data else {
        return Err(syn::Error::new_spanned(
            &input.ident,
            "VariantValue can only be derived for enums",
        ));
    };
    let attrs = parse_container_attrs(&input.attrs)?;
    let krate = crate_path::resolve(attrs.crate_path.as_ref());
    let rule = attrs.rename_all.unwrap_or(RenameRule::Kebab);

    let mut arms = Vec::with_capacity(data.variants.len());
    for variant in &data.variants {
        if !matches!(variant.fields, Fields::Unit) {
            return Err(syn::Error::new_spanned(
                &variant.fields,
                "VariantValue variants must not carry fields",
            ));
        }
        let member = parse_member_attrs(&variant.attrs)?;
        if member.skip {
            return Err(syn::Error::new_spanned(
                &variant.ident,
                "`skip` is only supported on VariantProps fields",
            ));
        }
        let ident = &variant.ident;
        let key = member
            .rename
            .unwrap_or_else(|| rule.apply(&ident.unraw().to_string()));
        arms.push(quote! { Self::#ident => #key });
    }

    let ident = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();
    Ok(quote! {
        impl #impl_generics ::core::convert::AsRef<str> for #ident #ty_generics #where_clause {
            fn as_ref(&self) -> &str {
                match *self {
                    #(#arms,)*
                }
            }
        }

        impl #impl_generics ::core::convert::From<#ident #ty_generics> for #krate::VariantValue #where_clause {
            fn from(value: #ident #ty_generics) -> Self {
                Self::Str(::core::convert::AsRef::<str>::as_ref(&value).to_owned())
            }
        }

        impl #impl_generics ::core::convert::From<&#ident #ty_generics> for #krate::VariantValue #where_clause {
            fn from(value: &#ident #ty_generics) -> Self {
                Self::Str(::core::convert::AsRef::<str>::as_ref(value).to_owned())
            }
        }

        impl #impl_generics ::core::convert::From<#ident #ty_generics> for #krate::PropValue #where_clause {
            fn from(value: #ident #ty_generics) -> Self {
                Self::Str(::core::convert::AsRef::<str>::as_ref(&value).to_owned())
            }
        }

        impl #impl_generics ::core::convert::From<&#ident #ty_generics> for #krate::PropValue #where_clause {
            fn from(value: &#ident #ty_generics) -> Self {
                Self::Str(::core::convert::AsRef::<str>::as_ref(value).to_owned())
            }
        }
    })
}
