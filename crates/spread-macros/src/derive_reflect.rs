//! Implementation of the `#[derive(Reflect)]` macro.

use std::collections::HashSet;

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{Data, DeriveInput, Field, Fields, Visibility, parse_macro_input};

use crate::attrs::{FieldAttrs, TypeAttrs};

pub fn derive_reflect_impl(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match derive_reflect_inner(&input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

fn derive_reflect_inner(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let name = &input.ident;
    let attrs = TypeAttrs::from_attrs(&input.attrs)?;

    let type_name = attrs.name.clone().unwrap_or_else(|| name.to_string());
    let properties = collect_properties(input)?;

    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let value_impl = if attrs.value {
        quote! {
            impl #impl_generics ::spread_core::Property for #name #ty_generics #where_clause {}
        }
    } else {
        quote! {}
    };

    Ok(quote! {
        impl #impl_generics ::spread_core::Introspect for #name #ty_generics #where_clause {
            fn type_name() -> &'static str {
                #type_name
            }

            fn properties() -> ::std::vec::Vec<::spread_core::PropertyDescriptor> {
                ::std::vec![#(#properties),*]
            }
        }

        #value_impl
    })
}

/// Fields of the struct, in declaration order.
fn struct_fields(input: &DeriveInput) -> syn::Result<Vec<&Field>> {
    match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => Ok(fields.named.iter().collect()),
            Fields::Unit => Ok(Vec::new()),
            Fields::Unnamed(fields) => Err(syn::Error::new_spanned(
                fields,
                "Reflect can only be derived for structs with named fields",
            )),
        },
        Data::Enum(data) => Err(syn::Error::new_spanned(
            &data.enum_token,
            "Reflect can only be derived for structs",
        )),
        Data::Union(data) => Err(syn::Error::new_spanned(
            &data.union_token,
            "Reflect can only be derived for structs",
        )),
    }
}

/// Collect property descriptors from struct fields.
fn collect_properties(input: &DeriveInput) -> syn::Result<Vec<TokenStream2>> {
    let mut properties = Vec::new();
    let mut seen = HashSet::new();

    for field in struct_fields(input)? {
        let field_attrs = FieldAttrs::from_attrs(&field.attrs)?;
        if field_attrs.skip {
            continue;
        }

        let Some(field_name) = field.ident.as_ref() else {
            continue;
        };

        // Public fields are readable and writable unless narrowed explicitly
        let (get, set) = if field_attrs.is_explicit() {
            (
                field_attrs.get,
                field_attrs.set || field_attrs.set_with.is_some(),
            )
        } else if matches!(field.vis, Visibility::Public(_)) {
            (true, true)
        } else if field_attrs.name.is_some() {
            return Err(syn::Error::new_spanned(
                field_name,
                "`name` on a private field needs `get`, `set` or `set_with`",
            ));
        } else {
            continue;
        };
        let prop_name = field_attrs
            .name
            .clone()
            .unwrap_or_else(|| field_name.to_string());

        if !seen.insert(prop_name.clone()) {
            return Err(syn::Error::new_spanned(
                field_name,
                format!("duplicate property name `{prop_name}`"),
            ));
        }

        let field_ty = &field.ty;

        let getter = if get {
            quote! {
                let descriptor = descriptor.with_getter(|obj: &dyn ::core::any::Any| {
                    let this = obj
                        .downcast_ref::<Self>()
                        .ok_or_else(::spread_core::AccessError::receiver::<Self>)?;
                    ::core::result::Result::Ok(::spread_core::PropertyValue::new(
                        ::core::clone::Clone::clone(&this.#field_name),
                    ))
                });
            }
        } else {
            quote! {}
        };

        let assign = match &field_attrs.set_with {
            Some(path) => quote! {
                #path(this, value).map_err(::spread_core::AccessError::rejected)?;
            },
            None => quote! {
                this.#field_name = value;
            },
        };

        let setter = if set {
            quote! {
                let descriptor = descriptor.with_setter(
                    |obj: &mut dyn ::core::any::Any, value: ::spread_core::PropertyValue| {
                        let this = obj
                            .downcast_mut::<Self>()
                            .ok_or_else(::spread_core::AccessError::receiver::<Self>)?;
                        let value = <#field_ty as ::spread_core::Property>::from_value(value)?;
                        #assign
                        ::core::result::Result::Ok(())
                    },
                );
            }
        } else {
            quote! {}
        };

        properties.push(quote! {
            {
                let descriptor = ::spread_core::PropertyDescriptor::new::<#field_ty>(#prop_name);
                #getter
                #setter
                descriptor
            }
        });
    }

    Ok(properties)
}
