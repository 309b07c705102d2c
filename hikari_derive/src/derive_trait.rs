use proc_macro2::TokenStream;
use quote::{quote, quote_spanned};
use syn::spanned::Spanned;
use syn::{DeriveInput, Field, Ident};

use crate::common::{named_fields, per_component_tokens};

pub fn index(input: DeriveInput, name: &str) -> TokenStream {
    let fields = match named_fields(&input, name) {
        Ok(fields) => fields,
        Err(why) => return why.to_compile_error(),
    };
    let type_ident = &input.ident;

    // Index needs a single output type so all components have to match
    let output_type = match fields.named.first() {
        Some(f) => &f.ty,
        None => {
            return syn::Error::new_spanned(type_ident, "Derive 'Index': Expected components")
                .to_compile_error()
        }
    };
    let output_str = quote!(#output_type).to_string();
    for f in fields.named.iter() {
        let ty = &f.ty;
        if quote!(#ty).to_string() != output_str {
            return syn::Error::new(
                f.span(),
                "Derive 'Index': All components should have the same type",
            )
            .to_compile_error();
        }
    }

    let match_tokens = fields.named.iter().enumerate().map(|(i, f)| {
        let name = &f.ident;
        // Use correct field span to get potential error on correct line
        quote_spanned! {f.span() =>
            #i => &self.#name
        }
    });

    quote! {
        impl ::std::ops::Index<usize> for #type_ident {
            type Output = #output_type;

            fn index(&self, component: usize) -> &Self::Output {
                match component {
                    #(#match_tokens,)*
                    _ => {
                        panic!("Component {} is out of bounds", component);
                    }
                }
            }
        }
    }
}

pub fn abs_diff_eq(input: DeriveInput, name: &str) -> TokenStream {
    let fields = match named_fields(&input, name) {
        Ok(fields) => fields,
        Err(why) => return why.to_compile_error(),
    };
    let type_ident = &input.ident;

    let component_eqs = per_component_tokens(
        fields,
        &|c: &Option<Ident>, f: &Field| {
            quote_spanned! {f.span() =>
                ::approx::AbsDiffEq::abs_diff_eq(&self.#c, &other.#c, epsilon)
            }
        },
        &|recurse| quote!(#(#recurse)&&*),
    );

    quote! {
        impl ::approx::AbsDiffEq for #type_ident {
            type Epsilon = f64;

            fn default_epsilon() -> f64 {
                <f64 as ::approx::AbsDiffEq>::default_epsilon()
            }

            fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
                #component_eqs
            }
        }
    }
}

pub fn relative_eq(input: DeriveInput, name: &str) -> TokenStream {
    let fields = match named_fields(&input, name) {
        Ok(fields) => fields,
        Err(why) => return why.to_compile_error(),
    };
    let type_ident = &input.ident;

    let component_eqs = per_component_tokens(
        fields,
        &|c: &Option<Ident>, f: &Field| {
            quote_spanned! {f.span() =>
                ::approx::RelativeEq::relative_eq(&self.#c, &other.#c, epsilon, max_relative)
            }
        },
        &|recurse| quote!(#(#recurse)&&*),
    );

    quote! {
        impl ::approx::RelativeEq for #type_ident {
            fn default_max_relative() -> f64 {
                <f64 as ::approx::RelativeEq>::default_max_relative()
            }

            fn relative_eq(&self, other: &Self, epsilon: f64, max_relative: f64) -> bool {
                #component_eqs
            }
        }
    }
}
