use proc_macro2::TokenStream;
use quote::{quote, quote_spanned};
use syn::spanned::Spanned;
use syn::{DeriveInput, Field, Ident};

use crate::common::{named_fields, per_component_tokens, TraitInfo};

pub fn vec_op(input: DeriveInput, full_name: &str) -> TokenStream {
    let TraitInfo {
        ident: trait_ident,
        trait_fn_ident,
        op_trait_ident,
        op_ident,
        is_scalar_op,
        is_assign_op,
    } = TraitInfo::new(full_name);

    let fields = match named_fields(&input, full_name) {
        Ok(fields) => fields,
        Err(why) => return why.to_compile_error(),
    };
    let type_ident = &input.ident;

    // Scalar ops always take a f64
    let other_tokens = if is_scalar_op {
        quote! {f64}
    } else {
        quote! {#type_ident}
    };

    let opped_components = per_component_tokens(
        fields,
        &|c: &Option<Ident>, f: &Field| {
            let other = if is_scalar_op {
                quote!(other)
            } else {
                quote!(other.#c)
            };
            quote_spanned! {f.span() =>
                #c: ::std::ops::#op_trait_ident::#op_ident(self.#c, #other)
            }
        },
        &|recurse| quote!(#(#recurse,)*),
    );

    if is_assign_op {
        quote! {
            impl ::std::ops::#trait_ident<#other_tokens> for #type_ident {
                #[inline]
                fn #trait_fn_ident(&mut self, other: #other_tokens) {
                    *self = Self {
                        #opped_components
                    };
                }
            }
        }
    } else {
        quote! {
            impl ::std::ops::#trait_ident<#other_tokens> for #type_ident {
                type Output = Self;

                #[inline]
                fn #trait_fn_ident(self, other: #other_tokens) -> Self {
                    Self {
                        #opped_components
                    }
                }
            }
        }
    }
}

pub fn neg(input: DeriveInput, full_name: &str) -> TokenStream {
    let fields = match named_fields(&input, full_name) {
        Ok(fields) => fields,
        Err(why) => return why.to_compile_error(),
    };
    let type_ident = &input.ident;

    let negated_components = per_component_tokens(
        fields,
        &|c: &Option<Ident>, f: &Field| quote_spanned! {f.span() => #c: ::std::ops::Neg::neg(self.#c) },
        &|recurse| quote!(#(#recurse,)*),
    );

    quote! {
        impl ::std::ops::Neg for #type_ident {
            type Output = Self;

            #[inline]
            fn neg(self) -> Self {
                Self {
                    #negated_components
                }
            }
        }
    }
}
