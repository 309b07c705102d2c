use proc_macro2::{Span, TokenStream};
use std::vec::IntoIter;
use syn::{Data, DeriveInput, Field, Fields, FieldsNamed, Ident};

pub struct TraitInfo {
    /// The trait to implement, e.g. `AddAssign`
    pub ident: Ident,
    /// The trait's method, e.g. `add_assign`
    pub trait_fn_ident: Ident,
    /// The non-assigning trait applied per component, e.g. `Add`
    pub op_trait_ident: Ident,
    /// The method of `op_trait_ident`, e.g. `add`
    pub op_ident: Ident,
    pub is_scalar_op: bool,
    pub is_assign_op: bool,
}

impl TraitInfo {
    pub fn new(full_name: &str) -> Self {
        // *Scalar is our own indicator
        // Check if its present and get the real trait to implement
        let (trait_name, is_scalar_op) = match full_name.strip_suffix("Scalar") {
            Some(name) => (name, true),
            None => (full_name, false),
        };

        let is_assign_op = trait_name.ends_with("Assign");
        let op_trait_name = trait_name.trim_end_matches("Assign");

        Self {
            ident: Ident::new(trait_name, Span::call_site()),
            trait_fn_ident: Ident::new(&snake_case(trait_name), Span::call_site()),
            op_trait_ident: Ident::new(op_trait_name, Span::call_site()),
            op_ident: Ident::new(&snake_case(op_trait_name), Span::call_site()),
            is_scalar_op,
            is_assign_op,
        }
    }
}

fn snake_case(name: &str) -> String {
    name.chars().fold(String::new(), |mut acc, c| {
        if c.is_uppercase() && !acc.is_empty() {
            acc.push('_');
        }
        acc.push(c.to_ascii_lowercase());
        acc
    })
}

/// Returns the named fields of `input` or an error spanning the offending item.
pub fn named_fields<'a>(input: &'a DeriveInput, derive_name: &str) -> syn::Result<&'a FieldsNamed> {
    if !input.generics.params.is_empty() {
        return Err(syn::Error::new_spanned(
            &input.generics,
            format!("Derive '{}': Generic types are not supported", derive_name),
        ));
    }

    match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => Ok(fields),
            _ => Err(syn::Error::new_spanned(
                &input.ident,
                format!("Derive '{}': Expected a struct with named fields", derive_name),
            )),
        },
        Data::Enum(_) | Data::Union(_) => Err(syn::Error::new_spanned(
            &input.ident,
            format!("Derive '{}': Only structs are supported", derive_name),
        )),
    }
}

pub fn per_component_tokens(
    fields: &FieldsNamed,
    component_tokens: &dyn Fn(&Option<Ident>, &Field) -> TokenStream,
    meta_tokens: &dyn Fn(IntoIter<TokenStream>) -> TokenStream,
) -> TokenStream {
    let component_streams = fields
        .named
        .iter()
        .map(|f| {
            let name = &f.ident;
            // Use correct field span to get potential error on correct line
            component_tokens(name, f)
        })
        .collect::<Vec<TokenStream>>();
    meta_tokens(component_streams.into_iter())
}
