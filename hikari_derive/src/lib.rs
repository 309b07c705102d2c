use syn::{parse_macro_input, DeriveInput};

mod common;
mod derive_math_op;
mod derive_trait;

// All derives expect a non-generic struct with named fields. Scalar ops are
// implemented for f64 and componentwise ops for the type itself.

macro_rules! derive {
    ($tr:ident $fn_name:ident $module:ident $impl_fn:ident) => {
        #[proc_macro_derive($tr)]
        pub fn $fn_name(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
            // Parse the input tokens into a syntax tree.
            let input = parse_macro_input!(input as DeriveInput);
            proc_macro::TokenStream::from($module::$impl_fn(input, stringify!($tr)))
        }
    };
}

derive!(Add add derive_math_op vec_op);
derive!(Sub sub derive_math_op vec_op);
derive!(Mul mul derive_math_op vec_op);
derive!(AddAssign add_assign derive_math_op vec_op);
derive!(MulScalar mul_scalar derive_math_op vec_op);
derive!(DivScalar div_scalar derive_math_op vec_op);
derive!(Neg neg derive_math_op neg);
derive!(Index index derive_trait index);
derive!(AbsDiffEq abs_diff_eq derive_trait abs_diff_eq);
derive!(RelativeEq relative_eq derive_trait relative_eq);
