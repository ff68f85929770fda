use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{parse_macro_input, Expr};

pub(crate) fn expand(args: TokenStream) -> TokenStream {
    let expr = parse_macro_input!(args as Expr);
    codegen(&expr).into()
}

// NOTE independent of the gate: a `Pair` only produces output when handed to another macro
fn codegen(expr: &Expr) -> TokenStream2 {
    quote!(dbgout::export::Pair::new(::core::stringify!(#expr), &(#expr)))
}
