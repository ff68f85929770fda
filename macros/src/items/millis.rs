use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{parse_macro_input, Expr};

use crate::Config;

pub(crate) fn expand(input: TokenStream, config: Config) -> TokenStream {
    let expr = parse_macro_input!(input as Expr);
    codegen(&expr, config).into()
}

fn codegen(expr: &Expr, config: Config) -> TokenStream2 {
    let export = config.enabled.then(|| {
        quote!(
            #[unsafe(export_name = "_dbgout_millis")]
        )
    });

    // the counter is read by `dbgtime!`; with the gate closed the function is dead code
    quote!(
        const _: () = {
            #export
            #[allow(dead_code)]
            fn dbgout_millis() -> u64 {
                dbgout::export::into_millis(#expr)
            }
        };
    )
}
