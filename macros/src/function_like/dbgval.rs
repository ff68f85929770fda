use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::{format_ident, quote};
use syn::parse_macro_input;

use crate::{construct, Config};

use self::args::Args;

mod args;

pub(crate) fn expand(args: TokenStream, config: Config) -> TokenStream {
    let args = parse_macro_input!(args as Args);
    codegen(&args, config).into()
}

fn codegen(args: &Args, config: Config) -> TokenStream2 {
    let exprs = args.exprs.iter().collect::<Vec<_>>();

    if !config.enabled {
        return construct::disabled(exprs);
    }

    let patterns = (0..exprs.len())
        .map(|i| format_ident!("arg{}", i))
        .collect::<Vec<_>>();

    let pairs = exprs
        .iter()
        .zip(&patterns)
        .enumerate()
        .map(|(i, (expr, pattern))| {
            let separator = if i == 0 {
                quote!()
            } else {
                quote!(dbgout::export::separator();)
            };
            quote!(
                #separator
                dbgout::export::pair(::core::stringify!(#expr), #pattern);
            )
        })
        .collect::<Vec<_>>();

    // borrow every value once, left to right, before anything is written
    quote!({
        match (#(&(#exprs),)*) {
            (#(#patterns,)*) => {
                #(#pairs)*
                dbgout::export::newline();
            }
        }
    })
}
