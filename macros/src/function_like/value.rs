use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::parse_macro_input;

use crate::{construct, Config};

use self::args::Args;

mod args;

/// What is printed in front of the value
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Prefix {
    /// `value`
    Bare,
    /// `[file:line]:\tvalue`
    FileLine,
    /// `[function @ line N]:\tvalue`
    FunctionLine,
    /// `[h:m:s.ms]:\tvalue`
    Elapsed,
}

pub(crate) fn expand(prefix: Prefix, args: TokenStream, config: Config) -> TokenStream {
    let args = parse_macro_input!(args as Args);
    codegen(prefix, &args, config).into()
}

fn codegen(prefix: Prefix, args: &Args, config: Config) -> TokenStream2 {
    let value = &args.value;

    if !config.enabled {
        return construct::disabled([value]);
    }

    match prefix {
        Prefix::Bare => quote!({
            dbgout::export::line(&(#value));
        }),
        Prefix::FileLine => {
            let location = construct::location();
            quote!({
                #location
                dbgout::export::file_line(&__DBGOUT_LOCATION, &(#value));
            })
        }
        Prefix::FunctionLine => {
            let line = construct::line();
            let (marker, function) = construct::function_name();
            quote!({
                #marker
                #line
                dbgout::export::function_line(#function, &__DBGOUT_LINE, &(#value));
            })
        }
        Prefix::Elapsed => quote!({
            dbgout::export::elapsed(&(#value));
        }),
    }
}
