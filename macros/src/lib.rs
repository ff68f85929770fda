//! INTERNAL; DO NOT USE. Please use the `dbgout` crate to access the functionality implemented here

use proc_macro::TokenStream;
use proc_macro_error2::proc_macro_error;

mod attributes;
mod config;
mod construct;
mod function_like;
mod items;

use config::Config;
use function_like::value::Prefix;

#[proc_macro_attribute]
#[proc_macro_error]
pub fn global_sink(args: TokenStream, input: TokenStream) -> TokenStream {
    attributes::global_sink::expand(args, input, Config::from_features())
}

#[proc_macro]
#[proc_macro_error]
pub fn millis(input: TokenStream) -> TokenStream {
    items::millis::expand(input, Config::from_features())
}

// NOTE these could be written using `macro_rules!` but then `file!()` and `line!()` would report
// the location of the `macro_rules!` definition; a proc-macro expands at the call site, which is
// what we want
#[proc_macro]
#[proc_macro_error]
pub fn dbgln(input: TokenStream) -> TokenStream {
    function_like::value::expand(Prefix::Bare, input, Config::from_features())
}

#[proc_macro]
#[proc_macro_error]
pub fn dbgref(input: TokenStream) -> TokenStream {
    function_like::value::expand(Prefix::FileLine, input, Config::from_features())
}

#[proc_macro]
#[proc_macro_error]
pub fn dbgfunc(input: TokenStream) -> TokenStream {
    function_like::value::expand(Prefix::FunctionLine, input, Config::from_features())
}

#[proc_macro]
#[proc_macro_error]
pub fn dbgtime(input: TokenStream) -> TokenStream {
    function_like::value::expand(Prefix::Elapsed, input, Config::from_features())
}

#[proc_macro]
#[proc_macro_error]
pub fn dbgval(input: TokenStream) -> TokenStream {
    function_like::dbgval::expand(input, Config::from_features())
}

#[proc_macro]
#[proc_macro_error]
pub fn pair(input: TokenStream) -> TokenStream {
    function_like::pair::expand(input)
}
