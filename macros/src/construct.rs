use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::Expr;

/// Expansion of an instrumentation statement while the gate is closed
///
/// The arguments must still type-check (including the `Render` bound) so toggling the gate never
/// breaks a build, but they sit behind `if false` and are never evaluated.
pub(crate) fn disabled<'a>(exprs: impl IntoIterator<Item = &'a Expr>) -> TokenStream2 {
    let exprs = exprs.into_iter();
    quote!({
        if false {
            #(dbgout::export::check(&(#exprs));)*
        }
    })
}

/// A call-site `static` holding file name and line number, both known at expansion time
///
/// Being a `static` (and not a local) places it in read-only storage (`.rodata`, i.e. flash on
/// most microcontrollers) instead of RAM.
pub(crate) fn location() -> TokenStream2 {
    quote!(
        static __DBGOUT_LOCATION: dbgout::export::Location = dbgout::export::Location::new(
            dbgout::export::basename(::core::file!()),
            ::core::line!(),
        );
    )
}

/// A call-site `static` holding just the line number
pub(crate) fn line() -> TokenStream2 {
    quote!(
        static __DBGOUT_LINE: u32 = ::core::line!();
    )
}

/// Items and an expression that yield the name of the enclosing function
///
/// Only the compiler knows the enclosing function, so the name is recovered at run time from the
/// type name of a marker `fn` nested in it.
pub(crate) fn function_name() -> (TokenStream2, TokenStream2) {
    let item = quote!(
        fn __dbgout_marker() {}
    );
    let expr = quote!(dbgout::export::function_name(dbgout::export::type_name_of(
        __dbgout_marker
    )));
    (item, expr)
}
