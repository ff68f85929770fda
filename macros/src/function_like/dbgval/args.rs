use proc_macro2::Span;
use syn::{
    parse::{self, Parse, ParseStream},
    punctuated::Punctuated,
    Expr, Token,
};

/// Largest number of expressions a single `dbgval!` accepts
pub(crate) const MAX_EXPRS: usize = 10;

pub(crate) struct Args {
    pub(crate) exprs: Punctuated<Expr, Token![,]>,
}

impl Parse for Args {
    fn parse(input: ParseStream) -> parse::Result<Self> {
        let exprs = Punctuated::<Expr, Token![,]>::parse_terminated(input)?;

        if exprs.is_empty() {
            return Err(syn::Error::new(
                Span::call_site(),
                "`dbgval!` expects at least one expression",
            ));
        }

        if let Some(extra) = exprs.iter().nth(MAX_EXPRS) {
            return Err(syn::Error::new_spanned(
                extra,
                format!("`dbgval!` accepts at most {} expressions", MAX_EXPRS),
            ));
        }

        Ok(Self { exprs })
    }
}
