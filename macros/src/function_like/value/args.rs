use syn::{
    parse::{self, Parse, ParseStream},
    Expr, Token,
};

pub(crate) struct Args {
    pub(crate) value: Expr,
}

impl Parse for Args {
    fn parse(input: ParseStream) -> parse::Result<Self> {
        if input.is_empty() {
            return Err(input.error("expected a value to print"));
        }

        let value = input.parse()?;

        // dbgref!(a,)
        if input.peek(Token![,]) {
            let _comma: Token![,] = input.parse()?;
        }

        if !input.is_empty() {
            return Err(input.error(
                "expected a single value; use `dbgval!` to print several expressions",
            ));
        }

        Ok(Self { value })
    }
}

#[cfg(test)]
mod tests {
    use quote::quote;

    use super::*;

    #[test]
    fn single_value() {
        let args: Args = syn::parse2(quote!("msg")).unwrap();
        assert!(matches!(args.value, Expr::Lit(_)));
    }

    #[test]
    fn trailing_comma() {
        assert!(syn::parse2::<Args>(quote!(x + 1,)).is_ok());
    }

    #[test]
    fn rejects_empty() {
        assert!(syn::parse2::<Args>(quote!()).is_err());
    }

    #[test]
    fn rejects_several_values() {
        let err = syn::parse2::<Args>(quote!(a, b)).err().unwrap();
        assert!(err.to_string().contains("dbgval!"));
    }
}
