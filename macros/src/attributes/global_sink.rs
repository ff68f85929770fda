use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use proc_macro_error2::{abort, abort_call_site};
use quote::{quote, quote_spanned};
use syn::{parse_macro_input, Fields, ItemStruct};

use crate::Config;

pub(crate) fn expand(args: TokenStream, item: TokenStream, config: Config) -> TokenStream {
    if !args.is_empty() {
        abort_call_site!("`#[global_sink]` attribute takes no arguments")
    }

    let strukt = parse_macro_input!(item as ItemStruct);

    validate(&strukt);

    codegen(&strukt, config).into()
}

fn validate(strukt: &ItemStruct) {
    let is_unit_struct = matches!(strukt.fields, Fields::Unit);

    if !strukt.generics.params.is_empty()
        || strukt.generics.where_clause.is_some()
        || !is_unit_struct
    {
        abort!(
            strukt,
            "struct must be a non-generic unit struct (e.g. `struct S;`)"
        );
    }
}

fn codegen(strukt: &ItemStruct, config: Config) -> TokenStream2 {
    let attrs = &strukt.attrs;
    let ident = &strukt.ident;
    let vis = &strukt.vis;

    // with the gate closed nothing may reach the binary; only check the trait impls
    if !config.enabled {
        let flush_check = config.flush.then(|| {
            quote_spanned!(ident.span()=>
                const _: fn() = <#ident as dbgout::Flush>::flush;
            )
        });

        return quote!(
            #(#attrs)*
            #vis struct #ident;

            const _: fn(&[u8]) = <#ident as dbgout::GlobalSink>::write;
            #flush_check
        );
    }

    let flush = config.flush.then(|| {
        // a missing `Flush` impl is reported on the struct name
        let flush = quote_spanned!(ident.span()=> <#ident as dbgout::Flush>::flush);
        quote!(
            #[inline(never)]
            #[unsafe(no_mangle)]
            fn _dbgout_flush() {
                #flush()
            }
        )
    });

    quote!(
        #(#attrs)*
        #vis struct #ident;

        #[inline(never)]
        #[unsafe(no_mangle)]
        fn _dbgout_write(bytes: &[u8]) {
            <#ident as dbgout::GlobalSink>::write(bytes)
        }

        #flush
    )
}
