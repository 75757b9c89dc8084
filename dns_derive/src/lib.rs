// proc-macro crate: derives for the DNS wire-format structures and enums.
use proc_macro::TokenStream;
use syn::{parse_macro_input, DeriveInput};

mod dns_struct;
use dns_struct::dns_derive;

mod dns_enum;
use dns_enum::dns_enum;

/// Derives `Wire` for a struct by calling `to_network_bytes`/`from_network_bytes`
/// on each field in declaration order.
#[proc_macro_derive(DnsStruct)]
pub fn dns_macro_length(input: TokenStream) -> TokenStream {
    let ast = parse_macro_input!(input as DeriveInput);
    dns_derive(&ast)
}

/// Derives `Default`, `TryFrom<u8>`, `TryFrom<u16>`, `FromStr` for a closed,
/// unit-only enum with integer-literal discriminants.
#[proc_macro_derive(DnsEnum)]
pub fn tls_macro_enum(input: TokenStream) -> TokenStream {
    let ast = parse_macro_input!(input as DeriveInput);
    dns_enum(&ast)
}

#[cfg(test)]
pub(crate) fn get_derive_input(s: &str) -> DeriveInput {
    syn::parse_str(s).unwrap()
}
