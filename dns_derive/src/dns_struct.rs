// helper functions for the derive macro used on DNS structures: generates a
// `Wire` impl that calls to_network_bytes()/from_network_bytes() on each
// field, in declaration order.
use proc_macro::TokenStream;
use quote::quote;
use syn::{Data, DataStruct, DeriveInput};

// verify if the derive macro is applied to a struct
fn get_struct(ast: &DeriveInput) -> &DataStruct {
    if let Data::Struct(struct_token) = &ast.data {
        struct_token
    } else {
        panic!("<{}> is not a struct!", ast.ident);
    }
}

// create the impl methods for trait Wire
pub fn dns_derive(ast: &DeriveInput) -> TokenStream {
    let struct_token = get_struct(&ast);
    let structure_name = &ast.ident;

    let to_method_calls = struct_token.fields.iter().map(|f| {
        let field_name = f.ident.as_ref().unwrap();
        quote! {
            length += crate::wire::Wire::to_network_bytes(&self.#field_name, buffer)?;
        }
    });

    let from_method_calls = struct_token.fields.iter().map(|f| {
        let field_name = f.ident.as_ref().unwrap();
        quote! {
            crate::wire::Wire::from_network_bytes(&mut self.#field_name, buffer)?;
        }
    });

    let new_code = quote! {
        impl crate::wire::Wire for #structure_name {
            fn to_network_bytes(&self, buffer: &mut crate::buffer::Buffer) -> crate::error::DNSResult<usize> {
                let mut length = 0usize;
                #( #to_method_calls)*
                Ok(length)
            }

            fn from_network_bytes(&mut self, buffer: &mut crate::buffer::Buffer) -> crate::error::DNSResult<()> {
                #( #from_method_calls)*
                Ok(())
            }
        }
    };

    TokenStream::from(new_code)
}
