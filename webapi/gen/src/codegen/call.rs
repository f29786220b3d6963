//! Transmission function generation.

use proc_macro2::TokenStream;
use quote::{format_ident, quote};

use super::{Partition, descriptor_name};
use crate::naming::pascal_case;
use crate::schema::{HttpVerb, Interface, Method, VersionedMethod};

/// Generates the `impl` block carrying the transmission function for one
/// method version.
///
/// Required parameters encode unconditionally; optional parameters encode
/// only when their value differs from the type's default. The path keeps
/// the raw schema names, only descriptor identifiers are normalized.
pub(super) fn generate(
    interface: &Interface,
    method: &Method,
    version: u32,
    versioned: &VersionedMethod,
    split: &Partition<'_>,
) -> TokenStream {
    let name = format_ident!("{}", descriptor_name(method, version));
    let path = format!("{}/{}/v{version}/", interface.name, method.name);
    let requires_key = versioned.requires_key;
    let verb = match versioned.verb {
        HttpVerb::Get => format_ident!("get"),
        HttpVerb::Post => format_ident!("post"),
    };

    let fn_doc = format!(
        " Transmits this request as `{} {path}` and returns the raw response body.",
        versioned.verb
    );

    let mut encodes = TokenStream::new();
    for param in &split.required {
        let field = format_ident!("{}", pascal_case(&param.name));
        if let Some(ty) = param.ty {
            encodes.extend(ty.encode_stmt(&param.name, &field));
        }
    }
    for param in &split.optional {
        let field = format_ident!("{}", pascal_case(&param.name));
        if let Some(ty) = param.ty {
            let condition = ty.present_condition(&field);
            let encode = ty.encode_stmt(&param.name, &field);
            encodes.extend(quote! {
                if #condition {
                    #encode
                }
            });
        }
    }

    let params_binding = if encodes.is_empty() {
        quote! { let params = Parameters::new(); }
    } else {
        quote! { let mut params = Parameters::new(); }
    };

    quote! {
        impl #name {
            #[doc = #fn_doc]
            pub async fn call(&self, conn: &Connection) -> Result<Vec<u8>, WebApiError> {
                #params_binding
                #encodes
                conn.#verb(#path, params, #requires_key).await
            }
        }
    }
}
