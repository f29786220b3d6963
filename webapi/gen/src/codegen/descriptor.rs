//! Request descriptor struct generation.

use proc_macro2::TokenStream;
use quote::{format_ident, quote};

use super::{Partition, descriptor_name};
use crate::naming::pascal_case;
use crate::schema::{Interface, Method, Parameter};

/// Placeholder for parameters the schema leaves undescribed.
const NO_DESCRIPTION: &str = "No description provided by Valve.";

/// Generates the descriptor struct for one method version.
///
/// One public field per mapped parameter, named in PascalCase after the
/// schema parameter. Fields default to their type's zero value, which is
/// what the transmission function treats as "unset" for optional
/// parameters.
pub(super) fn generate(
    interface: &Interface,
    method: &Method,
    version: u32,
    split: &Partition<'_>,
) -> TokenStream {
    let name = format_ident!("{}", descriptor_name(method, version));
    let struct_doc = format!(
        " Request descriptor for `{}/{}` version {version}.",
        interface.name, method.name
    );

    let mut fields = TokenStream::new();
    for param in split.required.iter().chain(&split.optional) {
        fields.extend(field_tokens(param));
    }

    quote! {
        #[doc = #struct_doc]
        #[allow(non_snake_case)]
        #[derive(Debug, Clone, Default)]
        pub struct #name {
            #fields
        }
    }
}

fn field_tokens(param: &Parameter) -> TokenStream {
    let ident = format_ident!("{}", pascal_case(&param.name));
    // partition() already dropped unmapped parameters
    let ty = param.ty.map(|t| t.rust_type()).unwrap_or_default();
    let mut doc = match param.description.as_deref() {
        Some(text) if !text.is_empty() => format!(" {text}"),
        _ => format!(" {NO_DESCRIPTION}"),
    };
    if param.optional {
        doc.push_str(" (optional)");
    }
    quote! {
        #[doc = #doc]
        pub #ident: #ty,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{ApiModel, DuplicatePolicy, ingest};

    #[test]
    fn fields_are_pascal_cased_and_typed() {
        let doc = r#"{"apilist":{"interfaces":[{"name":"ISteamUser","methods":[
            {"name":"GetPlayerSummaries","version":2,"httpmethod":"GET","parameters":[
                {"name":"key","type":"string","optional":false,"description":"access key"},
                {"name":"steamids","type":"string","optional":false,"description":"Comma-delimited list of SteamIDs"}
            ]}
        ]}]}}"#;
        let model = ApiModel::build(&ingest(doc).unwrap(), DuplicatePolicy::default()).unwrap();
        let interface = &model.interfaces["ISteamUser"];
        let method = &interface.methods["GetPlayerSummaries"];
        let split = super::super::partition(&method.versions[&2]);
        let code = generate(interface, method, 2, &split).to_string();

        assert!(code.contains("pub struct GetPlayerSummariesV2"));
        assert!(code.contains("pub Steamids : String"));
        assert!(code.contains("Comma-delimited list of SteamIDs"));
        // the key parameter never becomes a field
        assert!(!code.contains("Key :"));
    }

    #[test]
    fn missing_description_gets_placeholder() {
        let doc = r#"{"apilist":{"interfaces":[{"name":"I","methods":[
            {"name":"M","version":1,"httpmethod":"GET","parameters":[
                {"name":"appid","type":"uint32","optional":true,"description":null}
            ]}
        ]}]}}"#;
        let model = ApiModel::build(&ingest(doc).unwrap(), DuplicatePolicy::default()).unwrap();
        let interface = &model.interfaces["I"];
        let method = &interface.methods["M"];
        let split = super::super::partition(&method.versions[&1]);
        let code = generate(interface, method, 1, &split).to_string();
        assert!(code.contains("No description provided by Valve."));
        assert!(code.contains("(optional)"));
        assert!(code.contains("pub Appid : u32"));
    }
}
