//! Token-level code generation for one schema method.
//!
//! Each schema method becomes one source file holding, per version, a
//! request descriptor struct and its transmission function. Tokens are
//! assembled here and canonicalized by [`crate::output`].

mod call;
mod descriptor;

use proc_macro2::TokenStream;
use quote::quote;

use crate::naming::pascal_case;
use crate::schema::{Interface, Method, Parameter, VersionedMethod};

/// A parameter left out of generation because its schema type tag is
/// outside the mapping table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedParam {
    pub interface: String,
    pub method: String,
    pub version: u32,
    pub param: String,
    pub raw_type: String,
}

impl std::fmt::Display for SkippedParam {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}/{} v{}: parameter `{}` has unmapped type `{}`",
            self.interface, self.method, self.version, self.param, self.raw_type
        )
    }
}

/// Parameters of one method version, split by how they are emitted.
struct Partition<'a> {
    /// Mapped and non-optional: always transmitted.
    required: Vec<&'a Parameter>,
    /// Mapped and optional: transmitted only when set.
    optional: Vec<&'a Parameter>,
    /// Unmapped: excluded from the descriptor entirely.
    skipped: Vec<&'a Parameter>,
}

fn partition(versioned: &VersionedMethod) -> Partition<'_> {
    let mut split = Partition {
        required: Vec::new(),
        optional: Vec::new(),
        skipped: Vec::new(),
    };
    for param in versioned.params.values() {
        match (param.ty, param.optional) {
            (None, _) => split.skipped.push(param),
            (Some(_), false) => split.required.push(param),
            (Some(_), true) => split.optional.push(param),
        }
    }
    split
}

/// Generates the full source file for one method: every version's
/// descriptor and transmission function, preceded by a module doc.
///
/// Returns the token stream and the parameters that were skipped because
/// their type tags are unmapped.
pub fn generate_method_file(
    interface: &Interface,
    method: &Method,
) -> (TokenStream, Vec<SkippedParam>) {
    let module_doc = format!(
        " Generated request descriptors for `{}/{}`.",
        interface.name, method.name
    );
    let mut items = TokenStream::new();
    let mut skipped = Vec::new();

    for (&version, versioned) in &method.versions {
        let split = partition(versioned);
        for param in &split.skipped {
            skipped.push(SkippedParam {
                interface: interface.name.clone(),
                method: method.name.clone(),
                version,
                param: param.name.clone(),
                raw_type: param.raw_type.clone(),
            });
        }
        let descriptor = descriptor::generate(interface, method, version, &split);
        let transmit = call::generate(interface, method, version, versioned, &split);
        items.extend(quote! {
            #descriptor
            #transmit
        });
    }

    let file = quote! {
        #![doc = #module_doc]

        use steam_webapi_core::{Connection, Parameters, WebApiError};

        #items
    };
    (file, skipped)
}

/// Type name for one method version, e.g. `GetPlayerSummariesV2`.
fn descriptor_name(method: &Method, version: u32) -> String {
    format!("{}V{version}", pascal_case(&method.name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{ApiModel, DuplicatePolicy, ingest};

    fn model(doc: &str) -> ApiModel {
        ApiModel::build(&ingest(doc).unwrap(), DuplicatePolicy::default()).unwrap()
    }

    #[test]
    fn unmapped_parameters_are_reported_not_emitted() {
        let model = model(
            r#"{"apilist":{"interfaces":[{"name":"ITest","methods":[
                {"name":"DoThing","version":1,"httpmethod":"GET","parameters":[
                    {"name":"good","type":"uint32","optional":false,"description":null},
                    {"name":"weird","type":"uint16","optional":false,"description":null}
                ]}
            ]}]}}"#,
        );
        let interface = &model.interfaces["ITest"];
        let (tokens, skipped) = generate_method_file(interface, &interface.methods["DoThing"]);
        let code = tokens.to_string();
        assert!(code.contains("Good"));
        assert!(!code.contains("Weird"));
        assert_eq!(skipped.len(), 1);
        assert_eq!(skipped[0].param, "weird");
        assert_eq!(skipped[0].raw_type, "uint16");
    }

    #[test]
    fn all_versions_share_one_file() {
        let model = model(
            r#"{"apilist":{"interfaces":[{"name":"ITest","methods":[
                {"name":"DoThing","version":1,"httpmethod":"GET","parameters":[]},
                {"name":"DoThing","version":2,"httpmethod":"GET","parameters":[]}
            ]}]}}"#,
        );
        let interface = &model.interfaces["ITest"];
        let (tokens, _) = generate_method_file(interface, &interface.methods["DoThing"]);
        let code = tokens.to_string();
        assert!(code.contains("DoThingV1"));
        assert!(code.contains("DoThingV2"));
    }
}
