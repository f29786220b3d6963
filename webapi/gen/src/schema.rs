//! Schema ingestion: the raw `GetSupportedAPIList` document and the derived
//! model the generator walks.
//!
//! The raw structs mirror the JSON exactly. The derived [`ApiModel`] keys
//! everything by name (and methods by version) in `BTreeMap`s, so every
//! traversal of the model is deterministic without any explicit sorting.

use std::collections::BTreeMap;

use serde::Deserialize;
use strum::{Display, EnumString};

use crate::errors::GeneratorError;
use crate::types::ParamType;

/// Parameter name the service reserves for the API key. It never becomes a
/// descriptor field; its presence flips [`VersionedMethod::requires_key`].
pub const KEY_PARAM: &str = "key";

// --- raw document -----------------------------------------------------------

/// Top-level envelope of the `GetSupportedAPIList` response.
#[derive(Debug, Deserialize)]
pub struct SupportedApiRoot {
    pub apilist: ApiList,
}

#[derive(Debug, Deserialize)]
pub struct ApiList {
    pub interfaces: Vec<InterfaceSpec>,
}

#[derive(Debug, Deserialize)]
pub struct InterfaceSpec {
    pub name: String,
    pub methods: Vec<MethodSpec>,
}

#[derive(Debug, Deserialize)]
pub struct MethodSpec {
    pub name: String,
    pub version: u32,
    pub httpmethod: HttpVerb,
    #[serde(default)]
    pub parameters: Vec<ParameterSpec>,
}

#[derive(Debug, Deserialize)]
pub struct ParameterSpec {
    pub name: String,
    #[serde(rename = "type")]
    pub param_type: String,
    #[serde(default)]
    pub optional: bool,
    pub description: Option<String>,
}

/// HTTP verbs the schema declares. The document only ever carries these two;
/// anything else fails ingestion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Display, EnumString)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE")]
pub enum HttpVerb {
    Get,
    Post,
}

/// Decodes a `GetSupportedAPIList` JSON document.
///
/// ## Errors
///
/// [`GeneratorError::Decode`] when the document does not match the expected
/// shape, including an `httpmethod` outside GET/POST.
pub fn ingest(document: &str) -> Result<SupportedApiRoot, GeneratorError> {
    Ok(serde_json::from_str(document)?)
}

// --- derived model ----------------------------------------------------------

/// How to react when the schema repeats an interface, method version or
/// parameter name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DuplicatePolicy {
    /// Last entry wins. Matches the live service, which has been observed
    /// to repeat entries.
    #[default]
    Overwrite,
    /// Any repeated name fails the run.
    Reject,
}

/// The whole schema, keyed for deterministic traversal.
#[derive(Debug, Default)]
pub struct ApiModel {
    pub interfaces: BTreeMap<String, Interface>,
}

#[derive(Debug)]
pub struct Interface {
    pub name: String,
    pub methods: BTreeMap<String, Method>,
}

#[derive(Debug)]
pub struct Method {
    pub name: String,
    pub versions: BTreeMap<u32, VersionedMethod>,
}

#[derive(Debug)]
pub struct VersionedMethod {
    pub verb: HttpVerb,
    /// True when the schema listed a `key` parameter for this version.
    pub requires_key: bool,
    pub params: BTreeMap<String, Parameter>,
}

#[derive(Debug)]
pub struct Parameter {
    pub name: String,
    /// Type tag as spelled in the schema, kept for diagnostics.
    pub raw_type: String,
    /// Mapped Rust-side type, `None` when the tag is outside the table.
    pub ty: Option<ParamType>,
    pub optional: bool,
    pub description: Option<String>,
}

impl ApiModel {
    /// Builds the derived model from a decoded document.
    ///
    /// The `key` parameter is consumed here: it sets `requires_key` on its
    /// method version and is never stored as a [`Parameter`].
    ///
    /// ## Errors
    ///
    /// [`GeneratorError::Duplicate`] under [`DuplicatePolicy::Reject`] when
    /// any name repeats at any level.
    pub fn build(root: &SupportedApiRoot, policy: DuplicatePolicy) -> Result<Self, GeneratorError> {
        let mut model = ApiModel::default();
        for iface_spec in &root.apilist.interfaces {
            if policy == DuplicatePolicy::Reject && model.interfaces.contains_key(&iface_spec.name)
            {
                return Err(GeneratorError::Duplicate {
                    kind: "interface",
                    name: iface_spec.name.clone(),
                });
            }
            let interface = model
                .interfaces
                .entry(iface_spec.name.clone())
                .or_insert_with(|| Interface {
                    name: iface_spec.name.clone(),
                    methods: BTreeMap::new(),
                });

            for method_spec in &iface_spec.methods {
                let method = interface
                    .methods
                    .entry(method_spec.name.clone())
                    .or_insert_with(|| Method {
                        name: method_spec.name.clone(),
                        versions: BTreeMap::new(),
                    });
                if policy == DuplicatePolicy::Reject
                    && method.versions.contains_key(&method_spec.version)
                {
                    return Err(GeneratorError::Duplicate {
                        kind: "method version",
                        name: format!(
                            "{}/{} v{}",
                            iface_spec.name, method_spec.name, method_spec.version
                        ),
                    });
                }
                let versioned = Self::build_version(iface_spec, method_spec, policy)?;
                method.versions.insert(method_spec.version, versioned);
            }
        }
        Ok(model)
    }

    fn build_version(
        iface_spec: &InterfaceSpec,
        method_spec: &MethodSpec,
        policy: DuplicatePolicy,
    ) -> Result<VersionedMethod, GeneratorError> {
        let mut versioned = VersionedMethod {
            verb: method_spec.httpmethod,
            requires_key: false,
            params: BTreeMap::new(),
        };
        for param_spec in &method_spec.parameters {
            if param_spec.name == KEY_PARAM {
                versioned.requires_key = true;
                continue;
            }
            if policy == DuplicatePolicy::Reject && versioned.params.contains_key(&param_spec.name)
            {
                return Err(GeneratorError::Duplicate {
                    kind: "parameter",
                    name: format!(
                        "{}/{} v{} `{}`",
                        iface_spec.name, method_spec.name, method_spec.version, param_spec.name
                    ),
                });
            }
            versioned.params.insert(
                param_spec.name.clone(),
                Parameter {
                    name: param_spec.name.clone(),
                    raw_type: param_spec.param_type.clone(),
                    ty: ParamType::from_tag(&param_spec.param_type),
                    optional: param_spec.optional,
                    description: param_spec.description.clone(),
                },
            );
        }
        Ok(versioned)
    }
}
