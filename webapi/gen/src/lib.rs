//! Generates typed Rust clients from the Steam Web API's self-describing
//! schema.
//!
//! The service's `GetSupportedAPIList` endpoint enumerates every interface,
//! method, version and parameter it supports. This crate turns that document
//! into source files: per (interface, method, version), a request descriptor
//! struct plus a transmission function that collects the descriptor's fields
//! into a [`steam_webapi_core::Parameters`] set and sends it over a
//! [`steam_webapi_core::Connection`].
//!
//! The pipeline:
//!
//! 1. [`fetch`] — obtain the schema JSON (live endpoint or local file)
//! 2. [`schema`] — decode it and derive a model keyed for deterministic
//!    traversal, with the reserved `key` parameter folded into a
//!    `requires_key` flag
//! 3. [`codegen`] — emit tokens per method: descriptors and `call` fns
//! 4. [`output`] — re-parse with `syn`, canonicalize with `prettyplease`,
//!    write atomically, one directory per interface and one file per method
//!
//! Two runs over the same schema produce byte-identical trees.

pub mod codegen;
pub mod errors;
pub mod fetch;
pub mod naming;
pub mod output;
pub mod schema;
pub mod types;

use std::path::Path;

pub use errors::GeneratorError;
pub use output::GenerationSummary;

/// Runs the whole pipeline over an already-loaded schema document.
///
/// ## Arguments
///
/// * `document` - raw `GetSupportedAPIList` JSON
/// * `out_dir` - root of the generated tree
/// * `policy` - what to do when the schema repeats a name
/// * `dry_run` - generate and validate without writing
///
/// ## Errors
///
/// Any decode, duplicate, emission or write failure aborts the run; no
/// partially generated tree is reported as success.
pub fn generate_to(
    document: &str,
    out_dir: &Path,
    policy: schema::DuplicatePolicy,
    dry_run: bool,
) -> Result<GenerationSummary, GeneratorError> {
    let root = schema::ingest(document)?;
    let model = schema::ApiModel::build(&root, policy)?;
    output::generate_and_write_all(&model, out_dir, dry_run)
}
