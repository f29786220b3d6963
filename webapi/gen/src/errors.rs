use std::path::PathBuf;

use steam_webapi_core::WebApiError;
use thiserror::Error;

/// Errors produced while turning a schema document into generated source.
#[derive(Error, Debug)]
pub enum GeneratorError {
    /// The schema document is not the expected JSON shape.
    #[error("failed to decode schema document: {0}")]
    Decode(#[from] serde_json::Error),

    /// Fetching the schema from the live service failed.
    #[error("failed to fetch schema: {0}")]
    Fetch(#[from] WebApiError),

    /// Reading a local schema file failed.
    #[error("failed to read schema file {path}: {source}")]
    ReadSchema {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The schema repeats a name and the duplicate policy rejects that.
    #[error("duplicate {kind} `{name}` in schema")]
    Duplicate {
        /// What collided: interface, method version or parameter.
        kind: &'static str,
        /// The colliding name, qualified with its owners.
        name: String,
    },

    /// Emitted source failed to parse back as Rust. Always a generator bug.
    #[error("generated code is not valid Rust: {0}")]
    CodeGen(String),

    /// Writing a generated file failed.
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The command line asked for an impossible combination.
    #[error("invalid configuration: {0}")]
    Config(String),
}
