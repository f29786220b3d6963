//! Canonicalization and file output.
//!
//! Emitted token streams are parsed back through `syn` (a parse failure
//! means the generator itself is broken and aborts the run), pretty-printed
//! with `prettyplease` so output bytes never depend on how the tokens were
//! assembled, and written atomically via a temp file and rename.

use std::fs;
use std::path::{Path, PathBuf};

use proc_macro2::TokenStream;

use crate::codegen::{self, SkippedParam};
use crate::errors::GeneratorError;
use crate::naming::pascal_case;
use crate::schema::ApiModel;

/// Notice prepended to every generated file.
const GENERATED_NOTICE: &str =
    "// This code was automatically generated by steam-webapi-gen. Do not edit manually.\n\n";

/// Outcome of one generation run.
#[derive(Debug, Default)]
pub struct GenerationSummary {
    /// Paths written, in emission order.
    pub files_written: Vec<PathBuf>,
    /// Parameters excluded because their schema type is unmapped.
    pub skipped_params: Vec<SkippedParam>,
}

/// Parses generated tokens back as a Rust source file.
///
/// ## Errors
///
/// [`GeneratorError::CodeGen`] when the tokens do not form valid Rust.
pub fn validate_code(tokens: &TokenStream) -> Result<syn::File, GeneratorError> {
    syn::parse2(tokens.clone()).map_err(|err| GeneratorError::CodeGen(err.to_string()))
}

/// Canonicalizes generated tokens into the bytes that land on disk.
pub fn format_code(tokens: &TokenStream) -> Result<String, GeneratorError> {
    let file = validate_code(tokens)?;
    Ok(format!("{GENERATED_NOTICE}{}", prettyplease::unparse(&file)))
}

/// Writes `contents` to `path` atomically: the bytes go to a sibling temp
/// file which is then renamed over the destination, so a crashed run never
/// leaves a half-written source file.
pub fn write_atomic(path: &Path, contents: &str) -> Result<(), GeneratorError> {
    let write_err = |source| GeneratorError::Write {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(write_err)?;
    }
    let tmp = path.with_extension("rs.tmp");
    fs::write(&tmp, contents).map_err(write_err)?;
    fs::rename(&tmp, path).map_err(write_err)?;
    Ok(())
}

/// Generates and writes every method file for `model` under `out_dir`:
/// one directory per interface, one `{Method}.rs` per method, both named
/// in PascalCase.
///
/// With `dry_run` set, everything is generated and validated but nothing
/// touches the filesystem. Any emission or write failure aborts the run.
pub fn generate_and_write_all(
    model: &ApiModel,
    out_dir: &Path,
    dry_run: bool,
) -> Result<GenerationSummary, GeneratorError> {
    let mut summary = GenerationSummary::default();
    for interface in model.interfaces.values() {
        let dir = out_dir.join(pascal_case(&interface.name));
        for method in interface.methods.values() {
            let (tokens, skipped) = codegen::generate_method_file(interface, method);
            for skip in &skipped {
                tracing::warn!(%skip, "skipping parameter with unmapped type");
            }
            summary.skipped_params.extend(skipped);

            let contents = format_code(&tokens)?;
            let path = dir.join(format!("{}.rs", pascal_case(&method.name)));
            tracing::debug!(path = %path.display(), "generated method file");
            if !dry_run {
                write_atomic(&path, &contents)?;
            }
            summary.files_written.push(path);
        }
    }
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{DuplicatePolicy, ingest};
    use quote::quote;
    use tempfile::TempDir;

    #[test]
    fn validate_accepts_well_formed_tokens() {
        let tokens = quote! {
            pub struct Empty {}
        };
        assert!(validate_code(&tokens).is_ok());
    }

    #[test]
    fn validate_rejects_broken_tokens() {
        let tokens = quote! { pub struct }; // incomplete item
        assert!(matches!(
            validate_code(&tokens),
            Err(GeneratorError::CodeGen(_))
        ));
    }

    #[test]
    fn format_prepends_generated_notice() {
        let tokens = quote! {
            pub struct Empty {}
        };
        let formatted = format_code(&tokens).unwrap();
        assert!(formatted.starts_with("// This code was automatically generated"));
        assert!(formatted.contains("pub struct Empty {}"));
    }

    #[test]
    fn write_atomic_creates_parent_dirs_and_leaves_no_temp() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("ISteamUser").join("GetFriendList.rs");
        write_atomic(&path, "pub struct X;\n").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "pub struct X;\n");
        assert!(!path.with_extension("rs.tmp").exists());
    }

    #[test]
    fn dry_run_generates_but_writes_nothing() {
        let doc = r#"{"apilist":{"interfaces":[{"name":"ISteamApps","methods":[
            {"name":"GetAppList","version":2,"httpmethod":"GET","parameters":[]}
        ]}]}}"#;
        let model =
            ApiModel::build(&ingest(doc).unwrap(), DuplicatePolicy::default()).unwrap();
        let dir = TempDir::new().unwrap();
        let summary = generate_and_write_all(&model, dir.path(), true).unwrap();
        assert_eq!(summary.files_written.len(), 1);
        assert!(!summary.files_written[0].exists());
    }

    #[test]
    fn layout_is_one_dir_per_interface_one_file_per_method() {
        let doc = r#"{"apilist":{"interfaces":[{"name":"ISteamApps","methods":[
            {"name":"get_app_list","version":2,"httpmethod":"GET","parameters":[]}
        ]}]}}"#;
        let model =
            ApiModel::build(&ingest(doc).unwrap(), DuplicatePolicy::default()).unwrap();
        let dir = TempDir::new().unwrap();
        let summary = generate_and_write_all(&model, dir.path(), false).unwrap();
        let expected = dir.path().join("ISteamApps").join("GetAppList.rs");
        assert_eq!(summary.files_written, vec![expected.clone()]);
        let contents = fs::read_to_string(expected).unwrap();
        assert!(contents.contains("pub struct GetAppListV2"));
    }
}
