//! Schema acquisition: from the live service or from a local file.

use std::fs;
use std::path::{Path, PathBuf};

use steam_webapi_core::{Connection, Parameters};

use crate::errors::GeneratorError;

/// Path of the self-describing schema endpoint.
pub const SUPPORTED_API_LIST_PATH: &str = "ISteamWebAPIUtil/GetSupportedAPIList/v1/";

/// Where the schema document comes from.
#[derive(Debug, Clone)]
pub enum SchemaSource {
    /// Fetch from the endpoint the connection is bound to. Keyed fetches
    /// get a larger method list from the service.
    Remote(EndpointConfig),
    /// Read a previously saved document.
    File(PathBuf),
}

/// Endpoint selection for remote fetches and nothing else; one immutable
/// value threaded from the command line, never global state.
#[derive(Debug, Clone)]
pub struct EndpointConfig {
    pub key: String,
    pub secure: bool,
    pub partner: bool,
}

impl EndpointConfig {
    pub fn connection(&self) -> Connection {
        Connection::new(&self.key, self.secure, self.partner)
    }

    /// Whether a fetch should attach the key: any non-empty key is sent,
    /// even one of unexpected length.
    fn sends_key(&self) -> bool {
        !self.key.is_empty()
    }
}

impl SchemaSource {
    /// Produces the raw schema JSON.
    ///
    /// ## Errors
    ///
    /// [`GeneratorError::Fetch`] for transport failures,
    /// [`GeneratorError::ReadSchema`] when the local file cannot be read.
    pub async fn load(&self) -> Result<String, GeneratorError> {
        match self {
            Self::Remote(endpoint) => {
                let conn = endpoint.connection();
                // The key is optional here; sending one unlocks the
                // key-gated portion of the method list.
                if endpoint.sends_key() && !conn.has_key() {
                    tracing::warn!("API key is not 32 characters, sending it anyway");
                }
                let body = conn
                    .get(SUPPORTED_API_LIST_PATH, Parameters::new(), endpoint.sends_key())
                    .await?;
                Ok(String::from_utf8_lossy(&body).into_owned())
            }
            Self::File(path) => read_schema_file(path),
        }
    }
}

fn read_schema_file(path: &Path) -> Result<String, GeneratorError> {
    fs::read_to_string(path).map_err(|source| GeneratorError::ReadSchema {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn file_source_reads_document() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(br#"{"apilist":{"interfaces":[]}}"#).unwrap();
        let source = SchemaSource::File(file.path().to_path_buf());
        let doc = block_on(source.load()).unwrap();
        assert!(doc.contains("apilist"));
    }

    #[test]
    fn any_nonempty_key_is_sent() {
        let keyless = EndpointConfig {
            key: String::new(),
            secure: true,
            partner: false,
        };
        assert!(!keyless.sends_key());

        let short = EndpointConfig {
            key: "abc".to_string(),
            secure: true,
            partner: false,
        };
        assert!(short.sends_key());
        assert!(!short.connection().has_key());

        let full = EndpointConfig {
            key: "0123456789abcdef0123456789abcdef".to_string(),
            secure: true,
            partner: false,
        };
        assert!(full.sends_key());
        assert!(full.connection().has_key());
    }

    #[test]
    fn missing_file_reports_path() {
        let source = SchemaSource::File(PathBuf::from("/nonexistent/schema.json"));
        let err = block_on(source.load()).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/schema.json"));
    }

    fn block_on<F: std::future::Future>(fut: F) -> F::Output {
        tokio::runtime::Builder::new_current_thread()
            .build()
            .unwrap()
            .block_on(fut)
    }
}
