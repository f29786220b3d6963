use std::time::Duration;

use crate::error::WebApiError;
use crate::params::Parameters;
use crate::{PARTNER_HOST, PUBLIC_HOST};

/// Steam Web API keys are 32 hex characters.
const KEY_LEN: usize = 32;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

/// An endpoint-bound HTTP client for the Steam Web API.
///
/// A connection is immutable once constructed: the key, the endpoint and the
/// partner flag are fixed at creation time. Generated transmission functions
/// borrow a connection and never mutate it, so one connection can serve any
/// number of concurrent calls.
#[derive(Debug, Clone)]
pub struct Connection {
    key: String,
    partner: bool,
    secure: bool,
    client: reqwest::Client,
    base_uri: String,
}

impl Connection {
    /// Creates a connection to the public or partner endpoint.
    ///
    /// ## Arguments
    ///
    /// * `key` - Web API key, or empty for keyless calls
    /// * `secure` - use HTTPS for the public endpoint
    /// * `partner` - use the partner endpoint, which forces HTTPS and
    ///   requires the key on every call
    pub fn new(key: &str, secure: bool, partner: bool) -> Self {
        // Partner traffic is HTTPS-only regardless of what was asked for.
        let secure = secure || partner;
        let scheme = if secure { "https" } else { "http" };
        let host = if partner { PARTNER_HOST } else { PUBLIC_HOST };
        Self {
            key: key.to_string(),
            partner,
            secure,
            client: Self::build_client(),
            base_uri: format!("{scheme}://{host}/"),
        }
    }

    /// Creates a connection against an arbitrary base URI. Used by tests to
    /// point generated code at a local mock server.
    pub fn with_base_uri(key: &str, base_uri: &str) -> Self {
        let base_uri = if base_uri.ends_with('/') {
            base_uri.to_string()
        } else {
            format!("{base_uri}/")
        };
        Self {
            key: key.to_string(),
            partner: false,
            secure: false,
            client: Self::build_client(),
            base_uri,
        }
    }

    fn build_client() -> reqwest::Client {
        reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_default()
    }

    /// True when this connection targets the partner endpoint.
    pub fn is_partner(&self) -> bool {
        self.partner
    }

    /// True when this connection uses HTTPS.
    pub fn is_secure(&self) -> bool {
        self.secure
    }

    /// True when a plausible API key is configured.
    pub fn has_key(&self) -> bool {
        self.key.len() == KEY_LEN
    }

    /// Base URI this connection resolves paths against.
    pub fn base_uri(&self) -> &str {
        &self.base_uri
    }

    /// Transmits a GET request for `path`, returning the raw response body.
    ///
    /// ## Arguments
    ///
    /// * `path` - interface/method/version path, e.g.
    ///   `"ISteamUser/GetPlayerSummaries/v2/"`
    /// * `params` - collected request parameters
    /// * `require_key` - inject the API key before sending
    ///
    /// ## Errors
    ///
    /// [`WebApiError::Http`] when the request fails to send,
    /// [`WebApiError::Status`] on a non-success response.
    pub async fn get(
        &self,
        path: &str,
        mut params: Parameters,
        require_key: bool,
    ) -> Result<Vec<u8>, WebApiError> {
        if require_key || self.partner {
            params.set_key(&self.key);
        }
        let query = params.encode();
        let uri = if query.is_empty() {
            format!("{}{path}", self.base_uri)
        } else {
            format!("{}{path}?{query}", self.base_uri)
        };
        tracing::debug!(%uri, "GET");
        let response = self.client.get(&uri).send().await?;
        Self::read_body(response).await
    }

    /// Transmits a POST request for `path` with the parameters form-encoded
    /// in the body, returning the raw response body.
    ///
    /// Key handling and errors match [`Connection::get`].
    pub async fn post(
        &self,
        path: &str,
        mut params: Parameters,
        require_key: bool,
    ) -> Result<Vec<u8>, WebApiError> {
        if require_key || self.partner {
            params.set_key(&self.key);
        }
        let uri = format!("{}{path}", self.base_uri);
        tracing::debug!(%uri, "POST");
        let response = self
            .client
            .post(&uri)
            .header("Content-Type", "application/x-www-form-urlencoded")
            .body(params.encode())
            .send()
            .await?;
        Self::read_body(response).await
    }

    async fn read_body(response: reqwest::Response) -> Result<Vec<u8>, WebApiError> {
        let status = response.status();
        let bytes = response.bytes().await?;
        if !status.is_success() {
            return Err(WebApiError::Status {
                status: status.as_u16(),
                body: String::from_utf8_lossy(&bytes).into_owned(),
            });
        }
        Ok(bytes.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partner_forces_https() {
        let conn = Connection::new("", false, true);
        assert!(conn.is_secure());
        assert!(conn.is_partner());
        assert_eq!(conn.base_uri(), "https://partner.steam-api.com/");
    }

    #[test]
    fn public_endpoint_honors_scheme() {
        let insecure = Connection::new("", false, false);
        assert_eq!(insecure.base_uri(), "http://api.steampowered.com/");
        let secure = Connection::new("", true, false);
        assert_eq!(secure.base_uri(), "https://api.steampowered.com/");
    }

    #[test]
    fn has_key_checks_length() {
        assert!(Connection::new("0123456789abcdef0123456789abcdef", true, false).has_key());
        assert!(!Connection::new("", true, false).has_key());
        assert!(!Connection::new("short", true, false).has_key());
    }

    #[test]
    fn with_base_uri_appends_trailing_slash() {
        let conn = Connection::with_base_uri("", "http://127.0.0.1:9000");
        assert_eq!(conn.base_uri(), "http://127.0.0.1:9000/");
        let already = Connection::with_base_uri("", "http://127.0.0.1:9000/");
        assert_eq!(already.base_uri(), "http://127.0.0.1:9000/");
    }
}
