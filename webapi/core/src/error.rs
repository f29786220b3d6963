use thiserror::Error;

/// Errors surfaced by [`crate::Connection`] transmissions.
#[derive(Error, Debug)]
pub enum WebApiError {
    /// The request could not be sent or the response body could not be read.
    #[error("HTTP transport error: {0}")]
    Http(#[from] reqwest::Error),

    /// The service answered with a non-success status.
    #[error("Steam Web API returned status {status}: {body}")]
    Status {
        /// HTTP status code of the response.
        status: u16,
        /// Response body, decoded lossily for the message.
        body: String,
    },
}
