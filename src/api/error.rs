/// The ways a call to the remote expense API can fail.
///
/// These are never shown to the user directly. Route handlers log them and
/// convert them into one of the user-facing [crate::Error] variants.
#[derive(Debug, Clone, thiserror::Error, PartialEq)]
pub enum ApiError {
    /// The configured base URL cannot be used to build endpoint URLs.
    #[error("invalid API base URL \"{0}\"")]
    InvalidUrl(String),

    /// The request could not be sent or the response could not be read.
    #[error("request to {endpoint} failed: {message}")]
    Transport {
        /// The endpoint that was called, e.g. "/login".
        endpoint: &'static str,
        /// The error reported by the HTTP client.
        message: String,
    },

    /// The API responded with a non-success status code.
    #[error("{endpoint} responded with status {status}")]
    Status {
        /// The endpoint that was called, e.g. "/login".
        endpoint: &'static str,
        /// The HTTP status code of the response.
        status: u16,
    },

    /// The response body was not the expected JSON.
    #[error("could not decode the response from {endpoint}: {message}")]
    Decode {
        /// The endpoint that was called, e.g. "/login".
        endpoint: &'static str,
        /// The error reported by the JSON decoder.
        message: String,
    },
}
