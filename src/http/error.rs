//! Error types for HTTP client operations.

use thiserror::Error;

/// Errors that can occur while talking to the open-chat API.
///
/// The variants separate the distinct failure stages of a request:
///
/// - **Network errors**: [`RequestFailed`](HttpError::RequestFailed),
///   [`MiddlewareError`](HttpError::MiddlewareError)
/// - **Protocol errors**: [`ServerError`](HttpError::ServerError) for any
///   non-success HTTP status
/// - **Client errors**: [`UrlError`](HttpError::UrlError),
///   [`JsonError`](HttpError::JsonError)
/// - **Mapping errors**: [`MappingError`](HttpError::MappingError) when a
///   successful response does not match the expected structure; this always
///   occurs strictly after a successful HTTP exchange
#[derive(Debug, Error)]
pub enum HttpError {
    /// The HTTP request failed due to a network or connection error.
    #[error("Request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    /// An error occurred in the HTTP middleware layer.
    #[error("Middleware error: {0}")]
    MiddlewareError(#[from] reqwest_middleware::Error),

    /// The server returned a non-success HTTP status code.
    ///
    /// Contains both the status code and the response body for debugging.
    #[error("Server error {status}: {body}")]
    ServerError {
        status: reqwest::StatusCode,
        body: String,
    },

    /// Failed to parse or construct a URL.
    ///
    /// Occurs when joining the base URL with an endpoint path produces an
    /// invalid URL.
    #[error("URL parse error: {0}")]
    UrlError(#[from] url::ParseError),

    /// Failed to serialize a request payload or decode a response body as JSON.
    #[error("JSON serialization error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// A successful JSON response did not match the expected typed structure.
    ///
    /// Distinct from [`JsonError`](HttpError::JsonError): the response body
    /// was valid JSON and the HTTP exchange succeeded, but the shape did not
    /// satisfy the target type.
    #[error("Response does not match {target}: {source}")]
    MappingError {
        /// Name of the type the response was decoded into.
        target: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

/// Errors raised while filling session authentication headers.
///
/// These never cross the dispatcher boundary: the header chain recovers them
/// locally by substituting baseline headers. The platform gives no way to
/// tell "no session available" apart from "session present but invalid", so
/// both conditions take the same fallback path.
#[derive(Debug, Error)]
pub enum AuthError {
    /// No session context is available, or the current one is unusable.
    #[error("no usable session")]
    NoSession,

    /// The session credentials cannot be encoded into a request header.
    #[error("session credentials are not usable: {0}")]
    InvalidCredentials(String),
}
