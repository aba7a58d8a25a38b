//! Error types for the API client.

/// Errors that can occur when talking to the TeamCity REST API.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// An HTTP request failed (network error, timeout, or malformed URL).
    #[error("Request failed")]
    RequestFailed,
    /// The server returned a non-success status with a body snippet.
    #[error("Request failed with status {status}")]
    HttpStatus { status: u16, body: String },
    /// The response body did not match the expected shape.
    #[error("Unexpected response body")]
    InvalidResponse,
    /// The server-reported result count is not an integer.
    #[error("Invalid result count {0:?}")]
    InvalidCount(String),
    /// No TeamCity host was configured.
    #[error("TeamCity host is not configured")]
    MissingHost,
    /// The underlying HTTP client could not be constructed.
    #[error("Failed to build HTTP client")]
    ClientBuild,
}
