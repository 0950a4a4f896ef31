//! Error types for the API client.

/// Errors that can occur when fetching a JSON resource.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The request could not be sent or the body could not be read.
    #[error("Request failed")]
    RequestFailed,
    /// The server returned a non-success status with a body snippet.
    #[error("Request failed with status {status}")]
    HttpStatus { status: u16, body: String },
    /// The body was not valid JSON for the expected shape.
    #[error("Failed to decode response: {message}")]
    Decode { message: String },
    /// A base URL or path did not form a valid URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}
