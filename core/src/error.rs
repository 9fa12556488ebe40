//! Error types for the petstore client.
//!
//! `NotFound` gets its own variant because an update against a vanished
//! record is the one failure a caller may want to tell apart. Everything else
//! non-2xx lands in `HttpError` with the raw status and body.

use thiserror::Error;

/// Errors returned by `PetstoreClient` build/parse methods and by hosts that
/// fail to complete a round-trip.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server returned 404.
    #[error("resource not found")]
    NotFound,

    /// The server returned a non-2xx status other than 404.
    #[error("HTTP {status}: {body}")]
    HttpError { status: u16, body: String },

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    DeserializationError(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    SerializationError(String),

    /// The host could not complete the round-trip at all.
    #[error("transport failed: {0}")]
    TransportError(String),
}

/// A status string outside `available`, `pending`, `sold`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown pet status `{0}`")]
pub struct ParseStatusError(pub String);

/// Failure to load a `ClientConfig`.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("base path must not be empty")]
    EmptyBasePath,
}
