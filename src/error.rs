use thiserror::Error;

/// Errors produced by the local detection pipeline.
#[derive(Debug, Error)]
pub enum DetectError {
    /// Malformed or unreadable input image.
    #[error("invalid input image: {0}")]
    InvalidInput(String),

    /// Model output does not match the configured stride set / class count.
    #[error("unexpected model output shape: {0}")]
    OutputShape(String),

    /// Resize or tensor construction failure.
    #[error("image processing failed: {0}")]
    Processing(String),

    #[error("inference backend error: {0}")]
    Backend(#[from] ort::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Errors produced by the remote-data helpers. These are always logged at the
/// failure site and returned as values, never panicked on.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Non-200 response (or transport failure) from the token endpoint.
    #[error("authorization failed: {0}")]
    Authorization(String),

    /// Non-200 response (or transport failure) from the content endpoint.
    #[error("failed to retrieve content for session {session_id}: {reason}")]
    ContentRetrieval { session_id: String, reason: String },

    /// Blob fetch failure, including unparseable blob paths.
    #[error("failed to download blob {path}: {reason}")]
    BlobDownload { path: String, reason: String },

    /// Downloaded bytes are not a decodable image.
    #[error("failed to decode image {path}: {reason}")]
    ImageDecode { path: String, reason: String },
}
