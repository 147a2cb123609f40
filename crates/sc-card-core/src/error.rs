use thiserror::Error;

/// Failure to decode the host-supplied variants attribute.
///
/// Never fatal: callers log it and fall back to an empty variant list, so the
/// card degrades to a disabled button rather than aborting construction.
#[derive(Debug, Error)]
pub enum SerializationError {
    #[error("variants attribute is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Parsed fine, but the top-level value is not an array.
    #[error("variants attribute must be a JSON array, found {0}")]
    NotAnArray(&'static str),
}
