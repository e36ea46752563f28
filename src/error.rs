//! Error types for the site engine

use thiserror::Error;

/// Result type alias for engine operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in the site engine
///
/// Note what is deliberately *not* here: asset-URL resolution never fails
/// (it yields the configured placeholder instead), and an image decode
/// failure is a state transition on [`crate::images::AdaptiveImage`], not an
/// `Err`.
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// A user action was rejected by a precondition
    #[error("Validation failed: {0}")]
    Validation(String),

    /// The blob-store upload handshake or byte transfer failed
    #[error("Upload failed: {0}")]
    Upload(String),

    /// Network error
    #[error("Network error: {0}")]
    Network(String),

    /// Failed to render a section or page
    #[error("Rendering failed: {0}")]
    Render(String),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Other(format!("Serialization failed: {}", err))
    }
}
