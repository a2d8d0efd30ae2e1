//! Error types shared by the whole scanning pipeline

use thiserror::Error;

/// Errors surfaced by the circle scanning pipeline
///
/// Finding no circles is never an error; it is an empty result.
#[derive(Debug, Error)]
pub enum CircleError {
    /// A caller-supplied parameter violates a precondition
    #[error("invalid input: {0}")]
    InvalidInput(String),
    /// The image cannot be decoded or converted to grayscale
    #[error("invalid image: {0}")]
    InvalidImage(String),
    /// The annotated image could not be encoded
    #[error("failed to encode annotated image: {0}")]
    Encode(String),
}

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, CircleError>;

impl From<image::ImageError> for CircleError {
    fn from(err: image::ImageError) -> Self {
        CircleError::InvalidImage(err.to_string())
    }
}
