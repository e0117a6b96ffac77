//! Generation error types.

use thiserror::Error;

/// Errors raised by the generation layer.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GenerateError {
    /// A pool lookup used a style id no generator was registered for
    #[error("no generator registered for style \"{0}\"")]
    UnknownStyle(String),
}
