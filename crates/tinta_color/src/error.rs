//! Color error types

use thiserror::Error;

/// Errors produced by the color model
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ColorError {
    /// The input matched none of the supported color syntaxes
    #[error("Invalid color format: {0:?}")]
    InvalidColorFormat(String),
}

/// Result type for color operations
pub type Result<T> = std::result::Result<T, ColorError>;
