//! # Error Types
//!
//! This module defines error types used throughout the recibo library.

use thiserror::Error;

/// Main error type for recibo operations
#[derive(Debug, Error)]
pub enum ReciboError {
    /// Image has a zero width or height and cannot be encoded
    #[error("Invalid image: {width}x{height}")]
    InvalidImage { width: u32, height: u32 },

    /// Dimensions that do not fit the command's header fields
    #[error("Unsupported dimensions: {0}")]
    UnsupportedDimensions(String),

    /// Symbol (QR) or markup encoding failure
    #[error("Encoding error: {0}")]
    Encoding(String),

    /// Transport-level errors (connection, device setup)
    #[error("Transport error: {0}")]
    Transport(String),

    /// Image decoding error
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    /// JSON label parsing error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error wrapper
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience alias used across the crate.
pub type Result<T> = std::result::Result<T, ReciboError>;
