//! Error types for the Wallgrid plugin.
//!
//! This module defines the centralized error type [`WallgridError`] and a type alias
//! [`Result`] for convenient error handling throughout the plugin. All errors are
//! implemented using the `thiserror` crate for automatic `Error` trait implementation.
//!
//! None of these errors is fatal to a gallery session: the event handler turns
//! fetch failures into a visible status message and store failures into silent
//! defaults.

use thiserror::Error;

/// The main error type for Wallgrid plugin operations.
///
/// Consolidates all error conditions that can occur during plugin execution, from
/// key-value store access to search response decoding and configuration issues.
///
/// # Examples
///
/// ```
/// use wallgrid::WallgridError;
///
/// fn validate_api_url(url: &str) -> Result<(), WallgridError> {
///     if url.is_empty() {
///         return Err(WallgridError::Config("api_url must not be empty".to_string()));
///     }
///     Ok(())
/// }
///
/// assert!(validate_api_url("").is_err());
/// ```
#[derive(Debug, Error)]
pub enum WallgridError {
    /// Key-value store operation failed.
    ///
    /// Occurs when the persisted store cannot be opened, read, or written.
    #[error("Storage error: {0}")]
    Storage(String),

    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON encoding or decoding failed.
    ///
    /// Raised for malformed search responses and corrupt persisted blobs.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Theme file could not be read or parsed.
    #[error("Theme error: {0}")]
    Theme(String),

    /// Outbound search request failed.
    ///
    /// Covers URL construction errors, transport failures reported by the host,
    /// and non-success HTTP status codes.
    #[error("Request error: {0}")]
    Request(String),

    /// Configuration is invalid or missing.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// A specialized `Result` type for Wallgrid operations.
pub type Result<T> = std::result::Result<T, WallgridError>;
