//! Error types for extraction and reconstruction

use thiserror::Error;

/// Errors that can occur while capturing a page or rebuilding a scene
#[derive(Debug, Error)]
pub enum ConvertError {
    /// Failed to launch the browser
    #[error("Failed to launch browser: {0}")]
    LaunchFailed(String),

    /// Failed to connect to an existing browser
    #[error("Failed to connect to browser: {0}")]
    ConnectionFailed(String),

    /// Tab operation failed (no active tab, tab closed, etc.)
    #[error("Tab operation failed: {0}")]
    TabOperationFailed(String),

    /// Navigation failed or timed out
    #[error("Navigation failed: {0}")]
    NavigationFailed(String),

    /// Capturing or parsing the render snapshot failed
    #[error("Failed to capture render snapshot: {0}")]
    SnapshotFailed(String),

    /// The active surface has nothing visible to extract
    #[error("No visible surface to extract")]
    EmptySurface,

    /// The import payload did not parse as a canonical node tree
    #[error("Malformed import payload: {0}")]
    MalformedPayload(#[from] serde_json::Error),
}

/// Result type alias using ConvertError
pub type Result<T> = std::result::Result<T, ConvertError>;
