//! # Viewer Errors
//!
//! Error types for asset loading, prompt validation and export.

use config::constants::VALIDATION_MESSAGE;
use thiserror::Error;
use tiptop_mesh::MeshError;

use crate::sequencer::PromptField;

/// Failure to obtain the raw bytes of an asset.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// The host answered with a non-success status.
    #[error("Fetching {path} failed with status {status}")]
    Status { path: String, status: u16 },

    /// Nothing is stored under the path.
    #[error("Asset not found: {path}")]
    NotFound { path: String },

    /// Transport or filesystem failure.
    #[error("Fetching {path} failed: {message}")]
    Network { path: String, message: String },
}

impl FetchError {
    /// Creates a transport error for `path`.
    pub fn network(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Network {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// Reason an asset degraded to a placeholder.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AssetError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error("Decoding failed: {0}")]
    Decode(#[from] MeshError),
}

/// A prompt answer was left empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Missing answer for {field}")]
    MissingAnswer { field: PromptField },
}

impl ValidationError {
    /// Blocking message shown to the user.
    pub fn alert_message(&self) -> &'static str {
        VALIDATION_MESSAGE
    }
}

/// Failure while producing or delivering the export file.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ExportError {
    #[error("Encoding failed: {0}")]
    Encode(#[from] MeshError),

    /// The host could not deliver the file.
    #[error("Download failed: {0}")]
    Sink(String),
}

/// Errors surfaced by [`crate::ViewerContext`] operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ViewerError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Export(#[from] ExportError),
}
